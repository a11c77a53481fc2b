//! Script chunk parsing and push-data encoding.
//!
//! A chunk is either a bare opcode or a data push carrying its bytes.

use crate::opcodes::*;
use crate::ScriptError;

/// One parsed element of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes) this is the length.
    pub op: u8,
    /// Pushed bytes, if this chunk is a push.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// ASM token: hex for pushes, the opcode name otherwise.
    pub fn to_asm_string(&self) -> String {
        match &self.data {
            Some(data) => hex::encode(data),
            None => opcode_to_string(self.op),
        }
    }
}

/// Decode raw script bytes into chunks.
///
/// Fails with `DataTooSmall` when a push runs past the end of the script.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];
        pos += 1;

        let length = match op {
            OP_DATA_1..=OP_DATA_75 => op as usize,
            OP_PUSHDATA1 => read_le(bytes, &mut pos, 1)?,
            OP_PUSHDATA2 => read_le(bytes, &mut pos, 2)?,
            OP_PUSHDATA4 => read_le(bytes, &mut pos, 4)?,
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                continue;
            }
        };

        let end = pos.checked_add(length).ok_or(ScriptError::DataTooSmall)?;
        let data = bytes.get(pos..end).ok_or(ScriptError::DataTooSmall)?;
        chunks.push(ScriptChunk {
            op,
            data: Some(data.to_vec()),
        });
        pos = end;
    }

    Ok(chunks)
}

/// Read a `width`-byte little-endian length at `pos` and advance past it.
fn read_le(bytes: &[u8], pos: &mut usize, width: usize) -> Result<usize, ScriptError> {
    let raw = bytes.get(*pos..*pos + width).ok_or(ScriptError::DataTooSmall)?;
    *pos += width;
    Ok(raw
        .iter()
        .rev()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize))
}

/// The minimal push prefix for a payload of `data_len` bytes.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= OP_DATA_75 as usize {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xff {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xffff {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xffff_ffff {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}
