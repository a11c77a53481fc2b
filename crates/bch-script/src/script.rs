//! Locking script type.
//!
//! `Script` wraps the raw bytes of an output script and knows how to build
//! and recognise the two templates a BCH address can stand for.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::chunk::{decode_script, push_data_prefix, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// A script, held as its serialized bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Parse a hex-encoded script.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str).map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Wrap a copy of raw script bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Parse space-separated ASM.
    ///
    /// Known opcode names are emitted as opcodes; every other token must be
    /// hex and becomes a minimal push.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut script = Script::new();
        for token in asm.split_whitespace() {
            if let Some(op) = string_to_opcode(token) {
                script.append_opcodes(&[op])?;
            } else {
                let data =
                    hex::decode(token).map_err(|_| ScriptError::InvalidAsmToken(token.to_string()))?;
                script.append_push_data(&data)?;
            }
        }
        Ok(script)
    }

    /// `OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG`
    pub fn new_p2pkh(hash: &[u8; 20]) -> Self {
        let mut bytes = Vec::with_capacity(25);
        bytes.extend_from_slice(&[OP_DUP, OP_HASH160, OP_DATA_20]);
        bytes.extend_from_slice(hash);
        bytes.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        Script(bytes)
    }

    /// `OP_HASH160 <hash> OP_EQUAL`
    pub fn new_p2sh(hash: &[u8; 20]) -> Self {
        let mut bytes = Vec::with_capacity(23);
        bytes.extend_from_slice(&[OP_HASH160, OP_DATA_20]);
        bytes.extend_from_slice(hash);
        bytes.push(OP_EQUAL);
        Script(bytes)
    }

    /// `OP_RETURN` followed by one push per part.
    pub fn new_data<T: AsRef<[u8]>>(parts: &[T]) -> Result<Self, ScriptError> {
        let mut script = Script(vec![OP_RETURN]);
        for part in parts {
            script.append_push_data(part.as_ref())?;
        }
        Ok(script)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Render as ASM. Falls back to an empty string if the script does not
    /// parse.
    pub fn to_asm(&self) -> String {
        match self.chunks() {
            Ok(chunks) => chunks
                .iter()
                .map(ScriptChunk::to_asm_string)
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pay-to-public-key-hash template.
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == 25
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Pay-to-script-hash template.
    pub fn is_p2sh(&self) -> bool {
        let b = &self.0;
        b.len() == 23 && b[0] == OP_HASH160 && b[1] == OP_DATA_20 && b[22] == OP_EQUAL
    }

    /// Provably unspendable data output (`OP_RETURN ...` or `OP_FALSE OP_RETURN ...`).
    pub fn is_data(&self) -> bool {
        let b = &self.0;
        (!b.is_empty() && b[0] == OP_RETURN)
            || (b.len() > 1 && b[0] == OP_FALSE && b[1] == OP_RETURN)
    }

    /// The 20-byte hash a P2PKH or P2SH script commits to.
    pub fn address_hash(&self) -> Option<[u8; 20]> {
        let range = if self.is_p2pkh() {
            3..23
        } else if self.is_p2sh() {
            2..22
        } else {
            return None;
        };
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&self.0[range]);
        Some(hash)
    }

    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    /// Append `data` with the shortest push prefix that fits it.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append bare opcodes. Push opcodes are rejected since they need data.
    pub fn append_opcodes(&mut self, opcodes: &[u8]) -> Result<(), ScriptError> {
        for &op in opcodes {
            if (OP_DATA_1..=OP_PUSHDATA4).contains(&op) {
                return Err(ScriptError::InvalidOpcodeType(opcode_to_string(op)));
            }
        }
        self.0.extend_from_slice(opcodes);
        Ok(())
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
