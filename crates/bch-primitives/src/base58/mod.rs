//! Base58 and Base58Check encoding.
//!
//! Legacy addresses are `Base58Check(version || hash160)`: a single version
//! byte selecting network and address type, the 20-byte hash, and a 4-byte
//! SHA-256d checksum.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Length of the Base58Check checksum suffix.
const CHECKSUM_LEN: usize = 4;

/// Encode bytes with the Bitcoin Base58 alphabet.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string; leading '1' characters become zero bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Append the 4-byte SHA-256d checksum to `data` and Base58-encode it.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut buf = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&buf)
}

/// Decode a Base58Check string and verify its checksum.
///
/// Returns the payload with the checksum stripped.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum != &sha256d(payload)[..CHECKSUM_LEN] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

/// Base58Check-encode `payload` behind a single version byte.
pub fn encode_versioned(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    check_encode(&data)
}

/// Decode a Base58Check string into its version byte and payload.
pub fn decode_versioned(s: &str) -> Result<(u8, Vec<u8>), PrimitivesError> {
    let data = check_decode(s)?;
    match data.split_first() {
        Some((version, payload)) => Ok((*version, payload.to_vec())),
        None => Err(PrimitivesError::InvalidBase58("missing version byte".to_string())),
    }
}
