//! CashAddr encoding and decoding.
//!
//! A CashAddr string is `prefix:payload`, where the payload is the base32
//! encoding of `version_byte || hash` followed by a 40-bit polymod checksum
//! computed over the prefix as well. The prefix may be omitted when the
//! caller already knows which one to verify the checksum against.
//!
//! The version byte packs the hash kind (bits 3-6) and the hash size
//! (bits 0-2); bit 7 is reserved and must be zero.

use std::fmt;

use bech32::Fe32;

use crate::PrimitivesError;

/// Number of 5-bit groups in the checksum.
const CHECKSUM_LEN: usize = 8;

/// Polymod generator constants.
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Hash sizes indexed by the 3-bit size field of the version byte.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// The kind of hash carried in a CashAddr payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Pay-to-public-key-hash (type bits 0).
    PubKeyHash,
    /// Pay-to-script-hash (type bits 1).
    ScriptHash,
}

impl HashKind {
    fn type_bits(self) -> u8 {
        match self {
            HashKind::PubKeyHash => 0,
            HashKind::ScriptHash => 1,
        }
    }

    fn from_type_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(HashKind::PubKeyHash),
            1 => Some(HashKind::ScriptHash),
            _ => None,
        }
    }
}

/// A decoded CashAddr: the prefix it was verified against, the hash kind
/// and the raw hash bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CashAddrPayload {
    /// Lowercase human-readable prefix, e.g. `bitcoincash`.
    pub prefix: String,
    /// Whether the hash is a public key hash or a script hash.
    pub kind: HashKind,
    /// The hash bytes (20 bytes for every standard address).
    pub hash: Vec<u8>,
}

impl fmt::Display for CashAddrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode(&self.prefix, self.kind, &self.hash) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Encode `hash` as a prefixed CashAddr string.
///
/// The output is always lowercase. Fails if the hash length is not one of
/// the sizes the version byte can express.
pub fn encode(prefix: &str, kind: HashKind, hash: &[u8]) -> Result<String, PrimitivesError> {
    let size_bits = HASH_SIZES
        .iter()
        .position(|&len| len == hash.len())
        .ok_or_else(|| {
            PrimitivesError::InvalidCashAddr(format!("unsupported hash length {}", hash.len()))
        })? as u8;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
        return Err(PrimitivesError::InvalidCashAddr(format!("invalid prefix '{}'", prefix)));
    }

    let mut data = Vec::with_capacity(1 + hash.len());
    data.push((kind.type_bits() << 3) | size_bits);
    data.extend_from_slice(hash);

    let mut groups = to_base32(&data)?;
    let checksum = checksum(prefix, &groups)?;
    groups.extend_from_slice(&checksum);

    let mut out = String::with_capacity(prefix.len() + 1 + groups.len());
    out.push_str(prefix);
    out.push(':');
    out.extend(groups.iter().map(|fe| fe.to_char()));
    Ok(out)
}

/// Decode a CashAddr string that carries an explicit `prefix:` part.
pub fn decode(address: &str) -> Result<CashAddrPayload, PrimitivesError> {
    let lower = normalize_case(address)?;
    match lower.split_once(':') {
        Some((prefix, payload)) => decode_parts(prefix, payload),
        None => Err(PrimitivesError::InvalidCashAddr(format!(
            "missing prefix in '{}'",
            address
        ))),
    }
}

/// Decode a CashAddr string, verifying a bare payload against `prefix`.
///
/// If `address` carries its own prefix, that prefix must equal `prefix`.
pub fn decode_with_prefix(address: &str, prefix: &str) -> Result<CashAddrPayload, PrimitivesError> {
    let lower = normalize_case(address)?;
    let (found, payload) = match lower.split_once(':') {
        Some((found, payload)) => (found, payload),
        None => (prefix, lower.as_str()),
    };
    if found != prefix {
        return Err(PrimitivesError::InvalidCashAddr(format!(
            "prefix mismatch: expected {}, got {}",
            prefix, found
        )));
    }
    decode_parts(found, payload)
}

/// Reject mixed-case input and fold the rest to lowercase.
fn normalize_case(address: &str) -> Result<String, PrimitivesError> {
    let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(PrimitivesError::InvalidCashAddr("mixed case".to_string()));
    }
    Ok(address.to_ascii_lowercase())
}

fn decode_parts(prefix: &str, payload: &str) -> Result<CashAddrPayload, PrimitivesError> {
    if prefix.is_empty() {
        return Err(PrimitivesError::InvalidCashAddr("empty prefix".to_string()));
    }
    if payload.len() <= CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidCashAddr("payload too short".to_string()));
    }

    let groups = payload
        .chars()
        .map(|c| {
            Fe32::from_char(c)
                .map_err(|_| PrimitivesError::InvalidCashAddr(format!("invalid character '{}'", c)))
        })
        .collect::<Result<Vec<Fe32>, _>>()?;

    if polymod(&expanded(prefix, &groups)) != 0 {
        return Err(PrimitivesError::ChecksumMismatch);
    }

    let data = from_base32(&groups[..groups.len() - CHECKSUM_LEN])?;
    let (&version, hash) = data
        .split_first()
        .ok_or_else(|| PrimitivesError::InvalidCashAddr("empty payload".to_string()))?;

    if version & 0x80 != 0 {
        return Err(PrimitivesError::InvalidCashAddr("reserved version bit set".to_string()));
    }
    let kind = HashKind::from_type_bits((version >> 3) & 0x0f).ok_or_else(|| {
        PrimitivesError::InvalidCashAddr(format!("unknown address type in version {:#04x}", version))
    })?;
    let expected_len = HASH_SIZES[(version & 0x07) as usize];
    if hash.len() != expected_len {
        return Err(PrimitivesError::InvalidCashAddr(format!(
            "hash length {} does not match version size {}",
            hash.len(),
            expected_len
        )));
    }

    Ok(CashAddrPayload {
        prefix: prefix.to_string(),
        kind,
        hash: hash.to_vec(),
    })
}

/// Prefix (low 5 bits of each char), a zero separator, then the payload groups.
fn expanded(prefix: &str, groups: &[Fe32]) -> Vec<u8> {
    let mut values = Vec::with_capacity(prefix.len() + 1 + groups.len());
    values.extend(prefix.bytes().map(|b| b & 0x1f));
    values.push(0);
    values.extend(groups.iter().map(|fe| fe.to_u8()));
    values
}

fn checksum(prefix: &str, groups: &[Fe32]) -> Result<Vec<Fe32>, PrimitivesError> {
    let mut values = expanded(prefix, groups);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let modulus = polymod(&values);
    (0..CHECKSUM_LEN)
        .map(|i| field_element(((modulus >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8))
        .collect()
}

fn field_element(value: u8) -> Result<Fe32, PrimitivesError> {
    Fe32::try_from(value).map_err(|e| PrimitivesError::InvalidCashAddr(e.to_string()))
}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// Regroup bytes into 5-bit values, zero-padding the final group.
fn to_base32(data: &[u8]) -> Result<Vec<Fe32>, PrimitivesError> {
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity((data.len() * 8 + 4) / 5);
    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(field_element(((acc >> bits) & 0x1f) as u8)?);
        }
    }
    if bits > 0 {
        out.push(field_element(((acc << (5 - bits)) & 0x1f) as u8)?);
    }
    Ok(out)
}

/// Regroup 5-bit values into bytes; leftover padding must be short and zero.
fn from_base32(groups: &[Fe32]) -> Result<Vec<u8>, PrimitivesError> {
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity(groups.len() * 5 / 8);
    for group in groups {
        acc = ((acc << 5) | u32::from(group.to_u8())) & 0xfff;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return Err(PrimitivesError::InvalidCashAddr("invalid padding".to_string()));
    }
    Ok(out)
}
