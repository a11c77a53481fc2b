//! Hash function primitives.
//!
//! SHA-256d backs the Base58Check checksum; Hash160 is the 20-byte digest
//! carried by every address format (public key hash or script hash).

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute SHA-256(SHA-256(data)).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let digest = Ripemd160::digest(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&digest);
    output
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// This is the hash embedded in P2PKH addresses (over a serialized public
/// key) and P2SH addresses (over a redeem script).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}
