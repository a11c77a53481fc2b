/// Bitcoin Cash SDK - Hashing and address encoding primitives.
///
/// This crate is the bottom layer of the SDK:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Base58 and Base58Check encoding/decoding
/// - CashAddr encoding/decoding (prefix, type and hash payload)

pub mod hash;
pub mod base58;
pub mod cashaddr;

mod error;
pub use error::PrimitivesError;
pub use cashaddr::{CashAddrPayload, HashKind};
