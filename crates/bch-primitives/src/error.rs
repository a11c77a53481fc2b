/// Unified error type for primitives operations.
///
/// Covers Base58/Base58Check decoding, CashAddr decoding and hex parsing.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid cashaddr: {0}")]
    InvalidCashAddr(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
