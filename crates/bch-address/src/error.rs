use crate::network::Network;

/// Error types for address decoding and conversion.
///
/// Every public operation either returns a value or one of these; there is
/// no fallback to a default address.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// The input matched none of the legacy, CashAddr or Hash160 decoders.
    #[error("unsupported address format: {0}")]
    UnsupportedAddressFormat(String),

    /// Well-formed Base58Check whose version byte is not in the version table.
    #[error("invalid version byte: {0:#04x}")]
    InvalidVersionByte(u8),

    /// Well-formed CashAddr whose prefix is not in the version table.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    /// Input rejected by the SLP address validity check.
    #[error("invalid BCH address: {0}")]
    InvalidAddress(String),

    /// Hash160 input that is not 40 hex characters.
    #[error("invalid hash160: {0}")]
    InvalidHash160(String),

    /// The version table has no row for this network.
    #[error("no version table entry for {0}")]
    MissingNetwork(Network),

    /// A format, network or type token that does not parse.
    #[error("unknown token: {0}")]
    UnknownToken(String),

    /// Error from the primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] bch_primitives::PrimitivesError),
}
