use bch_address::AddressError;

/// Error types for script operations.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An ASM token that is neither a known opcode nor hex data.
    #[error("invalid ASM token: {0}")]
    InvalidAsmToken(String),

    /// Push data opcodes must go through `append_push_data`.
    #[error("use append_push_data for push data opcode {0}")]
    InvalidOpcodeType(String),

    /// Not enough bytes left to complete a push.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data larger than a PUSHDATA4 can express.
    #[error("data too big")]
    DataTooBig,

    /// The script is not a P2PKH or P2SH locking script.
    #[error("unsupported output script: {0}")]
    UnsupportedScript(String),

    /// Address resolution failed.
    #[error("address error: {0}")]
    Address(#[from] AddressError),
}
