//! Error types for REST operations.

/// Errors that can occur when talking to the REST API.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Any non-2xx status other than 404.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Response body.
        message: String,
    },

    /// The server answered 404.
    #[error("not found")]
    NotFound,

    /// A transaction id that is not 64 hex digits.
    #[error("txid must be 64 hex digits: {0}")]
    InvalidTxid(String),
}
