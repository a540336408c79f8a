use thiserror::Error;

/// Errors produced while obtaining a quote from the webhook.
///
/// All variants are recoverable: the controller turns them into a single
/// error transcript entry and returns to idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, body: String },

    #[error("invalid data format: {0}")]
    MalformedPayload(String),
}

impl QuoteError {
    /// Status code for `HttpStatus`, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from key-value persistence (used by the `KvStore` port in wisetalk-core).
///
/// Never surfaced to the user; callers log and degrade.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
