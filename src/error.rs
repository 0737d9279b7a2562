//! Error types for the Zekta Client SDK.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Zekta Client SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The proof backend rejected an identity secret.
    #[error("Invalid identity secret: {0}")]
    InvalidSecret(String),

    /// Input rejected before the request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx HTTP response from the service.
    ///
    /// `message` carries the server's structured `message`/`error` body field
    /// when one was present, otherwise the HTTP status text.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Identity, group or proof construction failed.
    #[error("Proof error: {0}")]
    Proof(String),

    /// Network/HTTP transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected schema.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// HTTP status code, if this is a service error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(format!("{:#}", err))
    }
}
