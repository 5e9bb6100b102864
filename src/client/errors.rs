use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures a resource operation can surface to a screen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Transport-level failure, no response was received. Never retried
    /// automatically; retrying is a user action.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx HTTP response. `message` carries the server-supplied text
    /// when the body had one, otherwise it is empty and the caller picks a
    /// per-operation fallback.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Client-side pre-submit validation failure. Never reaches the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// The response arrived but its body did not match the wire contract.
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<TypeConstraintError> for ClientError {
    fn from(err: TypeConstraintError) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
