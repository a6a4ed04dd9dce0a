//! Server error type and its protocol mapping

use image_placeholder_core::{ErrorKind, PlaceholderError};
use rmcp::ErrorData;
use thiserror::Error;

/// Error type for server operations
#[derive(Debug, Error)]
pub enum ServerError {
    /// Generation failed
    #[error(transparent)]
    Placeholder(#[from] PlaceholderError),

    /// The tracing subscriber could not be installed
    #[error("Logging setup error: {0}")]
    Logging(String),

    /// The stdio session failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Logging setup error with a message
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Transport error with a message
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Caller mistakes become `invalid_params`, everything else `internal_error`
impl From<ServerError> for ErrorData {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Placeholder(err) => {
                let data = Some(err.to_data());
                match err.kind() {
                    ErrorKind::Validation | ErrorKind::ProviderUnsupported => {
                        ErrorData::invalid_params(err.to_string(), data)
                    }
                    ErrorKind::Configuration | ErrorKind::Internal => {
                        ErrorData::internal_error(err.to_string(), data)
                    }
                }
            }
            other => ErrorData::internal_error(other.to_string(), None),
        }
    }
}
