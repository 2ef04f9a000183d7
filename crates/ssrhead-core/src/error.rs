//! Shared error type across ssrhead crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Metadata failed validation.
    InvalidMetadata,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::InvalidMetadata => "INVALID_METADATA",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HeadError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HeadError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HeadError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HeadError::BadRequest(_) => ClientCode::BadRequest,
            HeadError::UnsupportedVersion(_) => ClientCode::UnsupportedVersion,
            HeadError::InvalidMetadata(_) => ClientCode::InvalidMetadata,
            HeadError::Internal(_) => ClientCode::Internal,
        }
    }
}
