//! Error types for reposcout.
//!
//! [`SearchError`] is the only error that reaches the output envelope. README
//! retrieval has its own [`ReadmeError`], which is always swallowed by the
//! best-effort wrapper in [`crate::readme`] and never converted.

use serde::Serialize;

/// Errors that abort a search and are reported in the failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The input parameters could not be parsed or are missing `keywords`.
    #[error("{0}")]
    Validation(String),

    /// The provider returned a non-success status, or the transport failed.
    #[error("{0}")]
    Api(String),

    /// Any other fault during orchestration.
    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    /// Classification written to the `error_type` field of the envelope.
    pub fn error_type(&self) -> ErrorType {
        match self {
            SearchError::Validation(_) => ErrorType::ValidationError,
            SearchError::Api(_) => ErrorType::ApiError,
            SearchError::Unexpected(_) => ErrorType::UnexpectedError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ValidationError,
    ApiError,
    UnexpectedError,
}

/// Reasons a README could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum ReadmeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("README is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for results carrying a [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;
