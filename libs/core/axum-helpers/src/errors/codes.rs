//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer
//! for logs and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidArgument;
//! assert_eq!(code.as_str(), "INVALID_ARGUMENT");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request field failed validation
    InvalidArgument,

    /// Request body is not acceptable JSON
    InvalidJson,

    /// Path parameter could not be parsed
    InvalidPath,

    /// Query string could not be parsed
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    // Server errors (2000-2999)
    /// Operation or API version not implemented
    NotImplemented,

    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidPath => "INVALID_PATH",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArgument => 1001,
            Self::InvalidJson => 1002,
            Self::InvalidPath => 1003,
            Self::InvalidQuery => 1004,
            Self::NotFound => 1005,

            Self::NotImplemented => 2001,
            Self::InternalError => 2002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid request argument",
            Self::InvalidJson => "Request body is not valid JSON",
            Self::InvalidPath => "Invalid path parameter",
            Self::InvalidQuery => "Invalid query parameter",
            Self::NotFound => "The requested resource was not found",
            Self::NotImplemented => "Not implemented",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
