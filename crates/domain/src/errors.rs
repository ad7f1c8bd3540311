//! Classified errors returned by every API call
//!
//! Each failed call produces exactly one [`ApiError`]. The client never
//! retries on its own; callers inspect [`ApiError::kind`] and decide whether
//! to re-invoke, show a notification, or redirect to the login page.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Taxonomy label for an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Transport-level failure (DNS, connection refused, TLS)
    Network,
    /// The call's deadline elapsed before a response arrived
    Timeout,
    /// Malformed JSON, or a payload that does not match the expected type
    Parse,
    /// HTTP 422 carrying field-level validation detail
    Validation,
    /// Any other non-2xx response with a server-supplied message
    Api,
    /// Non-2xx response with no extractable message
    Unknown,
    /// The caller cancelled the call
    Cancelled,
    /// The client or request could not be constructed
    Config,
}

/// One failing field from a 422 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Location segments joined with `.` (e.g. `body.email`)
    pub path: String,
    pub message: String,
}

/// API operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Timeout { message: String, after: Duration },

    #[error("{0}")]
    Parse(String),

    #[error("{message}")]
    Validation { message: String, fields: Vec<FieldError> },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{message}")]
    Unknown { status: Option<u16>, message: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build a timeout error for `operation` (e.g. "OCR preview").
    ///
    /// `action` completes the sentence "taking too long to ..." and is
    /// `respond` for plain calls or `process` for server-side work.
    pub fn timeout(operation: &str, action: &str, after: Duration) -> Self {
        Self::Timeout {
            message: format!(
                "{operation} timeout — the server is taking too long to {action}"
            ),
            after,
        }
    }

    /// Get the taxonomy label for this error
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::Timeout { .. } => ApiErrorKind::Timeout,
            Self::Parse(_) => ApiErrorKind::Parse,
            Self::Validation { .. } => ApiErrorKind::Validation,
            Self::Api { .. } => ApiErrorKind::Api,
            Self::Unknown { .. } => ApiErrorKind::Unknown,
            Self::Cancelled => ApiErrorKind::Cancelled,
            Self::Config(_) => ApiErrorKind::Config,
        }
    }

    /// HTTP status attached to the error, when the server answered
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(crate::constants::VALIDATION_STATUS),
            Self::Api { status, .. } => Some(*status),
            Self::Unknown { status, .. } => *status,
            _ => None,
        }
    }

    /// Human-readable message suitable for a notification
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Parse(message) | Self::Config(message) => message,
            Self::Timeout { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. }
            | Self::Unknown { message, .. } => message,
            Self::Cancelled => "Request cancelled",
        }
    }

    /// Whether the server rejected the credential (pages redirect to login)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Whether re-invoking the same call might succeed.
    ///
    /// Informational only: nothing in this crate acts on it.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::Unknown { status, .. } => status.is_some_and(|s| s >= 500),
            _ => false,
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
