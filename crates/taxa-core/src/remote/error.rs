use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a validation-error payload (`detail` as a list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
}

/// Errors surfaced by backend calls.
///
/// The two rejected variants mirror the backend's `detail` payload shapes:
/// a list of field errors from request validation, or a single message.
/// Transport failures never carry server detail; callers show their
/// localized connection-error string instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request rejected by validation")]
    Validation { errors: Vec<FieldError> },
    #[error("request rejected (status {status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("connection failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// The human-readable server message, if the server supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Validation { errors } => errors.first().map(|e| e.msg.as_str()),
            ApiError::Rejected { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
