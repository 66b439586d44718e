//! Client error types.

use thiserror::Error;
use wicket_core::AuthError;

/// Errors from talking to the backend API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Bad request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create an error from an HTTP status code.
    ///
    /// 403 folds into `AuthenticationFailed`: with a single boolean
    /// session flag there is no authorization level to distinguish, so
    /// both credential and permission rejections read as one failure.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 | 403 => Self::AuthenticationFailed(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Collapse transport-level errors into the login failure taxonomy the
/// auth store reports to the user.
impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => Self::MalformedResponse(e.to_string()),
            ClientError::Request(e) => Self::Transport(e.to_string()),
            ClientError::Serialization(e) => Self::MalformedResponse(e.to_string()),
            ClientError::AuthenticationFailed(message) => Self::Rejected(message),
            other => Self::Rejected(other.to_string()),
        }
    }
}
