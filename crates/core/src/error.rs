//! Error types shared across the session and routing components.

use thiserror::Error;

/// Route table construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No entry in the table matches the requested path.
    #[error("no route matches path {0:?}")]
    NotFound(String),

    /// Two entries share a name; names are unique across the whole table.
    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    /// The login route was declared behind the authentication gate. A
    /// table like that could lock out all navigation, so it is rejected
    /// at construction.
    #[error("login route must not require authentication")]
    GatedLogin,

    /// The table has no login route to redirect to.
    #[error("route table has no entry for the login path")]
    MissingLogin,
}

/// Login failures surfaced to the caller. The session is left exactly as
/// it was before the attempt; the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The endpoint rejected the credentials or returned an error status.
    #[error("authentication rejected: {0}")]
    Rejected(String),

    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Transport(String),

    /// The response arrived but did not carry a usable access token.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),
}

/// Failure writing to the persistence mirror. Never fatal: the in-memory
/// session stays authoritative while the process is running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token storage failed: {0}")]
pub struct StorageError(pub String);
