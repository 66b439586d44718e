//! In-memory session state.

/// The record of whether the current user is authenticated and which
/// token proves it.
///
/// The authenticated flag is derived from token presence rather than
/// stored alongside it, so the two can never disagree — there is no
/// representable state where one is set without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session carrying the given access token. An empty token is
    /// treated as absent, so a blank value restored from storage does not
    /// count as authenticated.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// The current access token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }
}
