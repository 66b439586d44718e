//! Authentication state holder.

use crate::error::AuthError;
use crate::routes::{LOGIN_PATH, ROOT_PATH};
use crate::session::Session;
use crate::storage::{TOKEN_KEY, TokenStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Credential-login seam, implemented by the HTTP client crate.
#[async_trait]
pub trait CredentialsApi: Send + Sync {
    /// Exchange credentials for an access token.
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

/// A completed session transition. The store never navigates by itself;
/// the caller moves to [`AuthTransition::destination`] in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTransition {
    LoggedIn,
    LoggedOut,
}

impl AuthTransition {
    /// Path the application should navigate to after this transition.
    pub fn destination(self) -> &'static str {
        match self {
            Self::LoggedIn => ROOT_PATH,
            Self::LoggedOut => LOGIN_PATH,
        }
    }
}

/// Exclusive owner of the in-memory [`Session`].
///
/// Storage is only a restart mirror: it is read once at construction and
/// written through on transitions, but while the process runs the session
/// held here is the single source of truth.
pub struct AuthStore {
    session: Session,
    api: Arc<dyn CredentialsApi>,
    storage: Arc<dyn TokenStore>,
}

impl AuthStore {
    /// Restore a session from the persisted token, if any.
    ///
    /// No network call happens here: a persisted token is trusted as-is
    /// until some later request rejects it.
    pub fn restore(api: Arc<dyn CredentialsApi>, storage: Arc<dyn TokenStore>) -> Self {
        let session = match storage.get(TOKEN_KEY) {
            Some(token) => Session::with_token(token),
            None => Session::new(),
        };
        Self {
            session,
            api,
            storage,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send the credentials to the login endpoint and, on success, adopt
    /// the returned token.
    ///
    /// The await on the API seam is the component's sole suspension
    /// point. On any failure the session is left exactly as it was and
    /// the error is surfaced for the caller to report; resubmitting the
    /// form is the only retry.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AuthTransition, AuthError> {
        let token = self.api.login(username, password).await?;
        if token.is_empty() {
            return Err(AuthError::MalformedResponse(
                "empty access token".to_string(),
            ));
        }

        self.session = Session::with_token(token.as_str());
        if let Err(err) = self.storage.set(TOKEN_KEY, &token) {
            warn!(%err, "token not persisted; session is memory-only");
        }
        info!(user = username, "login succeeded");
        Ok(AuthTransition::LoggedIn)
    }

    /// Clear the session. Synchronous, idempotent, and never fails: no
    /// server-side invalidation happens in this contract.
    pub fn logout(&mut self) -> AuthTransition {
        self.session = Session::new();
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            warn!(%err, "persisted token not removed");
        }
        info!("logged out");
        AuthTransition::LoggedOut
    }
}
