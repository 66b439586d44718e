//! Navigation guard and the router that applies it.

use crate::error::RouteError;
use crate::routes::{LOGIN_PATH, ResolvedRoute, RouteTable};
use crate::session::Session;
use tracing::debug;

/// What the guard decided for one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decide whether a transition to `target` may proceed.
///
/// Pure function of the target's gate and the session flag: gated targets
/// redirect to the login path while the session is unauthenticated, and
/// everything else passes through unmodified. No IO happens here.
pub fn check(target: &ResolvedRoute, session: &Session) -> GuardDecision {
    if target.requires_auth && !session.authenticated() {
        GuardDecision::Redirect(LOGIN_PATH.to_string())
    } else {
        GuardDecision::Allow
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The transition was allowed and the target's view is mounted.
    Mounted { name: String, path: String },
    /// The transition was aborted; the login view is mounted instead.
    Redirected { from: String, to: String },
}

/// Route table plus the currently mounted route. Reads the session on
/// every transition, never mutates it.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    current: Option<String>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The route whose view is currently mounted, if any.
    pub fn current(&self) -> Option<&ResolvedRoute> {
        let path = self.current.as_deref()?;
        self.table.resolve(path).ok()
    }

    /// Run one navigation attempt through the guard.
    ///
    /// Unknown paths fail with [`RouteError::NotFound`] before the guard
    /// runs. A redirect mounts the login route; table validation already
    /// guaranteed it exists and is ungated, so the redirect itself cannot
    /// be guarded again.
    pub fn navigate(
        &mut self,
        session: &Session,
        path: &str,
    ) -> Result<Navigation, RouteError> {
        let target = self.table.resolve(path)?;
        match check(target, session) {
            GuardDecision::Allow => {
                let navigation = Navigation::Mounted {
                    name: target.name.clone(),
                    path: target.path.clone(),
                };
                self.current = Some(target.path.clone());
                Ok(navigation)
            }
            GuardDecision::Redirect(to) => {
                debug!(from = path, to = %to, "unauthenticated navigation redirected");
                let login = self.table.resolve(&to)?;
                let navigation = Navigation::Redirected {
                    from: target.path.clone(),
                    to: login.path.clone(),
                };
                self.current = Some(login.path.clone());
                Ok(navigation)
            }
        }
    }
}
