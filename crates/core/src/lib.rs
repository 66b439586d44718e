//! Wicket core: session state, token persistence, and route gating.
//!
//! The crate owns the in-memory [`Session`] and the decision logic that
//! gates navigation on it. IO lives behind two seams: [`CredentialsApi`]
//! (implemented by the HTTP client crate) and [`TokenStore`] (implemented
//! over whatever key-value storage the embedding shell provides).

pub mod auth;
pub mod error;
pub mod guard;
pub mod routes;
pub mod session;
pub mod storage;

pub use auth::{AuthStore, AuthTransition, CredentialsApi};
pub use error::{AuthError, RouteError, StorageError};
pub use guard::{GuardDecision, Navigation, Router, check};
pub use routes::{
    LOGIN_PATH, ROOT_PATH, ResolvedRoute, RouteEntry, RouteTable, View, default_table,
};
pub use session::Session;
pub use storage::{MemoryTokenStore, TOKEN_KEY, TokenStore};
