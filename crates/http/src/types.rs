//! Wire types for the auth endpoints.

use serde::{Deserialize, Serialize};

/// Form body for `POST /auth/login`. The backend is an OAuth2 password
/// endpoint, so the fields travel form-encoded, not as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"` from the current backend; tolerated when absent.
    #[serde(default)]
    pub token_type: String,
}
