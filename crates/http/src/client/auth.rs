//! Login endpoint client methods.

use super::{WicketClient, error::ClientError};
use crate::types::{LoginRequest, TokenResponse};
use async_trait::async_trait;
use tracing::debug;
use wicket_core::{AuthError, CredentialsApi};

impl WicketClient {
    /// Exchange credentials for an access token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        debug!(user = username, "sending login request");
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .form(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            });
        self.execute(req).await
    }
}

#[async_trait]
impl CredentialsApi for WicketClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let response = WicketClient::login(self, username, password).await?;
        Ok(response.access_token)
    }
}
