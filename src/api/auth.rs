use folio_common::{Error, Result};
use reqwest::Method;

use super::types::{LoginRequest, LoginResponse};
use super::ApiClient;

impl ApiClient {
    /// Exchange admin credentials for a bearer token.
    ///
    /// The token is returned, not stored; attach it with
    /// [`ApiClient::with_token`].
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(Error::invalid_input("email and password are required"));
        }

        let response: LoginResponse = self
            .send_json(Method::POST, "/auth/login", &LoginRequest { email, password })
            .await?;

        let token = response.into_token().ok_or(Error::Unauthorized)?;
        tracing::info!("Logged in as {}", email);
        Ok(token)
    }
}
