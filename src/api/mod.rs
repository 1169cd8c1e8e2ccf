//! Client for the portfolio backend's REST API.
//!
//! All endpoints live under `<origin>/api`. Public reads work without a
//! token; admin writes need the bearer token handed to
//! [`ApiClient::with_token`]. The client never looks for a token anywhere
//! else.

mod auth;
mod categories;
mod contact;
mod cv;
mod home;
mod media;
mod socials;
pub mod types;
pub mod upload;

pub use home::{HomePage, HOME_HERO_LIMIT};
pub use types::*;
pub use upload::{FileUpload, MediaUpload, Placement};

use std::time::Duration;

use folio_common::{Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;

/// Default per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for one portfolio backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    origin: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create an anonymous client for `origin` (e.g. `http://127.0.0.1:5000`).
    pub fn new(origin: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create a client from the `[api]` config section, including its token.
    pub fn from_config(config: &ApiConfig) -> Self {
        let client = Self::new(&config.origin, Duration::from_secs(config.timeout_secs));
        match config.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    /// Attach the admin bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Backend origin without trailing slash; media paths resolve against it.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.origin, path)
    }

    /// Fail early for admin operations attempted without a token.
    fn require_token(&self) -> Result<()> {
        if self.has_token() {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn transport failures and non-success statuses
    /// into errors.
    async fn send(&self, builder: RequestBuilder, method: &Method, path: &str) -> Result<Response> {
        tracing::debug!(%method, path, "API request");

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(format!("{method} {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%method, path, status = status.as_u16(), "API request failed");
            return Err(Error::from_status(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("reading {path}: {e}")))?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path), &Method::GET, path).await?;
        Self::decode(response, path).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(method.clone(), path).json(body);
        let response = self.send(builder, &method, path).await?;
        Self::decode(response, path).await
    }

    /// Send a request whose response body is ignored.
    async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let mut builder = self.request(method.clone(), path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder, &method, path).await?;
        Ok(())
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).multipart(form);
        let response = self.send(builder, &Method::POST, path).await?;
        Self::decode(response, path).await
    }

    async fn send_multipart_unit(&self, path: &str, form: reqwest::multipart::Form) -> Result<()> {
        let builder = self.request(Method::POST, path).multipart(form);
        self.send(builder, &Method::POST, path).await?;
        Ok(())
    }
}
