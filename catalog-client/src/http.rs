//! HTTP transport for the product API
//!
//! Issues authenticated requests and normalizes responses: success bodies
//! are deserialized, `204 No Content` becomes an explicit empty outcome,
//! and non-success statuses are translated into [`ClientError::Api`] with
//! the server's error message when one was parseable.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorBody;
use tracing::debug;

/// HTTP client for making requests against the product API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    ///
    /// Returns `Ok(None)` for a `204 No Content` response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response)
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Missing response body".to_string()))
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response)
            .await?
            .ok_or_else(|| ClientError::InvalidResponse("Missing response body".to_string()))
    }

    /// Make a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    /// Handle the HTTP response
    ///
    /// `204 No Content` is a valid empty result, not an error.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response.json().await.map(Some).map_err(Into::into)
    }

    /// Build a [`ClientError::Api`] from a non-success response.
    ///
    /// The error body is optional: a missing or unparseable body falls
    /// back to `message: None`, leaving the HTTP status as the only
    /// information the caller has to display.
    async fn error_from_response(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .map(|body| body.error),
            Err(_) => None,
        };

        debug!(status = %status, message = ?message, "API request failed");
        ClientError::Api { status, message }
    }
}
