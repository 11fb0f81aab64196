//! Product API endpoints
//!
//! Thin endpoint wrapper over [`HttpClient`]. Outcomes are returned as
//! [`ClientResult`] values; turning failures into user-facing text is the
//! view's job, not this layer's.

use crate::{ClientConfig, ClientResult, HttpClient};
use serde::Deserialize;
use shared::{Product, ProductPayload};

/// Response payload for a successful login.
///
/// The server returns more fields (user id, timestamps, refresh token);
/// the client only consumes the bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Endpoint wrapper for the product API
#[derive(Debug, Clone)]
pub struct ProductApi {
    http: HttpClient,
}

impl ProductApi {
    /// Create an API wrapper from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Create an API wrapper from an existing HTTP client
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Access the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Product API ==========

    /// List all products.
    ///
    /// A `204 No Content` response is a valid empty catalog and maps to
    /// an empty vector.
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        Ok(self
            .http
            .get::<Vec<Product>>("/product")
            .await?
            .unwrap_or_default())
    }

    /// Create a product
    pub async fn create(&self, payload: &ProductPayload) -> ClientResult<Product> {
        self.http.post("/product", payload).await
    }

    /// Update a product, sending the full record as the request body
    pub async fn update(&self, record: &Product) -> ClientResult<Product> {
        self.http
            .put(&format!("/product/{}", record.id), record)
            .await
    }

    /// Delete a product by id
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/product/{}", id)).await
    }

    // ========== Auth API ==========

    /// Register a new user
    pub async fn register(&self, email: &str, password: &str) -> ClientResult<()> {
        #[derive(serde::Serialize)]
        struct RegisterRequest {
            email: String,
            password: String,
        }

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.http
            .post::<serde_json::Value, _>("/users", &request)
            .await?;
        Ok(())
    }

    /// Login with email and password, returning the bearer token payload
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(serde::Serialize)]
        struct LoginRequest {
            email: String,
            password: String,
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.http.post("/login", &request).await
    }
}
