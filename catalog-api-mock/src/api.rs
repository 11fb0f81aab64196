//! Mock API handlers
//!
//! Routes and status codes follow the real product API:
//! - `GET /api/v1/product` → 200 + array, or 204 when empty
//! - `POST /api/v1/product` → 201 + created record
//! - `PUT /api/v1/product/{id}` → 200 + updated record
//! - `DELETE /api/v1/product/{id}` → 200
//! - every non-success carries an optional `{"error": ...}` body

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Deserialize;
use shared::{ErrorBody, Product};
use tracing::debug;

use crate::state::AppState;

/// Build the mock router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/product", get(list_products).post(create_product))
        .route(
            "/api/v1/product/{id}",
            put(update_product).delete(delete_product),
        )
        .route("/api/v1/users", post(register_user))
        .route("/api/v1/login", post(login))
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Extract and verify the bearer token
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if state.token_matches(token) => Ok(()),
        _ => Err(error_response(StatusCode::UNAUTHORIZED, "invalid token")),
    }
}

// ========== Product Handlers ==========

/// Create/update request body.
///
/// `price` is optional because clients with a `NaN` working copy send
/// `null` on the wire; the mock rejects that the way the real server
/// rejects a malformed price.
#[derive(Debug, Deserialize)]
struct ProductRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: Option<f64>,
}

impl ProductRequest {
    fn validate(&self) -> Result<f64, Response> {
        if self.name.trim().is_empty() {
            return Err(error_response(StatusCode::BAD_REQUEST, "name is required"));
        }
        match self.price {
            Some(price) if price.is_finite() => Ok(price),
            _ => Err(error_response(StatusCode::BAD_REQUEST, "invalid price")),
        }
    }
}

async fn list_products(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    state.count_product_request();
    state.count_list_request();
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let products = state.list();
    if products.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(products).into_response()
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ProductRequest>,
) -> Response {
    state.count_product_request();
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let price = match req.validate() {
        Ok(price) => price,
        Err(rejection) => return rejection,
    };

    let product = state.insert(req.name, price);
    debug!(id = product.id, "mock: product created");
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn update_product(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Response {
    state.count_product_request();
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let price = match req.validate() {
        Ok(price) => price,
        Err(rejection) => return rejection,
    };

    match state.update(id, req.name, price) {
        Some(product) => Json(product).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "product not found"),
    }
}

async fn delete_product(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.count_product_request();
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    if state.remove(id) {
        debug!(id, "mock: product deleted");
        StatusCode::OK.into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, "product not found")
    }
}

// ========== Auth Handlers ==========

#[derive(Debug, Deserialize)]
struct CredentialsRequest {
    email: String,
    password: String,
}

async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    if !state.register_user(&req.email, &req.password) {
        return error_response(StatusCode::BAD_REQUEST, "user already exists");
    }
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "email": req.email })),
    )
        .into_response()
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    if !state.authenticate(&req.email, &req.password) {
        return error_response(StatusCode::UNAUTHORIZED, "invalid credentials");
    }
    Json(serde_json::json!({ "token": state.token() })).into_response()
}
