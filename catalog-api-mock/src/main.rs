//! catalog-api-mock — standalone mock product API
//!
//! Serves the in-memory product API for local client development.
//! The accepted bearer token comes from `MOCK_API_TOKEN` (default
//! "dev-token"); the bind address from `MOCK_API_ADDR`.

use std::sync::Arc;

use catalog_api_mock::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api_mock=debug".into()),
        )
        .init();

    let token = std::env::var("MOCK_API_TOKEN").unwrap_or_else(|_| "dev-token".to_string());
    let addr = std::env::var("MOCK_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8090".to_string());

    let state = Arc::new(AppState::new(token));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("catalog-api-mock listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
