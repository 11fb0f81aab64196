//! Drives the catalog view against an in-process mock API.
//!
//! Run with: cargo run -p catalog-client --example catalog_demo

use std::sync::Arc;

use catalog_api_mock::{AppState, router};
use catalog_client::{CatalogView, ClientConfig, ProductApi};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_client=debug".into()),
        )
        .init();

    // Serve the mock on an ephemeral port.
    let state = Arc::new(AppState::new("demo-token"));
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Obtain a token the way the login flow would.
    let anon = ProductApi::new(&ClientConfig::new(base_url.as_str()));
    anon.register("demo@example.com", "secret").await.unwrap();
    let login = anon.login("demo@example.com", "secret").await.unwrap();

    let mut view = CatalogView::new(&ClientConfig::new(base_url.as_str()).with_token(login.token));
    view.mount().await;
    println!("after mount: {} products", view.store().len());

    view.set_draft_name("Pen");
    view.set_draft_price("1.5");
    view.submit_create().await;
    println!("message: {:?}", view.message().map(|m| m.text()));

    let id = view.store().items()[0].id;
    view.begin_edit(id);
    view.edit_name("Fountain Pen");
    view.edit_price("12.0");
    view.submit_update().await;

    for product in view.store().items() {
        println!("#{} {} @ {}", product.id, product.name, product.price);
    }

    view.delete(id).await;
    println!("after delete: {} products", view.store().len());
}
