//! Catalog Client - product management over a token-authenticated HTTP API
//!
//! Provides the transport adapter for the product API plus the in-memory
//! catalog store, edit session, and the view component that ties them
//! together.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod view;

pub use api::{LoginResponse, ProductApi};
pub use catalog::CatalogStore;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{EditSession, ProductDraft};
pub use view::{CatalogView, StatusMessage};

// Re-export shared types for convenience
pub use shared::{ErrorBody, Product, ProductPayload};
