//! Data models
//!
//! Shared between catalog-client and the mock API server.
//! All IDs are `i64`, assigned by the server.

pub mod product;

// Re-exports
pub use product::*;
