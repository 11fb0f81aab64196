//! Shared types for the catalog client
//!
//! Wire-level types used by both the client and the mock API server.

pub mod error;
pub mod models;

// Re-exports
pub use error::ErrorBody;
pub use models::{Product, ProductPayload};
pub use serde::{Deserialize, Serialize};
