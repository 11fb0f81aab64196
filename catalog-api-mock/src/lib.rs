//! Mock product API server
//!
//! In-memory stand-in for the real product API, used by integration
//! tests and local development. Implements the exact wire contract the
//! client is written against: bearer-token auth, `204 No Content` for an
//! empty catalog, and `{"error": ...}` bodies on failures.

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;
