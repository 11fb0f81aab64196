//! Error response body

use serde::{Deserialize, Serialize};

/// JSON error body returned by the API on non-success statuses.
///
/// ```json
/// { "error": "invalid token" }
/// ```
///
/// The body is optional on the wire; clients fall back to the HTTP
/// status code when it is absent or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}
