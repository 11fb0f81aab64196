//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status, with the server's error message when
    /// the body carried a parseable `{"error": ...}` payload
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server error message with a caller-supplied fallback.
    ///
    /// Mirrors the `errData.error || fallback` convention of the API:
    /// the parsed body message if present, otherwise the fallback text.
    pub fn server_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Server error message, falling back to the numeric HTTP status.
    pub fn server_message_or_status(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            ClientError::Api { status, .. } => status.as_u16().to_string(),
            other => other.to_string(),
        }
    }

    /// Whether this is a transport-level failure rather than an API
    /// response. Transport failures are diagnostic-only at the view
    /// layer; they never become user-facing messages.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_body_over_fallback() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: Some("invalid token".to_string()),
        };
        assert_eq!(err.server_message("Unauthorized"), "invalid token");
    }

    #[test]
    fn server_message_falls_back_when_body_missing() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: None,
        };
        assert_eq!(err.server_message("Unauthorized"), "Unauthorized");
        assert_eq!(err.server_message_or_status(), "401");
    }
}
