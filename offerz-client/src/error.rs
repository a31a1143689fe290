//! Client error types

use shared::response::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request with a message of its own
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-side form check failed; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP 400 without a readable error body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local token storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the server refused our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
            || matches!(self, ClientError::Api { status: 401, .. })
    }

    /// Map a non-2xx response to an error.
    ///
    /// A JSON `{ "error": ... }` body wins; otherwise fall back on the status.
    /// Raw bodies are kept for diagnostics but never offered as a server message.
    pub fn from_response(status: u16, text: String) -> Self {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text)
            && let Some(message) = body.text()
        {
            return ClientError::Api {
                status,
                message: message.to_string(),
            };
        }
        match status {
            401 => ClientError::Unauthorized("Unauthorized".into()),
            403 => ClientError::Forbidden(text),
            404 => ClientError::NotFound(text),
            400 => ClientError::BadRequest(text),
            _ => ClientError::Internal(text),
        }
    }

    /// Message the server (or form validation) produced, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } | ClientError::Validation(message) => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ClientError::Api {
            status: 409,
            message: "Store already exists".into(),
        };
        assert_eq!(err.server_message(), Some("Store already exists"));
        assert_eq!(err.to_string(), "Store already exists");

        let err = ClientError::Internal("boom".into());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ClientError::Unauthorized("expired".into()).is_unauthorized());
        assert!(
            ClientError::Api {
                status: 401,
                message: "Token invalid".into()
            }
            .is_unauthorized()
        );
        assert!(!ClientError::NotFound("x".into()).is_unauthorized());
    }

    #[test]
    fn test_from_response() {
        let err = ClientError::from_response(401, r#"{"error":"Invalid credentials"}"#.into());
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Invalid credentials"));

        let err = ClientError::from_response(404, "<html>nope</html>".into());
        assert!(matches!(err, ClientError::NotFound(_)));

        let err = ClientError::from_response(500, r#"{"message":"Server error"}"#.into());
        assert_eq!(err.server_message(), Some("Server error"));

        let err = ClientError::from_response(401, String::new());
        assert!(matches!(err, ClientError::Unauthorized(_)));

        let err = ClientError::from_response(400, r#"{"error":"Store name is taken"}"#.into());
        assert_eq!(err.server_message(), Some("Store name is taken"));
    }

    #[test]
    fn test_unreadable_bad_request_has_no_server_message() {
        let err = ClientError::from_response(400, "<html><body>Bad Request</body></html>".into());
        assert!(matches!(err, ClientError::BadRequest(_)));
        assert_eq!(err.server_message(), None);

        let result: ClientResult<()> = Err(err);
        let notice = crate::Notice::from_result(&result, "Saved", "Failed to save store");
        assert_eq!(notice.message, "Failed to save store");
    }
}
