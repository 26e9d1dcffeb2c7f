//! # Client Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Local check failed      → ClientError::Validation   (nothing sent)    │
//! │  Server answered non-2xx → ClientError::Api          ({"error": ...})  │
//! │  Request never completed → ClientError::Transport                      │
//! │  Body wasn't the shape   → ClientError::Decode                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user_message() → Prompt::alert                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from dashboard operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status.
    ///
    /// `message` is the server's `error` field, or the operation's fallback
    /// when the body had none.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection refused, timeout, and friends.
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A success response whose body couldn't be decoded.
    #[error("{context}: {message}")]
    Decode {
        context: &'static str,
        message: String,
    },
}

impl ClientError {
    /// Text suitable for an alert box.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(message) => message.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Transport { context, .. } => (*context).to_string(),
            ClientError::Decode { context, .. } => (*context).to_string(),
        }
    }

    /// HTTP status, for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ClientError::Api {
            status: 404,
            message: "Product not found".to_string(),
        };
        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_decode_uses_context() {
        let err = ClientError::Decode {
            context: "Failed to fetch products",
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.user_message(), "Failed to fetch products");
        assert_eq!(err.status(), None);
    }
}
