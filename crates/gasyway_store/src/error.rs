//! Store error types

use thiserror::Error;

/// Generic message used when a failed save carries no server explanation
pub const SAVE_FAILED: &str = "Failed to save design tokens";

/// Errors returned by the token store client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a response (unreachable host, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body is not the expected JSON shape
    #[error("malformed response: {0}")]
    Protocol(String),

    /// 2xx response reporting `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Successful response without a tokens payload
    #[error("response contained no design tokens")]
    MissingTokens,

    /// The HTTP client could not be built
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl StoreError {
    /// Short message suitable for a toast notification.
    ///
    /// Server-reported messages are passed through untouched.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Status { message, .. } => message.clone(),
            StoreError::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the store could not be reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_) | StoreError::Setup(_))
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
