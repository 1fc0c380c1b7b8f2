//! Theme error types

use thiserror::Error;

/// Errors raised while reading or writing style variables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The variable namespace lock was poisoned by a panicking writer
    #[error("style variables unavailable: {0}")]
    Poisoned(String),

    /// The target rejected a variable write
    #[error("failed to write style variable {name}: {reason}")]
    Write { name: String, reason: String },

    /// The target could not be read
    #[error("failed to read style variable {name}: {reason}")]
    Read { name: String, reason: String },
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;
