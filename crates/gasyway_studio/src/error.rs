use thiserror::Error;

/// Field edits rejected before they reach the working copy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown token field: {0}")]
    UnknownField(String),

    #[error("{0} must not be empty")]
    Empty(String),

    #[error("{0} must be a finite number")]
    NotFinite(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EditError>;
