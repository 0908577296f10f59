//! Flow conversion errors
//!
//! Failures that abort a single call. Per-line batch failures are not errors,
//! they are collected as `BatchWarning`s.

use thiserror::Error;

/// Flow conversion error types
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Decimal places must be between 0 and 8, got {0}")]
    InvalidDecimals(u32),

    #[error("Sci-notation threshold must be between 1 and 12, got {0}")]
    InvalidThreshold(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for flow operations
pub type FlowResult<T> = Result<T, FlowError>;
