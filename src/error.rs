/*
    Errors
*/

use thiserror::Error;

/// Errors raised by fuzzy number construction, arithmetic,
/// configuration and array access.
///
/// Every error is raised synchronously by the call that detects it.
/// No operation leaves a partially updated value behind.
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// Malformed or unordered breakpoints, invalid shape functions,
    /// or out-of-domain numeric arguments.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The operands cannot be combined by the selected method.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Unknown configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A fuzzy number of the wrong variant was supplied.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Index outside of `[-len, len)`.
    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Failure writing a rendered plot.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, FuzzyError>;

impl FuzzyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FuzzyError::InvalidParameters(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        FuzzyError::UnsupportedOperation(msg.into())
    }
}
