//! Error types for zero counting.

use thiserror::Error;

/// Errors raised while building polynomials or counting their zeros.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZeroCountError {
    /// The input cannot be processed (e.g. the zero polynomial).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A rational or polynomial was given a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,
    /// Malformed polynomial text.
    #[error("parse error at offset {offset}: {message}")]
    Parse {
        /// Byte offset into the input where the problem was detected.
        offset: usize,
        /// What went wrong.
        message: String,
    },
    /// The counts failed the conservation check.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ZeroCountError {
    /// Create a parse error at `offset`.
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }
}

/// Result type for zero counting operations.
pub type Result<T> = std::result::Result<T, ZeroCountError>;
