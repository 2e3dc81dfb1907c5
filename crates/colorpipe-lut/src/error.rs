//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
///
/// Structural problems inside a LUT file degrade to an empty node rather
/// than erroring, so readers only ever propagate file access failures.
#[derive(Debug, Error)]
pub enum LutError {
    /// Sample buffer does not match the declared resolution.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
