//! Error types for algebraic structures

use thiserror::Error;

/// Result type for algebraic operations
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Errors that can occur when building sets or operating on elements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A structural precondition of a constructor failed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two operands live in structures that cannot be combined
    #[error("Incompatible arguments: {0}")]
    IncompatibleArguments(String),

    /// Component index outside `[0, arity)`
    #[error("Index {index} out of range for arity {arity}")]
    IndexOutOfRange { index: usize, arity: usize },

    /// A value or encoding does not belong to the target set
    #[error("Invalid element: {0}")]
    InvalidElement(String),

    /// The set lacks the capability required by the operation
    #[error("Operation `{operation}` is not supported by {set}")]
    UnsupportedOperation { set: String, operation: &'static str },

    /// Multiplicative inverse does not exist
    #[error("No inverse: {0}")]
    NoInverse(String),

    /// Byte-tree encoding or decoding failure
    #[error("Codec error: {0}")]
    Codec(String),
}

impl AlgebraError {
    pub(crate) fn unsupported(set: impl ToString, operation: &'static str) -> Self {
        AlgebraError::UnsupportedOperation {
            set: set.to_string(),
            operation,
        }
    }
}
