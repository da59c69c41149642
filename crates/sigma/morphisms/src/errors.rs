//! Error types for functions

use sigma_algebra::AlgebraError;
use thiserror::Error;

/// Result type for function construction and evaluation
pub type Result<T> = std::result::Result<T, FunctionError>;

/// Errors that can occur when building or applying functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// Input outside the domain, or an invalid constructor argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Functions or sets that cannot be combined
    #[error("Incompatible arguments: {0}")]
    IncompatibleArguments(String),

    /// Failure inside the underlying algebra
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
