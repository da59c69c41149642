//! Error types for schemes

use sigma_algebra::AlgebraError;
use sigma_morphisms::FunctionError;
use sigma_proofs::ProofError;
use thiserror::Error;

/// Result type for scheme operations
pub type Result<T> = std::result::Result<T, SchemeError>;

/// Errors raised by commitment and encryption schemes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// Invalid scheme parameter or input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error(transparent)]
    Proof(#[from] ProofError),
}
