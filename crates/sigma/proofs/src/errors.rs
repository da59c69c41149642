//! Error types for proof generation

use sigma_algebra::AlgebraError;
use sigma_morphisms::FunctionError;
use thiserror::Error;

/// Result type for proof generation and verification
pub type Result<T> = std::result::Result<T, ProofError>;

/// Errors raised by proof generators.
///
/// A proof that simply does not verify is not an error; verification
/// returns `Ok(false)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Invalid constructor argument or input outside its space
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Functions, spaces or generators that do not fit together
    #[error("Incompatible arguments: {0}")]
    IncompatibleArguments(String),

    /// Disjunct index outside the list of relations
    #[error("Invalid index {index} for {count} relations")]
    InvalidIndex { index: usize, count: usize },

    /// Proof outside the generator's proof space
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Function(#[from] FunctionError),
}
