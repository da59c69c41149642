//! # Sigma-protocol proof engine
//!
//! Proof generators for knowledge of preimages under group homomorphisms
//! built with `sigma-morphisms`:
//!
//! - [`PreimageProofGenerator`]: `y = f(x)`, the Schnorr-style base case
//! - [`PreimageEqualityProofGenerator`]: one secret under several functions
//! - [`PreimageAndProofGenerator`]: one secret per function
//! - [`PreimageOrProofGenerator`]: a secret for one of several functions
//! - [`InequalityProofGenerator`]: `z ≠ f2(x)` for public `y = f1(x)`
//! - [`SetMembershipProofGenerator`]: a value hides one of a candidate list
//!
//! Challenges come from a [`ChallengeGenerator`]: fixed by the verifier in
//! the interactive setting, or derived by hashing (Fiat-Shamir) as selected
//! by [`SigmaConfig`].
//!
//! ## Protocol
//!
//! For a homomorphism `f` with public `y = f(x)`:
//! ```text
//! t = f(r)            r random in the domain
//! c = H(y, t[, id])   reduced into Z_m
//! s = r ∘ x^c
//! ```
//! and the verifier accepts `(t, c, s)` when `c` matches and `f(s) = t ∘ y^c`.

pub mod challenge;
pub mod config;
pub mod equality;
pub mod errors;
pub mod inequality;
pub mod membership;
pub mod or_proof;
pub mod preimage;
pub mod proof_generator;
pub mod transcript;

pub use challenge::{ChallengeGenerator, FixedChallengeGenerator, NonInteractiveChallengeGenerator};
pub use config::{FiatShamir, SigmaConfig};
pub use equality::{PreimageAndProofGenerator, PreimageEqualityProofGenerator};
pub use errors::{ProofError, Result};
pub use inequality::InequalityProofGenerator;
pub use membership::{MembershipWitness, SetMembershipProofGenerator};
pub use or_proof::{OrWitness, PreimageOrProofGenerator};
pub use preimage::PreimageProofGenerator;
pub use proof_generator::{ProofGenerator, SigmaProof};
pub use transcript::{sigma_transcript, TranscriptProtocol};

/// Re-export merlin transcript
pub use merlin::Transcript;
