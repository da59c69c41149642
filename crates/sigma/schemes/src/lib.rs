//! # Cryptographic schemes over prime-order groups
//!
//! - [`PedersenCommitmentScheme`]: perfectly hiding commitments
//!   `g^m ∘ h^r`
//! - [`ElGamalEncryptionScheme`]: multiplicative ElGamal with explicit
//!   randomization
//! - [`ElGamalValidityProofGenerator`]: proof that a ciphertext encrypts one
//!   of a public list of plaintexts, with [`ValidityProofBundle`] as its
//!   persisted form
//!
//! ```ignore
//! let scheme = ElGamalEncryptionScheme::new(group)?;
//! let (sk, pk) = scheme.key_pair(&mut rng)?;
//! let (ciphertext, r) = scheme.encrypt(&pk, &plaintexts[2], &mut rng)?;
//!
//! let pg = ElGamalValidityProofGenerator::non_interactive(
//!     scheme, pk, plaintexts, None, &SigmaConfig::default(),
//! )?;
//! let proof = pg.generate(&MembershipWitness::new(r, 2), &ciphertext, &mut rng)?;
//! assert!(pg.verify(&proof, &ciphertext)?);
//! ```

pub mod elgamal;
pub mod errors;
pub mod pedersen;
pub mod validity;

pub use elgamal::ElGamalEncryptionScheme;
pub use errors::{Result, SchemeError};
pub use pedersen::{PedersenCommitmentScheme, DEFAULT_GENERATOR_SEED};
pub use validity::{ElGamalValidityProofGenerator, ValidityProofBundle};
