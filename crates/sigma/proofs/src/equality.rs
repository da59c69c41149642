//! Equality and AND compositions of preimage proofs
//!
//! Both reduce to a single preimage proof over a combined function:
//! equality duplicates one secret into every function, AND applies each
//! function to its own component of a tuple secret.

use crate::challenge::{ChallengeGenerator, NonInteractiveChallengeGenerator};
use crate::config::SigmaConfig;
use crate::errors::{ProofError, Result};
use crate::preimage::PreimageProofGenerator;
use crate::proof_generator::ProofGenerator;
use rand_core::RngCore;
use sigma_algebra::{Element, Set};
use sigma_morphisms::{composite, multi_identity, product, Function};
use std::sync::Arc;

fn require_functions(functions: &[Function]) -> Result<()> {
    if functions.is_empty() {
        return Err(ProofError::InvalidArgument(
            "at least one function is required".to_string(),
        ));
    }
    Ok(())
}

/// `x ↦ (f_1(x), ..., f_n(x))` for functions sharing one domain
fn equality_function(functions: Vec<Function>) -> Result<Function> {
    require_functions(&functions)?;
    let domain = functions[0].domain().clone();
    if let Some(other) = functions.iter().find(|f| f.domain() != &domain) {
        return Err(ProofError::IncompatibleArguments(format!(
            "functions over {domain} and {} cannot share a secret",
            other.domain()
        )));
    }
    let arity = functions.len();
    Ok(composite(vec![multi_identity(domain, arity), product(functions)])?)
}

/// Proof that one secret is a preimage under every function:
/// `y_i = f_i(x)` for all `i`
#[derive(Clone, Debug)]
pub struct PreimageEqualityProofGenerator {
    functions: Vec<Function>,
    inner: PreimageProofGenerator,
}

impl PreimageEqualityProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        functions: Vec<Function>,
    ) -> Result<Self> {
        let combined = equality_function(functions.clone())?;
        Ok(Self {
            functions,
            inner: PreimageProofGenerator::new(challenge_generator, combined)?,
        })
    }

    pub fn non_interactive(
        functions: Vec<Function>,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let challenge_generator = Self::default_challenge_generator(&functions, prover_id, config)?;
        Self::new(Arc::new(challenge_generator), functions)
    }

    pub fn default_challenge_generator(
        functions: &[Function],
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        let combined = equality_function(functions.to_vec())?;
        PreimageProofGenerator::default_challenge_generator(&combined, prover_id, config)
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn private_input_space(&self) -> &Set {
        self.inner.private_input_space()
    }

    pub fn challenge_space(&self) -> &Set {
        self.inner.challenge_space()
    }
}

impl ProofGenerator for PreimageEqualityProofGenerator {
    type PrivateInput = Element;

    fn public_input_space(&self) -> &Set {
        self.inner.public_input_space()
    }

    fn proof_space(&self) -> &Set {
        self.inner.proof_space()
    }

    fn generate(
        &self,
        secret: &Element,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        self.inner.generate(secret, public_input, rng)
    }

    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        self.inner.verify(proof, public_input)
    }
}

/// Proof of knowing a preimage under each function, with independent
/// secrets: `y_i = f_i(x_i)` for all `i`
#[derive(Clone, Debug)]
pub struct PreimageAndProofGenerator {
    functions: Vec<Function>,
    inner: PreimageProofGenerator,
}

impl PreimageAndProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        functions: Vec<Function>,
    ) -> Result<Self> {
        require_functions(&functions)?;
        let combined = product(functions.clone());
        Ok(Self {
            functions,
            inner: PreimageProofGenerator::new(challenge_generator, combined)?,
        })
    }

    pub fn non_interactive(
        functions: Vec<Function>,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        require_functions(&functions)?;
        let combined = product(functions.clone());
        let challenge_generator =
            PreimageProofGenerator::default_challenge_generator(&combined, prover_id, config)?;
        Self::new(Arc::new(challenge_generator), functions)
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn private_input_space(&self) -> &Set {
        self.inner.private_input_space()
    }
}

impl ProofGenerator for PreimageAndProofGenerator {
    type PrivateInput = Element;

    fn public_input_space(&self) -> &Set {
        self.inner.public_input_space()
    }

    fn proof_space(&self) -> &Set {
        self.inner.proof_space()
    }

    fn generate(
        &self,
        secrets: &Element,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        self.inner.generate(secrets, public_input, rng)
    }

    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        self.inner.verify(proof, public_input)
    }
}
