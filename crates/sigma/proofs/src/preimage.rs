//! Preimage proofs
//!
//! Schnorr-style proof of knowledge of `x` with `f(x) = y` for a group
//! homomorphism `f`. The proof is the triple `(t, c, s)` with `t = f(r)`,
//! `c` the challenge and `s = r ∘ x^c`; it verifies when the challenge is
//! the one the generator derives for `(y, t)` and `f(s) = t ∘ y^c`.

use crate::challenge::{ChallengeGenerator, NonInteractiveChallengeGenerator};
use crate::config::SigmaConfig;
use crate::errors::{ProofError, Result};
use crate::proof_generator::{
    challenges_match, check_homomorphism, check_private_input, check_proof, check_public_input,
    check_response, default_challenge_space, respond, ProofGenerator, SigmaProof,
};
use rand_core::RngCore;
use sigma_algebra::{Element, Set};
use sigma_morphisms::Function;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Proof of knowledge of a preimage under one function
#[derive(Clone, Debug)]
pub struct PreimageProofGenerator {
    function: Function,
    challenge_generator: Arc<dyn ChallengeGenerator>,
    proof_space: Set,
}

impl PreimageProofGenerator {
    /// Validates that the generator's spaces match the function
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        function: Function,
    ) -> Result<Self> {
        check_homomorphism(&function)?;
        let co_domain = function.co_domain();
        if challenge_generator.public_input_space() != co_domain
            || challenge_generator.commitment_space() != co_domain
        {
            return Err(ProofError::IncompatibleArguments(format!(
                "challenge generator over ({}, {}) cannot serve a function into {co_domain}",
                challenge_generator.public_input_space(),
                challenge_generator.commitment_space()
            )));
        }
        let proof_space = Set::product(vec![
            co_domain.clone(),
            challenge_generator.challenge_space().clone(),
            function.domain().clone(),
        ]);
        Ok(Self {
            function,
            challenge_generator,
            proof_space,
        })
    }

    /// Fiat-Shamir variant with challenges in `Z_m`, `m` the minimal order
    /// of the domain
    pub fn non_interactive(
        function: Function,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let challenge_generator = Self::default_challenge_generator(&function, prover_id, config)?;
        Self::new(Arc::new(challenge_generator), function)
    }

    /// Non-interactive challenge generator matching `function`
    pub fn default_challenge_generator(
        function: &Function,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        NonInteractiveChallengeGenerator::new(
            function.co_domain().clone(),
            function.co_domain().clone(),
            default_challenge_space(function.domain())?,
            prover_id,
            config,
        )
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn challenge_generator(&self) -> &Arc<dyn ChallengeGenerator> {
        &self.challenge_generator
    }

    pub fn private_input_space(&self) -> &Set {
        self.function.domain()
    }

    pub fn challenge_space(&self) -> &Set {
        self.challenge_generator.challenge_space()
    }
}

impl ProofGenerator for PreimageProofGenerator {
    type PrivateInput = Element;

    fn public_input_space(&self) -> &Set {
        self.function.co_domain()
    }

    fn proof_space(&self) -> &Set {
        &self.proof_space
    }

    #[instrument(skip_all, name = "preimage_proof_generate")]
    fn generate(
        &self,
        secret: &Element,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        check_private_input(self.private_input_space(), secret)?;
        check_public_input(self.public_input_space(), public_input)?;

        let randomization = self.private_input_space().random_element(rng);
        let commitment = self.function.apply(&randomization)?;
        let challenge = self.challenge_generator.generate(public_input, &commitment)?;
        let response = respond(&randomization, secret, &challenge)?;
        Ok(self.proof_space.tuple(vec![commitment, challenge, response])?)
    }

    #[instrument(skip_all, name = "preimage_proof_verify")]
    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        check_proof(&self.proof_space, proof)?;
        check_public_input(self.public_input_space(), public_input)?;
        let proof = SigmaProof::parse(proof)?;

        let expected = self
            .challenge_generator
            .generate(public_input, proof.commitment)?;
        if !challenges_match(proof.challenge, &expected) {
            debug!("challenge does not match the commitment");
            return Ok(false);
        }
        let valid = check_response(
            &self.function,
            public_input,
            proof.commitment,
            proof.challenge,
            proof.response,
        )?;
        if !valid {
            debug!("verification equation does not hold");
        }
        Ok(valid)
    }
}
