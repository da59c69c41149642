//! OR composition of preimage proofs
//!
//! Proves knowledge of a preimage under one of `n` functions without
//! revealing which. The proof is the triple
//! `((t_1, ..., t_n), (c_1, ..., c_n), (s_1, ..., s_n))`: every disjunct but
//! the real one is simulated from a random challenge and response, and the
//! real challenge is fixed so that the challenges sum to the one derived for
//! the commitments.

use crate::challenge::{ChallengeGenerator, NonInteractiveChallengeGenerator};
use crate::config::SigmaConfig;
use crate::errors::{ProofError, Result};
use crate::proof_generator::{
    challenges_match, check_homomorphism, check_private_input, check_proof, check_public_input,
    check_response, default_challenge_space, respond, simulate, ProofGenerator,
};
use rand_core::RngCore;
use rayon::prelude::*;
use sigma_algebra::{Element, Set};
use sigma_morphisms::Function;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Secret of the OR prover: a preimage under the function at `index`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrWitness {
    pub secret: Element,
    pub index: usize,
}

impl OrWitness {
    pub fn new(secret: Element, index: usize) -> Self {
        Self { secret, index }
    }
}

/// Spaces shared by the generator and its default challenge generator
struct OrSpaces {
    public_input_space: Set,
    challenge_space: Set,
}

fn or_spaces(functions: &[Function]) -> Result<OrSpaces> {
    if functions.is_empty() {
        return Err(ProofError::InvalidArgument(
            "an OR proof needs at least one function".to_string(),
        ));
    }
    let public_input_space =
        Set::product(functions.iter().map(|f| f.co_domain().clone()).collect());
    let domains = Set::product(functions.iter().map(|f| f.domain().clone()).collect());
    Ok(OrSpaces {
        public_input_space,
        challenge_space: default_challenge_space(&domains)?,
    })
}

/// OR proof over a list of relations
#[derive(Clone, Debug)]
pub struct PreimageOrProofGenerator {
    functions: Vec<Function>,
    challenge_generator: Arc<dyn ChallengeGenerator>,
    public_input_space: Set,
    challenge_space: Set,
    proof_space: Set,
}

impl PreimageOrProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        functions: Vec<Function>,
    ) -> Result<Self> {
        let spaces = or_spaces(&functions)?;
        for function in &functions {
            check_homomorphism(function)?;
        }
        if challenge_generator.public_input_space() != &spaces.public_input_space
            || challenge_generator.commitment_space() != &spaces.public_input_space
        {
            return Err(ProofError::IncompatibleArguments(format!(
                "challenge generator over ({}, {}) cannot serve an OR proof into {}",
                challenge_generator.public_input_space(),
                challenge_generator.commitment_space(),
                spaces.public_input_space
            )));
        }
        let challenge_space = challenge_generator.challenge_space().clone();
        let proof_space = Set::product(vec![
            spaces.public_input_space.clone(),
            Set::product_uniform(challenge_space.clone(), functions.len()),
            Set::product(functions.iter().map(|f| f.domain().clone()).collect()),
        ]);
        Ok(Self {
            functions,
            challenge_generator,
            public_input_space: spaces.public_input_space,
            challenge_space,
            proof_space,
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

    /// Challenges in `Z_m` for `m` the smallest minimal order of the domains
    pub fn default_challenge_generator(
        functions: &[Function],
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        let spaces = or_spaces(functions)?;
        NonInteractiveChallengeGenerator::new(
            spaces.public_input_space.clone(),
            spaces.public_input_space,
            spaces.challenge_space,
            prover_id,
            config,
        )
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn challenge_space(&self) -> &Set {
        &self.challenge_space
    }

    fn sum_challenges<'a>(
        &self,
        challenges: impl IntoIterator<Item = &'a Element>,
    ) -> Result<Element> {
        challenges
            .into_iter()
            .try_fold(self.challenge_space.identity()?, |sum, c| Ok(sum.apply(c)?))
    }
}

impl ProofGenerator for PreimageOrProofGenerator {
    type PrivateInput = OrWitness;

    fn public_input_space(&self) -> &Set {
        &self.public_input_space
    }

    fn proof_space(&self) -> &Set {
        &self.proof_space
    }

    #[instrument(skip_all, name = "or_proof_generate", fields(disjuncts = self.functions.len()))]
    fn generate(
        &self,
        witness: &OrWitness,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        let count = self.functions.len();
        let real = witness.index;
        if real >= count {
            return Err(ProofError::InvalidIndex { index: real, count });
        }
        check_private_input(self.functions[real].domain(), &witness.secret)?;
        check_public_input(&self.public_input_space, public_input)?;
        let publics = public_input.components()?;

        let mut commitments = Vec::with_capacity(count);
        let mut challenges = Vec::with_capacity(count);
        let mut responses = Vec::with_capacity(count);
        let mut randomization = None;
        for (j, function) in self.functions.iter().enumerate() {
            if j == real {
                let r = function.domain().random_element(&mut *rng);
                commitments.push(function.apply(&r)?);
                randomization = Some(r);
                // Placeholders until the real challenge is known
                challenges.push(self.challenge_space.identity()?);
                responses.push(function.domain().identity()?);
            } else {
                let c = self.challenge_space.random_element(&mut *rng);
                let s = function.domain().random_element(&mut *rng);
                commitments.push(simulate(function, &publics[j], &c, &s)?);
                challenges.push(c);
                responses.push(s);
            }
        }
        let randomization = randomization
            .ok_or(ProofError::InvalidIndex { index: real, count })?;

        let commitment = self.public_input_space.tuple(commitments)?;
        let challenge = self.challenge_generator.generate(public_input, &commitment)?;
        let simulated = self.sum_challenges(
            challenges
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != real)
                .map(|(_, c)| c),
        )?;
        challenges[real] = challenge.apply_inverse(&simulated)?;
        responses[real] = respond(&randomization, &witness.secret, &challenges[real])?;

        Ok(self.proof_space.tuple(vec![
            commitment,
            Element::tuple(challenges),
            Element::tuple(responses),
        ])?)
    }

    #[instrument(skip_all, name = "or_proof_verify", fields(disjuncts = self.functions.len()))]
    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        check_proof(&self.proof_space, proof)?;
        check_public_input(&self.public_input_space, public_input)?;
        let commitment = proof.get_at(0)?;
        let challenges = proof.get_at(1)?.components()?;
        let responses = proof.get_at(2)?.components()?;
        let commitments = commitment.components()?;
        let publics = public_input.components()?;

        let expected = self.challenge_generator.generate(public_input, commitment)?;
        let sum = self.sum_challenges(challenges)?;
        if !challenges_match(&sum, &expected) {
            debug!("challenges do not sum to the derived challenge");
            return Ok(false);
        }

        let results = (0..self.functions.len())
            .into_par_iter()
            .map(|j| {
                check_response(
                    &self.functions[j],
                    &publics[j],
                    &commitments[j],
                    &challenges[j],
                    &responses[j],
                )
            })
            .collect::<Result<Vec<bool>>>()?;
        if let Some(failed) = results.iter().position(|valid| !valid) {
            debug!(disjunct = failed, "verification equation does not hold");
            return Ok(false);
        }
        Ok(true)
    }
}
