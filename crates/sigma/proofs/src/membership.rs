//! Set-membership proofs
//!
//! A membership function `M × R → C` hides a member of `M` under a
//! randomization from `R`, and a delta function `M × C → C` removes a
//! candidate member from a public value. For every candidate `m_i`, the
//! disjunct is "`δ(m_i, y)` is the image of the identity of `M` under some
//! randomization", so an OR proof over the candidates shows that `y` hides
//! one of them without revealing which.

use crate::challenge::{ChallengeGenerator, NonInteractiveChallengeGenerator};
use crate::config::SigmaConfig;
use crate::errors::{ProofError, Result};
use crate::or_proof::{OrWitness, PreimageOrProofGenerator};
use crate::proof_generator::{check_public_input, ProofGenerator};
use rand_core::RngCore;
use sigma_algebra::{Element, Set};
use sigma_morphisms::Function;
use std::sync::Arc;

/// Secret of the membership prover: the randomization and the position of
/// the hidden member in the candidate list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipWitness {
    pub randomization: Element,
    pub index: usize,
}

impl MembershipWitness {
    pub fn new(randomization: Element, index: usize) -> Self {
        Self {
            randomization,
            index,
        }
    }
}

/// Validated pieces shared by the generator and its default challenge
/// generator
struct Relation {
    preimage_function: Function,
    count: usize,
}

fn relation(
    membership_function: &Function,
    delta_function: &Function,
    members: &[Element],
) -> Result<Relation> {
    if members.is_empty() {
        return Err(ProofError::InvalidArgument(
            "the candidate list is empty".to_string(),
        ));
    }
    let domain = membership_function.domain();
    if !domain.is_compound() || domain.arity() != 2 {
        return Err(ProofError::InvalidArgument(format!(
            "membership function domain {domain} is not a pair of sets"
        )));
    }
    let member_space = domain.get_at(0)?;
    if let Some(member) = members.iter().find(|m| !member_space.contains(m)) {
        return Err(ProofError::InvalidArgument(format!(
            "candidate {member} is not in {member_space}"
        )));
    }
    let co_domain = membership_function.co_domain();
    let delta_domain = Set::product(vec![member_space.clone(), co_domain.clone()]);
    if delta_function.domain() != &delta_domain || delta_function.co_domain() != co_domain {
        return Err(ProofError::IncompatibleArguments(format!(
            "delta function {} -> {} does not map {delta_domain} into {co_domain}",
            delta_function.domain(),
            delta_function.co_domain()
        )));
    }
    let preimage_function = membership_function.partially_apply(&member_space.identity()?, 0)?;
    Ok(Relation {
        preimage_function,
        count: members.len(),
    })
}

/// Proof that a public value hides one of a list of candidates
#[derive(Clone, Debug)]
pub struct SetMembershipProofGenerator {
    membership_function: Function,
    delta_function: Function,
    members: Vec<Element>,
    or_generator: PreimageOrProofGenerator,
}

impl SetMembershipProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        membership_function: Function,
        delta_function: Function,
        members: Vec<Element>,
    ) -> Result<Self> {
        let relation = relation(&membership_function, &delta_function, &members)?;
        let or_generator = PreimageOrProofGenerator::new(
            challenge_generator,
            vec![relation.preimage_function; relation.count],
        )?;
        Ok(Self {
            membership_function,
            delta_function,
            members,
            or_generator,
        })
    }

    pub fn non_interactive(
        membership_function: Function,
        delta_function: Function,
        members: Vec<Element>,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let challenge_generator = Self::default_challenge_generator(
            &membership_function,
            &delta_function,
            &members,
            prover_id,
            config,
        )?;
        Self::new(Arc::new(challenge_generator), membership_function, delta_function, members)
    }

    pub fn default_challenge_generator(
        membership_function: &Function,
        delta_function: &Function,
        members: &[Element],
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        let relation = relation(membership_function, delta_function, members)?;
        PreimageOrProofGenerator::default_challenge_generator(
            &vec![relation.preimage_function; relation.count],
            prover_id,
            config,
        )
    }

    pub fn members(&self) -> &[Element] {
        &self.members
    }

    pub fn membership_function(&self) -> &Function {
        &self.membership_function
    }

    pub fn delta_function(&self) -> &Function {
        &self.delta_function
    }

    /// `(δ(m_1, y), ..., δ(m_n, y))`
    fn shifted_values(&self, public_input: &Element) -> Result<Element> {
        let values = self
            .members
            .iter()
            .map(|member| {
                self.delta_function
                    .apply(&Element::pair(member.clone(), public_input.clone()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(self.or_generator.public_input_space().tuple(values)?)
    }
}

impl ProofGenerator for SetMembershipProofGenerator {
    type PrivateInput = MembershipWitness;

    fn public_input_space(&self) -> &Set {
        self.membership_function.co_domain()
    }

    fn proof_space(&self) -> &Set {
        self.or_generator.proof_space()
    }

    fn generate(
        &self,
        witness: &MembershipWitness,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        check_public_input(self.public_input_space(), public_input)?;
        let or_witness = OrWitness::new(witness.randomization.clone(), witness.index);
        self.or_generator
            .generate(&or_witness, &self.shifted_values(public_input)?, rng)
    }

    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        check_public_input(self.public_input_space(), public_input)?;
        self.or_generator
            .verify(proof, &self.shifted_values(public_input)?)
    }
}
