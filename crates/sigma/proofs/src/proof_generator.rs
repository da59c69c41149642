//! Common interface of proof generators and sigma-protocol arithmetic

use crate::errors::{ProofError, Result};
use rand_core::RngCore;
use sigma_algebra::{Element, Set};
use sigma_morphisms::Function;
use subtle::ConstantTimeEq;

/// Generates and verifies proofs for one relation
pub trait ProofGenerator {
    /// Witness known to the prover
    type PrivateInput;

    fn public_input_space(&self) -> &Set;

    fn proof_space(&self) -> &Set;

    fn generate(
        &self,
        private_input: &Self::PrivateInput,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element>;

    /// `Ok(false)` for a well-formed proof that does not verify; errors only
    /// for proofs or public inputs outside their spaces
    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool>;
}

/// Borrowed view of a `(commitment, challenge, response)` transcript
#[derive(Clone, Copy, Debug)]
pub struct SigmaProof<'a> {
    pub commitment: &'a Element,
    pub challenge: &'a Element,
    pub response: &'a Element,
}

impl<'a> SigmaProof<'a> {
    pub fn parse(proof: &'a Element) -> Result<Self> {
        match proof.value().as_tuple() {
            Some([commitment, challenge, response]) => Ok(Self {
                commitment,
                challenge,
                response,
            }),
            _ => Err(ProofError::MalformedProof(format!(
                "{proof} is not a (commitment, challenge, response) triple"
            ))),
        }
    }
}

pub(crate) fn check_public_input(space: &Set, public_input: &Element) -> Result<()> {
    if space.contains(public_input) {
        Ok(())
    } else {
        Err(ProofError::InvalidArgument(format!(
            "public input {public_input} is not in {space}"
        )))
    }
}

pub(crate) fn check_proof(space: &Set, proof: &Element) -> Result<()> {
    if space.contains(proof) {
        Ok(())
    } else {
        Err(ProofError::MalformedProof(format!(
            "{proof} is not in the proof space {space}"
        )))
    }
}

pub(crate) fn check_private_input(space: &Set, private_input: &Element) -> Result<()> {
    if space.contains(private_input) {
        Ok(())
    } else {
        Err(ProofError::InvalidArgument(format!(
            "private input {private_input} is not in {space}"
        )))
    }
}

/// Constant-time equality of two elements' encodings
pub(crate) fn challenges_match(left: &Element, right: &Element) -> bool {
    let left = left.to_integer().to_bytes_be();
    let right = right.to_integer().to_bytes_be();
    left.ct_eq(&right).into()
}

/// Response `s = r ∘ x^c`
pub(crate) fn respond(
    randomization: &Element,
    secret: &Element,
    challenge: &Element,
) -> Result<Element> {
    Ok(randomization.apply(&secret.self_apply_by(challenge)?)?)
}

/// Verification equation `f(s) = t ∘ y^c`
pub(crate) fn check_response(
    function: &Function,
    public_input: &Element,
    commitment: &Element,
    challenge: &Element,
    response: &Element,
) -> Result<bool> {
    let left = function.apply(response)?;
    let right = commitment.apply(&public_input.self_apply_by(challenge)?)?;
    Ok(left == right)
}

/// Commitment `t = f(s) ∘ (y^c)^-1` that makes `(t, c, s)` verify
pub(crate) fn simulate(
    function: &Function,
    public_input: &Element,
    challenge: &Element,
    response: &Element,
) -> Result<Element> {
    let image = function.apply(response)?;
    Ok(image.apply_inverse(&public_input.self_apply_by(challenge)?)?)
}

/// Challenge space shared by relations over `domain`
pub(crate) fn default_challenge_space(domain: &Set) -> Result<Set> {
    Ok(domain.zmod_minimal_order()?)
}

/// Checks that `function` maps between groups
pub(crate) fn check_homomorphism(function: &Function) -> Result<()> {
    for (role, set) in [("domain", function.domain()), ("co-domain", function.co_domain())] {
        if set.to_group().is_err() {
            return Err(ProofError::InvalidArgument(format!(
                "{role} {set} of a proof function must be a group"
            )));
        }
    }
    Ok(())
}
