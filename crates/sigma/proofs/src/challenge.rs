//! Challenge generators
//!
//! A challenge generator maps a public input and a commitment to an element
//! of the challenge space. Prover and verifier must use identical generators:
//! the non-interactive generator hashes the byte-tree encoding of
//! `(public input, commitment[, prover id])`, so any difference in spaces,
//! prover id or backend yields a different challenge and the proof fails.

use crate::config::{FiatShamir, SigmaConfig};
use crate::errors::{ProofError, Result};
use crate::transcript::{sigma_transcript, TranscriptProtocol};
use rand_core::RngCore;
use sigma_algebra::{BigUint, Element, Set};
use std::fmt;

/// Derives the challenge of a sigma protocol
pub trait ChallengeGenerator: fmt::Debug + Send + Sync {
    fn public_input_space(&self) -> &Set;

    fn commitment_space(&self) -> &Set;

    fn challenge_space(&self) -> &Set;

    fn generate(&self, public_input: &Element, commitment: &Element) -> Result<Element>;
}

/// Validates that challenges can be used as exponents and returns the
/// order of the challenge space
fn challenge_modulus(challenge_space: &Set) -> Result<BigUint> {
    match challenge_space.order().finite() {
        Some(order) if challenge_space.is_numeric() => Ok(order.clone()),
        _ => Err(ProofError::InvalidArgument(format!(
            "{challenge_space} is not a finite numeric challenge space"
        ))),
    }
}

fn check_inputs(
    generator: &dyn ChallengeGenerator,
    public_input: &Element,
    commitment: &Element,
) -> Result<()> {
    if !generator.public_input_space().contains(public_input) {
        return Err(ProofError::InvalidArgument(format!(
            "public input {public_input} is not in {}",
            generator.public_input_space()
        )));
    }
    if !generator.commitment_space().contains(commitment) {
        return Err(ProofError::InvalidArgument(format!(
            "commitment {commitment} is not in {}",
            generator.commitment_space()
        )));
    }
    Ok(())
}

/// Interactive generator returning the challenge chosen by the verifier
#[derive(Clone, Debug)]
pub struct FixedChallengeGenerator {
    public_input_space: Set,
    commitment_space: Set,
    challenge: Element,
}

impl FixedChallengeGenerator {
    pub fn new(public_input_space: Set, commitment_space: Set, challenge: Element) -> Result<Self> {
        challenge_modulus(challenge.set())?;
        Ok(Self {
            public_input_space,
            commitment_space,
            challenge,
        })
    }

    /// Verifier picks a uniformly random challenge up front
    pub fn random(
        public_input_space: Set,
        commitment_space: Set,
        challenge_space: Set,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        challenge_modulus(&challenge_space)?;
        let challenge = challenge_space.random_element(rng);
        Self::new(public_input_space, commitment_space, challenge)
    }

    pub fn challenge(&self) -> &Element {
        &self.challenge
    }
}

impl ChallengeGenerator for FixedChallengeGenerator {
    fn public_input_space(&self) -> &Set {
        &self.public_input_space
    }

    fn commitment_space(&self) -> &Set {
        &self.commitment_space
    }

    fn challenge_space(&self) -> &Set {
        self.challenge.set()
    }

    fn generate(&self, public_input: &Element, commitment: &Element) -> Result<Element> {
        check_inputs(self, public_input, commitment)?;
        Ok(self.challenge.clone())
    }
}

/// Fiat-Shamir generator
#[derive(Clone, Debug)]
pub struct NonInteractiveChallengeGenerator {
    public_input_space: Set,
    commitment_space: Set,
    challenge_space: Set,
    modulus: BigUint,
    prover_id: Option<Element>,
    backend: FiatShamir,
}

impl NonInteractiveChallengeGenerator {
    pub fn new(
        public_input_space: Set,
        commitment_space: Set,
        challenge_space: Set,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let modulus = challenge_modulus(&challenge_space)?;
        Ok(Self {
            public_input_space,
            commitment_space,
            challenge_space,
            modulus,
            prover_id,
            backend: config.fiat_shamir,
        })
    }

    pub fn prover_id(&self) -> Option<&Element> {
        self.prover_id.as_ref()
    }

    pub fn backend(&self) -> FiatShamir {
        self.backend
    }

    fn hash_input(&self, public_input: &Element, commitment: &Element) -> Element {
        match &self.prover_id {
            Some(id) => Element::triple(public_input.clone(), commitment.clone(), id.clone()),
            None => Element::pair(public_input.clone(), commitment.clone()),
        }
    }
}

impl ChallengeGenerator for NonInteractiveChallengeGenerator {
    fn public_input_space(&self) -> &Set {
        &self.public_input_space
    }

    fn commitment_space(&self) -> &Set {
        &self.commitment_space
    }

    fn challenge_space(&self) -> &Set {
        &self.challenge_space
    }

    fn generate(&self, public_input: &Element, commitment: &Element) -> Result<Element> {
        check_inputs(self, public_input, commitment)?;
        let input = self.hash_input(public_input, commitment);

        let value = match self.backend {
            FiatShamir::Hash(method) => {
                let digest = method.digest(&input.to_bytes()?);
                BigUint::from_bytes_be(&digest) % &self.modulus
            }
            FiatShamir::Transcript => {
                let mut transcript = sigma_transcript(b"non-interactive-challenge");
                transcript.append_element(b"input", &input)?;
                transcript.challenge_integer(b"challenge", &self.modulus)
            }
        };
        Ok(self.challenge_space.element_from(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use sigma_algebra::HashMethod;

    const SAFE_PRIME: u128 = 170141183460469231731687303715884103007;

    fn group_spaces(group: Set) -> (Set, Set, Set) {
        let zq = group.zmod_order().unwrap();
        (group.clone(), group, zq)
    }

    fn spaces() -> (Set, Set, Set) {
        group_spaces(Set::gstarmod_safe_prime(1187u32).unwrap())
    }

    fn large_spaces() -> (Set, Set, Set) {
        group_spaces(Set::gstarmod_safe_prime(SAFE_PRIME).unwrap())
    }

    fn generator(
        (public, commitment, challenge): (Set, Set, Set),
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> NonInteractiveChallengeGenerator {
        NonInteractiveChallengeGenerator::new(public, commitment, challenge, prover_id, config)
            .unwrap()
    }

    #[test]
    fn test_challenge_determinism() {
        let (group, _, _) = spaces();
        let y = group.element(16).unwrap();
        let t = group.element(64).unwrap();
        for config in [
            SigmaConfig::default(),
            SigmaConfig::with_hash(HashMethod::Sha512),
            SigmaConfig::with_transcript(),
        ] {
            let first = generator(spaces(), None, &config).generate(&y, &t).unwrap();
            let second = generator(spaces(), None, &config).generate(&y, &t).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_challenge_sensitivity() {
        let (group, _, _) = large_spaces();
        let ids = Set::byte_arrays(0, 16).unwrap();
        let y = group.element(16).unwrap();
        let t = group.element(64).unwrap();
        let other = group.element(4).unwrap();

        for config in [SigmaConfig::default(), SigmaConfig::with_transcript()] {
            let plain = generator(large_spaces(), None, &config);
            let base = plain.generate(&y, &t).unwrap();
            assert_ne!(plain.generate(&other, &t).unwrap(), base);
            assert_ne!(plain.generate(&y, &other).unwrap(), base);

            let id = ids
                .element_of(sigma_algebra::Value::Bytes(b"Prover1".to_vec()))
                .unwrap();
            let with_id = generator(large_spaces(), Some(id), &config);
            assert_ne!(with_id.generate(&y, &t).unwrap(), base);
        }
    }

    #[test]
    fn test_rejects_inputs_outside_spaces() {
        let (group, _, _) = spaces();
        let plain = generator(spaces(), None, &SigmaConfig::default());
        let foreign = Set::zmod(1187u32).unwrap().element(16).unwrap();
        let t = group.element(64).unwrap();
        assert!(matches!(
            plain.generate(&foreign, &t),
            Err(ProofError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_challenge_space_must_be_numeric() {
        let (group, commitment, _) = spaces();
        let result = NonInteractiveChallengeGenerator::new(
            group.clone(),
            commitment,
            group,
            None,
            &SigmaConfig::default(),
        );
        assert!(matches!(result, Err(ProofError::InvalidArgument(_))));
    }

    #[test]
    fn test_fixed_and_random_challenges() {
        let (group, commitment, zq) = spaces();
        let challenge = zq.element(7).unwrap();
        let fixed =
            FixedChallengeGenerator::new(group.clone(), commitment.clone(), challenge.clone())
                .unwrap();
        let y = group.element(16).unwrap();
        assert_eq!(fixed.generate(&y, &y).unwrap(), challenge);

        let random =
            FixedChallengeGenerator::random(group, commitment, zq.clone(), &mut thread_rng())
                .unwrap();
        assert!(zq.contains(random.challenge()));
        assert_eq!(random.generate(&y, &y).unwrap(), random.challenge().clone());
    }
}
