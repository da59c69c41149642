//! Inequality of preimages
//!
//! For public `y = f1(x)` and `z`, proves `z ≠ f2(x)` without revealing
//! `x`. The prover commits to `C = (f2(x) ∘ z^-1)^r` for a random non-zero
//! `r` and proves knowledge of `(a, b) = (x·r, r)` with
//!
//! ```text
//! f2(a) ∘ (z^b)^-1 = C
//! f1(a) ∘ (y^b)^-1 = 1
//! ```
//!
//! The proof is `(equality proof, C)`; it verifies when the equality proof
//! does and `C` is not the identity.

use crate::challenge::{ChallengeGenerator, NonInteractiveChallengeGenerator};
use crate::config::SigmaConfig;
use crate::equality::PreimageEqualityProofGenerator;
use crate::errors::{ProofError, Result};
use crate::proof_generator::{check_private_input, check_proof, check_public_input, ProofGenerator};
use rand_core::RngCore;
use sigma_algebra::{CyclicGroup, Element, Set};
use sigma_morphisms::{
    apply_inverse, composite, generator, multi_identity, product, selection, self_apply, Function,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Proof that two functions disagree on the prover's secret
#[derive(Clone, Debug)]
pub struct InequalityProofGenerator {
    first: Function,
    second: Function,
    challenge_generator: Arc<dyn ChallengeGenerator>,
    public_input_space: Set,
    proof_space: Set,
}

fn check_functions(first: &Function, second: &Function) -> Result<()> {
    if first.domain() != second.domain() {
        return Err(ProofError::IncompatibleArguments(format!(
            "functions over {} and {} do not share a domain",
            first.domain(),
            second.domain()
        )));
    }
    if !first.domain().is_numeric() || !first.domain().is_finite() {
        return Err(ProofError::InvalidArgument(format!(
            "{} cannot serve as exponents",
            first.domain()
        )));
    }
    for function in [first, second] {
        function.co_domain().to_cyclic_group()?;
    }
    Ok(())
}

/// Public input space `(f2 codomain) × (f1 codomain)` and challenges of the
/// inner equality proof
fn inner_spaces(first: &Function, second: &Function) -> Result<(Set, Set)> {
    let public = Set::product(vec![second.co_domain().clone(), first.co_domain().clone()]);
    let domain = Set::product_uniform(first.domain().clone(), 2);
    Ok((public, domain.zmod_minimal_order()?))
}

/// `(a, b) ↦ f(a) ∘ (y^b)^-1` over `domain = D × D`
fn shifted(domain: &Set, function: &Function, y: &Element) -> Result<Function> {
    let group = y.set().to_group()?;
    let amounts = domain.get_at(1)?;
    let power_of_y = self_apply(&group.as_monoid(), &amounts)?.partially_apply(y, 0)?;
    Ok(composite(vec![
        multi_identity(domain.clone(), 2),
        product(vec![
            composite(vec![selection(domain, &[0])?, function.clone()])?,
            composite(vec![selection(domain, &[1])?, power_of_y])?,
        ]),
        apply_inverse(&group),
    ])?)
}

impl InequalityProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        first: Function,
        second: Function,
    ) -> Result<Self> {
        check_functions(&first, &second)?;
        let (inner_public, _) = inner_spaces(&first, &second)?;
        if challenge_generator.public_input_space() != &inner_public
            || challenge_generator.commitment_space() != &inner_public
        {
            return Err(ProofError::IncompatibleArguments(format!(
                "challenge generator over ({}, {}) cannot serve an inequality proof \
                 into {inner_public}",
                challenge_generator.public_input_space(),
                challenge_generator.commitment_space()
            )));
        }
        let public_input_space =
            Set::product(vec![first.co_domain().clone(), second.co_domain().clone()]);
        let inner_proof_space = Set::product(vec![
            inner_public,
            challenge_generator.challenge_space().clone(),
            Set::product_uniform(first.domain().clone(), 2),
        ]);
        let proof_space = Set::product(vec![inner_proof_space, second.co_domain().clone()]);
        Ok(Self {
            first,
            second,
            challenge_generator,
            public_input_space,
            proof_space,
        })
    }

    /// Discrete-log inequality `log_g1(y) ≠ log_g2(z)` for two generators
    /// of one group
    pub fn from_generators(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        group: &CyclicGroup,
        first_generator: &Element,
        second_generator: &Element,
    ) -> Result<Self> {
        Self::new(
            challenge_generator,
            generator(group, first_generator)?,
            generator(group, second_generator)?,
        )
    }

    pub fn non_interactive(
        first: Function,
        second: Function,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let challenge_generator =
            Self::default_challenge_generator(&first, &second, prover_id, config)?;
        Self::new(Arc::new(challenge_generator), first, second)
    }

    pub fn default_challenge_generator(
        first: &Function,
        second: &Function,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        check_functions(first, second)?;
        let (public, challenge_space) = inner_spaces(first, second)?;
        NonInteractiveChallengeGenerator::new(
            public.clone(),
            public,
            challenge_space,
            prover_id,
            config,
        )
    }

    pub fn private_input_space(&self) -> &Set {
        self.first.domain()
    }

    fn equality_generator(
        &self,
        y: &Element,
        z: &Element,
    ) -> Result<PreimageEqualityProofGenerator> {
        let domain = Set::product_uniform(self.private_input_space().clone(), 2);
        PreimageEqualityProofGenerator::new(
            self.challenge_generator.clone(),
            vec![
                shifted(&domain, &self.second, z)?,
                shifted(&domain, &self.first, y)?,
            ],
        )
    }

    fn inner_public(&self, commitment: &Element) -> Result<Element> {
        let identity = self.first.co_domain().identity()?;
        Ok(Element::pair(commitment.clone(), identity))
    }
}

impl ProofGenerator for InequalityProofGenerator {
    type PrivateInput = Element;

    fn public_input_space(&self) -> &Set {
        &self.public_input_space
    }

    fn proof_space(&self) -> &Set {
        &self.proof_space
    }

    #[instrument(skip_all, name = "inequality_proof_generate")]
    fn generate(
        &self,
        secret: &Element,
        public_input: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<Element> {
        check_private_input(self.private_input_space(), secret)?;
        check_public_input(&self.public_input_space, public_input)?;
        let y = public_input.get_at(0)?;
        let z = public_input.get_at(1)?;

        let domain = self.private_input_space();
        let r = loop {
            let candidate = domain.random_element(&mut *rng);
            if !candidate.is_identity() {
                break candidate;
            }
        };
        let commitment = self
            .second
            .apply(secret)?
            .apply_inverse(z)?
            .self_apply_by(&r)?;

        let inner = self.equality_generator(y, z)?;
        let witness = Element::pair(secret.self_apply_by(&r)?, r);
        let inner_proof = inner.generate(&witness, &self.inner_public(&commitment)?, rng)?;
        Ok(self.proof_space.tuple(vec![inner_proof, commitment])?)
    }

    #[instrument(skip_all, name = "inequality_proof_verify")]
    fn verify(&self, proof: &Element, public_input: &Element) -> Result<bool> {
        check_proof(&self.proof_space, proof)?;
        check_public_input(&self.public_input_space, public_input)?;
        let inner_proof = proof.get_at(0)?;
        let commitment = proof.get_at(1)?;

        let inner = self.equality_generator(public_input.get_at(0)?, public_input.get_at(1)?)?;
        if !inner.verify(inner_proof, &self.inner_public(commitment)?)? {
            debug!("equality proof does not verify");
            return Ok(false);
        }
        if commitment.is_identity() {
            debug!("commitment is the identity");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    const SAFE_PRIME: u128 = 170141183460469231731687303715884103007;

    fn setup() -> (CyclicGroup, InequalityProofGenerator) {
        let group = Set::gstarmod_safe_prime(SAFE_PRIME)
            .unwrap()
            .to_cyclic_group()
            .unwrap();
        let bases = group.independent_generators(2, b"inequality-test").unwrap();
        let first = generator(&group, &bases[0]).unwrap();
        let second = generator(&group, &bases[1]).unwrap();
        let pg =
            InequalityProofGenerator::non_interactive(first, second, None, &SigmaConfig::default())
                .unwrap();
        (group, pg)
    }

    #[test]
    fn test_inequality_of_discrete_logs() {
        let (_, pg) = setup();
        let mut rng = thread_rng();
        let x = pg.private_input_space().random_element(&mut rng);
        let w = pg.private_input_space().random_element(&mut rng);
        let public = Element::pair(pg.first.apply(&x).unwrap(), pg.second.apply(&w).unwrap());

        let proof = pg.generate(&x, &public, &mut rng).unwrap();
        assert!(pg.proof_space().contains(&proof));
        assert!(pg.verify(&proof, &public).unwrap());
    }

    #[test]
    fn test_equal_discrete_logs_rejected() {
        let (_, pg) = setup();
        let mut rng = thread_rng();
        let x = pg.private_input_space().random_element(&mut rng);
        let public = Element::pair(pg.first.apply(&x).unwrap(), pg.second.apply(&x).unwrap());

        // C is the identity when the logarithms agree
        let proof = pg.generate(&x, &public, &mut rng).unwrap();
        assert!(proof.get_at(1).unwrap().is_identity());
        assert!(!pg.verify(&proof, &public).unwrap());
    }

    #[test]
    fn test_tampered_commitment_rejected() {
        let (group, pg) = setup();
        let mut rng = thread_rng();
        let x = pg.private_input_space().random_element(&mut rng);
        let w = pg.private_input_space().random_element(&mut rng);
        let public = Element::pair(pg.first.apply(&x).unwrap(), pg.second.apply(&w).unwrap());
        let proof = pg.generate(&x, &public, &mut rng).unwrap();

        let shifted = proof
            .get_at(1)
            .unwrap()
            .apply(&group.default_generator().unwrap())
            .unwrap();
        let tampered = Element::pair(proof.get_at(0).unwrap().clone(), shifted);
        assert!(!pg.verify(&tampered, &public).unwrap());
    }

    #[test]
    fn test_from_generators_requires_shared_domain() {
        let (group, _) = setup();
        let small = Set::gstarmod_safe_prime(1187u32)
            .unwrap()
            .to_cyclic_group()
            .unwrap();
        let first = generator(&group, &group.default_generator().unwrap()).unwrap();
        let second = generator(&small, &small.default_generator().unwrap()).unwrap();
        assert!(matches!(
            InequalityProofGenerator::non_interactive(first, second, None, &SigmaConfig::default()),
            Err(ProofError::IncompatibleArguments(_))
        ));
    }
}
