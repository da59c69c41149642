//! Pedersen commitments
//!
//! `commit(m, r) = g^m ∘ h^r` for two generators `g`, `h` of a cyclic group.
//! Generators are either supplied or derived from a public seed, so that
//! every party obtains the same pair without a trusted setup. Independence
//! of the generators is assumed, never checked.

use crate::errors::{Result, SchemeError};
use sigma_algebra::{CyclicGroup, Element, Set};
use sigma_morphisms::{apply, composite, generator, product, Function};

/// Seed used by [`PedersenCommitmentScheme::new`]
pub const DEFAULT_GENERATOR_SEED: &[u8] = b"pedersen-commitment-generators";

#[derive(Clone, Debug)]
pub struct PedersenCommitmentScheme {
    group: CyclicGroup,
    message_generator: Element,
    randomization_generator: Element,
    commitment_function: Function,
}

impl PedersenCommitmentScheme {
    /// Generators derived from [`DEFAULT_GENERATOR_SEED`]
    pub fn new(group: CyclicGroup) -> Result<Self> {
        Self::with_seed(group, DEFAULT_GENERATOR_SEED)
    }

    pub fn with_seed(group: CyclicGroup, seed: &[u8]) -> Result<Self> {
        let mut generators = group.independent_generators(2, seed)?.into_iter();
        match (generators.next(), generators.next()) {
            (Some(g), Some(h)) => Self::with_generators(group, g, h),
            _ => Err(SchemeError::InvalidArgument(format!(
                "cannot derive two generators of {}",
                group.as_set()
            ))),
        }
    }

    pub fn with_generators(
        group: CyclicGroup,
        message_generator: Element,
        randomization_generator: Element,
    ) -> Result<Self> {
        for element in [&message_generator, &randomization_generator] {
            if !group.is_generator(element) {
                return Err(SchemeError::InvalidArgument(format!(
                    "{element} does not generate {}",
                    group.as_set()
                )));
            }
        }
        if message_generator == randomization_generator {
            return Err(SchemeError::InvalidArgument(
                "message and randomization generators must differ".to_string(),
            ));
        }
        let commitment_function = composite(vec![
            product(vec![
                generator(&group, &message_generator)?,
                generator(&group, &randomization_generator)?,
            ]),
            apply(&group.as_monoid(), 2),
        ])?;
        Ok(Self {
            group,
            message_generator,
            randomization_generator,
            commitment_function,
        })
    }

    pub fn group(&self) -> &CyclicGroup {
        &self.group
    }

    pub fn message_generator(&self) -> &Element {
        &self.message_generator
    }

    pub fn randomization_generator(&self) -> &Element {
        &self.randomization_generator
    }

    /// `(m, r) ↦ g^m ∘ h^r`
    pub fn commitment_function(&self) -> &Function {
        &self.commitment_function
    }

    pub fn message_space(&self) -> Result<Set> {
        Ok(self.commitment_function.domain().get_at(0)?)
    }

    pub fn randomization_space(&self) -> Result<Set> {
        Ok(self.commitment_function.domain().get_at(1)?)
    }

    pub fn commit(&self, message: &Element, randomization: &Element) -> Result<Element> {
        let input = Element::pair(message.clone(), randomization.clone());
        Ok(self.commitment_function.apply(&input)?)
    }

    /// Whether `commitment` opens to `(message, randomization)`
    pub fn decommit(
        &self,
        message: &Element,
        randomization: &Element,
        commitment: &Element,
    ) -> Result<bool> {
        Ok(&self.commit(message, randomization)? == commitment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    fn group() -> CyclicGroup {
        Set::gstarmod_safe_prime(1187u32)
            .unwrap()
            .to_cyclic_group()
            .unwrap()
    }

    #[test]
    fn test_commit_and_decommit() {
        let scheme = PedersenCommitmentScheme::new(group()).unwrap();
        let zq = scheme.message_space().unwrap();
        let m = zq.element(42).unwrap();
        let r = scheme.randomization_space().unwrap().random_element(&mut thread_rng());

        let c = scheme.commit(&m, &r).unwrap();
        let expected = scheme
            .message_generator()
            .self_apply_by(&m)
            .unwrap()
            .apply(&scheme.randomization_generator().self_apply_by(&r).unwrap())
            .unwrap();
        assert_eq!(c, expected);
        assert!(scheme.decommit(&m, &r, &c).unwrap());
        assert!(!scheme.decommit(&zq.element(43).unwrap(), &r, &c).unwrap());
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let first = PedersenCommitmentScheme::with_seed(group(), b"election-2024").unwrap();
        let second = PedersenCommitmentScheme::with_seed(group(), b"election-2024").unwrap();
        assert_eq!(first.message_generator(), second.message_generator());
        assert_eq!(first.randomization_generator(), second.randomization_generator());
        assert_ne!(first.message_generator(), first.randomization_generator());
    }

    #[test]
    fn test_rejects_bad_generators() {
        let g = group();
        let generator = g.default_generator().unwrap();
        assert!(matches!(
            PedersenCommitmentScheme::with_generators(
                g.clone(),
                generator.clone(),
                generator.clone()
            ),
            Err(SchemeError::InvalidArgument(_))
        ));
        assert!(matches!(
            PedersenCommitmentScheme::with_generators(g.clone(), generator, g.identity().unwrap()),
            Err(SchemeError::InvalidArgument(_))
        ));
    }
}
