//! Typed capability handles
//!
//! A handle wraps a [`Set`] whose capability was checked when the handle was
//! built, so code taking a [`CyclicGroup`] never has to narrow a plain set
//! at run time. Every handle dereferences to its set.

use crate::capability::Capability;
use crate::element::Element;
use crate::errors::{AlgebraError, Result};
use crate::set::Set;
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use sha2::{Digest, Sha256};
use std::ops::Deref;

/// Upper bound on candidates drawn per requested independent generator
const MAX_GENERATOR_ATTEMPTS: usize = 1024;

fn require(set: &Set, capability: Capability) -> Result<()> {
    if set.has(capability) {
        Ok(())
    } else {
        Err(AlgebraError::InvalidArgument(format!(
            "{set} is not a {capability}"
        )))
    }
}

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $capability:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Set);

        impl $name {
            /// Checks the capability and wraps the set
            pub fn new(set: Set) -> Result<Self> {
                require(&set, $capability)?;
                Ok($name(set))
            }

            pub fn as_set(&self) -> &Set {
                &self.0
            }

            pub fn into_set(self) -> Set {
                self.0
            }

            fn check(&self, element: &Element) -> Result<()> {
                self.0.check_member(element)
            }
        }

        impl Deref for $name {
            type Target = Set;

            fn deref(&self) -> &Set {
                &self.0
            }
        }

        impl TryFrom<Set> for $name {
            type Error = AlgebraError;

            fn try_from(set: Set) -> Result<Self> {
                $name::new(set)
            }
        }

        impl From<$name> for Set {
            fn from(handle: $name) -> Set {
                handle.0
            }
        }
    };
}

handle!(
    /// Set with an associative operation and identity
    Monoid,
    Capability::Monoid
);
handle!(
    /// Monoid with inverses
    Group,
    Capability::Group
);
handle!(
    /// Group with a generator
    CyclicGroup,
    Capability::Cyclic
);
handle!(
    /// Additive group with multiplication
    Ring,
    Capability::Ring
);
handle!(
    /// Ring where every non-zero element is invertible
    Field,
    Capability::Field
);

impl Monoid {
    pub fn apply(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        left.apply(right)
    }

    /// Folds `elements` with the operation, starting from the identity
    pub fn apply_all(&self, elements: &[Element]) -> Result<Element> {
        elements
            .iter()
            .try_fold(self.identity()?, |acc, e| self.apply(&acc, e))
    }

    pub fn self_apply(&self, element: &Element, amount: &BigInt) -> Result<Element> {
        self.check(element)?;
        element.self_apply(amount)
    }
}

impl Group {
    pub fn as_monoid(&self) -> Monoid {
        Monoid(self.0.clone())
    }

    pub fn apply(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        left.apply(right)
    }

    pub fn invert(&self, element: &Element) -> Result<Element> {
        self.check(element)?;
        element.invert()
    }

    /// `left ∘ right^-1`
    pub fn apply_inverse(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        self.check(right)?;
        left.apply_inverse(right)
    }

    pub fn self_apply(&self, element: &Element, amount: &BigInt) -> Result<Element> {
        self.check(element)?;
        element.self_apply(amount)
    }
}

impl CyclicGroup {
    pub fn as_group(&self) -> Group {
        Group(self.0.clone())
    }

    pub fn as_monoid(&self) -> Monoid {
        Monoid(self.0.clone())
    }

    pub fn is_generator(&self, element: &Element) -> bool {
        self.check(element).is_ok() && element.is_generator()
    }

    /// Samples until a generator is found
    pub fn random_generator(&self, rng: &mut dyn RngCore) -> Result<Element> {
        for _ in 0..MAX_GENERATOR_ATTEMPTS {
            let candidate = self.0.random_element(&mut *rng);
            if candidate.is_generator() {
                return Ok(candidate);
            }
        }
        Err(AlgebraError::InvalidArgument(format!(
            "no generator of {} found",
            self.0
        )))
    }

    /// Distinct generators derived deterministically from `seed`.
    ///
    /// Every party deriving generators from the same seed obtains the same
    /// list. Candidates are sampled from a ChaCha20 stream keyed by the
    /// SHA-256 digest of the seed; no discrete-log relation between them is
    /// known to anyone, but independence is not verified.
    pub fn independent_generators(&self, count: usize, seed: &[u8]) -> Result<Vec<Element>> {
        let digest = Sha256::new()
            .chain_update(b"independent-generators")
            .chain_update((seed.len() as u64).to_be_bytes())
            .chain_update(seed)
            .finalize();
        let mut rng = ChaCha20Rng::from_seed(digest.into());

        let mut generators: Vec<Element> = Vec::with_capacity(count);
        let mut attempts = 0usize;
        while generators.len() < count {
            if attempts >= MAX_GENERATOR_ATTEMPTS * count.max(1) {
                return Err(AlgebraError::InvalidArgument(format!(
                    "cannot derive {count} independent generators of {}",
                    self.0
                )));
            }
            attempts += 1;
            let candidate = self.0.random_element(&mut rng);
            if candidate.is_generator() && !generators.contains(&candidate) {
                generators.push(candidate);
            }
        }
        Ok(generators)
    }
}

impl Ring {
    pub fn as_group(&self) -> Group {
        Group(self.0.clone())
    }

    pub fn zero(&self) -> Result<Element> {
        self.0.identity()
    }

    pub fn add(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        left.apply(right)
    }

    pub fn negate(&self, element: &Element) -> Result<Element> {
        self.check(element)?;
        element.invert()
    }

    pub fn subtract(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        self.check(right)?;
        left.apply_inverse(right)
    }

    pub fn multiply(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        left.multiply(right)
    }

    pub fn power(&self, element: &Element, exponent: u32) -> Result<Element> {
        self.check(element)?;
        (0..exponent).try_fold(self.0.one()?, |acc, _| acc.multiply(element))
    }
}

impl Field {
    pub fn as_ring(&self) -> Ring {
        Ring(self.0.clone())
    }

    pub fn multiplicative_inverse(&self, element: &Element) -> Result<Element> {
        self.check(element)?;
        element.multiplicative_inverse()
    }

    pub fn divide(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check(left)?;
        left.multiply(&self.multiplicative_inverse(right)?)
    }
}

impl Set {
    pub fn to_monoid(&self) -> Result<Monoid> {
        Monoid::new(self.clone())
    }

    pub fn to_group(&self) -> Result<Group> {
        Group::new(self.clone())
    }

    pub fn to_cyclic_group(&self) -> Result<CyclicGroup> {
        CyclicGroup::new(self.clone())
    }

    pub fn to_ring(&self) -> Result<Ring> {
        Ring::new(self.clone())
    }

    pub fn to_field(&self) -> Result<Field> {
        Field::new(self.clone())
    }
}
