//! Functions built from a group operation

use crate::errors::{FunctionError, Result};
use crate::function::{Function, Morphism};
use sigma_algebra::{CyclicGroup, Element, Group, Monoid, Set};

#[derive(Debug)]
struct Apply {
    monoid: Monoid,
    domain: Set,
}

impl Morphism for Apply {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.monoid.as_set()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(self.monoid.apply_all(input.components()?)?)
    }
}

/// `(x_1, ..., x_n) ↦ x_1 ∘ ... ∘ x_n`; the empty tuple maps to the identity
pub fn apply(monoid: &Monoid, arity: usize) -> Function {
    Function::new(Apply {
        monoid: monoid.clone(),
        domain: Set::product_uniform(monoid.as_set().clone(), arity),
    })
}

#[derive(Debug)]
struct ApplyInverse {
    group: Group,
    domain: Set,
}

impl Morphism for ApplyInverse {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.group.as_set()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(self.group.apply_inverse(input.get_at(0)?, input.get_at(1)?)?)
    }
}

/// `(a, b) ↦ a ∘ b^-1`
pub fn apply_inverse(group: &Group) -> Function {
    Function::new(ApplyInverse {
        group: group.clone(),
        domain: Set::product_uniform(group.as_set().clone(), 2),
    })
}

#[derive(Debug)]
struct Invert {
    group: Group,
}

impl Morphism for Invert {
    fn domain(&self) -> &Set {
        self.group.as_set()
    }

    fn co_domain(&self) -> &Set {
        self.group.as_set()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(self.group.invert(input)?)
    }
}

/// `x ↦ x^-1`
pub fn invert(group: &Group) -> Function {
    Function::new(Invert {
        group: group.clone(),
    })
}

#[derive(Debug)]
struct SelfApply {
    monoid: Monoid,
    domain: Set,
}

impl Morphism for SelfApply {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.monoid.as_set()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        let amount = input.get_at(1)?.to_big_int()?;
        Ok(self.monoid.self_apply(input.get_at(0)?, &amount)?)
    }
}

/// `(x, k) ↦ x^k` with amounts taken from the numeric set `amounts`
pub fn self_apply(monoid: &Monoid, amounts: &Set) -> Result<Function> {
    if !amounts.is_numeric() {
        return Err(FunctionError::InvalidArgument(format!(
            "{amounts} cannot supply exponents"
        )));
    }
    Ok(Function::new(SelfApply {
        monoid: monoid.clone(),
        domain: Set::product(vec![monoid.as_set().clone(), amounts.clone()]),
    }))
}

#[derive(Debug)]
struct Generator {
    generator: Element,
    domain: Set,
}

impl Morphism for Generator {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.generator.set()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(self.generator.self_apply_by(input)?)
    }
}

/// `k ↦ g^k` for a generator `g` of `group`.
///
/// Exponents range over `Z_q` for a group of finite order `q`, over `Z`
/// otherwise.
pub fn generator(group: &CyclicGroup, generator: &Element) -> Result<Function> {
    if !group.is_generator(generator) {
        return Err(FunctionError::InvalidArgument(format!(
            "{generator} does not generate {}",
            group.as_set()
        )));
    }
    let domain = if group.is_finite() {
        group.zmod_order()?
    } else {
        Set::integers()
    };
    Ok(Function::new(Generator {
        generator: generator.clone(),
        domain,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{composite, product};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn group() -> CyclicGroup {
        Set::gstarmod_safe_prime(1187u32)
            .unwrap()
            .to_cyclic_group()
            .unwrap()
    }

    #[test]
    fn test_apply_folds_and_handles_empty_input() {
        let z11 = Set::zmod(11u32).unwrap();
        let sum = apply(&z11.to_monoid().unwrap(), 3);
        let input = Element::triple(
            z11.element(4).unwrap(),
            z11.element(5).unwrap(),
            z11.element(6).unwrap(),
        );
        assert_eq!(sum.apply(&input).unwrap(), z11.element(4).unwrap());

        let empty = apply(&z11.to_monoid().unwrap(), 0);
        assert_eq!(empty.apply(&Element::tuple(vec![])).unwrap(), z11.identity().unwrap());
    }

    #[test]
    fn test_apply_inverse_and_invert() {
        let g = group();
        let a = g.element(4).unwrap();
        let b = g.element(16).unwrap();
        let quotient = apply_inverse(&g.as_group())
            .apply(&Element::pair(b.clone(), a.clone()))
            .unwrap();
        assert_eq!(quotient, a);

        let inverse = invert(&g.as_group()).apply(&a).unwrap();
        assert!(inverse.apply(&a).unwrap().is_identity());
    }

    #[test]
    fn test_generator_function() {
        let g = group();
        let generator_element = g.default_generator().unwrap();
        let f = generator(&g, &generator_element).unwrap();
        assert_eq!(f.domain(), &Set::zmod(593u32).unwrap());

        let exponent = f.domain().element(5).unwrap();
        assert_eq!(
            f.apply(&exponent).unwrap(),
            generator_element.self_apply(&5.into()).unwrap()
        );
        assert!(matches!(
            generator(&g, &g.identity().unwrap()),
            Err(FunctionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generator_over_integers() {
        let z = Set::integers().to_cyclic_group().unwrap();
        let one = z.element(1).unwrap();
        let f = generator(&z, &one).unwrap();
        assert_eq!(f.domain(), &Set::integers());
        assert_eq!(
            f.apply(&Set::integers().element(-9).unwrap()).unwrap(),
            z.element(-9).unwrap()
        );
    }

    #[test]
    fn test_self_apply_with_naturals() {
        let z11 = Set::zmod(11u32).unwrap();
        let f = self_apply(&z11.to_monoid().unwrap(), &Set::naturals()).unwrap();
        let input = Element::pair(z11.element(3).unwrap(), Set::naturals().element(4).unwrap());
        assert_eq!(f.apply(&input).unwrap(), z11.element(1).unwrap());
        assert!(self_apply(&z11.to_monoid().unwrap(), &Set::byte_arrays(0, 2).unwrap()).is_err());
    }

    /// A product of generator functions composed with the group operation
    /// computes a two-base commitment
    #[test]
    fn test_two_base_exponentiation() {
        let g = group();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let bases = g.independent_generators(2, b"two-base").unwrap();
        let f = composite(vec![
            product(vec![
                generator(&g, &bases[0]).unwrap(),
                generator(&g, &bases[1]).unwrap(),
            ]),
            apply(&g.as_monoid(), 2),
        ])
        .unwrap();

        let exponents = f.domain().random_element(&mut rng);
        let expected = bases[0]
            .self_apply_by(exponents.get_at(0).unwrap())
            .unwrap()
            .apply(&bases[1].self_apply_by(exponents.get_at(1).unwrap()).unwrap())
            .unwrap();
        assert_eq!(f.apply(&exponents).unwrap(), expected);
    }
}
