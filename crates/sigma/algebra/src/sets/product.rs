//! Product sets over uniform or heterogeneous components

use super::Structure;
use crate::capability::Capability;
use crate::element::{Element, Value};
use crate::errors::{AlgebraError, Result};
use crate::math;
use crate::order::Order;
use crate::set::Set;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;
use rand_core::RngCore;
use std::fmt;

/// Ordered product of component sets
///
/// Kept in normal form: a list of identical components is stored as
/// `Uniform`, and the arity-0 product is the empty `Mixed` list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ProductSet {
    Uniform { set: Set, arity: usize },
    Mixed(Vec<Set>),
}

impl ProductSet {
    pub(crate) fn new(sets: Vec<Set>) -> Self {
        match sets.first() {
            Some(first) if sets.iter().all(|s| s == first) => ProductSet::Uniform {
                set: first.clone(),
                arity: sets.len(),
            },
            _ => ProductSet::Mixed(sets),
        }
    }

    pub(crate) fn uniform(set: Set, arity: usize) -> Self {
        if arity == 0 {
            ProductSet::Mixed(Vec::new())
        } else {
            ProductSet::Uniform { set, arity }
        }
    }

    pub(crate) fn arity(&self) -> usize {
        match self {
            ProductSet::Uniform { arity, .. } => *arity,
            ProductSet::Mixed(sets) => sets.len(),
        }
    }

    pub(crate) fn is_uniform(&self) -> bool {
        matches!(self, ProductSet::Uniform { .. })
    }

    pub(crate) fn component(&self, index: usize) -> Result<&Set> {
        let component = match self {
            ProductSet::Uniform { set, arity } => (index < *arity).then_some(set),
            ProductSet::Mixed(sets) => sets.get(index),
        };
        component.ok_or(AlgebraError::IndexOutOfRange {
            index,
            arity: self.arity(),
        })
    }

    pub(crate) fn components(&self) -> Vec<Set> {
        match self {
            ProductSet::Uniform { set, arity } => vec![set.clone(); *arity],
            ProductSet::Mixed(sets) => sets.clone(),
        }
    }

    pub(crate) fn remove_at(&self, index: usize) -> Result<ProductSet> {
        self.component(index)?;
        Ok(match self {
            ProductSet::Uniform { set, arity } => ProductSet::uniform(set.clone(), arity - 1),
            ProductSet::Mixed(sets) => {
                let mut sets = sets.clone();
                sets.remove(index);
                ProductSet::new(sets)
            }
        })
    }

    fn components_of<'a>(&self, value: &'a Value) -> Result<&'a [Element]> {
        let elements = value.tuple()?;
        if elements.len() != self.arity() {
            return Err(AlgebraError::InvalidElement(format!(
                "tuple of arity {} in a product of arity {}",
                elements.len(),
                self.arity()
            )));
        }
        Ok(elements)
    }

    fn zip_with(
        &self,
        left: &Value,
        right: &Value,
        op: impl Fn(&Element, &Element) -> Result<Element>,
    ) -> Result<Value> {
        let (left, right) = (self.components_of(left)?, self.components_of(right)?);
        let elements = left
            .iter()
            .zip(right)
            .map(|(a, b)| op(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Tuple(elements))
    }

    fn map_with(&self, value: &Value, op: impl Fn(&Element) -> Result<Element>) -> Result<Value> {
        let elements = self
            .components_of(value)?
            .iter()
            .map(op)
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Tuple(elements))
    }

    fn each_component(&self, op: impl Fn(&Set) -> Result<Element>) -> Result<Value> {
        let elements = self
            .components()
            .iter()
            .map(op)
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Tuple(elements))
    }

    /// Radix of the positional encoding, if the product uses one
    ///
    /// Only uniform products over a finite component whose encodings fill
    /// `[0, order)` are positional; `G_q` and `Z_n^*` encode as residues in
    /// `[1, p)` and would overflow their digit.
    fn radix(&self) -> Option<&BigUint> {
        match self {
            ProductSet::Uniform { set, .. } if set.structure().is_dense() => {
                set.order().finite()
            }
            _ => None,
        }
    }
}

impl fmt::Display for ProductSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSet::Uniform { set, arity } => write!(f, "({set})^{arity}"),
            ProductSet::Mixed(sets) => {
                f.write_str("(")?;
                for (i, set) in sets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" x ")?;
                    }
                    write!(f, "{set}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Structure for ProductSet {
    // The unit product satisfies every component-wise capability vacuously
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Compound => true,
            Capability::Cyclic | Capability::Field => false,
            _ => self.components().iter().all(|s| s.has(capability)),
        }
    }

    fn order(&self) -> Order {
        let components = self.components();
        Order::product(components.iter().map(|s| s.order()))
    }

    fn minimal_order(&self) -> Order {
        let orders: Vec<Order> = self
            .components()
            .iter()
            .map(|s| s.minimal_order())
            .collect();
        Order::minimum(&orders)
    }

    fn contains(&self, value: &Value) -> bool {
        match value.as_tuple() {
            Some(elements) if elements.len() == self.arity() => elements
                .iter()
                .enumerate()
                .all(|(i, e)| self.component(i).map_or(false, |s| s.contains(e))),
            _ => false,
        }
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        let arity = self.arity();
        let digits = match self.radix() {
            Some(radix) if !radix.is_zero() => {
                let mut rest = encoding.clone();
                let mut digits = vec![BigUint::zero(); arity];
                for digit in digits.iter_mut().rev() {
                    let (quotient, remainder) = rest.div_rem(radix);
                    *digit = remainder;
                    rest = quotient;
                }
                if !rest.is_zero() {
                    return None;
                }
                digits
            }
            Some(_) => return None,
            None => math::elegant_unpair_all(encoding, arity)?,
        };
        let elements = digits
            .iter()
            .enumerate()
            .map(|(i, digit)| self.component(i).ok()?.element_from(digit).ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Value::Tuple(elements))
    }

    // Uniform products over dense components are read as fixed-radix
    // numbers with the first component most significant; everything else is
    // elegantly paired.
    fn to_integer(&self, value: &Value) -> BigUint {
        let Some(elements) = value.as_tuple() else {
            return BigUint::zero();
        };
        match self.radix() {
            Some(radix) => elements
                .iter()
                .fold(BigUint::zero(), |acc, e| acc * radix + e.to_integer()),
            None => {
                let encodings: Vec<BigUint> = elements.iter().map(|e| e.to_integer()).collect();
                math::elegant_pair_all(&encodings)
            }
        }
    }

    fn is_dense(&self) -> bool {
        self.radix().is_some()
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        let elements = self
            .components()
            .iter()
            .map(|s| s.random_element(&mut *rng))
            .collect();
        Value::Tuple(elements)
    }

    fn identity(&self) -> Result<Value> {
        self.each_component(|s| s.identity())
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        self.zip_with(left, right, |a, b| a.apply(b))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        self.map_with(value, |e| e.invert())
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        self.map_with(value, |e| e.self_apply(amount))
    }

    fn one(&self) -> Result<Value> {
        self.each_component(|s| s.one())
    }

    fn multiply(&self, left: &Value, right: &Value) -> Result<Value> {
        self.zip_with(left, right, |a, b| a.multiply(b))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AlgebraError, Capability, Element, Order, Set};
    use num_bigint::BigUint;

    #[test]
    fn test_uniform_normalization() {
        let z7 = Set::zmod(7u32).unwrap();
        let listed = Set::product(vec![z7.clone(), z7.clone(), z7.clone()]);
        let uniform = Set::product_uniform(z7, 3);
        assert_eq!(listed, uniform);
        assert!(listed.is_uniform());
        assert_eq!(listed.order(), &Order::Finite(BigUint::from(343u32)));
    }

    #[test]
    fn test_unit_product() {
        let unit = Set::product(vec![]);
        assert_eq!(unit.arity(), 0);
        assert!(unit.is_singleton());
        assert!(unit.has(Capability::Group));
        let identity = unit.identity().unwrap();
        assert_eq!(identity, Element::tuple(vec![]));
        assert_eq!(Set::product_uniform(Set::integers(), 0), unit);
    }

    #[test]
    fn test_remove_at_down_to_unit() {
        let z7 = Set::zmod(7u32).unwrap();
        let single = Element::tuple(vec![z7.element(3).unwrap()]);
        let unit = single.remove_at(0).unwrap();
        assert_eq!(unit.arity(), 0);
        assert_eq!(unit.set(), &Set::product(vec![]));
        assert!(matches!(
            unit.remove_at(0),
            Err(AlgebraError::IndexOutOfRange { index: 0, arity: 0 })
        ));
    }

    #[test]
    fn test_get_at_out_of_range() {
        let pair = Set::product(vec![Set::integers(), Set::naturals()]);
        assert!(pair.get_at(1).is_ok());
        assert!(matches!(
            pair.get_at(2),
            Err(AlgebraError::IndexOutOfRange { index: 2, arity: 2 })
        ));
        let element = Element::pair(
            Set::integers().element(-4).unwrap(),
            Set::naturals().element(4).unwrap(),
        );
        assert!(element.get_at(5).is_err());
        assert!(Set::integers().element(1).unwrap().get_at(0).is_err());
    }

    #[test]
    fn test_nested_paths() {
        let z5 = Set::zmod(5u32).unwrap();
        let inner = Element::pair(z5.element(1).unwrap(), z5.element(2).unwrap());
        let outer = Element::pair(z5.element(3).unwrap(), inner);
        assert_eq!(outer.get_at_path(&[1, 1]).unwrap(), &z5.element(2).unwrap());
        assert_eq!(outer.set().get_at_path(&[1, 0]).unwrap(), z5);
        assert_eq!(outer.get_at_path(&[]).unwrap(), &outer);
    }

    #[test]
    fn test_heterogeneous_capabilities_and_order() {
        let mixed = Set::product(vec![Set::zmod(7u32).unwrap(), Set::naturals()]);
        assert!(mixed.has(Capability::Monoid));
        assert!(!mixed.has(Capability::Group));
        assert!(mixed.has(Capability::Compound));
        assert!(!mixed.has(Capability::Cyclic));
        assert_eq!(mixed.order(), &Order::Infinite);
        assert_eq!(mixed.minimal_order(), Order::Finite(BigUint::from(7u32)));
    }

    #[test]
    fn test_componentwise_operations() {
        let z7 = Set::zmod(7u32).unwrap();
        let g = Set::gstarmod_safe_prime(23u32).unwrap();
        let a = Element::pair(z7.element(5).unwrap(), g.element(2).unwrap());
        let b = Element::pair(z7.element(4).unwrap(), g.element(3).unwrap());
        let sum = a.apply(&b).unwrap();
        assert_eq!(sum.get_at(0).unwrap(), &z7.element(2).unwrap());
        assert_eq!(sum.get_at(1).unwrap(), &g.element(6).unwrap());
        let inverse = a.invert().unwrap();
        assert!(a.apply(&inverse).unwrap().is_identity());
    }

    #[test]
    fn test_uniform_subgroup_encoding_is_injective() {
        // G_11 in Z_23^* encodes as residues, not as indices below 11
        let g = Set::gstarmod_safe_prime(23u32).unwrap();
        let square = Set::product_uniform(g.clone(), 2);
        let first = Element::pair(g.element(1).unwrap(), g.element(12).unwrap());
        let second = Element::pair(g.element(2).unwrap(), g.element(1).unwrap());
        assert_ne!(first.to_integer(), second.to_integer());
        for element in [first, second] {
            assert_eq!(element.set(), &square);
            assert_eq!(square.element_from(&element.to_integer()).unwrap(), element);
        }
    }

    #[test]
    fn test_uniform_units_encoding_roundtrip() {
        let units = Set::zstarmod(7u32).unwrap();
        let square = Set::product_uniform(units.clone(), 2);
        let element = Element::pair(units.element(6).unwrap(), units.element(6).unwrap());
        let encoding = element.to_integer();
        assert!(square.contains_integer(&encoding));
        assert_eq!(square.element_from(&encoding).unwrap(), element);
        assert_eq!(square.coerce(&element).unwrap(), element);
    }

    #[test]
    fn test_dense_uniform_encoding_is_positional() {
        let z7 = Set::zmod(7u32).unwrap();
        let element = Element::pair(z7.element(3).unwrap(), z7.element(5).unwrap());
        assert_eq!(element.to_integer(), BigUint::from(3u32 * 7 + 5));

        let nested = Set::product_uniform(Set::product_uniform(z7.clone(), 2), 2);
        let max = BigUint::from(7u32.pow(4) - 1);
        assert_eq!(nested.element_from(&max).unwrap().to_integer(), max);
        assert!(!nested.contains_integer(&BigUint::from(7u32.pow(4))));
    }

    #[test]
    fn test_display_is_recursive() {
        let z7 = Set::zmod(7u32).unwrap();
        let element = Element::pair(
            z7.element(1).unwrap(),
            Element::pair(z7.element(2).unwrap(), z7.element(3).unwrap()),
        );
        assert_eq!(element.to_string(), "(1,(2,3))");
        assert_eq!(
            element.set().to_string(),
            "(ZMod[7] x (ZMod[7])^2)"
        );
    }
}
