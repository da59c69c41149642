//! Elements and their canonical values
//!
//! An [`Element`] pairs a canonical [`Value`] with the [`Set`] it belongs
//! to. Elements are only handed out by their set, which checks membership,
//! so `element.set().contains(&element)` always holds.

use crate::errors::{AlgebraError, Result};
use crate::numeric::{ResidueClass, WholeNumber};
use crate::set::Set;
use num_bigint::{BigInt, BigUint};
use std::fmt;

/// Canonical value of an element
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Member of `Z` or `N`
    Integer(WholeNumber),
    /// Member of a modular set
    Residue(ResidueClass),
    /// Member of a byte-array set
    Bytes(Vec<u8>),
    /// Coefficients `c_0, c_1, ...` without trailing zeros
    Polynomial(Vec<BigUint>),
    /// Member of a product set
    Tuple(Vec<Element>),
}

impl Value {
    pub fn as_whole_number(&self) -> Option<&WholeNumber> {
        match self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_residue(&self) -> Option<&ResidueClass> {
        match self {
            Value::Residue(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_coefficients(&self) -> Option<&[BigUint]> {
        match self {
            Value::Polynomial(coefficients) => Some(coefficients),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Element]> {
        match self {
            Value::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    pub(crate) fn whole(&self) -> Result<&WholeNumber> {
        self.as_whole_number()
            .ok_or_else(|| AlgebraError::InvalidElement(format!("{self} is not an integer")))
    }

    pub(crate) fn residue(&self) -> Result<&ResidueClass> {
        self.as_residue()
            .ok_or_else(|| AlgebraError::InvalidElement(format!("{self} is not a residue")))
    }

    pub(crate) fn coefficients(&self) -> Result<&[BigUint]> {
        self.as_coefficients()
            .ok_or_else(|| AlgebraError::InvalidElement(format!("{self} is not a polynomial")))
    }

    pub(crate) fn tuple(&self) -> Result<&[Element]> {
        self.as_tuple()
            .ok_or_else(|| AlgebraError::InvalidElement(format!("{self} is not a tuple")))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Residue(value) => write!(f, "{value}"),
            Value::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            Value::Polynomial(coefficients) => {
                if coefficients.is_empty() {
                    return f.write_str("0");
                }
                let terms: Vec<String> = coefficients
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| !num_traits::Zero::is_zero(*c))
                    .map(|(i, c)| match i {
                        0 => format!("{c}"),
                        1 => format!("{c}X"),
                        _ => format!("{c}X^{i}"),
                    })
                    .collect();
                f.write_str(&terms.join("+"))
            }
            Value::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Immutable member of a [`Set`]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element {
    set: Set,
    value: Value,
}

impl Element {
    /// Caller guarantees `set.contains_value(&value)`
    pub(crate) fn new_unchecked(set: Set, value: Value) -> Self {
        debug_assert!(set.contains_value(&value), "{value} is not in {set}");
        Element { set, value }
    }

    /// Tuple over the product of the components' sets
    pub fn tuple(elements: Vec<Element>) -> Element {
        let set = Set::product(elements.iter().map(|e| e.set.clone()).collect());
        Element {
            set,
            value: Value::Tuple(elements),
        }
    }

    pub fn pair(first: Element, second: Element) -> Element {
        Element::tuple(vec![first, second])
    }

    pub fn triple(first: Element, second: Element, third: Element) -> Element {
        Element::tuple(vec![first, second, third])
    }

    pub fn set(&self) -> &Set {
        &self.set
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Integer encoding within the owning set
    pub fn to_integer(&self) -> BigUint {
        self.set.structure().to_integer(&self.value)
    }

    /// Numeric value usable as an exponent or scalar
    pub fn to_big_int(&self) -> Result<BigInt> {
        match &self.value {
            Value::Integer(value) => Ok(value.value().clone()),
            Value::Residue(value) => Ok(BigInt::from(value.value().clone())),
            _ => Err(AlgebraError::InvalidElement(format!(
                "{self} has no integer value"
            ))),
        }
    }

    /// Group operation `self ∘ other`
    pub fn apply(&self, other: &Element) -> Result<Element> {
        self.set.apply(self, other)
    }

    /// `self ∘ other^-1`
    pub fn apply_inverse(&self, other: &Element) -> Result<Element> {
        self.apply(&other.invert()?)
    }

    pub fn invert(&self) -> Result<Element> {
        self.set.invert(self)
    }

    /// `self` combined with itself `amount` times; negative amounts invert first
    pub fn self_apply(&self, amount: &BigInt) -> Result<Element> {
        self.set.self_apply(self, amount)
    }

    /// [`Element::self_apply`] with the integer value of `amount`
    pub fn self_apply_by(&self, amount: &Element) -> Result<Element> {
        self.self_apply(&amount.to_big_int()?)
    }

    /// Ring multiplication
    pub fn multiply(&self, other: &Element) -> Result<Element> {
        self.set.multiply(self, other)
    }

    /// Multiplicative inverse in a ring
    pub fn multiplicative_inverse(&self) -> Result<Element> {
        self.set.multiplicative_inverse(self)
    }

    pub fn is_identity(&self) -> bool {
        self.set
            .identity()
            .map_or(false, |identity| identity.value == self.value)
    }

    pub fn is_generator(&self) -> bool {
        self.set.structure().is_generator(&self.value)
    }

    /// Number of components; non-tuple elements have arity one
    pub fn arity(&self) -> usize {
        match &self.value {
            Value::Tuple(elements) => elements.len(),
            _ => 1,
        }
    }

    pub fn components(&self) -> Result<&[Element]> {
        self.value
            .as_tuple()
            .ok_or_else(|| AlgebraError::unsupported(&self.set, "components"))
    }

    pub fn get_at(&self, index: usize) -> Result<&Element> {
        let components = self.components()?;
        components.get(index).ok_or(AlgebraError::IndexOutOfRange {
            index,
            arity: components.len(),
        })
    }

    /// Follows `path` through nested tuples
    pub fn get_at_path(&self, path: &[usize]) -> Result<&Element> {
        path.iter()
            .try_fold(self, |element, &index| element.get_at(index))
    }

    /// Tuple without the component at `index`
    pub fn remove_at(&self, index: usize) -> Result<Element> {
        let components = self.components()?;
        if index >= components.len() {
            return Err(AlgebraError::IndexOutOfRange {
                index,
                arity: components.len(),
            });
        }
        let set = self.set.remove_at(index)?;
        let remaining = components
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.clone())
            .collect();
        Ok(Element::new_unchecked(set, Value::Tuple(remaining)))
    }

    /// Evaluates a polynomial element at a point of its coefficient ring
    pub fn evaluate(&self, point: &Element) -> Result<Element> {
        let coefficients = self.value.coefficients()?;
        let modulus = point.value.residue()?.modulus();
        let ring = self.set.coefficient_ring()?;
        if point.set != ring {
            return Err(AlgebraError::IncompatibleArguments(format!(
                "cannot evaluate {} at a point of {}",
                self.set,
                point.set
            )));
        }
        // Horner's method
        let x = point.value.residue()?.value();
        let mut result = BigUint::default();
        for coefficient in coefficients.iter().rev() {
            result = (result * x + coefficient) % modulus;
        }
        ring.element_from(&result)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.set, self.value)
    }
}
