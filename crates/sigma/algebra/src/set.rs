//! Set handles
//!
//! A [`Set`] is a cheap, clonable handle to an immutable structural
//! descriptor. Its order and default generator are computed on first use and
//! cached; the caches are filled through [`OnceLock`], so concurrent first
//! access is safe and idempotent.

use crate::capability::Capability;
use crate::element::{Element, Value};
use crate::errors::{AlgebraError, Result};
use crate::order::Order;
use crate::sets::{
    ByteArrays, GStarMod, Integers, Naturals, PolynomialRing, ProductSet, SetKind, Structure,
    ZMod, ZStarMod,
};
use num_bigint::{BigInt, BigUint};
use rand_core::RngCore;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// Handle to a mathematical set
///
/// Two handles are equal when they describe the same kind of set with the
/// same parameters; they are compatible when only the kind matches.
#[derive(Clone)]
pub struct Set(Arc<SetInner>);

#[derive(Debug)]
struct SetInner {
    kind: SetKind,
    order: OnceLock<Order>,
    minimal_order: OnceLock<Order>,
    generator: OnceLock<Option<Value>>,
}

impl Set {
    pub(crate) fn from_kind(kind: SetKind) -> Self {
        Set(Arc::new(SetInner {
            kind,
            order: OnceLock::new(),
            minimal_order: OnceLock::new(),
            generator: OnceLock::new(),
        }))
    }

    pub(crate) fn structure(&self) -> &dyn Structure {
        self.0.kind.structure()
    }

    /// The integers `Z` as an additive cyclic group and ring
    pub fn integers() -> Set {
        static INTEGERS: OnceLock<Set> = OnceLock::new();
        INTEGERS
            .get_or_init(|| Set::from_kind(SetKind::Integers(Integers)))
            .clone()
    }

    /// The naturals `N` as an additive monoid
    pub fn naturals() -> Set {
        static NATURALS: OnceLock<Set> = OnceLock::new();
        NATURALS
            .get_or_init(|| Set::from_kind(SetKind::Naturals(Naturals)))
            .clone()
    }

    /// `Z_n` under addition; a field when `n` is prime
    pub fn zmod(modulus: impl Into<BigUint>) -> Result<Set> {
        Ok(Set::from_kind(SetKind::ZMod(ZMod::new(modulus.into())?)))
    }

    /// Units of `Z_n` under multiplication
    pub fn zstarmod(modulus: impl Into<BigUint>) -> Result<Set> {
        Ok(Set::from_kind(SetKind::ZStarMod(ZStarMod::new(
            modulus.into(),
        )?)))
    }

    /// Subgroup of prime order `order` in `Z_modulus^*`
    pub fn gstarmod(modulus: impl Into<BigUint>, order: impl Into<BigUint>) -> Result<Set> {
        Ok(Set::from_kind(SetKind::GStarMod(GStarMod::new(
            modulus.into(),
            order.into(),
        )?)))
    }

    /// Quadratic residues modulo a safe prime
    pub fn gstarmod_safe_prime(modulus: impl Into<BigUint>) -> Result<Set> {
        Ok(Set::from_kind(SetKind::GStarMod(GStarMod::safe_prime(
            modulus.into(),
        )?)))
    }

    /// Byte arrays with length in `[min_length, max_length]`
    pub fn byte_arrays(min_length: usize, max_length: usize) -> Result<Set> {
        Ok(Set::from_kind(SetKind::ByteArrays(ByteArrays::new(
            min_length, max_length,
        )?)))
    }

    /// Polynomial ring over `Z_modulus`
    pub fn polynomials(modulus: impl Into<BigUint>) -> Result<Set> {
        Ok(Set::from_kind(SetKind::Polynomials(PolynomialRing::new(
            modulus.into(),
        )?)))
    }

    /// Product of the given sets; the empty product is the unit set
    pub fn product(sets: Vec<Set>) -> Set {
        Set::from_kind(SetKind::Product(ProductSet::new(sets)))
    }

    /// `set^arity`
    pub fn product_uniform(set: Set, arity: usize) -> Set {
        Set::from_kind(SetKind::Product(ProductSet::uniform(set, arity)))
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.structure().has(capability)
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.has(*c))
            .collect()
    }

    pub fn order(&self) -> &Order {
        self.0.order.get_or_init(|| self.structure().order())
    }

    /// Smallest component order of a product, the order otherwise
    pub fn minimal_order(&self) -> Order {
        self.0
            .minimal_order
            .get_or_init(|| self.structure().minimal_order())
            .clone()
    }

    pub fn is_finite(&self) -> bool {
        self.order().is_finite()
    }

    pub fn is_empty(&self) -> bool {
        self.order().finite().map_or(false, num_traits::Zero::is_zero)
    }

    pub fn is_singleton(&self) -> bool {
        self.order().finite().map_or(false, num_traits::One::is_one)
    }

    /// `Z_n` for the finite order `n` of this set
    pub fn zmod_order(&self) -> Result<Set> {
        match self.order() {
            Order::Finite(order) => Set::zmod(order.clone()),
            order => Err(AlgebraError::UnsupportedOperation {
                set: format!("{self} of order {order}"),
                operation: "zmod_order",
            }),
        }
    }

    /// `Z_n` for the minimal order `n` of this set
    pub fn zmod_minimal_order(&self) -> Result<Set> {
        match self.minimal_order() {
            Order::Finite(order) => Set::zmod(order),
            order => Err(AlgebraError::UnsupportedOperation {
                set: format!("{self} of minimal order {order}"),
                operation: "zmod_minimal_order",
            }),
        }
    }

    /// Same structural kind, parameters aside
    pub fn is_compatible(&self, other: &Set) -> bool {
        std::mem::discriminant(&self.0.kind) == std::mem::discriminant(&other.0.kind)
    }

    pub fn contains(&self, element: &Element) -> bool {
        element.set() == self
    }

    pub fn contains_value(&self, value: &Value) -> bool {
        self.structure().contains(value)
    }

    pub fn contains_integer(&self, encoding: &BigUint) -> bool {
        self.structure().from_integer(encoding).is_some()
    }

    /// Element with the given integer encoding
    pub fn element_from(&self, encoding: &BigUint) -> Result<Element> {
        self.structure()
            .from_integer(encoding)
            .map(|value| Element::new_unchecked(self.clone(), value))
            .ok_or_else(|| {
                AlgebraError::InvalidElement(format!(
                    "no element of {self} has encoding {encoding}"
                ))
            })
    }

    /// Element with the given numeric value, for numeric sets
    pub fn element(&self, value: impl Into<BigInt>) -> Result<Element> {
        let value = value.into();
        self.structure()
            .from_big_int(&value)
            .map(|value| Element::new_unchecked(self.clone(), value))
            .ok_or_else(|| AlgebraError::InvalidElement(format!("{value} is not in {self}")))
    }

    /// Element holding `value`
    pub fn element_of(&self, value: Value) -> Result<Element> {
        if self.contains_value(&value) {
            Ok(Element::new_unchecked(self.clone(), value))
        } else {
            Err(AlgebraError::InvalidElement(format!("{value} is not in {self}")))
        }
    }

    /// Tuple of this product set
    pub fn tuple(&self, elements: Vec<Element>) -> Result<Element> {
        self.element_of(Value::Tuple(elements))
    }

    /// Re-reads an element of a compatible set through its encoding
    pub fn coerce(&self, element: &Element) -> Result<Element> {
        if self.contains(element) {
            return Ok(element.clone());
        }
        if !self.is_compatible(element.set()) {
            return Err(AlgebraError::IncompatibleArguments(format!(
                "cannot coerce an element of {} into {self}",
                element.set()
            )));
        }
        self.element_from(&element.to_integer())
    }

    /// Samples an element; uniform for finite sets, bounded otherwise
    pub fn random_element(&self, rng: &mut dyn RngCore) -> Element {
        Element::new_unchecked(self.clone(), self.structure().random(rng))
    }

    pub fn are_equal(&self, left: &Element, right: &Element) -> Result<bool> {
        self.check_member(left)?;
        self.check_member(right)?;
        Ok(left == right)
    }

    pub fn identity(&self) -> Result<Element> {
        Ok(Element::new_unchecked(self.clone(), self.structure().identity()?))
    }

    pub fn one(&self) -> Result<Element> {
        Ok(Element::new_unchecked(self.clone(), self.structure().one()?))
    }

    /// Fixed generator of a cyclic set
    pub fn default_generator(&self) -> Result<Element> {
        if !self.has(Capability::Cyclic) {
            return Err(AlgebraError::unsupported(self, "default_generator"));
        }
        self.0
            .generator
            .get_or_init(|| self.structure().default_generator().ok())
            .clone()
            .map(|value| Element::new_unchecked(self.clone(), value))
            .ok_or_else(|| AlgebraError::unsupported(self, "default_generator"))
    }

    pub(crate) fn check_member(&self, element: &Element) -> Result<()> {
        if self.contains(element) {
            Ok(())
        } else {
            Err(AlgebraError::InvalidElement(format!(
                "{element} belongs to {}, not {self}",
                element.set()
            )))
        }
    }

    pub(crate) fn apply(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check_member(right)?;
        let value = self.structure().apply(left.value(), right.value())?;
        Ok(Element::new_unchecked(self.clone(), value))
    }

    pub(crate) fn invert(&self, element: &Element) -> Result<Element> {
        let value = self.structure().invert(element.value())?;
        Ok(Element::new_unchecked(self.clone(), value))
    }

    pub(crate) fn self_apply(&self, element: &Element, amount: &BigInt) -> Result<Element> {
        let value = self.structure().self_apply(element.value(), amount)?;
        Ok(Element::new_unchecked(self.clone(), value))
    }

    pub(crate) fn multiply(&self, left: &Element, right: &Element) -> Result<Element> {
        self.check_member(right)?;
        let value = self.structure().multiply(left.value(), right.value())?;
        Ok(Element::new_unchecked(self.clone(), value))
    }

    pub(crate) fn multiplicative_inverse(&self, element: &Element) -> Result<Element> {
        let value = self.structure().multiplicative_inverse(element.value())?;
        Ok(Element::new_unchecked(self.clone(), value))
    }

    /// `Z_n` holding the coefficients of a polynomial ring
    pub fn coefficient_ring(&self) -> Result<Set> {
        match &self.0.kind {
            SetKind::Polynomials(ring) => Set::zmod(ring.modulus().clone()),
            _ => Err(AlgebraError::unsupported(self, "coefficient_ring")),
        }
    }

    /// Modulus of a modular set or polynomial ring
    pub fn modulus(&self) -> Option<&BigUint> {
        match &self.0.kind {
            SetKind::ZMod(set) => Some(set.modulus()),
            SetKind::GStarMod(set) => Some(set.modulus()),
            SetKind::Polynomials(ring) => Some(ring.modulus()),
            _ => None,
        }
    }

    /// Whether element values are plain integers usable as exponents
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.0.kind,
            SetKind::Integers(_) | SetKind::Naturals(_) | SetKind::ZMod(_)
        )
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.0.kind, SetKind::Product(_))
    }

    /// Whether this product stores a single component set with an arity
    pub fn is_uniform(&self) -> bool {
        matches!(&self.0.kind, SetKind::Product(product) if product.is_uniform())
    }

    /// Number of components of a product; other sets have arity one
    pub fn arity(&self) -> usize {
        match &self.0.kind {
            SetKind::Product(product) => product.arity(),
            _ => 1,
        }
    }

    fn product_kind(&self, operation: &'static str) -> Result<&ProductSet> {
        match &self.0.kind {
            SetKind::Product(product) => Ok(product),
            _ => Err(AlgebraError::unsupported(self, operation)),
        }
    }

    pub fn components(&self) -> Result<Vec<Set>> {
        Ok(self.product_kind("components")?.components())
    }

    pub fn get_at(&self, index: usize) -> Result<Set> {
        self.product_kind("get_at")?.component(index).cloned()
    }

    /// Follows `path` through nested products
    pub fn get_at_path(&self, path: &[usize]) -> Result<Set> {
        path.iter()
            .try_fold(self.clone(), |set, &index| set.get_at(index))
    }

    /// Product without the component at `index`
    pub fn remove_at(&self, index: usize) -> Result<Set> {
        let product = self.product_kind("remove_at")?.remove_at(index)?;
        Ok(Set::from_kind(SetKind::Product(product)))
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.kind == other.0.kind
    }
}

impl Eq for Set {}

impl Hash for Set {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind.hash(state);
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.structure(), f)
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({self})")
    }
}
