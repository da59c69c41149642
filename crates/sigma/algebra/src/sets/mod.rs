//! Concrete set kinds
//!
//! Every kind implements the crate-private [`Structure`] trait. Operations a
//! kind does not support keep the default body, which reports
//! [`AlgebraError::UnsupportedOperation`]; [`Structure::has`] must agree with
//! the operations that are overridden.

mod byte_arrays;
mod integers;
mod modular;
mod polynomials;
mod product;

pub(crate) use byte_arrays::ByteArrays;
pub(crate) use integers::{Integers, Naturals};
pub(crate) use modular::{GStarMod, ZMod, ZStarMod};
pub(crate) use polynomials::PolynomialRing;
pub(crate) use product::ProductSet;

use crate::capability::Capability;
use crate::element::Value;
use crate::errors::{AlgebraError, Result};
use crate::order::Order;
use num_bigint::{BigInt, BigUint};
use rand_core::RngCore;
use std::fmt;

/// Behaviour shared by all set kinds, expressed over raw values
///
/// Callers check membership before handing values in.
pub(crate) trait Structure: fmt::Debug + fmt::Display + Send + Sync {
    fn has(&self, capability: Capability) -> bool;

    fn order(&self) -> Order;

    fn minimal_order(&self) -> Order {
        self.order()
    }

    fn contains(&self, value: &Value) -> bool;

    /// Value with the given integer encoding
    fn from_integer(&self, encoding: &BigUint) -> Option<Value>;

    /// Integer encoding of a member value
    fn to_integer(&self, value: &Value) -> BigUint;

    /// Whether the encodings are exactly `[0, order)`, so that an encoding
    /// can serve as a digit of a fixed-radix number
    fn is_dense(&self) -> bool {
        false
    }

    /// Value with the given numeric value, for numeric kinds
    fn from_big_int(&self, _value: &BigInt) -> Option<Value> {
        None
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value;

    fn identity(&self) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "identity"))
    }

    fn apply(&self, _left: &Value, _right: &Value) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "apply"))
    }

    fn invert(&self, _value: &Value) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "invert"))
    }

    fn self_apply(&self, _value: &Value, _amount: &BigInt) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "self_apply"))
    }

    fn one(&self) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "one"))
    }

    fn multiply(&self, _left: &Value, _right: &Value) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "multiply"))
    }

    fn multiplicative_inverse(&self, _value: &Value) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "multiplicative_inverse"))
    }

    fn default_generator(&self) -> Result<Value> {
        Err(AlgebraError::unsupported(self, "default_generator"))
    }

    fn is_generator(&self, _value: &Value) -> bool {
        false
    }
}

/// Structural descriptor of a set: kind plus parameters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum SetKind {
    Integers(Integers),
    Naturals(Naturals),
    ZMod(ZMod),
    ZStarMod(ZStarMod),
    GStarMod(GStarMod),
    ByteArrays(ByteArrays),
    Polynomials(PolynomialRing),
    Product(ProductSet),
}

impl SetKind {
    pub(crate) fn structure(&self) -> &dyn Structure {
        match self {
            SetKind::Integers(set) => set,
            SetKind::Naturals(set) => set,
            SetKind::ZMod(set) => set,
            SetKind::ZStarMod(set) => set,
            SetKind::GStarMod(set) => set,
            SetKind::ByteArrays(set) => set,
            SetKind::Polynomials(set) => set,
            SetKind::Product(set) => set,
        }
    }
}
