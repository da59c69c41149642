//! The integers `Z` and the naturals `N` under addition

use super::Structure;
use crate::capability::Capability;
use crate::element::Value;
use crate::errors::{AlgebraError, Result};
use crate::numeric::{Numeric, WholeNumber};
use crate::order::Order;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand_core::RngCore;
use std::fmt;

/// Bit length bound for sampling from infinite sets.
///
/// Samples are uniform over `(-2^256, 2^256)` resp. `[0, 2^256)`, which is
/// not a uniform distribution over the set.
pub(crate) const RANDOM_BIT_LENGTH: u64 = 256;

/// `Z` as an additive cyclic group and ring
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Integers;

impl fmt::Display for Integers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Z")
    }
}

fn integer(value: BigInt) -> Value {
    Value::Integer(WholeNumber::new(value))
}

impl Structure for Integers {
    fn has(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::SemiGroup
                | Capability::Monoid
                | Capability::Group
                | Capability::Cyclic
                | Capability::Ring
        )
    }

    fn order(&self) -> Order {
        Order::Infinite
    }

    fn contains(&self, value: &Value) -> bool {
        matches!(value, Value::Integer(_))
    }

    // Zig-zag: 0, -1, 1, -2, 2, ... map to 0, 1, 2, 3, 4, ...
    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        let half = BigInt::from(encoding >> 1u32);
        if encoding.is_odd() {
            Some(integer(-half - 1))
        } else {
            Some(integer(half))
        }
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        let Some(value) = value.as_whole_number() else {
            return BigUint::zero();
        };
        let magnitude = value.value().magnitude() << 1u32;
        if value.is_negative() {
            magnitude - 1u32
        } else {
            magnitude
        }
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        Some(integer(value.clone()))
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        integer(rng.gen_bigint(RANDOM_BIT_LENGTH))
    }

    fn identity(&self) -> Result<Value> {
        Ok(integer(BigInt::zero()))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Integer(left.whole()?.add(right.whole()?)?))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        Ok(Value::Integer(value.whole()?.negate()))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        Ok(Value::Integer(value.whole()?.times(amount)))
    }

    fn one(&self) -> Result<Value> {
        Ok(integer(BigInt::one()))
    }

    fn multiply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Integer(left.whole()?.multiply(right.whole()?)?))
    }

    fn multiplicative_inverse(&self, value: &Value) -> Result<Value> {
        Ok(Value::Integer(value.whole()?.invert()?))
    }

    fn default_generator(&self) -> Result<Value> {
        self.one()
    }

    fn is_generator(&self, value: &Value) -> bool {
        value
            .as_whole_number()
            .map_or(false, |v| v.value().magnitude().is_one())
    }
}

/// `N = {0, 1, 2, ...}` as an additive monoid
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Naturals;

impl fmt::Display for Naturals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("N")
    }
}

impl Structure for Naturals {
    fn has(&self, capability: Capability) -> bool {
        matches!(capability, Capability::SemiGroup | Capability::Monoid)
    }

    fn order(&self) -> Order {
        Order::Infinite
    }

    fn contains(&self, value: &Value) -> bool {
        value.as_whole_number().map_or(false, |v| !v.is_negative())
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        Some(integer(BigInt::from(encoding.clone())))
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        value
            .as_whole_number()
            .map(|v| v.value().magnitude().clone())
            .unwrap_or_default()
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        (!value.is_negative()).then(|| integer(value.clone()))
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        integer(BigInt::from(rng.gen_biguint(RANDOM_BIT_LENGTH)))
    }

    fn identity(&self) -> Result<Value> {
        Ok(integer(BigInt::zero()))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Integer(left.whole()?.add(right.whole()?)?))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        if amount.is_negative() {
            return Err(AlgebraError::InvalidArgument(format!(
                "negative amount {amount} in the monoid N"
            )));
        }
        Ok(Value::Integer(value.whole()?.times(amount)))
    }
}
