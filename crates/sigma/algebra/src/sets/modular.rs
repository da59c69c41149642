//! Modular sets: `Z_n`, `Z_n^*` and prime-order subgroups `G_q ⊂ Z_p^*`

use super::Structure;
use crate::capability::Capability;
use crate::element::Value;
use crate::errors::{AlgebraError, Result};
use crate::math;
use crate::numeric::{Numeric, ResidueClass};
use crate::order::Order;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::RngCore;
use std::fmt;

fn residue(value: BigUint, modulus: &BigUint) -> Value {
    Value::Residue(ResidueClass::reduced(value, modulus.clone()))
}

fn residue_of<'a>(value: &'a Value, modulus: &BigUint) -> Option<&'a BigUint> {
    value
        .as_residue()
        .filter(|r| r.modulus() == modulus)
        .map(|r| r.value())
}

/// `Z_n` under addition, with multiplication as second operation
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ZMod {
    modulus: BigUint,
    prime: bool,
}

impl ZMod {
    pub(crate) fn new(modulus: BigUint) -> Result<Self> {
        if modulus.is_zero() {
            return Err(AlgebraError::InvalidArgument(
                "ZMod modulus must be positive".to_string(),
            ));
        }
        let prime = math::is_probable_prime(&modulus);
        Ok(ZMod { modulus, prime })
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}

impl fmt::Display for ZMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZMod[{}]", self.modulus)
    }
}

impl Structure for ZMod {
    fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::SemiGroup
            | Capability::Monoid
            | Capability::Group
            | Capability::Cyclic
            | Capability::Ring => true,
            Capability::Field => self.prime,
            Capability::Compound => false,
        }
    }

    fn order(&self) -> Order {
        Order::Finite(self.modulus.clone())
    }

    fn contains(&self, value: &Value) -> bool {
        residue_of(value, &self.modulus).is_some()
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        (encoding < &self.modulus).then(|| residue(encoding.clone(), &self.modulus))
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        residue_of(value, &self.modulus).cloned().unwrap_or_default()
    }

    fn is_dense(&self) -> bool {
        true
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        value
            .to_biguint()
            .and_then(|value| self.from_integer(&value))
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        residue(rng.gen_biguint_below(&self.modulus), &self.modulus)
    }

    fn identity(&self) -> Result<Value> {
        Ok(residue(BigUint::zero(), &self.modulus))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Residue(left.residue()?.add(right.residue()?)?))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.negate()))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.times(amount)))
    }

    fn one(&self) -> Result<Value> {
        Ok(residue(BigUint::one() % &self.modulus, &self.modulus))
    }

    fn multiply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Residue(left.residue()?.multiply(right.residue()?)?))
    }

    fn multiplicative_inverse(&self, value: &Value) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.invert()?))
    }

    fn default_generator(&self) -> Result<Value> {
        self.one()
    }

    fn is_generator(&self, value: &Value) -> bool {
        residue_of(value, &self.modulus).map_or(false, |v| v.gcd(&self.modulus).is_one())
    }
}

/// Units of `Z_n` under multiplication
///
/// The order is `n - 1` for prime `n` and unknown otherwise, since computing
/// Euler's totient would need the factorisation of `n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ZStarMod {
    modulus: BigUint,
    prime: bool,
}

impl ZStarMod {
    pub(crate) fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(AlgebraError::InvalidArgument(format!(
                "ZStarMod modulus must be at least 2, got {modulus}"
            )));
        }
        let prime = math::is_probable_prime(&modulus);
        Ok(ZStarMod { modulus, prime })
    }

    fn is_unit(&self, value: &BigUint) -> bool {
        value < &self.modulus && value.gcd(&self.modulus).is_one()
    }
}

impl fmt::Display for ZStarMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZStarMod[{}]", self.modulus)
    }
}

impl Structure for ZStarMod {
    fn has(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::SemiGroup | Capability::Monoid | Capability::Group
        )
    }

    fn order(&self) -> Order {
        if self.prime {
            Order::Finite(&self.modulus - 1u32)
        } else {
            Order::Unknown
        }
    }

    fn contains(&self, value: &Value) -> bool {
        residue_of(value, &self.modulus).map_or(false, |v| self.is_unit(v))
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        self.is_unit(encoding)
            .then(|| residue(encoding.clone(), &self.modulus))
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        residue_of(value, &self.modulus).cloned().unwrap_or_default()
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        value
            .to_biguint()
            .and_then(|value| self.from_integer(&value))
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        // Rejection sampling over [1, n)
        loop {
            let candidate = rng.gen_biguint_range(&BigUint::one(), &self.modulus);
            if self.is_unit(&candidate) {
                return residue(candidate, &self.modulus);
            }
        }
    }

    fn identity(&self) -> Result<Value> {
        Ok(residue(BigUint::one(), &self.modulus))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Residue(left.residue()?.multiply(right.residue()?)?))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.invert()?))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.power(amount)?))
    }
}

/// Subgroup of prime order `q` in `Z_p^*`, `q | p - 1`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct GStarMod {
    modulus: BigUint,
    order: BigUint,
    cofactor: BigUint,
}

impl GStarMod {
    pub(crate) fn new(modulus: BigUint, order: BigUint) -> Result<Self> {
        if !math::is_probable_prime(&modulus) {
            return Err(AlgebraError::InvalidArgument(format!(
                "GStarMod modulus {modulus} is not prime"
            )));
        }
        if !math::is_probable_prime(&order) {
            return Err(AlgebraError::InvalidArgument(format!(
                "GStarMod order {order} is not prime"
            )));
        }
        let (cofactor, remainder) = (&modulus - 1u32).div_rem(&order);
        if !remainder.is_zero() {
            return Err(AlgebraError::InvalidArgument(format!(
                "order {order} does not divide {modulus} - 1"
            )));
        }
        Ok(GStarMod {
            modulus,
            order,
            cofactor,
        })
    }

    /// Quadratic residues modulo a safe prime `p = 2q + 1`
    pub(crate) fn safe_prime(modulus: BigUint) -> Result<Self> {
        if !math::is_safe_prime(&modulus) {
            return Err(AlgebraError::InvalidArgument(format!(
                "{modulus} is not a safe prime"
            )));
        }
        let order = (&modulus - 1u32) >> 1u32;
        Self::new(modulus, order)
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn is_member(&self, value: &BigUint) -> bool {
        !value.is_zero()
            && value < &self.modulus
            && value.modpow(&self.order, &self.modulus).is_one()
    }
}

impl fmt::Display for GStarMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GStarMod[{},{}]", self.modulus, self.order)
    }
}

impl Structure for GStarMod {
    fn has(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::SemiGroup | Capability::Monoid | Capability::Group | Capability::Cyclic
        )
    }

    fn order(&self) -> Order {
        Order::Finite(self.order.clone())
    }

    fn contains(&self, value: &Value) -> bool {
        residue_of(value, &self.modulus).map_or(false, |v| self.is_member(v))
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        self.is_member(encoding)
            .then(|| residue(encoding.clone(), &self.modulus))
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        residue_of(value, &self.modulus).cloned().unwrap_or_default()
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        value
            .to_biguint()
            .and_then(|value| self.from_integer(&value))
    }

    // x^cofactor is uniform over the subgroup for x uniform over Z_p^*
    fn random(&self, rng: &mut dyn RngCore) -> Value {
        let x = rng.gen_biguint_range(&BigUint::one(), &self.modulus);
        residue(x.modpow(&self.cofactor, &self.modulus), &self.modulus)
    }

    fn identity(&self) -> Result<Value> {
        Ok(residue(BigUint::one(), &self.modulus))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Residue(left.residue()?.multiply(right.residue()?)?))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        Ok(Value::Residue(value.residue()?.invert()?))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        let exponent = math::mod_floor(amount, &self.order);
        let base = value.residue()?.value();
        Ok(residue(base.modpow(&exponent, &self.modulus), &self.modulus))
    }

    fn default_generator(&self) -> Result<Value> {
        let mut alpha = BigUint::from(2u32);
        while alpha < self.modulus {
            let candidate = alpha.modpow(&self.cofactor, &self.modulus);
            if !candidate.is_one() {
                return Ok(residue(candidate, &self.modulus));
            }
            alpha += 1u32;
        }
        Err(AlgebraError::InvalidArgument(format!("{self} has no generator")))
    }

    // Every non-identity element generates a group of prime order
    fn is_generator(&self, value: &Value) -> bool {
        residue_of(value, &self.modulus).map_or(false, |v| self.is_member(v) && !v.is_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: u32, modulus: u32) -> Value {
        residue(BigUint::from(v), &BigUint::from(modulus))
    }

    #[test]
    fn test_zmod_field_flag() {
        assert!(ZMod::new(BigUint::from(7u32)).unwrap().has(Capability::Field));
        assert!(!ZMod::new(BigUint::from(8u32)).unwrap().has(Capability::Field));
        assert!(ZMod::new(BigUint::zero()).is_err());
    }

    #[test]
    fn test_zmod_operations() {
        let z7 = ZMod::new(BigUint::from(7u32)).unwrap();
        assert_eq!(z7.apply(&value(5, 7), &value(4, 7)).unwrap(), value(2, 7));
        assert_eq!(z7.invert(&value(3, 7)).unwrap(), value(4, 7));
        assert_eq!(z7.self_apply(&value(3, 7), &BigInt::from(-2)).unwrap(), value(1, 7));
        assert_eq!(z7.multiplicative_inverse(&value(3, 7)).unwrap(), value(5, 7));
        assert!(z7.is_generator(&value(3, 7)));
        assert!(!z7.is_generator(&value(0, 7)));
    }

    #[test]
    fn test_zstarmod_membership() {
        let z9 = ZStarMod::new(BigUint::from(9u32)).unwrap();
        assert_eq!(z9.order(), Order::Unknown);
        assert!(z9.from_integer(&BigUint::from(3u32)).is_none());
        assert!(z9.from_integer(&BigUint::from(4u32)).is_some());
        let z11 = ZStarMod::new(BigUint::from(11u32)).unwrap();
        assert_eq!(z11.order(), Order::Finite(BigUint::from(10u32)));
        assert!(ZStarMod::new(BigUint::one()).is_err());
    }

    #[test]
    fn test_gstarmod_construction() {
        assert!(GStarMod::safe_prime(BigUint::from(1187u32)).is_ok());
        assert!(GStarMod::safe_prime(BigUint::from(1189u32)).is_err());
        assert!(GStarMod::new(BigUint::from(23u32), BigUint::from(7u32)).is_err());
        assert!(GStarMod::new(BigUint::from(23u32), BigUint::from(11u32)).is_ok());
    }

    #[test]
    fn test_gstarmod_default_generator() {
        let group = GStarMod::safe_prime(BigUint::from(1187u32)).unwrap();
        assert_eq!(group.default_generator().unwrap(), value(4, 1187));
        let group = GStarMod::safe_prime(BigUint::from(167u32)).unwrap();
        assert_eq!(group.default_generator().unwrap(), value(4, 167));
    }

    #[test]
    fn test_gstarmod_membership() {
        let group = GStarMod::safe_prime(BigUint::from(23u32)).unwrap();
        // Quadratic residues modulo 23
        let residues = [1u32, 2, 3, 4, 6, 8, 9, 12, 13, 16, 18];
        for v in 1u32..23 {
            let member = group.from_integer(&BigUint::from(v)).is_some();
            assert_eq!(member, residues.contains(&v), "{v}");
        }
        assert!(group.from_integer(&BigUint::zero()).is_none());
    }

    #[test]
    fn test_gstarmod_self_apply_negative() {
        let group = GStarMod::safe_prime(BigUint::from(1187u32)).unwrap();
        let g = value(4, 1187);
        let forward = group.self_apply(&g, &BigInt::from(5)).unwrap();
        let backward = group.self_apply(&g, &BigInt::from(-5)).unwrap();
        assert_eq!(group.apply(&forward, &backward).unwrap(), value(1, 1187));
    }
}
