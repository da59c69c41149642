//! Polynomial ring `Z_n[X]`

use super::Structure;
use crate::capability::Capability;
use crate::element::Value;
use crate::errors::{AlgebraError, Result};
use crate::math;
use crate::order::Order;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::Zero;
use rand_core::RngCore;
use std::fmt;

/// Number of coefficients drawn when sampling; random polynomials have
/// degree below this bound, so sampling is not uniform over the ring.
pub(crate) const RANDOM_COEFFICIENTS: usize = 16;

/// Polynomials with coefficients in `Z_n`, `n >= 2`
///
/// Values are coefficient vectors `c_0, c_1, ...` without trailing zeros;
/// the zero polynomial is the empty vector. The integer encoding reads the
/// coefficients as base-`n` digits, `c_0` least significant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PolynomialRing {
    modulus: BigUint,
}

fn normalize(mut coefficients: Vec<BigUint>) -> Vec<BigUint> {
    while coefficients.last().map_or(false, |c| c.is_zero()) {
        coefficients.pop();
    }
    coefficients
}

impl PolynomialRing {
    pub(crate) fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(AlgebraError::InvalidArgument(format!(
                "coefficient modulus must be at least 2, got {modulus}"
            )));
        }
        Ok(PolynomialRing { modulus })
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn polynomial(&self, coefficients: Vec<BigUint>) -> Value {
        Value::Polynomial(normalize(coefficients))
    }
}

impl fmt::Display for PolynomialRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZMod[{}][X]", self.modulus)
    }
}

impl Structure for PolynomialRing {
    fn has(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::SemiGroup | Capability::Monoid | Capability::Group | Capability::Ring
        )
    }

    fn order(&self) -> Order {
        Order::Infinite
    }

    fn contains(&self, value: &Value) -> bool {
        value.as_coefficients().map_or(false, |c| {
            c.last().map_or(true, |top| !top.is_zero()) && c.iter().all(|c| c < &self.modulus)
        })
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        let mut rest = encoding.clone();
        let mut coefficients = Vec::new();
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_rem(&self.modulus);
            coefficients.push(digit);
            rest = quotient;
        }
        Some(Value::Polynomial(coefficients))
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        value
            .as_coefficients()
            .map(|c| {
                c.iter()
                    .rev()
                    .fold(BigUint::zero(), |acc, digit| acc * &self.modulus + digit)
            })
            .unwrap_or_default()
    }

    fn from_big_int(&self, value: &BigInt) -> Option<Value> {
        let constant = value.to_biguint().filter(|v| v < &self.modulus)?;
        Some(self.polynomial(vec![constant]))
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        let coefficients = (0..RANDOM_COEFFICIENTS)
            .map(|_| rng.gen_biguint_below(&self.modulus))
            .collect();
        self.polynomial(coefficients)
    }

    fn identity(&self) -> Result<Value> {
        Ok(Value::Polynomial(Vec::new()))
    }

    fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        let (left, right) = (left.coefficients()?, right.coefficients()?);
        let zero = BigUint::zero();
        let sum = (0..left.len().max(right.len()))
            .map(|i| {
                let a = left.get(i).unwrap_or(&zero);
                let b = right.get(i).unwrap_or(&zero);
                (a + b) % &self.modulus
            })
            .collect();
        Ok(self.polynomial(sum))
    }

    fn invert(&self, value: &Value) -> Result<Value> {
        let negated = value
            .coefficients()?
            .iter()
            .map(|c| (&self.modulus - c) % &self.modulus)
            .collect();
        Ok(self.polynomial(negated))
    }

    fn self_apply(&self, value: &Value, amount: &BigInt) -> Result<Value> {
        let factor = math::mod_floor(amount, &self.modulus);
        let scaled = value
            .coefficients()?
            .iter()
            .map(|c| (c * &factor) % &self.modulus)
            .collect();
        Ok(self.polynomial(scaled))
    }

    fn one(&self) -> Result<Value> {
        Ok(self.polynomial(vec![BigUint::from(1u32)]))
    }

    fn multiply(&self, left: &Value, right: &Value) -> Result<Value> {
        let (left, right) = (left.coefficients()?, right.coefficients()?);
        if left.is_empty() || right.is_empty() {
            return self.identity();
        }
        let mut product = vec![BigUint::zero(); left.len() + right.len() - 1];
        for (i, a) in left.iter().enumerate() {
            for (j, b) in right.iter().enumerate() {
                product[i + j] = (&product[i + j] + a * b) % &self.modulus;
            }
        }
        Ok(self.polynomial(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[u32]) -> Value {
        Value::Polynomial(coefficients.iter().map(|c| BigUint::from(*c)).collect())
    }

    #[test]
    fn test_ring_operations_over_z2() {
        let ring = PolynomialRing::new(BigUint::from(2u32)).unwrap();
        // (1 + X) + (1 + X^2) = X + X^2
        assert_eq!(ring.apply(&poly(&[1, 1]), &poly(&[1, 0, 1])).unwrap(), poly(&[0, 1, 1]));
        // (1 + X)^2 = 1 + X^2 over Z_2
        assert_eq!(ring.multiply(&poly(&[1, 1]), &poly(&[1, 1])).unwrap(), poly(&[1, 0, 1]));
        // p + p = 0
        assert_eq!(ring.apply(&poly(&[1, 1]), &poly(&[1, 1])).unwrap(), poly(&[]));
    }

    #[test]
    fn test_ring_operations_over_z7() {
        let ring = PolynomialRing::new(BigUint::from(7u32)).unwrap();
        let p = poly(&[3, 0, 5]);
        assert_eq!(ring.invert(&p).unwrap(), poly(&[4, 0, 2]));
        assert_eq!(ring.self_apply(&p, &BigInt::from(3)).unwrap(), poly(&[2, 0, 1]));
        assert_eq!(ring.multiply(&p, &ring.one().unwrap()).unwrap(), p);
    }

    #[test]
    fn test_encoding() {
        let ring = PolynomialRing::new(BigUint::from(7u32)).unwrap();
        // 3 + 2X + X^2 = 3 + 14 + 49
        assert_eq!(ring.to_integer(&poly(&[3, 2, 1])), BigUint::from(66u32));
        assert_eq!(ring.from_integer(&BigUint::from(66u32)), Some(poly(&[3, 2, 1])));
        assert_eq!(ring.from_integer(&BigUint::zero()), Some(poly(&[])));
        assert!(!ring.contains(&poly(&[1, 0])));
        assert!(!ring.contains(&poly(&[9])));
    }
}
