//! Numeric value model
//!
//! Arbitrary-precision whole numbers and residue classes sharing one
//! arithmetic interface. Sets use these as the canonical values of their
//! elements; all residue arithmetic is non-negative modular arithmetic.

use crate::errors::{AlgebraError, Result};
use crate::math;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Common arithmetic over whole numbers and residue classes
pub trait Numeric: Sized + Clone + PartialEq + fmt::Debug {
    /// `self + other`
    fn add(&self, other: &Self) -> Result<Self>;

    /// `self - other`
    fn subtract(&self, other: &Self) -> Result<Self>;

    /// `self * other`
    fn multiply(&self, other: &Self) -> Result<Self>;

    /// `-self`
    fn negate(&self) -> Self;

    /// `self * factor` for an integer factor
    fn times(&self, factor: &BigInt) -> Self;

    /// `self ^ exponent`; negative exponents invert first
    fn power(&self, exponent: &BigInt) -> Result<Self>;

    /// Multiplicative inverse
    fn invert(&self) -> Result<Self>;
}

/// Arbitrary-precision signed integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WholeNumber(BigInt);

impl WholeNumber {
    pub fn new(value: impl Into<BigInt>) -> Self {
        WholeNumber(value.into())
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl Numeric for WholeNumber {
    fn add(&self, other: &Self) -> Result<Self> {
        Ok(WholeNumber(&self.0 + &other.0))
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(WholeNumber(&self.0 - &other.0))
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(WholeNumber(&self.0 * &other.0))
    }

    fn negate(&self) -> Self {
        WholeNumber(-&self.0)
    }

    fn times(&self, factor: &BigInt) -> Self {
        WholeNumber(&self.0 * factor)
    }

    fn power(&self, exponent: &BigInt) -> Result<Self> {
        let base = if exponent.is_negative() {
            self.invert()?
        } else {
            self.clone()
        };
        let exponent = exponent.magnitude().to_u32().ok_or_else(|| {
            AlgebraError::InvalidArgument(format!("exponent {exponent} is too large"))
        })?;
        Ok(WholeNumber(base.0.pow(exponent)))
    }

    fn invert(&self) -> Result<Self> {
        if self.0.magnitude().is_one() {
            Ok(self.clone())
        } else {
            Err(AlgebraError::NoInverse(format!(
                "{} has no integer inverse",
                self.0
            )))
        }
    }
}

impl fmt::Display for WholeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Residue class `value mod modulus` with `0 <= value < modulus`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResidueClass {
    value: BigUint,
    modulus: BigUint,
}

impl ResidueClass {
    /// Reduces a signed value into `[0, modulus)`
    pub fn new(value: &BigInt, modulus: &BigUint) -> Result<Self> {
        if modulus.is_zero() {
            return Err(AlgebraError::InvalidArgument(
                "modulus must be positive".to_string(),
            ));
        }
        Ok(ResidueClass {
            value: math::mod_floor(value, modulus),
            modulus: modulus.clone(),
        })
    }

    /// Reduces an unsigned value into `[0, modulus)`
    pub fn from_unsigned(value: &BigUint, modulus: &BigUint) -> Result<Self> {
        if modulus.is_zero() {
            return Err(AlgebraError::InvalidArgument(
                "modulus must be positive".to_string(),
            ));
        }
        Ok(Self::reduced(value % modulus, modulus.clone()))
    }

    /// Caller guarantees `value < modulus`
    pub(crate) fn reduced(value: BigUint, modulus: BigUint) -> Self {
        debug_assert!(value < modulus);
        ResidueClass { value, modulus }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(AlgebraError::IncompatibleArguments(format!(
                "residues modulo {} and {}",
                self.modulus, other.modulus
            )))
        }
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self::reduced(value % &self.modulus, self.modulus.clone())
    }
}

impl Numeric for ResidueClass {
    fn add(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        Ok(self.with_value(&self.value + &other.value))
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        Ok(self.with_value(&self.value + &self.modulus - &other.value))
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        Ok(self.with_value(&self.value * &other.value))
    }

    fn negate(&self) -> Self {
        self.with_value(&self.modulus - &self.value)
    }

    fn times(&self, factor: &BigInt) -> Self {
        let factor = math::mod_floor(factor, &self.modulus);
        self.with_value(&self.value * factor)
    }

    fn power(&self, exponent: &BigInt) -> Result<Self> {
        let base = if exponent.is_negative() {
            self.invert()?
        } else {
            self.clone()
        };
        let value = base.value.modpow(exponent.magnitude(), &self.modulus);
        Ok(self.with_value(value))
    }

    fn invert(&self) -> Result<Self> {
        math::mod_inverse(&self.value, &self.modulus)
            .map(|inverse| self.with_value(inverse))
            .ok_or_else(|| {
                AlgebraError::NoInverse(format!(
                    "{} is not a unit modulo {}",
                    self.value, self.modulus
                ))
            })
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
