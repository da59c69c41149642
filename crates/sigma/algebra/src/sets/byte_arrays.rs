//! Byte strings with a bounded length

use super::Structure;
use crate::capability::Capability;
use crate::element::Value;
use crate::errors::{AlgebraError, Result};
use crate::order::Order;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand_core::RngCore;
use std::fmt;

/// All byte arrays whose length lies in `[min_length, max_length]`
///
/// Encodings enumerate shorter arrays first: the `256^min_length` arrays of
/// minimal length take `[0, 256^min_length)`, the next length follows, and so
/// on. Within one length the encoding is the big-endian value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ByteArrays {
    min_length: usize,
    max_length: usize,
}

fn block_size(length: usize) -> BigUint {
    BigUint::one() << (8 * length)
}

impl ByteArrays {
    pub(crate) fn new(min_length: usize, max_length: usize) -> Result<Self> {
        if min_length > max_length {
            return Err(AlgebraError::InvalidArgument(format!(
                "minimal length {min_length} exceeds maximal length {max_length}"
            )));
        }
        Ok(ByteArrays {
            min_length,
            max_length,
        })
    }

    fn offset(&self, length: usize) -> BigUint {
        (self.min_length..length).map(block_size).sum()
    }
}

impl fmt::Display for ByteArrays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteArrays[{},{}]", self.min_length, self.max_length)
    }
}

impl Structure for ByteArrays {
    fn has(&self, _capability: Capability) -> bool {
        false
    }

    fn order(&self) -> Order {
        Order::Finite(self.offset(self.max_length + 1))
    }

    fn contains(&self, value: &Value) -> bool {
        value
            .as_bytes()
            .map_or(false, |b| (self.min_length..=self.max_length).contains(&b.len()))
    }

    fn from_integer(&self, encoding: &BigUint) -> Option<Value> {
        let mut rest = encoding.clone();
        for length in self.min_length..=self.max_length {
            let size = block_size(length);
            if rest < size {
                let raw = if rest.is_zero() {
                    Vec::new()
                } else {
                    rest.to_bytes_be()
                };
                let mut bytes = vec![0u8; length - raw.len()];
                bytes.extend_from_slice(&raw);
                return Some(Value::Bytes(bytes));
            }
            rest -= size;
        }
        None
    }

    fn to_integer(&self, value: &Value) -> BigUint {
        let Some(bytes) = value.as_bytes() else {
            return BigUint::zero();
        };
        self.offset(bytes.len()) + BigUint::from_bytes_be(bytes)
    }

    fn is_dense(&self) -> bool {
        true
    }

    fn random(&self, rng: &mut dyn RngCore) -> Value {
        let encoding = rng.gen_biguint_below(&self.offset(self.max_length + 1));
        self.from_integer(&encoding)
            .unwrap_or_else(|| Value::Bytes(vec![0u8; self.min_length]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        let set = ByteArrays::new(0, 2).unwrap();
        assert_eq!(set.order(), Order::Finite(BigUint::from(1u32 + 256 + 65536)));
        let set = ByteArrays::new(2, 2).unwrap();
        assert_eq!(set.order(), Order::Finite(BigUint::from(65536u32)));
        assert!(ByteArrays::new(3, 2).is_err());
    }

    #[test]
    fn test_encoding_prefers_short_arrays() {
        let set = ByteArrays::new(0, 2).unwrap();
        assert_eq!(set.from_integer(&BigUint::zero()), Some(Value::Bytes(vec![])));
        assert_eq!(set.from_integer(&BigUint::one()), Some(Value::Bytes(vec![0])));
        assert_eq!(set.from_integer(&BigUint::from(257u32)), Some(Value::Bytes(vec![0, 0])));
        assert_eq!(set.from_integer(&BigUint::from(1u32 + 256 + 65536)), None);
        assert_eq!(set.to_integer(&Value::Bytes(vec![0, 1])), BigUint::from(258u32));
    }

    #[test]
    fn test_encoding_roundtrip() {
        let set = ByteArrays::new(1, 3).unwrap();
        for bytes in [vec![0u8], vec![255], vec![0, 0], vec![1, 2, 3], vec![255, 255, 255]] {
            let value = Value::Bytes(bytes);
            assert_eq!(set.from_integer(&set.to_integer(&value)), Some(value));
        }
    }
}
