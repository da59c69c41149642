//! Three-state set order

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// Cardinality of a set
///
/// Callers must match on the variant before doing arithmetic: only
/// [`Order::Finite`] carries a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A finite, known number of elements
    Finite(BigUint),
    /// Infinitely many elements
    Infinite,
    /// Finite or not, the order cannot be computed
    Unknown,
}

impl Order {
    pub fn is_finite(&self) -> bool {
        matches!(self, Order::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Order::Infinite)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Order::Unknown)
    }

    /// The numeric order, if finite
    pub fn finite(&self) -> Option<&BigUint> {
        match self {
            Order::Finite(order) => Some(order),
            _ => None,
        }
    }

    /// Order of a product of sets with these orders
    pub(crate) fn product<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Order {
        let mut result = BigUint::one();
        let mut infinite = false;
        let mut unknown = false;
        for order in orders {
            match order {
                Order::Finite(order) if order.is_zero() => return Order::Finite(BigUint::zero()),
                Order::Finite(order) => result *= order,
                Order::Infinite => infinite = true,
                Order::Unknown => unknown = true,
            }
        }
        if unknown {
            Order::Unknown
        } else if infinite {
            Order::Infinite
        } else {
            Order::Finite(result)
        }
    }

    /// Smallest of several orders; unknown dominates, infinite loses to any finite order
    pub(crate) fn minimum<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Order {
        let mut minimum: Option<BigUint> = None;
        let mut any = false;
        for order in orders {
            any = true;
            match order {
                Order::Finite(order) => {
                    if minimum.as_ref().map_or(true, |current| order < current) {
                        minimum = Some(order.clone());
                    }
                }
                Order::Infinite => {}
                Order::Unknown => return Order::Unknown,
            }
        }
        match minimum {
            Some(order) => Order::Finite(order),
            None if any => Order::Infinite,
            None => Order::Finite(BigUint::one()),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Finite(order) => write!(f, "{order}"),
            Order::Infinite => write!(f, "INFINITE"),
            Order::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
