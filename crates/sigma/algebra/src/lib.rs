//! # Algebraic structures for sigma protocols
//!
//! This crate provides the mathematical layer the proof engine is built on:
//! sets with a three-state order, elements with canonical values, a
//! capability model for groups, rings and fields, and product structures
//! whose elements are tuples.
//!
//! ## Components
//!
//! - [`Set`]: handle to a structural descriptor (`Z`, `N`, `Z_n`, `Z_n^*`,
//!   prime-order subgroups, byte arrays, polynomial rings, products)
//! - [`Element`]: immutable member of a set, with group and ring operations
//! - [`structures`]: typed handles proving a capability ([`Group`],
//!   [`CyclicGroup`], [`Field`], ...)
//! - [`numeric`]: whole numbers and residue classes
//! - [`codec`]: versioned byte-tree encoding of elements
//! - [`hash`]: hash methods and recursive element hashing
//! - [`math`]: primality testing and elegant pairing

pub mod capability;
pub mod codec;
pub mod element;
pub mod errors;
pub mod hash;
pub mod math;
pub mod numeric;
pub mod order;
pub mod set;
pub mod structures;

mod sets;

#[cfg(test)]
mod property_tests;

// Re-export key types
pub use capability::Capability;
pub use codec::ByteTree;
pub use element::{Element, Value};
pub use errors::{AlgebraError, Result};
pub use hash::HashMethod;
pub use numeric::{Numeric, ResidueClass, WholeNumber};
pub use order::Order;
pub use set::Set;
pub use structures::{CyclicGroup, Field, Group, Monoid, Ring};

// Big integers appear throughout the public API
pub use num_bigint::{BigInt, BigUint};
