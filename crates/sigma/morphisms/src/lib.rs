//! # Functions between algebraic sets
//!
//! Sigma protocols prove knowledge of preimages under functions built from
//! a small vocabulary. This crate provides that vocabulary: the [`Morphism`]
//! trait, the shared [`Function`] handle that validates inputs, structural
//! [`combinators`] and [`group_functions`] derived from a group operation.
//!
//! ```ignore
//! // (x, r) ↦ g^x · h^r over a prime-order group
//! let commit = composite(vec![
//!     product(vec![generator(&group, &g)?, generator(&group, &h)?]),
//!     apply(&group.as_monoid(), 2),
//! ])?;
//! ```

pub mod combinators;
pub mod errors;
pub mod function;
pub mod group_functions;

#[cfg(test)]
mod property_tests;

pub use combinators::{
    composite, constant, convert, identity, multi_identity, product, removal, selection,
};
pub use errors::{FunctionError, Result};
pub use function::{Function, Morphism};
pub use group_functions::{apply, apply_inverse, generator, invert, self_apply};
