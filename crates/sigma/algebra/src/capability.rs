//! Capability tags reported by sets

use std::fmt;

/// Algebraic capability a set may satisfy
///
/// Capabilities are cumulative: a [`Capability::Field`] is also a ring, a
/// group and so on. Sets report them through [`crate::Set::has`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Associative binary operation
    SemiGroup,
    /// Semigroup with identity
    Monoid,
    /// Monoid with inverses
    Group,
    /// Group generated by a single element
    Cyclic,
    /// Additive group with a distributive multiplication
    Ring,
    /// Ring whose non-zero elements are invertible
    Field,
    /// Product of component sets
    Compound,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::SemiGroup,
        Capability::Monoid,
        Capability::Group,
        Capability::Cyclic,
        Capability::Ring,
        Capability::Field,
        Capability::Compound,
    ];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::SemiGroup => "semigroup",
            Capability::Monoid => "monoid",
            Capability::Group => "group",
            Capability::Cyclic => "cyclic group",
            Capability::Ring => "ring",
            Capability::Field => "field",
            Capability::Compound => "compound",
        };
        f.write_str(name)
    }
}
