//! Functions between sets
//!
//! A [`Function`] is a cheaply clonable handle to a [`Morphism`]. Every
//! application checks that the input belongs to the domain before the
//! morphism sees it, so implementations only deal with valid inputs.

use crate::errors::{FunctionError, Result};
use sigma_algebra::{Element, Set};
use std::fmt;
use std::sync::Arc;

/// Map from a domain set into a co-domain set
pub trait Morphism: fmt::Debug + Send + Sync {
    fn domain(&self) -> &Set;

    fn co_domain(&self) -> &Set;

    /// Evaluates on an input already known to belong to the domain
    fn evaluate(&self, input: &Element) -> Result<Element>;
}

/// Shared handle to a morphism
#[derive(Clone)]
pub struct Function(Arc<dyn Morphism>);

impl Function {
    pub fn new(morphism: impl Morphism + 'static) -> Self {
        Function(Arc::new(morphism))
    }

    pub fn domain(&self) -> &Set {
        self.0.domain()
    }

    pub fn co_domain(&self) -> &Set {
        self.0.co_domain()
    }

    /// Applies the function, rejecting inputs outside the domain
    pub fn apply(&self, input: &Element) -> Result<Element> {
        if !self.domain().contains(input) {
            return Err(FunctionError::InvalidArgument(format!(
                "{input} belongs to {}, not to the domain {}",
                input.set(),
                self.domain()
            )));
        }
        self.0.evaluate(input)
    }

    /// `other ∘ self`: applies `self`, then `other`
    pub fn then(&self, other: &Function) -> Result<Function> {
        crate::combinators::composite(vec![self.clone(), other.clone()])
    }

    /// Fixes the argument at `index` of a compound domain to `value`.
    ///
    /// The resulting domain is the original one without that component.
    /// When a single component remains, the domain is that component itself
    /// rather than a one-element product.
    pub fn partially_apply(&self, value: &Element, index: usize) -> Result<Function> {
        let parent = self.domain();
        if !parent.is_compound() {
            return Err(FunctionError::InvalidArgument(format!(
                "cannot partially apply a function on {parent}"
            )));
        }
        let fixed_set = parent.get_at(index)?;
        if !fixed_set.contains(value) {
            return Err(FunctionError::InvalidArgument(format!(
                "{value} is not in {fixed_set}, component {index} of {parent}"
            )));
        }
        let reduced = parent.remove_at(index)?;
        let domain = if reduced.arity() == 1 {
            reduced.get_at(0)?
        } else {
            reduced
        };
        Ok(Function::new(PartiallyApplied {
            parent: self.clone(),
            value: value.clone(),
            index,
            unwrapped: parent.arity() == 2,
            domain,
        }))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Function {
    /// Identity of the shared morphism
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug)]
struct PartiallyApplied {
    parent: Function,
    value: Element,
    index: usize,
    unwrapped: bool,
    domain: Set,
}

impl Morphism for PartiallyApplied {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.parent.co_domain()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        let mut arguments = if self.unwrapped {
            vec![input.clone()]
        } else {
            input.components()?.to_vec()
        };
        arguments.insert(self.index, self.value.clone());
        let full = self.parent.domain().tuple(arguments)?;
        self.parent.apply(&full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{identity, selection};
    use crate::group_functions::apply;

    fn z11() -> Set {
        Set::zmod(11u32).unwrap()
    }

    #[test]
    fn test_apply_rejects_foreign_input() {
        let f = identity(z11());
        let foreign = Set::zmod(13u32).unwrap().element(3).unwrap();
        assert!(matches!(
            f.apply(&foreign),
            Err(FunctionError::InvalidArgument(_))
        ));
        let own = z11().element(3).unwrap();
        assert_eq!(f.apply(&own).unwrap(), own);
    }

    #[test]
    fn test_partially_apply_ternary() {
        let add = apply(&z11().to_monoid().unwrap(), 3);
        let fixed = add.partially_apply(&z11().element(5).unwrap(), 1).unwrap();

        assert_eq!(fixed.domain(), &Set::product_uniform(z11(), 2));
        let input = Element::pair(z11().element(2).unwrap(), z11().element(7).unwrap());
        assert_eq!(fixed.apply(&input).unwrap(), z11().element(3).unwrap());
    }

    #[test]
    fn test_partially_apply_unwraps_single_component() {
        let z7 = Set::zmod(7u32).unwrap();
        let domain = Set::product(vec![z11(), z7.clone()]);
        let second = selection(&domain, &[1]).unwrap();
        let fixed = second
            .partially_apply(&z11().element(4).unwrap(), 0)
            .unwrap();

        assert_eq!(fixed.domain(), &z7);
        let input = z7.element(6).unwrap();
        assert_eq!(fixed.apply(&input).unwrap(), input);
    }

    #[test]
    fn test_partially_apply_checks_value_and_index() {
        let add = apply(&z11().to_monoid().unwrap(), 2);
        let wrong = Set::zmod(13u32).unwrap().element(1).unwrap();
        assert!(add.partially_apply(&wrong, 0).is_err());
        assert!(add
            .partially_apply(&z11().element(1).unwrap(), 2)
            .is_err());
        assert!(identity(z11())
            .partially_apply(&z11().element(1).unwrap(), 0)
            .is_err());
    }
}
