//! Structural function combinators
//!
//! Building blocks that only move elements around: identity, constants,
//! composition, componentwise products, duplication, projection, removal
//! and re-encoding. Together with [`crate::group_functions`] they express
//! every function the proof engine needs.

use crate::errors::{FunctionError, Result};
use crate::function::{Function, Morphism};
use sigma_algebra::{Element, Set};

#[derive(Debug)]
struct Identity {
    set: Set,
}

impl Morphism for Identity {
    fn domain(&self) -> &Set {
        &self.set
    }

    fn co_domain(&self) -> &Set {
        &self.set
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(input.clone())
    }
}

/// `x ↦ x` on `set`
pub fn identity(set: Set) -> Function {
    Function::new(Identity { set })
}

#[derive(Debug)]
struct Constant {
    domain: Set,
    value: Element,
}

impl Morphism for Constant {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        self.value.set()
    }

    fn evaluate(&self, _input: &Element) -> Result<Element> {
        Ok(self.value.clone())
    }
}

/// Maps every element of `domain` to `value`
pub fn constant(domain: Set, value: Element) -> Function {
    Function::new(Constant { domain, value })
}

#[derive(Debug)]
struct Composite {
    functions: Vec<Function>,
}

impl Morphism for Composite {
    fn domain(&self) -> &Set {
        self.functions[0].domain()
    }

    fn co_domain(&self) -> &Set {
        self.functions[self.functions.len() - 1].co_domain()
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        self.functions
            .iter()
            .try_fold(input.clone(), |value, function| function.apply(&value))
    }
}

/// Applies `functions` left to right.
///
/// Each co-domain must equal the next domain. Sets of the same kind with
/// different parameters, such as `Z_11` and `Z_13`, are compatible but are
/// deliberately rejected here with
/// [`FunctionError::IncompatibleArguments`]; bridge them explicitly with
/// [`convert`].
pub fn composite(functions: Vec<Function>) -> Result<Function> {
    if functions.is_empty() {
        return Err(FunctionError::InvalidArgument(
            "composite of no functions".to_string(),
        ));
    }
    for (i, pair) in functions.windows(2).enumerate() {
        if pair[0].co_domain() != pair[1].domain() {
            return Err(FunctionError::IncompatibleArguments(format!(
                "function {i} maps into {}, but function {} expects {}",
                pair[0].co_domain(),
                i + 1,
                pair[1].domain()
            )));
        }
    }
    Ok(Function::new(Composite { functions }))
}

#[derive(Debug)]
struct Product {
    functions: Vec<Function>,
    domain: Set,
    co_domain: Set,
}

impl Morphism for Product {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        let outputs = self
            .functions
            .iter()
            .zip(input.components()?)
            .map(|(function, component)| function.apply(component))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.co_domain.tuple(outputs)?)
    }
}

/// `(x_1, ..., x_n) ↦ (f_1(x_1), ..., f_n(x_n))`
pub fn product(functions: Vec<Function>) -> Function {
    let domain = Set::product(functions.iter().map(|f| f.domain().clone()).collect());
    let co_domain = Set::product(functions.iter().map(|f| f.co_domain().clone()).collect());
    Function::new(Product {
        functions,
        domain,
        co_domain,
    })
}

#[derive(Debug)]
struct MultiIdentity {
    set: Set,
    co_domain: Set,
}

impl Morphism for MultiIdentity {
    fn domain(&self) -> &Set {
        &self.set
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        let copies = vec![input.clone(); self.co_domain.arity()];
        Ok(self.co_domain.tuple(copies)?)
    }
}

/// `x ↦ (x, ..., x)` with `arity` copies
pub fn multi_identity(set: Set, arity: usize) -> Function {
    let co_domain = Set::product_uniform(set.clone(), arity);
    Function::new(MultiIdentity { set, co_domain })
}

#[derive(Debug)]
struct Selection {
    domain: Set,
    path: Vec<usize>,
    co_domain: Set,
}

impl Morphism for Selection {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(input.get_at_path(&self.path)?.clone())
    }
}

/// Projects a compound input onto the component reached by `path`
pub fn selection(domain: &Set, path: &[usize]) -> Result<Function> {
    let co_domain = domain.get_at_path(path)?;
    Ok(Function::new(Selection {
        domain: domain.clone(),
        path: path.to_vec(),
        co_domain,
    }))
}

#[derive(Debug)]
struct Removal {
    domain: Set,
    index: usize,
    co_domain: Set,
}

impl Morphism for Removal {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(input.remove_at(self.index)?)
    }
}

/// Drops the component at `index` of a compound input
pub fn removal(domain: &Set, index: usize) -> Result<Function> {
    let co_domain = domain.remove_at(index)?;
    Ok(Function::new(Removal {
        domain: domain.clone(),
        index,
        co_domain,
    }))
}

#[derive(Debug)]
struct Convert {
    domain: Set,
    co_domain: Set,
}

impl Morphism for Convert {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> Result<Element> {
        Ok(self.co_domain.element_from(&input.to_integer())?)
    }
}

/// Re-reads elements of `domain` in `co_domain` through their integer
/// encoding. Inputs whose encoding has no counterpart fail at application.
pub fn convert(domain: Set, co_domain: Set) -> Function {
    Function::new(Convert { domain, co_domain })
}
