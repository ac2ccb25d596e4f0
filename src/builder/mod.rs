//! Builder API for ergonomic specification construction.
//!
//! This module provides a fluent builder for conjunctions of many criteria
//! and a macro for declaring attribute-equality specifications with
//! minimal boilerplate.

pub mod criteria;
pub mod error;
pub mod macros;

pub use criteria::{AllOf, SpecificationBuilder};
pub use error::BuildError;

use crate::core::{Predicate, Specification};

/// Create a specification from a field projection and an expected value.
///
/// # Example
///
/// ```
/// use solid::builder::field_equals;
/// use solid::core::Specification;
///
/// struct Light {
///     on: bool,
/// }
///
/// let lit = field_equals("on", |l: &Light| l.on, true);
///
/// assert!(lit.is_satisfied(&Light { on: true }));
/// assert!(!lit.is_satisfied(&Light { on: false }));
/// assert_eq!(lit.describe(), "on is true");
/// ```
pub fn field_equals<T, V, F>(field: &str, project: F, expected: V) -> Predicate<T>
where
    T: ?Sized + 'static,
    V: PartialEq + std::fmt::Display + Send + Sync + 'static,
    F: Fn(&T) -> V + Send + Sync + 'static,
{
    let description = format!("{} is {}", field, expected);
    Predicate::new(description, move |item: &T| project(item) == expected)
}

/// Require every specification in `specs`.
///
/// Returns [`BuildError::NoCriteria`] for an empty list.
pub fn all_of<T, S>(specs: Vec<S>) -> Result<AllOf<T>, BuildError>
where
    T: ?Sized + 'static,
    S: Specification<T> + Send + Sync + 'static,
{
    specs
        .into_iter()
        .fold(SpecificationBuilder::new(), |builder, spec| builder.require(spec))
        .build()
}
