//! Specification core.
//!
//! This module contains the reusable part of the crate:
//! - The `Specification` trait and closure-backed `Predicate`
//! - Combinators for conjunction, disjunction and negation
//! - The filter engine that applies a specification to a collection
//!
//! Everything here is pure: specifications hold no hidden state and
//! filtering never mutates its input.

mod combinators;
mod filter;
mod specification;
mod unsatisfied;

pub use combinators::{
    AlwaysFalse, AlwaysTrue, AndSpecification, NotSpecification, OrSpecification,
    SpecificationExt,
};
pub use filter::{count_matching, filter, Filter};
pub use specification::{Explanation, Predicate, Specification};
pub use unsatisfied::Unsatisfied;
