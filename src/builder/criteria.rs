//! Builder for conjunctions of many criteria.

use crate::builder::error::BuildError;
use crate::core::{Explanation, Predicate, Specification};
use stillwater::validation::Validation;

/// Conjunction of any number of criteria, evaluated in insertion order.
///
/// Built with [`SpecificationBuilder`]; never empty.
pub struct AllOf<T: ?Sized> {
    criteria: Vec<Box<dyn Specification<T> + Send + Sync>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Number of criteria in the conjunction.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.criteria.iter().all(|c| c.is_satisfied(item))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.criteria.iter().map(|c| c.describe()).collect();
        match parts.as_slice() {
            [only] => only.clone(),
            _ => format!("({})", parts.join(" and ")),
        }
    }

    fn check(&self, item: &T) -> Explanation {
        let checks: Vec<Explanation> = self.criteria.iter().map(|c| c.check(item)).collect();
        Validation::all_vec(checks).map(|_| ())
    }
}

impl<T: ?Sized> std::fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("criteria", &self.describe())
            .finish()
    }
}

/// Builder for [`AllOf`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use solid::builder::SpecificationBuilder;
/// use solid::core::Specification;
///
/// let spec = SpecificationBuilder::<u32>::new()
///     .require_pred("is even", |n| n % 2 == 0)
///     .require_pred("below 100", |n| *n < 100)
///     .build()
///     .unwrap();
///
/// assert!(spec.is_satisfied(&42));
/// assert!(!spec.is_satisfied(&142));
/// assert_eq!(spec.describe(), "(is even and below 100)");
/// ```
pub struct SpecificationBuilder<T: ?Sized> {
    criteria: Vec<Box<dyn Specification<T> + Send + Sync>>,
}

impl<T: ?Sized + 'static> SpecificationBuilder<T> {
    /// Create a new builder with no criteria.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Add a specification as a required criterion.
    pub fn require<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + Send + Sync + 'static,
    {
        self.criteria.push(Box::new(spec));
        self
    }

    /// Add a closure as a required criterion.
    pub fn require_pred<F>(self, description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.require(Predicate::new(description, predicate))
    }

    /// Build the conjunction.
    pub fn build(self) -> Result<AllOf<T>, BuildError> {
        if self.criteria.is_empty() {
            return Err(BuildError::NoCriteria);
        }
        Ok(AllOf {
            criteria: self.criteria,
        })
    }
}

impl<T: ?Sized + 'static> Default for SpecificationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
