//! Specifications: pure predicates over items.
//!
//! A specification answers one question about an item. Filtering, explaining
//! and composing are all built on top of this single trait, so new criteria
//! are added as new types instead of new branches in existing code.

use super::unsatisfied::Unsatisfied;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of explaining an item against a specification.
///
/// Success carries nothing. Failure carries every criterion the item did not
/// meet, not just the first one.
pub type Explanation = Validation<(), NonEmptyVec<Unsatisfied>>;

/// Pure predicate over items of type `T`.
///
/// Implementations must be deterministic and free of side effects: asking
/// the same question about the same item always gives the same answer.
///
/// # Example
///
/// ```rust
/// use solid::core::Specification;
///
/// struct Even;
///
/// impl Specification<u32> for Even {
///     fn is_satisfied(&self, item: &u32) -> bool {
///         item % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "is even".to_string()
///     }
/// }
///
/// assert!(Even.is_satisfied(&4));
/// assert!(!Even.is_satisfied(&7));
/// assert!(Even.check(&7).is_failure());
/// ```
pub trait Specification<T: ?Sized> {
    /// Check whether `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable description of the criterion, e.g. `color is green`.
    fn describe(&self) -> String;

    /// Explain why `item` does or does not meet this specification.
    ///
    /// Leaf specifications report themselves. Composites override this to
    /// accumulate every unmet criterion underneath them.
    fn check(&self, item: &T) -> Explanation {
        if self.is_satisfied(item) {
            Validation::success(())
        } else {
            Validation::fail(Unsatisfied::new(self.describe()))
        }
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn check(&self, item: &T) -> Explanation {
        (**self).check(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn check(&self, item: &T) -> Explanation {
        (**self).check(item)
    }
}

/// Specification backed by a closure.
///
/// Useful for one-off criteria that do not deserve their own type.
///
/// # Example
///
/// ```rust
/// use solid::core::{Predicate, Specification};
///
/// let short = Predicate::new("shorter than 5", |s: &str| s.len() < 5);
///
/// assert!(short.is_satisfied("pen"));
/// assert!(!short.is_satisfied("notebook"));
/// assert_eq!(short.describe(), "shorter than 5");
/// ```
pub struct Predicate<T: ?Sized> {
    description: String,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    /// Create a specification from a description and a pure predicate.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<T: ?Sized> Specification<T> for Predicate<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

impl<T: ?Sized> std::fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
