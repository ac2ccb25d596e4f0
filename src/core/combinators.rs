//! Composition of specifications.
//!
//! Combinators hold their operands by value and are themselves
//! specifications, so they nest to any depth.

use super::specification::{Explanation, Specification};
use stillwater::validation::Validation;

/// Conjunction of two specifications.
///
/// Evaluation short-circuits on the first unmet operand. `check` evaluates
/// both sides so every unmet criterion is reported.
///
/// # Example
///
/// ```rust
/// use solid::core::{AndSpecification, Predicate, Specification};
///
/// let positive = Predicate::new("is positive", |n: &i32| *n > 0);
/// let even = Predicate::new("is even", |n: &i32| n % 2 == 0);
/// let both = AndSpecification::new(positive, even);
///
/// assert!(both.is_satisfied(&4));
/// assert!(!both.is_satisfied(&3));
/// assert!(!both.is_satisfied(&-2));
/// assert_eq!(both.describe(), "(is positive and is even)");
/// ```
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} and {})", self.first.describe(), self.second.describe())
    }

    fn check(&self, item: &T) -> Explanation {
        Validation::all_vec(vec![self.first.check(item), self.second.check(item)]).map(|_| ())
    }
}

/// Disjunction of two specifications.
#[derive(Debug, Clone)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for OrSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} or {})", self.first.describe(), self.second.describe())
    }

    fn check(&self, item: &T) -> Explanation {
        if self.is_satisfied(item) {
            return Validation::success(());
        }
        // Both sides failed; report both.
        Validation::all_vec(vec![self.first.check(item), self.second.check(item)]).map(|_| ())
    }
}

/// Negation of a specification.
#[derive(Debug, Clone)]
pub struct NotSpecification<A> {
    inner: A,
}

impl<A> NotSpecification<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, A: Specification<T>> Specification<T> for NotSpecification<A> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }
}

/// Specification that every item meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl<T: ?Sized> Specification<T> for AlwaysTrue {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "anything".to_string()
    }
}

/// Specification that no item meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl<T: ?Sized> Specification<T> for AlwaysFalse {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }

    fn describe(&self) -> String {
        "nothing".to_string()
    }
}

/// Fluent composition for any specification.
///
/// # Example
///
/// ```rust
/// use solid::core::{Predicate, Specification, SpecificationExt};
///
/// let small = Predicate::new("is small", |n: &u8| *n < 10);
/// let odd = Predicate::new("is odd", |n: &u8| n % 2 == 1);
///
/// let small_odd = small.and(odd);
/// assert!(small_odd.is_satisfied(&7));
/// assert!(!small_odd.is_satisfied(&8));
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Require both this and `other`.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    /// Require this or `other`.
    fn or<S: Specification<T>>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    /// Require the opposite of this.
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Predicate;

    fn positive() -> Predicate<i32> {
        Predicate::new("is positive", |n: &i32| *n > 0)
    }

    fn even() -> Predicate<i32> {
        Predicate::new("is even", |n: &i32| n % 2 == 0)
    }

    fn unmet(explanation: Explanation) -> Vec<String> {
        match explanation {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().map(|e| e.criterion.clone()).collect(),
        }
    }

    #[test]
    fn and_requires_both_sides() {
        let spec = AndSpecification::new(positive(), even());

        assert!(spec.is_satisfied(&2));
        assert!(!spec.is_satisfied(&1));
        assert!(!spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-1));
    }

    #[test]
    fn and_short_circuits_on_first_failure() {
        let never_reached = Predicate::new("panics", |_: &i32| -> bool {
            panic!("second operand evaluated")
        });
        let spec = AndSpecification::new(AlwaysFalse, never_reached);

        assert!(!spec.is_satisfied(&1));
    }

    #[test]
    fn and_check_accumulates_all_unmet_criteria() {
        let spec = AndSpecification::new(positive(), even());

        assert_eq!(unmet(spec.check(&-3)), vec!["is positive", "is even"]);
        assert_eq!(unmet(spec.check(&3)), vec!["is even"]);
        assert!(spec.check(&4).is_success());
    }

    #[test]
    fn and_nests_to_any_depth() {
        let small = Predicate::new("is small", |n: &i32| *n < 100);
        let spec = AndSpecification::new(AndSpecification::new(positive(), even()), small);

        assert!(spec.is_satisfied(&42));
        assert!(!spec.is_satisfied(&420));
        assert_eq!(spec.describe(), "((is positive and is even) and is small)");
    }

    #[test]
    fn or_requires_either_side() {
        let spec = OrSpecification::new(positive(), even());

        assert!(spec.is_satisfied(&1));
        assert!(spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-1));
    }

    #[test]
    fn or_check_reports_both_sides_when_neither_holds() {
        let spec = OrSpecification::new(positive(), even());

        assert_eq!(unmet(spec.check(&-1)), vec!["is positive", "is even"]);
        assert!(spec.check(&-2).is_success());
    }

    #[test]
    fn not_inverts_and_describes_itself() {
        let spec = NotSpecification::new(even());

        assert!(spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&4));
        assert_eq!(unmet(spec.check(&4)), vec!["not is even"]);
    }

    #[test]
    fn constants_ignore_the_item() {
        assert!(Specification::<i32>::is_satisfied(&AlwaysTrue, &-5));
        assert!(!Specification::<i32>::is_satisfied(&AlwaysFalse, &5));
    }

    #[test]
    fn extension_methods_compose() {
        let spec = positive().and(even()).or(AlwaysFalse).not();

        assert!(!spec.is_satisfied(&2));
        assert!(spec.is_satisfied(&3));
        assert_eq!(
            spec.describe(),
            "not ((is positive and is even) or nothing)"
        );
    }
}
