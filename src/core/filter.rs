//! Applying specifications to collections.

use super::specification::Specification;

/// Select the items that meet `spec`, in their original order.
///
/// The input is borrowed, never mutated; the result borrows from it. An
/// empty input or a specification no item meets gives an empty result.
///
/// # Example
///
/// ```rust
/// use solid::core::{filter, Predicate};
///
/// let words = ["apple", "fig", "banana", "kiwi"];
/// let short = Predicate::new("shorter than 5", |w: &&str| w.len() < 5);
///
/// assert_eq!(filter(&words, &short), vec![&"fig", &"kiwi"]);
/// ```
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    tracing::debug!(
        "Applying specification: {} (input count: {})",
        spec.describe(),
        items.len()
    );
    let matching: Vec<&'a T> = items.iter().filter(|item| spec.is_satisfied(*item)).collect();
    tracing::debug!(
        "Specification applied: {} (output count: {})",
        spec.describe(),
        matching.len()
    );
    matching
}

/// Count the items that meet `spec`.
pub fn count_matching<T, S>(items: &[T], spec: &S) -> usize
where
    S: Specification<T> + ?Sized,
{
    items.iter().filter(|item| spec.is_satisfied(*item)).count()
}

/// Something that selects items from a collection by specification.
///
/// Implementors never need to change when a new criterion appears: the
/// criterion arrives as a specification.
pub trait Filter<T> {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}
