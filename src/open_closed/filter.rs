//! Two ways to filter a product catalog.

use super::product::{Color, Product, Size};
use crate::core::{Filter, Specification};

/// Filter with one method per criterion.
///
/// Every new criterion, and every combination of existing ones, means
/// editing this type. Kept as the counterexample to [`BetterFilter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}

/// Filter that takes its criterion as a specification.
///
/// Closed for modification, open for extension: new criteria are new
/// specifications, composed with the existing ones.
///
/// # Example
///
/// ```rust
/// use solid::core::{Filter, SpecificationExt};
/// use solid::open_closed::{BetterFilter, Color, ColorSpecification, Product, Size, SizeSpecification};
///
/// let products = vec![
///     Product::new("Apple", Color::Green, Size::Small),
///     Product::new("Tree", Color::Green, Size::Large),
///     Product::new("House", Color::Blue, Size::Large),
/// ];
///
/// let large_green = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
/// let found = BetterFilter.filter(&products, &large_green);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "Tree");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        crate::core::filter(items, spec)
    }
}
