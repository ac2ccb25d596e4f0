//! Open/Closed: open for extension, closed for modification.
//!
//! A product catalog filtered two ways. [`ProductFilter`] grows a method for
//! every criterion. [`BetterFilter`] accepts any [`Specification`], so new
//! criteria are new types composed with the old ones and the filter itself
//! never changes.
//!
//! [`Specification`]: crate::core::Specification

mod filter;
mod product;
mod specs;

pub use filter::{BetterFilter, ProductFilter};
pub use product::{Color, Product, Size};
pub use specs::{ColorSpecification, SizeSpecification};
