//! Solid: the SOLID design principles as small Rust modules
//!
//! Each principle gets a self-contained module with minimal illustrative
//! types. The one reusable piece is the specification filter from the
//! Open/Closed module, which lives in [`core`] and is generic over any
//! item type.
//!
//! # Modules
//!
//! - **core**: `Specification` trait, combinators and the filter engine
//! - **builder**: fluent conjunctions and the `attribute_spec!` macro
//! - **single_responsibility**: a journal and its separate persistence
//! - **open_closed**: product catalog filtered by specifications
//! - **liskov**: shapes as a tagged union
//! - **interface_segregation**: fat vs role interfaces for office machines
//! - **dependency_inversion**: research over an abstract relationship browser
//!
//! # Example
//!
//! ```rust
//! use solid::core::{filter, AndSpecification};
//! use solid::open_closed::{Color, ColorSpecification, Product, Size, SizeSpecification};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Orange", Color::Orange, Size::Medium),
//!     Product::new("Lime", Color::Green, Size::Small),
//! ];
//!
//! let green_and_small = AndSpecification::new(
//!     ColorSpecification::new(Color::Green),
//!     SizeSpecification::new(Size::Small),
//! );
//!
//! let names: Vec<&str> = filter(&products, &green_and_small)
//!     .into_iter()
//!     .map(|p| p.name())
//!     .collect();
//! assert_eq!(names, vec!["Apple", "Lime"]);
//! ```

pub mod builder;
pub mod core;
pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov;
pub mod open_closed;
pub mod single_responsibility;

// Re-export commonly used types
pub use crate::core::{filter, AndSpecification, Filter, Predicate, Specification, SpecificationExt};
