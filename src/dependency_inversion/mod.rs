//! Dependency Inversion: depend on abstractions, not on storage details.
//!
//! [`Research`] is the high-level module. It sees relationships only
//! through [`RelationshipBrowser`], which the low-level [`Relationships`]
//! store implements, so the store can change without touching research.

mod relationships;
mod research;

pub use relationships::{Person, Relationship, RelationshipBrowser, Relationships};
pub use research::Research;
