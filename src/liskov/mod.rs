//! Liskov Substitution: subtypes must honor the contract of their base.
//!
//! The classic failure is a square that inherits from a rectangle and keeps
//! its sides equal on every mutation, so code written for rectangles gets
//! the wrong area. Modelling shapes as a [`Shape`] enum of plain values
//! removes the shared mutable state that caused it.

mod shape;

pub use shape::{set_and_measure, Measurement, Shape};
