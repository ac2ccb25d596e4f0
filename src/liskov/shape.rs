//! Shapes as a tagged union.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A plane shape.
///
/// Each variant computes its own area. A square is not a rectangle that
/// keeps its sides in sync behind the caller's back; resizing one side of
/// a square produces a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn name(&self) -> &str {
        match self {
            Self::Circle { .. } => "Circle",
            Self::Square { .. } => "Square",
            Self::Rectangle { .. } => "Rectangle",
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Self::Circle { radius } => PI * radius * radius,
            Self::Square { side } => side * side,
            Self::Rectangle { width, height } => width * height,
        }
    }

    /// Width of shapes that have one.
    pub fn width(&self) -> Option<f64> {
        match self {
            Self::Circle { .. } => None,
            Self::Square { side } => Some(*side),
            Self::Rectangle { width, .. } => Some(*width),
        }
    }

    /// The same shape with a new height, keeping its width.
    ///
    /// Returns `None` for shapes without a height.
    pub fn with_height(&self, height: f64) -> Option<Shape> {
        match *self {
            Self::Circle { .. } => None,
            Self::Square { side } if side == height => Some(*self),
            Self::Square { side } => Some(Self::Rectangle {
                width: side,
                height,
            }),
            Self::Rectangle { width, .. } => Some(Self::Rectangle { width, height }),
        }
    }
}

/// Outcome of resizing a shape and measuring it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub expected: f64,
    pub actual: f64,
}

impl Measurement {
    /// Whether the shape behaved as a caller of the base contract expects.
    pub fn holds(&self) -> bool {
        (self.expected - self.actual).abs() < f64::EPSILON * self.expected.abs().max(1.0)
    }
}

/// Set a new height and compare the area against `width * height`.
///
/// This is the check that breaks when a square silently keeps its sides
/// equal; here it holds for every shape that has a height.
///
/// # Example
///
/// ```rust
/// use solid::liskov::{set_and_measure, Shape};
///
/// let square = Shape::Square { side: 2.0 };
/// let measured = set_and_measure(&square, 10.0).unwrap();
///
/// assert_eq!(measured.expected, 20.0);
/// assert!(measured.holds());
/// ```
pub fn set_and_measure(shape: &Shape, height: f64) -> Option<Measurement> {
    let width = shape.width()?;
    let resized = shape.with_height(height)?;
    Some(Measurement {
        expected: width * height,
        actual: resized.area(),
    })
}
