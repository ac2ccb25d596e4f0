//! Liskov Substitution Principle
//!
//! This example resizes shapes and checks the area a rectangle user expects.
//!
//! Key concepts:
//! - Shapes are plain values in a tagged union
//! - A resized square becomes a rectangle instead of secretly changing width
//! - Code written against "set height, area = width * height" keeps working
//!
//! Run with: cargo run --example liskov_substitution

use solid::liskov::{set_and_measure, Shape};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Liskov Substitution Principle ===\n");

    let shapes = [
        Shape::Rectangle {
            width: 2.0,
            height: 3.0,
        },
        Shape::Square { side: 5.0 },
        Shape::Circle { radius: 1.0 },
    ];

    for shape in &shapes {
        println!("{} with area {:.2}", shape.name(), shape.area());
        match set_and_measure(shape, 10.0) {
            Some(measured) => println!(
                "  height set to 10: expected area {:.2}, got {:.2} ({})",
                measured.expected,
                measured.actual,
                if measured.holds() { "ok" } else { "broken" }
            ),
            None => println!("  has no height to set"),
        }
    }

    println!("\n=== Example Complete ===");
}
