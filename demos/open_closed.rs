//! Open/Closed Principle
//!
//! This example filters a product catalog two ways.
//!
//! Key concepts:
//! - A filter with one method per criterion must be edited for every new criterion
//! - A filter over specifications never changes
//! - New criteria are composed from existing ones
//! - Explanations list every criterion an item misses
//!
//! Run with: cargo run --example open_closed

use solid::builder::SpecificationBuilder;
use solid::core::{Filter, Specification, SpecificationExt};
use solid::open_closed::{
    BetterFilter, Color, ColorSpecification, Product, ProductFilter, Size, SizeSpecification,
};
use stillwater::validation::Validation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Open/Closed Principle ===\n");

    let products = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Orange", Color::Orange, Size::Medium),
        Product::new("Egg", Color::White, Size::Small),
        Product::new("Pumpkin", Color::Orange, Size::Large),
        Product::new("Lime", Color::Green, Size::Small),
        Product::new("Melon", Color::Yellow, Size::Large),
    ];

    println!("Catalog:");
    for product in &products {
        println!("  {}", product);
    }

    // Before: one method per criterion
    println!("\nGreen products (old filter):");
    for product in ProductFilter.filter_by_color(&products, Color::Green) {
        println!("  - {} is green", product.name());
    }

    // After: any specification, no edits to the filter
    let green = ColorSpecification::new(Color::Green);
    println!("\nGreen products (new filter):");
    for product in BetterFilter.filter(&products, &green) {
        println!("  - {} is green", product.name());
    }

    let large = SizeSpecification::new(Size::Large);
    println!("\nLarge products:");
    for product in BetterFilter.filter(&products, &large) {
        println!("  - {} is large", product.name());
    }

    let green_and_small = green.and(SizeSpecification::new(Size::Small));
    println!("\nProducts matching {}:", green_and_small.describe());
    for product in BetterFilter.filter(&products, &green_and_small) {
        println!("  - {}", product);
    }

    let picky = SpecificationBuilder::new()
        .require(ColorSpecification::new(Color::Orange))
        .require(SizeSpecification::new(Size::Large))
        .require_pred("name is short", |p: &Product| p.name().len() <= 5)
        .build()?;

    println!("\nWhy each product misses {}:", picky.describe());
    for product in &products {
        match picky.check(product) {
            Validation::Success(_) => println!("  - {}: matches", product.name()),
            Validation::Failure(unmet) => {
                let reasons: Vec<String> = unmet.iter().map(|u| u.criterion.clone()).collect();
                println!("  - {}: {}", product.name(), reasons.join(", "));
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
