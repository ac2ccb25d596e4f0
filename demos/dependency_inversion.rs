//! Dependency Inversion Principle
//!
//! This example runs research over family relationships.
//!
//! Key concepts:
//! - High-level research depends on the RelationshipBrowser trait
//! - Low-level storage implements that trait
//! - Storage details never leak into research
//!
//! Run with: cargo run --example dependency_inversion

use solid::dependency_inversion::{Person, Relationships, Research};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Dependency Inversion Principle ===\n");

    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&john, &chris);
    relationships.add_parent_and_child(&john, &matt);
    relationships.add_siblings(&chris, &matt);

    tracing::info!("Recorded {} relations", relationships.relations().len());

    let research = Research::new(relationships);
    for finding in research.findings("John") {
        println!("{}", finding);
    }

    println!("\n=== Example Complete ===");
}
