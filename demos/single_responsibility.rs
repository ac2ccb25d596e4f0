//! Single Responsibility Principle
//!
//! This example keeps a journal and stores it with a separate type.
//!
//! Key concepts:
//! - The journal only manages entries
//! - Persistence only encodes and decodes
//! - Switching formats never touches the journal
//!
//! Run with: cargo run --example single_responsibility

use solid::single_responsibility::{Format, Journal, Persistence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Single Responsibility Principle ===\n");

    let mut journal = Journal::new("Dear Diary");
    journal.add_entry("I cried today");
    let bug = journal.add_entry("I ate a bug");
    journal.add_entry("I learned about SOLID");

    println!("{}:\n{}\n", journal.title(), journal);

    let removed = journal.remove_entry(bug - 1)?;
    println!("Removed entry {}: {}", bug, removed.text);
    println!("{}\n", journal);

    if let Err(err) = journal.remove_entry(10) {
        println!("Removing entry 11 fails: {}\n", err);
    }

    for format in [Format::Json, Format::Binary] {
        let persistence = Persistence::new(format);
        let bytes = persistence.encode(&journal)?;
        let restored = persistence.decode(&bytes)?;
        println!(
            "{:?}: {} bytes, restored {} entries intact: {}",
            format,
            bytes.len(),
            restored.len(),
            restored == journal
        );
    }

    println!("\nJSON snapshot:");
    let json = Persistence::new(Format::Json).encode(&journal)?;
    println!("{}", String::from_utf8_lossy(&json));

    println!("\n=== Example Complete ===");
    Ok(())
}
