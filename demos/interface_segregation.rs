//! Interface Segregation Principle
//!
//! This example contrasts a fat machine interface with role interfaces.
//!
//! Key concepts:
//! - A fat interface forces runtime "unsupported" answers
//! - Role interfaces let devices implement only what they do
//! - Devices combine by delegation
//!
//! Run with: cargo run --example interface_segregation

use solid::interface_segregation::{
    Document, Fax, FaxLine, Machine, MultiFunctionDevice, MultiFunctionMachine,
    OldFashionedPrinter, Photocopier, Printer, Scanner,
};

fn run_everything(device: &impl MultiFunctionDevice, document: &Document) {
    println!("  {}", device.print(document));
    println!("  {}", device.scan(document));
    println!("  {}", device.fax(document));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Interface Segregation Principle ===\n");

    let document = Document::new("budget.xlsx");

    println!("Fat interface:");
    let old = OldFashionedPrinter;
    for result in [
        Machine::print(&old, &document),
        Machine::scan(&old, &document),
        Machine::fax(&old, &document),
    ] {
        match result {
            Ok(done) => println!("  {}", done),
            Err(err) => println!("  error: {}", err),
        }
    }

    println!("\nRole interfaces:");
    println!("  {}", Printer::print(&old, &document));
    println!("  {}", Photocopier.print(&document));
    println!("  {}", Photocopier.scan(&document));

    println!("\nComposed machine:");
    let machine = MultiFunctionMachine::new(
        OldFashionedPrinter,
        Photocopier,
        FaxLine {
            number: "555-0100".to_string(),
        },
    );
    run_everything(&machine, &document);

    println!("\n=== Example Complete ===");
}
