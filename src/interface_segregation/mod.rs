//! Interface Segregation: no client should depend on methods it does not use.
//!
//! [`Machine`] bundles printing, scanning and faxing, so a plain printer
//! has to report the other two as unsupported at runtime. Splitting it into
//! the [`Printer`], [`Scanner`] and [`Fax`] role interfaces lets each device
//! implement only what it does, and the compiler rejects the rest.

mod machines;

pub use machines::{
    Document, Fax, FaxLine, Machine, MachineError, MultiFunctionDevice, MultiFunctionMachine,
    OldFashionedPrinter, Photocopier, Printer, Scanner,
};
