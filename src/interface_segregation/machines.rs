//! Office machines, first behind one fat interface, then behind role interfaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document handed to a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors from machines that do not support an operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}

/// Everything a machine might do, in one interface.
///
/// Implementors that can only print are still forced to answer for
/// scanning and faxing.
pub trait Machine {
    fn print(&self, document: &Document) -> Result<String, MachineError>;
    fn scan(&self, document: &Document) -> Result<String, MachineError>;
    fn fax(&self, document: &Document) -> Result<String, MachineError>;
}

/// Role interface: printing.
pub trait Printer {
    fn print(&self, document: &Document) -> String;
}

/// Role interface: scanning.
pub trait Scanner {
    fn scan(&self, document: &Document) -> String;
}

/// Role interface: faxing.
pub trait Fax {
    fn fax(&self, document: &Document) -> String;
}

/// Anything that prints, scans and faxes.
pub trait MultiFunctionDevice: Printer + Scanner + Fax {}

impl<T: Printer + Scanner + Fax> MultiFunctionDevice for T {}

/// Prints and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct OldFashionedPrinter;

impl Printer for OldFashionedPrinter {
    fn print(&self, document: &Document) -> String {
        format!("Printed {}", document.name)
    }
}

impl Machine for OldFashionedPrinter {
    fn print(&self, document: &Document) -> Result<String, MachineError> {
        Ok(Printer::print(self, document))
    }

    fn scan(&self, _document: &Document) -> Result<String, MachineError> {
        Err(MachineError::Unsupported {
            device: "OldFashionedPrinter",
            operation: "scan",
        })
    }

    fn fax(&self, _document: &Document) -> Result<String, MachineError> {
        Err(MachineError::Unsupported {
            device: "OldFashionedPrinter",
            operation: "fax",
        })
    }
}

/// Prints and scans; implements exactly the roles it supports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, document: &Document) -> String {
        format!("Copied {}", document.name)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, document: &Document) -> String {
        format!("Scanned {}", document.name)
    }
}

/// Standalone fax line.
#[derive(Debug, Clone, Default)]
pub struct FaxLine {
    pub number: String,
}

impl Fax for FaxLine {
    fn fax(&self, document: &Document) -> String {
        format!("Faxed {} to {}", document.name, self.number)
    }
}

/// Combines separate devices, delegating each role to one of them.
///
/// # Example
///
/// ```rust
/// use solid::interface_segregation::{
///     Document, FaxLine, MultiFunctionMachine, OldFashionedPrinter, Photocopier, Printer, Scanner,
/// };
///
/// let machine = MultiFunctionMachine::new(
///     OldFashionedPrinter,
///     Photocopier,
///     FaxLine { number: "555-0100".to_string() },
/// );
/// let report = Document::new("report.pdf");
///
/// assert_eq!(machine.print(&report), "Printed report.pdf");
/// assert_eq!(machine.scan(&report), "Scanned report.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct MultiFunctionMachine<P, S, F> {
    printer: P,
    scanner: S,
    fax: F,
}

impl<P: Printer, S: Scanner, F: Fax> MultiFunctionMachine<P, S, F> {
    pub fn new(printer: P, scanner: S, fax: F) -> Self {
        Self {
            printer,
            scanner,
            fax,
        }
    }
}

impl<P: Printer, S, F> Printer for MultiFunctionMachine<P, S, F> {
    fn print(&self, document: &Document) -> String {
        self.printer.print(document)
    }
}

impl<P, S: Scanner, F> Scanner for MultiFunctionMachine<P, S, F> {
    fn scan(&self, document: &Document) -> String {
        self.scanner.scan(document)
    }
}

impl<P, S, F: Fax> Fax for MultiFunctionMachine<P, S, F> {
    fn fax(&self, document: &Document) -> String {
        self.fax.fax(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo() -> Document {
        Document::new("memo.txt")
    }

    fn print_all(printer: &dyn Printer, documents: &[Document]) -> Vec<String> {
        documents.iter().map(|d| printer.print(d)).collect()
    }

    fn send(device: &impl MultiFunctionDevice, document: &Document) -> Vec<String> {
        vec![
            device.print(document),
            device.scan(document),
            device.fax(document),
        ]
    }

    #[test]
    fn fat_interface_forces_unsupported_operations() {
        let printer = OldFashionedPrinter;

        assert_eq!(
            Machine::print(&printer, &memo()),
            Ok("Printed memo.txt".to_string())
        );
        assert_eq!(
            Machine::scan(&printer, &memo()),
            Err(MachineError::Unsupported {
                device: "OldFashionedPrinter",
                operation: "scan"
            })
        );
        assert!(Machine::fax(&printer, &memo()).is_err());
    }

    #[test]
    fn unsupported_error_names_device_and_operation() {
        let err = Machine::fax(&OldFashionedPrinter, &memo()).unwrap_err();
        assert_eq!(err.to_string(), "OldFashionedPrinter does not support fax");
    }

    #[test]
    fn clients_depend_only_on_the_role_they_use() {
        let documents = vec![Document::new("a"), Document::new("b")];

        assert_eq!(
            print_all(&OldFashionedPrinter, &documents),
            vec!["Printed a", "Printed b"]
        );
        assert_eq!(
            print_all(&Photocopier, &documents),
            vec!["Copied a", "Copied b"]
        );
    }

    #[test]
    fn photocopier_scans() {
        assert_eq!(Photocopier.scan(&memo()), "Scanned memo.txt");
    }

    #[test]
    fn composed_machine_is_a_multi_function_device() {
        let machine = MultiFunctionMachine::new(
            Photocopier,
            Photocopier,
            FaxLine {
                number: "555-0199".to_string(),
            },
        );

        assert_eq!(
            send(&machine, &memo()),
            vec![
                "Copied memo.txt",
                "Scanned memo.txt",
                "Faxed memo.txt to 555-0199"
            ]
        );
    }
}
