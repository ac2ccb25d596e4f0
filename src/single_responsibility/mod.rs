//! Single Responsibility: one reason to change per type.
//!
//! [`Journal`] manages entries and nothing else. [`Persistence`] turns a
//! journal into bytes and back. Changing the storage format touches only
//! the latter.

mod error;
mod journal;
mod persistence;

pub use error::{JournalError, PersistenceError};
pub use journal::{Entry, Journal};
pub use persistence::{Format, JournalSnapshot, Persistence, SNAPSHOT_VERSION};
