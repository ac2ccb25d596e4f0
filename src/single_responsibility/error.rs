//! Journal and persistence error types.

use thiserror::Error;

/// Errors that can occur when editing a journal
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JournalError {
    /// No entry exists at the requested position
    #[error("No entry at index {index} (journal has {count} entries)")]
    EntryNotFound { index: usize, count: usize },
}

/// Errors that can occur when encoding or decoding a journal
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
