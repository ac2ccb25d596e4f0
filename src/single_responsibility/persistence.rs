//! Encoding journals for storage.
//!
//! Separated from [`Journal`] so the journal never changes when the
//! storage format does. Where the bytes end up is the caller's business.

use super::error::PersistenceError;
use super::journal::Journal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Wire format for encoded journals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable JSON
    #[default]
    Json,

    /// Compact binary encoding
    Binary,
}

/// Versioned envelope around an encoded journal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JournalSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// The journal itself
    pub journal: Journal,
}

/// Encodes and decodes journals in a chosen format.
///
/// # Example
///
/// ```rust
/// use solid::single_responsibility::{Format, Journal, Persistence};
///
/// let mut journal = Journal::new("Notes");
/// journal.add_entry("buy milk");
///
/// let persistence = Persistence::new(Format::Json);
/// let bytes = persistence.encode(&journal).unwrap();
/// let restored = persistence.decode(&bytes).unwrap();
///
/// assert_eq!(restored, journal);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence {
    format: Format,
}

impl Persistence {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Encode a journal inside a versioned snapshot.
    pub fn encode(&self, journal: &Journal) -> Result<Vec<u8>, PersistenceError> {
        let snapshot = JournalSnapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            journal: journal.clone(),
        };
        let bytes = match self.format {
            Format::Json => serde_json::to_vec_pretty(&snapshot)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?,
            Format::Binary => bincode::serialize(&snapshot)
                .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?,
        };
        tracing::debug!(
            "Encoded journal '{}' as {:?} ({} bytes)",
            journal.title(),
            self.format,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decode a snapshot, rejecting versions this build does not know.
    pub fn decode(&self, bytes: &[u8]) -> Result<Journal, PersistenceError> {
        let snapshot: JournalSnapshot = match self.format {
            Format::Json => serde_json::from_slice(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?,
            Format::Binary => bincode::deserialize(bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?,
        };

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        tracing::debug!(
            "Decoded journal '{}' saved at {}",
            snapshot.journal.title(),
            snapshot.saved_at
        );
        Ok(snapshot.journal)
    }
}
