//! A journal that only keeps entries.

use super::error::JournalError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a journal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// What was written
    pub text: String,
    /// When it was written
    pub recorded_at: DateTime<Utc>,
}

/// Ordered collection of entries.
///
/// The journal's only responsibility is managing its entries. Encoding it
/// for storage lives in [`Persistence`](super::Persistence).
///
/// # Example
///
/// ```rust
/// use solid::single_responsibility::Journal;
///
/// let mut journal = Journal::new("Dear Diary");
/// journal.add_entry("I cried today");
/// journal.add_entry("I ate a bug");
///
/// assert_eq!(journal.to_string(), "1: I cried today\n2: I ate a bug");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    title: String,
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and return the new entry count.
    ///
    /// The count doubles as the entry's 1-based number in the listing.
    pub fn add_entry(&mut self, text: impl Into<String>) -> usize {
        self.entries.push(Entry {
            text: text.into(),
            recorded_at: Utc::now(),
        });
        tracing::debug!("Journal '{}' now has {} entries", self.title, self.entries.len());
        self.entries.len()
    }

    /// Remove the entry at a 0-based `index`.
    pub fn remove_entry(&mut self, index: usize) -> Result<Entry, JournalError> {
        if index >= self.entries.len() {
            return Err(JournalError::EntryNotFound {
                index,
                count: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        tracing::debug!("Journal '{}' removed entry {}", self.title, index);
        Ok(removed)
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", i + 1, entry.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_entry_returns_running_count() {
        let mut journal = Journal::new("Log");

        assert_eq!(journal.add_entry("first"), 1);
        assert_eq!(journal.add_entry("second"), 2);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn remove_entry_shifts_numbering() {
        let mut journal = Journal::new("Log");
        journal.add_entry("a");
        journal.add_entry("b");
        journal.add_entry("c");

        let removed = journal.remove_entry(1).unwrap();

        assert_eq!(removed.text, "b");
        assert_eq!(journal.to_string(), "1: a\n2: c");
    }

    #[test]
    fn remove_entry_out_of_range_is_error() {
        let mut journal = Journal::new("Log");
        journal.add_entry("only");

        let result = journal.remove_entry(3);

        assert_eq!(
            result,
            Err(JournalError::EntryNotFound { index: 3, count: 1 })
        );
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn empty_journal_displays_nothing() {
        let journal = Journal::new("Empty");
        assert!(journal.is_empty());
        assert_eq!(journal.to_string(), "");
    }

    #[test]
    fn entries_are_timestamped_in_order() {
        let mut journal = Journal::new("Log");
        journal.add_entry("a");
        journal.add_entry("b");

        let entries = journal.entries();
        assert!(entries[0].recorded_at <= entries[1].recorded_at);
    }
}
