//! Unmet criteria reported when explaining a specification.

use thiserror::Error;

/// A single criterion an item failed to meet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("criterion not met: {criterion}")]
pub struct Unsatisfied {
    /// Description of the specification that was not met
    pub criterion: String,
}

impl Unsatisfied {
    pub fn new(criterion: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
        }
    }
}
