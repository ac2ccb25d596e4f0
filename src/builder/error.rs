//! Build errors for specification builders.

use thiserror::Error;

/// Errors that can occur when building composite specifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No criteria defined. Call .require(spec) or .require_pred(..) before .build()")]
    NoCriteria,
}
