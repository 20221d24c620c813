use thiserror::Error;

use artifacts_artifacts::SubmissionError;
use artifacts_core::DomainError;
use artifacts_products::CatalogError;

/// Failure of a single user action in the create view.
///
/// None of these are fatal; the user may retry the action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Form validation or basket lookup failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl ViewError {
    /// Human-readable text for display.
    pub fn message(&self) -> String {
        match self {
            Self::Submission(err) => err.message().to_string(),
            other => other.to_string(),
        }
    }
}
