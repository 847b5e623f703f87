//! Error types for the classification pipeline.

use thiserror::Error;

/// Errors that can occur inside a prediction.
///
/// These never escape [`predict`](crate::PostureClassifier::predict); they
/// are converted into `Unknown` predictions at the classifier boundary.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The snapshot failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] cushion_types::CushionError),
}

/// Result type for classification internals.
pub type Result<T> = std::result::Result<T, ClassifyError>;
