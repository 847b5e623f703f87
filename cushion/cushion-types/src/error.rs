//! Error types for cushion data validation.

use thiserror::Error;

/// Errors that can occur when constructing or validating cushion data.
#[derive(Debug, Error)]
pub enum CushionError {
    /// Snapshot was built from the wrong number of readings.
    #[error("reading count mismatch: expected {expected}, got {actual}")]
    ReadingCountMismatch {
        /// Expected number of readings.
        expected: usize,
        /// Actual number of readings supplied.
        actual: usize,
    },

    /// A reading is `NaN` or infinite.
    #[error("non-finite reading at index {index}: {value}")]
    NonFiniteReading {
        /// Row-major cell index of the offending reading.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl CushionError {
    /// Creates a reading count mismatch error.
    #[must_use]
    pub const fn count_mismatch(expected: usize, actual: usize) -> Self {
        Self::ReadingCountMismatch { expected, actual }
    }

    /// Creates a non-finite reading error.
    #[must_use]
    pub const fn non_finite(index: usize, value: f64) -> Self {
        Self::NonFiniteReading { index, value }
    }
}

/// Result type for cushion data operations.
pub type Result<T> = std::result::Result<T, CushionError>;
