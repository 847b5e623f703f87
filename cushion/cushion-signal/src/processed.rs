//! Processed snapshot and the stateful preprocessor.

use serde::{Deserialize, Serialize};

use cushion_types::{PressureSnapshot, SENSOR_COUNT};

use crate::normalize::normalize;
use crate::smooth::ExponentialSmoother;

/// A snapshot after normalization and smoothing.
///
/// Scalar summaries (`max_pressure`, `min_pressure`, `mean_pressure`) are
/// computed from the raw readings, not the normalized ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedSnapshot {
    /// The raw snapshot this was derived from.
    pub raw: PressureSnapshot,

    /// Min-max normalized readings in `[0, 1]`.
    pub normalized: [f64; SENSOR_COUNT],

    /// Normalized readings after exponential smoothing.
    pub smoothed: [f64; SENSOR_COUNT],

    /// Maximum raw reading.
    pub max_pressure: f64,

    /// Minimum raw reading.
    pub min_pressure: f64,

    /// Mean raw reading.
    pub mean_pressure: f64,
}

/// Stateful preprocessing pipeline: normalize, then smooth.
///
/// Owns the exponential-smoothing accumulator, which is the only
/// cross-snapshot state in the whole classification pipeline. One
/// preprocessor per logical sensor stream; calls must not interleave
/// across streams.
///
/// # Example
///
/// ```
/// use cushion_signal::Preprocessor;
/// use cushion_types::PressureSnapshot;
///
/// let mut preprocessor = Preprocessor::default();
/// let snapshot = PressureSnapshot::from_slice(&[0.1; 25]).unwrap();
/// let processed = preprocessor.process(&snapshot);
/// assert!((processed.mean_pressure - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    smoother: ExponentialSmoother,
}

impl Preprocessor {
    /// Creates a preprocessor with the given smoothing factor.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            smoother: ExponentialSmoother::new(alpha),
        }
    }

    /// Returns true if the smoother holds state from a previous snapshot.
    #[must_use]
    pub const fn is_primed(&self) -> bool {
        self.smoother.is_primed()
    }

    /// Runs one snapshot through the pipeline, updating the smoother state.
    pub fn process(&mut self, snapshot: &PressureSnapshot) -> ProcessedSnapshot {
        let normalized = normalize(snapshot);
        let smoothed = self.smoother.apply(&normalized);

        ProcessedSnapshot {
            raw: snapshot.clone(),
            normalized,
            smoothed,
            max_pressure: snapshot.max(),
            min_pressure: snapshot.min(),
            mean_pressure: snapshot.mean(),
        }
    }

    /// Clears the smoothing accumulator.
    pub fn reset(&mut self) {
        self.smoother.reset();
    }
}
