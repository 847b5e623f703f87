//! Pressure-grid signal processing for the cushion posture stack.
//!
//! This crate turns raw [`PressureSnapshot`]s into the processed form the
//! classifier consumes, and computes descriptive pressure-distribution
//! metrics from the raw grid:
//!
//! # Preprocessing
//!
//! - [`normalize`] - Min-max rescale of a snapshot into `[0, 1]`
//! - [`ExponentialSmoother`] - EMA filter against the previous processed grid
//! - [`Preprocessor`] - Owns the smoothing state; produces [`ProcessedSnapshot`]
//!
//! # Distribution Analysis
//!
//! - [`PressureDistribution`] - Center of pressure, symmetry, hotspots,
//!   uniformity, computed from the *raw* (unsmoothed) snapshot
//!
//! # Example
//!
//! ```
//! use cushion_signal::Preprocessor;
//! use cushion_types::PressureSnapshot;
//!
//! let mut preprocessor = Preprocessor::default();
//! let snapshot = PressureSnapshot::from_slice(&[0.5; 25]).unwrap();
//! let processed = preprocessor.process(&snapshot);
//!
//! // A uniform snapshot normalizes to all zeros.
//! assert!(processed.normalized.iter().all(|&v| v == 0.0));
//! ```
//!
//! [`PressureSnapshot`]: cushion_types::PressureSnapshot

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod distribution;
mod normalize;
mod processed;
mod smooth;

pub use distribution::{Hotspot, MaxPressurePoint, PressureDistribution, HOTSPOT_THRESHOLD};
pub use normalize::normalize;
pub use processed::{Preprocessor, ProcessedSnapshot};
pub use smooth::{ExponentialSmoother, DEFAULT_ALPHA};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        normalize, ExponentialSmoother, Hotspot, MaxPressurePoint, Preprocessor,
        PressureDistribution, ProcessedSnapshot, DEFAULT_ALPHA, HOTSPOT_THRESHOLD,
    };
}
