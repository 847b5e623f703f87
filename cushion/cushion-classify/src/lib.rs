//! Heuristic posture classification for the pressure cushion.
//!
//! This crate maps a 5×5 pressure-grid snapshot to one of five posture
//! classes with a confidence score, a per-class probability distribution,
//! extracted features, and pressure-distribution metrics.
//!
//! # Pipeline
//!
//! 1. Validate and preprocess the snapshot (`cushion-signal`)
//! 2. Extract [`PostureFeatures`] from the smoothed grid
//! 3. Run the [`PostureModel`] (ordered heuristic rules by default)
//! 4. Synthesize the probability distribution
//! 5. Analyze the raw pressure distribution
//!
//! # Failure Semantics
//!
//! [`PostureClassifier::predict`] never panics and never returns `Err`:
//! malformed input yields a [`Prediction`] labeled
//! [`Unknown`](cushion_types::PostureLabel::Unknown) with zero confidence
//! and an attached error description.
//!
//! # Reproducibility
//!
//! The heuristic intentionally carries stochastic branches (placeholder for
//! a calibrated model). All randomness flows through one seedable generator:
//! set [`ClassifierConfig::with_seed`] for reproducible output, and zero the
//! [`HeuristicConfig`] gate probabilities for fully deterministic output.
//!
//! # Example
//!
//! ```
//! use cushion_classify::{ClassifierConfig, PostureClassifier};
//! use cushion_types::PostureLabel;
//!
//! let mut classifier = PostureClassifier::new(ClassifierConfig::default().with_seed(7));
//! let prediction = classifier.predict(&[0.5; 25]);
//! assert_ne!(prediction.label, PostureLabel::Unknown);
//!
//! // Invalid input degrades to an unknown prediction, never a fault.
//! let bad = classifier.predict(&[0.5; 24]);
//! assert_eq!(bad.label, PostureLabel::Unknown);
//! assert_eq!(bad.confidence, 0.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classifier;
mod config;
mod error;
mod features;
mod model;
mod prediction;
mod stats;

pub use classifier::PostureClassifier;
pub use config::{ClassifierConfig, HeuristicConfig};
pub use error::{ClassifyError, Result};
pub use features::{PostureFeatures, RATIO_EPSILON};
pub use model::{synthesize_probabilities, HeuristicModel, ModelOutput, PostureModel};
pub use prediction::{Prediction, LOW_CONFIDENCE_THRESHOLD};
pub use stats::{ClassifierStats, LabelCount};
