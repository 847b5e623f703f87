//! Mock pressure-snapshot generation for the cushion posture stack.
//!
//! No real sensor hardware exists in the prototype, so this crate fabricates
//! plausible 5×5 pressure grids: a base pattern per posture class, Gaussian
//! sensor noise, and a slow sinusoidal drift that makes consecutive
//! snapshots breathe like a seated person.
//!
//! - [`base_pattern`] - The canonical 5×5 pattern for each posture
//! - [`SnapshotGenerator`] - Seeded generator producing [`PressureSnapshot`]s
//!
//! # Example
//!
//! ```
//! use cushion_sim::{GeneratorConfig, SnapshotGenerator};
//! use cushion_types::PostureLabel;
//!
//! let mut generator = SnapshotGenerator::new(GeneratorConfig::default().with_seed(42));
//! let snapshot = generator.generate(PostureLabel::LeaningLeft);
//! assert!(snapshot.iter().all(|v| (0.0..=1.0).contains(&v)));
//! ```
//!
//! [`PressureSnapshot`]: cushion_types::PressureSnapshot

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod generator;
mod patterns;

pub use generator::{GeneratorConfig, SnapshotGenerator};
pub use patterns::base_pattern;
