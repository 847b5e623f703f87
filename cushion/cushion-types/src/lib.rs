//! Hardware-agnostic data types for the pressure-cushion posture stack.
//!
//! This crate provides the foundational types shared across:
//! - Real hardware drivers (serial/BLE cushion firmware bridges)
//! - Simulated snapshot generators (`cushion-sim`)
//! - Signal preprocessing (`cushion-signal`)
//! - Posture classification (`cushion-classify`)
//!
//! # Types
//!
//! - [`PressureSnapshot`] - One validated reading cycle of the 5×5 sensor grid
//! - [`PostureLabel`] - The posture classes a classifier can report
//! - [`Timestamp`] - Nanosecond-precision timing for readings and predictions
//! - [`CushionError`] - Validation and configuration errors
//!
//! # Design Philosophy
//!
//! These are **raw data types**. Derived/processed types (normalized grids,
//! predictions, distribution metrics) belong in `cushion-signal` and
//! `cushion-classify`. This separation keeps the same types usable for
//! simulated and real sensor streams.
//!
//! # Example
//!
//! ```
//! use cushion_types::{PressureSnapshot, SENSOR_COUNT};
//!
//! let readings = [0.5; SENSOR_COUNT];
//! let snapshot = PressureSnapshot::new(readings).unwrap();
//! assert!((snapshot.mean() - 0.5).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod label;
mod snapshot;
mod time;

pub use error::{CushionError, Result};
pub use label::{PostureLabel, CLASS_COUNT};
pub use snapshot::{cell_index, PressureSnapshot, GRID_SIZE, SENSOR_COUNT};
pub use time::Timestamp;
