//! Pressure-grid snapshot type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CushionError, Result};

/// Width and height of the square sensor grid.
pub const GRID_SIZE: usize = 5;

/// Number of cells in one snapshot (`GRID_SIZE`²).
pub const SENSOR_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Returns the row-major cell index for `(row, col)`.
#[must_use]
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// One reading cycle of the 5×5 pressure-sensor grid.
///
/// Readings are stored row-major (`index = row * 5 + col`) and are immutable
/// once captured. Values are expected in `[0, 1]` but any finite range is
/// accepted; min-max normalization happens downstream in `cushion-signal`.
///
/// # Example
///
/// ```
/// use cushion_types::PressureSnapshot;
///
/// let snapshot = PressureSnapshot::from_slice(&[0.2; 25]).unwrap();
/// assert!((snapshot.at(2, 2) - 0.2).abs() < 1e-12);
///
/// // A 24-element slice is rejected.
/// assert!(PressureSnapshot::from_slice(&[0.2; 24]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureSnapshot {
    readings: [f64; SENSOR_COUNT],
}

impl PressureSnapshot {
    /// Creates a snapshot from a full grid of readings.
    ///
    /// # Errors
    ///
    /// Returns [`CushionError::NonFiniteReading`] if any value is `NaN` or
    /// infinite.
    pub fn new(readings: [f64; SENSOR_COUNT]) -> Result<Self> {
        for (index, &value) in readings.iter().enumerate() {
            if !value.is_finite() {
                return Err(CushionError::non_finite(index, value));
            }
        }
        Ok(Self { readings })
    }

    /// Creates a snapshot from a slice of readings.
    ///
    /// # Errors
    ///
    /// Returns [`CushionError::ReadingCountMismatch`] if the slice does not
    /// hold exactly [`SENSOR_COUNT`] values, or
    /// [`CushionError::NonFiniteReading`] if any value is not finite.
    pub fn from_slice(readings: &[f64]) -> Result<Self> {
        let array: [f64; SENSOR_COUNT] = readings
            .try_into()
            .map_err(|_| CushionError::count_mismatch(SENSOR_COUNT, readings.len()))?;
        Self::new(array)
    }

    /// Creates a snapshot with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CushionError::NonFiniteReading`] if `value` is not finite.
    pub fn uniform(value: f64) -> Result<Self> {
        Self::new([value; SENSOR_COUNT])
    }

    /// Creates an all-zero snapshot.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            readings: [0.0; SENSOR_COUNT],
        }
    }

    /// Returns the reading at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..GRID_SIZE`.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.readings[cell_index(row, col)]
    }

    /// Returns the reading at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(self.readings[cell_index(row, col)])
        } else {
            None
        }
    }

    /// Returns the readings as a row-major array.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; SENSOR_COUNT] {
        &self.readings
    }

    /// Returns an iterator over readings in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().copied()
    }

    /// Returns the maximum reading.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.readings.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Returns the minimum reading.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.readings.iter().copied().fold(f64::MAX, f64::min)
    }

    /// Returns the mean reading.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.readings.iter().sum::<f64>() / SENSOR_COUNT as f64
    }
}

impl Default for PressureSnapshot {
    fn default() -> Self {
        Self::zero()
    }
}
