//! Pressure-distribution metrics over the raw grid.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use cushion_types::{PressureSnapshot, GRID_SIZE};

/// Intensity above which a cell counts as a hotspot.
pub const HOTSPOT_THRESHOLD: f64 = 0.6;

/// Location and value of the highest-pressure cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxPressurePoint {
    /// Grid row of the cell.
    pub row: usize,
    /// Grid column of the cell.
    pub col: usize,
    /// Pressure at the cell.
    pub pressure: f64,
}

/// A cell whose intensity exceeds [`HOTSPOT_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Grid row of the cell.
    pub row: usize,
    /// Grid column of the cell.
    pub col: usize,
    /// Pressure at the cell.
    pub intensity: f64,
}

/// Descriptive metrics of how pressure is spread across the grid.
///
/// All metrics are computed from the **raw** snapshot so they describe what
/// the seat actually measured, independent of the smoothing state.
///
/// # Example
///
/// ```
/// use cushion_signal::PressureDistribution;
/// use cushion_types::PressureSnapshot;
///
/// let snapshot = PressureSnapshot::uniform(0.5).unwrap();
/// let dist = PressureDistribution::analyze(&snapshot);
///
/// // A uniform grid is perfectly symmetric and uniform, centered at (2, 2).
/// assert!((dist.symmetry_score - 1.0).abs() < 1e-12);
/// assert!((dist.uniformity - 1.0).abs() < 1e-12);
/// assert!((dist.center_of_pressure.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureDistribution {
    /// Pressure-weighted centroid in grid coordinates (x = column, y = row).
    ///
    /// The origin when the grid carries no pressure at all.
    pub center_of_pressure: DVec2,

    /// Sum of all readings.
    pub total_pressure: f64,

    /// The highest-pressure cell.
    pub max_point: MaxPressurePoint,

    /// Left/right mirror symmetry in roughly `[-1, 1]`; 1 is perfectly
    /// symmetric. Compares the column pairs (0, 4) and (1, 3) of each row,
    /// skipping pairs whose average is zero. 1 when nothing can be compared.
    pub symmetry_score: f64,

    /// Cells above [`HOTSPOT_THRESHOLD`], sorted descending by intensity.
    pub hotspots: Vec<Hotspot>,

    /// `max(0, 1 - stddev/mean)` over the readings; 1 for a uniform grid.
    pub uniformity: f64,
}

impl PressureDistribution {
    /// Computes all metrics for one snapshot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn analyze(snapshot: &PressureSnapshot) -> Self {
        let mut total = 0.0;
        let mut weighted = DVec2::ZERO;
        let mut max_point = MaxPressurePoint {
            row: 0,
            col: 0,
            pressure: f64::MIN,
        };
        let mut hotspots = Vec::new();

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pressure = snapshot.at(row, col);
                total += pressure;
                weighted += DVec2::new(col as f64, row as f64) * pressure;

                if pressure > max_point.pressure {
                    max_point = MaxPressurePoint { row, col, pressure };
                }
                if pressure > HOTSPOT_THRESHOLD {
                    hotspots.push(Hotspot {
                        row,
                        col,
                        intensity: pressure,
                    });
                }
            }
        }

        hotspots.sort_by(|a, b| {
            b.intensity
                .partial_cmp(&a.intensity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let center_of_pressure = if total > 0.0 {
            weighted / total
        } else {
            DVec2::ZERO
        };

        Self {
            center_of_pressure,
            total_pressure: total,
            max_point,
            symmetry_score: symmetry_score(snapshot),
            hotspots,
            uniformity: uniformity(snapshot),
        }
    }
}

/// Left/right mirror symmetry over the outer column pairs of each row.
#[allow(clippy::cast_precision_loss)]
fn symmetry_score(snapshot: &PressureSnapshot) -> f64 {
    let mut sum = 0.0;
    let mut comparisons = 0usize;

    for row in 0..GRID_SIZE {
        for col in 0..2 {
            let left = snapshot.at(row, col);
            let right = snapshot.at(row, GRID_SIZE - 1 - col);
            let average = f64::midpoint(left, right);
            if average > 0.0 {
                sum += (left - right).abs() / average;
                comparisons += 1;
            }
        }
    }

    if comparisons > 0 {
        1.0 - sum / comparisons as f64
    } else {
        1.0
    }
}

/// Normalized inverse coefficient of variation; 1 for a uniform grid.
#[allow(clippy::cast_precision_loss)]
fn uniformity(snapshot: &PressureSnapshot) -> f64 {
    let mean = snapshot.mean();
    if mean <= 0.0 {
        // Zero (or pathological negative-mean) grids count as uniform.
        return 1.0;
    }

    let variance = snapshot
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / cushion_types::SENSOR_COUNT as f64;

    (1.0 - variance.sqrt() / mean).max(0.0)
}
