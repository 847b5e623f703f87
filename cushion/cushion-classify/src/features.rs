//! Feature extraction from the smoothed pressure grid.

use serde::{Deserialize, Serialize};

use cushion_types::{cell_index, GRID_SIZE, SENSOR_COUNT};

/// Guard against division by zero in the front/back ratio.
pub const RATIO_EPSILON: f64 = 1e-3;

/// Scalar features the heuristic rules evaluate.
///
/// Extracted from the *smoothed* grid, so consecutive snapshots produce
/// stable features even with jittery sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostureFeatures {
    /// `|mean(cols 0-1) - mean(cols 3-4)|`; the center column is excluded.
    pub asymmetry: f64,

    /// Mean of the left two columns.
    pub left_mean: f64,

    /// Mean of the right two columns.
    pub right_mean: f64,

    /// `mean(rows 0-1) / (mean(rows 3-4) + epsilon)`.
    pub front_back_ratio: f64,

    /// Value at the center cell (row 2, col 2).
    pub center_engagement: f64,

    /// Mean of all 25 smoothed readings.
    pub overall_activation: f64,
}

impl PostureFeatures {
    /// Extracts all features from one smoothed grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn extract(smoothed: &[f64; SENSOR_COUNT]) -> Self {
        let mut left_sum = 0.0;
        let mut right_sum = 0.0;
        for row in 0..GRID_SIZE {
            for col in 0..2 {
                left_sum += smoothed[cell_index(row, col)];
                right_sum += smoothed[cell_index(row, GRID_SIZE - 1 - col)];
            }
        }
        let side_cells = (GRID_SIZE * 2) as f64;
        let left_mean = left_sum / side_cells;
        let right_mean = right_sum / side_cells;

        // Rows 0-1 are the front edge of the seat, rows 3-4 the back.
        let front_mean = smoothed[..2 * GRID_SIZE].iter().sum::<f64>() / side_cells;
        let back_mean = smoothed[3 * GRID_SIZE..].iter().sum::<f64>() / side_cells;

        Self {
            asymmetry: (left_mean - right_mean).abs(),
            left_mean,
            right_mean,
            front_back_ratio: front_mean / (back_mean + RATIO_EPSILON),
            center_engagement: smoothed[cell_index(2, 2)],
            overall_activation: smoothed.iter().sum::<f64>() / SENSOR_COUNT as f64,
        }
    }

    /// Returns true if the left side carries more weight than the right.
    #[must_use]
    pub fn leans_left(&self) -> bool {
        self.left_mean > self.right_mean
    }
}
