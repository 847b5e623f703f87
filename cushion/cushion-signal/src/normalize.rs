//! Min-max normalization of pressure grids.

use cushion_types::{PressureSnapshot, SENSOR_COUNT};

/// Rescales readings so the snapshot minimum maps to 0 and the maximum to 1.
///
/// A uniform snapshot (`max == min`) maps to all zeros, avoiding the
/// degenerate division. Already `[0, 1]`-spanning snapshots pass through
/// unchanged, so normalization is idempotent.
///
/// # Example
///
/// ```
/// use cushion_signal::normalize;
/// use cushion_types::PressureSnapshot;
///
/// let mut readings = [2.0; 25];
/// readings[0] = 1.0;
/// readings[24] = 3.0;
/// let snapshot = PressureSnapshot::new(readings).unwrap();
///
/// let normalized = normalize(&snapshot);
/// assert!((normalized[0] - 0.0).abs() < 1e-12);
/// assert!((normalized[12] - 0.5).abs() < 1e-12);
/// assert!((normalized[24] - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize(snapshot: &PressureSnapshot) -> [f64; SENSOR_COUNT] {
    let min = snapshot.min();
    let range = snapshot.max() - min;
    let mut out = [0.0; SENSOR_COUNT];

    if range <= 0.0 {
        return out;
    }

    for (cell, reading) in out.iter_mut().zip(snapshot.iter()) {
        *cell = (reading - min) / range;
    }
    out
}
