//! Base pressure patterns per posture class.

use cushion_types::{PostureLabel, GRID_SIZE};

/// A 5×5 base pattern, row-major by row.
pub type Pattern = [[f64; GRID_SIZE]; GRID_SIZE];

/// Centered, symmetric load with strong center engagement.
pub const GOOD: Pattern = [
    [0.1, 0.2, 0.3, 0.2, 0.1],
    [0.2, 0.4, 0.6, 0.4, 0.2],
    [0.3, 0.6, 0.8, 0.6, 0.3],
    [0.2, 0.4, 0.6, 0.4, 0.2],
    [0.1, 0.2, 0.3, 0.2, 0.1],
];

/// Weight collapsed toward the back rows with a hollow center.
pub const SLOUCHING: Pattern = [
    [0.1, 0.1, 0.2, 0.1, 0.1],
    [0.2, 0.3, 0.4, 0.3, 0.2],
    [0.1, 0.2, 0.3, 0.2, 0.1],
    [0.3, 0.5, 0.7, 0.5, 0.3],
    [0.2, 0.4, 0.6, 0.4, 0.2],
];

/// Load shifted onto the left columns.
pub const LEANING_LEFT: Pattern = [
    [0.2, 0.4, 0.3, 0.1, 0.05],
    [0.4, 0.7, 0.5, 0.2, 0.1],
    [0.5, 0.8, 0.6, 0.3, 0.15],
    [0.3, 0.6, 0.4, 0.2, 0.1],
    [0.2, 0.4, 0.3, 0.1, 0.05],
];

/// Load shifted onto the right columns.
pub const LEANING_RIGHT: Pattern = [
    [0.05, 0.1, 0.3, 0.4, 0.2],
    [0.1, 0.2, 0.5, 0.7, 0.4],
    [0.15, 0.3, 0.6, 0.8, 0.5],
    [0.1, 0.2, 0.4, 0.6, 0.3],
    [0.05, 0.1, 0.3, 0.4, 0.2],
];

/// Asymmetric thigh ridge typical of crossed legs.
pub const CROSSED_LEGS: Pattern = [
    [0.1, 0.2, 0.2, 0.2, 0.1],
    [0.3, 0.5, 0.4, 0.5, 0.3],
    [0.2, 0.4, 0.6, 0.4, 0.2],
    [0.4, 0.7, 0.3, 0.7, 0.4],
    [0.3, 0.5, 0.2, 0.5, 0.3],
];

/// Returns the base pattern for a posture class.
///
/// `Unknown` falls back to the good-posture pattern, since there is no
/// meaningful "unknown" seating shape to fabricate.
#[must_use]
pub const fn base_pattern(label: PostureLabel) -> &'static Pattern {
    match label {
        PostureLabel::Good | PostureLabel::Unknown => &GOOD,
        PostureLabel::Slouching => &SLOUCHING,
        PostureLabel::LeaningLeft => &LEANING_LEFT,
        PostureLabel::LeaningRight => &LEANING_RIGHT,
        PostureLabel::CrossedLegs => &CROSSED_LEGS,
    }
}
