//! Posture label enum.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of classifiable posture classes (excludes [`PostureLabel::Unknown`]).
pub const CLASS_COUNT: usize = 5;

/// Posture classes reported by the classifier.
///
/// [`PostureLabel::Unknown`] is reserved for failed predictions (malformed
/// input, internal faults) and never appears in probability distributions.
///
/// # Example
///
/// ```
/// use cushion_types::PostureLabel;
///
/// assert_eq!(PostureLabel::LeaningLeft.as_str(), "leaning_left");
/// assert_eq!(PostureLabel::from_index(0), Some(PostureLabel::Good));
/// assert_eq!(PostureLabel::Unknown.index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PostureLabel {
    /// Upright, centered sitting posture.
    Good,
    /// Forward-leaning posture with low center engagement.
    Slouching,
    /// Weight shifted to the left half of the cushion.
    LeaningLeft,
    /// Weight shifted to the right half of the cushion.
    LeaningRight,
    /// Edge-heavy pressure pattern typical of crossed legs.
    CrossedLegs,
    /// No actionable posture signal (failed prediction).
    Unknown,
}

impl PostureLabel {
    /// Returns the classifiable labels in canonical order.
    ///
    /// This order defines the layout of probability vectors.
    #[must_use]
    pub const fn classes() -> [Self; CLASS_COUNT] {
        [
            Self::Good,
            Self::Slouching,
            Self::LeaningLeft,
            Self::LeaningRight,
            Self::CrossedLegs,
        ]
    }

    /// Returns the label for a class index, or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Good),
            1 => Some(Self::Slouching),
            2 => Some(Self::LeaningLeft),
            3 => Some(Self::LeaningRight),
            4 => Some(Self::CrossedLegs),
            _ => None,
        }
    }

    /// Returns the class index, or `None` for [`Self::Unknown`].
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Good => Some(0),
            Self::Slouching => Some(1),
            Self::LeaningLeft => Some(2),
            Self::LeaningRight => Some(3),
            Self::CrossedLegs => Some(4),
            Self::Unknown => None,
        }
    }

    /// Returns the snake_case wire name of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Slouching => "slouching",
            Self::LeaningLeft => "leaning_left",
            Self::LeaningRight => "leaning_right",
            Self::CrossedLegs => "crossed_legs",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the advisory message for this posture.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Good => "Great posture! Keep it up.",
            Self::Slouching => "Straighten your back and shoulders. Sit tall.",
            Self::LeaningLeft => {
                "You're leaning left. Center yourself and distribute weight evenly."
            }
            Self::LeaningRight => {
                "You're leaning right. Center yourself and distribute weight evenly."
            }
            Self::CrossedLegs => "Try uncrossing your legs for better circulation.",
            Self::Unknown => "Unable to determine posture. Check sensor connection.",
        }
    }
}

impl fmt::Display for PostureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
