//! The prediction record returned to callers.

use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cushion_signal::PressureDistribution;
use cushion_types::{PostureLabel, Timestamp, CLASS_COUNT};

use crate::features::PostureFeatures;

/// Confidence below which predictions carry a low-confidence caveat.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// One posture prediction.
///
/// For successful predictions the probability vector sums to 1 (within
/// floating-point tolerance) and `label` is its argmax. Failed predictions
/// (see [`Prediction::invalid`]) carry [`PostureLabel::Unknown`], zero
/// confidence, an all-zero probability vector, and an error description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The decided posture class.
    pub label: PostureLabel,

    /// Confidence in `[0, 1]` for the decided class.
    pub confidence: f64,

    /// Per-class probabilities, laid out per [`PostureLabel::classes`].
    pub probabilities: [f64; CLASS_COUNT],

    /// Features the decision was based on; `None` for failed predictions.
    pub features: Option<PostureFeatures>,

    /// Raw pressure-distribution metrics; `None` for failed predictions.
    pub distribution: Option<PressureDistribution>,

    /// When the prediction was made.
    pub timestamp: Timestamp,

    /// Wall time spent inside the classifier.
    pub inference_time: Duration,

    /// Version string of the model that produced this prediction.
    ///
    /// Borrows the model's static version; `Cow` keeps the record
    /// deserializable.
    pub model_version: Cow<'static, str>,

    /// Advisory message for the decided posture.
    pub advice: String,

    /// Error description for failed predictions.
    pub error: Option<String>,
}

impl Prediction {
    /// Returns the probability assigned to `label` (0 for `Unknown`).
    #[must_use]
    pub fn probability(&self, label: PostureLabel) -> f64 {
        label.index().map_or(0.0, |i| self.probabilities[i])
    }

    /// Returns true if the confidence is below
    /// [`LOW_CONFIDENCE_THRESHOLD`].
    #[must_use]
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }

    /// Returns true if this prediction carries no actionable posture signal.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.label == PostureLabel::Unknown
    }

    /// Builds the fallback prediction for a failed prediction call.
    #[must_use]
    pub fn invalid(
        error: impl Into<String>,
        timestamp: Timestamp,
        inference_time: Duration,
    ) -> Self {
        Self {
            label: PostureLabel::Unknown,
            confidence: 0.0,
            probabilities: [0.0; CLASS_COUNT],
            features: None,
            distribution: None,
            timestamp,
            inference_time,
            model_version: Cow::Borrowed(""),
            advice: PostureLabel::Unknown.advice().to_string(),
            error: Some(error.into()),
        }
    }

    /// Builds the advisory message for a label, appending the caveat when
    /// confidence is low.
    #[must_use]
    pub fn advice_for(label: PostureLabel, confidence: f64) -> String {
        let mut advice = label.advice().to_string();
        if confidence < LOW_CONFIDENCE_THRESHOLD {
            advice.push_str(" (Low confidence - please adjust cushion position)");
        }
        advice
    }
}
