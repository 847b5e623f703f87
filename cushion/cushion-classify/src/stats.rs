//! Aggregate statistics over retained predictions.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cushion_types::PostureLabel;

use crate::prediction::Prediction;

/// How many times a label appeared in the statistics window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    /// The posture label.
    pub label: PostureLabel,
    /// Occurrences within the window.
    pub count: usize,
}

/// Summary of recent classifier output.
///
/// A convenience read-only query; not required for core correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierStats {
    /// Predictions made since construction or the last reset.
    pub total_predictions: usize,

    /// Predictions inside the statistics window.
    pub recent_predictions: usize,

    /// Mean confidence over the window.
    pub average_confidence: f64,

    /// Mean inference latency over the window.
    pub average_inference_time: Duration,

    /// Per-label counts over the window, descending by count.
    pub label_counts: Vec<LabelCount>,

    /// Share of `good` predictions in the window, in percent.
    pub good_percentage: f64,
}

impl ClassifierStats {
    /// Aggregates the newest `window` entries of `history`.
    ///
    /// Returns `None` when the history is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_history(
        history: &VecDeque<Prediction>,
        total_predictions: usize,
        window: usize,
    ) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let start = history.len().saturating_sub(window);
        let recent = history.len() - start;
        let recent_f = recent as f64;

        let mut confidence_sum = 0.0;
        let mut latency_sum = Duration::ZERO;
        let mut counts: Vec<LabelCount> = Vec::new();

        for prediction in history.iter().skip(start) {
            confidence_sum += prediction.confidence;
            latency_sum += prediction.inference_time;

            match counts.iter_mut().find(|c| c.label == prediction.label) {
                Some(entry) => entry.count += 1,
                None => counts.push(LabelCount {
                    label: prediction.label,
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));

        let good = counts
            .iter()
            .find(|c| c.label == PostureLabel::Good)
            .map_or(0, |c| c.count);

        Some(Self {
            total_predictions,
            recent_predictions: recent,
            average_confidence: confidence_sum / recent_f,
            average_inference_time: latency_sum / u32::try_from(recent).unwrap_or(u32::MAX),
            label_counts: counts,
            good_percentage: good as f64 / recent_f * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cushion_types::Timestamp;

    fn prediction(label: PostureLabel, confidence: f64) -> Prediction {
        let mut p = Prediction::invalid("", Timestamp::zero(), Duration::from_millis(2));
        p.label = label;
        p.confidence = confidence;
        p.error = None;
        p
    }

    #[test]
    fn stats_empty_history_is_none() {
        let history = VecDeque::new();
        assert!(ClassifierStats::from_history(&history, 0, 50).is_none());
    }

    #[test]
    fn stats_aggregates_window() {
        let mut history = VecDeque::new();
        history.push_back(prediction(PostureLabel::Good, 0.9));
        history.push_back(prediction(PostureLabel::Good, 0.8));
        history.push_back(prediction(PostureLabel::Slouching, 0.7));
        history.push_back(prediction(PostureLabel::LeaningLeft, 0.6));

        let stats = ClassifierStats::from_history(&history, 10, 50).unwrap();
        assert_eq!(stats.total_predictions, 10);
        assert_eq!(stats.recent_predictions, 4);
        assert!((stats.average_confidence - 0.75).abs() < 1e-12);
        assert!((stats.good_percentage - 50.0).abs() < 1e-9);
        assert_eq!(stats.average_inference_time, Duration::from_millis(2));

        // Most frequent label first.
        assert_eq!(stats.label_counts[0].label, PostureLabel::Good);
        assert_eq!(stats.label_counts[0].count, 2);
    }

    #[test]
    fn stats_window_limits_aggregation() {
        let mut history = VecDeque::new();
        for _ in 0..10 {
            history.push_back(prediction(PostureLabel::Slouching, 0.5));
        }
        history.push_back(prediction(PostureLabel::Good, 1.0));

        // Window of 1 only sees the final good prediction.
        let stats = ClassifierStats::from_history(&history, 11, 1).unwrap();
        assert_eq!(stats.recent_predictions, 1);
        assert!((stats.good_percentage - 100.0).abs() < 1e-9);
        assert!((stats.average_confidence - 1.0).abs() < 1e-12);
    }
}
