//! The top-level posture classifier.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use cushion_signal::{Preprocessor, PressureDistribution};
use cushion_types::{PressureSnapshot, Timestamp};

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::features::PostureFeatures;
use crate::model::{synthesize_probabilities, HeuristicModel, PostureModel};
use crate::prediction::Prediction;
use crate::stats::ClassifierStats;

/// Posture classifier over a single sensor stream.
///
/// Owns the only mutable cross-snapshot state in the pipeline: the
/// exponential-smoothing accumulator and a bounded prediction history.
/// Calls are synchronous and must be serialized per instance; use one
/// classifier per logical sensor stream.
///
/// # Example
///
/// ```
/// use cushion_classify::{ClassifierConfig, PostureClassifier};
///
/// let mut classifier = PostureClassifier::new(ClassifierConfig::default().with_seed(1));
/// let prediction = classifier.predict(&[0.5; 25]);
/// assert!(prediction.probabilities.iter().sum::<f64>() > 0.999);
/// ```
pub struct PostureClassifier {
    preprocessor: Preprocessor,
    model: Box<dyn PostureModel + Send>,
    rng: StdRng,
    history: VecDeque<Prediction>,
    total_predictions: usize,
    config: ClassifierConfig,
}

impl PostureClassifier {
    /// Creates a classifier backed by the heuristic model.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_model(config, Box::new(HeuristicModel::new(config.heuristic)))
    }

    /// Creates a classifier backed by a caller-supplied model.
    ///
    /// This is the seam for swapping in a trained model without touching
    /// the preprocessing or probability plumbing.
    #[must_use]
    pub fn with_model(config: ClassifierConfig, model: Box<dyn PostureModel + Send>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            preprocessor: Preprocessor::new(config.smoothing_alpha),
            model,
            rng,
            history: VecDeque::with_capacity(config.history_capacity),
            total_predictions: 0,
            config,
        }
    }

    /// Returns the configuration this classifier was built with.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one snapshot of 25 readings.
    ///
    /// Never panics and never returns an error: malformed input (wrong
    /// length, non-finite values) produces an `Unknown` prediction with
    /// zero confidence and an attached error description. Failed
    /// predictions are returned but not retained, so history and
    /// statistics cover successful predictions only.
    pub fn predict(&mut self, readings: &[f64]) -> Prediction {
        let started = Instant::now();
        let timestamp = Timestamp::now();

        let prediction = match self.try_predict(readings, timestamp, started) {
            Ok(prediction) => {
                self.total_predictions += 1;
                if self.history.len() >= self.config.history_capacity {
                    self.history.pop_front();
                }
                self.history.push_back(prediction.clone());
                prediction
            }
            Err(error) => {
                debug!(%error, "prediction failed, degrading to unknown");
                Prediction::invalid(error.to_string(), timestamp, started.elapsed())
            }
        };

        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "prediction complete"
        );

        prediction
    }

    fn try_predict(
        &mut self,
        readings: &[f64],
        timestamp: Timestamp,
        started: Instant,
    ) -> Result<Prediction> {
        let snapshot = PressureSnapshot::from_slice(readings)?;

        let processed = self.preprocessor.process(&snapshot);
        let features = PostureFeatures::extract(&processed.smoothed);
        let output = self.model.infer(&processed, &features, &mut self.rng);
        let probabilities = synthesize_probabilities(output.label, output.confidence, &mut self.rng);
        let distribution = PressureDistribution::analyze(&snapshot);

        Ok(Prediction {
            label: output.label,
            confidence: output.confidence,
            probabilities,
            features: Some(features),
            distribution: Some(distribution),
            timestamp,
            inference_time: started.elapsed(),
            model_version: Cow::Borrowed(self.model.version()),
            advice: Prediction::advice_for(output.label, output.confidence),
            error: None,
        })
    }

    /// Clears the smoothing accumulator and the prediction history.
    ///
    /// The first prediction after a reset treats its normalized input as
    /// already smoothed.
    pub fn reset(&mut self) {
        self.preprocessor.reset();
        self.history.clear();
        self.total_predictions = 0;
        debug!("classifier state reset");
    }

    /// Returns aggregate statistics over retained predictions, or `None`
    /// when no successful predictions have been made yet.
    #[must_use]
    pub fn statistics(&self) -> Option<ClassifierStats> {
        ClassifierStats::from_history(
            &self.history,
            self.total_predictions,
            self.config.stats_window,
        )
    }

    /// Returns the most recent successful prediction, if any.
    #[must_use]
    pub fn last_prediction(&self) -> Option<&Prediction> {
        self.history.back()
    }

    /// Returns retained successful predictions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Prediction> {
        self.history.iter()
    }
}

impl std::fmt::Debug for PostureClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostureClassifier")
            .field("config", &self.config)
            .field("model_version", &self.model.version())
            .field("history_len", &self.history.len())
            .field("total_predictions", &self.total_predictions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeuristicConfig;
    use approx::assert_relative_eq;
    use cushion_types::{cell_index, PostureLabel, GRID_SIZE, SENSOR_COUNT};

    fn deterministic_config() -> ClassifierConfig {
        ClassifierConfig::default().with_seed(42).with_heuristic(
            HeuristicConfig::default()
                .with_noise_probability(0.0)
                .with_crossed_gate_probability(0.0),
        )
    }

    const GOOD_PATTERN: [f64; SENSOR_COUNT] = [
        0.1, 0.2, 0.3, 0.2, 0.1, //
        0.2, 0.4, 0.6, 0.4, 0.2, //
        0.3, 0.6, 0.8, 0.6, 0.3, //
        0.2, 0.4, 0.6, 0.4, 0.2, //
        0.1, 0.2, 0.3, 0.2, 0.1,
    ];

    #[test]
    fn predict_good_pattern() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        let prediction = classifier.predict(&GOOD_PATTERN);

        assert_eq!(prediction.label, PostureLabel::Good);
        assert!(prediction.confidence >= 0.85);
        assert!(prediction.error.is_none());
        assert!(prediction.features.is_some());
        assert!(prediction.distribution.is_some());
        assert_eq!(prediction.model_version, "heuristic-v1");
    }

    #[test]
    fn probabilities_sum_to_one_and_label_is_argmax() {
        let mut classifier = PostureClassifier::new(deterministic_config());

        for _ in 0..20 {
            let prediction = classifier.predict(&GOOD_PATTERN);
            let total: f64 = prediction.probabilities.iter().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-6);

            let argmax = prediction
                .probabilities
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                .map(|(i, _)| i);
            assert_eq!(argmax, prediction.label.index());
        }
    }

    #[test]
    fn predict_invalid_length_degrades_to_unknown() {
        let mut classifier = PostureClassifier::new(deterministic_config());

        for readings in [&[0.5; 24][..], &[0.5; 26][..]] {
            let prediction = classifier.predict(readings);
            assert!(prediction.is_unknown());
            assert_eq!(prediction.confidence, 0.0);
            assert!(prediction.error.is_some());
            assert!(prediction.probabilities.iter().all(|&p| p == 0.0));
        }
    }

    #[test]
    fn predict_non_finite_degrades_to_unknown() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        let mut readings = [0.5; SENSOR_COUNT];
        readings[3] = f64::NAN;

        let prediction = classifier.predict(&readings);
        assert!(prediction.is_unknown());
        assert!(prediction
            .error
            .as_deref()
            .is_some_and(|e| e.contains("non-finite")));
    }

    #[test]
    fn invalid_input_does_not_touch_smoothing_state() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        classifier.predict(&[0.5; 24]);

        // First valid prediction still passes through unsmoothed.
        let prediction = classifier.predict(&GOOD_PATTERN);
        assert_eq!(prediction.label, PostureLabel::Good);
        assert!(prediction.confidence >= 0.85);
    }

    #[test]
    fn leaning_detection_both_sides() {
        let mut left = [0.05; SENSOR_COUNT];
        let mut right = [0.05; SENSOR_COUNT];
        for row in 0..GRID_SIZE {
            left[cell_index(row, 0)] = 0.9;
            left[cell_index(row, 1)] = 0.8;
            right[cell_index(row, 3)] = 0.8;
            right[cell_index(row, 4)] = 0.9;
        }

        let mut classifier = PostureClassifier::new(deterministic_config());
        assert_eq!(classifier.predict(&left).label, PostureLabel::LeaningLeft);

        classifier.reset();
        assert_eq!(classifier.predict(&right).label, PostureLabel::LeaningRight);
    }

    #[test]
    fn reset_clears_smoothing_and_history() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        classifier.predict(&[0.9; SENSOR_COUNT]);
        classifier.predict(&GOOD_PATTERN);
        assert!(classifier.statistics().is_some());

        classifier.reset();
        assert!(classifier.statistics().is_none());
        assert!(classifier.last_prediction().is_none());

        // After reset the smoother is unprimed, so the features match a
        // fresh classifier's features exactly.
        let after_reset = classifier.predict(&GOOD_PATTERN);
        let mut fresh = PostureClassifier::new(deterministic_config());
        let from_fresh = fresh.predict(&GOOD_PATTERN);
        assert_eq!(after_reset.features, from_fresh.features);
    }

    #[test]
    fn seeded_classifiers_agree() {
        let mut a = PostureClassifier::new(ClassifierConfig::default().with_seed(7));
        let mut b = PostureClassifier::new(ClassifierConfig::default().with_seed(7));

        for _ in 0..10 {
            let pa = a.predict(&GOOD_PATTERN);
            let pb = b.predict(&GOOD_PATTERN);
            assert_eq!(pa.label, pb.label);
            assert_eq!(pa.probabilities, pb.probabilities);
            assert_relative_eq!(pa.confidence, pb.confidence);
        }
    }

    #[test]
    fn history_is_bounded() {
        let config = deterministic_config().with_history_capacity(5);
        let mut classifier = PostureClassifier::new(config);
        for _ in 0..20 {
            classifier.predict(&GOOD_PATTERN);
        }

        assert_eq!(classifier.history().count(), 5);
        let stats = classifier.statistics().unwrap();
        assert_eq!(stats.total_predictions, 20);
        assert_eq!(stats.recent_predictions, 5);
    }

    #[test]
    fn statistics_track_labels() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        for _ in 0..4 {
            classifier.predict(&GOOD_PATTERN);
        }

        let stats = classifier.statistics().unwrap();
        assert_eq!(stats.total_predictions, 4);
        assert_eq!(stats.label_counts[0].label, PostureLabel::Good);
        assert_eq!(stats.label_counts[0].count, 4);
        assert!((stats.good_percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn failed_predictions_are_not_retained() {
        let mut classifier = PostureClassifier::new(deterministic_config());
        for _ in 0..4 {
            classifier.predict(&GOOD_PATTERN);
        }
        classifier.predict(&[0.5; 24]); // one failure

        // The failure is reported to the caller but never enters history,
        // so statistics stay a summary of successful predictions.
        let stats = classifier.statistics().unwrap();
        assert_eq!(stats.total_predictions, 4);
        assert_eq!(stats.recent_predictions, 4);
        assert!((stats.good_percentage - 100.0).abs() < 1e-9);
        assert!(stats
            .label_counts
            .iter()
            .all(|entry| entry.label != PostureLabel::Unknown));
        assert_eq!(
            classifier.last_prediction().map(|p| p.label),
            Some(PostureLabel::Good)
        );
    }
}
