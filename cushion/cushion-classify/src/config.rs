//! Classifier and heuristic configuration.

use serde::{Deserialize, Serialize};

use cushion_signal::DEFAULT_ALPHA;

/// Tunable constants of the heuristic rule set.
///
/// The stochastic gates (`crossed_gate_probability`, `noise_probability`)
/// model sensor jitter in lieu of a calibrated model. Zero them for
/// deterministic output in tests.
///
/// # Example
///
/// ```
/// use cushion_classify::HeuristicConfig;
///
/// let config = HeuristicConfig::default()
///     .with_noise_probability(0.0)
///     .with_crossed_gate_probability(0.0);
/// assert_eq!(config.noise_probability, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Left/right asymmetry above which a lean is reported. Default: 0.25
    pub asymmetry_threshold: f64,

    /// Front/back ratio above which slouching is considered. Default: 1.5
    pub slouch_front_back_ratio: f64,

    /// Center engagement below which slouching is considered. Default: 0.4
    pub slouch_center_max: f64,

    /// Edge-to-corner pressure ratio for the crossed-legs pattern.
    /// Default: 1.5
    pub crossed_edge_ratio: f64,

    /// Probability that a matching crossed-legs pattern is reported.
    /// Default: 0.2
    pub crossed_gate_probability: f64,

    /// Probability of overriding a `good` classification with a random
    /// other label, simulating sensor noise. Default: 0.1
    pub noise_probability: f64,

    /// Lower bound of the base confidence draw. Default: 0.85
    pub base_confidence_min: f64,

    /// Upper bound (exclusive) of the base confidence draw. Default: 1.0
    pub base_confidence_max: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            asymmetry_threshold: 0.25,
            slouch_front_back_ratio: 1.5,
            slouch_center_max: 0.4,
            crossed_edge_ratio: 1.5,
            crossed_gate_probability: 0.2,
            noise_probability: 0.1,
            base_confidence_min: 0.85,
            base_confidence_max: 1.0,
        }
    }
}

impl HeuristicConfig {
    /// Sets the asymmetry threshold.
    #[must_use]
    pub const fn with_asymmetry_threshold(mut self, threshold: f64) -> Self {
        self.asymmetry_threshold = threshold;
        self
    }

    /// Sets the slouch front/back ratio threshold.
    #[must_use]
    pub const fn with_slouch_front_back_ratio(mut self, ratio: f64) -> Self {
        self.slouch_front_back_ratio = ratio;
        self
    }

    /// Sets the slouch center-engagement ceiling.
    #[must_use]
    pub const fn with_slouch_center_max(mut self, max: f64) -> Self {
        self.slouch_center_max = max;
        self
    }

    /// Sets the crossed-legs edge-to-corner ratio.
    #[must_use]
    pub const fn with_crossed_edge_ratio(mut self, ratio: f64) -> Self {
        self.crossed_edge_ratio = ratio;
        self
    }

    /// Sets the crossed-legs gate probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_crossed_gate_probability(mut self, probability: f64) -> Self {
        self.crossed_gate_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the noise-override probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_noise_probability(mut self, probability: f64) -> Self {
        self.noise_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the base confidence range, clamped to `[0, 1]` with
    /// `min < max` enforced.
    #[must_use]
    pub fn with_base_confidence(mut self, min: f64, max: f64) -> Self {
        let min = min.clamp(0.0, 1.0);
        let max = max.clamp(0.0, 1.0);
        self.base_confidence_min = min.min(max);
        self.base_confidence_max = max.max(min + f64::EPSILON);
        self
    }
}

/// Configuration for a [`PostureClassifier`](crate::PostureClassifier).
///
/// # Example
///
/// ```
/// use cushion_classify::ClassifierConfig;
///
/// let config = ClassifierConfig::default()
///     .with_seed(42)
///     .with_history_capacity(200);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Exponential smoothing factor for preprocessing. Default: 0.3
    pub smoothing_alpha: f64,

    /// Most recent predictions retained for statistics. Default: 100
    pub history_capacity: usize,

    /// Window (newest entries) over which statistics are aggregated.
    /// Default: 50
    pub stats_window: usize,

    /// Optional seed for reproducible predictions. `None` seeds from
    /// system entropy.
    pub seed: Option<u64>,

    /// Heuristic rule constants.
    pub heuristic: HeuristicConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: DEFAULT_ALPHA,
            history_capacity: 100,
            stats_window: 50,
            seed: None,
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smoothing factor.
    #[must_use]
    pub const fn with_smoothing_alpha(mut self, alpha: f64) -> Self {
        self.smoothing_alpha = alpha;
        self
    }

    /// Sets the history capacity (minimum 1).
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Sets the statistics window (minimum 1).
    #[must_use]
    pub fn with_stats_window(mut self, window: usize) -> Self {
        self.stats_window = window.max(1);
        self
    }

    /// Sets a random seed for reproducible predictions.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the heuristic rule constants.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }
}
