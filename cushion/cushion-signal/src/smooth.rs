//! Exponential moving-average smoothing.

use cushion_types::SENSOR_COUNT;

/// Default smoothing factor.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Per-cell exponential moving-average filter.
///
/// Each call blends the input against the previous output:
/// `smoothed[i] = alpha * input[i] + (1 - alpha) * previous[i]`.
/// The first call after construction or [`reset`](Self::reset) passes the
/// input through unchanged and seeds the filter state.
///
/// # Example
///
/// ```
/// use cushion_signal::ExponentialSmoother;
///
/// let mut smoother = ExponentialSmoother::new(0.3);
/// let first = smoother.apply(&[1.0; 25]);
/// assert!(first.iter().all(|&v| (v - 1.0).abs() < 1e-12));
///
/// let second = smoother.apply(&[0.0; 25]);
/// assert!(second.iter().all(|&v| (v - 0.7).abs() < 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f64,
    state: Option<[f64; SENSOR_COUNT]>,
}

impl ExponentialSmoother {
    /// Creates a smoother with the given smoothing factor.
    ///
    /// `alpha` is clamped to `(0, 1]`; 1.0 disables smoothing entirely.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(1e-6, 1.0),
            state: None,
        }
    }

    /// Returns the smoothing factor.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns true if the filter holds state from a previous call.
    #[must_use]
    pub const fn is_primed(&self) -> bool {
        self.state.is_some()
    }

    /// Applies the filter to one grid, updating the internal state.
    pub fn apply(&mut self, input: &[f64; SENSOR_COUNT]) -> [f64; SENSOR_COUNT] {
        let smoothed = match self.state {
            Some(previous) => {
                let mut out = [0.0; SENSOR_COUNT];
                for ((cell, &value), &prior) in out.iter_mut().zip(input).zip(previous.iter()) {
                    *cell = self.alpha * value + (1.0 - self.alpha) * prior;
                }
                out
            }
            None => *input,
        };
        self.state = Some(smoothed);
        smoothed
    }

    /// Clears the filter state.
    ///
    /// The next [`apply`](Self::apply) call passes its input through.
    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for ExponentialSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
