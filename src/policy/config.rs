//! Configuration for constructing a [`LogisticPolicy`](super::LogisticPolicy).

use super::bounds::ParamBounds;
use super::error::PolicyError;

/// Construction parameters for a logistic policy.
///
/// Controls the observation dimensionality, the clamp interval applied to
/// parameters pushed by the optimizer, and the magnitude of the random
/// initial parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticPolicyConfig {
    /// Length of each observation vector.
    pub dim_observation: usize,
    /// Lower clamp bound for parameters.
    pub param_min: f64,
    /// Upper clamp bound for parameters.
    pub param_max: f64,
    /// Width of the uniform initialization range, centered on zero.
    ///
    /// Initial parameters are drawn from `[-init_scale / 2, init_scale / 2)`.
    /// The draw is not clamped into `[param_min, param_max]`.
    pub init_scale: f64,
}

impl LogisticPolicyConfig {
    /// Default width of the initialization range.
    pub const DEFAULT_INIT_SCALE: f64 = 0.001;

    /// Config for the given observation dimension and bounds, default init scale.
    pub fn new(dim_observation: usize, param_min: f64, param_max: f64) -> Self {
        Self {
            dim_observation,
            param_min,
            param_max,
            init_scale: Self::DEFAULT_INIT_SCALE,
        }
    }

    /// Number of parameters a policy built from this config holds (bias + weights).
    pub fn dim_parameters(&self) -> usize {
        self.dim_observation + 1
    }

    /// Checks the config and returns its validated bounds.
    pub fn validate(&self) -> Result<ParamBounds, PolicyError> {
        if !self.init_scale.is_finite() || self.init_scale < 0.0 {
            return Err(PolicyError::InvalidInitScale(self.init_scale));
        }
        ParamBounds::new(self.param_min, self.param_max)
    }
}

impl Default for LogisticPolicyConfig {
    fn default() -> Self {
        Self::new(1, -1.0, 1.0)
    }
}
