//! Single-layer logistic policy: `tanh(bias + w · observation)`.

use rand::Rng;
use tracing::{debug, trace};

use super::bounds::ParamBounds;
use super::config::LogisticPolicyConfig;
use super::error::PolicyError;
use super::trait_::Policy;
use crate::Result;

/// Affine map over a bias-augmented feature vector, squashed through `tanh`.
///
/// Parameters are laid out as `[bias, w_1, ..., w_n]` for an observation of
/// length `n`. The single action component is
///
/// ```text
/// a = tanh(θ · [1, o_1, ..., o_n])
/// ```
///
/// so actions always lie in `[-1, 1]`.
///
/// Every vector accepted through [`Policy::set_parameters`] is clamped
/// elementwise into the configured [`ParamBounds`]. Random initialization
/// (at construction and on [`Policy::reset`]) draws small values around zero
/// and does not consult the bounds: with bounds such as `[10, 20]` the
/// initial parameters lie outside them until the first `set_parameters`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticPolicy {
    dim_observation: usize,
    parameters: Vec<f64>,
    bounds: ParamBounds,
    init_scale: f64,
}

impl LogisticPolicy {
    /// Number of action components produced by this policy.
    pub const DIM_ACTION: usize = 1;

    /// Creates a policy with randomly initialized parameters.
    ///
    /// # Arguments
    ///
    /// * `dim_observation` - Length of observation vectors
    /// * `param_min` - Lower clamp bound for parameters
    /// * `param_max` - Upper clamp bound for parameters
    ///
    /// # Errors
    ///
    /// [`PolicyError::InvalidBounds`] if `param_min > param_max` or either is NaN.
    pub fn new(dim_observation: usize, param_min: f64, param_max: f64) -> Result<Self> {
        Self::from_config(&LogisticPolicyConfig::new(
            dim_observation,
            param_min,
            param_max,
        ))
    }

    /// Creates a policy from a config, initializing with the thread-local RNG.
    pub fn from_config(config: &LogisticPolicyConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Creates a policy from a config, drawing initial parameters from `rng`.
    ///
    /// Use a seeded RNG (e.g. `StdRng::seed_from_u64`) for reproducible
    /// initialization.
    pub fn with_rng<R: Rng + ?Sized>(config: &LogisticPolicyConfig, rng: &mut R) -> Result<Self> {
        let bounds = config.validate()?;
        let mut policy = Self {
            dim_observation: config.dim_observation,
            parameters: vec![0.0; config.dim_parameters()],
            bounds,
            init_scale: config.init_scale,
        };
        policy.initialize_parameters(rng);
        debug!(
            dim_observation = policy.dim_observation,
            bounds = %policy.bounds,
            init_scale = policy.init_scale,
            "created logistic policy"
        );
        Ok(policy)
    }

    /// Re-randomizes the parameters using `rng`.
    ///
    /// Same as [`Policy::reset`] but reproducible with a seeded RNG.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.initialize_parameters(rng);
        debug!(dim_parameters = self.parameters.len(), "reset logistic policy");
    }

    /// Clamp interval applied by [`Policy::set_parameters`].
    pub fn bounds(&self) -> ParamBounds {
        self.bounds
    }

    /// Width of the zero-centered initialization range.
    pub fn init_scale(&self) -> f64 {
        self.init_scale
    }

    /// Bias term (first parameter).
    pub fn bias(&self) -> f64 {
        self.parameters[0]
    }

    /// Per-observation-component weights (all parameters after the bias).
    pub fn weights(&self) -> &[f64] {
        &self.parameters[1..]
    }

    /// Bias-augmented feature vector `[1.0, o_1, ..., o_n]`.
    ///
    /// Rejects observations containing NaN or infinite components.
    pub fn features(&self, observation: &[f64]) -> Result<Vec<f64>> {
        PolicyError::ensure_len("observation", self.dim_observation, observation.len())?;
        if let Some(index) = observation.iter().position(|o| !o.is_finite()) {
            return Err(PolicyError::NonFiniteObservation { index });
        }
        let mut features = Vec::with_capacity(self.parameters.len());
        features.push(1.0);
        features.extend_from_slice(observation);
        Ok(features)
    }

    /// Pre-`tanh` activation `θ · features(observation)`.
    ///
    /// Fails with [`PolicyError::UndefinedActivation`] when overflowing terms
    /// of opposite sign (or an infinite parameter times zero) make the sum NaN.
    /// A merely infinite activation is returned and saturates in `tanh`.
    pub fn activation(&self, observation: &[f64]) -> Result<f64> {
        let features = self.features(observation)?;
        let activation = dot(&self.parameters, &features);
        if activation.is_nan() {
            return Err(PolicyError::UndefinedActivation);
        }
        Ok(activation)
    }

    /// Fills the parameters with `(U[0, 1) - 0.5) * init_scale`.
    fn initialize_parameters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let scale = self.init_scale;
        for p in &mut self.parameters {
            *p = (rng.gen::<f64>() - 0.5) * scale;
        }
    }
}

impl Policy for LogisticPolicy {
    fn dim_observation(&self) -> usize {
        self.dim_observation
    }

    fn dim_action(&self) -> usize {
        Self::DIM_ACTION
    }

    fn dim_parameters(&self) -> usize {
        self.parameters.len()
    }

    fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    fn set_parameters(&mut self, parameters: &[f64]) -> Result<()> {
        PolicyError::ensure_len("parameters", self.parameters.len(), parameters.len())?;
        if let Some(index) = parameters.iter().position(|p| p.is_nan()) {
            return Err(PolicyError::NanParameter { index });
        }

        let mut clamped = 0usize;
        for (dst, &src) in self.parameters.iter_mut().zip(parameters) {
            *dst = self.bounds.clamp(src);
            if *dst != src {
                clamped += 1;
            }
        }
        if clamped > 0 {
            trace!(clamped, bounds = %self.bounds, "clamped parameters into bounds");
        }
        Ok(())
    }

    fn action(&self, observation: &[f64]) -> Result<Vec<f64>> {
        let activation = self.activation(observation)?;
        Ok(vec![activation.tanh()])
    }

    fn reset(&mut self) {
        self.reset_with(&mut rand::thread_rng());
    }

    fn box_clone(&self) -> Box<dyn Policy> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "logistic"
    }
}

/// Inner product, summed left to right.
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn unit_policy(dim: usize) -> LogisticPolicy {
        LogisticPolicy::new(dim, -1.0, 1.0).unwrap()
    }

    #[test]
    fn construction_sets_dimensions() {
        let policy = unit_policy(4);
        assert_eq!(policy.dim_observation(), 4);
        assert_eq!(policy.dim_action(), 1);
        assert_eq!(policy.dim_parameters(), 5);
        assert_eq!(policy.parameters().len(), 5);
        assert_eq!(policy.name(), "logistic");
    }

    #[test]
    fn construction_rejects_inverted_bounds() {
        let err = LogisticPolicy::new(2, 1.0, -1.0).unwrap_err();
        assert_eq!(err, PolicyError::InvalidBounds { min: 1.0, max: -1.0 });
    }

    #[test]
    fn initial_parameters_are_near_zero() {
        let policy = unit_policy(50);
        for &p in policy.parameters() {
            assert!((-0.0005..0.0005).contains(&p), "parameter {} out of range", p);
        }
    }

    #[test]
    fn zero_dim_observation_is_bias_only() {
        let mut policy = unit_policy(0);
        assert_eq!(policy.dim_parameters(), 1);
        policy.set_parameters(&[0.5]).unwrap();
        let action = policy.action(&[]).unwrap();
        assert!((action[0] - 0.5f64.tanh()).abs() < 1e-15);
    }

    #[test]
    fn bias_and_weights_split() {
        let mut policy = unit_policy(2);
        policy.set_parameters(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(policy.bias(), 0.1);
        assert_eq!(policy.weights(), &[0.2, 0.3]);
    }

    #[test]
    fn features_prepend_bias() {
        let policy = unit_policy(3);
        assert_eq!(
            policy.features(&[2.0, -1.0, 0.5]).unwrap(),
            vec![1.0, 2.0, -1.0, 0.5]
        );
    }

    #[test]
    fn activation_is_dot_product() {
        let mut policy = unit_policy(2);
        policy.set_parameters(&[0.5, -0.25, 1.0]).unwrap();
        let a = policy.activation(&[2.0, 3.0]).unwrap();
        assert!((a - (0.5 - 0.5 + 3.0)).abs() < 1e-12);
    }

    #[test]
    fn set_parameters_rejects_wrong_length() {
        let mut policy = unit_policy(2);
        let before = policy.parameters().to_vec();
        let err = policy.set_parameters(&[0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            PolicyError::DimensionMismatch {
                what: "parameters",
                expected: 3,
                actual: 2,
            }
        );
        assert_eq!(policy.parameters(), before.as_slice());
    }

    #[test]
    fn set_parameters_rejects_nan() {
        let mut policy = unit_policy(2);
        let before = policy.parameters().to_vec();
        let err = policy.set_parameters(&[0.0, f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err, PolicyError::NanParameter { index: 1 });
        assert_eq!(policy.parameters(), before.as_slice());
    }

    #[test]
    fn set_parameters_clamps_infinities() {
        let mut policy = unit_policy(1);
        policy
            .set_parameters(&[f64::INFINITY, f64::NEG_INFINITY])
            .unwrap();
        assert_eq!(policy.parameters(), &[1.0, -1.0]);
    }

    #[test]
    fn activation_rejects_nan_sum() {
        let mut policy = LogisticPolicy::new(1, f64::NEG_INFINITY, f64::INFINITY).unwrap();
        policy.set_parameters(&[f64::INFINITY, 1.0]).unwrap();
        assert!((policy.activation(&[1.0]).unwrap()).is_infinite());
        policy.set_parameters(&[0.0, f64::INFINITY]).unwrap();
        assert_eq!(
            policy.activation(&[0.0]),
            Err(PolicyError::UndefinedActivation)
        );
    }

    #[test]
    fn action_rejects_wrong_length() {
        let policy = unit_policy(2);
        let err = policy.action(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            PolicyError::DimensionMismatch {
                what: "observation",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn large_activation_saturates() {
        let mut policy = LogisticPolicy::new(1, -100.0, 100.0).unwrap();
        policy.set_parameters(&[100.0, 100.0]).unwrap();
        let action = policy.action(&[100.0]).unwrap();
        assert_eq!(action, vec![1.0]);
        let action = policy.action(&[-100.0]).unwrap();
        assert_eq!(action, vec![-1.0]);
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let cfg = LogisticPolicyConfig::new(6, -1.0, 1.0);
        let a = LogisticPolicy::with_rng(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = LogisticPolicy::with_rng(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();
        let c = LogisticPolicy::with_rng(&cfg, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.parameters(), b.parameters());
        assert_ne!(a.parameters(), c.parameters());
    }

    #[test]
    fn custom_init_scale_widens_range() {
        let cfg = LogisticPolicyConfig {
            init_scale: 2.0,
            ..LogisticPolicyConfig::new(200, -5.0, 5.0)
        };
        let policy = LogisticPolicy::with_rng(&cfg, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(policy.init_scale(), 2.0);
        assert!(policy.parameters().iter().all(|p| (-1.0..1.0).contains(p)));
        assert!(policy.parameters().iter().any(|p| p.abs() > 0.0005));
    }

    #[test]
    fn zero_init_scale_gives_zero_parameters() {
        let cfg = LogisticPolicyConfig {
            init_scale: 0.0,
            ..LogisticPolicyConfig::new(3, -1.0, 1.0)
        };
        let policy = LogisticPolicy::from_config(&cfg).unwrap();
        assert!(policy.parameters().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn reset_with_seed_is_reproducible() {
        let mut a = unit_policy(4);
        let mut b = unit_policy(4);
        a.reset_with(&mut StdRng::seed_from_u64(99));
        b.reset_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a.parameters(), b.parameters());
    }

    #[test]
    fn reset_keeps_bounds_and_dimensions() {
        let mut policy = LogisticPolicy::new(3, -2.0, 3.0).unwrap();
        policy.reset();
        assert_eq!(policy.dim_observation(), 3);
        assert_eq!(policy.dim_parameters(), 4);
        assert_eq!(policy.bounds(), ParamBounds::new(-2.0, 3.0).unwrap());
    }
}
