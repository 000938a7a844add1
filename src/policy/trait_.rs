//! Policy trait consumed by parameter-search optimizers.

use std::fmt;

use crate::Result;

/// A deterministic mapping from observations to actions, parameterized by a
/// fixed-length vector of tunable weights.
///
/// Optimizers are written once against this trait: they push candidate
/// vectors through [`Policy::set_parameters`], evaluate them with
/// [`Policy::action`], and call [`Policy::box_clone`] to hand independent
/// copies to parallel workers.
///
/// Mutating methods take `&mut self`, so a single instance can never be
/// updated and evaluated concurrently; clone it per worker instead.
pub trait Policy: fmt::Debug + Send + Sync {
    /// Length of the observation vectors accepted by [`Policy::action`].
    fn dim_observation(&self) -> usize;

    /// Length of the action vectors returned by [`Policy::action`].
    fn dim_action(&self) -> usize;

    /// Length of the parameter vector.
    fn dim_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Current parameter vector.
    fn parameters(&self) -> &[f64];

    /// Replaces the parameter vector.
    ///
    /// Implementations may transform the input (e.g. clamp it) before storing.
    /// Fails if `parameters.len() != self.dim_parameters()`.
    fn set_parameters(&mut self, parameters: &[f64]) -> Result<()>;

    /// Computes the action for one observation.
    ///
    /// Pure with respect to the current parameters. Fails if
    /// `observation.len() != self.dim_observation()`.
    fn action(&self, observation: &[f64]) -> Result<Vec<f64>>;

    /// Computes one action per observation, stopping at the first error.
    fn actions(&self, observations: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        observations.iter().map(|o| self.action(o)).collect()
    }

    /// Re-randomizes the parameters, discarding any externally set values.
    fn reset(&mut self);

    /// Returns an independent copy of the same concrete policy.
    fn box_clone(&self) -> Box<dyn Policy>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}

impl Clone for Box<dyn Policy> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
