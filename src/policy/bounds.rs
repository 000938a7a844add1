//! Closed interval that every stored policy parameter must lie in.

use std::fmt;

use super::error::PolicyError;

/// Closed interval `[min, max]` for policy parameters.
///
/// Constructed only through [`ParamBounds::new`], which guarantees
/// `min <= max` and that neither bound is NaN. Infinite bounds are allowed,
/// so `ParamBounds::new(f64::NEG_INFINITY, f64::INFINITY)` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamBounds {
    min: f64,
    max: f64,
}

impl ParamBounds {
    /// Creates bounds, rejecting `min > max` and NaN endpoints.
    pub fn new(min: f64, max: f64) -> Result<Self, PolicyError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(PolicyError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clips `value` into `[min, max]`.
    ///
    /// NaN is passed through unchanged; callers reject it beforehand.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl fmt::Display for ParamBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
