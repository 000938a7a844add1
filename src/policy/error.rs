use thiserror::Error;

/// Errors raised by policy construction and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter bounds: min {min} is not <= max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Parameter at index {index} is NaN")]
    NanParameter { index: usize },

    #[error("Observation component at index {index} is not finite")]
    NonFiniteObservation { index: usize },

    #[error("Activation is undefined (NaN) for the current parameters and observation")]
    UndefinedActivation,

    #[error("Invalid initialization scale: {0} (must be finite and >= 0)")]
    InvalidInitScale(f64),
}

impl PolicyError {
    /// Fails with [`PolicyError::DimensionMismatch`] unless `actual == expected`.
    pub(crate) fn ensure_len(what: &'static str, expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::DimensionMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}
