//! policykit - parametric control policies for policy-search optimizers.
//!
//! A policy maps an observation vector to an action vector under a fixed
//! number of tunable parameters. External optimizers (genetic search,
//! policy-gradient estimators, random search) push candidate parameter
//! vectors into a policy, evaluate it on sampled observations, and clone
//! it to evaluate candidates in parallel.
//!
//! The crate provides the [`Policy`] trait and the [`LogisticPolicy`]
//! variant, a single-layer affine map squashed through `tanh`.
//!
//! ```
//! use policykit::{LogisticPolicy, Policy};
//!
//! let mut policy = LogisticPolicy::new(2, -1.0, 1.0).unwrap();
//! policy.set_parameters(&[0.0, 1.0, 1.0]).unwrap();
//! let action = policy.action(&[0.0, 0.0]).unwrap();
//! assert_eq!(action, vec![0.0]);
//! ```

pub mod policy;

pub use policy::{LogisticPolicy, LogisticPolicyConfig, ParamBounds, Policy, PolicyError};

/// Result type used across policy operations.
pub type Result<T> = std::result::Result<T, PolicyError>;
