//! Policy trait and implementations.

pub mod bounds;
pub mod config;
pub mod error;
pub mod logistic;
pub mod trait_;


pub use bounds::ParamBounds;
pub use config::LogisticPolicyConfig;
pub use error::PolicyError;
pub use logistic::LogisticPolicy;
pub use trait_::Policy;
