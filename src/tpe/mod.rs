//! Tree-structured Parzen Estimator.
//!
//! [`TpeOptimizer`] runs the optimization loop. The building blocks it uses
//! each iteration are public so they can be reused on their own:
//!
//! - [`SplitStrategy`] decides how many observations count as good.
//! - [`candidates::generate`] draws candidate points from the good model.
//! - [`AcquisitionSelector`] scores candidates by the good/bad density ratio.

pub mod acquisition;
mod builder;
pub mod candidates;
mod config;
mod optimizer;
mod split;

pub use acquisition::{ACQUISITION_EPSILON, AcquisitionSelector, Candidate};
pub use builder::TpeOptimizerBuilder;
pub use config::{MIN_BOOTSTRAP_COUNT, OptimizerConfig};
pub use optimizer::{OptimizerResult, TpeOptimizer};
pub use split::{FixedSplit, SplitStrategy, SqrtSplit, ThresholdSplit};
