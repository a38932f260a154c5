#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Black-box maximization over box-bounded real parameters with the
//! Tree-structured Parzen Estimator (TPE). No gradients, no surrogate
//! hyperparameter fitting: the optimizer splits its history into good and
//! bad observations, fits a Gaussian KDE to each, and evaluates the
//! candidate with the highest density ratio.
//!
//! # Getting Started
//!
//! ```
//! let best = quickopt::optimize(
//!     |x: &[f64]| Ok::<_, quickopt::Error>(-(x[0] - 1.0).powi(2) - (x[1] - 2.0).powi(2)),
//!     &[0.0, 0.0],
//!     &[5.0, 5.0],
//!     20,
//!     50,
//!     50,
//!     None,
//!     0,
//! )
//! .unwrap();
//! assert_eq!(best.len(), 2);
//! ```
//!
//! For seeding, minimization, warm starts or custom split strategies use the
//! builder:
//!
//! ```
//! use quickopt::prelude::*;
//!
//! let optimizer = TpeOptimizer::builder()
//!     .bounds(vec![-5.0], vec![5.0])
//!     .direction(Direction::Minimize)
//!     .bootstrap_count(10)
//!     .modeled_iterations(40)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = optimizer.run(|x: &[f64]| Ok::<_, Error>(x[0].abs())).unwrap();
//! println!("x = {:?}, f(x) = {:.4}", result.best.point(), result.best.score());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`BoundedSpace`] | Axis-aligned box the search runs in. |
//! | [`ObservationHistory`] | Append-only log of evaluated points with a ranked good/bad split. |
//! | [`KernelDensityModel`](kde::KernelDensityModel) | Diagonal Gaussian KDE fit to one subset of the history. |
//! | [`AcquisitionSelector`](tpe::AcquisitionSelector) | Scores candidates by `l(x) / (g(x) + ε)`. |
//! | [`TpeOptimizer`] | Bootstrap, then density-guided evaluations until the budget runs out. |
//! | [`Objective`] | The function being maximized; closures implement it directly. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured progress events via [`tracing`](https://docs.rs/tracing), gated by `verbosity` | on |
//! | `serde` | `Serialize`/`Deserialize` on the history and result types | off |
//! | `parallel` | Candidate scoring across threads via [`rayon`](https://docs.rs/rayon) | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
mod history;
pub mod kde;
pub mod objective;
mod optimize;
mod rng_util;
mod space;
pub mod tpe;
mod types;

pub use error::{Error, Result};
pub use history::{Observation, ObservationHistory};
pub use kde::BandwidthRule;
pub use objective::Objective;
pub use optimize::{IntoCount, optimize};
pub use space::BoundedSpace;
pub use tpe::{OptimizerConfig, OptimizerResult, TpeOptimizer, TpeOptimizerBuilder};
pub use types::{Direction, Phase};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use quickopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::history::{Observation, ObservationHistory};
    pub use crate::kde::BandwidthRule;
    pub use crate::objective::Objective;
    pub use crate::optimize::optimize;
    pub use crate::space::BoundedSpace;
    pub use crate::tpe::{
        FixedSplit, OptimizerConfig, OptimizerResult, SplitStrategy, SqrtSplit, ThresholdSplit,
        TpeOptimizer, TpeOptimizerBuilder,
    };
    pub use crate::types::{Direction, Phase};
}
