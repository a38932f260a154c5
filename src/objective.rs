//! The [`Objective`] trait defines what gets optimized.
//!
//! Plain closures work out of the box:
//!
//! ```
//! use quickopt::prelude::*;
//!
//! let best = quickopt::optimize(
//!     |x: &[f64]| Ok::<_, Error>(-(x[0] - 1.0).powi(2)),
//!     &[-5.0],
//!     &[5.0],
//!     10,
//!     20,
//!     32,
//!     None,
//!     0,
//! )
//! .unwrap();
//! assert!((-5.0..=5.0).contains(&best[0]));
//! ```
//!
//! For early stopping, implement [`Objective`] on a struct and override
//! [`after_evaluation`](Objective::after_evaluation):
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use quickopt::prelude::*;
//!
//! struct StopWhenClose;
//!
//! impl Objective for StopWhenClose {
//!     type Error = Error;
//!
//!     fn evaluate(&self, point: &[f64]) -> Result<f64> {
//!         Ok(-(point[0] - 2.0).powi(2))
//!     }
//!
//!     fn after_evaluation(
//!         &self,
//!         _history: &ObservationHistory,
//!         latest: &Observation,
//!     ) -> ControlFlow<()> {
//!         if latest.score() > -0.01 {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let optimizer = TpeOptimizer::builder()
//!     .bounds(vec![0.0], vec![4.0])
//!     .bootstrap_count(10)
//!     .modeled_iterations(500)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let result = optimizer.run(StopWhenClose).unwrap();
//! assert!(result.history.len() <= 510);
//! ```

use core::ops::ControlFlow;

use crate::history::{Observation, ObservationHistory};

/// A single-point-to-score mapping the optimizer drives.
///
/// The only required method is [`evaluate`](Objective::evaluate). Evaluations
/// are strictly sequential, so implementations may hold non-reentrant state
/// behind interior mutability.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString;

    /// Evaluate the objective at `point`.
    ///
    /// `point` has one coordinate per axis and lies inside the bounds.
    ///
    /// # Errors
    ///
    /// Any error aborts the run; the optimizer reports it as
    /// `Error::ObjectiveFailure` carrying `to_string()` of this error.
    fn evaluate(&self, point: &[f64]) -> Result<f64, Self::Error>;

    /// Called after each observation is appended to the history.
    ///
    /// Return `ControlFlow::Break(())` to end the run before the next
    /// evaluation starts.
    ///
    /// Default: always continues.
    fn after_evaluation(
        &self,
        _history: &ObservationHistory,
        _latest: &Observation,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: ToString,
{
    type Error = E;

    fn evaluate(&self, point: &[f64]) -> Result<f64, E> {
        self(point)
    }
}
