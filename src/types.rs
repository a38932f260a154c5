//! Core types for the optimizer library.

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
///
/// The default is [`Maximize`](Direction::Maximize): higher scores are better.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Maximize the objective value.
    #[default]
    Maximize,
    /// Minimize the objective value.
    Minimize,
}

impl Direction {
    /// Orders two finite scores so that the better one compares as `Greater`.
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ord = a.total_cmp(&b);
        match self {
            Direction::Maximize => ord,
            Direction::Minimize => ord.reverse(),
        }
    }

    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    #[must_use]
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        self.compare(candidate, incumbent) == Ordering::Greater
    }
}

/// The phase an optimization run is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Uniform random sampling to seed the density models.
    Bootstrap,
    /// Density-ratio guided sampling.
    Modeled,
    /// Budgets exhausted or the objective asked to stop.
    Done,
}
