use core::fmt::Debug;

use crate::error::{Error, Result};

/// A strategy for choosing how many observations count as "good".
///
/// The optimizer asks for `n_good(n)` each modeled iteration and clamps the
/// answer into `[1, n - 1]` before splitting the history, so implementations
/// do not need to guard the edges themselves.
///
/// # Examples
///
/// ```
/// use quickopt::tpe::SplitStrategy;
///
/// #[derive(Debug, Clone)]
/// struct TopThree;
///
/// impl SplitStrategy for TopThree {
///     fn n_good(&self, _n_observations: usize) -> usize {
///         3
///     }
///
///     fn clone_box(&self) -> Box<dyn SplitStrategy> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait SplitStrategy: Send + Sync + Debug {
    /// Number of good observations for a history of `n_observations`.
    fn n_good(&self, n_observations: usize) -> usize;

    /// Creates a boxed clone of this strategy.
    fn clone_box(&self) -> Box<dyn SplitStrategy>;
}

impl Clone for Box<dyn SplitStrategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The classic TPE quantile: `round(factor * sqrt(n))`.
///
/// The good set grows sublinearly with the history, so the search leans
/// toward exploitation as evidence accumulates. This is the default with
/// `factor = 1.0`.
///
/// # Examples
///
/// ```
/// use quickopt::tpe::{SplitStrategy, SqrtSplit};
///
/// let split = SqrtSplit::default();
/// assert_eq!(split.n_good(25), 5);
/// assert_eq!(split.n_good(30), 5);
/// assert_eq!(split.n_good(31), 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SqrtSplit {
    factor: f64,
}

impl SqrtSplit {
    /// Creates a square-root split scaled by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `factor` is not finite and positive.
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sqrt split factor must be positive, got {factor}"
            )));
        }
        Ok(Self { factor })
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for SqrtSplit {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl SplitStrategy for SqrtSplit {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_good(&self, n_observations: usize) -> usize {
        (self.factor * (n_observations as f64).sqrt()).round() as usize
    }

    fn clone_box(&self) -> Box<dyn SplitStrategy> {
        Box::new(*self)
    }
}

/// Threshold split: `max(2, floor(n * threshold / sqrt(n)))`.
///
/// Equivalent to `floor(threshold * sqrt(n))` with a floor of two good
/// observations, so the good model always has enough points to sample from.
///
/// # Examples
///
/// ```
/// use quickopt::tpe::{SplitStrategy, ThresholdSplit};
///
/// let split = ThresholdSplit::new(0.5).unwrap();
/// assert_eq!(split.n_good(100), 5);
/// assert_eq!(split.n_good(4), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThresholdSplit {
    threshold: f64,
}

impl ThresholdSplit {
    /// Creates a threshold split.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `threshold` is not finite and positive.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "split threshold must be positive, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// Returns the threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SplitStrategy for ThresholdSplit {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_good(&self, n_observations: usize) -> usize {
        if n_observations == 0 {
            return 0;
        }
        let n = n_observations as f64;
        ((n * (self.threshold / n.sqrt())).floor() as usize).max(2)
    }

    fn clone_box(&self) -> Box<dyn SplitStrategy> {
        Box::new(*self)
    }
}

/// Fixed-fraction split: `max(2, floor(n * fraction))`.
///
/// # Examples
///
/// ```
/// use quickopt::tpe::{FixedSplit, SplitStrategy};
///
/// let split = FixedSplit::new(0.25).unwrap();
/// assert_eq!(split.n_good(40), 10);
/// assert_eq!(split.n_good(5), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedSplit {
    fraction: f64,
}

impl FixedSplit {
    /// Creates a fixed-fraction split.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `fraction` is not in (0.0, 1.0).
    pub fn new(fraction: f64) -> Result<Self> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "split fraction must be in (0, 1), got {fraction}"
            )));
        }
        Ok(Self { fraction })
    }

    /// Returns the fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl SplitStrategy for FixedSplit {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn n_good(&self, n_observations: usize) -> usize {
        if n_observations == 0 {
            return 0;
        }
        ((n_observations as f64 * self.fraction).floor() as usize).max(2)
    }

    fn clone_box(&self) -> Box<dyn SplitStrategy> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_split_default() {
        let split = SqrtSplit::default();
        assert_eq!(split.n_good(1), 1);
        assert_eq!(split.n_good(2), 1);
        assert_eq!(split.n_good(3), 2);
        assert_eq!(split.n_good(20), 4);
        assert_eq!(split.n_good(100), 10);
    }

    #[test]
    fn test_sqrt_split_factor() {
        let split = SqrtSplit::new(2.0).unwrap();
        assert_eq!(split.n_good(100), 20);
        assert!((split.factor() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sqrt_split_invalid_factor() {
        assert!(matches!(SqrtSplit::new(0.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(SqrtSplit::new(-1.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(SqrtSplit::new(f64::NAN), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_threshold_split() {
        let split = ThresholdSplit::new(1.0).unwrap();
        assert_eq!(split.n_good(0), 0);
        assert_eq!(split.n_good(3), 2);
        assert_eq!(split.n_good(100), 10);
        assert!(matches!(ThresholdSplit::new(0.0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_fixed_split() {
        let split = FixedSplit::new(0.1).unwrap();
        assert_eq!(split.n_good(100), 10);
        assert_eq!(split.n_good(10), 2);
        assert!(matches!(FixedSplit::new(1.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(FixedSplit::new(0.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(FixedSplit::new(f64::NAN), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_boxed_strategy_clone() {
        let boxed: Box<dyn SplitStrategy> = Box::new(FixedSplit::new(0.5).unwrap());
        let cloned = boxed.clone();
        assert_eq!(cloned.n_good(10), 5);
    }
}
