use crate::error::{Error, Result};
use crate::kde::BandwidthRule;
use crate::space::BoundedSpace;
use crate::tpe::config::OptimizerConfig;
use crate::tpe::optimizer::TpeOptimizer;
use crate::tpe::split::SplitStrategy;
use crate::types::Direction;

/// Builder for configuring a [`TpeOptimizer`].
///
/// Every setter is infallible; the bounds and the resulting
/// [`OptimizerConfig`] are validated together in [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use quickopt::tpe::{ThresholdSplit, TpeOptimizerBuilder};
/// use quickopt::{BandwidthRule, Direction};
///
/// let optimizer = TpeOptimizerBuilder::new()
///     .bounds(vec![0.0, -1.0], vec![1.0, 1.0])
///     .bootstrap_count(12)
///     .modeled_iterations(40)
///     .acquisition_samples(64)
///     .split_strategy(ThresholdSplit::new(0.5).unwrap())
///     .bandwidth_rule(BandwidthRule::RangeScaled)
///     .direction(Direction::Minimize)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(optimizer.config().total_evaluations(), 52);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TpeOptimizerBuilder {
    bounds: Option<(Vec<f64>, Vec<f64>)>,
    config: OptimizerConfig,
}

impl TpeOptimizerBuilder {
    /// Creates a builder holding [`OptimizerConfig::default`] and no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the box bounds. Required.
    #[must_use]
    pub fn bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    /// Sets the number of uniform random evaluations before modeling.
    #[must_use]
    pub fn bootstrap_count(mut self, n: usize) -> Self {
        self.config.bootstrap_count = n;
        self
    }

    /// Sets the number of density-guided evaluations.
    #[must_use]
    pub fn modeled_iterations(mut self, n: usize) -> Self {
        self.config.modeled_iterations = n;
        self
    }

    /// Sets how many candidates are scored per modeled iteration.
    #[must_use]
    pub fn acquisition_samples(mut self, n: usize) -> Self {
        self.config.acquisition_samples = n;
        self
    }

    /// Fixes the per-axis bandwidth instead of recomputing it every iteration.
    #[must_use]
    pub fn bandwidth(mut self, bandwidth: Vec<f64>) -> Self {
        self.config.bandwidth = Some(bandwidth);
        self
    }

    /// Sets the rule used when no fixed bandwidth is given.
    #[must_use]
    pub fn bandwidth_rule(mut self, rule: BandwidthRule) -> Self {
        self.config.bandwidth_rule = rule;
        self
    }

    /// Sets the good/bad split strategy.
    #[must_use]
    pub fn split_strategy<S: SplitStrategy + 'static>(mut self, strategy: S) -> Self {
        self.config.split = Box::new(strategy);
        self
    }

    /// Mixes a non-informative Gaussian prior into both densities with `weight`.
    #[must_use]
    pub fn prior_weight(mut self, weight: f64) -> Self {
        self.config.prior_weight = weight;
        self
    }

    /// Sets whether higher or lower scores are better.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Seeds the random stream for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Records already-evaluated `(point, score)` pairs before the run starts.
    /// They fill the first bootstrap slots.
    #[must_use]
    pub fn warm_start(mut self, observations: Vec<(Vec<f64>, f64)>) -> Self {
        self.config.warm_start = observations;
        self
    }

    /// Sets the progress reporting level.
    #[must_use]
    pub fn verbosity(mut self, level: u32) -> Self {
        self.config.verbosity = level;
        self
    }

    /// Validates the bounds and settings and creates the optimizer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDomain` if the bounds are missing or invalid,
    /// and `Error::InvalidConfig` if a setting is out of range.
    pub fn build(self) -> Result<TpeOptimizer> {
        let (lower, upper) = self
            .bounds
            .ok_or_else(|| Error::InvalidDomain("bounds were not set".into()))?;
        let space = BoundedSpace::new(lower, upper)?;
        TpeOptimizer::new(space, self.config)
    }
}
