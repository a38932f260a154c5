use crate::error::{Error, Result};
use crate::kde::BandwidthRule;
use crate::space::BoundedSpace;
use crate::tpe::split::{SplitStrategy, SqrtSplit};
use crate::types::Direction;

/// Fewest bootstrap evaluations that leave the density models something to fit.
pub const MIN_BOOTSTRAP_COUNT: usize = 2;

/// Settings for one [`TpeOptimizer`](crate::tpe::TpeOptimizer) run.
///
/// Plain data with public fields; [`TpeOptimizerBuilder`](crate::tpe::TpeOptimizerBuilder)
/// is the fluent way to fill it in. Validation happens when the optimizer is
/// constructed.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Uniform random evaluations before modeling begins. Must be at least 2.
    pub bootstrap_count: usize,
    /// Density-guided evaluations after the bootstrap phase.
    pub modeled_iterations: usize,
    /// Candidates generated and scored per modeled iteration. Must be positive.
    pub acquisition_samples: usize,
    /// Per-axis bandwidth override. When `None`, [`bandwidth_rule`](Self::bandwidth_rule)
    /// computes one every modeled iteration.
    pub bandwidth: Option<Vec<f64>>,
    /// Rule for the default bandwidth.
    pub bandwidth_rule: BandwidthRule,
    /// How many observations count as good.
    pub split: Box<dyn SplitStrategy>,
    /// Weight of the non-informative prior mixed into both densities. Zero disables it.
    pub prior_weight: f64,
    /// Whether higher or lower scores are better.
    pub direction: Direction,
    /// Seed for the random stream. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Already-evaluated `(point, score)` pairs that fill the first bootstrap slots.
    pub warm_start: Vec<(Vec<f64>, f64)>,
    /// Progress reporting level: 0 silent, 1 per evaluation, 2 adds model details.
    pub verbosity: u32,
}

impl Default for OptimizerConfig {
    /// Default settings:
    /// - `bootstrap_count`: 10
    /// - `modeled_iterations`: 100
    /// - `acquisition_samples`: 100
    /// - bandwidth: computed with [`BandwidthRule::Robust`]
    /// - split: [`SqrtSplit`] with factor 1.0
    /// - `prior_weight`: 0.0
    /// - direction: maximize
    fn default() -> Self {
        Self {
            bootstrap_count: 10,
            modeled_iterations: 100,
            acquisition_samples: 100,
            bandwidth: None,
            bandwidth_rule: BandwidthRule::default(),
            split: Box::new(SqrtSplit::default()),
            prior_weight: 0.0,
            direction: Direction::default(),
            seed: None,
            warm_start: Vec::new(),
            verbosity: 0,
        }
    }
}

impl OptimizerConfig {
    /// Total number of evaluations a full run records.
    #[must_use]
    pub fn total_evaluations(&self) -> usize {
        self.bootstrap_count + self.modeled_iterations
    }

    /// Checks the configuration against `space`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the bootstrap count is below
    /// [`MIN_BOOTSTRAP_COUNT`], `acquisition_samples` is zero, the bandwidth
    /// override has the wrong length or a non-positive entry, the prior
    /// weight is negative or not finite, or a warm-start entry does not fit.
    pub fn validate(&self, space: &BoundedSpace) -> Result<()> {
        if self.bootstrap_count < MIN_BOOTSTRAP_COUNT {
            return Err(Error::InvalidConfig(format!(
                "bootstrap_count must be at least {MIN_BOOTSTRAP_COUNT} to fit a density model, got {}",
                self.bootstrap_count
            )));
        }
        if self.acquisition_samples == 0 {
            return Err(Error::InvalidConfig(
                "acquisition_samples must be positive".into(),
            ));
        }

        if let Some(bandwidth) = &self.bandwidth {
            if bandwidth.len() != space.dimension() {
                return Err(Error::InvalidConfig(format!(
                    "bandwidth has {} entries but the domain has {} dimensions",
                    bandwidth.len(),
                    space.dimension()
                )));
            }
            if let Some(bw) = bandwidth.iter().find(|bw| !bw.is_finite() || **bw <= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "bandwidth entries must be positive, got {bw}"
                )));
            }
        }

        if !self.prior_weight.is_finite() || self.prior_weight < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "prior_weight must be non-negative, got {}",
                self.prior_weight
            )));
        }

        if self.warm_start.len() > self.bootstrap_count {
            return Err(Error::InvalidConfig(format!(
                "{} warm-start observations exceed bootstrap_count ({})",
                self.warm_start.len(),
                self.bootstrap_count
            )));
        }
        for (i, (point, score)) in self.warm_start.iter().enumerate() {
            if !space.contains(point) {
                return Err(Error::InvalidConfig(format!(
                    "warm-start point {i} lies outside the bounds"
                )));
            }
            if !score.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "warm-start score {i} is not finite"
                )));
            }
        }

        Ok(())
    }
}
