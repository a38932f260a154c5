use core::ops::ControlFlow;

use rand::SeedableRng;
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::history::{Observation, ObservationHistory};
use crate::kde::KernelDensityModel;
use crate::objective::Objective;
use crate::space::BoundedSpace;
use crate::tpe::acquisition::{AcquisitionSelector, Candidate};
use crate::tpe::builder::TpeOptimizerBuilder;
use crate::tpe::candidates;
use crate::tpe::config::OptimizerConfig;
use crate::types::Phase;

/// The outcome of a completed run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizerResult {
    /// The best observation over the whole run, bootstrap included.
    pub best: Observation,
    /// Every observation in evaluation order.
    pub history: ObservationHistory,
}

/// Tree-structured Parzen Estimator driving one optimization run.
///
/// A run starts with `bootstrap_count` uniform random evaluations, then
/// spends `modeled_iterations` evaluations on points proposed by the density
/// ratio between the good and bad parts of the history. Each modeled
/// iteration:
///
/// 1. Splits the history into good and bad observations using the configured
///    [`SplitStrategy`](crate::tpe::SplitStrategy), clamped into `[1, n - 1]`.
/// 2. Fits a Gaussian KDE over each subset with a shared per-axis bandwidth.
/// 3. Draws `acquisition_samples` candidates from the good model.
/// 4. Evaluates the candidate maximizing `l(x) / (g(x) + ε)`.
///
/// The random stream advances the same way whatever the budgets are, so a
/// longer run with the same seed replays a shorter one before extending it.
///
/// # Examples
///
/// ```
/// use quickopt::prelude::*;
///
/// let optimizer = TpeOptimizer::builder()
///     .bounds(vec![-3.0, -3.0], vec![3.0, 3.0])
///     .bootstrap_count(10)
///     .modeled_iterations(30)
///     .acquisition_samples(24)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let result = optimizer
///     .run(|x: &[f64]| Ok::<_, Error>(-(x[0] * x[0] + x[1] * x[1])))
///     .unwrap();
/// assert_eq!(result.history.len(), 40);
/// assert!(result.best.score() <= 0.0);
/// ```
#[derive(Debug)]
pub struct TpeOptimizer {
    config: OptimizerConfig,
    history: ObservationHistory,
    rng: StdRng,
    stopped: bool,
    poisoned: bool,
}

impl TpeOptimizer {
    /// Creates an optimizer over `space`.
    ///
    /// Warm-start observations from `config` are recorded immediately and
    /// count toward the bootstrap phase.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` does not validate against
    /// `space`.
    pub fn new(space: BoundedSpace, config: OptimizerConfig) -> Result<Self> {
        config.validate(&space)?;

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut history = ObservationHistory::new(space, config.direction);
        for (point, score) in &config.warm_start {
            history.append(Observation::new(point.clone(), *score))?;
        }

        trace_debug!(
            dims = history.space().dimension(),
            warm_start = history.len(),
            "optimizer created"
        );

        Ok(Self {
            config,
            history,
            rng,
            stopped: false,
            poisoned: false,
        })
    }

    /// Returns a builder for configuring an optimizer.
    #[must_use]
    pub fn builder() -> TpeOptimizerBuilder {
        TpeOptimizerBuilder::new()
    }

    /// The configuration this optimizer runs with.
    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Observations recorded so far.
    #[must_use]
    pub fn history(&self) -> &ObservationHistory {
        &self.history
    }

    /// The phase the next call to [`step`](Self::step) runs in.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let n = self.history.len();
        if self.stopped || self.poisoned || n >= self.config.total_evaluations() {
            Phase::Done
        } else if n < self.config.bootstrap_count {
            Phase::Bootstrap
        } else {
            Phase::Modeled
        }
    }

    /// Proposes one point, evaluates it and records the observation.
    ///
    /// Returns the phase after the step. Once the phase is
    /// [`Phase::Done`] this returns `Ok(Phase::Done)` without evaluating.
    ///
    /// # Errors
    ///
    /// Returns `Error::ObjectiveFailure` if the objective fails and
    /// `Error::InvalidObservation` if it returns a non-finite score. Either
    /// leaves the history unchanged and aborts the run: later calls return
    /// `Error::Aborted`.
    pub fn step<O: Objective>(&mut self, objective: &O) -> Result<Phase> {
        if self.poisoned {
            return Err(Error::Aborted);
        }

        let phase = self.phase();
        let point = match phase {
            Phase::Done => return Ok(Phase::Done),
            Phase::Bootstrap => self.history.space().sample_uniform(&mut self.rng),
            Phase::Modeled => self.propose()?,
        };

        let score = match objective.evaluate(&point) {
            Ok(score) => score,
            Err(e) => {
                self.poisoned = true;
                return Err(Error::ObjectiveFailure(e.to_string()));
            }
        };

        let observation = Observation::new(point, score);
        if let Err(e) = self.history.append(observation.clone()) {
            self.poisoned = true;
            return Err(e);
        }

        if self.config.verbosity >= 1 {
            trace_info!(
                evaluation = self.history.len(),
                phase = ?phase,
                score,
                best = self.history.best().map_or(score, Observation::score),
                "evaluation recorded"
            );
        }

        if let ControlFlow::Break(()) = objective.after_evaluation(&self.history, &observation) {
            trace_info!(evaluations = self.history.len(), "stopped by objective");
            self.stopped = true;
        }

        Ok(self.phase())
    }

    /// Runs the remaining budget and returns the best observation.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`step`](Self::step). Returns
    /// `Error::NoObservations` if the run ends with an empty history, which
    /// only happens when the objective stops before any evaluation completes.
    #[allow(clippy::needless_pass_by_value)]
    pub fn run<O: Objective>(mut self, objective: O) -> Result<OptimizerResult> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "optimize",
            bootstrap = self.config.bootstrap_count,
            modeled = self.config.modeled_iterations,
            dims = self.history.space().dimension()
        )
        .entered();

        while self.step(&objective)? != Phase::Done {}
        self.into_result()
    }

    /// Consumes the optimizer, returning the best observation and the history.
    ///
    /// # Errors
    ///
    /// Returns `Error::Aborted` if a step failed and `Error::NoObservations`
    /// if nothing has been evaluated.
    pub fn into_result(self) -> Result<OptimizerResult> {
        if self.poisoned {
            return Err(Error::Aborted);
        }
        let best = self.history.best()?.clone();
        Ok(OptimizerResult {
            best,
            history: self.history,
        })
    }

    /// Builds both density models from the current history and returns the
    /// best-scoring candidate drawn from the good one.
    fn propose(&mut self) -> Result<Vec<f64>> {
        let n = self.history.len();
        let k = self.config.split.n_good(n).clamp(1, n - 1);
        let (good, bad) = self.history.split(k)?;

        let good: Vec<Vec<f64>> = good.iter().map(|o| o.point().to_vec()).collect();
        let bad: Vec<Vec<f64>> = bad.iter().map(|o| o.point().to_vec()).collect();

        let space = self.history.space();
        let bandwidth = match &self.config.bandwidth {
            Some(bandwidth) => bandwidth.clone(),
            None => self.config.bandwidth_rule.bandwidth(&good, n, space),
        };

        if self.config.verbosity >= 2 {
            trace_debug!(
                n_good = good.len(),
                n_bad = bad.len(),
                bandwidth = ?bandwidth,
                "fitting density models"
            );
        }

        let good_model = KernelDensityModel::new(good, bandwidth.clone())?;
        let bad_model = KernelDensityModel::new(bad, bandwidth)?;

        let batch = candidates::generate(
            &good_model,
            space,
            self.config.acquisition_samples,
            &mut self.rng,
        );

        AcquisitionSelector::new(&good_model, &bad_model)
            .with_prior(self.config.prior_weight, space)
            .select(batch)
            .map(Candidate::into_point)
            .ok_or_else(|| Error::InvalidConfig("no acquisition candidates generated".into()))
    }
}
