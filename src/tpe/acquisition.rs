//! Density-ratio scoring of candidate points.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::kde::KernelDensityModel;
use crate::space::BoundedSpace;

/// Floor added to the bad-model density so the ratio never divides by zero.
pub const ACQUISITION_EPSILON: f64 = 1e-12;

/// A generated point together with its acquisition score.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    point: Vec<f64>,
    log_score: f64,
}

impl Candidate {
    /// The candidate point.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Natural log of the acquisition score. Ordering by this is the same as
    /// ordering by [`score`](Self::score), without the risk of overflow.
    #[must_use]
    pub fn log_score(&self) -> f64 {
        self.log_score
    }

    /// The acquisition score `l(x) / (g(x) + ε)`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.log_score.exp()
    }

    /// Consumes the candidate, returning its point.
    #[must_use]
    pub fn into_point(self) -> Vec<f64> {
        self.point
    }
}

/// Gaussian prior centred on the box midpoint with per-axis standard
/// deviation `(upper - lower) / 6`, mixed into both densities with `weight`.
#[derive(Clone, Debug)]
struct Prior<'a> {
    ln_weight: f64,
    space: &'a BoundedSpace,
}

impl Prior<'_> {
    fn log_density(&self, x: &[f64]) -> f64 {
        let half_log_2pi = 0.5 * (2.0 * core::f64::consts::PI).ln();
        x.iter()
            .enumerate()
            .map(|(i, &xi)| {
                let sigma = self.space.range(i) / 6.0;
                let z = (xi - self.space.midpoint(i)) / sigma;
                -sigma.ln() - half_log_2pi - 0.5 * z * z
            })
            .sum()
    }
}

/// Scores candidates by how much more likely they are under the good model
/// than under the bad model and picks the best.
///
/// `score(x) = l(x) / (g(x) + ε)` where `l` is the good density, `g` the bad
/// density, and `ε` is [`ACQUISITION_EPSILON`]. With a prior attached, both
/// densities become `l + w p0` and `g + w p0`. Everything is computed in the
/// log domain.
///
/// # Examples
///
/// ```
/// use quickopt::kde::KernelDensityModel;
/// use quickopt::tpe::AcquisitionSelector;
///
/// let good = KernelDensityModel::new(vec![vec![1.0], vec![1.2]], vec![0.3]).unwrap();
/// let bad = KernelDensityModel::new(vec![vec![4.0], vec![5.0]], vec![0.3]).unwrap();
///
/// let best = AcquisitionSelector::new(&good, &bad)
///     .select(vec![vec![4.5], vec![1.1], vec![3.0]])
///     .unwrap();
/// assert_eq!(best.point(), &[1.1]);
/// ```
#[derive(Clone, Debug)]
pub struct AcquisitionSelector<'a> {
    good: &'a KernelDensityModel,
    bad: &'a KernelDensityModel,
    prior: Option<Prior<'a>>,
}

impl<'a> AcquisitionSelector<'a> {
    /// Creates a selector over a good and a bad model fit in the same iteration.
    #[must_use]
    pub fn new(good: &'a KernelDensityModel, bad: &'a KernelDensityModel) -> Self {
        Self {
            good,
            bad,
            prior: None,
        }
    }

    /// Mixes a non-informative Gaussian prior over `space` into both
    /// densities with `weight`. A non-positive weight leaves the selector
    /// unchanged.
    #[must_use]
    pub fn with_prior(mut self, weight: f64, space: &'a BoundedSpace) -> Self {
        self.prior = (weight > 0.0).then(|| Prior {
            ln_weight: weight.ln(),
            space,
        });
        self
    }

    /// Log acquisition score at `x`.
    #[must_use]
    pub fn log_score(&self, x: &[f64]) -> f64 {
        let mut log_l = self.good.log_density(x);
        let mut log_g = self.bad.log_density(x);

        if let Some(prior) = &self.prior {
            let log_p = prior.ln_weight + prior.log_density(x);
            log_l = log_add_exp(log_l, log_p);
            log_g = log_add_exp(log_g, log_p);
        }

        log_l - log_add_exp(log_g, ACQUISITION_EPSILON.ln())
    }

    /// Scores every candidate and returns the maximizer, or `None` if
    /// `candidates` is empty. Ties go to the earliest candidate.
    #[must_use]
    pub fn select(&self, candidates: Vec<Vec<f64>>) -> Option<Candidate> {
        let scores = self.score_all(&candidates);

        let mut best: Option<(usize, f64)> = None;
        for (i, &s) in scores.iter().enumerate() {
            match best {
                Some((_, best_score)) if s <= best_score => {}
                _ => best = Some((i, s)),
            }
        }

        let (index, log_score) = best?;
        let point = candidates.into_iter().nth(index)?;
        Some(Candidate { point, log_score })
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, candidates: &[Vec<f64>]) -> Vec<f64> {
        candidates.iter().map(|c| self.log_score(c)).collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, candidates: &[Vec<f64>]) -> Vec<f64> {
        candidates.par_iter().map(|c| self.log_score(c)).collect()
    }
}

/// Selects the candidate maximizing `good.density(x) / (bad.density(x) + ε)`.
///
/// Shorthand for [`AcquisitionSelector::new`] followed by
/// [`select`](AcquisitionSelector::select).
#[must_use]
pub fn select(
    candidates: Vec<Vec<f64>>,
    good: &KernelDensityModel,
    bad: &KernelDensityModel,
) -> Option<Candidate> {
    AcquisitionSelector::new(good, bad).select(candidates)
}

/// `ln(exp(a) + exp(b))` without overflow.
fn log_add_exp(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if hi.is_infinite() && hi < 0.0 {
        return f64::NEG_INFINITY;
    }
    hi + (lo - hi).exp().ln_1p()
}
