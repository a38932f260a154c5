//! Diagonal-bandwidth Gaussian kernel density estimator.

use rand::Rng;

use crate::error::{Error, Result};
use crate::rng_util;
use crate::space::BoundedSpace;

/// Smallest value [`KernelDensityModel::density`] returns, so densities stay
/// strictly positive even when the log-density underflows `f64`.
pub const DENSITY_FLOOR: f64 = f64::MIN_POSITIVE;

/// A Gaussian kernel density estimator over D-dimensional points.
///
/// Each point contributes a product of per-axis Gaussians centred on its
/// coordinates with per-axis standard deviation `bandwidth[j]` (a diagonal
/// bandwidth matrix). The density is the average of those contributions.
///
/// Models are rebuilt, never mutated: the optimizer fits a fresh "good" and
/// "bad" model every modeled iteration.
///
/// # Examples
///
/// ```
/// use quickopt::kde::KernelDensityModel;
///
/// let points = vec![vec![1.0, 2.0], vec![1.5, 2.5], vec![2.0, 3.0]];
/// let kde = KernelDensityModel::new(points, vec![0.5, 0.5]).unwrap();
///
/// assert_eq!(kde.n_dims(), 2);
/// assert!(kde.density(&[1.5, 2.5]) > kde.density(&[4.0, 0.0]));
/// ```
#[derive(Clone, Debug)]
pub struct KernelDensityModel {
    /// Kernel centres, each with `n_dims` coordinates.
    points: Vec<Vec<f64>>,
    /// Per-axis kernel standard deviation.
    bandwidth: Vec<f64>,
    /// `sum_j (-ln h_j - ln(2 pi) / 2)`, shared by every kernel.
    log_norm: f64,
}

impl KernelDensityModel {
    /// Creates a model from a non-empty point set and a per-axis bandwidth.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptySamples` if `points` is empty.
    /// Returns `Error::DimensionMismatch` if the points have inconsistent lengths.
    /// Returns `Error::BandwidthDimensionMismatch` if `bandwidth` has the wrong length.
    /// Returns `Error::InvalidBandwidth` if any bandwidth is not finite and positive.
    pub fn new(points: Vec<Vec<f64>>, bandwidth: Vec<f64>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(Error::EmptySamples);
        };
        let n_dims = first.len();

        for (i, point) in points.iter().enumerate() {
            if point.len() != n_dims {
                return Err(Error::DimensionMismatch {
                    expected: n_dims,
                    got: point.len(),
                    sample_index: i,
                });
            }
        }

        if bandwidth.len() != n_dims {
            return Err(Error::BandwidthDimensionMismatch {
                expected: n_dims,
                got: bandwidth.len(),
            });
        }

        if let Some(&bw) = bandwidth.iter().find(|bw| !bw.is_finite() || **bw <= 0.0) {
            return Err(Error::InvalidBandwidth(bw));
        }

        let half_log_2pi = 0.5 * (2.0 * core::f64::consts::PI).ln();
        let log_norm = bandwidth.iter().map(|h| -h.ln() - half_log_2pi).sum();

        Ok(Self {
            points,
            bandwidth,
            log_norm,
        })
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn n_dims(&self) -> usize {
        self.bandwidth.len()
    }

    /// Returns the number of kernel centres.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the kernel centres.
    #[must_use]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Returns the per-axis bandwidth.
    #[must_use]
    pub fn bandwidth(&self) -> &[f64] {
        &self.bandwidth
    }

    /// Returns the log probability density at `x`.
    ///
    /// `log f(x) = log((1/n) * Σ_i Π_j K_hj(x_j - p_ij))`, accumulated with the
    /// log-sum-exp trick so points far from every kernel stay finite.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n_dims()`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn log_density(&self, x: &[f64]) -> f64 {
        assert_eq!(
            x.len(),
            self.n_dims(),
            "Point dimension {} doesn't match KDE dimension {}",
            x.len(),
            self.n_dims()
        );

        let log_kernels: Vec<f64> = self
            .points
            .iter()
            .map(|p| {
                let sq: f64 = x
                    .iter()
                    .zip(p)
                    .zip(&self.bandwidth)
                    .map(|((&xj, &pj), &hj)| {
                        let z = (xj - pj) / hj;
                        z * z
                    })
                    .sum();
                self.log_norm - 0.5 * sq
            })
            .collect();

        let max_log_kernel = log_kernels
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max_log_kernel.is_infinite() && max_log_kernel < 0.0 {
            return f64::NEG_INFINITY;
        }

        let sum_exp: f64 = log_kernels
            .iter()
            .map(|&lk| (lk - max_log_kernel).exp())
            .sum();

        max_log_kernel + sum_exp.ln() - (self.points.len() as f64).ln()
    }

    /// Returns the probability density at `x`, floored at [`DENSITY_FLOOR`].
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != self.n_dims()`.
    #[must_use]
    pub fn density(&self, x: &[f64]) -> f64 {
        self.log_density(x).exp().max(DENSITY_FLOOR)
    }

    /// Draws a point from the estimated density and clamps it into `space`.
    ///
    /// Picks a kernel centre uniformly, then adds independent Gaussian noise
    /// on each axis with that axis's bandwidth.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, space: &BoundedSpace) -> Vec<f64> {
        let center = &self.points[rng.random_range(0..self.points.len())];

        let raw: Vec<f64> = center
            .iter()
            .zip(&self.bandwidth)
            .map(|(&c, &h)| c + rng_util::standard_normal(rng) * h)
            .collect();

        space.clamp(&raw)
    }
}
