//! The axis-aligned box the search runs in.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng_util;

/// A D-dimensional box domain with per-axis `[lower, upper]` bounds.
///
/// Immutable after construction; every point the optimizer evaluates lies
/// inside it.
///
/// # Examples
///
/// ```
/// use quickopt::BoundedSpace;
///
/// let space = BoundedSpace::new(vec![0.0, -1.0], vec![5.0, 1.0]).unwrap();
/// assert_eq!(space.dimension(), 2);
/// assert_eq!(space.clamp(&[7.0, -3.0]), vec![5.0, -1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundedSpace {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl BoundedSpace {
    /// Creates a new box from matching lower and upper bound vectors.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDomain` if the bounds are empty, have different
    /// lengths, contain non-finite values, if any `lower[i] >= upper[i]`, or
    /// if any width `upper[i] - lower[i]` overflows `f64`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() {
            return Err(Error::InvalidDomain(
                "bounds must have at least one dimension".into(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(Error::InvalidDomain(format!(
                "lower has {} entries but upper has {}",
                lower.len(),
                upper.len()
            )));
        }
        for (i, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::InvalidDomain(format!(
                    "axis {i} has non-finite bounds [{lo}, {hi}]"
                )));
            }
            if lo >= hi {
                return Err(Error::InvalidDomain(format!(
                    "axis {i}: lower ({lo}) must be less than upper ({hi})"
                )));
            }
            if !(hi - lo).is_finite() {
                return Err(Error::InvalidDomain(format!(
                    "axis {i}: width of [{lo}, {hi}] is not representable"
                )));
            }
        }

        Ok(Self { lower, upper })
    }

    /// Number of axes.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Per-axis lower bounds.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Per-axis upper bounds.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Width of axis `i`.
    #[must_use]
    pub fn range(&self, i: usize) -> f64 {
        self.upper[i] - self.lower[i]
    }

    /// Midpoint of axis `i`.
    #[must_use]
    pub fn midpoint(&self, i: usize) -> f64 {
        0.5 * self.lower[i] + 0.5 * self.upper[i]
    }

    /// Returns `true` if `point` has the right length and lies inside the box.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dimension()
            && point
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&x, (&lo, &hi))| x >= lo && x <= hi)
    }

    /// Projects each coordinate into its bound interval.
    ///
    /// Extra coordinates beyond the dimension are dropped.
    #[must_use]
    pub fn clamp(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(&x, (&lo, &hi))| x.clamp(lo, hi))
            .collect()
    }

    /// Draws each coordinate independently and uniformly from its interval.
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| rng_util::f64_range(rng, lo, hi))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_space_rejects_empty_bounds() {
        let result = BoundedSpace::new(vec![], vec![]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_space_rejects_length_mismatch() {
        let result = BoundedSpace::new(vec![0.0, 0.0], vec![1.0]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_space_rejects_degenerate_axis() {
        let result = BoundedSpace::new(vec![0.0, 1.0], vec![1.0, 1.0]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));

        let result = BoundedSpace::new(vec![2.0], vec![1.0]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_space_rejects_non_finite_bounds() {
        let result = BoundedSpace::new(vec![f64::NEG_INFINITY], vec![1.0]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_space_rejects_overflowing_width() {
        let result = BoundedSpace::new(vec![0.0, -1e308], vec![1.0, 1e308]);
        assert!(matches!(result, Err(Error::InvalidDomain(_))));

        let wide = BoundedSpace::new(vec![-1e307], vec![1e307]).unwrap();
        assert!(wide.range(0).is_finite());
        assert!(wide.midpoint(0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_projects_into_box() {
        let space = BoundedSpace::new(vec![0.0, -1.0, 2.0], vec![1.0, 1.0, 3.0]).unwrap();
        assert_eq!(space.clamp(&[-0.5, 0.5, 10.0]), vec![0.0, 0.5, 3.0]);
        assert!(space.contains(&space.clamp(&[100.0, -100.0, 0.0])));
    }

    #[test]
    fn test_sample_uniform_within_bounds() {
        let space = BoundedSpace::new(vec![-5.0, 10.0], vec![5.0, 10.5]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = space.sample_uniform(&mut rng);
            assert_eq!(p.len(), 2);
            assert!(space.contains(&p), "{p:?} escaped the box");
        }
    }

    #[test]
    fn test_contains_checks_length() {
        let space = BoundedSpace::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        assert!(!space.contains(&[0.5]));
        assert!(space.contains(&[0.0, 1.0]));
    }
}
