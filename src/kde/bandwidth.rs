//! Default bandwidth selection.

use crate::space::BoundedSpace;

/// Smallest bandwidth the data-driven rules produce, as a fraction of the
/// axis range. Keeps kernels from collapsing when the good set is nearly
/// constant along an axis.
pub const MIN_BANDWIDTH_FRACTION: f64 = 0.01;

/// Silverman's constant for a Gaussian kernel.
const SILVERMAN_FACTOR: f64 = 1.06;

/// IQR of a standard normal distribution; converts an IQR into a standard
/// deviation estimate.
const NORMAL_IQR: f64 = 1.349;

/// How the optimizer picks kernel bandwidths when none are configured.
///
/// The chosen bandwidth is computed once per modeled iteration and shared by
/// the good and bad models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BandwidthRule {
    /// Robust rule-of-thumb over the good subset:
    /// `1.06 * min(std, IQR / 1.349) * n^(-1/(d+4))` per axis, floored at
    /// [`MIN_BANDWIDTH_FRACTION`] of the axis range.
    #[default]
    Robust,
    /// Data-independent shrinking width:
    /// `(upper - lower) / 5 * n^(-1/(d+4))` per axis, where `n` is the total
    /// number of observations.
    RangeScaled,
}

impl BandwidthRule {
    /// Computes a per-axis bandwidth.
    ///
    /// `good` holds the points of the current good subset and `n_history` is
    /// the total number of observations recorded so far.
    #[must_use]
    pub fn bandwidth(self, good: &[Vec<f64>], n_history: usize, space: &BoundedSpace) -> Vec<f64> {
        match self {
            BandwidthRule::Robust => robust_bandwidth(good, space),
            BandwidthRule::RangeScaled => range_scaled_bandwidth(n_history, space),
        }
    }
}

/// Robust per-axis bandwidth over `points`.
///
/// Uses the smaller of the standard deviation and the normalised IQR, falling
/// back to whichever is non-zero. Axes where both are zero (or where `points`
/// is empty) get the floor.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn robust_bandwidth(points: &[Vec<f64>], space: &BoundedSpace) -> Vec<f64> {
    let n_dims = space.dimension();
    let n = points.len().max(1) as f64;
    let scale = SILVERMAN_FACTOR * n.powf(-1.0 / (n_dims as f64 + 4.0));

    (0..n_dims)
        .map(|dim| {
            let floor = MIN_BANDWIDTH_FRACTION * space.range(dim);
            let mut values: Vec<f64> = points.iter().map(|p| p[dim]).collect();
            if values.is_empty() {
                return floor;
            }
            values.sort_by(f64::total_cmp);

            let std = std_dev(&values);
            let iqr = quantile(&values, 0.75) - quantile(&values, 0.25);
            let spread = match (std > 0.0, iqr > 0.0) {
                (true, true) => std.min(iqr / NORMAL_IQR),
                (true, false) => std,
                (false, true) => iqr / NORMAL_IQR,
                (false, false) => 0.0,
            };

            (scale * spread).max(floor)
        })
        .collect()
}

/// Range-scaled per-axis bandwidth that shrinks as the history grows.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn range_scaled_bandwidth(n_history: usize, space: &BoundedSpace) -> Vec<f64> {
    let n = n_history.max(1) as f64;
    let shrink = n.powf(-1.0 / (space.dimension() as f64 + 4.0));
    (0..space.dimension())
        .map(|dim| space.range(dim) / 5.0 * shrink)
        .collect()
}

/// Population standard deviation.
#[allow(clippy::cast_precision_loss)]
fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_space(dims: usize) -> BoundedSpace {
        BoundedSpace::new(vec![0.0; dims], vec![10.0; dims]).unwrap()
    }

    #[test]
    fn test_quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((quantile(&v, 0.25) - 2.0).abs() < 1e-12);
        assert!((quantile(&v, 0.5) - 3.0).abs() < 1e-12);
        assert!((quantile(&[0.0, 1.0], 0.75) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_robust_bandwidth_positive_and_scaled() {
        let space = unit_space(2);
        let points: Vec<Vec<f64>> = (0..10)
            .map(|i| {
                let x = f64::from(i) * 0.5;
                vec![x, x * 0.5]
            })
            .collect();
        let bw = robust_bandwidth(&points, &space);

        assert_eq!(bw.len(), 2);
        assert!(bw.iter().all(|&h| h > 0.0));
        // The second axis has half the spread of the first.
        assert!((bw[0] / bw[1] - 2.0).abs() < 1e-9, "ratio = {}", bw[0] / bw[1]);
    }

    #[test]
    fn test_robust_bandwidth_floor_for_collinear_axis() {
        let space = unit_space(2);
        let points = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let bw = robust_bandwidth(&points, &space);

        assert!((bw[1] - MIN_BANDWIDTH_FRACTION * 10.0).abs() < 1e-12);
        assert!(bw[0] > bw[1]);
    }

    #[test]
    fn test_robust_bandwidth_single_point_uses_floor() {
        let space = unit_space(3);
        let bw = robust_bandwidth(&[vec![1.0, 2.0, 3.0]], &space);
        for h in bw {
            assert!((h - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_robust_bandwidth_resists_outlier() {
        let space = BoundedSpace::new(vec![0.0], vec![1000.0]).unwrap();
        let tight = vec![vec![1.0], vec![1.1], vec![1.2], vec![1.3], vec![1.4], vec![1.5]];
        let mut with_outlier = tight.clone();
        with_outlier.push(vec![900.0]);

        let bw_outlier = robust_bandwidth(&with_outlier, &space)[0];
        // A plain standard deviation would put this in the hundreds.
        assert!(bw_outlier < 20.0, "bandwidth = {bw_outlier}");
    }

    #[test]
    fn test_range_scaled_shrinks_with_history() {
        let space = unit_space(1);
        let small = range_scaled_bandwidth(10, &space)[0];
        let large = range_scaled_bandwidth(1000, &space)[0];

        assert!(large < small);
        // n = 1 gives exactly range / 5.
        assert!((range_scaled_bandwidth(1, &space)[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rule_dispatch() {
        let space = unit_space(1);
        let good = vec![vec![1.0], vec![4.0]];
        assert_eq!(
            BandwidthRule::Robust.bandwidth(&good, 20, &space),
            robust_bandwidth(&good, &space)
        );
        assert_eq!(
            BandwidthRule::RangeScaled.bandwidth(&good, 20, &space),
            range_scaled_bandwidth(20, &space)
        );
    }
}
