//! Candidate generation for one modeled iteration.

use rand::Rng;

use crate::kde::KernelDensityModel;
use crate::space::BoundedSpace;

/// Fewest points the good model needs before its samples are trusted.
pub const MIN_MODEL_POINTS: usize = 2;

/// Draws `count` candidate points.
///
/// Candidates come from `good_model` when it was fit on at least
/// [`MIN_MODEL_POINTS`] points and from the uniform distribution over `space`
/// otherwise. Every returned point lies inside `space`.
///
/// # Examples
///
/// ```
/// use quickopt::BoundedSpace;
/// use quickopt::kde::KernelDensityModel;
/// use quickopt::tpe::candidates;
/// use rand::SeedableRng;
///
/// let space = BoundedSpace::new(vec![0.0], vec![10.0]).unwrap();
/// let good = KernelDensityModel::new(vec![vec![2.0], vec![3.0]], vec![0.5]).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
///
/// let batch = candidates::generate(&good, &space, 16, &mut rng);
/// assert_eq!(batch.len(), 16);
/// assert!(batch.iter().all(|c| space.contains(c)));
/// ```
pub fn generate<R: Rng + ?Sized>(
    good_model: &KernelDensityModel,
    space: &BoundedSpace,
    count: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    if good_model.n_points() >= MIN_MODEL_POINTS {
        (0..count).map(|_| good_model.sample(rng, space)).collect()
    } else {
        (0..count).map(|_| space.sample_uniform(rng)).collect()
    }
}
