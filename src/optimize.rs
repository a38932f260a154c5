use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::space::BoundedSpace;
use crate::tpe::{OptimizerConfig, TpeOptimizer};

/// A numeric value usable as an iteration or sample count.
///
/// Integers pass through. Floats are truncated toward zero; NaN and
/// infinities have no count and yield `None`.
pub trait IntoCount {
    /// Converts `self` to a signed count, or `None` if it has no integral value.
    fn into_count(self) -> Option<i64>;
}

macro_rules! impl_into_count_int {
    ($($t:ty),*) => {
        $(
            impl IntoCount for $t {
                fn into_count(self) -> Option<i64> {
                    Some(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_into_count_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoCount for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn into_count(self) -> Option<i64> {
        self.is_finite().then(|| self.trunc() as i64)
    }
}

impl IntoCount for f32 {
    fn into_count(self) -> Option<i64> {
        f64::from(self).into_count()
    }
}

fn count(name: &str, value: impl IntoCount, allow_zero: bool) -> Result<usize> {
    let raw = value
        .into_count()
        .ok_or_else(|| Error::InvalidConfig(format!("{name} must be a finite number")))?;
    let min = i64::from(!allow_zero);
    if raw < min {
        let requirement = if allow_zero { "non-negative" } else { "positive" };
        return Err(Error::InvalidConfig(format!(
            "{name} must be {requirement}, got {raw}"
        )));
    }
    usize::try_from(raw).map_err(|_| Error::InvalidConfig(format!("{name} is too large: {raw}")))
}

/// Maximizes `objective` over the box `[lower_bounds, upper_bounds]` and
/// returns the best point found.
///
/// Runs `bootstrap_count` uniform random evaluations followed by
/// `modeled_iterations` TPE-guided evaluations, scoring
/// `acquisition_samples` candidates per modeled iteration. `bandwidth`
/// fixes the per-axis KDE bandwidth; `None` recomputes it from the good
/// observations each iteration. `verbosity > 0` emits one progress event per
/// evaluation and has no effect on the search.
///
/// Counts may be given as integers or floats; floats are truncated toward
/// zero. The run draws its seed from OS entropy. For seeding, warm starts or
/// a different direction, use [`TpeOptimizer::builder`].
///
/// # Errors
///
/// Returns `Error::InvalidDomain` for malformed bounds and
/// `Error::InvalidConfig` for invalid counts or bandwidth, both before any
/// evaluation. Returns `Error::ObjectiveFailure` or
/// `Error::InvalidObservation` if an evaluation fails, aborting the run.
///
/// # Examples
///
/// ```
/// let best = quickopt::optimize(
///     |x: &[f64]| Ok::<_, quickopt::Error>(-(x[0] - 0.5).powi(2) - (x[1] + 1.0).powi(2)),
///     &[-2.0, -2.0],
///     &[2.0, 2.0],
///     15.0,
///     40,
///     48,
///     None,
///     0,
/// )
/// .unwrap();
/// assert_eq!(best.len(), 2);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn optimize<O: Objective>(
    objective: O,
    lower_bounds: &[f64],
    upper_bounds: &[f64],
    bootstrap_count: impl IntoCount,
    modeled_iterations: impl IntoCount,
    acquisition_samples: impl IntoCount,
    bandwidth: Option<Vec<f64>>,
    verbosity: u32,
) -> Result<Vec<f64>> {
    let space = BoundedSpace::new(lower_bounds.to_vec(), upper_bounds.to_vec())?;

    let config = OptimizerConfig {
        bootstrap_count: count("bootstrap_count", bootstrap_count, false)?,
        modeled_iterations: count("modeled_iterations", modeled_iterations, true)?,
        acquisition_samples: count("acquisition_samples", acquisition_samples, false)?,
        bandwidth,
        verbosity,
        ..OptimizerConfig::default()
    };

    let result = TpeOptimizer::new(space, config)?.run(objective)?;
    Ok(result.best.into_point())
}
