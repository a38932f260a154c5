use rand::Rng;

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.random::<f64>() * (high - low)
}

/// Draw a standard normal variate with the Box-Muller transform.
#[inline]
pub(crate) fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // `random` yields [0, 1); shift u1 into (0, 1] so the log stays finite.
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * core::f64::consts::PI * u2).cos()
}
