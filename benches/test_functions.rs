//! Benchmark objectives, written as maximization problems.
//!
//! Each function is the negation of a classic minimization benchmark, so the
//! global maximum is `-f*` at the usual minimizer.

use std::f64::consts::{E, PI};

/// A benchmark objective together with its search box and known optimum.
#[derive(Clone, Copy)]
pub struct Problem {
    pub name: &'static str,
    pub dims: usize,
    pub lower: f64,
    pub upper: f64,
    pub optimum: f64,
    pub f: fn(&[f64]) -> f64,
}

impl Problem {
    pub fn lower_bounds(&self) -> Vec<f64> {
        vec![self.lower; self.dims]
    }

    pub fn upper_bounds(&self) -> Vec<f64> {
        vec![self.upper; self.dims]
    }

    /// How far `score` falls short of the optimum.
    pub fn regret(&self, score: f64) -> f64 {
        self.optimum - score
    }
}

/// Inverted paraboloid centred at (1, 2). Maximum 0.
pub fn bowl(x: &[f64]) -> f64 {
    -(x[0] - 1.0).powi(2) - (x[1] - 2.0).powi(2)
}

/// Negated sphere. Maximum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    -x.iter().map(|xi| xi * xi).sum::<f64>()
}

/// Negated Rosenbrock valley. Maximum 0 at (1, ..., 1).
pub fn rosenbrock(x: &[f64]) -> f64 {
    -x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum::<f64>()
}

/// Negated Rastrigin. Maximum 0 at the origin, many local maxima.
#[allow(clippy::cast_precision_loss)]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    -(10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>())
}

/// Negated Ackley. Maximum 0 at the origin.
#[allow(clippy::cast_precision_loss)]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
    20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() + (sum_cos / n).exp() - 20.0 - E
}

/// Negated Branin (2D). Maximum about -0.397887 at three points, one of
/// them (pi, 2.275).
pub fn branin(x: &[f64]) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let b = 5.1 / (4.0 * PI * PI);
    let c = 5.0 / PI;
    let t = 1.0 / (8.0 * PI);
    -((x2 - b * x1 * x1 + c * x1 - 6.0).powi(2) + 10.0 * (1.0 - t) * x1.cos() + 10.0)
}

pub const PROBLEMS: [Problem; 5] = [
    Problem {
        name: "bowl",
        dims: 2,
        lower: 0.0,
        upper: 5.0,
        optimum: 0.0,
        f: bowl,
    },
    Problem {
        name: "sphere",
        dims: 4,
        lower: -5.0,
        upper: 5.0,
        optimum: 0.0,
        f: sphere,
    },
    Problem {
        name: "rosenbrock",
        dims: 2,
        lower: -2.0,
        upper: 2.0,
        optimum: 0.0,
        f: rosenbrock,
    },
    Problem {
        name: "rastrigin",
        dims: 2,
        lower: -5.12,
        upper: 5.12,
        optimum: 0.0,
        f: rastrigin,
    },
    Problem {
        name: "ackley",
        dims: 3,
        lower: -5.0,
        upper: 5.0,
        optimum: 0.0,
        f: ackley,
    },
];
