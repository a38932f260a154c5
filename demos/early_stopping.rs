//! Early stopping: end a run once an evaluation gets close enough.
//!
//! Implements [`Objective`] on a struct and returns `ControlFlow::Break(())`
//! from [`after_evaluation`](Objective::after_evaluation) when the target is
//! reached. Minimizes `|x - 3| + |y + 1|` starting from two known points.
//!
//! Run with: `cargo run --example early_stopping`

use std::ops::ControlFlow;

use quickopt::prelude::*;

struct TargetObjective {
    target: f64,
}

impl Objective for TargetObjective {
    type Error = Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        Ok((x[0] - 3.0).abs() + (x[1] + 1.0).abs())
    }

    fn after_evaluation(&self, history: &ObservationHistory, latest: &Observation) -> ControlFlow<()> {
        if latest.score() < self.target {
            println!(
                "target {} reached after {} evaluations",
                self.target,
                history.len()
            );
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

fn main() -> quickopt::Result<()> {
    let result = TpeOptimizer::builder()
        .bounds(vec![-10.0, -10.0], vec![10.0, 10.0])
        .direction(Direction::Minimize)
        .warm_start(vec![(vec![0.0, 0.0], 4.0), (vec![5.0, 5.0], 8.0)])
        .bootstrap_count(10)
        .modeled_iterations(200)
        .split_strategy(ThresholdSplit::new(0.5)?)
        .seed(7)
        .build()?
        .run(TargetObjective { target: 0.05 })?;

    println!(
        "best point = {:?}, score = {:.4}, evaluations = {}",
        result.best.point(),
        result.best.score(),
        result.history.len()
    );
    Ok(())
}
