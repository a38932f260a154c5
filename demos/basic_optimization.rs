//! Basic optimization: maximize an inverted paraboloid with the one-call
//! entry point, then again with the builder for a seeded, step-wise run.
//!
//! Run with: `cargo run --example basic_optimization`

use quickopt::prelude::*;

fn objective(x: &[f64]) -> Result<f64> {
    Ok(-(x[0] - 1.0).powi(2) - (x[1] - 2.0).powi(2))
}

fn main() -> quickopt::Result<()> {
    let best = optimize(objective, &[0.0, 0.0], &[5.0, 5.0], 20, 50, 50, None, 0)?;
    println!("optimize: best point = [{:.4}, {:.4}]", best[0], best[1]);

    let mut optimizer = TpeOptimizer::builder()
        .bounds(vec![0.0, 0.0], vec![5.0, 5.0])
        .bootstrap_count(20)
        .modeled_iterations(50)
        .acquisition_samples(50)
        .seed(42)
        .build()?;

    while optimizer.phase() != Phase::Done {
        let before = optimizer.phase();
        optimizer.step(&objective)?;
        if before == Phase::Bootstrap && optimizer.phase() == Phase::Modeled {
            let best = optimizer.history().best()?;
            println!("bootstrap done: best score so far = {:.4}", best.score());
        }
    }

    let result = optimizer.into_result()?;
    println!(
        "builder: {} evaluations, best point = {:?}, score = {:.6}",
        result.history.len(),
        result.best.point(),
        result.best.score()
    );
    Ok(())
}
