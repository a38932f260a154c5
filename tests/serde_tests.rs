#![cfg(feature = "serde")]

use quickopt::{Direction, Error, OptimizerResult, TpeOptimizer};

fn finished_run() -> OptimizerResult {
    TpeOptimizer::builder()
        .bounds(vec![-2.0, 0.0], vec![2.0, 1.0])
        .direction(Direction::Minimize)
        .bootstrap_count(4)
        .modeled_iterations(4)
        .acquisition_samples(8)
        .seed(10)
        .build()
        .unwrap()
        .run(|x: &[f64]| Ok::<_, Error>(x[0].powi(2) + x[1]))
        .unwrap()
}

#[test]
fn result_round_trips_through_json() {
    let result = finished_run();
    let json = serde_json::to_string(&result).unwrap();
    let restored: OptimizerResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.best, result.best);
    assert_eq!(restored.history.as_slice(), result.history.as_slice());
    assert_eq!(restored.history.space(), result.history.space());
    assert_eq!(restored.history.direction(), Direction::Minimize);
}

#[test]
fn json_exposes_points_and_scores() {
    let result = finished_run();
    let value = serde_json::to_value(&result).unwrap();

    let observations = value["history"]["observations"].as_array().unwrap();
    assert_eq!(observations.len(), 8);
    assert_eq!(observations[0]["point"].as_array().unwrap().len(), 2);
    assert!(observations[0]["score"].is_f64());
    assert_eq!(value["history"]["direction"], "Minimize");
}
