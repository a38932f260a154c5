use quickopt::kde::{BandwidthRule, DENSITY_FLOOR, KernelDensityModel, robust_bandwidth};
use quickopt::tpe::{AcquisitionSelector, candidates};
use quickopt::{BoundedSpace, Direction, Observation, ObservationHistory};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[allow(clippy::cast_precision_loss)]
fn history_with(scores: &[f64]) -> ObservationHistory {
    let space = BoundedSpace::new(vec![0.0], vec![100.0]).unwrap();
    let mut history = ObservationHistory::new(space, Direction::Maximize);
    for (i, &s) in scores.iter().enumerate() {
        history.append(Observation::new(vec![i as f64], s)).unwrap();
    }
    history
}

#[test]
fn split_is_stable_on_ties() {
    let history = history_with(&[1.0, 5.0, 5.0, 3.0, 5.0]);
    let (good, bad) = history.split(2).unwrap();

    let good: Vec<f64> = good.iter().map(|o| o.point()[0]).collect();
    let bad: Vec<f64> = bad.iter().map(|o| o.point()[0]).collect();
    assert_eq!(good, [1.0, 2.0]);
    assert_eq!(bad, [4.0, 3.0, 0.0]);
}

#[test]
fn split_partitions_the_history() {
    let history = history_with(&[0.3, -1.0, 8.0, 2.5, 2.5, 7.0, 0.0]);
    for k in 1..history.len() {
        let (good, bad) = history.split(k).unwrap();
        assert_eq!(good.len(), k);
        assert_eq!(good.len() + bad.len(), history.len());
        let worst_good = good.iter().map(|o| o.score()).fold(f64::INFINITY, f64::min);
        let best_bad = bad
            .iter()
            .map(|o| o.score())
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(worst_good >= best_bad);
    }
}

#[test]
fn kde_density_is_positive_everywhere() {
    let kde = KernelDensityModel::new(vec![vec![0.0, 0.0], vec![1.0, 1.0]], vec![0.1, 0.1])
        .unwrap();
    for x in [[0.0, 0.0], [0.5, 0.5], [50.0, -50.0], [1e6, 1e6]] {
        let d = kde.density(&x);
        assert!(d >= DENSITY_FLOOR, "density at {x:?} was {d}");
        assert!(d.is_finite());
    }
}

#[test]
fn robust_bandwidth_respects_floor() {
    let space = BoundedSpace::new(vec![0.0, 0.0], vec![10.0, 2.0]).unwrap();
    let identical = vec![vec![3.0, 1.0]; 5];
    let bw = robust_bandwidth(&identical, &space);
    assert!((bw[0] - 0.1).abs() < 1e-12);
    assert!((bw[1] - 0.02).abs() < 1e-12);

    let rule = BandwidthRule::default().bandwidth(&identical, 20, &space);
    assert_eq!(rule, bw);
}

#[test]
fn one_modeled_iteration_by_hand() {
    let space = BoundedSpace::new(vec![0.0, 0.0], vec![5.0, 5.0]).unwrap();
    let mut history = ObservationHistory::new(space.clone(), Direction::Maximize);
    for (x, y) in [(1.0, 2.0), (1.2, 1.8), (4.0, 4.0), (0.0, 5.0), (3.5, 0.5)] {
        let score = -(x - 1.0_f64).powi(2) - (y - 2.0_f64).powi(2);
        history.append(Observation::new(vec![x, y], score)).unwrap();
    }

    let (good, bad) = history.split(2).unwrap();
    let good: Vec<Vec<f64>> = good.iter().map(|o| o.point().to_vec()).collect();
    let bad: Vec<Vec<f64>> = bad.iter().map(|o| o.point().to_vec()).collect();
    let bandwidth = BandwidthRule::Robust.bandwidth(&good, history.len(), &space);

    let good_model = KernelDensityModel::new(good, bandwidth.clone()).unwrap();
    let bad_model = KernelDensityModel::new(bad, bandwidth).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let batch = candidates::generate(&good_model, &space, 64, &mut rng);
    assert!(batch.iter().all(|c| space.contains(c)));

    let chosen = AcquisitionSelector::new(&good_model, &bad_model)
        .select(batch)
        .unwrap();
    let p = chosen.point();
    assert!(
        (p[0] - 1.1).abs() < 1.0 && (p[1] - 1.9).abs() < 1.0,
        "chose {p:?}, far from the good observations"
    );
    assert!(chosen.score() > 1.0);
}
