use kmeans1d::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const READINGS: [Scalar; 10] = [0.001, 0.002, 0.5, 0.75, 0.999, 2.0, 3.0, 5.0, 7.123, 0.999];

fn series(seed: u64, n: usize) -> Vec<Scalar> {
    use rand::Rng;
    let ref mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| (i % 4) as Scalar * 10.0 + rng.random_range(-1.0..1.0_f64))
        .collect()
}

#[test]
fn is_single_cluster_absorbing() {
    let clustering = cluster_evenly_spaced(&READINGS, 1, 0.0, 16).unwrap();
    assert!(clustering.tags.iter().all(|&j| j == 0));
    let centroid = clustering.centroids[0];
    let deviation = READINGS.iter().map(|x| (x - centroid).abs()).sum::<Scalar>() / READINGS.len() as Scalar;
    assert!(
        (clustering.error - deviation).abs() < 1e-12,
        "{} != {}",
        clustering.error,
        deviation
    );
}

#[test]
fn is_degenerate_input_an_error() {
    let ref mut rng = SmallRng::seed_from_u64(0);
    for (data, k) in [(vec![], 1), (vec![1.0], 1), (vec![1.0, 2.0], 3), (vec![1.0, 2.0], 0)] {
        assert!(initialize_evenly_spaced(&data, k).is_err());
        assert!(initialize_random(&data, k, rng).is_err());
        assert!(cluster(&data, k, 0.1, 4, vec![0.0; k]).is_err());
    }
}

#[test]
fn is_converged_run_idempotent() {
    let data = series(3, 64);
    let first = cluster_evenly_spaced(&data, 4, 0.0, 64).unwrap();
    assert_eq!(first.stop, Stop::Stable);
    let mut lloyd = Lloyd::new(&data, first.centroids.clone(), Termination::new(0.0, 64)).unwrap();
    let steps = lloyd.by_ref().collect::<Vec<_>>();
    assert_eq!(steps.len(), 1, "{:?}", steps);
    assert_eq!(steps[0].relocations, 0);
    assert_eq!(lloyd.tags(), first.tags);
}

#[test]
fn is_error_non_increasing() {
    let data = series(11, 128);
    let ref mut rng = SmallRng::seed_from_u64(11);
    let centroids = initialize_random(&data, 4, rng).unwrap();
    let lloyd = Lloyd::new(&data, centroids, Termination::new(0.0, 32)).unwrap();
    let initial = lloyd.error();
    let errors = std::iter::once(initial)
        .chain(lloyd.map(|step| step.error))
        .collect::<Vec<_>>();
    for w in errors.windows(2) {
        assert!(w[1] <= w[0], "error increased from {} to {}", w[0], w[1]);
    }
}

#[test]
fn is_iteration_count_bounded() {
    let data = series(5, 256);
    for max_iters in 1..6 {
        let clustering = cluster(&data, 4, 0.0, max_iters, vec![0.0, 0.1, 0.2, 0.3]).unwrap();
        assert!(clustering.iterations <= max_iters);
        assert!(clustering.iterations >= 1);
    }
}

#[test]
fn is_readings_scenario_cohesive() {
    let centroids = initialize_evenly_spaced(&READINGS, 3).unwrap();
    assert_eq!(centroids[0], 0.001);
    assert!((centroids[1] - 3.562).abs() < 1e-9, "{}", centroids[1]);
    assert_eq!(centroids[2], 7.123);
    let clustering = cluster(&READINGS, 3, 0.001, 3, centroids).unwrap();
    let tags = &clustering.tags;
    // observations near {0, 0.5, 1} share a cluster
    let low = tags[0];
    for i in [1, 2, 3, 4, 9] {
        assert_eq!(tags[i], low, "{:?}", tags);
    }
    // 2.0 and 3.0 share a cluster apart from the low group
    assert_eq!(tags[5], tags[6], "{:?}", tags);
    assert_ne!(tags[5], low, "{:?}", tags);
    assert_ne!(tags[8], low, "{:?}", tags);
    assert_eq!(clustering.sizes().iter().filter(|&&s| s > 0).count(), 3);
    // every observation sits nearest its own centroid
    for (x, &j) in READINGS.iter().zip(tags.iter()) {
        let own = (x - clustering.centroids[j]).abs();
        for c in clustering.centroids.iter() {
            assert!(own <= (x - c).abs(), "{} closer to {} than {}", x, c, clustering.centroids[j]);
        }
    }
}

#[test]
fn is_smoothed_series_clusterable() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let smoothed = signals::smooth(&data, 3);
    assert_eq!(smoothed, vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let clustering = cluster_evenly_spaced(&smoothed, 2, 0.0, 16).unwrap();
    assert_eq!(clustering.tags.len(), smoothed.len());
    assert_eq!(clustering.tags.first(), Some(&0));
    assert_eq!(clustering.tags.last(), Some(&1));
}

#[test]
fn is_random_pipeline_reproducible() {
    let data = series(7, 64);
    let a = cluster_random(&data, 4, 0.0, 32, &mut SmallRng::seed_from_u64(KMEANS_SEED)).unwrap();
    let b = cluster_random(&data, 4, 0.0, 32, &mut SmallRng::seed_from_u64(KMEANS_SEED)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn is_concurrent_use_independent() {
    let data = series(9, 64);
    let expected = cluster_evenly_spaced(&data, 4, 0.0, 32).unwrap();
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| cluster_evenly_spaced(&data, 4, 0.0, 32).unwrap()))
            .collect::<Vec<_>>();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
