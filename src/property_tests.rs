//! Property-based tests shared by all variants.
//!
//! Instances are Manhattan distances between integer grid points, so the
//! triangle inequality holds exactly in `f32` and every variant accepts
//! them.

#[cfg(test)]
mod tests {
    use crate::algorithm::TourAlgorithm;
    use crate::approx::{ApproxConfig, ApproxMetricTsp, ShortcutStrategy};
    use crate::greedy::{GreedyConfig, GreedyNearestNeighbor};
    use crate::matrix::DistanceMatrix;
    use crate::registry::{self, AlgorithmKind};
    use crate::sa::{SaConfig, SimulatedAnnealing};
    use proptest::prelude::*;

    fn grid_matrix(points: &[(i32, i32)]) -> DistanceMatrix {
        DistanceMatrix::from_fn(points.len(), |i, j| {
            ((points[i].0 - points[j].0).abs() + (points[i].1 - points[j].1).abs()) as f32
        })
    }

    fn points(max_n: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
        prop::collection::vec((0i32..50, 0i32..50), 1..=max_n)
    }

    fn optimal_cost(matrix: &DistanceMatrix) -> f32 {
        fn search(m: &DistanceMatrix, tour: &mut Vec<usize>, used: &mut [bool], best: &mut f32) {
            if tour.len() == used.len() {
                *best = best.min(m.cycle_cost(tour));
                return;
            }
            for v in 1..used.len() {
                if !used[v] {
                    used[v] = true;
                    tour.push(v);
                    search(m, tour, used, best);
                    tour.pop();
                    used[v] = false;
                }
            }
        }
        let mut used = vec![false; matrix.len()];
        used[0] = true;
        let mut best = f32::INFINITY;
        search(matrix, &mut vec![0], &mut used, &mut best);
        best
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Every usable variant returns a permutation of 0..n
        #[test]
        fn prop_every_variant_returns_permutation(pts in points(9)) {
            let matrix = grid_matrix(&pts);
            for mut algorithm in registry::usable_variants(&matrix) {
                if algorithm.kind() == AlgorithmKind::SimulatedAnnealing {
                    algorithm.configure(&[Some("50"), Some("0.5"), Some("20")]);
                }
                let cycle = algorithm.compute_cycle();
                prop_assert!(
                    matrix.is_valid_cycle(&cycle),
                    "{} returned {:?}",
                    algorithm.kind(),
                    cycle
                );
            }
        }

        /// Rotating or reversing a cycle leaves its cost unchanged on a
        /// symmetric matrix
        #[test]
        fn prop_cycle_cost_rotation_reversal(
            (pts, cycle) in points(10).prop_flat_map(|pts| {
                let order: Vec<usize> = (0..pts.len()).collect();
                (Just(pts), Just(order).prop_shuffle())
            }),
            shift in 0usize..10,
        ) {
            let matrix = grid_matrix(&pts);
            prop_assert!(matrix.is_valid_cycle(&cycle));
            let base = matrix.cycle_cost(&cycle);

            let mut rotated = cycle.clone();
            rotated.rotate_left(shift % cycle.len());
            let mut reversed = cycle.clone();
            reversed.reverse();

            prop_assert!((matrix.cycle_cost(&rotated) - base).abs() < 1e-3);
            prop_assert!((matrix.cycle_cost(&reversed) - base).abs() < 1e-3);
        }

        /// The metric approximation stays within twice the optimum
        #[test]
        fn prop_approx_within_twice_optimal(pts in points(7)) {
            let matrix = grid_matrix(&pts);
            let optimal = optimal_cost(&matrix);
            for strategy in ShortcutStrategy::ALL {
                let algorithm = ApproxMetricTsp::with_config(
                    matrix.clone(),
                    ApproxConfig::default().with_shortcut(strategy),
                );
                prop_assert!(algorithm.accepts());
                let cost = algorithm.cycle_cost(&algorithm.compute_cycle());
                prop_assert!(
                    cost <= 2.0 * optimal + 1e-3,
                    "{}: {} > 2 * {}",
                    strategy,
                    cost,
                    optimal
                );
            }
        }

        /// Exhaustive greedy is never worse than starting from item 0
        #[test]
        fn prop_exhaustive_greedy_not_worse(pts in points(10)) {
            let matrix = grid_matrix(&pts);
            let single = GreedyNearestNeighbor::new(matrix.clone());
            let exhaustive = GreedyNearestNeighbor::with_config(
                matrix,
                GreedyConfig::default().with_exhaustive_start(true),
            );
            let single_cost = single.cycle_cost(&single.compute_cycle());
            let exhaustive_cost = exhaustive.cycle_cost(&exhaustive.compute_cycle());
            prop_assert!(exhaustive_cost <= single_cost);
        }

        /// Annealing never returns something worse than where it started,
        /// and two runs with the same seed agree
        #[test]
        fn prop_annealing_reproducible_and_improving(pts in points(8), seed in 0u64..1000) {
            let matrix = grid_matrix(&pts);
            let config = SaConfig::default()
                .with_initial_temperature(50.0)
                .with_cooling_rate(0.7)
                .with_iterations_per_temperature(30)
                .with_seed(seed);
            let a = SimulatedAnnealing::with_config(matrix.clone(), config.clone()).unwrap();
            let b = SimulatedAnnealing::with_config(matrix, config).unwrap();
            let (ra, rb) = (a.run(), b.run());
            prop_assert!(ra.best_cost <= ra.initial_cost);
            prop_assert_eq!(&ra.best, &rb.best);
            prop_assert_eq!(ra.best_cost, rb.best_cost);
        }

        /// Inversion maps non-zero x to 1/x and zero to the sentinel
        #[test]
        fn prop_invert_values(values in prop::collection::vec(0u32..5, 4)) {
            let mut matrix = DistanceMatrix::new(vec![
                values.iter().take(2).map(|&v| v as f32).collect(),
                values.iter().skip(2).map(|&v| v as f32).collect(),
            ]);
            matrix.invert_values();
            for (k, &v) in values.iter().enumerate() {
                let got = matrix.get(k / 2, k % 2);
                if v == 0 {
                    prop_assert_eq!(got, 1e9);
                } else {
                    prop_assert_eq!(got, 1.0 / v as f32);
                }
            }
        }
    }
}
