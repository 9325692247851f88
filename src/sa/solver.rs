//! Simulated annealing over tours.

use super::config::{
    check_cooling_rate, check_initial_temperature, parse_f64, parse_iterations, SaConfig,
    DEFAULT_COOLING_RATE, DEFAULT_INITIAL_TEMPERATURE, DEFAULT_ITERATIONS_PER_TEMPERATURE,
};
use super::runner::{SaResult, SaRunner};
use super::types::SaProblem;
use crate::algorithm::{read_parameter, Cycle, ParameterCursor, ParameterDescriptor, TourAlgorithm};
use crate::error::TourError;
use crate::matrix::DistanceMatrix;
use crate::registry::AlgorithmKind;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

const INITIAL_TEMPERATURE: ParameterDescriptor = ParameterDescriptor {
    name: "Initial Temperature",
    description: "Controls how readily worse solutions are accepted. A high initial temperature \
                  explores the solution space broadly but needs more iterations to converge; a \
                  low one explores less and finishes sooner. \
                  Default value: 1000. Recommended range: [500, 2000]",
    domain: "double",
};

const COOLING_RATE: ParameterDescriptor = ParameterDescriptor {
    name: "Cooling Rate",
    description: "Value between 0 and 1 the temperature is multiplied by after each level. \
                  Close to 1 cools slowly and searches more thoroughly; well below 1 is faster \
                  but more likely to miss good solutions. \
                  Default value: 0.9. Recommended range: [0.80, 0.99]",
    domain: "double",
};

const ITERATIONS: ParameterDescriptor = ParameterDescriptor {
    name: "K",
    description: "Number of candidate solutions evaluated at each temperature level. A high K \
                  explores more deeply and escapes local minima more easily at a higher \
                  computational cost; a low K is quicker. \
                  Default value: 600. Recommended range: [200, 1000]",
    domain: "double",
};

/// Tour problem for [`SaRunner`]: random permutation start, swap moves,
/// closed-tour cost.
#[derive(Debug, Clone, Copy)]
pub struct TourProblem<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> TourProblem<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

impl SaProblem for TourProblem<'_> {
    type Solution = Cycle;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Cycle {
        let mut tour: Cycle = (0..self.len()).collect();
        tour.shuffle(rng);
        tour
    }

    fn cost(&self, tour: &Cycle) -> f64 {
        self.matrix.cycle_cost(tour) as f64
    }

    fn neighbor<R: Rng>(&self, tour: &Cycle, rng: &mut R) -> Cycle {
        let mut next = tour.clone();
        if next.len() > 1 {
            let i = rng.random_range(0..next.len());
            let j = rng.random_range(0..next.len());
            next.swap(i, j);
        }
        next
    }
}

/// Simulated annealing bound to one matrix.
///
/// Runs are deterministic for a given configuration: the generator is
/// re-seeded from [`SaConfig::seed`] on every call.
///
/// # Examples
///
/// ```
/// use u_tour::algorithm::TourAlgorithm;
/// use u_tour::matrix::DistanceMatrix;
/// use u_tour::sa::SimulatedAnnealing;
///
/// let sa = SimulatedAnnealing::new(DistanceMatrix::from([
///     [0.0, 1.2, 3.4],
///     [1.2, 0.0, 2.1],
///     [3.4, 2.1, 0.0],
/// ]));
/// let result = sa.run();
/// assert!(result.best_cost <= result.initial_cost);
/// assert_eq!(sa.compute_cycle(), result.best);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    matrix: DistanceMatrix,
    config: SaConfig,
}

impl SimulatedAnnealing {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self {
            matrix,
            config: SaConfig::default(),
        }
    }

    /// Binds a custom configuration, rejecting an invalid one.
    pub fn with_config(matrix: DistanceMatrix, config: SaConfig) -> Result<Self, TourError> {
        config.validate()?;
        Ok(Self { matrix, config })
    }

    /// Replaces the seed (1 by default).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SaConfig) -> Result<(), TourError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Full run with statistics.
    pub fn run(&self) -> SaResult<Cycle> {
        self.run_with_cancel(None)
    }

    /// Full run that stops at the next temperature level once `cancel` is
    /// set.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> SaResult<Cycle> {
        let n = self.matrix.len();
        if n <= 1 {
            let best: Cycle = (0..n).collect();
            let cost = self.matrix.cycle_cost(&best) as f64;
            return SaResult {
                best,
                best_cost: cost,
                initial_cost: cost,
                iterations: 0,
                temperature_levels: 0,
                final_temperature: self.config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cancelled: false,
                cost_history: vec![cost],
            };
        }
        SaRunner::execute(&TourProblem::new(&self.matrix), &self.config, cancel)
    }
}

impl TourAlgorithm for SimulatedAnnealing {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::SimulatedAnnealing
    }

    fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    fn available_parameters(&self) -> Vec<ParameterDescriptor> {
        vec![INITIAL_TEMPERATURE, COOLING_RATE, ITERATIONS]
    }

    fn apply_parameters<S: AsRef<str>>(&mut self, tokens: &mut ParameterCursor<'_, S>) {
        self.config.initial_temperature = read_parameter(tokens, &INITIAL_TEMPERATURE, |t| {
            parse_f64(t).and_then(check_initial_temperature)
        })
        .unwrap_or(DEFAULT_INITIAL_TEMPERATURE);

        self.config.cooling_rate = read_parameter(tokens, &COOLING_RATE, |t| {
            parse_f64(t).and_then(check_cooling_rate)
        })
        .unwrap_or(DEFAULT_COOLING_RATE);

        match read_parameter(tokens, &ITERATIONS, parse_iterations) {
            Some(k) => {
                self.config.iterations_per_temperature = k.ceil() as usize;
                self.config.acceptance_scale = Some(k);
            }
            None => {
                self.config.iterations_per_temperature = DEFAULT_ITERATIONS_PER_TEMPERATURE;
                self.config.acceptance_scale = None;
            }
        }

        // a token-set temperature may sit below a custom floor
        if self.config.min_temperature >= self.config.initial_temperature {
            log::warn!(
                "minimum temperature {} is not below initial temperature {}, resetting it to 1",
                self.config.min_temperature,
                self.config.initial_temperature
            );
            self.config.min_temperature = 1.0;
        }
    }

    fn compute_cycle(&self) -> Cycle {
        self.run().best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> DistanceMatrix {
        DistanceMatrix::from([
            [0.0, 1.2, 3.4, 2.1, 4.5],
            [1.2, 0.0, 2.1, 3.4, 5.6],
            [3.4, 2.1, 0.0, 1.2, 6.7],
            [2.1, 3.4, 1.2, 0.0, 7.8],
            [4.5, 5.6, 6.7, 7.8, 0.0],
        ])
    }

    fn fast() -> SaConfig {
        SaConfig::default().with_iterations_per_temperature(100)
    }

    #[test]
    fn test_initial_solution_is_permutation() {
        use rand::SeedableRng;
        let matrix = five();
        let problem = TourProblem::new(&matrix);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let tour = problem.initial_solution(&mut rng);
        assert!(matrix.is_valid_cycle(&tour));
    }

    #[test]
    fn test_neighbor_is_permutation() {
        use rand::SeedableRng;
        let matrix = five();
        let problem = TourProblem::new(&matrix);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut tour: Cycle = (0..5).collect();
        for _ in 0..50 {
            tour = problem.neighbor(&tour, &mut rng);
            assert!(matrix.is_valid_cycle(&tour));
        }
    }

    #[test]
    fn test_cost_matches_matrix() {
        let matrix = DistanceMatrix::from([
            [0.0, 1.2, 3.4, 2.1],
            [1.2, 0.0, 2.1, 3.4],
            [3.4, 2.1, 0.0, 1.2],
            [2.1, 3.4, 1.2, 0.0],
        ]);
        let sa = SimulatedAnnealing::new(matrix);
        let cost = sa.cycle_cost(&[0, 1, 2, 3]);
        assert!((cost - (1.2 + 2.1 + 1.2 + 2.1)).abs() < 1e-5);
    }

    #[test]
    fn test_compute_cycle_minimizes() {
        let sa = SimulatedAnnealing::with_config(five(), fast()).unwrap();
        let result = sa.run();
        assert!(sa.matrix().is_valid_cycle(&result.best));
        assert!(result.best_cost <= result.initial_cost);
        // optimum of this instance is 4-0-3-2-1: 4.5 + 2.1 + 1.2 + 2.1 + 5.6
        assert!(
            result.best_cost <= 15.5 + 1e-4,
            "expected the optimum 15.5, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_reproducible() {
        let a = SimulatedAnnealing::with_config(five(), fast()).unwrap();
        let b = SimulatedAnnealing::with_config(five(), fast()).unwrap();
        let (ra, rb) = (a.run(), b.run());
        assert_eq!(ra.best, rb.best);
        assert_eq!(ra.best_cost, rb.best_cost);
        assert_eq!(a.compute_cycle(), a.compute_cycle());
    }

    #[test]
    fn test_trivial_sizes() {
        let empty = SimulatedAnnealing::new(DistanceMatrix::default());
        assert!(empty.compute_cycle().is_empty());
        let single = SimulatedAnnealing::new(DistanceMatrix::from([[0.0]]));
        let result = single.run();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_cancelled_run_returns_permutation() {
        let sa = SimulatedAnnealing::new(five());
        let result = sa.run_with_cancel(Some(Arc::new(AtomicBool::new(true))));
        assert!(result.cancelled);
        assert!(sa.matrix().is_valid_cycle(&result.best));
    }

    #[test]
    fn test_apply_parameters_valid() {
        let mut sa = SimulatedAnnealing::new(five());
        assert_eq!(sa.available_parameters().len(), 3);
        let tokens = vec![Some("500"), Some("0.95"), Some("200")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().initial_temperature, 500.0);
        assert_eq!(sa.config().cooling_rate, 0.95);
        assert_eq!(sa.config().iterations_per_temperature, 200);
    }

    #[test]
    fn test_apply_parameters_invalid_slots_fall_back_independently() {
        let mut sa = SimulatedAnnealing::new(five());
        let tokens = vec![Some("5"), Some("0.8"), Some("zero")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().initial_temperature, DEFAULT_INITIAL_TEMPERATURE);
        assert_eq!(sa.config().cooling_rate, 0.8);
        assert_eq!(sa.config().iterations_per_temperature, DEFAULT_ITERATIONS_PER_TEMPERATURE);

        let tokens = vec![Some("1500"), Some("1.0"), Some("-3")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().initial_temperature, 1500.0);
        assert_eq!(sa.config().cooling_rate, DEFAULT_COOLING_RATE);
        assert_eq!(sa.config().iterations_per_temperature, DEFAULT_ITERATIONS_PER_TEMPERATURE);
        assert!(sa.config().validate().is_ok());
    }

    #[test]
    fn test_apply_parameters_keeps_config_valid() {
        let mut sa = SimulatedAnnealing::with_config(
            five(),
            SaConfig::default().with_min_temperature(50.0),
        )
        .unwrap();
        let tokens = vec![Some("20")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert!(sa.config().validate().is_ok());
    }

    #[test]
    fn test_fractional_k_keeps_raw_acceptance_scale() {
        let mut sa = SimulatedAnnealing::new(five());
        let tokens = vec![None, None, Some("0.5")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().iterations_per_temperature, 1);
        assert_eq!(sa.config().acceptance_scale(), 0.5);

        let tokens = vec![None, None, Some("250")];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().iterations_per_temperature, 250);
        assert_eq!(sa.config().acceptance_scale(), 250.0);

        let tokens: Vec<Option<&str>> = vec![];
        sa.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(sa.config().acceptance_scale(), DEFAULT_ITERATIONS_PER_TEMPERATURE as f64);
    }

    #[test]
    fn test_single_item_cost_reads_diagonal() {
        let mut matrix = DistanceMatrix::from([[0.0]]);
        matrix.invert_values();
        let sa = SimulatedAnnealing::new(matrix);
        let result = sa.run();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, sa.cycle_cost(&result.best) as f64);
        assert_eq!(result.initial_cost, result.best_cost);
        assert!(result.best_cost > 0.0);
    }

    #[test]
    fn test_instances_do_not_share_settings() {
        let mut hot = SimulatedAnnealing::new(five());
        let cold = SimulatedAnnealing::new(five());
        let tokens = vec![Some("1900"), Some("0.99"), Some("50")];
        hot.apply_parameters(&mut ParameterCursor::new(&tokens));
        assert_eq!(cold.config(), &SaConfig::default());
        assert_ne!(hot.config(), cold.config());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = SimulatedAnnealing::with_config(five(), SaConfig::default().with_cooling_rate(2.0));
        assert!(result.is_err());
    }
}
