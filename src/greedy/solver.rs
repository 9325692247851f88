//! Nearest-neighbour tour construction.

use super::config::{parse_bool, GreedyConfig};
use crate::algorithm::{read_parameter, Cycle, ParameterCursor, ParameterDescriptor, TourAlgorithm};
use crate::matrix::DistanceMatrix;
use crate::registry::AlgorithmKind;

const EXHAUSTIVE_START: ParameterDescriptor = ParameterDescriptor {
    name: "Test All Starting Nodes",
    description: "If true, the tour is built n times, once from each starting item, \
                  and the cheapest is kept. Otherwise only item 0 is used as the start (default).",
    domain: "{true, false}",
};

/// Greedy nearest-neighbour algorithm bound to one matrix.
#[derive(Debug, Clone)]
pub struct GreedyNearestNeighbor {
    matrix: DistanceMatrix,
    config: GreedyConfig,
}

impl GreedyNearestNeighbor {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self::with_config(matrix, GreedyConfig::default())
    }

    pub fn with_config(matrix: DistanceMatrix, config: GreedyConfig) -> Self {
        Self { matrix, config }
    }

    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GreedyConfig) {
        self.config = config;
    }

    /// Builds a tour from `start`, always hopping to the cheapest unvisited
    /// item. Candidates are scanned in ascending index order and only a
    /// strictly smaller cost replaces the current choice.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of range.
    pub fn tour_from(&self, start: usize) -> Cycle {
        let n = self.matrix.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        let mut current = start;
        visited[current] = true;
        order.push(current);

        for _ in 1..n {
            let mut next: Option<(usize, f32)> = None;
            for (candidate, &cost) in self.matrix.rows()[current].iter().enumerate() {
                if visited[candidate] {
                    continue;
                }
                match next {
                    Some((_, best)) if cost >= best => {}
                    _ => next = Some((candidate, cost)),
                }
            }
            // every row has n entries, so an unvisited candidate always exists
            let Some((chosen, _)) = next else { break };
            visited[chosen] = true;
            order.push(chosen);
            current = chosen;
        }
        order
    }
}

impl TourAlgorithm for GreedyNearestNeighbor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Greedy
    }

    fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    fn available_parameters(&self) -> Vec<ParameterDescriptor> {
        vec![EXHAUSTIVE_START]
    }

    fn apply_parameters<S: AsRef<str>>(&mut self, tokens: &mut ParameterCursor<'_, S>) {
        self.config.exhaustive_start =
            read_parameter(tokens, &EXHAUSTIVE_START, parse_bool).unwrap_or_default();
    }

    fn compute_cycle(&self) -> Cycle {
        let n = self.matrix.len();
        if n == 0 {
            return Vec::new();
        }
        if !self.config.exhaustive_start {
            return self.tour_from(0);
        }

        let mut best = self.tour_from(0);
        let mut best_cost = self.cycle_cost(&best);
        for start in 1..n {
            let tour = self.tour_from(start);
            let cost = self.cycle_cost(&tour);
            if cost < best_cost {
                best = tour;
                best_cost = cost;
            }
        }
        log::debug!("greedy exhaustive start kept tour from {} (cost {best_cost})", best[0]);
        best
    }
}
