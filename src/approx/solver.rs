//! MST-based 2-approximation bound to one matrix.

use super::config::{ApproxConfig, ShortcutStrategy};
use super::euler::{eulerian_circuit, DoubledTree};
use super::mst::minimum_spanning_tree;
use super::shortcut::{best_starting_node, collapse_backtracks, shortcut_from};
use crate::algorithm::{read_parameter, Cycle, ParameterCursor, ParameterDescriptor, TourAlgorithm};
use crate::matrix::{DistanceMatrix, WeightedEdge};
use crate::registry::AlgorithmKind;

const SHORTCUT: ParameterDescriptor = ParameterDescriptor {
    name: "Edge repetition elimination type",
    description: "The last step converts an Eulerian walk into a Hamiltonian cycle. \
                  FirstStartingNode follows the walk from its first item and keeps items as they \
                  are first met (default). BestStartingNode repeats this from every position of \
                  the walk and keeps the cheapest result. FastBestStartingNode removes immediate \
                  back-and-forth steps before searching for the best start (faster).",
    domain: "{FirstStartingNode, BestStartingNode, FastBestStartingNode}",
};

/// Double-tree approximation for metric matrices.
///
/// # Examples
///
/// ```
/// use u_tour::algorithm::TourAlgorithm;
/// use u_tour::approx::ApproxMetricTsp;
/// use u_tour::matrix::DistanceMatrix;
///
/// let metric = ApproxMetricTsp::new(DistanceMatrix::from([
///     [0.0, 1.0, 2.0],
///     [1.0, 0.0, 2.0],
///     [2.0, 2.0, 0.0],
/// ]));
/// assert!(metric.accepts());
///
/// let broken = ApproxMetricTsp::new(DistanceMatrix::from([
///     [0.0, 10.0, 1.0],
///     [10.0, 0.0, 1.0],
///     [1.0, 1.0, 0.0],
/// ]));
/// assert!(!broken.accepts());
/// ```
#[derive(Debug, Clone)]
pub struct ApproxMetricTsp {
    matrix: DistanceMatrix,
    config: ApproxConfig,
}

impl ApproxMetricTsp {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self::with_config(matrix, ApproxConfig::default())
    }

    pub fn with_config(matrix: DistanceMatrix, config: ApproxConfig) -> Self {
        Self { matrix, config }
    }

    pub fn config(&self) -> &ApproxConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ApproxConfig) {
        self.config = config;
    }

    /// Spanning tree edges, `i < j`, in the order Kruskal picked them.
    pub fn minimum_spanning_tree(&self) -> Vec<WeightedEdge> {
        minimum_spanning_tree(&self.matrix)
    }

    /// Total tree weight, a lower bound on the optimal tour of a metric
    /// instance.
    pub fn mst_weight(&self) -> f32 {
        self.minimum_spanning_tree().iter().map(|e| e.weight).sum()
    }

    /// Closed walk over the doubled tree, starting and ending at item 0.
    pub fn eulerian_circuit(&self) -> Vec<usize> {
        let tree = self.minimum_spanning_tree();
        eulerian_circuit(&DoubledTree::new(self.matrix.len(), &tree))
    }
}

impl TourAlgorithm for ApproxMetricTsp {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::ApproxMetric
    }

    fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Base check plus the triangle inequality over every ordered triple of
    /// distinct items. Asymmetry is allowed but logged, since the tree is
    /// built from the upper triangle only.
    fn accepts(&self) -> bool {
        if !self.matrix.is_valid_input() {
            return false;
        }
        if let Some((i, j, k)) = self.matrix.find_triangle_violation() {
            log::debug!(
                "triangle inequality violated: d[{i}][{j}] > d[{i}][{k}] + d[{k}][{j}]"
            );
            return false;
        }
        if !self.matrix.is_symmetric() {
            log::warn!(
                "distance matrix is asymmetric; symmetry is assumed when building the spanning tree"
            );
        }
        true
    }

    fn available_parameters(&self) -> Vec<ParameterDescriptor> {
        vec![SHORTCUT]
    }

    fn apply_parameters<S: AsRef<str>>(&mut self, tokens: &mut ParameterCursor<'_, S>) {
        self.config.shortcut = read_parameter(tokens, &SHORTCUT, |token| {
            token.parse::<ShortcutStrategy>().map_err(|e| e.to_string())
        })
        .unwrap_or_default();
    }

    fn compute_cycle(&self) -> Cycle {
        let n = self.matrix.len();
        if n == 0 {
            return Vec::new();
        }
        let walk = self.eulerian_circuit();
        match self.config.shortcut {
            ShortcutStrategy::FirstStartingNode => shortcut_from(&walk, 0, n),
            ShortcutStrategy::BestStartingNode => best_starting_node(&walk, &self.matrix),
            ShortcutStrategy::FastBestStartingNode => {
                best_starting_node(&collapse_backtracks(&walk), &self.matrix)
            }
        }
    }
}
