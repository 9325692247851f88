//! Variant tags, the closed algorithm set and its factory.
//!
//! The caller-facing selection flow is:
//!
//! 1. [`usable_variants`] (or [`common_usable_kinds`] for several
//!    matrices that must share one algorithm),
//! 2. [`TourAlgorithm::available_parameters`] on the chosen variant,
//! 3. [`Algorithm::configure`] with one token per descriptor,
//! 4. [`Algorithm::solve`] or [`TourAlgorithm::compute_cycle`].
//!
//! ```
//! use u_tour::algorithm::TourAlgorithm;
//! use u_tour::matrix::DistanceMatrix;
//! use u_tour::registry::{self, AlgorithmKind};
//!
//! let matrix = DistanceMatrix::from([
//!     [0.0, 10.0, 1.0],
//!     [10.0, 0.0, 1.0],
//!     [1.0, 1.0, 0.0],
//! ]);
//! let kinds: Vec<_> = registry::usable_variants(&matrix).iter().map(|a| a.kind()).collect();
//! assert_eq!(kinds, vec![AlgorithmKind::Greedy, AlgorithmKind::SimulatedAnnealing]);
//!
//! let mut greedy = registry::create(AlgorithmKind::Greedy, matrix);
//! greedy.configure(&[Some("false")]);
//! let solution = greedy.solve().unwrap();
//! assert_eq!(solution.cycle.len(), 3);
//! ```

use crate::algorithm::{Cycle, ParameterCursor, ParameterDescriptor, Solution, TourAlgorithm};
use crate::approx::ApproxMetricTsp;
use crate::error::TourError;
use crate::greedy::GreedyNearestNeighbor;
use crate::matrix::DistanceMatrix;
use crate::sa::SimulatedAnnealing;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tag of each algorithm variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    /// Greedy nearest neighbour.
    Greedy,
    /// MST double-tree 2-approximation.
    ApproxMetric,
    /// Simulated annealing.
    SimulatedAnnealing,
}

impl AlgorithmKind {
    /// Every tag, in declaration order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Greedy,
        AlgorithmKind::ApproxMetric,
        AlgorithmKind::SimulatedAnnealing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Greedy => "GREEDY",
            AlgorithmKind::ApproxMetric => "KRUSKAL_APPROX",
            AlgorithmKind::SimulatedAnnealing => "SIMULATED_ANNEALING",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = TourError;

    /// Accepts the upper-case tag (`KRUSKAL_APPROX`) in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TourError::UnknownVariant(s.to_string()))
    }
}

/// One algorithm instance bound to its matrix.
#[derive(Debug, Clone)]
pub enum Algorithm {
    Greedy(GreedyNearestNeighbor),
    ApproxMetric(ApproxMetricTsp),
    SimulatedAnnealing(SimulatedAnnealing),
}

macro_rules! dispatch {
    ($self:expr, $alg:ident => $body:expr) => {
        match $self {
            Algorithm::Greedy($alg) => $body,
            Algorithm::ApproxMetric($alg) => $body,
            Algorithm::SimulatedAnnealing($alg) => $body,
        }
    };
}

impl Algorithm {
    /// Applies a whole token sequence. Returns how many slots were read.
    pub fn configure<S: AsRef<str>>(&mut self, tokens: &[Option<S>]) -> usize {
        let mut cursor = ParameterCursor::new(tokens);
        self.apply_parameters(&mut cursor);
        if cursor.remaining() > 0 {
            log::debug!("{}: ignoring {} extra tokens", self.kind(), cursor.remaining());
        }
        cursor.position()
    }

    /// Checked run: fails with [`TourError::Rejected`] when the matrix is
    /// not accepted.
    pub fn solve(&self) -> Result<Solution, TourError> {
        if !self.accepts() {
            return Err(TourError::Rejected(self.kind()));
        }
        let cycle = self.compute_cycle();
        let cost = self.cycle_cost(&cycle);
        Ok(Solution { cycle, cost })
    }
}

impl TourAlgorithm for Algorithm {
    fn kind(&self) -> AlgorithmKind {
        dispatch!(self, a => a.kind())
    }

    fn matrix(&self) -> &DistanceMatrix {
        dispatch!(self, a => a.matrix())
    }

    fn accepts(&self) -> bool {
        dispatch!(self, a => a.accepts())
    }

    fn available_parameters(&self) -> Vec<ParameterDescriptor> {
        dispatch!(self, a => a.available_parameters())
    }

    fn apply_parameters<S: AsRef<str>>(&mut self, tokens: &mut ParameterCursor<'_, S>) {
        dispatch!(self, a => a.apply_parameters(tokens))
    }

    fn compute_cycle(&self) -> Cycle {
        dispatch!(self, a => a.compute_cycle())
    }
}

impl From<GreedyNearestNeighbor> for Algorithm {
    fn from(a: GreedyNearestNeighbor) -> Self {
        Algorithm::Greedy(a)
    }
}

impl From<ApproxMetricTsp> for Algorithm {
    fn from(a: ApproxMetricTsp) -> Self {
        Algorithm::ApproxMetric(a)
    }
}

impl From<SimulatedAnnealing> for Algorithm {
    fn from(a: SimulatedAnnealing) -> Self {
        Algorithm::SimulatedAnnealing(a)
    }
}

/// Builds the variant `kind` over `matrix` with default settings.
pub fn create(kind: AlgorithmKind, matrix: DistanceMatrix) -> Algorithm {
    match kind {
        AlgorithmKind::Greedy => GreedyNearestNeighbor::new(matrix).into(),
        AlgorithmKind::ApproxMetric => ApproxMetricTsp::new(matrix).into(),
        AlgorithmKind::SimulatedAnnealing => SimulatedAnnealing::new(matrix).into(),
    }
}

/// Like [`create`], from a textual tag.
pub fn create_by_name(name: &str, matrix: DistanceMatrix) -> Result<Algorithm, TourError> {
    Ok(create(name.parse()?, matrix))
}

/// One instance per variant, each with its own copy of `matrix`.
pub fn all_variants(matrix: &DistanceMatrix) -> Vec<Algorithm> {
    AlgorithmKind::ALL
        .into_iter()
        .map(|kind| create(kind, matrix.clone()))
        .collect()
}

/// The variants of [`all_variants`] that accept `matrix`.
pub fn usable_variants(matrix: &DistanceMatrix) -> Vec<Algorithm> {
    all_variants(matrix)
        .into_iter()
        .filter(|a| a.accepts())
        .collect()
}

/// Tags of [`usable_variants`].
pub fn usable_kinds(matrix: &DistanceMatrix) -> Vec<AlgorithmKind> {
    usable_variants(matrix).iter().map(|a| a.kind()).collect()
}

/// Tags usable for every one of `matrices`, in declaration order. Empty for
/// an empty slice.
pub fn common_usable_kinds(matrices: &[DistanceMatrix]) -> Vec<AlgorithmKind> {
    if matrices.is_empty() {
        return Vec::new();
    }
    let per_matrix: Vec<Vec<AlgorithmKind>> = matrices.iter().map(usable_kinds).collect();
    AlgorithmKind::ALL
        .into_iter()
        .filter(|kind| per_matrix.iter().all(|kinds| kinds.contains(kind)))
        .collect()
}

/// Runs `kind` on each matrix with its own freshly configured instance.
///
/// Every matrix is checked before anything runs, so either all solutions
/// come back or none do. With the `parallel` feature the runs are spread
/// over the rayon pool.
pub fn solve_all<S: AsRef<str>>(
    kind: AlgorithmKind,
    matrices: &[DistanceMatrix],
    tokens: &[Option<S>],
) -> Result<Vec<Solution>, TourError> {
    if matrices.is_empty() {
        return Err(TourError::EmptySelection);
    }
    let mut algorithms: Vec<Algorithm> = matrices
        .iter()
        .map(|m| create(kind, m.clone()))
        .collect();
    if algorithms.iter().any(|a| !a.accepts()) {
        return Err(TourError::Rejected(kind));
    }
    for algorithm in &mut algorithms {
        algorithm.configure(tokens);
    }

    #[cfg(feature = "parallel")]
    let iter = algorithms.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = algorithms.iter();

    Ok(iter
        .map(|a| {
            let cycle = a.compute_cycle();
            let cost = a.cycle_cost(&cycle);
            Solution { cycle, cost }
        })
        .collect())
}
