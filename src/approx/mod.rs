//! Double-tree 2-approximation for metric instances.
//!
//! # Algorithm
//!
//! 1. Minimum spanning tree with Kruskal's algorithm over the undirected
//!    edges `(i, j)`, `i < j`, stably sorted by weight.
//! 2. Every tree edge is doubled so that all degrees are even.
//! 3. A closed Eulerian walk is extracted with Hierholzer's stack method.
//! 4. The walk is shortcut into a Hamiltonian cycle by skipping repeated
//!    items ([`ShortcutStrategy`]).
//!
//! When the triangle inequality holds the result costs at most twice the
//! optimum: the tree weighs no more than an optimal tour, the doubled walk
//! weighs twice the tree, and shortcutting never adds cost.
//!
//! The tree is built as if the matrix were symmetric (`distance[i][j]`
//! with `i < j`). Asymmetric input is accepted with a warning.
//!
//! # References
//!
//! - Kruskal (1956), "On the shortest spanning subtree of a graph"
//! - Rosenkrantz, Stearns & Lewis (1977), "An analysis of several heuristics
//!   for the traveling salesman problem"

mod config;
mod euler;
mod mst;
mod shortcut;
mod solver;

pub use config::{ApproxConfig, ShortcutStrategy};
pub use euler::{eulerian_circuit, DoubledTree};
pub use mst::{minimum_spanning_tree, DisjointSet};
pub use shortcut::{best_starting_node, collapse_backtracks, shortcut_from};
pub use solver::ApproxMetricTsp;
