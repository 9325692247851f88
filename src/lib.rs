//! Pluggable cyclic-ordering engine.
//!
//! Given an `n x n` cost matrix, compute a permutation of `0..n` read as a
//! closed tour that keeps the summed cost of adjacent items low (an
//! approximate Travelling Salesman solution). Three interchangeable
//! algorithms are provided:
//!
//! - **Greedy**: nearest-neighbour construction, optionally from every
//!   starting item.
//! - **ApproxMetric**: Kruskal spanning tree, doubled into an Eulerian
//!   multigraph, walked and shortcut. At most twice the optimum when the
//!   triangle inequality holds.
//! - **Simulated Annealing (SA)**: seeded stochastic local search with
//!   geometric cooling.
//!
//! # Architecture
//!
//! Every algorithm implements [`algorithm::TourAlgorithm`] and is bound to
//! one [`matrix::DistanceMatrix`] for its lifetime. [`registry`] maps tags
//! to instances and filters the variants that accept a given matrix.
//! Instances share no state, so independent requests can run on separate
//! threads; the crate itself performs no I/O and installs no logger
//! (diagnostics go through the `log` facade).

pub mod algorithm;
pub mod approx;
pub mod error;
pub mod greedy;
pub mod matrix;
mod property_tests;
pub mod registry;
pub mod sa;

pub use error::TourError;
