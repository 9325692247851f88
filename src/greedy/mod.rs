//! Greedy nearest-neighbour construction.
//!
//! Starting from one item, repeatedly append the unvisited item that is
//! cheapest to place next. Ties go to the lowest index, so the result is
//! fully deterministic.
//!
//! With `exhaustive_start` the construction is repeated from every item
//! and the cheapest closed tour wins (the lowest start index on ties).
//!
//! | mode            | cost    |
//! |-----------------|---------|
//! | single start    | O(n^2)  |
//! | exhaustive      | O(n^3)  |

mod config;
mod solver;

pub use config::GreedyConfig;
pub use solver::GreedyNearestNeighbor;
