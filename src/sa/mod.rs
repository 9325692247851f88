//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature cools, which lets the search leave local
//! optima early on.
//!
//! For tours the search starts from a seeded random permutation and moves
//! by swapping two positions. A worsening move of size `delta` is accepted
//! with probability `exp(-delta / (K * T))`, where `K` is the number of
//! moves per temperature level. The best tour ever visited is returned, so
//! its cost never exceeds that of the starting permutation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod solver;
mod types;

pub use config::{
    SaConfig, DEFAULT_COOLING_RATE, DEFAULT_INITIAL_TEMPERATURE, DEFAULT_ITERATIONS_PER_TEMPERATURE,
    DEFAULT_SEED, MIN_INITIAL_TEMPERATURE,
};
pub use runner::{SaResult, SaRunner};
pub use solver::{SimulatedAnnealing, TourProblem};
pub use types::SaProblem;
