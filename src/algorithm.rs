//! The capability every tour algorithm implements.
//!
//! An algorithm instance is bound to one [`DistanceMatrix`] for its whole
//! lifetime. The caller asks whether the matrix is acceptable, optionally
//! configures the instance through positional string tokens, and then asks
//! for a cycle:
//!
//! ```
//! use u_tour::algorithm::{ParameterCursor, TourAlgorithm};
//! use u_tour::greedy::GreedyNearestNeighbor;
//! use u_tour::matrix::DistanceMatrix;
//!
//! let matrix = DistanceMatrix::from([[0.0, 1.0, 2.0], [1.0, 0.0, 4.0], [1.0, 10.0, 0.0]]);
//! let mut greedy = GreedyNearestNeighbor::new(matrix);
//! assert!(greedy.accepts());
//!
//! let tokens = vec![Some("true".to_string())];
//! greedy.apply_parameters(&mut ParameterCursor::new(&tokens));
//! assert_eq!(greedy.compute_cycle(), vec![0, 1, 2]);
//! ```

use crate::matrix::DistanceMatrix;
use crate::registry::AlgorithmKind;

/// A closed tour: a permutation of `0..n`, the last item implicitly
/// followed by the first.
pub type Cycle = Vec<usize>;

/// Advisory description of one configuration slot.
///
/// Only the variant's own parser interprets tokens; `domain` is a
/// human-readable hint, never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub domain: &'static str,
}

/// Read position over an immutable token sequence.
///
/// Each parameter slot takes exactly one token, present or not. Reading
/// past the end yields `None` for every further slot.
#[derive(Debug)]
pub struct ParameterCursor<'a, S> {
    tokens: &'a [Option<S>],
    position: usize,
}

impl<'a, S: AsRef<str>> ParameterCursor<'a, S> {
    pub fn new(tokens: &'a [Option<S>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Takes the token for the next slot and advances.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self
            .tokens
            .get(self.position)
            .and_then(|t| t.as_ref())
            .map(|s| s.as_ref());
        self.position += 1;
        token
    }

    /// Number of slots consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

/// Reads one slot. Returns `None` when the token is absent or rejected by
/// `parse`, in which case the caller keeps its default.
pub(crate) fn read_parameter<S, T, F>(
    cursor: &mut ParameterCursor<'_, S>,
    descriptor: &ParameterDescriptor,
    parse: F,
) -> Option<T>
where
    S: AsRef<str>,
    F: FnOnce(&str) -> Result<T, String>,
{
    let Some(token) = cursor.next_token() else {
        log::debug!("no value for \"{}\", using default", descriptor.name);
        return None;
    };
    match parse(token.trim()) {
        Ok(value) => Some(value),
        Err(reason) => {
            log::warn!(
                "rejected value {:?} for \"{}\" ({}), using default",
                token,
                descriptor.name,
                reason
            );
            None
        }
    }
}

/// A cycle together with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub cycle: Cycle,
    pub cost: f32,
}

/// Shared contract of all tour algorithms.
pub trait TourAlgorithm {
    /// Tag of this variant.
    fn kind(&self) -> AlgorithmKind;

    /// The matrix this instance is bound to.
    fn matrix(&self) -> &DistanceMatrix;

    /// Whether the bound matrix is usable by this algorithm.
    ///
    /// The base check requires a non-empty square matrix with no negative
    /// off-diagonal entry. Never panics.
    fn accepts(&self) -> bool {
        self.matrix().is_valid_input()
    }

    /// Configuration slots, in the order [`apply_parameters`] reads them.
    ///
    /// [`apply_parameters`]: TourAlgorithm::apply_parameters
    fn available_parameters(&self) -> Vec<ParameterDescriptor> {
        Vec::new()
    }

    /// Consumes one token per descriptor. A missing or invalid token
    /// resets that slot to its default; nothing here fails.
    fn apply_parameters<S: AsRef<str>>(&mut self, _tokens: &mut ParameterCursor<'_, S>) {}

    /// Computes a full-length cycle. Only meaningful when
    /// [`accepts`](TourAlgorithm::accepts) is true.
    fn compute_cycle(&self) -> Cycle;

    /// Closed-tour cost of `cycle` under the bound matrix.
    fn cycle_cost(&self, cycle: &[usize]) -> f32 {
        self.matrix().cycle_cost(cycle)
    }
}
