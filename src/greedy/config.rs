//! Greedy configuration.

/// Configuration for [`GreedyNearestNeighbor`](super::GreedyNearestNeighbor).
///
/// # Examples
///
/// ```
/// use u_tour::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_exhaustive_start(true);
/// assert!(config.exhaustive_start);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Try every item as the starting point instead of only item 0.
    pub exhaustive_start: bool,
}

impl GreedyConfig {
    pub fn with_exhaustive_start(mut self, exhaustive: bool) -> Self {
        self.exhaustive_start = exhaustive;
        self
    }
}

/// Parses the `{true, false}` token domain.
pub(crate) fn parse_bool(token: &str) -> Result<bool, String> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true or false, got {other:?}")),
    }
}
