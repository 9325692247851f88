//! Shortcut strategy selection.

use crate::error::TourError;
use std::fmt;
use std::str::FromStr;

/// How an Eulerian walk is turned into a Hamiltonian cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortcutStrategy {
    /// One left-to-right scan from the walk's first position.
    #[default]
    FirstStartingNode,

    /// Scan from every offset of the walk and keep the cheapest cycle.
    BestStartingNode,

    /// Like `BestStartingNode`, after collapsing immediate
    /// back-and-forth repetitions so there are fewer offsets to try.
    FastBestStartingNode,
}

impl ShortcutStrategy {
    pub const ALL: [ShortcutStrategy; 3] = [
        ShortcutStrategy::FirstStartingNode,
        ShortcutStrategy::BestStartingNode,
        ShortcutStrategy::FastBestStartingNode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShortcutStrategy::FirstStartingNode => "FirstStartingNode",
            ShortcutStrategy::BestStartingNode => "BestStartingNode",
            ShortcutStrategy::FastBestStartingNode => "FastBestStartingNode",
        }
    }
}

impl fmt::Display for ShortcutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShortcutStrategy {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| TourError::InvalidParameter {
                name: "shortcut strategy",
                reason: format!("unknown strategy {s:?}"),
            })
    }
}

/// Configuration for [`ApproxMetricTsp`](super::ApproxMetricTsp).
///
/// # Examples
///
/// ```
/// use u_tour::approx::{ApproxConfig, ShortcutStrategy};
///
/// let config = ApproxConfig::default().with_shortcut(ShortcutStrategy::BestStartingNode);
/// assert_eq!(config.shortcut, ShortcutStrategy::BestStartingNode);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproxConfig {
    pub shortcut: ShortcutStrategy,
}

impl ApproxConfig {
    pub fn with_shortcut(mut self, shortcut: ShortcutStrategy) -> Self {
        self.shortcut = shortcut;
        self
    }
}
