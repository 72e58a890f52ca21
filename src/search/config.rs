//! Search configuration.

use serde::{Deserialize, Serialize};

/// Which orderings the exhaustive search enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Every ordering of every location, `n!` candidates.
    ///
    /// Each distinct cycle is scored once per rotation.
    #[default]
    AllPermutations,
    /// Location 0 first, remaining locations permuted, `(n - 1)!` candidates.
    ///
    /// Finds the same first-encountered optimum as
    /// [`AllPermutations`](Self::AllPermutations) whenever rotating a tour
    /// leaves its summed distance unchanged.
    FixedStart,
}

/// Options for [`solve_with`](super::solve_with).
///
/// # Examples
///
/// ```
/// use u_tsp::search::{SearchConfig, SearchStrategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(SearchStrategy::FixedStart)
///     .with_max_locations(10);
/// assert_eq!(config.strategy(), SearchStrategy::FixedStart);
/// assert_eq!(config.max_locations(), Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    strategy: SearchStrategy,
    max_locations: Option<usize>,
}

impl SearchConfig {
    /// Sets the enumeration strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Rejects matrices with more than `limit` locations.
    pub fn with_max_locations(mut self, limit: usize) -> Self {
        self.max_locations = Some(limit);
        self
    }

    /// Enumeration strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Location limit, if any.
    pub fn max_locations(&self) -> Option<usize> {
        self.max_locations
    }
}
