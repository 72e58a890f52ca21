//! Exhaustive tour search.
//!
//! # Algorithm
//!
//! Enumerate orderings of `0..n` lexicographically, score each closed tour,
//! and keep the first ordering whose distance is strictly lower than the
//! incumbent. Ties never replace the incumbent, so the result is the earliest
//! optimum in enumeration order.
//!
//! # Complexity
//!
//! O(n! · n) time for [`SearchStrategy::AllPermutations`], O((n-1)! · n) for
//! [`SearchStrategy::FixedStart`]. O(n) extra space: one working ordering
//! and one incumbent.

use serde::{Deserialize, Serialize};

use super::{next_permutation, SearchConfig, SearchStrategy};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{Route, TourResult};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate routes scored.
    pub evaluated: u64,
    /// Times the incumbent was replaced by a strictly shorter route.
    pub improvements: u64,
}

/// Best tour found by a search, with its counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    best: TourResult,
    stats: SearchStats,
}

impl SearchOutcome {
    /// The shortest tour, first-encountered on ties.
    pub fn best(&self) -> &TourResult {
        &self.best
    }

    /// Counters for this search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consumes the outcome, returning the best tour.
    pub fn into_best(self) -> TourResult {
        self.best
    }
}

/// Finds the shortest closed tour over all locations by scoring every
/// ordering.
///
/// Uses [`SearchStrategy::AllPermutations`] with no location limit.
///
/// # Errors
///
/// [`Error::InvalidMatrix`] if the matrix is malformed (checked before any
/// route is scored), [`Error::DegenerateInput`] if it has no locations.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::search::solve;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0, 1.0],
///     vec![1.0, 0.0, 1.0, 9.0],
///     vec![9.0, 1.0, 0.0, 1.0],
///     vec![1.0, 9.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let best = solve(&dm).unwrap();
/// assert_eq!(best.distance(), 4.0);
/// assert_eq!(best.route().stops(), &[0, 1, 2, 3]);
/// ```
pub fn solve(distances: &DistanceMatrix) -> Result<TourResult> {
    solve_with(distances, &SearchConfig::default()).map(SearchOutcome::into_best)
}

/// Finds the shortest closed tour using the given configuration.
///
/// # Errors
///
/// As [`solve`], plus [`Error::TooManyLocations`] when the matrix exceeds
/// [`SearchConfig::max_locations`].
pub fn solve_with(distances: &DistanceMatrix, config: &SearchConfig) -> Result<SearchOutcome> {
    distances.validate()?;

    let n = distances.size();
    if n == 0 {
        return Err(Error::DegenerateInput);
    }
    if let Some(limit) = config.max_locations() {
        if n > limit {
            return Err(Error::TooManyLocations { size: n, limit });
        }
    }

    let fixed = match config.strategy() {
        SearchStrategy::AllPermutations => 0,
        SearchStrategy::FixedStart => 1,
    };

    let evaluator = TourEvaluator::new(distances);
    let mut current: Vec<usize> = (0..n).collect();
    let mut incumbent = Incumbent::new(n);
    let mut stats = SearchStats::default();

    loop {
        let distance = evaluator.evaluate(&current)?;
        stats.evaluated += 1;
        if incumbent.offer(&current, distance) {
            stats.improvements += 1;
        }
        if !next_permutation(&mut current[fixed..]) {
            break;
        }
    }

    Ok(SearchOutcome {
        best: incumbent.into_result(),
        stats,
    })
}

/// Best-so-far route, owned by a single search.
struct Incumbent {
    stops: Vec<usize>,
    distance: Option<f64>,
}

impl Incumbent {
    fn new(n: usize) -> Self {
        Self {
            stops: Vec::with_capacity(n),
            distance: None,
        }
    }

    /// Keeps `stops` if strictly shorter than the incumbent.
    fn offer(&mut self, stops: &[usize], distance: f64) -> bool {
        let improves = match self.distance {
            Some(best) => distance < best,
            None => true,
        };
        if improves {
            self.stops.clear();
            self.stops.extend_from_slice(stops);
            self.distance = Some(distance);
        }
        improves
    }

    fn into_result(self) -> TourResult {
        TourResult::new(Route::new(self.stops), self.distance.unwrap_or(0.0))
    }
}
