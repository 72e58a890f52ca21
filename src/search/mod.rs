//! Exact tour search by exhaustive enumeration.
//!
//! - [`solve`] / [`solve_with`] — Score every ordering and keep the shortest
//! - [`Permutations`] — Lazy lexicographic enumeration of orderings
//! - [`SearchConfig`] — Strategy and location limit

mod config;
mod exhaustive;
mod permutations;

pub use config::{SearchConfig, SearchStrategy};
pub use exhaustive::{solve, solve_with, SearchOutcome, SearchStats};
pub use permutations::{candidate_count, next_permutation, Permutations};
