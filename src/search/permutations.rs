//! Lexicographic permutation enumeration.
//!
//! # Algorithm
//!
//! Find the longest non-increasing suffix, swap the element just before it
//! with the smallest larger element in the suffix, then reverse the suffix.
//! Starting from the sorted ordering this visits every ordering exactly once
//! in lexicographic order, using O(1) extra space per step.

use std::iter::FusedIterator;

use super::SearchStrategy;

/// Advances `items` to its lexicographic successor in place.
///
/// Returns `false` and leaves `items` unchanged if it is already the last
/// (non-increasing) ordering.
///
/// # Examples
///
/// ```
/// use u_tsp::search::next_permutation;
///
/// let mut p = vec![0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, vec![1, 0, 2]);
///
/// let mut last = vec![2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, vec![2, 1, 0]);
/// ```
pub fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let pivot = i - 1;
    let mut j = n - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

/// Number of candidate routes a strategy enumerates for `n` locations.
///
/// `n!` for [`SearchStrategy::AllPermutations`], `(n - 1)!` for
/// [`SearchStrategy::FixedStart`], zero when `n == 0`. Returns `None` if the
/// count overflows `u64`.
pub fn candidate_count(n: usize, strategy: SearchStrategy) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let free = match strategy {
        SearchStrategy::AllPermutations => n,
        SearchStrategy::FixedStart => n - 1,
    };
    (1..=free as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Lazy iterator over orderings of `0..n` in lexicographic order.
///
/// Each iterator is an independent enumeration; creating a new one restarts
/// from the sorted ordering.
///
/// # Examples
///
/// ```
/// use u_tsp::search::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[5], vec![2, 1, 0]);
///
/// let fixed: Vec<Vec<usize>> = Permutations::fixed_first(3).collect();
/// assert_eq!(fixed, vec![vec![0, 1, 2], vec![0, 2, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    fixed: usize,
    started: bool,
    done: bool,
    remaining: Option<u64>,
}

impl Permutations {
    /// All `n!` orderings of `0..n`.
    pub fn new(n: usize) -> Self {
        Self::for_strategy(n, SearchStrategy::AllPermutations)
    }

    /// The `(n - 1)!` orderings of `0..n` that begin with `0`.
    pub fn fixed_first(n: usize) -> Self {
        Self::for_strategy(n, SearchStrategy::FixedStart)
    }

    /// Orderings enumerated by `strategy`.
    pub fn for_strategy(n: usize, strategy: SearchStrategy) -> Self {
        let fixed = match strategy {
            SearchStrategy::AllPermutations => 0,
            SearchStrategy::FixedStart => n.min(1),
        };
        Self {
            current: (0..n).collect(),
            fixed,
            started: false,
            done: n == 0,
            remaining: candidate_count(n, strategy),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !next_permutation(&mut self.current[self.fixed..]) {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Permutations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_sequence() {
        let mut p = vec![0, 1, 2];
        let mut seen = vec![p.clone()];
        while next_permutation(&mut p) {
            seen.push(p.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_next_permutation_short() {
        let mut empty: Vec<usize> = Vec::new();
        assert!(!next_permutation(&mut empty));
        let mut one = vec![7];
        assert!(!next_permutation(&mut one));
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(candidate_count(0, SearchStrategy::AllPermutations), Some(0));
        assert_eq!(candidate_count(1, SearchStrategy::AllPermutations), Some(1));
        assert_eq!(candidate_count(5, SearchStrategy::AllPermutations), Some(120));
        assert_eq!(candidate_count(5, SearchStrategy::FixedStart), Some(24));
        assert_eq!(candidate_count(1, SearchStrategy::FixedStart), Some(1));
        assert_eq!(candidate_count(20, SearchStrategy::AllPermutations), Some(2_432_902_008_176_640_000));
        assert_eq!(candidate_count(21, SearchStrategy::AllPermutations), None);
    }

    #[test]
    fn test_permutations_empty() {
        assert_eq!(Permutations::new(0).count(), 0);
        assert_eq!(Permutations::fixed_first(0).count(), 0);
    }

    #[test]
    fn test_permutations_single() {
        assert_eq!(Permutations::new(1).collect::<Vec<_>>(), vec![vec![0]]);
        assert_eq!(Permutations::fixed_first(1).collect::<Vec<_>>(), vec![vec![0]]);
    }

    #[test]
    fn test_permutations_count_and_distinct() {
        let all: Vec<Vec<usize>> = Permutations::new(5).collect();
        assert_eq!(all.len(), 120);
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 120);
        // lexicographic order means the collected sequence is already sorted
        assert_eq!(sorted, all);
    }

    #[test]
    fn test_fixed_first_is_prefix_of_all() {
        let all: Vec<Vec<usize>> = Permutations::new(4).collect();
        let fixed: Vec<Vec<usize>> = Permutations::fixed_first(4).collect();
        assert_eq!(fixed.len(), 6);
        assert_eq!(&all[..6], &fixed[..]);
        assert!(fixed.iter().all(|p| p[0] == 0));
    }

    #[test]
    fn test_size_hint_exact() {
        let mut it = Permutations::new(4);
        assert_eq!(it.size_hint(), (24, Some(24)));
        it.next();
        assert_eq!(it.size_hint(), (23, Some(23)));
        assert_eq!(it.by_ref().count(), 23);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_restartable() {
        let first: Vec<Vec<usize>> = Permutations::new(3).collect();
        let second: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(first, second);
    }
}
