//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of location indices forming a closed tour.
///
/// The tour starts at `stops()[0]` and implicitly returns to it after the
/// last stop; the closing edge is not stored.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Route;
///
/// let route = Route::new(vec![2, 0, 1]);
/// assert_eq!(route.len(), 3);
/// assert!(route.is_permutation(3));
/// assert_eq!(route.rotated_to(0).unwrap().stops(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route visiting `stops` in order.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// The route `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// Location indices in visit order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Index of the first stop, if any.
    pub fn start(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Returns `true` if every index in `0..n` appears exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.stops.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &s in &self.stops {
            if s >= n || seen[s] {
                return false;
            }
            seen[s] = true;
        }
        true
    }

    /// Returns the same cyclic tour rotated so that it begins at `start`.
    ///
    /// Returns `None` if `start` is not on the route.
    pub fn rotated_to(&self, start: usize) -> Option<Self> {
        let pos = self.stops.iter().position(|&s| s == start)?;
        let mut stops = self.stops.clone();
        stops.rotate_left(pos);
        Some(Self::new(stops))
    }

    /// Returns `true` if `other` visits the same cycle in the same direction.
    pub fn is_rotation_of(&self, other: &Route) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match self.start() {
            None => true,
            Some(first) => other
                .rotated_to(first)
                .is_some_and(|rotated| rotated.stops == self.stops),
        }
    }

    /// Consumes the route, returning its stops.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }
}

impl From<Vec<usize>> for Route {
    fn from(stops: Vec<usize>) -> Self {
        Self::new(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.start(), None);
        assert!(r.is_permutation(0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Route::identity(4).stops(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Route::new(vec![3, 1, 0, 2]).is_permutation(4));
        assert!(!Route::new(vec![0, 1, 1]).is_permutation(3));
        assert!(!Route::new(vec![0, 1, 3]).is_permutation(3));
        assert!(!Route::new(vec![0, 1]).is_permutation(3));
    }

    #[test]
    fn test_rotated_to() {
        let r = Route::new(vec![3, 4, 0, 1, 2]);
        assert_eq!(r.rotated_to(0).expect("on route").stops(), &[0, 1, 2, 3, 4]);
        assert_eq!(r.rotated_to(4).expect("on route").stops(), &[4, 0, 1, 2, 3]);
        assert!(r.rotated_to(9).is_none());
    }

    #[test]
    fn test_is_rotation_of() {
        let a = Route::new(vec![0, 1, 3, 4, 2]);
        let b = Route::new(vec![4, 2, 0, 1, 3]);
        let reversed = Route::new(vec![0, 2, 4, 3, 1]);
        assert!(a.is_rotation_of(&b));
        assert!(b.is_rotation_of(&a));
        assert!(!a.is_rotation_of(&reversed));
    }

    #[test]
    fn test_serde_transparent() {
        let r = Route::new(vec![0, 2, 1]);
        let json = serde_json::to_string(&r).expect("serialize");
        assert_eq!(json, "[0,2,1]");
        let back: Route = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, r);
    }
}
