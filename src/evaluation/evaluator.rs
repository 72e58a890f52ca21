//! Closed-tour distance evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Route, TourResult};

/// Computes the total distance of a closed tour.
///
/// Sums the legs between consecutive stops, then adds the closing leg from
/// the last stop back to the first.
///
/// # Errors
///
/// [`Error::EmptyRoute`] if `route` is empty, [`Error::InvalidIndex`] if a
/// stop is outside the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::evaluate;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(evaluate(&[0, 1, 2], &dm).unwrap(), 12.0);
/// ```
pub fn evaluate(route: &[usize], distances: &DistanceMatrix) -> Result<f64> {
    TourEvaluator::new(distances).evaluate(route)
}

/// Scores routes against a borrowed distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// let evaluator = TourEvaluator::new(&dm);
/// assert_eq!(evaluator.edge_costs(&[0, 2, 1]).unwrap(), vec![4.0, 5.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// The matrix this evaluator reads from.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Total closed-tour distance of `route`. See [`evaluate`].
    pub fn evaluate(&self, route: &[usize]) -> Result<f64> {
        self.check(route)?;
        let mut total = 0.0;
        for pair in route.windows(2) {
            total += self.distances.get(pair[0], pair[1]);
        }
        total += self.distances.get(route[route.len() - 1], route[0]);
        Ok(total)
    }

    /// Cost of each leg in visit order, ending with the closing leg.
    pub fn edge_costs(&self, route: &[usize]) -> Result<Vec<f64>> {
        self.check(route)?;
        let n = route.len();
        Ok((0..n)
            .map(|i| self.distances.get(route[i], route[(i + 1) % n]))
            .collect())
    }

    /// Evaluates `route` and pairs it with its distance.
    pub fn score(&self, route: Route) -> Result<TourResult> {
        let distance = self.evaluate(route.stops())?;
        Ok(TourResult::new(route, distance))
    }

    fn check(&self, route: &[usize]) -> Result<()> {
        if route.is_empty() {
            return Err(Error::EmptyRoute);
        }
        let size = self.distances.size();
        match route.iter().find(|&&s| s >= size) {
            Some(&index) => Err(Error::InvalidIndex { index, size }),
            None => Ok(()),
        }
    }
}
