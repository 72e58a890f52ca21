//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries must be finite and non-negative. Symmetry and a zero diagonal are
/// expected by convention but not enforced; see [`is_symmetric`] and
/// [`has_zero_diagonal`].
///
/// [`is_symmetric`]: DistanceMatrix::is_symmetric
/// [`has_zero_diagonal`]: DistanceMatrix::has_zero_diagonal
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 8.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; converted through [`DistanceMatrix::from_data`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Fails with [`Error::InvalidMatrix`] if any row length differs from the
    /// number of rows, or if an entry is negative or non-finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_matrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Fails with [`Error::InvalidMatrix`] if the data length doesn't match
    /// `size * size` or an entry is negative or non-finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Checks the shape and entry invariants.
    ///
    /// Matrices built with [`new`](Self::new) and [`set`](Self::set) are only
    /// checked when this is called. Deserialization always checks.
    pub fn validate(&self) -> Result<()> {
        let expected = self.size.checked_mul(self.size);
        if expected != Some(self.data.len()) {
            return Err(Error::invalid_matrix(format!(
                "{} entries cannot form a {}x{} matrix",
                self.data.len(),
                self.size,
                self.size
            )));
        }
        for (k, &d) in self.data.iter().enumerate() {
            let (i, j) = (k / self.size, k % self.size);
            if !d.is_finite() {
                return Err(Error::invalid_matrix(format!(
                    "entry ({i}, {j}) is not finite: {d}"
                )));
            }
            if d < 0.0 {
                return Err(Error::invalid_matrix(format!(
                    "entry ({i}, {j}) is negative: {d}"
                )));
            }
        }
        Ok(())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or [`Error::InvalidIndex`].
    pub fn try_get(&self, from: usize, to: usize) -> Result<f64> {
        for index in [from, to] {
            if index >= self.size {
                return Err(Error::InvalidIndex {
                    index,
                    size: self.size,
                });
            }
        }
        Ok(self.get(from, to))
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every self-distance is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 5.0],
            vec![8.0, 5.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_rows_negative() {
        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_matrix("entry (0, 1) is negative: -1")
        );
    }

    #[test]
    fn test_from_rows_nan() {
        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_rows_empty() {
        let dm = DistanceMatrix::from_rows(Vec::new()).expect("empty is well-formed");
        assert!(dm.is_empty());
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
        assert!(sample().has_zero_diagonal());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_validate_after_set() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 0, -3.0);
        assert!(matches!(dm.validate(), Err(Error::InvalidMatrix(_))));
    }

    #[test]
    fn test_try_get() {
        let dm = sample();
        assert_eq!(dm.try_get(2, 1), Ok(5.0));
        assert_eq!(dm.try_get(3, 0), Err(Error::InvalidIndex { index: 3, size: 3 }));
        assert_eq!(dm.try_get(0, 9), Err(Error::InvalidIndex { index: 9, size: 3 }));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_deserialize_valid() {
        let dm: DistanceMatrix =
            serde_json::from_str(r#"{"data":[0.0,5.0,5.0,0.0],"size":2}"#).expect("valid");
        assert_eq!(dm.get(1, 0), 5.0);
        let json = serde_json::to_string(&dm).expect("serialize");
        assert_eq!(serde_json::from_str::<DistanceMatrix>(&json).expect("valid"), dm);
    }

    #[test]
    fn test_deserialize_short_data_rejected() {
        let err = serde_json::from_str::<DistanceMatrix>(r#"{"data":[0.0],"size":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("cannot form a 2x2 matrix"), "{err}");
    }

    #[test]
    fn test_deserialize_negative_rejected() {
        let err = serde_json::from_str::<DistanceMatrix>(
            r#"{"data":[0.0,-5.0,-5.0,0.0],"size":2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("negative"), "{err}");
    }

    #[test]
    fn test_nonzero_diagonal() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 1, 4.0);
        assert!(!dm.has_zero_diagonal());
        assert!(dm.validate().is_ok());
    }
}
