//! Error taxonomy for tour evaluation and search.

use thiserror::Error as ThisError;

/// Errors produced while validating input, evaluating routes, or searching.
///
/// Every error is terminal for the call that produced it: the computation is
/// pure, so retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Caller-supplied matrix is malformed (non-square, negative, or non-finite).
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    /// A route references a location outside the matrix.
    #[error("route index {index} is out of bounds for {size} locations")]
    InvalidIndex {
        /// Offending location index.
        index: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// A zero-length route has no closing edge.
    #[error("cannot evaluate an empty route")]
    EmptyRoute,
    /// There are no locations to route.
    #[error("no locations to route")]
    DegenerateInput,
    /// The matrix exceeds the configured location limit.
    #[error("{size} locations exceeds the search limit of {limit}")]
    TooManyLocations {
        /// Matrix dimension.
        size: usize,
        /// Configured limit.
        limit: usize,
    },
    /// Location labels do not line up with the matrix dimension.
    #[error("{labels} location labels for a {size}x{size} distance matrix")]
    LabelMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// Failure outside the solver, such as encoding a report.
    #[error("{0}")]
    Other(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidMatrix`] from a description of the defect.
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    /// Builds an [`Error::Other`].
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::invalid_matrix("row 1 has 2 entries, expected 3").to_string(),
            "invalid distance matrix: row 1 has 2 entries, expected 3"
        );
        assert_eq!(
            Error::InvalidIndex { index: 7, size: 5 }.to_string(),
            "route index 7 is out of bounds for 5 locations"
        );
        assert_eq!(
            Error::TooManyLocations { size: 12, limit: 10 }.to_string(),
            "12 locations exceeds the search limit of 10"
        );
        assert_eq!(
            Error::LabelMismatch { labels: 4, size: 5 }.to_string(),
            "4 location labels for a 5x5 distance matrix"
        );
    }

    #[test]
    fn test_unit_variants() {
        assert_eq!(Error::EmptyRoute.to_string(), "cannot evaluate an empty route");
        assert_eq!(Error::DegenerateInput.to_string(), "no locations to route");
        assert_eq!(Error::other("disk full").to_string(), "disk full");
    }
}
