//! Labelled locations with their distance matrix.

use serde::{Deserialize, Serialize};

use super::{Location, TourResult};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::search::{self, SearchConfig, SearchOutcome};

/// A validated set of locations and the distances between them.
///
/// Location `i` corresponds to row and column `i` of the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Network;
/// use u_tsp::search::SearchConfig;
///
/// let network = Network::new(
///     ["Depot", "North", "East"],
///     vec![
///         vec![0.0, 4.0, 3.0],
///         vec![4.0, 0.0, 5.0],
///         vec![3.0, 5.0, 0.0],
///     ],
/// )
/// .unwrap();
/// let outcome = network.solve_with(&SearchConfig::default()).unwrap();
/// assert_eq!(outcome.best().distance(), 12.0);
/// assert_eq!(
///     network.describe(outcome.best(), " -> ").unwrap(),
///     "Depot -> North -> East -> Depot"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNetwork")]
pub struct Network {
    locations: Vec<Location>,
    distances: DistanceMatrix,
}

/// Unchecked wire form; converted through [`Network::from_parts`].
#[derive(Deserialize)]
struct RawNetwork {
    locations: Vec<Location>,
    distances: DistanceMatrix,
}

impl TryFrom<RawNetwork> for Network {
    type Error = Error;

    fn try_from(raw: RawNetwork) -> Result<Self> {
        Self::from_parts(raw.locations, raw.distances)
    }
}

impl Network {
    /// Builds a network from labels and nested distance rows.
    ///
    /// Labels are assigned indices in order.
    pub fn new<I, S>(labels: I, rows: Vec<Vec<f64>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locations = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Location::new(i, label))
            .collect();
        Self::from_parts(locations, DistanceMatrix::from_rows(rows)?)
    }

    /// Pairs existing locations with a matrix.
    ///
    /// Fails with [`Error::LabelMismatch`] if the counts differ,
    /// [`Error::InvalidIndex`] if a location's id does not match its position,
    /// or [`Error::InvalidMatrix`] if the matrix is malformed.
    pub fn from_parts(locations: Vec<Location>, distances: DistanceMatrix) -> Result<Self> {
        distances.validate()?;
        if locations.len() != distances.size() {
            return Err(Error::LabelMismatch {
                labels: locations.len(),
                size: distances.size(),
            });
        }
        if let Some(loc) = locations.iter().enumerate().find(|(i, l)| l.id() != *i) {
            return Err(Error::InvalidIndex {
                index: loc.1.id(),
                size: distances.size(),
            });
        }
        Ok(Self {
            locations,
            distances,
        })
    }

    /// Locations in matrix order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Distances between locations.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if there are no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Runs the exhaustive search over this network.
    pub fn solve_with(&self, config: &SearchConfig) -> Result<SearchOutcome> {
        search::solve_with(&self.distances, config)
    }

    /// Renders `tour` using this network's labels.
    pub fn describe(&self, tour: &TourResult, separator: &str) -> Result<String> {
        tour.describe(&self.locations, separator)
    }
}
