//! Tour result type.

use serde::{Deserialize, Serialize};

use super::{Location, Route};
use crate::error::{Error, Result};

/// A route paired with its total closed-tour distance.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Location, Route, TourResult};
///
/// let locations = vec![Location::new(0, "Depot"), Location::new(1, "Shop")];
/// let tour = TourResult::new(Route::new(vec![0, 1]), 12.0);
/// assert_eq!(tour.describe(&locations, " -> ").unwrap(), "Depot -> Shop -> Depot");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResult {
    route: Route,
    distance: f64,
}

impl TourResult {
    /// Creates a tour result.
    pub fn new(route: Route, distance: f64) -> Self {
        Self { route, distance }
    }

    /// The visiting order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total distance including the closing edge.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Consumes the result, returning its parts.
    pub fn into_parts(self) -> (Route, f64) {
        (self.route, self.distance)
    }

    /// Labels of the visited locations, in visit order.
    ///
    /// Fails with [`Error::LabelMismatch`] if `locations` does not have one
    /// entry per stop, or [`Error::InvalidIndex`] if a stop has no location.
    pub fn labels<'a>(&self, locations: &'a [Location]) -> Result<Vec<&'a str>> {
        if locations.len() != self.route.len() {
            return Err(Error::LabelMismatch {
                labels: locations.len(),
                size: self.route.len(),
            });
        }
        self.route
            .stops()
            .iter()
            .map(|&s| {
                locations.get(s).map(Location::label).ok_or(Error::InvalidIndex {
                    index: s,
                    size: locations.len(),
                })
            })
            .collect()
    }

    /// Joins the visited labels with `separator`, repeating the start label at
    /// the end to show the return leg.
    pub fn describe(&self, locations: &[Location], separator: &str) -> Result<String> {
        let mut labels = self.labels(locations)?;
        if let Some(&first) = labels.first() {
            labels.push(first);
        }
        Ok(labels.join(separator))
    }
}
