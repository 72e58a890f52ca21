//! Location type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stop on a tour, identified by its row/column index in the distance matrix.
///
/// The label is opaque to the solver and only used for display.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let warehouse = Location::new(0, "Warehouse");
/// assert_eq!(warehouse.id(), 0);
/// assert_eq!(warehouse.to_string(), "Warehouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    label: String,
}

impl Location {
    /// Creates a location with the given matrix index and display label.
    pub fn new(id: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Matrix index of this location.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
