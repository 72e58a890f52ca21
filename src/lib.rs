//! # u-tsp
//!
//! Exact traveling salesman solver for small location sets. Every ordering
//! of the locations is scored as a closed tour and the shortest is returned.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, TourResult, Network)
//! - [`distance`] — Validated dense distance matrix
//! - [`evaluation`] — Closed-tour distance evaluation
//! - [`search`] — Permutation enumeration and exhaustive search
//! - [`dataset`] — Built-in sample network
//!
//! ## Example
//!
//! ```
//! use u_tsp::dataset::warehouse_network;
//! use u_tsp::search::solve;
//!
//! let network = warehouse_network().unwrap();
//! let best = solve(network.distances()).unwrap();
//! assert_eq!(best.distance(), 85.0);
//! ```

pub mod dataset;
pub mod distance;
mod error;
pub mod evaluation;
pub mod models;
pub mod search;

pub use error::{Error, Result};
