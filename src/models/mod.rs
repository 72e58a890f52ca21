//! Domain model types for tour problems.
//!
//! Provides labelled locations, routes as orderings of location indices,
//! scored tour results, and a network that ties labels to a distance matrix.

mod location;
mod network;
mod route;
mod tour;

pub use location::Location;
pub use network::Network;
pub use route::Route;
pub use tour::TourResult;
