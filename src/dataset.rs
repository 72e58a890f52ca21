//! Built-in sample network.

use crate::error::Result;
use crate::models::Network;

/// Labels of the delivery network returned by [`warehouse_network`].
pub const WAREHOUSE_LABELS: [&str; 5] = ["Warehouse", "Point A", "Point B", "Point C", "Point D"];

/// A warehouse and four delivery points with symmetric road distances.
///
/// # Examples
///
/// ```
/// use u_tsp::dataset::warehouse_network;
///
/// let network = warehouse_network().unwrap();
/// assert_eq!(network.len(), 5);
/// assert!(network.distances().is_symmetric(0.0));
/// ```
pub fn warehouse_network() -> Result<Network> {
    Network::new(
        WAREHOUSE_LABELS,
        vec![
            vec![0.0, 10.0, 15.0, 20.0, 25.0],
            vec![10.0, 0.0, 35.0, 25.0, 30.0],
            vec![15.0, 35.0, 0.0, 30.0, 20.0],
            vec![20.0, 25.0, 30.0, 0.0, 15.0],
            vec![25.0, 30.0, 20.0, 15.0, 0.0],
        ],
    )
}
