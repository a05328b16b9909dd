//! Geographic distance and drop-off location search.

mod distance;
mod registry;

pub use distance::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use registry::{DropOffPoint, DropOffRegistry, NearbyDrop};
