//! Drop-off locations and proximity search.

use super::distance::GeoPoint;

/// A place where recyclables can be dropped off.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOffPoint {
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
}

/// A drop-off point within a search radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyDrop<'a> {
    pub point: &'a DropOffPoint,
    pub distance_km: f64,
}

/// Registered drop-off points in insertion order.
///
/// Points are never deduplicated or removed.
#[derive(Debug, Default)]
pub struct DropOffRegistry {
    points: Vec<DropOffPoint>,
}

impl DropOffRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, point: DropOffPoint) -> &DropOffPoint {
        self.points.push(point);
        &self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[DropOffPoint] {
        &self.points
    }

    /// Points no further than `radius_km` from `origin`, in insertion order.
    pub fn find_nearby(&self, origin: GeoPoint, radius_km: f64) -> Vec<NearbyDrop<'_>> {
        self.points
            .iter()
            .filter_map(|point| {
                let distance_km = origin.distance_km(&point.location);
                (distance_km <= radius_km).then_some(NearbyDrop { point, distance_km })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
