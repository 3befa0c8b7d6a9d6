use serde::{Deserialize, Serialize};

use crate::position::LngLat;

/// Ordered path shape of a segment. Always holds at least two points:
/// exactly two for a straight segment, many for a routed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<LngLat>,
}

impl LineString {
    pub fn new(coordinates: Vec<LngLat>) -> Self {
        Self { coordinates }
    }

    /// The two-point line between `from` and `to`.
    pub fn straight(from: LngLat, to: LngLat) -> Self {
        Self {
            coordinates: vec![from, to],
        }
    }

    pub fn first(&self) -> Option<&LngLat> {
        self.coordinates.first()
    }

    pub fn last(&self) -> Option<&LngLat> {
        self.coordinates.last()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Sum of the great-circle lengths of all consecutive legs, in meters.
    pub fn length_m(&self) -> f64 {
        let pairs = self
            .coordinates
            .iter()
            .map(|c| (c.lng, c.lat))
            .collect::<Vec<_>>();
        utility::geo::path_length_m(&pairs)
    }
}
