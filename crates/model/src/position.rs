use serde::{Deserialize, Serialize};
use utility::geo;

/// A geographic coordinate in degrees, longitude first (GeoJSON order).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Great-circle distance in meters to another coordinate.
    pub fn distance_to(&self, other: &LngLat) -> f64 {
        geo::haversine_distance_m(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LngLat> for (f64, f64) {
    fn from(value: LngLat) -> Self {
        (value.lng, value.lat)
    }
}

/// The map viewport to restore on the next load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapFocus {
    pub lng: f64,
    pub lat: f64,
    pub zoom: f64,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            lng: -79.93775232392454,
            lat: 32.78183341484467,
            zoom: 14.0,
        }
    }
}
