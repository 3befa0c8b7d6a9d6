use serde::Deserialize;

/// Directions API response body. Routes are ranked best-first; only the
/// fields the tracker consumes are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Total route distance in meters.
    pub distance: f64,
    #[serde(default)]
    pub duration: Option<f64>,
    pub geometry: Geometry,
}

/// GeoJSON LineString geometry as returned with `geometries=geojson`.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}
