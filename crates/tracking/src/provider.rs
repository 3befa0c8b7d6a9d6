use async_trait::async_trait;
use model::LngLat;

use crate::ResolveError;

/// One route returned by a directions provider, best candidates first.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    pub distance_m: f64,
    /// The path shape in coordinate-list form. A usable candidate has at
    /// least two coordinates.
    pub coordinates: Vec<LngLat>,
}

/// A turn-by-turn directions service. Implementations issue one query per
/// call and perform no serialization of their own; callers gate overlapping
/// requests.
#[async_trait]
pub trait DirectionsProvider {
    /// Ranked walking routes between two coordinates. An empty list is a
    /// successful response that found no route.
    async fn walking_route(
        &self,
        from: LngLat,
        to: LngLat,
    ) -> Result<Vec<RouteCandidate>, ResolveError>;
}
