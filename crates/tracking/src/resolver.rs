use std::sync::Arc;

use model::{LineString, LngLat, RunSegment};
use uuid::Uuid;

use crate::provider::DirectionsProvider;
use crate::ResolveError;

/// Turns a pair of points into a fully resolved segment, either through the
/// directions provider or as a straight geodesic line. Produced segments
/// have an id, geometry and distance but no marker and no run; attaching
/// both is the caller's job once the segment has been rendered.
pub struct SegmentResolver<P> {
    provider: Arc<P>,
}

impl<P> SegmentResolver<P>
where
    P: DirectionsProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolve the next segment with a single walking directions query.
    /// The best-ranked route wins. A successful query with no usable route
    /// is `ResolveError::NoRouteFound`; transport and non-success responses
    /// surface as `ResolveError::Service`.
    pub async fn resolve_by_route(
        &self,
        from: LngLat,
        to: LngLat,
    ) -> Result<RunSegment, ResolveError> {
        let candidates = self.provider.walking_route(from, to).await?;
        let route = candidates
            .into_iter()
            .next()
            .filter(|candidate| candidate.coordinates.len() >= 2)
            .ok_or(ResolveError::NoRouteFound)?;

        // Routing may snap away from the clicked point; the segment ends
        // where the route does, so the marker and the next leg line up.
        let end = match route.coordinates.last() {
            Some(coordinate) => *coordinate,
            None => return Err(ResolveError::NoRouteFound),
        };
        Ok(RunSegment::new(
            Uuid::new_v4(),
            end,
            route.distance_m,
            LineString::new(route.coordinates),
            true,
        ))
    }

    /// Resolve the next segment as the straight line between the two
    /// points. Never fails; identical points yield a zero-length two-point
    /// segment.
    pub fn resolve_by_straight_line(&self, from: LngLat, to: LngLat) -> RunSegment {
        let geometry = LineString::straight(from, to);
        let distance = geometry.length_m();
        RunSegment::new(Uuid::new_v4(), to, distance, geometry, false)
    }
}
