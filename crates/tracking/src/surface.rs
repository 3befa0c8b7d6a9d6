use model::{LngLat, Marker};
use uuid::Uuid;

/// The rendering capabilities the run tracker consumes from the map widget.
/// Line renderables are keyed by the segment id that created them; markers
/// are returned as owned handles (see [`model::Marker`]).
pub trait MapSurface {
    /// Add a line renderable with an initial geometry.
    fn add_line(&self, id: Uuid, coordinates: &[LngLat]);

    /// Replace the geometry of an existing line renderable.
    fn update_line(&self, id: Uuid, coordinates: &[LngLat]);

    fn set_line_visibility(&self, id: Uuid, visible: bool);

    /// Place a point marker. The start marker is visually distinct.
    fn add_marker(&self, position: LngLat, is_start: bool) -> Box<dyn Marker>;
}
