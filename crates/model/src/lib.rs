pub mod distance;
pub mod geometry;
pub mod marker;
pub mod position;
pub mod run;

pub use distance::{format_distance, FormattedDistance};
pub use geometry::LineString;
pub use marker::Marker;
pub use position::{LngLat, MapFocus};
pub use run::{CurrentRun, RunSegment, RunStart};
