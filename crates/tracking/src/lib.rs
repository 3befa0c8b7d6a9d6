use std::error;
use std::fmt;

pub mod animation;
pub mod coordinator;
pub mod persistence;
pub mod preferences;
pub mod provider;
pub mod resolver;
pub mod style;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use coordinator::RunCoordinator;
pub use provider::{DirectionsProvider, RouteCandidate};
pub use resolver::SegmentResolver;
pub use surface::MapSurface;

/// Failure of a routed segment resolution. The run is never mutated on a
/// failed resolution; callers surface these to the user and move on.
#[derive(Debug, Clone)]
pub enum ResolveError {
    /// The directions query succeeded but returned zero usable routes.
    NoRouteFound,
    /// Transport failure or non-success response from the directions
    /// provider, with whatever detail was available.
    Service(String),
}

impl error::Error for ResolveError {}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolveError::NoRouteFound => {
                write!(f, "No routes found between the two points.")
            }
            ResolveError::Service(detail) => {
                write!(f, "The directions service failed: {detail}")
            }
        }
    }
}
