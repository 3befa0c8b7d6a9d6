/// Handle to a point marker placed on the map surface. A marker is
/// exclusively owned by the run entity it was created for; dropping the
/// entity without calling `remove` leaves the marker on the map, so owners
/// release explicitly.
pub trait Marker {
    /// Remove the marker from the map surface.
    fn remove(&mut self);
}
