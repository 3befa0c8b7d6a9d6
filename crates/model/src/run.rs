use uuid::Uuid;

use crate::geometry::LineString;
use crate::marker::Marker;
use crate::position::LngLat;

/// The origin of a run: the first point the user placed, together with the
/// map marker owned by it.
pub struct RunStart {
    pub position: LngLat,
    marker: Option<Box<dyn Marker>>,
}

impl RunStart {
    pub fn new(position: LngLat) -> Self {
        Self {
            position,
            marker: None,
        }
    }

    /// Attach a marker, removing any marker previously attached. At most
    /// one live marker is associated at any time.
    pub fn set_marker(&mut self, new_marker: Box<dyn Marker>) {
        if let Some(mut previous) = self.marker.take() {
            previous.remove();
        }
        self.marker = Some(new_marker);
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Remove the attached marker from the map, if any.
    pub fn release_marker(&mut self) {
        if let Some(mut marker) = self.marker.take() {
            marker.remove();
        }
    }
}

/// One leg of the run. Embeds a marked end point (the same record a run
/// start carries) plus the resolved shape and distance of the leg.
pub struct RunSegment {
    pub id: Uuid,
    pub end: RunStart,
    pub distance_meters: f64,
    pub geometry: LineString,
    pub follows_roads: bool,
}

impl RunSegment {
    pub fn new(
        id: Uuid,
        end_position: LngLat,
        distance_meters: f64,
        geometry: LineString,
        follows_roads: bool,
    ) -> Self {
        Self {
            id,
            end: RunStart::new(end_position),
            distance_meters,
            geometry,
            follows_roads,
        }
    }

    pub fn end_position(&self) -> LngLat {
        self.end.position
    }
}

/// The run under construction: one start and its ordered segments, with the
/// total distance maintained incrementally as segments come and go.
pub struct CurrentRun {
    pub start: RunStart,
    pub segments: Vec<RunSegment>,
    distance: f64,
}

impl CurrentRun {
    pub fn new(start: RunStart) -> Self {
        Self {
            start,
            segments: Vec::new(),
            distance: 0.0,
        }
    }

    /// Accumulated distance of all segments, in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The end of the last segment, or the start position if no segment has
    /// been added yet. This is where the next segment departs from.
    pub fn last_position(&self) -> LngLat {
        match self.segments.last() {
            Some(segment) => segment.end_position(),
            None => self.start.position,
        }
    }

    /// Append a resolved segment and take ownership of its end marker.
    pub fn add_segment(&mut self, mut segment: RunSegment, marker: Box<dyn Marker>) {
        segment.end.set_marker(marker);
        self.distance += segment.distance_meters;
        self.segments.push(segment);
    }

    /// Pop the most recently added segment, removing its marker from the map
    /// and deducting its distance. Returns `None` when no segments remain;
    /// the start itself is never touched here, so a `None` is the caller's
    /// cue to tear down the whole run.
    pub fn remove_last_segment(&mut self) -> Option<RunSegment> {
        let mut removed = self.segments.pop()?;
        self.distance -= removed.distance_meters;
        if self.distance < 0.0 {
            self.distance = 0.0;
        }
        removed.end.release_marker();
        Some(removed)
    }
}
