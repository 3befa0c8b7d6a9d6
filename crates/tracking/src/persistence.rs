use model::{CurrentRun, LngLat, RunStart};
use serde::{Deserialize, Serialize};

use crate::provider::DirectionsProvider;
use crate::resolver::SegmentResolver;
use crate::surface::MapSurface;

/// One persisted segment: its end coordinate and which resolution strategy
/// produced it. Geometry is never persisted; it is re-resolved on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSegment {
    pub lng: f64,
    pub lat: f64,
    pub follows_roads: bool,
}

/// Flat snapshot of a run, small enough for a preference store and tolerant
/// of directions-service geometry format changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRun {
    pub start: LngLat,
    pub distance: f64,
    pub follow_roads: bool,
    pub segments: Vec<PersistedSegment>,
}

/// Serialize a run (plus the follow-roads preference at the time of saving)
/// into the snapshot string. An absent run encodes as an empty object.
pub fn encode(run: Option<&CurrentRun>, follow_roads: bool) -> String {
    let Some(run) = run else {
        return "{}".to_owned();
    };

    let record = PersistedRun {
        start: run.start.position,
        distance: run.distance(),
        follow_roads,
        segments: run
            .segments
            .iter()
            .map(|segment| {
                let end = segment.end_position();
                PersistedSegment {
                    lng: end.lng,
                    lat: end.lat,
                    follows_roads: segment.follows_roads,
                }
            })
            .collect(),
    };

    match serde_json::to_string(&record) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!("could not encode run snapshot: {e}");
            "{}".to_owned()
        }
    }
}

/// Parse a snapshot string. Failure is total: anything malformed or missing
/// yields `None` ("no saved run") rather than a partial run, and is never
/// surfaced to the user.
pub fn decode(raw: &str) -> Option<PersistedRun> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("no restorable run snapshot: {e}");
            None
        }
    }
}

/// Rebuild a run from a snapshot: re-create the start and its marker, then
/// replay every segment through the resolver per its flag, in original
/// order, submitting full geometries directly (reload is not re-animated).
///
/// A routed segment that no longer resolves degrades to a straight line for
/// that leg; losing one leg's shape beats dropping the whole run.
pub async fn restore_run<P, S>(
    record: &PersistedRun,
    resolver: &SegmentResolver<P>,
    surface: &S,
) -> CurrentRun
where
    P: DirectionsProvider,
    S: MapSurface,
{
    let mut start = RunStart::new(record.start);
    start.set_marker(surface.add_marker(record.start, true));
    let mut run = CurrentRun::new(start);

    for persisted in &record.segments {
        let from = run.last_position();
        let to = LngLat::new(persisted.lng, persisted.lat);

        let segment = if persisted.follows_roads {
            match resolver.resolve_by_route(from, to).await {
                Ok(segment) => segment,
                Err(e) => {
                    log::warn!("could not re-resolve routed segment on restore, falling back to a straight line: {e}");
                    resolver.resolve_by_straight_line(from, to)
                }
            }
        } else {
            resolver.resolve_by_straight_line(from, to)
        };

        surface.add_line(segment.id, &segment.geometry.coordinates);
        let marker = surface.add_marker(segment.end_position(), false);
        run.add_segment(segment, marker);
    }

    run
}
