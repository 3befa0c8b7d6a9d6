use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use model::{LngLat, Marker};
use uuid::Uuid;

use crate::preferences::PreferenceStore;
use crate::provider::{DirectionsProvider, RouteCandidate};
use crate::surface::MapSurface;
use crate::ResolveError;

/// Directions provider stub: answers from a queue, then from a default.
pub struct StubProvider {
    responses: Mutex<VecDeque<Result<Vec<RouteCandidate>, ResolveError>>>,
    default: Result<Vec<RouteCandidate>, ResolveError>,
    calls: Mutex<Vec<(LngLat, LngLat)>>,
}

impl StubProvider {
    fn with_default(default: Result<Vec<RouteCandidate>, ResolveError>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            default,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with one route of the given distance and shape.
    pub fn with_route(distance_m: f64, coordinates: Vec<LngLat>) -> Self {
        Self::with_default(Ok(vec![RouteCandidate {
            distance_m,
            coordinates,
        }]))
    }

    /// Always answers successfully with zero routes.
    pub fn empty() -> Self {
        Self::with_default(Ok(Vec::new()))
    }

    /// Always fails with a service error.
    pub fn failing(detail: &str) -> Self {
        Self::with_default(Err(ResolveError::Service(detail.to_owned())))
    }

    /// Queue a one-off response ahead of the default.
    pub fn push_response(&self, response: Result<Vec<RouteCandidate>, ResolveError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<(LngLat, LngLat)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectionsProvider for StubProvider {
    async fn walking_route(
        &self,
        from: LngLat,
        to: LngLat,
    ) -> Result<Vec<RouteCandidate>, ResolveError> {
        self.calls.lock().unwrap().push((from, to));
        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => self.default.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// Line added with this many coordinates.
    Added(Uuid, usize),
    /// Line geometry replaced, now this many coordinates.
    Updated(Uuid, usize),
    Visibility(Uuid, bool),
}

#[derive(Debug, Clone)]
pub struct MarkerRecord {
    pub position: LngLat,
    pub is_start: bool,
    pub removed: bool,
}

#[derive(Default)]
struct SurfaceLog {
    line_events: Vec<LineEvent>,
    line_coordinates: HashMap<Uuid, Vec<LngLat>>,
    markers: Vec<MarkerRecord>,
}

/// Map surface double that records every consumed capability.
#[derive(Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_events(&self) -> Vec<LineEvent> {
        self.log.lock().unwrap().line_events.clone()
    }

    pub fn clear_events(&self) {
        self.log.lock().unwrap().line_events.clear();
    }

    /// Latest geometry submitted for a line.
    pub fn line_coordinates(&self, id: Uuid) -> Vec<LngLat> {
        self.log
            .lock()
            .unwrap()
            .line_coordinates
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn markers(&self) -> Vec<MarkerRecord> {
        self.log.lock().unwrap().markers.clone()
    }

    pub fn live_marker_count(&self) -> usize {
        self.log
            .lock()
            .unwrap()
            .markers
            .iter()
            .filter(|m| !m.removed)
            .count()
    }
}

struct RecordedMarker {
    index: usize,
    log: Arc<Mutex<SurfaceLog>>,
}

impl Marker for RecordedMarker {
    fn remove(&mut self) {
        self.log.lock().unwrap().markers[self.index].removed = true;
    }
}

impl MapSurface for RecordingSurface {
    fn add_line(&self, id: Uuid, coordinates: &[LngLat]) {
        let mut log = self.log.lock().unwrap();
        log.line_events.push(LineEvent::Added(id, coordinates.len()));
        log.line_coordinates.insert(id, coordinates.to_vec());
    }

    fn update_line(&self, id: Uuid, coordinates: &[LngLat]) {
        let mut log = self.log.lock().unwrap();
        log.line_events
            .push(LineEvent::Updated(id, coordinates.len()));
        log.line_coordinates.insert(id, coordinates.to_vec());
    }

    fn set_line_visibility(&self, id: Uuid, visible: bool) {
        self.log
            .lock()
            .unwrap()
            .line_events
            .push(LineEvent::Visibility(id, visible));
    }

    fn add_marker(&self, position: LngLat, is_start: bool) -> Box<dyn Marker> {
        let mut log = self.log.lock().unwrap();
        let index = log.markers.len();
        log.markers.push(MarkerRecord {
            position,
            is_start,
            removed: false,
        });
        Box::new(RecordedMarker {
            index,
            log: self.log.clone(),
        })
    }
}

/// In-memory preference store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}
