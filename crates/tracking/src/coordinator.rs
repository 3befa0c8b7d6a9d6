use std::sync::Arc;

use model::{
    format_distance, CurrentRun, FormattedDistance, LngLat, MapFocus, RunSegment,
    RunStart,
};

use crate::animation::AnimationSequencer;
use crate::persistence;
use crate::preferences::{PreferenceStore, Preferences};
use crate::provider::DirectionsProvider;
use crate::resolver::SegmentResolver;
use crate::surface::MapSurface;
use crate::ResolveError;

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Dropped: a routed resolution is still outstanding.
    Ignored,
    RunStarted,
    SegmentAdded { distance: FormattedDistance },
    /// The run moved on (undo/clear) while the resolution was in flight;
    /// the late response was discarded without touching the run.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    SegmentRemoved { distance: FormattedDistance },
    /// The last remaining point was removed; the whole run is gone.
    RunCleared,
    NoRun,
}

/// What a registered click asks the caller to do next.
pub enum ClickAction {
    Ignored,
    RunStarted,
    /// Resolve a segment from `from` to `to` and feed the result back
    /// through [`RunCoordinator::apply_resolution`].
    Resolve(PendingSegment),
}

/// A point placement whose segment is still being resolved. Tagged with the
/// run generation it belongs to so a response that arrives after an undo or
/// clear can be recognized as stale and dropped.
pub struct PendingSegment {
    pub from: LngLat,
    pub to: LngLat,
    generation: u64,
}

/// Owns all application state: the run under construction, the resolver
/// and sequencer, the typed preferences, and the serialization flags for
/// point placement.
///
/// Single-threaded, event-driven: the embedding shell delivers map clicks,
/// undo requests and frame ticks; nothing here locks.
pub struct RunCoordinator<P, S, St> {
    surface: Arc<S>,
    resolver: SegmentResolver<P>,
    sequencer: AnimationSequencer<S>,
    preferences: Preferences<St>,
    run: Option<CurrentRun>,
    waiting: bool,
    generation: u64,
    use_metric: bool,
    follow_roads: bool,
}

impl<P, S, St> RunCoordinator<P, S, St>
where
    P: DirectionsProvider,
    S: MapSurface,
    St: PreferenceStore,
{
    pub fn new(provider: Arc<P>, surface: Arc<S>, store: St) -> Self {
        let preferences = Preferences::new(store);
        let use_metric = preferences.use_metric();
        let follow_roads = preferences.follow_roads();
        Self {
            sequencer: AnimationSequencer::new(surface.clone()),
            resolver: SegmentResolver::new(provider),
            surface,
            preferences,
            run: None,
            waiting: false,
            generation: 0,
            use_metric,
            follow_roads,
        }
    }

    pub fn run(&self) -> Option<&CurrentRun> {
        self.run.as_ref()
    }

    pub fn preferences(&self) -> &Preferences<St> {
        &self.preferences
    }

    pub fn use_metric(&self) -> bool {
        self.use_metric
    }

    pub fn follow_roads(&self) -> bool {
        self.follow_roads
    }

    /// The run's accumulated distance, ready for display.
    pub fn formatted_distance(&self) -> FormattedDistance {
        let meters = self.run.as_ref().map(CurrentRun::distance).unwrap_or(0.0);
        format_distance(meters, self.use_metric)
    }

    /// Handle a map click end to end: register the point and, when a
    /// segment has to be resolved, await the resolution and apply it.
    pub async fn handle_click(
        &mut self,
        position: LngLat,
    ) -> Result<ClickOutcome, ResolveError> {
        match self.register_click(position) {
            ClickAction::Ignored => Ok(ClickOutcome::Ignored),
            ClickAction::RunStarted => Ok(ClickOutcome::RunStarted),
            ClickAction::Resolve(pending) => {
                let resolved = if self.follow_roads {
                    self.resolver.resolve_by_route(pending.from, pending.to).await
                } else {
                    Ok(self
                        .resolver
                        .resolve_by_straight_line(pending.from, pending.to))
                };
                self.apply_resolution(pending, resolved)
            }
        }
    }

    /// First phase of a click: either starts the run or hands back the
    /// pending segment to resolve. While a resolution is outstanding,
    /// further clicks are ignored rather than raced.
    pub fn register_click(&mut self, position: LngLat) -> ClickAction {
        if self.waiting {
            return ClickAction::Ignored;
        }

        match &self.run {
            None => {
                let mut start = RunStart::new(position);
                start.set_marker(self.surface.add_marker(position, true));
                self.run = Some(CurrentRun::new(start));
                self.persist_snapshot();
                ClickAction::RunStarted
            }
            Some(run) => {
                self.waiting = true;
                ClickAction::Resolve(PendingSegment {
                    from: run.last_position(),
                    to: position,
                    generation: self.generation,
                })
            }
        }
    }

    /// Second phase of a click: attach the resolution outcome to the run.
    /// Failures leave the run unchanged; a response belonging to an earlier
    /// generation is discarded.
    pub fn apply_resolution(
        &mut self,
        pending: PendingSegment,
        resolved: Result<RunSegment, ResolveError>,
    ) -> Result<ClickOutcome, ResolveError> {
        self.waiting = false;

        if pending.generation != self.generation {
            log::warn!(
                "discarding stale segment resolution to ({}, {})",
                pending.to.lng,
                pending.to.lat
            );
            return Ok(ClickOutcome::Stale);
        }
        let segment = resolved?;
        let Some(run) = self.run.as_mut() else {
            // same situation without an intervening click: run is gone
            return Ok(ClickOutcome::Stale);
        };

        self.sequencer.animate_segment(&segment);
        let marker = self.surface.add_marker(segment.end_position(), false);
        run.add_segment(segment, marker);
        self.persist_snapshot();
        Ok(ClickOutcome::SegmentAdded {
            distance: self.formatted_distance(),
        })
    }

    /// Undo the most recent point. Pops the last segment and hides its
    /// line; once no segments remain, removes the start marker and the run
    /// itself.
    pub fn undo_last(&mut self) -> UndoOutcome {
        self.generation += 1;

        let Some(run) = self.run.as_mut() else {
            return UndoOutcome::NoRun;
        };

        match run.remove_last_segment() {
            Some(removed) => {
                self.surface.set_line_visibility(removed.id, false);
                self.persist_snapshot();
                UndoOutcome::SegmentRemoved {
                    distance: self.formatted_distance(),
                }
            }
            None => {
                run.start.release_marker();
                self.run = None;
                self.persist_snapshot();
                UndoOutcome::RunCleared
            }
        }
    }

    /// Remove the whole run at once: every segment's line is hidden, every
    /// marker removed.
    pub fn clear_run(&mut self) {
        self.generation += 1;

        if let Some(run) = self.run.as_mut() {
            while let Some(removed) = run.remove_last_segment() {
                self.surface.set_line_visibility(removed.id, false);
            }
            run.start.release_marker();
        }
        self.run = None;
        self.persist_snapshot();
    }

    /// Restore the saved run, if a restorable snapshot exists. Segments are
    /// re-resolved per their flags and drawn at full geometry; nothing is
    /// animated.
    pub async fn load_saved_run(&mut self) -> bool {
        let Some(record) = persistence::decode(&self.preferences.last_run()) else {
            return false;
        };

        self.follow_roads = record.follow_roads;
        self.preferences.save_follow_roads(record.follow_roads);

        let run =
            persistence::restore_run(&record, &self.resolver, self.surface.as_ref())
                .await;
        log::info!(
            "restored run with {} segment(s), {:.0}m",
            run.segments.len(),
            run.distance()
        );
        self.run = Some(run);
        true
    }

    /// Advance the running segment animation by one frame. Returns whether
    /// another frame should be scheduled.
    pub fn on_frame(&mut self) -> bool {
        self.sequencer.on_frame()
    }

    /// Re-submit the whole run to a freshly initialized surface (style
    /// change), full geometry, no animation.
    pub fn readd_to_map(&self) {
        if let Some(run) = &self.run {
            self.sequencer.readd_run_to_map(run);
        }
    }

    /// Flip the display units and persist the choice.
    pub fn toggle_units(&mut self) -> FormattedDistance {
        self.use_metric = !self.use_metric;
        self.preferences.save_use_metric(self.use_metric);
        self.formatted_distance()
    }

    pub fn set_follow_roads(&mut self, value: bool) {
        self.follow_roads = value;
        self.preferences.save_follow_roads(value);
    }

    pub fn save_focus(&self, focus: MapFocus) {
        self.preferences.save_focus(focus);
    }

    pub fn last_or_default_focus(&self) -> MapFocus {
        self.preferences.last_or_default_focus()
    }

    fn persist_snapshot(&self) {
        let snapshot = persistence::encode(self.run.as_ref(), self.follow_roads);
        self.preferences.save_last_run(&snapshot);
    }
}
