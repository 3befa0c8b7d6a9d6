use std::sync::Arc;

use model::{CurrentRun, LngLat, RunSegment};
use uuid::Uuid;

use crate::surface::MapSurface;

enum State {
    Idle,
    Animating {
        id: Uuid,
        coordinates: Vec<LngLat>,
        /// Index of the next coordinate to reveal.
        cursor: usize,
        /// Coordinates already submitted to the surface.
        drawn: Vec<LngLat>,
    },
}

/// Reveals a segment's line one coordinate per display frame instead of all
/// at once. A request arriving while a segment is still drawing flushes the
/// in-flight segment to completion first, so no segment is ever left
/// partially drawn and no two animations interleave.
///
/// Frame pacing belongs to the embedding shell: it calls [`on_frame`] once
/// per display-refresh opportunity for as long as that returns `true`.
///
/// [`on_frame`]: AnimationSequencer::on_frame
pub struct AnimationSequencer<S> {
    surface: Arc<S>,
    state: State,
}

impl<S> AnimationSequencer<S>
where
    S: MapSurface,
{
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            state: State::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    /// Start animating a freshly resolved segment, first flushing any
    /// animation still in flight. Adds the segment's line renderable seeded
    /// with its first coordinate.
    pub fn animate_segment(&mut self, segment: &RunSegment) {
        self.flush();

        let coordinates = segment.geometry.coordinates.clone();
        let drawn: Vec<LngLat> = coordinates.first().copied().into_iter().collect();
        self.surface.add_line(segment.id, &drawn);
        self.state = State::Animating {
            id: segment.id,
            cursor: drawn.len(),
            coordinates,
            drawn,
        };
    }

    /// Advance the running animation by one coordinate. Returns whether
    /// another frame should be scheduled.
    pub fn on_frame(&mut self) -> bool {
        let State::Animating {
            id,
            coordinates,
            cursor,
            drawn,
        } = &mut self.state
        else {
            return false;
        };

        if *cursor >= coordinates.len() {
            self.state = State::Idle;
            return false;
        }

        drawn.push(coordinates[*cursor]);
        *cursor += 1;
        self.surface.update_line(*id, drawn);

        if *cursor >= coordinates.len() {
            self.state = State::Idle;
            false
        } else {
            true
        }
    }

    /// Emit all remaining coordinates of the in-flight segment in one step.
    fn flush(&mut self) {
        if let State::Animating {
            id,
            coordinates,
            cursor,
            mut drawn,
        } = std::mem::replace(&mut self.state, State::Idle)
        {
            if cursor < coordinates.len() {
                drawn.extend_from_slice(&coordinates[cursor..]);
                self.surface.update_line(id, &drawn);
            }
        }
    }

    /// Submit every segment of a run at full geometry, in run order, with no
    /// animation. Used when a (re)initialized surface needs the whole run
    /// back, e.g. after a style change, or when restoring a saved run.
    pub fn readd_run_to_map(&self, run: &CurrentRun) {
        for segment in &run.segments {
            self.surface
                .add_line(segment.id, &segment.geometry.coordinates);
        }
    }
}

#[cfg(test)]
mod tests {
    use model::{LineString, RunStart};

    use super::*;
    use crate::test_support::{LineEvent, RecordingSurface};

    fn segment(coordinates: Vec<LngLat>) -> RunSegment {
        RunSegment::new(
            Uuid::new_v4(),
            *coordinates.last().unwrap(),
            100.0,
            LineString::new(coordinates),
            false,
        )
    }

    fn coords(n: usize) -> Vec<LngLat> {
        (0..n).map(|i| LngLat::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn animates_one_coordinate_per_frame() {
        let surface = Arc::new(RecordingSurface::new());
        let mut sequencer = AnimationSequencer::new(surface.clone());

        let segment = segment(coords(3));
        sequencer.animate_segment(&segment);
        assert!(sequencer.is_animating());

        assert!(sequencer.on_frame());
        assert!(!sequencer.on_frame()); // third coordinate completes it
        assert!(!sequencer.is_animating());
        assert!(!sequencer.on_frame()); // idle frames are no-ops

        let events = surface.line_events();
        assert_eq!(
            events,
            vec![
                LineEvent::Added(segment.id, 1),
                LineEvent::Updated(segment.id, 2),
                LineEvent::Updated(segment.id, 3),
            ]
        );
        assert_eq!(
            surface.line_coordinates(segment.id),
            segment.geometry.coordinates
        );
    }

    #[test]
    fn interrupting_flushes_the_previous_segment_first() {
        let surface = Arc::new(RecordingSurface::new());
        let mut sequencer = AnimationSequencer::new(surface.clone());

        let first = segment(coords(5));
        let second = segment(vec![LngLat::new(9.0, 9.0), LngLat::new(10.0, 10.0)]);

        sequencer.animate_segment(&first);
        sequencer.on_frame();
        sequencer.animate_segment(&second);

        // the first segment is fully drawn before the second appears
        let events = surface.line_events();
        let first_full = events
            .iter()
            .position(|e| *e == LineEvent::Updated(first.id, 5))
            .expect("first segment flushed to full length");
        let second_added = events
            .iter()
            .position(|e| *e == LineEvent::Added(second.id, 1))
            .expect("second segment added");
        assert!(first_full < second_added);
        assert_eq!(
            surface.line_coordinates(first.id),
            first.geometry.coordinates
        );

        // and the second still animates from its beginning
        assert!(!sequencer.on_frame());
        assert_eq!(
            surface.line_coordinates(second.id),
            second.geometry.coordinates
        );
    }

    #[test]
    fn readding_a_run_bypasses_animation() {
        let surface = Arc::new(RecordingSurface::new());
        let sequencer = AnimationSequencer::new(surface.clone());

        let mut run = CurrentRun::new(RunStart::new(LngLat::new(0.0, 0.0)));
        let a = segment(coords(4));
        let b = segment(coords(2));
        let (a_id, b_id) = (a.id, b.id);
        run.add_segment(a, surface.add_marker(LngLat::new(0.0, 0.0), false));
        run.add_segment(b, surface.add_marker(LngLat::new(1.0, 1.0), false));
        surface.clear_events();

        sequencer.readd_run_to_map(&run);

        assert_eq!(
            surface.line_events(),
            vec![LineEvent::Added(a_id, 4), LineEvent::Added(b_id, 2)]
        );
    }
}
