//! Drag tracking and swipe decision logic.
//!
//! `DragTracker` turns a pointer down/move/up sample stream into a discrete
//! [`SwipeDecision`]: stay on the current slide, advance, or retreat. It is
//! deliberately free of any rendering or event-subscription concerns; the
//! navigator feeds it samples and edge information and acts on the outcome.

use crate::gesture_constants::{
    DRAG_COMMIT_DIVISOR, EDGE_RESISTANCE_DIVISOR, FLICK_COMMIT_DIVISOR, FLICK_WINDOW_MS,
};
use crate::input::PointerSample;

/// Whether the current slide sits at a boundary of the visible subsequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgePosition {
    pub first: bool,
    pub last: bool,
}

impl EdgePosition {
    pub fn interior() -> Self {
        Self::default()
    }
}

/// Horizontal direction of a drag, named for the slide it moves toward.
///
/// Dragging content left (negative delta) reveals the next slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    TowardPrevious,
    TowardNext,
}

fn direction(delta_x: f32) -> DragDirection {
    if delta_x < 0.0 {
        DragDirection::TowardNext
    } else {
        DragDirection::TowardPrevious
    }
}

/// Outcome of feeding one move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No active gesture, or the gesture was ceded to vertical scrolling.
    Inactive,
    /// Multi-touch sample; skipped without disturbing the drag record.
    Skipped,
    /// Horizontal drag in progress; `delta_x` already has edge resistance
    /// applied and is what the offset should be computed from.
    Tracking { delta_x: f32 },
}

/// Decision made when a gesture ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Show the next slide (clamped at the last).
    Advance,
    /// Show the previous slide (clamped at the first).
    Retreat,
    /// Re-show the current slide, undoing the drag.
    Settle,
}

/// One-time axis classification for a gesture, decided on the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug)]
struct DragStart {
    x: f32,
    y: f32,
    uptime_ms: u64,
}

/// Gesture state machine: Idle -> Dragging -> (deciding) -> Idle.
///
/// A `begin` while already dragging overwrites the drag record; gestures are
/// never queued. The tracked delta is recomputed from the start point on
/// every move sample, so the same inputs always produce the same offset.
#[derive(Debug, Default)]
pub struct DragTracker {
    down: Option<DragStart>,
    delta_x: f32,
    axis: Axis,
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Undecided
    }
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress (including one ceded to vertical).
    pub fn is_active(&self) -> bool {
        self.down.is_some()
    }

    /// Last tracked horizontal delta, post edge resistance.
    pub fn delta_x(&self) -> f32 {
        self.delta_x
    }

    /// Starts a gesture at the sample's position and time.
    pub fn begin(&mut self, sample: PointerSample) {
        self.down = Some(DragStart {
            x: sample.x,
            y: sample.y,
            uptime_ms: sample.uptime_ms,
        });
        self.delta_x = 0.0;
        self.axis = Axis::Undecided;
    }

    /// Feeds one move sample, applying axis lock and edge resistance.
    pub fn update(&mut self, sample: PointerSample, edges: EdgePosition) -> DragUpdate {
        let start = match self.down {
            Some(start) => start,
            None => return DragUpdate::Inactive,
        };
        if self.axis == Axis::Vertical {
            return DragUpdate::Inactive;
        }
        if sample.multi_touch {
            return DragUpdate::Skipped;
        }

        let mut delta_x = sample.x - start.x;

        if self.axis == Axis::Undecided {
            // First move decides the axis. A slope steeper than 1 in either
            // direction is vertical scroll intent; the gesture is handed back
            // to the platform and every later sample is a no-op. Division
            // follows IEEE semantics: dx == 0 with dy != 0 yields an infinite
            // slope (vertical), 0/0 is NaN and locks horizontal.
            let delta_y = sample.y - start.y;
            let slope = delta_y / delta_x;
            if slope > 1.0 || slope < -1.0 {
                log::trace!("ceding gesture to vertical scroll (slope {slope:.2})");
                self.axis = Axis::Vertical;
                return DragUpdate::Inactive;
            }
            self.axis = Axis::Horizontal;
        }

        // Resist dragging past either end of the visible subsequence.
        match direction(delta_x) {
            DragDirection::TowardPrevious if edges.first => delta_x /= EDGE_RESISTANCE_DIVISOR,
            DragDirection::TowardNext if edges.last => delta_x /= EDGE_RESISTANCE_DIVISOR,
            _ => {}
        }

        self.delta_x = delta_x;
        DragUpdate::Tracking { delta_x }
    }

    /// Ends the gesture and decides the transition.
    ///
    /// Returns `None` when no gesture is active. The drag record is cleared
    /// before the decision is computed, so a re-entrant `begin` from an
    /// observer callback starts from a clean state.
    pub fn finish(
        &mut self,
        uptime_ms: u64,
        slide_width: f32,
        edges: EdgePosition,
    ) -> Option<SwipeDecision> {
        let start = self.down.take()?;
        let delta_x = self.delta_x;
        self.delta_x = 0.0;
        self.axis = Axis::Undecided;

        let elapsed_ms = uptime_ms.saturating_sub(start.uptime_ms);
        let threshold = if elapsed_ms < FLICK_WINDOW_MS {
            slide_width / FLICK_COMMIT_DIVISOR
        } else {
            slide_width / DRAG_COMMIT_DIVISOR
        };
        let committed = delta_x.abs() >= threshold;
        let dir = direction(delta_x);

        Some(decide(edges, dir, committed))
    }
}

/// Decision table, evaluated in order, first match wins.
///
/// Boundary slides get simplified branches because edge resistance already
/// makes boundary overshoot rare: at the first slide any non-committed (or
/// toward-previous) release falls through to a retreat, which clamps to a
/// no-op settle at index 0, and at the last slide a toward-next release
/// clamps the same way.
fn decide(edges: EdgePosition, dir: DragDirection, committed: bool) -> SwipeDecision {
    use DragDirection::TowardNext;

    if edges.first && dir == TowardNext && committed {
        SwipeDecision::Advance
    } else if edges.first {
        SwipeDecision::Retreat
    } else if edges.last && dir == TowardNext {
        SwipeDecision::Advance
    } else if dir == TowardNext && committed {
        SwipeDecision::Advance
    } else if dir == DragDirection::TowardPrevious && committed {
        SwipeDecision::Retreat
    } else {
        SwipeDecision::Settle
    }
}
