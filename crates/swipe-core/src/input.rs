//! Pointer input types shared between the gesture tracker and the
//! navigator's event plumbing.

/// Opaque handle for one slide. The renderer owns the real element; the
/// navigator only orders and compares handles.
pub type SlideId = u64;

/// Kind of pointer event a subscriber can listen for.
///
/// Mouse and touch streams are unified by the event source; the navigator
/// never distinguishes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Scope at which a pointer subscription is installed.
///
/// Down and move events are observed on the slide container itself, but the
/// release can land anywhere on the page, so up events are observed at the
/// root scope. The scope is passed explicitly rather than reaching for
/// ambient global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventScope {
    Container,
    Root,
}

/// One pointer sample as delivered by the event source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Monotonic event timestamp in milliseconds.
    pub uptime_ms: u64,
    /// True when more than one touch point is active for this sample.
    pub multi_touch: bool,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, uptime_ms: u64) -> Self {
        Self {
            x,
            y,
            uptime_ms,
            multi_touch: false,
        }
    }

    pub fn multi_touch(mut self) -> Self {
        self.multi_touch = true;
        self
    }
}
