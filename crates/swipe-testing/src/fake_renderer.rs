//! Recording fake for the `Renderer` seam.

use std::cell::{Cell, RefCell};

use swipe_core::SlideId;
use swipe_ui::Renderer;

/// In-memory renderer that records every offset and duration it is asked to
/// apply, with a mutable slide list, visibility predicate, and width.
pub struct FakeRenderer {
    slides: RefCell<Vec<SlideId>>,
    hidden: RefCell<Vec<SlideId>>,
    width: Cell<f32>,
    offsets: RefCell<Vec<f32>>,
    durations: RefCell<Vec<u64>>,
    track: Cell<Option<(usize, f32)>>,
}

impl FakeRenderer {
    /// A renderer managing slide ids `1..=count`, all visible.
    pub fn new(count: usize, width: f32) -> Self {
        Self {
            slides: RefCell::new((1..=count as u64).collect()),
            hidden: RefCell::new(Vec::new()),
            width: Cell::new(width),
            offsets: RefCell::new(Vec::new()),
            durations: RefCell::new(Vec::new()),
            track: Cell::new(None),
        }
    }

    pub fn set_width(&self, width: f32) {
        self.width.set(width);
    }

    pub fn hide(&self, slide: SlideId) {
        let mut hidden = self.hidden.borrow_mut();
        if !hidden.contains(&slide) {
            hidden.push(slide);
        }
    }

    pub fn unhide(&self, slide: SlideId) {
        self.hidden.borrow_mut().retain(|&s| s != slide);
    }

    pub fn push_slide(&self, slide: SlideId) {
        self.slides.borrow_mut().push(slide);
    }

    pub fn remove_slide(&self, slide: SlideId) {
        self.slides.borrow_mut().retain(|&s| s != slide);
    }

    /// Most recent applied offset, if any.
    pub fn last_offset(&self) -> Option<f32> {
        self.offsets.borrow().last().copied()
    }

    /// Most recent applied transition duration, if any.
    pub fn last_duration(&self) -> Option<u64> {
        self.durations.borrow().last().copied()
    }

    /// Every offset applied so far, oldest first.
    pub fn offsets(&self) -> Vec<f32> {
        self.offsets.borrow().clone()
    }

    /// Every transition duration applied so far, oldest first.
    pub fn durations(&self) -> Vec<u64> {
        self.durations.borrow().clone()
    }

    /// Last `(total, slide_width)` the track was sized to, if any.
    pub fn track_size(&self) -> Option<(usize, f32)> {
        self.track.get()
    }
}

impl Renderer for FakeRenderer {
    fn all_slides(&self) -> Vec<SlideId> {
        self.slides.borrow().clone()
    }

    fn visible_slides(&self) -> Vec<SlideId> {
        let hidden = self.hidden.borrow();
        self.slides
            .borrow()
            .iter()
            .copied()
            .filter(|slide| !hidden.contains(slide))
            .collect()
    }

    fn container_width(&self) -> f32 {
        self.width.get()
    }

    fn set_transition_duration(&self, ms: u64) {
        self.durations.borrow_mut().push(ms);
    }

    fn set_offset(&self, px: f32) {
        self.offsets.borrow_mut().push(px);
    }

    fn resize_track(&self, total: usize, slide_width: f32) {
        self.track.set(Some((total, slide_width)));
    }
}
