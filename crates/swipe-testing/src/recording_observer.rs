//! Recording fake for the `SlideObserver` seam.

use std::cell::RefCell;

use swipe_core::SlideId;
use swipe_ui::SlideObserver;

/// Observer that records every `(index, slide)` notification in order.
#[derive(Default)]
pub struct RecordingObserver {
    changes: RefCell<Vec<(usize, SlideId)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<(usize, SlideId)> {
        self.changes.borrow().clone()
    }

    pub fn last_change(&self) -> Option<(usize, SlideId)> {
        self.changes.borrow().last().copied()
    }

    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }
}

impl SlideObserver for RecordingObserver {
    fn on_slide_changed(&self, index: usize, slide: SlideId) {
        self.changes.borrow_mut().push((index, slide));
    }
}
