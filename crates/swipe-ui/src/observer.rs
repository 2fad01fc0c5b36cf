//! Slide change observation.

use swipe_core::SlideId;

/// Identifies one registered observer for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Receives slide change notifications.
///
/// Fired on every non-silent `show`, including boundary no-op settles that
/// re-show the current index.
pub trait SlideObserver {
    fn on_slide_changed(&self, index: usize, slide: SlideId);
}
