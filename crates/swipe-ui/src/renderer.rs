//! Renderer collaborator seam.

use swipe_core::SlideId;

/// Platform rendering surface the navigator drives.
///
/// Implementations own the real elements and all platform concerns: style
/// application, transform capability detection, vendor prefixes. None of
/// that leaks into the navigator's decision logic; it only sees ordered
/// slide handles, one width, and the two output knobs.
pub trait Renderer {
    /// Every managed slide, in document order.
    fn all_slides(&self) -> Vec<SlideId>;

    /// The slides currently eligible for display, in document order. Must
    /// be a sub-order of `all_slides()`.
    fn visible_slides(&self) -> Vec<SlideId>;

    /// Visibility of one slide, per the renderer's external predicate.
    fn is_visible(&self, slide: SlideId) -> bool {
        self.visible_slides().contains(&slide)
    }

    /// Width of the container, which is also the width of one slide.
    fn container_width(&self) -> f32;

    /// Sets the duration used by subsequent offset transitions. Zero means
    /// the next offset applies instantly.
    fn set_transition_duration(&self, ms: u64);

    /// Moves the slide track so the viewport shows the given horizontal
    /// offset in pixels.
    fn set_offset(&self, px: f32);

    /// Sizes the scroll track to hold `total` slides of `slide_width`.
    ///
    /// Called on attach and refresh. Track sizing is a rendering concern;
    /// surfaces that size themselves can leave this as the default no-op.
    fn resize_track(&self, total: usize, slide_width: f32) {
        let _ = (total, slide_width);
    }
}
