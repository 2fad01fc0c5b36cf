//! Shared gesture constants for consistent swipe handling.
//!
//! The flick and slow-drag thresholds are intentionally expressed as
//! fractions of the slide width rather than absolute pixels, so the same
//! feel carries across container sizes and densities.

/// Flick window in milliseconds.
///
/// A gesture released faster than this counts as a flick and commits with
/// only a small fraction of travel. Slower releases are deliberate drags
/// and must cross half the slide width to commit.
pub const FLICK_WINDOW_MS: u64 = 200;

/// Commit threshold divisor for flicks: a flick commits after
/// `slide_width / FLICK_COMMIT_DIVISOR` of horizontal travel (10%).
pub const FLICK_COMMIT_DIVISOR: f32 = 10.0;

/// Commit threshold divisor for slow drags: a drag commits after
/// `slide_width / DRAG_COMMIT_DIVISOR` of horizontal travel (50%).
pub const DRAG_COMMIT_DIVISOR: f32 = 2.0;

/// Edge resistance divisor.
///
/// Dragging past the first slide toward-previous or past the last slide
/// toward-next moves the content at `1 / EDGE_RESISTANCE_DIVISOR` of the
/// finger speed, signalling the boundary without hard-stopping the drag.
pub const EDGE_RESISTANCE_DIVISOR: f32 = 2.0;

/// Default slide transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Default autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_MS: u64 = 5_000;
