//! Platform-free gesture interpretation for the swipe carousel.
//!
//! This crate holds the decision core: pointer sample types, the gesture
//! thresholds, and the [`DragTracker`] state machine that turns a drag into
//! a stay/advance/retreat decision. It knows nothing about rendering or
//! event subscription; those live behind the collaborator traits in
//! `swipe-ui`.

pub mod drag;
pub mod gesture_constants;
pub mod input;

pub use drag::{DragDirection, DragTracker, DragUpdate, EdgePosition, SwipeDecision};
pub use input::{EventScope, PointerEventKind, PointerSample, SlideId};
