//! Slide navigator component for the swipe carousel.
//!
//! The navigator converts pointer gestures into slide transitions and
//! drives an abstract [`Renderer`]. Platform glue (real elements, event
//! attachment, timers) lives behind the [`Renderer`] and [`EventSource`]
//! collaborator traits; `swipe-testing` provides deterministic fakes for
//! both.

pub mod error;
pub mod event_source;
pub mod navigator;
pub mod observer;
pub mod renderer;

pub use error::AttachError;
pub use event_source::{EventSource, PointerHandler, SubscriptionId, TimerCallback, TimerId};
pub use navigator::SlideNavigator;
pub use observer::{ObserverId, SlideObserver};
pub use renderer::Renderer;

pub use swipe_core::{EventScope, PointerEventKind, PointerSample, SlideId};
