//! Testing utilities for the swipe carousel.
//!
//! Deterministic fakes for the navigator's collaborator seams, shared by
//! `swipe-ui`'s integration tests and the headless demo.

pub mod fake_renderer;
pub mod recording_observer;
pub mod scripted_events;

pub use fake_renderer::FakeRenderer;
pub use recording_observer::RecordingObserver;
pub use scripted_events::ScriptedEvents;
