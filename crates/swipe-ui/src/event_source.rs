//! Event source collaborator seam.

use std::rc::Rc;
use swipe_core::{EventScope, PointerEventKind, PointerSample};

/// Handler invoked with each pointer sample for a subscription.
pub type PointerHandler = Rc<dyn Fn(PointerSample)>;

/// Callback invoked on each autoplay timer tick.
pub type TimerCallback = Rc<dyn Fn()>;

/// Identifies one pointer subscription for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Identifies one repeating timer for later cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Platform event plumbing the navigator consumes.
///
/// Implementations unify mouse and touch streams into [`PointerSample`]s and
/// deliver them on a single thread in gesture order: a down always precedes
/// the moves of its gesture, and an up terminates the gesture before the
/// next down is delivered.
pub trait EventSource {
    /// Installs a pointer handler at the given scope and returns its id.
    fn subscribe(
        &self,
        scope: EventScope,
        kind: PointerEventKind,
        handler: PointerHandler,
    ) -> SubscriptionId;

    /// Removes a previously installed handler. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);

    /// Schedules `callback` to run every `interval_ms` until cancelled.
    fn schedule_repeating(&self, interval_ms: u64, callback: TimerCallback) -> TimerId;

    /// Cancels a repeating timer. Unknown ids are ignored.
    fn cancel_timer(&self, id: TimerId);
}
