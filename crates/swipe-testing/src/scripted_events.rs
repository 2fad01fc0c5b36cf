//! Manual event source for driving gestures and timers from tests.

use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;
use swipe_core::{EventScope, PointerEventKind, PointerSample};
use swipe_ui::{EventSource, PointerHandler, SubscriptionId, TimerCallback, TimerId};

struct Subscription {
    scope: EventScope,
    kind: PointerEventKind,
    handler: PointerHandler,
}

struct Timer {
    interval_ms: u64,
    callback: TimerCallback,
}

/// Event source driven entirely by explicit test calls.
///
/// Pointer samples are delivered with [`fire`](ScriptedEvents::fire) (or the
/// [`touch`](ScriptedEvents::touch) shorthand) and repeating timers tick
/// only when [`tick_timers`](ScriptedEvents::tick_timers) is called, so
/// tests control every event-loop turn.
#[derive(Default)]
pub struct ScriptedEvents {
    subscriptions: RefCell<FxHashMap<u64, Subscription>>,
    timers: RefCell<FxHashMap<u64, Timer>>,
    next_id: Cell<u64>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Delivers a pointer sample to every handler subscribed at the scope
    /// and kind. Handlers may subscribe or unsubscribe re-entrantly.
    pub fn fire(&self, scope: EventScope, kind: PointerEventKind, sample: PointerSample) {
        let handlers: Vec<PointerHandler> = self
            .subscriptions
            .borrow()
            .values()
            .filter(|sub| sub.scope == scope && sub.kind == kind)
            .map(|sub| PointerHandler::clone(&sub.handler))
            .collect();
        for handler in handlers {
            handler(sample);
        }
    }

    /// Delivers a sample at the scope the navigator listens on for `kind`:
    /// down and move on the container, up at root.
    pub fn touch(&self, kind: PointerEventKind, sample: PointerSample) {
        let scope = match kind {
            PointerEventKind::Down | PointerEventKind::Move => EventScope::Container,
            PointerEventKind::Up => EventScope::Root,
        };
        self.fire(scope, kind, sample);
    }

    /// Runs every scheduled repeating timer once, as if one interval
    /// elapsed for each.
    pub fn tick_timers(&self) {
        let callbacks: Vec<TimerCallback> = self
            .timers
            .borrow()
            .values()
            .map(|timer| TimerCallback::clone(&timer.callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live pointer subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Number of live repeating timers.
    pub fn timer_count(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Interval of the single live timer, if exactly one is scheduled.
    pub fn sole_timer_interval(&self) -> Option<u64> {
        let timers = self.timers.borrow();
        if timers.len() == 1 {
            timers.values().next().map(|timer| timer.interval_ms)
        } else {
            None
        }
    }
}

impl EventSource for ScriptedEvents {
    fn subscribe(
        &self,
        scope: EventScope,
        kind: PointerEventKind,
        handler: PointerHandler,
    ) -> SubscriptionId {
        let id = self.allocate_id();
        self.subscriptions.borrow_mut().insert(
            id,
            Subscription {
                scope,
                kind,
                handler,
            },
        );
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.borrow_mut().remove(&id.0);
    }

    fn schedule_repeating(&self, interval_ms: u64, callback: TimerCallback) -> TimerId {
        let id = self.allocate_id();
        self.timers.borrow_mut().insert(
            id,
            Timer {
                interval_ms,
                callback,
            },
        );
        TimerId(id)
    }

    fn cancel_timer(&self, id: TimerId) {
        self.timers.borrow_mut().remove(&id.0);
    }
}
