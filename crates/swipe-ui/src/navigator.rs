//! The slide navigator component.
//!
//! `SlideNavigator` owns the index and gesture state for one horizontal
//! carousel. It consumes a [`Renderer`] and an [`EventSource`] and notifies
//! registered [`SlideObserver`]s on every non-silent transition.
//!
//! Everything is single-threaded and event-driven: gesture callbacks and
//! autoplay ticks arrive as discrete, non-overlapping turns, so interior
//! mutability (`RefCell`/`Cell` behind an `Rc`) is all the coordination
//! required. Pointer handlers hold `Weak` references back to the navigator;
//! an event source that outlives the navigator cannot leak it, and a fired
//! handler whose navigator is gone is a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;
use swipe_core::gesture_constants::{DEFAULT_AUTOPLAY_MS, DEFAULT_TRANSITION_MS};
use swipe_core::{
    DragTracker, DragUpdate, EdgePosition, EventScope, PointerEventKind, PointerSample, SlideId,
    SwipeDecision,
};

use crate::error::AttachError;
use crate::event_source::{EventSource, SubscriptionId, TimerId};
use crate::observer::{ObserverId, SlideObserver};
use crate::renderer::Renderer;

/// Index and gesture state for one attached carousel.
struct NavigatorState {
    /// Cached visible subsequence, in document order. Refreshed on demand,
    /// not continuously.
    visible: Vec<SlideId>,
    /// Index into `visible`; `< visible.len()` whenever `visible` is
    /// non-empty.
    current_index: usize,
    /// Slide at `current_index`; `None` iff `visible` is empty.
    current_slide: Option<SlideId>,
    /// Container width, which is also the width of one slide.
    slide_width: f32,
    tracker: DragTracker,
    transition_ms: u64,
    autoplay_ms: u64,
}

impl NavigatorState {
    fn edges(&self) -> EdgePosition {
        EdgePosition {
            first: self.current_index == 0,
            last: self.current_index + 1 == self.visible.len(),
        }
    }
}

struct NavigatorInner {
    renderer: Rc<dyn Renderer>,
    events: Rc<dyn EventSource>,
    state: RefCell<NavigatorState>,
    observers: RefCell<SmallVec<[(ObserverId, Rc<dyn SlideObserver>); 2]>>,
    subscriptions: RefCell<SmallVec<[SubscriptionId; 3]>>,
    autoplay: Cell<Option<TimerId>>,
    next_observer_id: Cell<u64>,
}

/// Handle to an attached carousel.
///
/// Dropping the handle releases the pointer subscriptions and the autoplay
/// timer, same as [`detach`](SlideNavigator::detach).
pub struct SlideNavigator {
    inner: Rc<NavigatorInner>,
}

impl SlideNavigator {
    /// Attaches a navigator to the renderer's slide sequence.
    ///
    /// Caches the visible subsequence and width, sizes the scroll track,
    /// shows index 0 with a zero-duration transition (no animation on first
    /// paint), and installs the gesture handlers: down and move on the
    /// container, up at root scope since the release can land outside the
    /// container.
    ///
    /// Fails with [`AttachError::NoSlides`] when there is no child sequence
    /// to manage; no partial state is retained.
    pub fn attach(
        renderer: Rc<dyn Renderer>,
        events: Rc<dyn EventSource>,
    ) -> Result<Self, AttachError> {
        let all = renderer.all_slides();
        if all.is_empty() {
            return Err(AttachError::NoSlides);
        }

        let visible = renderer.visible_slides();
        let slide_width = renderer.container_width();
        renderer.resize_track(all.len(), slide_width);

        let inner = Rc::new(NavigatorInner {
            renderer,
            events,
            state: RefCell::new(NavigatorState {
                visible,
                current_index: 0,
                current_slide: None,
                slide_width,
                tracker: DragTracker::new(),
                transition_ms: DEFAULT_TRANSITION_MS,
                autoplay_ms: DEFAULT_AUTOPLAY_MS,
            }),
            observers: RefCell::new(SmallVec::new()),
            subscriptions: RefCell::new(SmallVec::new()),
            autoplay: Cell::new(None),
            next_observer_id: Cell::new(1),
        });

        inner.show(0, Some(0), true);
        NavigatorInner::bind(&inner);

        Ok(Self { inner })
    }

    /// Detaches the navigator: stops autoplay and removes exactly the
    /// handlers `attach` installed. Idempotent.
    pub fn detach(&self) {
        self.inner.release();
    }

    /// Re-queries the visible subsequence and slide width, keeping the same
    /// visual slide in view where the shift heuristic allows.
    pub fn refresh(&self) {
        self.inner.refresh();
    }

    /// Shows slide `i`, clamped into the visible range, animating with the
    /// configured transition duration.
    pub fn show(&self, i: usize) {
        self.inner.show(i, None, false);
    }

    /// Shows slide `i` with an explicit transition duration.
    pub fn show_with(&self, i: usize, duration_ms: u64) {
        self.inner.show(i, Some(duration_ms), false);
    }

    /// Shows the next slide; a no-op re-render at the last slide.
    pub fn next(&self) {
        self.inner.next();
    }

    /// Shows the previous slide; a no-op re-render at the first slide.
    pub fn prev(&self) {
        self.inner.prev();
    }

    /// One autoplay step: advance, wrapping to index 0 from the last slide
    /// through the normal animated advance path.
    pub fn cycle(&self) {
        self.inner.cycle();
    }

    /// Starts autoplay. A no-op while already playing.
    pub fn play(&self) {
        NavigatorInner::play(&self.inner);
    }

    /// Stops autoplay. Cancels future ticks only; an in-flight visual
    /// transition is left to complete.
    pub fn stop(&self) {
        self.inner.stop();
    }

    pub fn set_transition_duration(&self, ms: u64) {
        self.inner.state.borrow_mut().transition_ms = ms;
    }

    pub fn set_autoplay_interval(&self, ms: u64) {
        self.inner.state.borrow_mut().autoplay_ms = ms;
    }

    pub fn add_observer(&self, observer: Rc<dyn SlideObserver>) -> ObserverId {
        let id = ObserverId(self.inner.next_observer_id.get());
        self.inner.next_observer_id.set(id.0 + 1);
        self.inner.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn remove_observer(&self, id: ObserverId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    pub fn current_index(&self) -> usize {
        self.inner.state.borrow().current_index
    }

    pub fn current_slide(&self) -> Option<SlideId> {
        self.inner.state.borrow().current_slide
    }

    pub fn visible_count(&self) -> usize {
        self.inner.state.borrow().visible.len()
    }

    pub fn is_first(&self) -> bool {
        self.inner.state.borrow().current_index == 0
    }

    pub fn is_last(&self) -> bool {
        let state = self.inner.state.borrow();
        state.current_index + 1 == state.visible.len()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.autoplay.get().is_some()
    }
}

impl Drop for SlideNavigator {
    fn drop(&mut self) {
        self.inner.release();
    }
}

impl NavigatorInner {
    /// Installs the three gesture subscriptions, capturing `Weak` so the
    /// event source never keeps the navigator alive.
    fn bind(inner: &Rc<Self>) {
        let down = {
            let weak = Rc::downgrade(inner);
            Rc::new(move |sample: PointerSample| {
                if let Some(nav) = weak.upgrade() {
                    nav.on_pointer_down(sample);
                }
            })
        };
        let moved = {
            let weak = Rc::downgrade(inner);
            Rc::new(move |sample: PointerSample| {
                if let Some(nav) = weak.upgrade() {
                    nav.on_pointer_move(sample);
                }
            })
        };
        let up = {
            let weak = Rc::downgrade(inner);
            Rc::new(move |sample: PointerSample| {
                if let Some(nav) = weak.upgrade() {
                    nav.on_pointer_up(sample);
                }
            })
        };

        let ids = [
            inner
                .events
                .subscribe(EventScope::Container, PointerEventKind::Down, down),
            inner
                .events
                .subscribe(EventScope::Container, PointerEventKind::Move, moved),
            inner
                .events
                .subscribe(EventScope::Root, PointerEventKind::Up, up),
        ];
        inner.subscriptions.borrow_mut().extend(ids);
    }

    /// Stops autoplay and removes every subscription `bind` added. Safe to
    /// call repeatedly; the subscription list drains on first call.
    fn release(&self) {
        self.stop();
        let ids: SmallVec<[SubscriptionId; 3]> =
            self.subscriptions.borrow_mut().drain(..).collect();
        for id in ids {
            self.events.unsubscribe(id);
        }
    }

    fn on_pointer_down(&self, sample: PointerSample) {
        // Cancel any in-flight animation so the slide tracks the finger.
        self.renderer.set_transition_duration(0);
        self.state.borrow_mut().tracker.begin(sample);
    }

    fn on_pointer_move(&self, sample: PointerSample) {
        let offset = {
            let mut state = self.state.borrow_mut();
            let edges = state.edges();
            match state.tracker.update(sample, edges) {
                DragUpdate::Tracking { delta_x } => {
                    Some(state.current_index as f32 * state.slide_width - delta_x)
                }
                DragUpdate::Inactive | DragUpdate::Skipped => None,
            }
        };
        if let Some(offset) = offset {
            self.renderer.set_offset(offset);
        }
    }

    fn on_pointer_up(&self, sample: PointerSample) {
        let decision = {
            let mut state = self.state.borrow_mut();
            let edges = state.edges();
            let width = state.slide_width;
            state.tracker.finish(sample.uptime_ms, width, edges)
        };
        match decision {
            Some(SwipeDecision::Advance) => self.next(),
            Some(SwipeDecision::Retreat) => self.prev(),
            Some(SwipeDecision::Settle) => {
                let i = self.state.borrow().current_index;
                self.show(i, None, false);
            }
            // Up with no active gesture; nothing to decide.
            None => {}
        }
    }

    /// Shows slide `i`, clamped into `[0, visible_count - 1]`.
    ///
    /// With an empty visible set this is a defensive no-op. Observer
    /// callbacks run after all internal borrows are released, so they may
    /// call back into the navigator.
    fn show(&self, i: usize, duration_ms: Option<u64>, silent: bool) {
        let shown = {
            let mut state = self.state.borrow_mut();
            if state.visible.is_empty() {
                state.current_slide = None;
                return;
            }
            let index = i.min(state.visible.len() - 1);
            let slide = state.visible[index];
            state.current_index = index;
            state.current_slide = Some(slide);
            let ms = duration_ms.unwrap_or(state.transition_ms);
            let offset = index as f32 * state.slide_width;
            (index, slide, ms, offset)
        };
        let (index, slide, ms, offset) = shown;

        self.renderer.set_transition_duration(ms);
        self.renderer.set_offset(offset);
        log::debug!("show slide {slide} at index {index} ({ms}ms)");

        if !silent {
            self.notify(index, slide);
        }
    }

    fn notify(&self, index: usize, slide: SlideId) {
        // Snapshot the list so observers can add or remove observers.
        let observers: SmallVec<[Rc<dyn SlideObserver>; 2]> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_slide_changed(index, slide);
        }
    }

    fn next(&self) {
        let i = self.state.borrow().current_index.saturating_add(1);
        self.show(i, None, false);
    }

    fn prev(&self) {
        let i = self.state.borrow().current_index.saturating_sub(1);
        self.show(i, None, false);
    }

    fn cycle(&self) {
        let wrap = {
            let state = self.state.borrow();
            !state.visible.is_empty() && state.current_index + 1 == state.visible.len()
        };
        if wrap {
            // Wrap through the normal advance path: configured duration,
            // observers notified, same as any other advance.
            self.show(0, None, false);
        } else {
            self.next();
        }
    }

    fn play(inner: &Rc<Self>) {
        if inner.autoplay.get().is_some() {
            return;
        }
        let interval = inner.state.borrow().autoplay_ms;
        let weak = Rc::downgrade(inner);
        let timer = inner.events.schedule_repeating(
            interval,
            Rc::new(move || {
                if let Some(nav) = weak.upgrade() {
                    nav.cycle();
                }
            }),
        );
        inner.autoplay.set(Some(timer));
    }

    fn stop(&self) {
        if let Some(timer) = self.autoplay.take() {
            self.events.cancel_timer(timer);
        }
    }

    /// Re-queries the visible subsequence and width, then re-derives
    /// `current_index`.
    ///
    /// The shift rule keeps the same visual slide in view across
    /// insertions and removals elsewhere in the sequence: when the visible
    /// set shrank and the current slide moved left (to `i <=
    /// current_index`), or grew and it moved right, the index follows the
    /// slide. It is a heuristic, not an exact reconciliation; afterwards
    /// the index is clamped back into range and the offset re-applied
    /// silently with no animation so the viewport matches the new width.
    fn refresh(&self) {
        let new_visible = self.renderer.visible_slides();
        let width = self.renderer.container_width();
        self.renderer
            .resize_track(self.renderer.all_slides().len(), width);

        let index = {
            let mut state = self.state.borrow_mut();
            let old_count = state.visible.len();
            let new_count = new_visible.len();
            let tracked = state
                .current_slide
                .and_then(|slide| new_visible.iter().position(|&s| s == slide));

            match tracked {
                Some(i) if new_count < old_count && i <= state.current_index => {
                    state.current_index = i;
                }
                Some(i) if new_count > old_count && i > state.current_index => {
                    state.current_index = i;
                }
                Some(_) => {}
                None => {
                    if state.current_slide.is_some() {
                        log::warn!(
                            "current slide left the visible set; settling near index {}",
                            state.current_index
                        );
                    }
                }
            }

            state.visible = new_visible;
            state.slide_width = width;
            state.current_index
        };

        self.show(index, Some(0), true);
    }
}
