//! Index bookkeeping, lifecycle, autoplay, and observer behavior.

use std::rc::Rc;

use swipe_testing::{FakeRenderer, RecordingObserver, ScriptedEvents};
use swipe_ui::{AttachError, SlideNavigator};

fn navigator(count: usize, width: f32) -> (Rc<FakeRenderer>, Rc<ScriptedEvents>, SlideNavigator) {
    let renderer = Rc::new(FakeRenderer::new(count, width));
    let events = Rc::new(ScriptedEvents::new());
    let nav = SlideNavigator::attach(renderer.clone(), events.clone()).expect("attach succeeds");
    (renderer, events, nav)
}

#[test]
fn attach_shows_first_slide_without_animation() {
    let (renderer, events, nav) = navigator(3, 100.0);

    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.current_slide(), Some(1));
    assert_eq!(renderer.last_offset(), Some(0.0));
    assert_eq!(renderer.last_duration(), Some(0));
    assert_eq!(renderer.track_size(), Some((3, 100.0)));
    // Down and move on the container, up at root.
    assert_eq!(events.subscription_count(), 3);
}

#[test]
fn attach_fails_when_there_is_nothing_to_manage() {
    let renderer = Rc::new(FakeRenderer::new(0, 100.0));
    let events = Rc::new(ScriptedEvents::new());
    let result = SlideNavigator::attach(renderer, events.clone());
    assert!(matches!(result, Err(AttachError::NoSlides)));
    // No partial state: nothing was subscribed.
    assert_eq!(events.subscription_count(), 0);
}

#[test]
fn show_clamps_out_of_range_indices() {
    let (renderer, _events, nav) = navigator(3, 100.0);

    nav.show(99);
    assert_eq!(nav.current_index(), 2);
    assert_eq!(renderer.last_offset(), Some(200.0));
}

#[test]
fn show_applies_the_configured_duration() {
    let (renderer, _events, nav) = navigator(3, 100.0);

    nav.show(1);
    assert_eq!(renderer.last_duration(), Some(300));

    nav.set_transition_duration(120);
    nav.show(2);
    assert_eq!(renderer.last_duration(), Some(120));

    nav.show_with(0, 7);
    assert_eq!(renderer.last_duration(), Some(7));
}

#[test]
fn next_at_last_slide_is_an_index_noop() {
    let (_renderer, _events, nav) = navigator(3, 100.0);

    nav.show(2);
    assert!(nav.is_last());
    nav.next();
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn prev_at_first_slide_is_an_index_noop() {
    let (_renderer, _events, nav) = navigator(3, 100.0);

    assert!(nav.is_first());
    nav.prev();
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn observers_receive_every_non_silent_show() {
    let (_renderer, _events, nav) = navigator(3, 100.0);
    let observer = Rc::new(RecordingObserver::new());
    nav.add_observer(observer.clone());

    nav.show(1);
    nav.next();
    nav.next(); // boundary no-op still re-shows
    assert_eq!(observer.changes(), vec![(1, 2), (2, 3), (2, 3)]);
}

#[test]
fn removed_observers_are_not_notified() {
    let (_renderer, _events, nav) = navigator(3, 100.0);
    let observer = Rc::new(RecordingObserver::new());
    let id = nav.add_observer(observer.clone());

    nav.show(1);
    nav.remove_observer(id);
    nav.show(2);
    assert_eq!(observer.changes(), vec![(1, 2)]);
}

#[test]
fn cycle_wraps_from_the_last_slide_to_zero() {
    let (renderer, _events, nav) = navigator(3, 100.0);
    let observer = Rc::new(RecordingObserver::new());
    nav.add_observer(observer.clone());

    nav.show(2);
    nav.cycle();
    assert_eq!(nav.current_index(), 0);
    // Wrap goes through the normal animated advance path.
    assert_eq!(renderer.last_duration(), Some(300));
    assert_eq!(observer.last_change(), Some((0, 1)));
}

#[test]
fn cycle_advances_when_not_at_the_last_slide() {
    let (_renderer, _events, nav) = navigator(3, 100.0);

    nav.cycle();
    assert_eq!(nav.current_index(), 1);
    nav.cycle();
    assert_eq!(nav.current_index(), 2);
    nav.cycle();
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn play_is_idempotent_and_uses_the_configured_interval() {
    let (_renderer, events, nav) = navigator(3, 100.0);

    nav.set_autoplay_interval(1_000);
    nav.play();
    nav.play();
    assert_eq!(events.timer_count(), 1);
    assert_eq!(events.sole_timer_interval(), Some(1_000));
    assert!(nav.is_playing());
}

#[test]
fn autoplay_ticks_cycle_through_the_slides() {
    let (_renderer, events, nav) = navigator(3, 100.0);

    nav.play();
    events.tick_timers();
    assert_eq!(nav.current_index(), 1);
    events.tick_timers();
    assert_eq!(nav.current_index(), 2);
    events.tick_timers();
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn stop_clears_the_timer_and_play_restarts_it() {
    let (_renderer, events, nav) = navigator(3, 100.0);

    nav.play();
    nav.stop();
    assert_eq!(events.timer_count(), 0);
    assert!(!nav.is_playing());
    nav.stop(); // idempotent

    nav.play();
    assert_eq!(events.timer_count(), 1);
}

#[test]
fn detach_releases_subscriptions_and_timer() {
    let (_renderer, events, nav) = navigator(3, 100.0);

    nav.play();
    nav.detach();
    assert_eq!(events.subscription_count(), 0);
    assert_eq!(events.timer_count(), 0);

    nav.detach(); // idempotent
    assert_eq!(events.subscription_count(), 0);
}

#[test]
fn dropping_the_navigator_releases_subscriptions() {
    let renderer = Rc::new(FakeRenderer::new(3, 100.0));
    let events = Rc::new(ScriptedEvents::new());
    {
        let nav =
            SlideNavigator::attach(renderer.clone(), events.clone()).expect("attach succeeds");
        nav.play();
        assert_eq!(events.subscription_count(), 3);
    }
    assert_eq!(events.subscription_count(), 0);
    assert_eq!(events.timer_count(), 0);
}

#[test]
fn refresh_shifts_the_index_left_when_an_earlier_slide_is_removed() {
    let (renderer, _events, nav) = navigator(5, 100.0);

    nav.show(2);
    assert_eq!(nav.current_slide(), Some(3));

    renderer.hide(1);
    nav.refresh();
    // Visible went [1,2,3,4,5] -> [2,3,4,5]; slide 3 is now at position 1.
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.current_slide(), Some(3));
    // Offset re-applied instantly at the shifted index.
    assert_eq!(renderer.last_offset(), Some(100.0));
    assert_eq!(renderer.last_duration(), Some(0));
}

#[test]
fn refresh_shifts_the_index_right_when_an_earlier_slide_appears() {
    let renderer = Rc::new(FakeRenderer::new(4, 100.0));
    renderer.hide(1);
    let events = Rc::new(ScriptedEvents::new());
    let nav = SlideNavigator::attach(renderer.clone(), events).expect("attach succeeds");

    nav.show(1);
    assert_eq!(nav.current_slide(), Some(3));

    renderer.unhide(1);
    nav.refresh();
    // Visible went [2,3,4] -> [1,2,3,4]; slide 3 is now at position 2.
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.current_slide(), Some(3));
}

#[test]
fn refresh_leaves_the_index_alone_for_changes_after_the_current_slide() {
    let (renderer, _events, nav) = navigator(3, 100.0);

    nav.show(1);
    renderer.push_slide(9);
    nav.refresh();
    // Appended after the current slide: position unchanged.
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.current_slide(), Some(2));

    renderer.remove_slide(3);
    nav.refresh();
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.current_slide(), Some(2));
}

#[test]
fn refresh_is_silent() {
    let (renderer, _events, nav) = navigator(5, 100.0);
    let observer = Rc::new(RecordingObserver::new());
    nav.add_observer(observer.clone());

    nav.show(2);
    let before = observer.change_count();
    renderer.hide(1);
    nav.refresh();
    assert_eq!(observer.change_count(), before);
}

#[test]
fn refresh_clamps_when_the_current_slide_disappears() {
    let (renderer, _events, nav) = navigator(3, 100.0);

    nav.show(2);
    renderer.hide(3);
    nav.refresh();
    // The shift rule cannot track a vanished slide; the index clamps into
    // the new bounds and the slide there becomes current.
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.current_slide(), Some(2));
}

#[test]
fn refresh_picks_up_a_new_container_width() {
    let (renderer, _events, nav) = navigator(3, 100.0);

    nav.show(1);
    renderer.set_width(250.0);
    nav.refresh();
    assert_eq!(nav.current_index(), 1);
    assert_eq!(renderer.last_offset(), Some(250.0));
    assert_eq!(renderer.track_size(), Some((3, 250.0)));
}

#[test]
fn show_with_an_empty_visible_set_is_a_noop() {
    let (renderer, _events, nav) = navigator(2, 100.0);

    renderer.hide(1);
    renderer.hide(2);
    nav.refresh();
    assert_eq!(nav.visible_count(), 0);
    assert_eq!(nav.current_slide(), None);

    let offsets_before = renderer.offsets().len();
    nav.show(0);
    nav.next();
    assert_eq!(renderer.offsets().len(), offsets_before);
}
