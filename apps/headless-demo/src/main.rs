//! Headless walkthrough of the swipe carousel.
//!
//! Wires a `SlideNavigator` to a console renderer and a scripted event
//! source, then plays through the interesting flows: a fast flick, a
//! snap-back, a vertical scroll hand-off, a slide removal with refresh, and
//! an autoplay wrap. Run with `RUST_LOG=debug` to see the navigator's own
//! transition logging as well.

use std::cell::{Cell, RefCell};
use std::error::Error;
use std::rc::Rc;

use swipe_core::{PointerEventKind, PointerSample, SlideId};
use swipe_testing::ScriptedEvents;
use swipe_ui::{Renderer, SlideNavigator, SlideObserver};

/// Renderer that narrates every style change it would apply.
struct ConsoleRenderer {
    slides: RefCell<Vec<SlideId>>,
    hidden: RefCell<Vec<SlideId>>,
    width: Cell<f32>,
    duration: Cell<u64>,
}

impl ConsoleRenderer {
    fn new(count: usize, width: f32) -> Self {
        Self {
            slides: RefCell::new((1..=count as u64).collect()),
            hidden: RefCell::new(Vec::new()),
            width: Cell::new(width),
            duration: Cell::new(0),
        }
    }

    fn hide(&self, slide: SlideId) {
        self.hidden.borrow_mut().push(slide);
    }
}

impl Renderer for ConsoleRenderer {
    fn all_slides(&self) -> Vec<SlideId> {
        self.slides.borrow().clone()
    }

    fn visible_slides(&self) -> Vec<SlideId> {
        let hidden = self.hidden.borrow();
        self.slides
            .borrow()
            .iter()
            .copied()
            .filter(|slide| !hidden.contains(slide))
            .collect()
    }

    fn container_width(&self) -> f32 {
        self.width.get()
    }

    fn set_transition_duration(&self, ms: u64) {
        self.duration.set(ms);
    }

    fn set_offset(&self, px: f32) {
        println!("  [renderer] offset {px:.0}px over {}ms", self.duration.get());
    }

    fn resize_track(&self, total: usize, slide_width: f32) {
        println!(
            "  [renderer] track sized to {total} x {slide_width:.0}px"
        );
    }
}

struct ConsoleObserver;

impl SlideObserver for ConsoleObserver {
    fn on_slide_changed(&self, index: usize, slide: SlideId) {
        println!("  [observer] slide changed: index {index}, slide {slide}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let renderer = Rc::new(ConsoleRenderer::new(4, 320.0));
    let events = Rc::new(ScriptedEvents::new());
    let navigator = SlideNavigator::attach(renderer.clone(), events.clone())?;
    navigator.add_observer(Rc::new(ConsoleObserver));

    println!("-- fast flick toward the next slide");
    events.touch(PointerEventKind::Down, PointerSample::new(300.0, 40.0, 0));
    events.touch(PointerEventKind::Move, PointerSample::new(240.0, 42.0, 30));
    events.touch(PointerEventKind::Up, PointerSample::new(240.0, 42.0, 60));

    println!("-- slow small drag snaps back");
    events.touch(PointerEventKind::Down, PointerSample::new(300.0, 40.0, 1_000));
    events.touch(PointerEventKind::Move, PointerSample::new(270.0, 40.0, 1_200));
    events.touch(PointerEventKind::Up, PointerSample::new(270.0, 40.0, 1_400));

    println!("-- steep gesture is ceded to vertical scrolling");
    events.touch(PointerEventKind::Down, PointerSample::new(150.0, 40.0, 2_000));
    events.touch(PointerEventKind::Move, PointerSample::new(155.0, 90.0, 2_020));
    events.touch(PointerEventKind::Up, PointerSample::new(155.0, 200.0, 2_200));

    println!("-- slide 1 is removed; refresh keeps the current slide in view");
    renderer.hide(1);
    navigator.refresh();
    println!(
        "  now at index {} of {}",
        navigator.current_index(),
        navigator.visible_count()
    );

    println!("-- autoplay wraps after the last slide");
    navigator.set_autoplay_interval(1_500);
    navigator.play();
    for _ in 0..4 {
        events.tick_timers();
    }
    navigator.stop();

    navigator.detach();
    log::info!("demo finished");
    Ok(())
}
