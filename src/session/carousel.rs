use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_slides: usize,
    is_auto_playing: bool,
}

impl CarouselState {
    pub fn new(total_slides: usize) -> Self {
        Self {
            current_index: 0,
            total_slides,
            is_auto_playing: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    /// Wraps any integer onto a slide index. Returns true if the index moved.
    pub fn go_to(&mut self, index: i64) -> bool {
        if self.total_slides == 0 {
            return false;
        }
        let target = index.rem_euclid(self.total_slides as i64) as usize;
        if target == self.current_index {
            return false;
        }
        self.current_index = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_index as i64 + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current_index as i64 - 1)
    }

    pub fn view(&self) -> SlideView {
        SlideView {
            offset_percent: -(self.current_index as i64) * 100,
            active_indicator: self.current_index,
            total: self.total_slides,
        }
    }
}

/// Render intent for the slide strip and its indicator dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub offset_percent: i64,
    pub active_indicator: usize,
    pub total: usize,
}

impl SlideView {
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }

    pub fn is_active(&self, indicator: usize) -> bool {
        indicator == self.active_indicator
    }
}

/// Cyclic slide show with autoplay that pauses while the pointer or focus is
/// inside the carousel.
///
/// The engine owns at most one autoplay timer at a time; dropping the engine
/// cancels it.
pub struct CarouselEngine<S: Scheduler> {
    state: Rc<RefCell<CarouselState>>,
    scheduler: S,
    interval: u32,
    on_render: Callback<SlideView>,
    autoplay: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> CarouselEngine<S> {
    pub fn new(total_slides: usize, scheduler: S, interval: u32, on_render: Callback<SlideView>) -> Self {
        Self {
            state: Rc::new(RefCell::new(CarouselState::new(total_slides))),
            scheduler,
            interval,
            on_render,
            autoplay: RefCell::new(None),
        }
    }

    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    /// Renders the first slide and begins autoplay.
    pub fn start(&self) {
        let view = self.state.borrow().view();
        self.on_render.emit(view);
        self.resume();
    }

    pub fn go_to(&self, index: i64) {
        self.apply(|state| state.go_to(index));
    }

    pub fn next(&self) {
        self.apply(CarouselState::next);
    }

    pub fn prev(&self) {
        self.apply(CarouselState::prev);
    }

    /// Pointer or focus entered the carousel.
    pub fn pause(&self) {
        self.state.borrow_mut().is_auto_playing = false;
        self.autoplay.borrow_mut().take();
    }

    /// Pointer or focus left the carousel. Always restarts a full interval.
    pub fn resume(&self) {
        self.autoplay.borrow_mut().take();
        if self.state.borrow().total_slides == 0 {
            return;
        }
        self.state.borrow_mut().is_auto_playing = true;

        let state = Rc::downgrade(&self.state);
        let on_render = self.on_render.clone();
        let handle = self.scheduler.interval(
            self.interval,
            Box::new(move || autoplay_tick(&state, &on_render)),
        );
        *self.autoplay.borrow_mut() = Some(handle);
    }

    /// Maps a global key press onto navigation. Returns true if it was handled.
    pub fn handle_key(&self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }

    fn apply(&self, transition: impl FnOnce(&mut CarouselState) -> bool) {
        let view = {
            let mut state = self.state.borrow_mut();
            transition(&mut *state).then(|| state.view())
        };
        if let Some(view) = view {
            self.on_render.emit(view);
        }
    }
}

fn autoplay_tick(state: &Weak<RefCell<CarouselState>>, on_render: &Callback<SlideView>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let view = {
        let mut state = state.borrow_mut();
        if !state.is_auto_playing {
            return;
        }
        state.next().then(|| state.view())
    };
    if let Some(view) = view {
        debug!("Autoplay advanced to slide {}", view.active_indicator);
        on_render.emit(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;

    fn engine(
        total: usize,
        scheduler: &ManualScheduler,
    ) -> (CarouselEngine<ManualScheduler>, Rc<RefCell<Vec<SlideView>>>) {
        let views = Rc::new(RefCell::new(Vec::new()));
        let on_render = {
            let views = views.clone();
            Callback::from(move |view: SlideView| views.borrow_mut().push(view))
        };
        (CarouselEngine::new(total, scheduler.clone(), 5000, on_render), views)
    }

    #[test]
    fn next_cycles_back_to_start_for_any_size() {
        for total in 1..=7 {
            for start in 0..total {
                let mut state = CarouselState::new(total);
                state.go_to(start as i64);
                for _ in 0..total {
                    state.next();
                }
                assert_eq!(state.current_index(), start, "total={total} start={start}");
            }
        }
    }

    #[test]
    fn go_to_wraps_negative_and_large_indices() {
        let mut state = CarouselState::new(4);
        for i in -9i64..=9 {
            state.go_to(i);
            assert_eq!(state.current_index() as i64, i.rem_euclid(4));
        }
        state.go_to(i64::MIN + 1);
        assert!(state.current_index() < 4);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut state = CarouselState::new(0);
        assert!(!state.go_to(3));
        assert!(!state.next());
        assert!(!state.prev());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut state = CarouselState::new(1);
        assert!(!state.next());
        assert!(!state.prev());
        assert!(!state.go_to(-5));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn three_slides_next_sequence_with_indicators() {
        let scheduler = ManualScheduler::new();
        let (carousel, views) = engine(3, &scheduler);
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.next();
            let view = *views.borrow().last().unwrap();
            assert!(view.is_active(carousel.state().current_index()));
            assert_eq!(view.offset_percent, -(view.active_indicator as i64) * 100);
            seen.push(carousel.state().current_index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_wraps_to_last_slide() {
        let scheduler = ManualScheduler::new();
        let (carousel, views) = engine(3, &scheduler);
        carousel.prev();
        assert_eq!(carousel.state().current_index(), 2);
        assert_eq!(views.borrow().last().unwrap().transform(), "translateX(-200%)");
    }

    #[test]
    fn go_to_current_slide_does_not_render() {
        let scheduler = ManualScheduler::new();
        let (carousel, views) = engine(3, &scheduler);
        carousel.go_to(0);
        carousel.go_to(3);
        assert!(views.borrow().is_empty());
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let scheduler = ManualScheduler::new();
        let (carousel, views) = engine(3, &scheduler);
        carousel.start();
        assert_eq!(views.borrow().len(), 1);
        assert!(carousel.state().is_auto_playing());

        scheduler.advance(4999);
        assert_eq!(carousel.state().current_index(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.state().current_index(), 1);
        scheduler.advance(10_000);
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(3, &scheduler);
        carousel.start();
        carousel.pause();
        assert!(!carousel.state().is_auto_playing());
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(60_000);
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn leave_restarts_full_interval() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(3, &scheduler);
        carousel.start();
        scheduler.advance(4000);
        carousel.pause();
        carousel.resume();

        // No carry-over of the 4000 ms already elapsed.
        scheduler.advance(4999);
        assert_eq!(carousel.state().current_index(), 0);
        scheduler.advance(1);
        assert_eq!(carousel.state().current_index(), 1);
    }

    #[test]
    fn any_resume_restarts_after_overlapping_pauses() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(3, &scheduler);
        carousel.start();
        // Pointer enters, then focus moves inside; pointer leaves first.
        carousel.pause();
        carousel.pause();
        carousel.resume();
        assert!(carousel.state().is_auto_playing());
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(5000);
        assert_eq!(carousel.state().current_index(), 1);
    }

    #[test]
    fn repeated_resume_keeps_a_single_timer() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(3, &scheduler);
        carousel.start();
        carousel.resume();
        carousel.resume();
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(5000);
        assert_eq!(carousel.state().current_index(), 1);
    }

    #[test]
    fn empty_carousel_starts_no_timer() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(0, &scheduler);
        carousel.start();
        assert_eq!(scheduler.pending(), 0);
        assert!(!carousel.state().is_auto_playing());
    }

    #[test]
    fn dropping_engine_cancels_autoplay() {
        let scheduler = ManualScheduler::new();
        let (carousel, _) = engine(3, &scheduler);
        carousel.start();
        drop(carousel);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn arrow_keys_navigate_without_debounce() {
        let scheduler = ManualScheduler::new();
        let (carousel, views) = engine(4, &scheduler);
        for _ in 0..6 {
            assert!(carousel.handle_key("ArrowRight"));
        }
        assert_eq!(carousel.state().current_index(), 2);
        assert!(carousel.handle_key("ArrowLeft"));
        assert_eq!(carousel.state().current_index(), 1);
        assert!(!carousel.handle_key("Enter"));
        assert_eq!(views.borrow().len(), 7);
    }
}
