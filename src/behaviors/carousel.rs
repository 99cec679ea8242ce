use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::timers::Timers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePart {
    Slide(usize),
    Indicator(usize),
}

pub trait SlideView {
    fn set_active_visual(&mut self, part: SlidePart, active: bool);

    fn set_track_position(&mut self, index: usize);
}

struct CarouselState<V, T: Timers> {
    view: V,
    timers: T,
    slide_count: usize,
    interval_ms: u32,
    current: usize,
    pending: Option<T::Handle>,
}

impl<V: SlideView, T: Timers> CarouselState<V, T> {
    fn render(&mut self) {
        self.view.set_track_position(self.current);
        for index in 0..self.slide_count {
            let active = index == self.current;
            self.view.set_active_visual(SlidePart::Slide(index), active);
            self.view.set_active_visual(SlidePart::Indicator(index), active);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.clear_timeout(handle);
        }
    }
}

pub struct Carousel<V, T>
where
    V: SlideView + 'static,
    T: Timers + 'static,
{
    state: Rc<RefCell<CarouselState<V, T>>>,
}

impl<V, T> Carousel<V, T>
where
    V: SlideView + 'static,
    T: Timers + 'static,
{
    /// Renders slide 0 and starts automatic rotation. Returns `None` without
    /// touching the view or the timers when there are no slides.
    pub fn initialize(view: V, timers: T, slide_count: usize, interval_ms: u32) -> Option<Self> {
        if slide_count == 0 {
            debug!("Carousel has no slides, skipping");
            return None;
        }

        let state = Rc::new(RefCell::new(CarouselState {
            view,
            timers,
            slide_count,
            interval_ms,
            current: 0,
            pending: None,
        }));
        state.borrow_mut().render();

        let carousel = Self { state };
        carousel.start();
        debug!("Carousel started with {} slides every {}ms", slide_count, interval_ms);
        Some(carousel)
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.state.borrow().current
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Shows slide `index` and restarts the rotation timer from now.
    pub fn go_to(&self, index: usize) {
        {
            let mut state = self.state.borrow_mut();
            if index >= state.slide_count {
                debug!("Ignoring jump to slide {} of {}", index, state.slide_count);
                return;
            }
            state.cancel_pending();
            state.current = index;
            state.render();
        }
        schedule(&self.state);
    }

    /// Starts automatic rotation unless a tick is already pending.
    pub fn start(&self) {
        if !self.is_running() {
            schedule(&self.state);
        }
    }

    pub fn stop(&self) {
        self.state.borrow_mut().cancel_pending();
    }
}

impl<V, T> Drop for Carousel<V, T>
where
    V: SlideView + 'static,
    T: Timers + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<V, T>(state: &Rc<RefCell<CarouselState<V, T>>>)
where
    V: SlideView + 'static,
    T: Timers + 'static,
{
    let weak: Weak<RefCell<CarouselState<V, T>>> = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    guard.cancel_pending();
    let delay = guard.interval_ms;
    let handle = guard.timers.set_timeout(
        delay,
        Box::new(move || {
            if let Some(state) = weak.upgrade() {
                advance_automatically(&state);
            }
        }),
    );
    guard.pending = Some(handle);
}

fn advance_automatically<V, T>(state: &Rc<RefCell<CarouselState<V, T>>>)
where
    V: SlideView + 'static,
    T: Timers + 'static,
{
    {
        let mut guard = state.borrow_mut();
        // the handle that just fired is spent
        guard.pending = None;
        guard.current = (guard.current + 1) % guard.slide_count;
        guard.render();
    }
    schedule(state);
}
