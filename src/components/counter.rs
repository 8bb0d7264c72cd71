use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::components::reveal::RevealState;
use crate::components::viewport::ViewportWatch;
use crate::config;

/// Linear progress in `[0, 1]` after `elapsed_ms` of a `duration_ms` animation.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms.max(0.0) / duration_ms).min(1.0)
}

pub fn value_at(progress: f64, target: u32) -> u32 {
    (progress * f64::from(target)).floor() as u32
}

/// Result of feeding one animation frame to a [`CounterState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Not running: never triggered, already finished, or released.
    Ignored,
    /// Value for this frame; another frame is wanted.
    Continue(u32),
    /// Final value; no more frames.
    Done(u32),
}

/// Counts from zero up to `target` once the number has been seen.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    target: u32,
    duration_ms: f64,
    current: u32,
    gate: RevealState,
    started_at: Option<f64>,
    finished: bool,
    released: bool,
}

impl CounterState {
    pub fn new(target: u32, threshold: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            current: 0,
            gate: RevealState::new(threshold),
            started_at: None,
            finished: false,
            released: false,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Feeds an intersection report; `true` means the animation should start.
    /// Fires at most once.
    pub fn trigger(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        !self.released && self.gate.observe(is_intersecting, ratio)
    }

    /// Advances to the frame at `now` (ms). The first frame after the trigger
    /// fixes the start time.
    pub fn tick(&mut self, now: f64) -> Frame {
        if !self.gate.revealed() || self.finished || self.released {
            return Frame::Ignored;
        }
        let start = *self.started_at.get_or_insert(now);
        let progress = progress(now - start, self.duration_ms);
        self.current = self.current.max(value_at(progress, self.target));
        if progress < 1.0 {
            Frame::Continue(self.current)
        } else {
            self.finished = true;
            Frame::Done(self.current)
        }
    }

    pub fn release(&mut self) {
        self.released = true;
        self.gate.release();
    }
}

/// A self-rescheduling `requestAnimationFrame` loop. Runs until `on_frame`
/// returns `false` or the loop is dropped.
struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    fn start<F>(window: Window, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let pending = pending.clone();
            let next = callback.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(cb) = next.borrow().as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => error!("Failed to schedule counter frame: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(closure);

        Ok(Self {
            window,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> slot -> closure cycle.
        self.callback.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub target: u32,
}

#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node_ref = use_node_ref();
    let current = use_state(|| 0u32);

    {
        let node_ref = node_ref.clone();
        let current = current.clone();
        use_effect_with_deps(
            move |target| {
                let target = *target;
                let state = Rc::new(RefCell::new(CounterState::new(
                    target,
                    config::COUNTER_THRESHOLD,
                    config::COUNTER_DURATION_MS,
                )));
                let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
                current.set(0);

                let watch = match (node_ref.cast::<Element>(), web_sys::window()) {
                    (Some(element), Some(window)) => {
                        let state = state.clone();
                        let frames = frames.clone();
                        let current = current.clone();
                        ViewportWatch::observe(element, config::COUNTER_THRESHOLD, move |entry, observer| {
                            if !state
                                .borrow_mut()
                                .trigger(entry.is_intersecting(), entry.intersection_ratio())
                            {
                                return;
                            }
                            observer.disconnect();
                            debug!("Counting up to {}", target);

                            let state = state.clone();
                            let on_frame = {
                                let current = current.clone();
                                move |timestamp: f64| match state.borrow_mut().tick(timestamp) {
                                    Frame::Continue(value) => {
                                        current.set(value);
                                        true
                                    }
                                    Frame::Done(value) => {
                                        current.set(value);
                                        false
                                    }
                                    Frame::Ignored => false,
                                }
                            };
                            match FrameLoop::start(window.clone(), on_frame) {
                                Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                                Err(e) => {
                                    warn!("Animation frames unavailable, showing final value: {:?}", e);
                                    current.set(target);
                                }
                            }
                        })
                        .map_err(|e| warn!("IntersectionObserver unavailable, showing final value: {:?}", e))
                        .ok()
                    }
                    _ => None,
                };
                if watch.is_none() {
                    current.set(target);
                }

                move || {
                    state.borrow_mut().release();
                    frames.borrow_mut().take();
                    drop(watch);
                }
            },
            props.target,
        );
    }

    html! {
        <span ref={node_ref}>{ *current }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 2000.0;

    fn started(target: u32) -> CounterState {
        let mut counter = CounterState::new(target, 0.5, DURATION);
        assert!(counter.trigger(true, 0.5));
        counter
    }

    #[test]
    fn test_progress_is_linear_and_clamped() {
        assert_eq!(progress(0.0, DURATION), 0.0);
        assert_eq!(progress(500.0, DURATION), 0.25);
        assert_eq!(progress(1000.0, DURATION), 0.5);
        assert_eq!(progress(2000.0, DURATION), 1.0);
        assert_eq!(progress(9000.0, DURATION), 1.0);
        assert_eq!(progress(-16.0, DURATION), 0.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_counts_to_target_over_duration() {
        let mut counter = started(2000);
        assert_eq!(counter.tick(100.0), Frame::Continue(0));
        assert_eq!(counter.tick(1100.0), Frame::Continue(1000));
        assert_eq!(counter.tick(1700.0), Frame::Continue(1600));
        assert_eq!(counter.tick(2100.0), Frame::Done(2000));
        assert_eq!(counter.tick(2116.0), Frame::Ignored);
        assert_eq!(counter.current(), 2000);
    }

    #[test]
    fn test_late_frame_finishes_immediately() {
        let mut counter = started(10);
        assert_eq!(counter.tick(0.0), Frame::Continue(0));
        assert_eq!(counter.tick(5000.0), Frame::Done(10));
    }

    #[test]
    fn test_value_floors() {
        let mut counter = started(10);
        counter.tick(0.0);
        // 10 * 0.299 = 2.99
        assert_eq!(counter.tick(598.0), Frame::Continue(2));
    }

    #[test]
    fn test_zero_target_stays_zero() {
        let mut counter = started(0);
        assert_eq!(counter.tick(0.0), Frame::Continue(0));
        assert_eq!(counter.tick(1000.0), Frame::Continue(0));
        assert_eq!(counter.tick(2000.0), Frame::Done(0));
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn test_never_decreases() {
        let mut counter = started(100);
        counter.tick(0.0);
        assert_eq!(counter.tick(1000.0), Frame::Continue(50));
        assert_eq!(counter.tick(500.0), Frame::Continue(50));
    }

    #[test]
    fn test_triggers_once() {
        let mut counter = CounterState::new(5, 0.5, DURATION);
        assert!(!counter.trigger(true, 0.2));
        assert!(!counter.trigger(false, 0.0));
        assert_eq!(counter.tick(0.0), Frame::Ignored);
        assert!(counter.trigger(true, 0.6));
        assert!(!counter.trigger(true, 1.0));
    }

    #[test]
    fn test_released_counter_ignores_events() {
        let mut counter = CounterState::new(5, 0.5, DURATION);
        counter.release();
        assert!(!counter.trigger(true, 1.0));
        assert_eq!(counter.tick(0.0), Frame::Ignored);

        let mut counter = started(2000);
        counter.tick(0.0);
        counter.tick(1000.0);
        counter.release();
        assert_eq!(counter.tick(1500.0), Frame::Ignored);
        assert_eq!(counter.current(), 1000);
    }
}
