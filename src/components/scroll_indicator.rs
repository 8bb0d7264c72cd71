use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn read(window: &Window) -> Result<Self, JsValue> {
        let scroll_y = window.scroll_y()?;
        let viewport_height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| JsValue::from_str("no document element"))?
            .scroll_height();
        Ok(Self {
            scroll_y,
            viewport_height,
            document_height: f64::from(document_height),
        })
    }

    pub fn is_at_bottom(&self, tolerance: f64) -> bool {
        self.scroll_y + self.viewport_height >= self.document_height - tolerance
    }
}

/// Tracks whether the page is scrolled (close enough) to the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    tolerance: f64,
    at_bottom: bool,
    released: bool,
}

impl ScrollState {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            at_bottom: false,
            released: false,
        }
    }

    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    /// Recomputes from fresh metrics. Returns `true` if the flag changed.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> bool {
        if self.released {
            return false;
        }
        let at_bottom = metrics.is_at_bottom(self.tolerance);
        let changed = at_bottom != self.at_bottom;
        self.at_bottom = at_bottom;
        changed
    }

    pub fn release(&mut self) {
        self.released = true;
    }
}

/// Bouncing down arrow pinned to the bottom of the viewport, hidden once
/// the reader reaches the end of the page.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let at_bottom = use_state(|| false);

    {
        let at_bottom = at_bottom.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let state = Rc::new(RefCell::new(ScrollState::new(config::BOTTOM_TOLERANCE_PX)));
                    let recompute = {
                        let window = window.clone();
                        let state = state.clone();
                        move || match ScrollMetrics::read(&window) {
                            Ok(metrics) => {
                                let mut state = state.borrow_mut();
                                if state.update(&metrics) {
                                    at_bottom.set(state.at_bottom());
                                }
                            }
                            Err(e) => warn!("Could not read scroll position: {:?}", e),
                        }
                    };
                    // Short pages never scroll, so check once up front.
                    recompute();

                    let callback = Closure::wrap(Box::new(recompute) as Box<dyn FnMut()>);
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            state.borrow_mut().release();
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }),
                        Err(e) => {
                            warn!("Could not listen for scroll events: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    at_bottom.set(true);
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    if *at_bottom {
        return html! {};
    }

    html! {
        <div class="fixed bottom-10 left-1/2 -translate-x-1/2 z-50">
            <div class="animate-bounce bg-white/20 p-2 w-10 h-10 ring-1 ring-slate-900/5 shadow-lg rounded-full flex items-center justify-center">
                <svg class="w-6 h-6 text-gray-800" fill="none" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" viewBox="0 0 24 24" stroke="currentColor">
                    <path d="M19 14l-7 7m0 0l-7-7m7 7V3"></path>
                </svg>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 50.0;

    fn metrics(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_y, viewport_height, document_height }
    }

    #[test]
    fn test_at_bottom_boundary() {
        // H = 3000, V = 800 -> bottom from scroll_y >= 3000 - 800 - 50 = 2150
        assert!(!metrics(0.0, 800.0, 3000.0).is_at_bottom(TOLERANCE));
        assert!(!metrics(2149.0, 800.0, 3000.0).is_at_bottom(TOLERANCE));
        assert!(metrics(2150.0, 800.0, 3000.0).is_at_bottom(TOLERANCE));
        assert!(metrics(2200.0, 800.0, 3000.0).is_at_bottom(TOLERANCE));
    }

    #[test]
    fn test_short_page_is_at_bottom() {
        assert!(metrics(0.0, 800.0, 800.0).is_at_bottom(TOLERANCE));
        assert!(metrics(0.0, 800.0, 600.0).is_at_bottom(TOLERANCE));
        assert!(metrics(0.0, 800.0, 840.0).is_at_bottom(TOLERANCE));
    }

    #[test]
    fn test_state_follows_scrolling() {
        let mut state = ScrollState::new(TOLERANCE);
        assert!(!state.at_bottom());
        assert!(!state.update(&metrics(100.0, 800.0, 3000.0)));
        assert!(state.update(&metrics(2200.0, 800.0, 3000.0)));
        assert!(state.at_bottom());
        assert!(!state.update(&metrics(2190.0, 800.0, 3000.0)));
        assert!(state.update(&metrics(1000.0, 800.0, 3000.0)));
        assert!(!state.at_bottom());
    }

    #[test]
    fn test_released_state_ignores_scrolls() {
        let mut state = ScrollState::new(TOLERANCE);
        state.release();
        assert!(!state.update(&metrics(2200.0, 800.0, 3000.0)));
        assert!(!state.at_bottom());
    }
}
