use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::viewport::ViewportWatch;
use crate::config;

/// Class applied before the block has been seen.
pub const HIDDEN_CLASS: &str = "opacity-0";

// Ratios reported at a threshold crossing can undershoot it by rounding.
// A report counts as reaching the threshold when it is at most this far below.
const RATIO_EPSILON: f64 = 1e-3;

/// Threshold handed to both `RevealState` and the browser observer, which
/// rejects anything outside `[0, 1]`. NaN falls back to the default.
pub fn observer_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        config::REVEAL_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// One-shot visibility state for a revealed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
    released: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: observer_threshold(threshold),
            revealed: false,
            released: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the block to revealed. A ratio up to 1e-3 below the
    /// threshold still counts.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || self.released {
            return false;
        }
        if !is_intersecting || ratio + RATIO_EPSILON < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Detaches the state from its observer; later reports are ignored.
    pub fn release(&mut self) {
        self.released = true;
    }
}

pub fn reveal_class(revealed: bool, animation: &str, delay: Option<&str>) -> String {
    match (revealed, delay.filter(|d| !d.is_empty())) {
        (false, _) => HIDDEN_CLASS.to_string(),
        (true, Some(delay)) => format!("{} {}", animation, delay),
        (true, None) => animation.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub animation: AttrValue,
    #[prop_or_default]
    pub delay: Option<AttrValue>,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Keeps its children transparent until they scroll into view, then plays
/// `animation` once.
#[function_component(AnimateOnScroll)]
pub fn animate_on_scroll(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |threshold| {
                let state = Rc::new(RefCell::new(RevealState::new(*threshold)));
                let threshold = state.borrow().threshold();
                let watch = node_ref.cast::<Element>().and_then(|element| {
                    let state = state.clone();
                    let revealed = revealed.clone();
                    let watched = element.clone();
                    ViewportWatch::observe(element, threshold, move |entry, observer| {
                        if state
                            .borrow_mut()
                            .observe(entry.is_intersecting(), entry.intersection_ratio())
                        {
                            debug!("Revealing block at ratio {:.2}", entry.intersection_ratio());
                            observer.unobserve(&watched);
                            revealed.set(true);
                        }
                    })
                    .map_err(|e| warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e))
                    .ok()
                });
                if watch.is_none() {
                    revealed.set(true);
                }

                move || {
                    state.borrow_mut().release();
                    drop(watch);
                }
            },
            props.threshold,
        );
    }

    html! {
        <div ref={node_ref} class={reveal_class(*revealed, &props.animation, props.delay.as_deref())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once_at_threshold() {
        for threshold in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
            let mut state = RevealState::new(threshold);
            assert!(state.observe(true, threshold), "threshold {threshold}");
            assert!(state.revealed());
            assert!(!state.observe(true, 1.0));
            assert!(!state.observe(true, threshold));
        }
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut state = RevealState::new(0.5);
        for ratio in [0.0, 0.1, 0.3, 0.49] {
            assert!(!state.observe(true, ratio));
        }
        assert!(!state.observe(false, 0.0));
        assert!(!state.revealed());
    }

    #[test]
    fn test_not_intersecting_report_is_ignored() {
        let mut state = RevealState::new(0.0);
        assert!(!state.observe(false, 0.0));
        assert!(!state.revealed());
        assert!(state.observe(true, 0.0));
    }

    #[test]
    fn test_leaving_viewport_does_not_hide() {
        let mut state = RevealState::new(0.1);
        assert!(state.observe(true, 0.2));
        assert!(!state.observe(false, 0.0));
        assert!(state.revealed());
    }

    #[test]
    fn test_rounding_at_crossing() {
        let mut state = RevealState::new(0.5);
        assert!(state.observe(true, 0.4999));
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut state = RevealState::new(3.0);
        assert!(!state.observe(true, 0.9));
        assert!(state.observe(true, 1.0));

        let mut state = RevealState::new(f64::NAN);
        assert!(!state.observe(true, 0.05));
        assert!(state.observe(true, config::REVEAL_THRESHOLD));
    }

    #[test]
    fn test_observer_gets_sanitized_threshold() {
        assert_eq!(observer_threshold(3.0), 1.0);
        assert_eq!(observer_threshold(-0.5), 0.0);
        assert_eq!(observer_threshold(f64::NAN), config::REVEAL_THRESHOLD);
        assert_eq!(observer_threshold(0.5), 0.5);
        for raw in [3.0, -0.5, f64::NAN, 0.25] {
            assert_eq!(RevealState::new(raw).threshold(), observer_threshold(raw));
        }
    }

    #[test]
    fn test_full_visibility_tolerance_is_bounded() {
        let mut state = RevealState::new(1.0);
        assert!(!state.observe(true, 0.998));
        assert!(state.observe(true, 0.9995));
    }

    #[test]
    fn test_released_state_ignores_reports() {
        let mut state = RevealState::new(0.1);
        state.release();
        assert!(!state.observe(true, 1.0));
        assert!(!state.revealed());
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false, "animate-zoom-in", None), HIDDEN_CLASS);
        assert_eq!(reveal_class(false, "animate-zoom-in", Some("anim-delay-200")), HIDDEN_CLASS);
        assert_eq!(reveal_class(true, "animate-zoom-in", None), "animate-zoom-in");
        assert_eq!(reveal_class(true, "animate-zoom-in", Some("")), "animate-zoom-in");
        assert_eq!(
            reveal_class(true, "animate-fade-in-up", Some("anim-delay-200")),
            "animate-fade-in-up anim-delay-200"
        );
    }
}
