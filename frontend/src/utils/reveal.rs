//! Reveal-on-scroll: a section flips to visible the first time enough of it
//! enters the viewport, and stays visible.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const FEATURES_THRESHOLD: f64 = 0.1;
pub const SECTION_THRESHOLD: f64 = 0.2;
pub const FEATURES_STAGGER: Duration = Duration::from_millis(100);

/// One-shot trigger. Once it has fired every further observation is a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    fired: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true exactly once: on the first observation that is
    /// intersecting at or above the threshold.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.has_fired() || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Owns an `IntersectionObserver` and its JS callback. Dropping it
/// disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn watch<F>(target: &Element, threshold: f64, on_reveal: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut latch = RevealLatch::new(threshold);
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.disconnect();
                        if let Some(reveal) = on_reveal.take() {
                            reveal();
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced element has crossed `threshold`. If the
/// observer cannot be created the element is revealed straight away.
#[hook]
pub fn use_reveal(node_ref: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node_ref| {
                let observer = node_ref.cast::<Element>().and_then(|element| {
                    let visible = visible.clone();
                    RevealObserver::watch(&element, threshold, move || visible.set(true))
                });
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            node_ref,
        );
    }
    *visible
}

#[derive(Clone, Debug, PartialEq)]
struct Stagger {
    shown: Vec<bool>,
}

impl Reducible for Stagger {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        match self.shown.get(index) {
            Some(false) => {
                let mut shown = self.shown.clone();
                shown[index] = true;
                Rc::new(Stagger { shown })
            }
            _ => self,
        }
    }
}

/// Staggered variant: once the parent is revealed, child `i` follows after
/// `i * step`. Returns one flag per child.
#[hook]
pub fn use_staggered_reveal(node_ref: NodeRef, count: usize, threshold: f64, step: Duration) -> Vec<bool> {
    let parent_visible = use_reveal(node_ref, threshold);
    let stagger = use_reducer(move || Stagger {
        shown: vec![false; count],
    });
    {
        let dispatcher = stagger.dispatcher();
        use_effect_with_deps(
            move |visible| {
                let timers: Vec<Timeout> = if *visible {
                    (0..count)
                        .map(|index| {
                            let dispatcher = dispatcher.clone();
                            let delay = stagger_delay(index, step).as_millis() as u32;
                            Timeout::new(delay, move || dispatcher.dispatch(index))
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                move || drop(timers)
            },
            parent_visible,
        );
    }
    stagger.shown.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut latch = RevealLatch::new(0.2);
        assert!(!latch.observe(true, 0.1));
        assert!(latch.observe(true, 0.2));
        assert!(latch.has_fired());
    }

    #[test]
    fn never_refires_after_leaving_and_reentering() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(true, 0.5));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
        assert!(!latch.observe(true, 0.3));
    }

    #[test]
    fn not_intersecting_never_fires() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.has_fired());
    }

    #[test]
    fn stagger_delays_grow_linearly() {
        let delays: Vec<u128> = (0..4)
            .map(|i| stagger_delay(i, FEATURES_STAGGER).as_millis())
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn stagger_marks_each_child_once() {
        let state = Rc::new(Stagger {
            shown: vec![false; 3],
        });
        let state = state.reduce(1);
        assert_eq!(state.shown, vec![false, true, false]);
        let same = state.clone().reduce(1);
        assert!(Rc::ptr_eq(&state, &same));
        let out_of_range = state.clone().reduce(7);
        assert!(Rc::ptr_eq(&state, &out_of_range));
    }
}
