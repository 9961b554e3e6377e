use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};
use yew::prelude::*;

use crate::config;

/// Attribute naming the reveal key of an element that fades in on scroll.
pub const REVEAL_ATTR: &str = "data-reveal";

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// The first callback after `observe` reports any overlap at all, so the
/// ratio is checked here as well as by the observer threshold.
pub fn crosses_reveal(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= config::REVEAL_THRESHOLD
}

/// Keys of the elements that have already faded in. Keys are only ever added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    /// Returns true the first time `key` is marked.
    pub fn mark(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn class(&self, key: &str) -> Option<&'static str> {
        self.is_revealed(key).then_some("visible")
    }
}

impl Reducible for RevealSet {
    type Action = String;

    fn reduce(self: Rc<Self>, key: String) -> Rc<Self> {
        if self.is_revealed(&key) {
            return self;
        }
        let mut next = (*self).clone();
        next.mark(&key);
        Rc::new(next)
    }
}

/// Window `scroll` listener, removed again when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn new(window: Window, mut on_offset: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let source = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = source.scroll_y() {
                on_offset(offset);
            }
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Watches every `[data-reveal]` element until it first enters the viewport.
/// Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(document: &Document, mut on_reveal: impl FnMut(String) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !crosses_reveal(entry.is_intersecting(), entry.intersection_ratio()) {
                    continue;
                }
                let target = entry.target();
                // Revealed once, never hidden again
                observer.unobserve(&target);
                if let Some(key) = target.get_attribute(REVEAL_ATTR) {
                    on_reveal(key);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets = document.query_selector_all(&format!("[{}]", REVEAL_ATTR))?;
        for i in 0..targets.length() {
            if let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
        debug!("Observing {} reveal targets", targets.length());

        Ok(RevealObserver { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the page is scrolled past the navbar threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    // A reload can restore a scrolled position before any event fires
                    scrolled.set(window.scroll_y().map(is_scrolled).unwrap_or(false));
                    let setter = scrolled.setter();
                    ScrollListener::new(window, move |offset| setter.set(is_scrolled(offset)))
                        .map_err(|e| warn!("Could not attach scroll listener: {:?}", e))
                        .ok()
                });
                move || drop(listener)
            },
            (),
        );
    }

    *scrolled
}

/// Reveal state for the `[data-reveal]` elements rendered by the calling component.
#[hook]
pub fn use_reveal() -> UseReducerHandle<RevealSet> {
    let reveal = use_reducer_eq(RevealSet::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| {
                        RevealObserver::new(&document, move |key| dispatcher.dispatch(key))
                            .map_err(|e| warn!("Could not start reveal observer: {:?}", e))
                            .ok()
                    });
                move || drop(observer)
            },
            (),
        );
    }

    reveal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2_000.0));
    }

    #[test]
    fn scrolled_follows_latest_offset() {
        let offsets = [0.0, 120.0, 49.0, 51.0, 300.0, 10.0];
        let states: Vec<bool> = offsets.iter().map(|&offset| is_scrolled(offset)).collect();
        assert_eq!(states, [false, true, false, true, true, false]);
    }

    #[test]
    fn reveal_needs_a_tenth_of_the_element() {
        assert!(!crosses_reveal(false, 0.0));
        assert!(!crosses_reveal(true, 0.05));
        assert!(crosses_reveal(true, 0.1));
        assert!(crosses_reveal(true, 1.0));
    }

    #[test]
    fn reveal_is_monotonic_and_idempotent() {
        let mut set = RevealSet::default();
        assert!(set.mark("benefits-header"));
        assert!(!set.mark("benefits-header"));
        assert!(set.mark("faq-header"));

        assert_eq!(set.revealed.len(), 2);
        assert!(set.is_revealed("benefits-header"));
        assert_eq!(set.class("faq-header"), Some("visible"));
        assert_eq!(set.class("trust"), None);
    }

    #[test]
    fn repeated_intersection_keeps_the_same_state() {
        let state = Rc::new(RevealSet::default());
        let once = state.reduce("value-card-1".to_string());
        let twice = once.clone().reduce("value-card-1".to_string());

        assert!(Rc::ptr_eq(&once, &twice));
        assert!(twice.is_revealed("value-card-1"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SETTLE_MS: u32 = 200;

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Fixed-position box tagged with `key`, placed by `style`.
    fn reveal_box(key: &str, style: &str) -> Element {
        let element = document().create_element("div").unwrap();
        element.set_attribute(REVEAL_ATTR, key).unwrap();
        element
            .set_attribute("style", &format!("position: fixed; left: 0; width: 100px; {}", style))
            .unwrap();
        document().body().unwrap().append_child(&element).unwrap();
        element
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |key| sink.borrow_mut().push(key))
    }

    #[wasm_bindgen_test]
    async fn visible_element_is_revealed_once() {
        let target = reveal_box("hero-card", "top: 0; height: 100px;");
        let (seen, on_reveal) = recorder();
        let observer = RevealObserver::new(&document(), on_reveal).unwrap();

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(*seen.borrow(), vec!["hero-card".to_string()]);

        // Unobserved after the first reveal: leaving and re-entering is silent
        target.set_attribute("style", "position: fixed; left: 0; top: 200vh; width: 100px; height: 100px;").unwrap();
        TimeoutFuture::new(SETTLE_MS).await;
        target.set_attribute("style", "position: fixed; left: 0; top: 0; width: 100px; height: 100px;").unwrap();
        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(seen.borrow().len(), 1);

        drop(observer);
        target.remove();
    }

    #[wasm_bindgen_test]
    async fn bottom_margin_and_threshold_hold_back_reveal() {
        // Inside the viewport but within the 50px bottom margin
        let margin = reveal_box("in-margin", "top: calc(100vh - 40px); height: 40px;");
        // 10px of 200px past the margin line: 5%, under the threshold
        let sliver = reveal_box("sliver", "top: calc(100vh - 60px); height: 200px;");
        let (seen, on_reveal) = recorder();
        let observer = RevealObserver::new(&document(), on_reveal).unwrap();

        TimeoutFuture::new(SETTLE_MS).await;
        assert!(seen.borrow().is_empty());

        drop(observer);
        margin.remove();
        sliver.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observer_reports_nothing() {
        let target = reveal_box("late", "top: 200vh; height: 100px;");
        let (seen, on_reveal) = recorder();
        let observer = RevealObserver::new(&document(), on_reveal).unwrap();
        TimeoutFuture::new(SETTLE_MS).await;
        drop(observer);

        target.set_attribute("style", "position: fixed; left: 0; top: 0; width: 100px; height: 100px;").unwrap();
        TimeoutFuture::new(SETTLE_MS).await;
        assert!(seen.borrow().is_empty());

        target.remove();
    }

    #[wasm_bindgen_test]
    fn scroll_listener_is_removed_on_drop() {
        let window = web_sys::window().unwrap();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let listener = ScrollListener::new(window.clone(), move |_| seen.set(seen.get() + 1)).unwrap();
        drop(listener);

        window.dispatch_event(&web_sys::Event::new("scroll").unwrap()).unwrap();
        assert_eq!(calls.get(), 0);
    }
}
