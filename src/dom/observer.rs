use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::query::query_all;

/// Intersection observer that reports each watched element the first time it
/// becomes visible, then stops watching it.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_visible: F) -> Option<Self>
    where
        F: FnMut(Element) + 'static,
    {
        let on_entries = move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        };
        let callback =
            Closure::wrap(Box::new(on_entries) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Watches every element under `root` matching `selector` and returns how
    /// many there were.
    pub fn observe_all(&self, root: &Element, selector: &str) -> usize {
        let elements: Vec<Element> = query_all(root, selector);
        for element in &elements {
            self.observe(element);
        }
        elements.len()
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
