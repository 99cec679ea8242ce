use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        log::warn!("Bad selector {:?}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Could not toggle class {}: {:?}", class, e);
    }
}

pub fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
