use web_sys::{Element, HtmlElement};

use super::query::{body, query_all, toggle_class};
use crate::behaviors::focus_trap::PanelView;

pub const FOCUSABLE_SELECTOR: &str = "a, button";

/// The mobile navigation panel and the button that opens it.
pub struct DomPanel {
    nav: Element,
    toggle: Element,
}

impl DomPanel {
    pub fn new(nav: Element, toggle: Element) -> Self {
        Self { nav, toggle }
    }
}

impl PanelView for DomPanel {
    type Element = HtmlElement;

    fn focusable_elements(&self) -> Vec<HtmlElement> {
        query_all(&self.nav, FOCUSABLE_SELECTOR)
    }

    fn set_panel_open_visual(&mut self, open: bool) {
        toggle_class(&self.toggle, "active", open);
        toggle_class(&self.nav, "active", open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });

        // keep the page behind the open menu from scrolling
        if let Some(body) = body() {
            let style = body.style();
            let _ = if open {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }

    fn focus(&mut self, element: &HtmlElement) {
        if let Err(e) = element.focus() {
            log::debug!("Could not move focus: {:?}", e);
        }
    }
}
