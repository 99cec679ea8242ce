use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::query::{query_all, toggle_class};
use crate::behaviors::carousel::{SlidePart, SlideView};

pub const TRACK_SELECTOR: &str = ".testimonial-track";
pub const SLIDE_SELECTOR: &str = ".testimonial-slide";
pub const DOT_SELECTOR: &str = ".dot";

/// Testimonial slider markup: a track holding the slides, plus one dot per
/// slide.
pub struct DomSlides {
    track: HtmlElement,
    slides: Vec<Element>,
    dots: Vec<Element>,
    rtl: bool,
}

impl DomSlides {
    pub fn from_root(root: &Element, rtl: bool) -> Option<Self> {
        let track = root
            .query_selector(TRACK_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(Self {
            track,
            slides: query_all(root, SLIDE_SELECTOR),
            dots: query_all(root, DOT_SELECTOR),
            rtl,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn dots(&self) -> &[Element] {
        &self.dots
    }
}

/// `translateX` percentage that brings slide `index` into view. Right-to-left
/// tracks move right to reveal the items on their left.
pub fn track_offset_percent(index: usize, rtl: bool) -> i64 {
    let offset = index as i64 * 100;
    if rtl {
        offset
    } else {
        -offset
    }
}

impl SlideView for DomSlides {
    fn set_active_visual(&mut self, part: SlidePart, active: bool) {
        let element = match part {
            SlidePart::Slide(i) => self.slides.get(i),
            SlidePart::Indicator(i) => self.dots.get(i),
        };
        if let Some(element) = element {
            toggle_class(element, "active", active);
        }
    }

    fn set_track_position(&mut self, index: usize) {
        let transform = format!("translateX({}%)", track_offset_percent(index, self.rtl));
        let _ = self.track.style().set_property("transform", &transform);
    }
}
