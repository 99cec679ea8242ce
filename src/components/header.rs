use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

use crate::behaviors::focus_trap::{FocusTrap, KeyDisposition};
use crate::behaviors::scroll::header_shrunk;
use crate::dom::listener::EventListener;
use crate::dom::panel::DomPanel;
use crate::dom::query::event_element;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "الرئيسية"),
    ("#services", "خدماتنا"),
    ("#stats", "إنجازاتنا"),
    ("#testimonials", "آراء العملاء"),
    ("#contact", "تواصل معنا"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub shrink_threshold: f64,
}

/// Mobile navigation wired to its focus trap. Dropping it detaches every
/// listener and releases the scroll lock if the menu was left open.
struct MobileNavigation {
    trap: Rc<RefCell<FocusTrap<DomPanel>>>,
    _listeners: Vec<EventListener>,
}

impl MobileNavigation {
    fn attach(nav: Element, toggle: Element) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let trap = Rc::new(RefCell::new(FocusTrap::new(DomPanel::new(
            nav.clone(),
            toggle.clone(),
        ))));

        let on_toggle = {
            let trap = trap.clone();
            EventListener::new(&toggle, "click", move |_| trap.borrow_mut().toggle())
        };

        let on_link = {
            let trap = trap.clone();
            EventListener::new(&nav, "click", move |e| {
                let is_link = event_element(&e)
                    .and_then(|el| el.closest(".nav-link").ok().flatten())
                    .is_some();
                if is_link {
                    trap.borrow_mut().on_link_selected();
                }
            })
        };

        let on_outside = {
            let trap = trap.clone();
            let nav = nav.clone();
            let toggle = toggle.clone();
            EventListener::new(&document, "click", move |e| {
                let mut trap = trap.borrow_mut();
                if !trap.is_open() {
                    return;
                }
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside_panel = nav.contains(target.as_ref());
                let inside_toggle = toggle.contains(target.as_ref());
                trap.on_pointer_interaction(inside_panel, inside_toggle);
            })
        };

        let on_keydown = {
            let trap = trap.clone();
            let document = document.clone();
            EventListener::new(&nav, "keydown", move |e| {
                let Some(key_event) = e.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let current = document
                    .active_element()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                let disposition = trap.borrow_mut().handle_key_navigation(
                    &key_event.key(),
                    key_event.shift_key(),
                    current.as_ref(),
                );
                if disposition == KeyDisposition::Suppress {
                    e.prevent_default();
                }
            })
        };

        Some(Self {
            trap,
            _listeners: vec![on_toggle, on_link, on_outside, on_keydown],
        })
    }
}

impl Drop for MobileNavigation {
    fn drop(&mut self) {
        let mut trap = self.trap.borrow_mut();
        if trap.is_open() {
            trap.close();
        }
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_shrunk = use_state_eq(|| false);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let is_shrunk = is_shrunk.clone();
        let threshold = props.shrink_threshold;
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let update = {
                        let window = window.clone();
                        move || {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            is_shrunk.set(header_shrunk(scroll_y, threshold));
                        }
                    };
                    // the page may be restored mid-scroll
                    update();
                    EventListener::new(&window, "scroll", move |_| update())
                });
                move || drop(listener)
            },
            threshold.to_bits(),
        );
    }

    {
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let navigation = match (nav_ref.cast::<Element>(), toggle_ref.cast::<Element>()) {
                    (Some(nav), Some(toggle)) => MobileNavigation::attach(nav, toggle),
                    _ => {
                        debug!("Navigation markup missing, menu disabled");
                        None
                    }
                };
                move || drop(navigation)
            },
            (),
        );
    }

    html! {
        <header id="header" class={classes!("header", (*is_shrunk).then(|| "shrink"))}>
            <div class="header-inner">
                <a href="#home" class="logo">{"أيمن للتخليص الجمركي والنقل"}</a>
                <button
                    ref={toggle_ref}
                    class="mobile-toggle"
                    aria-label="القائمة"
                    aria-controls="nav"
                    aria-expanded="false"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="nav" ref={nav_ref} class="nav">
                    { NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }).collect::<Html>() }
                    <a href="#contact" class="nav-link nav-cta">{"اطلب عرض سعر"}</a>
                </nav>
            </div>
        </header>
    }
}
