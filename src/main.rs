use log::info;
use yew::prelude::*;

mod config;
mod behaviors {
    pub mod carousel;
    pub mod contact;
    pub mod counter;
    pub mod focus_trap;
    pub mod scroll;
    pub mod timers;
}
mod dom {
    pub mod listener;
    pub mod observer;
    pub mod panel;
    pub mod query;
    pub mod slides;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod header;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use config::PageConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| PageConfig::load(), ());

    html! {
        <Landing {config} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
