use log::info;
use yew::prelude::*;

mod config;
mod faq;
mod lead;
mod scroll;
mod tracking;
mod components {
    pub mod faq_list;
    pub mod footer;
    pub mod lead_form;
    pub mod navbar;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use tracking::Tracker;

#[derive(Properties, PartialEq)]
struct AppProps {
    tracker: Tracker,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing tracker={props.tracker.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting CineTax landing page");
    let tracker = Tracker::pixel(config::PIXEL_ID);
    yew::Renderer::<App>::with_props(AppProps { tracker }).render();
}
