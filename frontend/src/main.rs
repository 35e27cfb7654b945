use yew::prelude::*;
use log::info;

mod catalog;
mod config;
mod styles;
mod theme;
mod components {
    pub mod page_footer;
    pub mod page_header;
    pub mod service_card;
}
mod pages {
    pub mod portal;
}

use pages::portal::Portal;

#[function_component]
fn App() -> Html {
    html! {
        <Portal />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portal with {} services", catalog::services().len());
    yew::Renderer::<App>::new().render();
}
