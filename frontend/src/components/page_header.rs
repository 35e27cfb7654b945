use yew::prelude::*;
use log::warn;
use web_sys::HtmlImageElement;

use crate::config;

#[function_component(PageHeader)]
pub fn page_header() -> Html {
    // The browser falls back to the alt text; we only note the miss.
    let on_logo_error = Callback::from(|e: Event| {
        let src = e
            .target_dyn_into::<HtmlImageElement>()
            .map(|img| img.current_src())
            .unwrap_or_else(|| config::LOGO_PATH.to_string());
        warn!("Failed to load logo from {}", src);
    });

    html! {
        <header class="portal-header">
            <img
                class="portal-header__logo"
                src={config::LOGO_PATH}
                alt={config::LOGO_ALT}
                onerror={on_logo_error}
            />
            <h1 class="portal-header__title">{config::PAGE_TITLE}</h1>
            <p class="portal-header__subtitle">{config::PAGE_SUBTITLE}</p>
            <p class="portal-header__organization">{config::ORGANIZATION}</p>
            <div class="portal-header__divider" role="presentation"></div>
            <p class="portal-header__prompt">{config::PROMPT}</p>
        </header>
    }
}
