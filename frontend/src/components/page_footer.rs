use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(PageFooter)]
pub fn page_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="portal-footer">
            <p>{format!("© {} {}", year, config::COPYRIGHT_HOLDER)}</p>
            <p class="portal-footer__rights">{config::RIGHTS_NOTICE}</p>
        </footer>
    }
}
