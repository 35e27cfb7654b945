use yew::prelude::*;
use log::debug;

use crate::catalog::{stagger_delay, ServiceEntry};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub entry: ServiceEntry,
    /// Position in the catalog, drives the entrance delay.
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { entry, index } = props;
    debug!("Rendering service card {} at {}", entry.title, index);

    let style = format!(
        "{}animation-delay: {}ms;",
        entry.color.css_vars(),
        stagger_delay(*index).as_millis()
    );

    html! {
        <a
            class="service-card"
            href={entry.url}
            target="_blank"
            rel="noopener noreferrer"
            data-index={index.to_string()}
            data-accent={entry.color.token()}
            style={style}
        >
            <div class="service-card__frame">
                <div class="service-card__body">
                    <div class="service-card__overlay"></div>
                    <div class="service-card__glow"></div>
                    <div class="service-card__accent-bar"></div>

                    <div class="service-card__content">
                        <div class="service-card__icon" aria-hidden="true">
                            <span class="service-card__glyph">{entry.icon}</span>
                        </div>

                        <div class="service-card__heading">
                            <h2 class="service-card__title">{entry.title}</h2>
                            <span class="service-card__cta">
                                {config::OPEN_SERVICE_LABEL}
                                <span class="service-card__cta-icon" aria-hidden="true">{"↗"}</span>
                            </span>
                        </div>

                        <p class="service-card__description">{entry.description}</p>
                    </div>

                    <div class="service-card__blob service-card__blob--bottom"></div>
                    <div class="service-card__blob service-card__blob--top"></div>
                </div>
                <div class="service-card__ring"></div>
            </div>
        </a>
    }
}
