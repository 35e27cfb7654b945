use yew::prelude::*;
use log::debug;

use crate::catalog::{self, ServiceEntry};
use crate::components::{
    page_footer::PageFooter,
    page_header::PageHeader,
    service_card::ServiceCard,
};
use crate::styles::PORTAL_CSS;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct PortalProps {
    #[prop_or_else(catalog::services)]
    pub services: &'static [ServiceEntry],
}

#[function_component(Portal)]
pub fn portal(props: &PortalProps) -> Html {
    debug!("Rendering portal with {} services", props.services.len());

    html! {
        <div class="portal" style={theme::motion_vars()}>
            <div class="portal__container">
                <PageHeader />

                <section class="service-grid" aria-label="Daftar layanan">
                    {
                        props.services.iter().enumerate().map(|(index, entry)| {
                            html! {
                                <ServiceCard key={index.to_string()} entry={*entry} index={index} />
                            }
                        }).collect::<Html>()
                    }
                </section>

                <PageFooter />
            </div>
            <style>
                {PORTAL_CSS}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AccentColor;
    use crate::config;

    const LPSE_ONLY: &[ServiceEntry] = &[ServiceEntry {
        title: "LPSE",
        description: "Layanan Pengadaan Secara Elektronik Kalimantan Barat melalui platform INAPROC",
        url: "https://spse.inaproc.id/kalbarprov",
        icon: "🌐",
        color: AccentColor::Green,
    }];

    const EMPTY: &[ServiceEntry] = &[];

    async fn render(services: &'static [ServiceEntry]) -> String {
        yew::ServerRenderer::<Portal>::with_props(move || PortalProps { services })
            .render()
            .await
    }

    fn card_count(html: &str) -> usize {
        html.matches(r#"class="service-card""#).count()
    }

    #[tokio::test]
    async fn renders_one_card_per_service() {
        let html = render(catalog::services()).await;

        assert_eq!(card_count(&html), catalog::services().len());
        for entry in catalog::services() {
            assert!(html.contains(&format!(r#"href="{}""#, entry.url)));
            assert!(html.contains(&format!(r#"<h2 class="service-card__title">{}</h2>"#, entry.title)));
            assert!(html.contains(entry.description));
        }
        assert_eq!(html.matches(r#"target="_blank""#).count(), catalog::services().len());
    }

    #[tokio::test]
    async fn cards_follow_declaration_order() {
        let html = render(catalog::services()).await;

        let positions: Vec<usize> = catalog::services()
            .iter()
            .map(|entry| html.find(&format!(r#"href="{}""#, entry.url)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        let delays: Vec<String> = (0..catalog::services().len())
            .map(|index| format!("animation-delay: {}ms;", 150 * (index + 1)))
            .collect();
        let delay_positions: Vec<usize> = delays.iter().map(|d| html.find(d.as_str()).unwrap()).collect();
        assert!(delay_positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn single_entry_catalog_renders_single_card() {
        let html = render(LPSE_ONLY).await;

        assert_eq!(card_count(&html), 1);
        assert_eq!(html.matches("href=").count(), 1);
        assert!(html.contains(r#"href="https://spse.inaproc.id/kalbarprov""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[tokio::test]
    async fn empty_catalog_keeps_header() {
        let html = render(EMPTY).await;

        assert_eq!(card_count(&html), 0);
        assert!(html.contains(config::PAGE_TITLE));
        assert!(html.contains(config::PROMPT));
        assert!(html.contains(config::RIGHTS_NOTICE));
    }

    #[tokio::test]
    async fn rendering_twice_is_identical() {
        let first = render(catalog::services()).await;
        let second = render(catalog::services()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn app_renders_full_catalog() {
        let html = yew::ServerRenderer::<crate::App>::new().render().await;
        assert_eq!(card_count(&html), catalog::services().len());
        assert!(html.contains("-webkit-line-clamp: 3;"));
        assert!(html.contains("--card-enter-duration: 700ms;"));
    }
}
