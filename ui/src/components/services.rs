use dioxus::prelude::*;

use super::Reveal;
use crate::app::use_app;
use crate::content::view::{section_heading, service_cards};
use crate::core::config::SiteConfig;

#[component]
pub fn Services() -> Element {
    let ctx = use_app();
    let max_features = use_context::<SiteConfig>().max_service_features;
    let lang = ctx.lang();

    let site = ctx.site.read();
    let heading = section_heading(site.content.as_ref(), lang);
    let cards = service_cards(site.services.as_ref(), lang, max_features);
    drop(site);

    rsx! {
        section { id: "services", class: "services section",
            div { class: "container",
                if let Some(heading) = heading {
                    Reveal { class: "section-header",
                        h2 { id: "services-title", class: "section-title", "{heading.title}" }
                        p { id: "services-subtitle", class: "section-subtitle", "{heading.subtitle}" }
                    }
                }
                div { id: "services-grid", class: "services-grid",
                    for (index, card) in cards.into_iter().enumerate() {
                        Reveal { key: "{index}", class: "service-card",
                            div { class: "service-icon",
                                span { class: "service-icon-glyph", "{card.icon}" }
                            }
                            h3 { class: "service-title", "{card.name}" }
                            if let Some(tagline) = card.tagline {
                                p { class: "service-tagline",
                                    strong { "{tagline}" }
                                }
                            }
                            p { class: "service-description", "{card.description}" }
                            if !card.features.is_empty() {
                                ul { class: "service-features",
                                    for feature in card.features {
                                        li { "{feature}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
