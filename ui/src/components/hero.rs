use dioxus::prelude::*;

use super::{AnchorLink, Reveal};
use crate::app::use_app;
use crate::content::view::hero_view;

#[component]
pub fn Hero() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let hero = ctx
        .site
        .read()
        .content
        .as_ref()
        .and_then(|content| hero_view(content, lang));

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container hero-container",
                if let Some(hero) = hero {
                    Reveal { class: "hero-content",
                        div { class: "hero-badge",
                            span { id: "hero-badge-text", "{hero.badge}" }
                        }
                        h1 { id: "hero-headline", class: "hero-title",
                            span { class: "hero-title-accent", "{hero.headline_accent}" }
                            " "
                            span { class: "hero-title-main", "{hero.headline_main}" }
                            " "
                            span { class: "hero-title-location", "{hero.headline_location}" }
                        }
                        p { id: "hero-subheadline", class: "hero-subtitle", "{hero.subheadline}" }
                        div { class: "hero-actions",
                            AnchorLink {
                                id: "hero-cta-primary",
                                href: "#contact",
                                class: "btn btn-primary btn-lg",
                                span { "{hero.cta_primary}" }
                            }
                            AnchorLink {
                                id: "hero-cta-secondary",
                                href: "#projects",
                                class: "btn btn-outline btn-lg",
                                span { "{hero.cta_secondary}" }
                            }
                        }
                        if !hero.trust.is_empty() {
                            div { class: "hero-trust",
                                for item in hero.trust {
                                    div { key: "{item.key}", class: "trust-item",
                                        if let Some(value) = item.value {
                                            strong { class: "trust-number", "{value}" }
                                        }
                                        span { class: "trust-label", "{item.label}" }
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
