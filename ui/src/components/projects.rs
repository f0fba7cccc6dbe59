use dioxus::prelude::*;

use super::{AnchorLink, Reveal};
use crate::app::use_app;
use crate::content::view::{
    filter_buttons, project_cards, ProjectCard, ProjectFilter, PROJECT_PLACEHOLDER,
};
use crate::core::config::SiteConfig;
use crate::t;

#[component]
pub fn Projects() -> Element {
    let ctx = use_app();
    let max_projects = use_context::<SiteConfig>().max_projects;
    let lang = ctx.lang();

    // Back to the first button whenever the grid is rebuilt.
    let mut filter = use_signal(ProjectFilter::default);
    use_effect(move || {
        // Read only to re-run on a language switch.
        let _lang = ctx.lang();
        filter.set(ProjectFilter::initial(ctx.site.read().projects.as_ref()));
    });

    let site = ctx.site.read();
    let current = filter.read();
    let buttons: Vec<_> = filter_buttons(site.projects.as_ref(), lang)
        .into_iter()
        .map(|button| {
            let class = if current.is_active(&button.key) { "filter-btn active" } else { "filter-btn" };
            (button, class)
        })
        .collect();
    let cards: Vec<_> = project_cards(site.projects.as_ref(), lang, max_projects)
        .into_iter()
        .map(|card| (current.is_visible(&card.category), card))
        .collect();
    drop(current);
    drop(site);

    rsx! {
        section { id: "projects", class: "projects section",
            div { class: "container",
                Reveal { class: "section-header",
                    h2 { class: "section-title", {t!(lang, "projects-title")} }
                    p { class: "section-subtitle", {t!(lang, "projects-subtitle")} }
                }
                div { id: "projects-filter", class: "projects-filter",
                    for (button, class) in buttons {
                        button {
                            key: "{button.key}",
                            class,
                            r#type: "button",
                            "data-filter": "{button.key}",
                            onclick: {
                                let key = button.key.clone();
                                move |_| filter.set(ProjectFilter::from_key(&key))
                            },
                            "{button.label}"
                        }
                    }
                }
                div { id: "projects-grid", class: "projects-grid",
                    for (index, (visible, card)) in cards.into_iter().enumerate() {
                        ProjectCardView { key: "{index}", visible, card }
                    }
                }
                div { class: "projects-more",
                    AnchorLink { href: "#contact", class: "btn btn-outline",
                        {t!(lang, "button-get-quote")}
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCardView(card: ProjectCard, visible: bool) -> Element {
    // Broken images fall back to the brand placeholder.
    let mut broken = use_signal(|| false);
    let src = if broken() { PROJECT_PLACEHOLDER } else { card.image.as_str() };
    let display = if visible { "" } else { "display: none;" };

    rsx! {
        article {
            class: "project-card",
            style: "{display}",
            "data-category": "{card.category}",
            img {
                class: "project-image",
                src: "{src}",
                alt: "{card.title}",
                loading: "lazy",
                onerror: move |_| broken.set(true),
            }
            div { class: "project-overlay",
                h3 { class: "project-title", "{card.title}" }
                p { class: "project-category", "{card.category_name}" }
            }
        }
    }
}
