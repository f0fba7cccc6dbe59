use dioxus::prelude::*;

use super::Reveal;
use crate::app::use_app;
use crate::content::view::about_view;

#[component]
pub fn About() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let about = about_view(ctx.site.read().content.as_ref(), lang);

    rsx! {
        section { id: "about", class: "about section",
            div { class: "container about-container",
                if let Some(about) = about {
                    Reveal { class: "about-content",
                        h2 { id: "about-title", class: "section-title", "{about.title}" }
                        p { id: "about-description", class: "about-description", "{about.content}" }
                    }
                }
            }
        }
    }
}
