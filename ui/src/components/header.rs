use std::rc::Rc;

use dioxus::prelude::*;

use super::AnchorLink;
use crate::app::use_app;
use crate::core::behavior::header_is_scrolled;
use crate::core::config::SiteConfig;
use crate::core::language::Lang;
use crate::core::platform;
use crate::t;

/// Section anchors shared by the header nav and the footer.
pub fn nav_items(lang: Lang) -> [(&'static str, String); 5] {
    [
        ("#home", t!(lang, "nav-home")),
        ("#services", t!(lang, "nav-services")),
        ("#projects", t!(lang, "nav-projects")),
        ("#about", t!(lang, "nav-about")),
        ("#contact", t!(lang, "nav-contact")),
    ]
}

#[component]
pub fn Header() -> Element {
    let ctx = use_app();
    let threshold = use_context::<SiteConfig>().header_scroll_threshold;
    let lang = ctx.lang();

    let scrolled = use_signal(|| false);
    let _scroll_listener = use_hook(move || {
        Rc::new(platform::on_window_scroll(move |offset| {
            let mut scrolled = scrolled;
            let next = header_is_scrolled(offset, threshold);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }))
    });

    let menu = ctx.menu;
    use_effect(move || platform::set_body_scroll_locked(menu().locks_body_scroll()));

    let header_class = if scrolled() { "header header-scrolled" } else { "header" };
    let active = menu().active_class();
    let open = menu().is_open();

    rsx! {
        header { id: "header", class: "{header_class}",
            div { class: "container header-container",
                AnchorLink { href: "#home", class: "logo",
                    span { class: "logo-mark", "N" }
                    span { class: "logo-text", {t!(lang, "brand-name")} }
                }

                nav {
                    id: "nav",
                    class: "nav {active}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    ul { class: "nav-list",
                        for (href, label) in nav_items(lang) {
                            li { key: "{href}",
                                AnchorLink { href, class: "nav-link", "{label}" }
                            }
                        }
                    }
                }

                div { class: "header-actions",
                    button {
                        id: "lang-switcher",
                        class: "lang-switcher",
                        r#type: "button",
                        aria_label: t!(lang, "switcher-aria"),
                        title: t!(lang, "switcher-aria"),
                        onclick: move |_| ctx.toggle_language(),
                        span { id: "lang-switcher-text", class: "lang-switcher-text",
                            {t!(lang, "switcher-text")}
                        }
                        span { id: "lang-switcher-label", class: "lang-switcher-label",
                            {t!(lang, "switcher-label")}
                        }
                    }

                    AnchorLink { href: "#contact", class: "btn btn-primary header-cta",
                        {t!(lang, "header-cta")}
                    }

                    button {
                        class: "mobile-menu-btn {active}",
                        r#type: "button",
                        aria_label: t!(lang, "nav-menu-toggle"),
                        aria_expanded: "{open}",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            ctx.toggle_menu();
                        },
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}
