use dioxus::prelude::*;

use super::header::nav_items;
use super::AnchorLink;
use crate::app::use_app;
use crate::content::view::{contact_view, footer_view, social_links};
use crate::core::form::ServiceOption;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();

    let site = ctx.site.read();
    let texts = footer_view(site.content.as_ref(), lang).unwrap_or_default();
    let social = social_links(site.content.as_ref());
    let contact = contact_view(site.content.as_ref(), lang).unwrap_or_default();
    drop(site);

    let quick_links_title = if texts.quick_links_title.is_empty() {
        t!(lang, "footer-quick-links")
    } else {
        texts.quick_links_title.clone()
    };

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        span { class: "logo-text", {t!(lang, "brand-name")} }
                        p { id: "footer-tagline", class: "footer-tagline", "{texts.tagline}" }
                        if !social.is_empty() {
                            div { class: "social-links",
                                span { class: "social-title", {t!(lang, "footer-follow-us")} }
                                for link in social {
                                    a {
                                        key: "{link.id}",
                                        id: link.id,
                                        class: "social-link",
                                        href: "{link.href}",
                                        target: "_blank",
                                        rel: "noopener",
                                        aria_label: link.name,
                                        "{link.name}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "footer-links",
                        h4 { id: "footer-quick-links", "{quick_links_title}" }
                        ul {
                            for (href, label) in nav_items(lang) {
                                li { key: "{href}",
                                    AnchorLink { href, "{label}" }
                                }
                            }
                        }
                    }

                    div { class: "footer-services",
                        h4 { id: "footer-services", "{texts.services_title}" }
                        ul {
                            for choice in ServiceOption::ALL {
                                li { key: "{choice.key()}", {choice.label(lang)} }
                            }
                        }
                    }

                    div { class: "footer-contact",
                        h4 { id: "footer-contact", "{texts.contact_title}" }
                        ul {
                            if let Some(phone) = contact.phone {
                                li { a { href: "{phone.href}", dir: "ltr", "{phone.text}" } }
                            }
                            if let Some(email) = contact.email {
                                li { a { href: "{email.href}", "{email.text}" } }
                            }
                            if let Some(address) = contact.address {
                                li { "{address}" }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { {t!(lang, "footer-copyright")} }
                }
            }
        }
    }
}

#[component]
pub fn FloatingButtons() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let contact = contact_view(ctx.site.read().content.as_ref(), lang).unwrap_or_default();

    rsx! {
        div { class: "floating-buttons",
            if let Some(href) = contact.whatsapp_float {
                a {
                    id: "whatsapp-float",
                    class: "float-btn float-whatsapp",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener",
                    aria_label: t!(lang, "float-whatsapp"),
                    title: t!(lang, "float-whatsapp"),
                    "💬"
                }
            }
            if let Some(href) = contact.call_float {
                a {
                    id: "call-float",
                    class: "float-btn float-call",
                    href: "{href}",
                    aria_label: t!(lang, "float-call"),
                    title: t!(lang, "float-call"),
                    "📞"
                }
            }
        }
    }
}
