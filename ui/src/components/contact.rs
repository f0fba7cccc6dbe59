use dioxus::prelude::*;
use tracing::{info, warn};

use super::Reveal;
use crate::app::use_app;
use crate::content::view::{contact_view, whatsapp_number};
use crate::core::form::{whatsapp_link, ContactForm, Field, ServiceOption, ValidationReport};
use crate::core::platform;
use crate::t;

#[component]
pub fn Contact() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let contact = contact_view(ctx.site.read().content.as_ref(), lang);

    rsx! {
        section { id: "contact", class: "contact section",
            div { class: "container contact-container",
                Reveal { class: "contact-info",
                    if let Some(contact) = contact {
                        if let Some(phone) = contact.phone {
                            div { class: "contact-item",
                                span { class: "contact-label", {t!(lang, "contact-label-phone")} }
                                a { id: "contact-phone", href: "{phone.href}", dir: "ltr", "{phone.text}" }
                            }
                        }
                        if let Some(whatsapp) = contact.whatsapp {
                            div { class: "contact-item",
                                span { class: "contact-label", {t!(lang, "contact-label-whatsapp")} }
                                a {
                                    id: "contact-whatsapp",
                                    href: "{whatsapp.href}",
                                    target: "_blank",
                                    rel: "noopener",
                                    dir: "ltr",
                                    "{whatsapp.text}"
                                }
                            }
                        }
                        if let Some(email) = contact.email {
                            div { class: "contact-item",
                                span { class: "contact-label", {t!(lang, "contact-label-email")} }
                                a { id: "contact-email", href: "{email.href}", "{email.text}" }
                            }
                        }
                        if let Some(address) = contact.address {
                            div { class: "contact-item",
                                span { class: "contact-label", {t!(lang, "contact-label-address")} }
                                p { id: "contact-address", "{address}" }
                            }
                        }
                    }
                }
                QuoteForm {}
            }
        }
    }
}

#[component]
fn QuoteForm() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let mut form = use_signal(ContactForm::default);
    let mut report = use_signal(ValidationReport::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = ctx.language.peek().current();
        let request = form.peek().clone();
        let result = request.validate();
        let valid = result.is_valid();
        if !valid {
            warn!(errors = ?result.errors(), "contact form rejected");
        }
        report.set(result);
        if !valid {
            return;
        }

        let number = whatsapp_number(ctx.site.peek().content.as_ref());
        match number {
            Some(number) => {
                let message = request.compose_message(lang);
                info!("handing quote request to WhatsApp");
                platform::open_in_new_tab(&whatsapp_link(&number, Some(&message)));
            }
            None => warn!("no WhatsApp number configured; quote request not sent"),
        }
    };

    let current = report.read().clone();
    let field_class = |field: Field| {
        if current.has_error(field) {
            "form-input error"
        } else {
            "form-input"
        }
    };
    let name_class = field_class(Field::Name);
    let phone_class = field_class(Field::Phone);
    let name_error = current.has_error(Field::Name).then(|| Field::Name.message(lang));
    let phone_error = current.has_error(Field::Phone).then(|| Field::Phone.message(lang));
    let values = form.read().clone();

    rsx! {
        Reveal { class: "contact-form-wrapper",
            h3 { class: "form-title", {t!(lang, "form-title")} }
            form { id: "contact-form", class: "contact-form", novalidate: true, onsubmit: submit,
                div { class: "form-group",
                    input {
                        id: Field::Name.input_id(),
                        class: name_class,
                        r#type: "text",
                        name: "name",
                        placeholder: t!(lang, "form-name"),
                        value: "{values.name}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                    }
                    if let Some(message) = name_error {
                        span { class: "error-message", "{message}" }
                    }
                }
                div { class: "form-group",
                    input {
                        id: Field::Phone.input_id(),
                        class: phone_class,
                        r#type: "tel",
                        name: "phone",
                        dir: "ltr",
                        placeholder: t!(lang, "form-phone"),
                        value: "{values.phone}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.phone = evt.value()),
                    }
                    if let Some(message) = phone_error {
                        span { class: "error-message", "{message}" }
                    }
                }
                div { class: "form-group",
                    select {
                        id: "form-service",
                        class: "form-input",
                        name: "service",
                        value: "{values.service}",
                        onchange: move |evt: FormEvent| form.with_mut(|f| f.service = evt.value()),
                        option { value: "", {t!(lang, "form-service")} }
                        for choice in ServiceOption::ALL {
                            option { key: "{choice.key()}", value: choice.key(), {choice.label(lang)} }
                        }
                    }
                }
                div { class: "form-group",
                    textarea {
                        id: "form-message",
                        class: "form-input",
                        name: "message",
                        rows: "4",
                        placeholder: t!(lang, "form-message"),
                        value: "{values.message}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.message = evt.value()),
                    }
                }
                button { id: "form-submit", class: "btn btn-primary btn-block", r#type: "submit",
                    {t!(lang, "form-submit")}
                }
            }
        }
    }
}
