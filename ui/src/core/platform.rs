//! Browser glue.
//!
//! Everything that touches the live document goes through here. Native
//! builds (tests, tooling) get inert counterparts with the same signatures:
//! reads report nothing, writes are dropped, and visibility observers fire
//! straight away.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::MountedData;

use super::config::ObserverOptions;
use super::language::{DocumentLanguage, LanguageChanged};
use crate::content::view::SeoView;

/// Name of the DOM event announcing a language switch.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Callback shared by an observer and its failure path; runs at most once.
#[derive(Clone)]
pub struct OnceCallback(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl OnceCallback {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(callback)))))
    }

    pub fn fire(&self) {
        let callback = self.0.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use tracing::{debug, warn};
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
        UrlSearchParams, Window,
    };

    use super::*;
    use crate::core::language::LANGUAGE_BODY_CLASSES;

    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn document() -> Option<Document> {
        window().and_then(|window| window.document())
    }

    /// `?lang=` of the current URL.
    pub fn url_lang_param() -> Option<String> {
        let search = window()?.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get("lang")
    }

    /// Primary browser locale, e.g. `en-US`.
    pub fn browser_language() -> Option<String> {
        window()?.navigator().language()
    }

    /// Write `lang`/`dir`, the body classes and the typography variables.
    pub fn apply_document_language(doc_lang: &DocumentLanguage) {
        let Some(document) = document() else {
            return;
        };

        if let Some(root) = document.document_element() {
            root.set_attribute("lang", doc_lang.lang).ok();
            root.set_attribute("dir", doc_lang.dir.as_str()).ok();
            if let Some(root) = root.dyn_ref::<HtmlElement>() {
                let style = root.style();
                for (name, value) in doc_lang.css_vars {
                    style.set_property(name, value).ok();
                }
            }
        }

        if let Some(body) = document.body() {
            let classes = body.class_list();
            for class in LANGUAGE_BODY_CLASSES {
                classes.remove_1(class).ok();
            }
            for class in &doc_lang.body_classes {
                classes.add_1(class).ok();
            }
        }
    }

    /// Re-broadcast the switch as a `languageChanged` CustomEvent on `window`.
    pub fn dispatch_language_changed(event: &LanguageChanged) {
        let Some(window) = window() else {
            return;
        };
        let detail = serde_json::to_string(event)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL);

        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init) {
            Ok(custom) => {
                window.dispatch_event(&custom).ok();
            }
            Err(err) => debug!(?err, "could not create languageChanged event"),
        }
    }

    fn observer_init(options: ObserverOptions) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        init
    }

    /// Run `on_visible` the first time the mounted element enters the
    /// viewport, then stop observing.
    pub fn observe_once(
        mounted: &MountedData,
        options: ObserverOptions,
        on_visible: impl FnOnce() + 'static,
    ) {
        let on_visible = OnceCallback::new(on_visible);
        let Some(element) = mounted.downcast::<Element>().cloned() else {
            on_visible.fire();
            return;
        };

        let pending = on_visible.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    observer.disconnect();
                    pending.fire();
                }
            },
        );

        match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &observer_init(options),
        ) {
            Ok(observer) => {
                observer.observe(&element);
                // Lives as long as the page; the observer disconnects itself.
                callback.forget();
            }
            Err(err) => {
                // Without an observer the content would stay hidden.
                warn!(?err, "IntersectionObserver unavailable; revealing immediately");
                on_visible.fire();
            }
        }
    }

    /// Removes the scroll listener when dropped.
    pub struct ScrollListener {
        callback: Closure<dyn Fn()>,
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            if let Some(window) = window() {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        self.callback.as_ref().unchecked_ref(),
                    )
                    .ok();
            }
        }
    }

    /// Call `handler` with the vertical offset on every window scroll.
    pub fn on_window_scroll(handler: impl Fn(f64) + 'static) -> Option<ScrollListener> {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(move || handler(scroll_offset_y()));
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ScrollListener { callback })
    }

    pub fn scroll_offset_y() -> f64 {
        window()
            .and_then(|window| window.page_y_offset().ok())
            .unwrap_or(0.0)
    }

    pub fn set_body_scroll_locked(locked: bool) {
        let Some(body) = document().and_then(|document| document.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden").ok();
        } else {
            style.remove_property("overflow").ok();
        }
    }

    /// Smoothly scroll so the element with `id` sits just below the fixed
    /// header. Returns `false` when there is no such element.
    pub fn smooth_scroll_to(id: &str) -> bool {
        let (Some(window), Some(document)) = (window(), document()) else {
            return false;
        };
        let Some(target) = document.get_element_by_id(id) else {
            return false;
        };

        let header_height = document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|header| header.dyn_into::<HtmlElement>().ok())
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(0.0);

        let top = crate::core::behavior::scroll_destination(
            target.get_bounding_client_rect().top(),
            scroll_offset_y(),
            header_height,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }

    pub fn open_in_new_tab(url: &str) {
        let opened = window().map(|window| window.open_with_url_and_target(url, "_blank"));
        if !matches!(opened, Some(Ok(Some(_)))) {
            warn!(url, "could not open new tab");
        }
    }

    /// Overwrite the head metadata and structured data blocks.
    pub fn apply_seo(view: &SeoView) {
        let Some(document) = document() else {
            return;
        };

        if let Some(meta) = &view.meta {
            document.set_title(&meta.title);
            set_meta(&document, "name", "description", &meta.description);
            set_meta(&document, "name", "keywords", &meta.keywords);
            set_meta(&document, "property", "og:title", &meta.og_title);
            set_meta(&document, "property", "og:description", &meta.og_description);
            if let Some(root) = document.document_element() {
                root.set_attribute("lang", meta.lang).ok();
            }
        }

        if let Some(blocks) = &view.structured_data {
            if let Ok(existing) = document.query_selector_all(r#"script[type="application/ld+json"]"#) {
                for index in 0..existing.length() {
                    if let Some(node) = existing.item(index) {
                        if let Ok(script) = node.dyn_into::<Element>() {
                            script.remove();
                        }
                    }
                }
            }
            let Some(head) = document.head() else {
                return;
            };
            for block in blocks {
                if let Ok(script) = document.create_element("script") {
                    script.set_attribute("type", "application/ld+json").ok();
                    script.set_text_content(Some(block));
                    head.append_child(&script).ok();
                }
            }
        }
    }

    fn set_meta(document: &Document, attr: &str, name: &str, content: &str) {
        if content.is_empty() {
            return;
        }
        let selector = format!(r#"meta[{attr}="{name}"]"#);
        let existing = document.query_selector(&selector).ok().flatten();
        let meta = match existing {
            Some(meta) => meta,
            None => {
                let Ok(meta) = document.create_element("meta") else {
                    return;
                };
                meta.set_attribute(attr, name).ok();
                if let Some(head) = document.head() {
                    head.append_child(&meta).ok();
                }
                meta
            }
        };
        meta.set_attribute("content", content).ok();
    }

    fn native_lazy_loading() -> bool {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("HTMLImageElement"))
            .and_then(|class| js_sys::Reflect::get(&class, &JsValue::from_str("prototype")))
            .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("loading")))
            .unwrap_or(true)
    }

    /// For browsers without native `loading="lazy"`: swap `data-src` into
    /// `src` as each lazy image approaches the viewport.
    pub fn install_lazy_load_fallback() {
        if native_lazy_loading() {
            return;
        }
        let Some(document) = document() else {
            return;
        };
        let Ok(images) = document.query_selector_all(r#"img[loading="lazy"]"#) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Ok(image) = target.clone().dyn_into::<HtmlImageElement>() {
                        if let Some(src) = image.get_attribute("data-src") {
                            image.set_src(&src);
                        }
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let Ok(observer) =
            IntersectionObserver::new(callback.as_ref().unchecked_ref::<js_sys::Function>())
        else {
            return;
        };
        for index in 0..images.length() {
            if let Some(image) = images.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&image);
            }
        }
        debug!(count = images.length(), "lazy-load fallback installed");
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    pub fn url_lang_param() -> Option<String> {
        None
    }

    pub fn browser_language() -> Option<String> {
        None
    }

    pub fn apply_document_language(_doc_lang: &DocumentLanguage) {}

    pub fn dispatch_language_changed(_event: &LanguageChanged) {}

    /// No viewport natively: everything is visible.
    pub fn observe_once(
        _mounted: &MountedData,
        _options: ObserverOptions,
        on_visible: impl FnOnce() + 'static,
    ) {
        on_visible();
    }

    pub struct ScrollListener;

    pub fn on_window_scroll(_handler: impl Fn(f64) + 'static) -> Option<ScrollListener> {
        None
    }

    pub fn scroll_offset_y() -> f64 {
        0.0
    }

    pub fn set_body_scroll_locked(_locked: bool) {}

    pub fn smooth_scroll_to(_id: &str) -> bool {
        false
    }

    pub fn open_in_new_tab(url: &str) {
        tracing::info!(url, "open in new tab");
    }

    pub fn apply_seo(_view: &SeoView) {}

    pub fn install_lazy_load_fallback() {}
}
