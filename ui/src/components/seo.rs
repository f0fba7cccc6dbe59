use dioxus::prelude::*;

use crate::app::use_app;
use crate::content::view::seo_view;
use crate::core::config::SiteConfig;
use crate::core::platform;

/// Keeps the document head in sync with the SEO document; renders nothing.
#[component]
pub fn Seo() -> Element {
    let ctx = use_app();
    let page = use_context::<SiteConfig>().seo_page;

    use_effect(move || {
        let lang = ctx.language.read().current();
        let site = ctx.site.read();
        if let Some(view) = seo_view(site.seo.as_ref(), &page, lang) {
            platform::apply_seo(&view);
        }
    });

    rsx! {}
}
