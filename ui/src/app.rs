//! Root component and the state shared by every section.
//!
//! Startup runs in one task: load the documents, then resolve and apply the
//! initial language, then mark the page ready. Sections subscribe to the
//! language and content signals and re-render on any change.

use dioxus::prelude::*;
use tracing::info;

use crate::content::{FetchSource, SiteData};
use crate::core::behavior::MenuState;
use crate::core::config::SiteConfig;
use crate::core::language::{Lang, LanguageChanged, LanguageSystem};
use crate::core::platform;
use crate::core::storage::BrowserStorage;
use crate::views::Home;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Cairo:wght@400;500;600;700&family=Inter:wght@400;500;600;700&display=swap";

/// Handles to the shared signals; cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub language: Signal<LanguageSystem>,
    pub site: Signal<SiteData>,
    pub ready: Signal<bool>,
    pub menu: Signal<MenuState>,
    store: Signal<BrowserStorage>,
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

impl AppContext {
    /// Active language (subscribes the calling component).
    pub fn lang(&self) -> Lang {
        self.language.read().current()
    }

    pub fn toggle_language(&self) {
        let mut language = self.language;
        let event = language.with_mut(|system| system.toggle(&*self.store.peek()));
        announce(&event);
    }

    /// Switch to `code`; unsupported codes are ignored.
    pub fn set_language(&self, code: &str) {
        let mut language = self.language;
        let event = language.with_mut(|system| system.set_language(code, &*self.store.peek()));
        if let Some(event) = event {
            announce(&event);
        }
    }

    pub fn toggle_menu(&self) {
        let mut menu = self.menu;
        let next = menu.peek().toggle();
        menu.set(next);
    }

    pub fn close_menu(&self) {
        let mut menu = self.menu;
        if menu.peek().is_open() {
            menu.set(MenuState::default());
        }
    }

    fn start_language(&self) {
        let url_param = platform::url_lang_param();
        let browser = platform::browser_language();
        let (system, event) = LanguageSystem::init(
            &*self.store.peek(),
            url_param.as_deref(),
            browser.as_deref(),
        );
        let mut language = self.language;
        language.set(system);
        announce(&event);
    }
}

fn announce(event: &LanguageChanged) {
    platform::apply_document_language(&crate::core::language::DocumentLanguage::for_lang(
        event.language,
    ));
    platform::dispatch_language_changed(event);
    info!(lang = event.language.code(), "language changed");
}

#[component]
pub fn App(config: SiteConfig) -> Element {
    crate::i18n::init();

    let store = use_signal(|| BrowserStorage::new(config.storage_key.clone()));
    let language = use_signal(LanguageSystem::default);
    let site = use_signal(SiteData::default);
    let ready = use_signal(|| false);
    let menu = use_signal(MenuState::default);

    use_context_provider(|| config.clone());
    let ctx = use_context_provider(|| AppContext {
        language,
        site,
        ready,
        menu,
        store,
    });

    let paths = config.data.clone();
    use_future(move || {
        let paths = paths.clone();
        let mut site = ctx.site;
        let mut ready = ctx.ready;
        async move {
            info!("starting up");
            let data = SiteData::load(&FetchSource::default(), &paths).await;
            site.set(data);
            ctx.start_language();
            ready.set(true);
        }
    });

    use_effect(move || {
        if ready() {
            platform::install_lazy_load_fallback();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONTS_URL }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        Home {}
    }
}
