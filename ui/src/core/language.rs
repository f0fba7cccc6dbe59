//! Language state and the presentation profile attached to each language.
//!
//! The site speaks Arabic (default, right-to-left) and English. Everything
//! here is platform-agnostic: [`LanguageSystem`] decides *what* the document
//! should look like for a language and persists the choice through a
//! [`PreferenceStore`]; writing attributes into the live page is left to
//! `core::platform`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::storage::PreferenceStore;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Ar, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Parse a bare language code (`"ar"`, `"EN"`, ` en `).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Like [`Lang::from_code`] but never fails: unsupported codes select the default.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            warn!(code, fallback = Lang::default().code(), "unsupported language");
            Lang::default()
        })
    }

    /// Language of a browser locale such as `en-US` or `ar_EG` (first two characters).
    pub fn from_locale(locale: &str) -> Option<Self> {
        let prefix: String = locale.trim().chars().take(2).collect();
        Self::from_code(&prefix)
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.config().dir == Direction::Rtl
    }

    pub fn config(self) -> &'static LangConfig {
        match self {
            Lang::Ar => &AR_CONFIG,
            Lang::En => &EN_CONFIG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// Typography and locale profile applied with a language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LangConfig {
    pub dir: Direction,
    pub font_family: &'static str,
    pub font_weight: &'static str,
    pub line_height: &'static str,
    pub letter_spacing: &'static str,
    pub date_locale: &'static str,
    pub number_locale: &'static str,
    pub currency: &'static str,
}

static AR_CONFIG: LangConfig = LangConfig {
    dir: Direction::Rtl,
    font_family: "'Cairo', 'Noto Sans Arabic', sans-serif",
    font_weight: "500",
    line_height: "1.8",
    letter_spacing: "0",
    date_locale: "ar-EG",
    number_locale: "ar-EG",
    currency: "EGP",
};

static EN_CONFIG: LangConfig = LangConfig {
    dir: Direction::Ltr,
    font_family: "'Inter', 'Segoe UI', sans-serif",
    font_weight: "400",
    line_height: "1.6",
    letter_spacing: "0.01em",
    date_locale: "en-US",
    number_locale: "en-US",
    currency: "EGP",
};

/// Body classes owned by the language system; all are removed before the
/// current pair is added.
pub const LANGUAGE_BODY_CLASSES: [&str; 4] = ["rtl", "ltr", "lang-ar", "lang-en"];

/// Everything the page root should carry for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLanguage {
    /// `<html lang>`
    pub lang: &'static str,
    /// `<html dir>`
    pub dir: Direction,
    pub body_classes: [String; 2],
    pub css_vars: [(&'static str, &'static str); 4],
}

impl DocumentLanguage {
    pub fn for_lang(lang: Lang) -> Self {
        let config = lang.config();
        Self {
            lang: lang.code(),
            dir: config.dir,
            body_classes: [config.dir.as_str().to_string(), format!("lang-{}", lang.code())],
            css_vars: [
                ("--font-family-current", config.font_family),
                ("--font-weight-current", config.font_weight),
                ("--line-height-current", config.line_height),
                ("--letter-spacing-current", config.letter_spacing),
            ],
        }
    }
}

/// Notification broadcast after every transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageChanged {
    pub language: Lang,
    pub config: &'static LangConfig,
}

/// Pick the startup language: URL parameter, then stored preference, then
/// browser locale, then the default. Unsupported values are skipped.
pub fn resolve_initial(
    url_param: Option<&str>,
    stored: Option<&str>,
    browser_locale: Option<&str>,
) -> Lang {
    url_param
        .and_then(Lang::from_code)
        .or_else(|| stored.and_then(Lang::from_code))
        .or_else(|| browser_locale.and_then(Lang::from_locale))
        .unwrap_or_default()
}

/// Two-state language machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSystem {
    current: Lang,
}

impl LanguageSystem {
    /// Resolve the startup language and apply it.
    pub fn init(
        store: &impl PreferenceStore,
        url_param: Option<&str>,
        browser_locale: Option<&str>,
    ) -> (Self, LanguageChanged) {
        let stored = store.load();
        let lang = resolve_initial(url_param, stored.as_deref(), browser_locale);
        let mut system = Self::default();
        let event = system.apply(lang, store);
        info!(lang = lang.code(), "language system initialized");
        (system, event)
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn is_rtl(&self) -> bool {
        self.current.is_rtl()
    }

    pub fn config(&self) -> &'static LangConfig {
        self.current.config()
    }

    pub fn document(&self) -> DocumentLanguage {
        DocumentLanguage::for_lang(self.current)
    }

    /// Transition to `lang`. The choice applies even when it cannot be persisted.
    pub fn apply(&mut self, lang: Lang, store: &impl PreferenceStore) -> LanguageChanged {
        self.current = lang;

        if let Err(err) = store.save(lang.code()) {
            warn!(%err, "could not save language preference");
        }
        if let Err(err) = crate::i18n::set_language(lang) {
            warn!(%err, "could not switch localization bundles");
        }

        LanguageChanged {
            language: lang,
            config: lang.config(),
        }
    }

    /// Apply a raw code, falling back to the default language when unsupported.
    pub fn apply_code(&mut self, code: &str, store: &impl PreferenceStore) -> LanguageChanged {
        self.apply(Lang::from_code_or_default(code), store)
    }

    /// Apply a raw code only when it is supported.
    pub fn set_language(
        &mut self,
        code: &str,
        store: &impl PreferenceStore,
    ) -> Option<LanguageChanged> {
        Lang::from_code(code).map(|lang| self.apply(lang, store))
    }

    pub fn toggle(&mut self, store: &impl PreferenceStore) -> LanguageChanged {
        self.apply(self.current.toggle(), store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StorageError};
    use std::cell::Cell;

    struct BrokenStore {
        writes: Cell<u32>,
    }

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code(" EN "), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn unsupported_code_falls_back_to_default() {
        assert_eq!(Lang::from_code_or_default("de"), Lang::Ar);
        assert_eq!(Lang::from_code_or_default(""), Lang::Ar);

        let store = MemoryStore::default();
        let mut system = LanguageSystem::default();
        system.apply(Lang::En, &store);
        let event = system.apply_code("xx", &store);
        assert_eq!(event.language, Lang::Ar);
        assert_eq!(system.current(), Lang::Ar);
    }

    #[test]
    fn set_language_ignores_unsupported_codes() {
        let store = MemoryStore::default();
        let mut system = LanguageSystem::default();
        system.apply(Lang::En, &store);
        assert!(system.set_language("fr", &store).is_none());
        assert_eq!(system.current(), Lang::En);
        assert!(system.set_language("ar", &store).is_some());
        assert_eq!(system.current(), Lang::Ar);
    }

    #[test]
    fn startup_priority_is_url_then_stored_then_browser() {
        assert_eq!(resolve_initial(Some("en"), Some("ar"), Some("ar-EG")), Lang::En);
        assert_eq!(resolve_initial(None, Some("en"), Some("ar-EG")), Lang::En);
        assert_eq!(resolve_initial(Some("fr"), Some("en"), None), Lang::En);
        assert_eq!(resolve_initial(None, None, Some("en-GB")), Lang::En);
        assert_eq!(resolve_initial(None, Some("zz"), Some("de-DE")), Lang::Ar);
        assert_eq!(resolve_initial(None, None, None), Lang::Ar);
    }

    #[test]
    fn init_reads_and_persists_preference() {
        let store = MemoryStore::with_value("en");
        let (system, event) = LanguageSystem::init(&store, None, Some("ar-EG"));
        assert_eq!(system.current(), Lang::En);
        assert_eq!(event.config.dir, Direction::Ltr);
        assert_eq!(store.load().as_deref(), Some("en"));
    }

    #[test]
    fn toggling_twice_restores_document_attributes() {
        let store = MemoryStore::default();
        let (mut system, _) = LanguageSystem::init(&store, None, None);
        let before = system.document();
        assert_eq!(before.lang, "ar");
        assert_eq!(before.dir, Direction::Rtl);

        let toggled = system.toggle(&store);
        assert_eq!(toggled.language, Lang::En);
        assert_eq!(system.document().dir, Direction::Ltr);

        system.toggle(&store);
        assert_eq!(system.document(), before);
    }

    #[test]
    fn storage_failure_still_applies_language() {
        let store = BrokenStore { writes: Cell::new(0) };
        let mut system = LanguageSystem::default();
        let event = system.apply(Lang::En, &store);
        assert_eq!(event.language, Lang::En);
        assert_eq!(system.current(), Lang::En);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn document_profile_matches_language() {
        let ar = DocumentLanguage::for_lang(Lang::Ar);
        assert_eq!(ar.body_classes, ["rtl".to_string(), "lang-ar".to_string()]);
        assert_eq!(ar.css_vars[0].1, "'Cairo', 'Noto Sans Arabic', sans-serif");

        let en = DocumentLanguage::for_lang(Lang::En);
        assert_eq!(en.body_classes, ["ltr".to_string(), "lang-en".to_string()]);
        assert_eq!(en.css_vars[3], ("--letter-spacing-current", "0.01em"));
    }
}
