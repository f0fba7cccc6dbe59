//! Static UI strings for `neon-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ar/neon-ui.ftl   (fallback/reference)
//!   en/neon-ui.ftl
//! ```
//!
//! Every lookup names the language explicitly, so rendering never depends on
//! which language the shared loader happens to have selected:
//! ```ignore
//! use crate::core::language::Lang;
//! let label = crate::t!(Lang::En, "nav-home"); // "Home"
//! ```
//!
//! Both bundles are always loaded; the requested language is consulted first
//! and the other one is the fallback. A key missing from the Arabic bundle is
//! a compile error.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::core::language::Lang;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro bound to an explicit language.
/// Examples:
///     t!(lang, "nav-home")
///     t!(Lang::Ar, "form-submit")
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader_for($lang), $key)
    };
}

/// Fluent "domain" (matches the package name and the FTL filename).
const DOMAIN: &str = "neon-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Shared loader holding both bundles; tracks the language chosen by the user.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = langid(Lang::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

/// Per-language views over the shared bundles, indexed like `Lang::ALL`.
static BY_LANG: Lazy<Vec<FluentLanguageLoader>> = Lazy::new(|| {
    init();
    Lang::ALL
        .iter()
        .map(|lang| LOADER.select_languages(&preference_order(*lang)))
        .collect()
});

static INIT: Once = Once::new();

/// Load both bundles (idempotent).
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = load(Lang::default()) {
            warn!(%err, "failed loading localization bundles; continuing with fallback");
        }
    });
}

/// Make `lang` the first choice of the shared loader.
pub fn set_language(lang: Lang) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    load(lang)
}

/// Loader that resolves keys in `lang` first, then the other language.
pub fn loader_for(lang: Lang) -> &'static FluentLanguageLoader {
    let index = Lang::ALL
        .iter()
        .position(|candidate| *candidate == lang)
        .unwrap_or_default();
    &BY_LANG[index]
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn load(lang: Lang) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, &preference_order(lang)).map(|_| ())
}

fn preference_order(lang: Lang) -> [LanguageIdentifier; 2] {
    [langid(lang), langid(lang.toggle())]
}

fn langid(lang: Lang) -> LanguageIdentifier {
    lang.code()
        .parse()
        .expect("language codes are valid identifiers")
}
