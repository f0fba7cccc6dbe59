//! Values that may differ per language.
//!
//! In the content documents any leaf (a string, a list, a whole text block)
//! is either given once or as an object keyed by language code:
//!
//! ```json
//! "phone": "+20 100 123 4567",
//! "address": { "ar": "القاهرة، مصر", "en": "Cairo, Egypt" }
//! ```
//!
//! Resolution never fails: requested language, then Arabic, then English,
//! then the type's empty value. An empty string counts as missing. Parsing
//! never fails either: a value of the wrong shape becomes the empty value.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::language::Lang;

#[derive(Debug, Clone, PartialEq)]
pub enum Localized<T> {
    Plain(T),
    ByLang { ar: Option<T>, en: Option<T> },
}

/// Values that count as "not provided" during fallback.
pub trait Blank {
    fn is_blank(&self) -> bool {
        false
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {}

impl<T: Blank> Localized<T> {
    pub fn by_lang(ar: T, en: T) -> Self {
        Localized::ByLang {
            ar: Some(ar),
            en: Some(en),
        }
    }

    /// Best match for `lang`, if any language provides a value.
    pub fn get(&self, lang: Lang) -> Option<&T> {
        match self {
            Localized::Plain(value) => Some(value),
            Localized::ByLang { ar, en } => {
                fn present<T: Blank>(value: &Option<T>) -> Option<&T> {
                    value.as_ref().filter(|v| !v.is_blank())
                }
                match lang {
                    Lang::Ar => present(ar).or_else(|| present(en)),
                    Lang::En => present(en).or_else(|| present(ar)),
                }
            }
        }
    }

    pub fn localize(&self, lang: Lang) -> T
    where
        T: Clone + Default,
    {
        self.get(lang).cloned().unwrap_or_default()
    }
}

/// Localize an optional value; absent values resolve to the empty value.
pub fn localize<T>(value: Option<&Localized<T>>, lang: Lang) -> T
where
    T: Blank + Clone + Default,
{
    value.map(|v| v.localize(lang)).unwrap_or_default()
}

impl<'de, T: DeserializeOwned + Default> Deserialize<'de> for Localized<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(mut map) if map.contains_key("ar") || map.contains_key("en") => {
                Ok(Localized::ByLang {
                    ar: take_lang(&mut map, "ar"),
                    en: take_lang(&mut map, "en"),
                })
            }
            other => Ok(Localized::Plain(serde_json::from_value(other).unwrap_or_else(
                |err| {
                    debug!(%err, "ignoring malformed localized value");
                    T::default()
                },
            ))),
        }
    }
}

fn take_lang<T: DeserializeOwned>(map: &mut Map<String, Value>, code: &str) -> Option<T> {
    let value = map.remove(code).filter(|v| !v.is_null())?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(code, %err, "ignoring malformed localized entry");
            None
        }
    }
}
