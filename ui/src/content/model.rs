//! Typed shapes of the four content documents.
//!
//! Every field is optional: a document that parses but lacks a section
//! simply renders nothing for it. Leaf fields of the wrong type (or `null`)
//! read as their empty value, so one bad entry only blanks itself.

use std::fmt;

use serde::de::{DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::localized::{Blank, Localized};
use crate::core::language::Lang;

pub type Text = Localized<String>;

/// `data/content.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero: Option<Localized<HeroText>>,
    pub hero_badge: Option<Text>,
    pub hero_stats: Option<HeroStats>,
    pub services_overview: Option<Localized<SectionHeading>>,
    pub about: Option<Localized<AboutText>>,
    pub stats: Option<Stats>,
    pub contact: Option<ContactInfo>,
    pub footer: Option<Localized<FooterText>>,
    pub social: Option<Social>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroText {
    #[serde(deserialize_with = "lenient")]
    pub badge: String,
    #[serde(deserialize_with = "lenient")]
    pub headline_accent: String,
    #[serde(deserialize_with = "lenient")]
    pub headline_main: String,
    #[serde(deserialize_with = "lenient")]
    pub headline_location: String,
    #[serde(deserialize_with = "lenient")]
    pub subheadline: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub cta_primary: String,
    #[serde(deserialize_with = "lenient")]
    pub cta_secondary: String,
}

impl Blank for HeroText {}

/// Labels of the trust strip under the hero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroStats {
    pub projects: Option<Text>,
    pub clients: Option<Text>,
    pub cities: Option<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub subtitle: String,
}

impl Blank for SectionHeading {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutText {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub content: String,
}

impl Blank for AboutText {}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub years_experience: Option<StatEntry>,
    pub clients_served: Option<StatEntry>,
    pub projects_completed: Option<StatEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    /// Authored display value; documents write it as a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(deserialize_with = "lenient")]
    pub label_ar: String,
    #[serde(deserialize_with = "lenient")]
    pub label_en: String,
}

impl StatEntry {
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.label_ar,
            Lang::En => &self.label_en,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub whatsapp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FooterText {
    #[serde(deserialize_with = "lenient")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient")]
    pub quick_links_title: String,
    #[serde(deserialize_with = "lenient")]
    pub services_title: String,
    #[serde(deserialize_with = "lenient")]
    pub contact_title: String,
}

impl Blank for FooterText {}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(deserialize_with = "lenient")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub instagram: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tiktok: Option<String>,
}

/// `data/services.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicesDoc {
    pub services: Option<Vec<Service>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub tagline: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub features: Option<Localized<Vec<String>>>,
    #[serde(deserialize_with = "lenient")]
    pub icon: Option<String>,
}

/// `data/projects.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsDoc {
    pub projects: Option<Vec<Project>>,
    pub categories: Option<Categories>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub category: String,
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub featured: bool,
}

/// Category key to display name, in document order.
#[derive(Debug, Clone, Default)]
pub struct Categories(pub Vec<(String, Text)>);

impl Categories {
    pub fn get(&self, key: &str) -> Option<&Text> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, name)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Text)> {
        self.0.iter().map(|(key, name)| (key.as_str(), name))
    }

    pub fn first_key(&self) -> Option<&str> {
        self.0.first().map(|(key, _)| key.as_str())
    }

}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = Categories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category keys to names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Categories, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, name)) = access.next_entry::<String, Text>()? {
                    entries.push((key, name));
                }
                Ok(Categories(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// `data/seo.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoDoc {
    pub pages: std::collections::HashMap<String, SeoPage>,
    pub structured_data: Option<StructuredData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoPage {
    pub ar: Option<SeoEntry>,
    pub en: Option<SeoEntry>,
}

impl SeoPage {
    pub fn entry(&self, lang: Lang) -> Option<&SeoEntry> {
        match lang {
            Lang::Ar => self.ar.as_ref(),
            Lang::En => self.en.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoEntry {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub keywords: String,
    #[serde(deserialize_with = "lenient")]
    pub og_title: String,
    #[serde(deserialize_with = "lenient")]
    pub og_description: String,
}

/// Schema.org blocks, re-emitted verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StructuredData {
    pub organization: Option<Value>,
    pub local_business: Option<Value>,
}

/// Field value, or the type's empty value when it is `null` or malformed.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        debug!(%err, "ignoring malformed field");
        T::default()
    }))
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
