//! Per-section view models built from the content documents.
//!
//! Builders are pure: given the documents and a language they produce the
//! exact strings and links the components render. A missing document or
//! section yields `None` (or an empty list) and the component keeps its
//! static markup.

use super::localized::localize;
use super::model::{
    AboutText, Categories, FooterText, ProjectsDoc, SectionHeading, SeoDoc, ServicesDoc,
    SiteContent, StatEntry,
};
use crate::core::form::{phone_digits, tel_link, whatsapp_link};
use crate::core::language::Lang;

pub const DEFAULT_SERVICE_ICON: &str = "🏢";

/// Brand-colored stand-in for projects without (or with broken) images.
pub const PROJECT_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 300'%3E%3Crect fill='%23b11226' width='400' height='300'/%3E%3Ctext x='200' y='150' font-family='Arial' font-size='20' fill='white' text-anchor='middle'%3ENeon Color%3C/text%3E%3C/svg%3E";

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub badge: String,
    pub headline_accent: String,
    pub headline_main: String,
    pub headline_location: String,
    pub subheadline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub trust: Vec<TrustItem>,
}

/// One entry of the strip under the hero call-to-actions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustItem {
    pub key: &'static str,
    pub value: Option<String>,
    pub label: String,
}

pub fn hero_view(content: &SiteContent, lang: Lang) -> Option<HeroView> {
    let hero = content.hero.as_ref()?.localize(lang);

    let badge = Some(localize(content.hero_badge.as_ref(), lang))
        .filter(|badge| !badge.is_empty())
        .unwrap_or_else(|| hero.badge.clone());
    let subheadline = if hero.subheadline.is_empty() {
        hero.description.clone()
    } else {
        hero.subheadline.clone()
    };

    let trust = content
        .hero_stats
        .as_ref()
        .map(|labels| {
            let stats = content.stats.as_ref();
            vec![
                TrustItem {
                    key: "projects",
                    value: stat_value(stats.and_then(|s| s.projects_completed.as_ref())),
                    label: localize(labels.projects.as_ref(), lang),
                },
                TrustItem {
                    key: "clients",
                    value: stat_value(stats.and_then(|s| s.clients_served.as_ref())),
                    label: localize(labels.clients.as_ref(), lang),
                },
                TrustItem {
                    key: "cities",
                    value: None,
                    label: localize(labels.cities.as_ref(), lang),
                },
            ]
        })
        .unwrap_or_default();

    Some(HeroView {
        badge,
        headline_accent: hero.headline_accent,
        headline_main: hero.headline_main,
        headline_location: hero.headline_location,
        subheadline,
        cta_primary: hero.cta_primary,
        cta_secondary: hero.cta_secondary,
        trust,
    })
}

fn stat_value(entry: Option<&StatEntry>) -> Option<String> {
    entry
        .map(|entry| entry.value.clone())
        .filter(|value| !value.is_empty())
}

/// Title and subtitle of the services section.
pub fn section_heading(content: Option<&SiteContent>, lang: Lang) -> Option<SectionHeading> {
    content?
        .services_overview
        .as_ref()
        .map(|heading| heading.localize(lang))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub icon: String,
    pub name: String,
    pub tagline: Option<String>,
    pub description: String,
    pub features: Vec<String>,
}

pub fn service_cards(doc: Option<&ServicesDoc>, lang: Lang, max_features: usize) -> Vec<ServiceCard> {
    let Some(services) = doc.and_then(|doc| doc.services.as_ref()) else {
        return Vec::new();
    };

    services
        .iter()
        .map(|service| {
            let mut features = localize(service.features.as_ref(), lang);
            features.truncate(max_features);
            ServiceCard {
                icon: service
                    .icon
                    .clone()
                    .filter(|icon| !icon.is_empty())
                    .unwrap_or_else(|| DEFAULT_SERVICE_ICON.to_string()),
                name: localize(service.name.as_ref(), lang),
                tagline: Some(localize(service.tagline.as_ref(), lang)).filter(|t| !t.is_empty()),
                description: localize(service.description.as_ref(), lang),
                features,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Raw category key, matched by the filter.
    pub category: String,
    pub image: String,
    pub title: String,
    pub category_name: String,
}

/// Featured projects first, otherwise document order, capped at `max`.
pub fn project_cards(doc: Option<&ProjectsDoc>, lang: Lang, max: usize) -> Vec<ProjectCard> {
    let Some(doc) = doc else {
        return Vec::new();
    };
    let Some(projects) = doc.projects.as_ref() else {
        return Vec::new();
    };

    let featured = projects.iter().filter(|project| project.featured);
    let others = projects.iter().filter(|project| !project.featured);

    featured
        .chain(others)
        .take(max)
        .map(|project| ProjectCard {
            category: project.category.clone(),
            image: project
                .images
                .first()
                .filter(|src| !src.is_empty())
                .cloned()
                .unwrap_or_else(|| PROJECT_PLACEHOLDER.to_string()),
            title: localize(project.title.as_ref(), lang),
            category_name: category_name(doc.categories.as_ref(), &project.category, lang),
        })
        .collect()
}

fn category_name(categories: Option<&Categories>, key: &str, lang: Lang) -> String {
    categories
        .and_then(|categories| categories.get(key))
        .map(|name| name.localize(lang))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| key.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
}

/// Filter buttons in document order.
pub fn filter_buttons(doc: Option<&ProjectsDoc>, lang: Lang) -> Vec<FilterButton> {
    doc.and_then(|doc| doc.categories.as_ref())
        .map(|categories| {
            categories
                .iter()
                .map(|(key, name)| FilterButton {
                    key: key.to_string(),
                    label: name.localize(lang),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub const FILTER_ALL: &str = "all";

/// Which project cards are shown. Hidden cards stay in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn from_key(key: &str) -> Self {
        if key == FILTER_ALL {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(key.to_string())
        }
    }

    /// Filter selected before any click: the first category button.
    pub fn initial(doc: Option<&ProjectsDoc>) -> Self {
        doc.and_then(|doc| doc.categories.as_ref())
            .and_then(Categories::first_key)
            .map(Self::from_key)
            .unwrap_or_default()
    }

    pub fn key(&self) -> &str {
        match self {
            ProjectFilter::All => FILTER_ALL,
            ProjectFilter::Category(key) => key,
        }
    }

    pub fn is_active(&self, button_key: &str) -> bool {
        self.key() == button_key
    }

    pub fn is_visible(&self, card_category: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(key) => key == card_category,
        }
    }
}

pub fn about_view(content: Option<&SiteContent>, lang: Lang) -> Option<AboutText> {
    content?.about.as_ref().map(|about| about.localize(lang))
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatView {
    /// Element id of the number; the label uses `<id>-label`.
    pub id: &'static str,
    pub value: String,
    pub label: String,
}

pub fn stats_view(content: Option<&SiteContent>, lang: Lang) -> Vec<StatView> {
    let Some(stats) = content.and_then(|content| content.stats.as_ref()) else {
        return Vec::new();
    };

    [
        ("stat-years", stats.years_experience.as_ref()),
        ("stat-clients", stats.clients_served.as_ref()),
        ("stat-projects", stats.projects_completed.as_ref()),
    ]
    .into_iter()
    .filter_map(|(id, entry)| {
        entry.map(|entry| StatView {
            id,
            value: entry.value.clone(),
            label: entry.label(lang).to_string(),
        })
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactView {
    pub phone: Option<ContactLink>,
    pub whatsapp: Option<ContactLink>,
    pub email: Option<ContactLink>,
    pub address: Option<String>,
    /// Floating buttons.
    pub whatsapp_float: Option<String>,
    pub call_float: Option<String>,
}

pub fn contact_view(content: Option<&SiteContent>, lang: Lang) -> Option<ContactView> {
    let contact = content?.contact.as_ref()?;
    let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

    let phone = present(&contact.phone);
    let whatsapp = present(&contact.whatsapp);

    Some(ContactView {
        phone: phone.as_ref().map(|number| ContactLink {
            text: number.clone(),
            href: tel_link(number),
        }),
        whatsapp: whatsapp.as_ref().map(|number| ContactLink {
            text: number.clone(),
            href: whatsapp_link(number, None),
        }),
        email: present(&contact.email).map(|email| ContactLink {
            href: format!("mailto:{email}"),
            text: email,
        }),
        address: contact
            .address
            .as_ref()
            .map(|address| address.localize(lang))
            .filter(|address| !address.is_empty()),
        whatsapp_float: whatsapp.as_deref().map(|number| whatsapp_link(number, None)),
        call_float: phone.as_deref().map(tel_link),
    })
}

/// Number the contact form hands off to, when one is configured.
pub fn whatsapp_number(content: Option<&SiteContent>) -> Option<String> {
    content?
        .contact
        .as_ref()?
        .whatsapp
        .as_deref()
        .map(phone_digits)
        .filter(|digits| !digits.is_empty())
}

pub fn footer_view(content: Option<&SiteContent>, lang: Lang) -> Option<FooterText> {
    content?.footer.as_ref().map(|footer| footer.localize(lang))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub id: &'static str,
    pub name: &'static str,
    pub href: String,
}

pub fn social_links(content: Option<&SiteContent>) -> Vec<SocialLink> {
    let Some(social) = content.and_then(|content| content.social.as_ref()) else {
        return Vec::new();
    };
    [
        ("social-facebook", "Facebook", &social.facebook),
        ("social-instagram", "Instagram", &social.instagram),
        ("social-tiktok", "TikTok", &social.tiktok),
    ]
    .into_iter()
    .filter_map(|(id, name, href)| {
        href.clone()
            .filter(|href| !href.is_empty())
            .map(|href| SocialLink { id, name, href })
    })
    .collect()
}

/// Head metadata for one page in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoMeta {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeoView {
    pub meta: Option<SeoMeta>,
    /// Serialized JSON-LD blocks, organization first. `None` leaves existing
    /// blocks untouched.
    pub structured_data: Option<Vec<String>>,
}

pub fn seo_view(doc: Option<&SeoDoc>, page: &str, lang: Lang) -> Option<SeoView> {
    let doc = doc?;

    let meta = doc
        .pages
        .get(page)
        .and_then(|entries| entries.entry(lang))
        .map(|entry| SeoMeta {
            lang: lang.code(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            keywords: entry.keywords.clone(),
            og_title: fallback(&entry.og_title, &entry.title),
            og_description: fallback(&entry.og_description, &entry.description),
        });

    let structured_data = doc.structured_data.as_ref().map(|data| {
        [data.organization.as_ref(), data.local_business.as_ref()]
            .into_iter()
            .flatten()
            .map(|block| block.to_string())
            .collect()
    });

    Some(SeoView {
        meta,
        structured_data,
    })
}

fn fallback(preferred: &str, other: &str) -> String {
    if preferred.is_empty() {
        other.to_string()
    } else {
        preferred.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Parsed from text: category order only survives a streaming parse.
    fn projects() -> ProjectsDoc {
        serde_json::from_str(
            r#"{
                "categories": {
                    "all": { "ar": "الكل", "en": "All" },
                    "signage": { "ar": "لافتات", "en": "Signage" },
                    "hospital": { "en": "Hospitals" }
                },
                "projects": [
                    { "title": { "en": "P1" }, "category": "signage", "images": ["a.jpg"] },
                    { "title": { "en": "P2" }, "category": "hospital", "featured": true },
                    { "title": { "en": "P3" }, "category": "retail", "images": [] },
                    { "title": { "en": "P4" }, "category": "signage", "featured": true },
                    { "title": { "en": "P5" }, "category": "signage" },
                    { "title": { "en": "P6" }, "category": "signage" },
                    { "title": { "en": "P7" }, "category": "signage" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn featured_projects_come_first_and_cards_are_capped() {
        let cards = project_cards(Some(&projects()), Lang::En, 6);
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["P2", "P4", "P1", "P3", "P5", "P6"]);
        assert_eq!(cards[2].image, "a.jpg");
        assert_eq!(cards[0].image, PROJECT_PLACEHOLDER);
    }

    #[test]
    fn category_names_localize_or_fall_back_to_the_key() {
        let cards = project_cards(Some(&projects()), Lang::Ar, 6);
        assert_eq!(cards[0].category_name, "Hospitals");
        assert_eq!(cards[1].category_name, "لافتات");
        assert_eq!(cards[3].category_name, "retail");
    }

    #[test]
    fn filter_all_shows_everything_and_categories_hide_the_rest() {
        let doc = projects();
        let cards = project_cards(Some(&doc), Lang::En, 6);

        let all = ProjectFilter::initial(Some(&doc));
        assert_eq!(all, ProjectFilter::All);
        assert!(cards.iter().all(|card| all.is_visible(&card.category)));

        let signage = ProjectFilter::from_key("signage");
        let visible: Vec<_> = cards
            .iter()
            .filter(|card| signage.is_visible(&card.category))
            .map(|card| card.title.as_str())
            .collect();
        assert_eq!(visible, ["P4", "P1", "P5", "P6"]);
        // Cards are hidden, never removed from the grid.
        assert_eq!(cards.len(), 6);
        assert!(signage.is_active("signage") && !signage.is_active("all"));
    }

    #[test]
    fn filter_buttons_follow_document_order() {
        let buttons = filter_buttons(Some(&projects()), Lang::En);
        let keys: Vec<_> = buttons.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["all", "signage", "hospital"]);
        assert_eq!(buttons[0].label, "All");
        assert!(filter_buttons(None, Lang::En).is_empty());
    }

    #[test]
    fn one_bad_project_does_not_hide_the_grid() {
        let doc: ProjectsDoc = serde_json::from_str(
            r#"{
                "projects": [
                    { "title": { "en": "Broken" }, "category": null, "images": null, "featured": null },
                    { "title": { "en": "Fine" }, "category": "signage", "images": ["b.jpg"] }
                ]
            }"#,
        )
        .unwrap();
        let cards = project_cards(Some(&doc), Lang::En, 6);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].image, PROJECT_PLACEHOLDER);
        assert_eq!(cards[0].category, "");
        assert_eq!(cards[1].image, "b.jpg");
    }

    #[test]
    fn service_named_in_an_unknown_language_still_renders() {
        let doc: ServicesDoc =
            serde_json::from_str(r#"{ "services": [{ "name": { "fr": "LED" } }, { "name": "Print" }] }"#)
                .unwrap();
        let cards = service_cards(Some(&doc), Lang::En, 3);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "");
        assert_eq!(cards[1].name, "Print");
    }

    #[test]
    fn service_cards_default_icon_and_cap_features() {
        let doc: ServicesDoc = serde_json::from_value(json!({
            "services": [{
                "name": { "ar": "لافتات", "en": "Signs" },
                "description": { "en": "Indoor and outdoor" },
                "features": { "en": ["a", "b", "c", "d"] }
            }, {
                "name": "LED",
                "tagline": { "en": "Bright" },
                "icon": "💡"
            }]
        }))
        .unwrap();
        let cards = service_cards(Some(&doc), Lang::En, 3);
        assert_eq!(cards[0].icon, DEFAULT_SERVICE_ICON);
        assert_eq!(cards[0].features, ["a", "b", "c"]);
        assert_eq!(cards[0].tagline, None);
        assert_eq!(cards[1].icon, "💡");
        assert_eq!(cards[1].tagline.as_deref(), Some("Bright"));
        assert!(cards[1].features.is_empty());
    }

    #[test]
    fn hero_falls_back_for_badge_and_subheadline() {
        let content: SiteContent = serde_json::from_value(json!({
            "hero": { "en": { "badge": "Since 2009", "description": "We build signs" } },
            "hero_stats": { "projects": { "en": "Projects" }, "cities": { "en": "Cities" } },
            "stats": { "projects_completed": { "value": "1,250" } }
        }))
        .unwrap();
        let hero = hero_view(&content, Lang::En).unwrap();
        assert_eq!(hero.badge, "Since 2009");
        assert_eq!(hero.subheadline, "We build signs");
        assert_eq!(hero.trust[0].value.as_deref(), Some("1,250"));
        assert_eq!(hero.trust[1].label, "");
        assert_eq!(hero.trust[2].label, "Cities");

        assert!(hero_view(&SiteContent::default(), Lang::En).is_none());
    }

    #[test]
    fn contact_links() {
        let content: SiteContent = serde_json::from_value(json!({
            "contact": {
                "phone": "+20 100 123 4567",
                "whatsapp": "+20 100 123 4567",
                "email": "info@neoncolor.com.eg",
                "address": { "ar": "القاهرة", "en": "Cairo" }
            }
        }))
        .unwrap();
        let view = contact_view(Some(&content), Lang::En).unwrap();
        assert_eq!(view.phone.unwrap().href, "tel:+201001234567");
        assert_eq!(view.whatsapp.unwrap().href, "https://wa.me/201001234567");
        assert_eq!(view.email.unwrap().href, "mailto:info@neoncolor.com.eg");
        assert_eq!(view.address.as_deref(), Some("Cairo"));
        assert_eq!(view.call_float.as_deref(), Some("tel:+201001234567"));
        assert_eq!(whatsapp_number(Some(&content)).as_deref(), Some("201001234567"));
    }

    #[test]
    fn stats_pick_label_for_language() {
        let content: SiteContent = serde_json::from_value(json!({
            "stats": {
                "years_experience": { "value": "15+", "label_ar": "سنة خبرة", "label_en": "Years" },
                "projects_completed": { "value": 1250, "label_ar": "مشروع", "label_en": "Projects" }
            }
        }))
        .unwrap();
        let stats = stats_view(Some(&content), Lang::Ar);
        assert_eq!(stats.len(), 2);
        assert_eq!((stats[0].id, stats[0].label.as_str()), ("stat-years", "سنة خبرة"));
        assert_eq!(stats[1].value, "1250");
    }

    #[test]
    fn seo_og_fields_fall_back_and_structured_data_is_ordered() {
        let doc: SeoDoc = serde_json::from_value(json!({
            "pages": { "home": { "en": { "title": "Neon Color", "description": "Signs" } } },
            "structured_data": {
                "local_business": { "@type": "LocalBusiness" },
                "organization": { "@type": "Organization" }
            }
        }))
        .unwrap();
        let view = seo_view(Some(&doc), "home", Lang::En).unwrap();
        let meta = view.meta.unwrap();
        assert_eq!(meta.og_title, "Neon Color");
        assert_eq!(meta.og_description, "Signs");
        assert_eq!(meta.lang, "en");
        let blocks = view.structured_data.unwrap();
        assert_eq!(blocks[0], r#"{"@type":"Organization"}"#);
        assert_eq!(blocks[1], r#"{"@type":"LocalBusiness"}"#);

        assert!(seo_view(Some(&doc), "home", Lang::Ar).unwrap().meta.is_none());
        assert!(seo_view(None, "home", Lang::En).is_none());
    }

    #[test]
    fn missing_documents_render_nothing() {
        assert!(service_cards(None, Lang::Ar, 3).is_empty());
        assert!(project_cards(None, Lang::Ar, 6).is_empty());
        assert!(stats_view(None, Lang::Ar).is_empty());
        assert!(contact_view(None, Lang::Ar).is_none());
        assert!(about_view(None, Lang::Ar).is_none());
        assert!(footer_view(None, Lang::Ar).is_none());
        assert!(social_links(None).is_empty());
        assert!(section_heading(None, Lang::Ar).is_none());
    }
}
