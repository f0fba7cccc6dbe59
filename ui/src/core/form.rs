//! Contact form validation and the WhatsApp hand-off.
//!
//! Nothing is submitted anywhere: a valid form becomes a pre-filled
//! `https://wa.me/<number>?text=<message>` link opened in a new tab.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::language::Lang;
use crate::t;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()\-]{8,}$").expect("phone pattern compiles"));

const MIN_NAME_CHARS: usize = 2;

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    /// Key of the selected [`ServiceOption`], empty when nothing is selected.
    pub service: String,
    pub message: String,
}

/// Fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
}

impl Field {
    /// Id of the input element the inline error attaches to.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "form-name",
            Field::Phone => "form-phone",
        }
    }

    pub fn message(self, lang: Lang) -> String {
        match self {
            Field::Name => t!(lang, "validation-name"),
            Field::Phone => t!(lang, "validation-phone"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<Field>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(&field)
    }

    pub fn errors(&self) -> &[Field] {
        &self.errors
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

/// Digits, whitespace, `+`, `(`, `)` and `-`; at least eight characters.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

impl ContactForm {
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();
        if !is_valid_name(&self.name) {
            errors.push(Field::Name);
        }
        if !is_valid_phone(&self.phone) {
            errors.push(Field::Phone);
        }
        ValidationReport { errors }
    }

    /// Localized quote request, one `label: value` line per filled field.
    pub fn compose_message(&self, lang: Lang) -> String {
        let mut message = format!("{}\n\n", t!(lang, "whatsapp-heading"));
        message.push_str(&format!("{}: {}\n", t!(lang, "whatsapp-name"), self.name.trim()));
        message.push_str(&format!("{}: {}\n", t!(lang, "whatsapp-phone"), self.phone.trim()));

        let service = self.service.trim();
        if !service.is_empty() {
            let label = ServiceOption::from_key(service)
                .map(|option| option.label(lang))
                .unwrap_or_else(|| service.to_string());
            message.push_str(&format!("{}: {label}\n", t!(lang, "whatsapp-service")));
        }

        let body = self.message.trim();
        if !body.is_empty() {
            message.push_str(&format!("{}: {body}\n", t!(lang, "whatsapp-message")));
        }

        message
    }
}

/// Digits of a configured phone number (`+20 100 123 4567` -> `201001234567`).
pub fn phone_digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Chat link for a configured number, optionally pre-filled.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    let digits = phone_digits(number);
    match message {
        Some(text) => format!("https://wa.me/{digits}?text={}", urlencoding::encode(text)),
        None => format!("https://wa.me/{digits}"),
    }
}

/// `tel:` link with whitespace removed.
pub fn tel_link(number: &str) -> String {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

/// Service choices offered by the form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOption {
    Signage,
    Hospital,
    Retail,
    Decoration,
    Printing,
    Led,
    Other,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 7] = [
        ServiceOption::Signage,
        ServiceOption::Hospital,
        ServiceOption::Retail,
        ServiceOption::Decoration,
        ServiceOption::Printing,
        ServiceOption::Led,
        ServiceOption::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ServiceOption::Signage => "signage",
            ServiceOption::Hospital => "hospital",
            ServiceOption::Retail => "retail",
            ServiceOption::Decoration => "decoration",
            ServiceOption::Printing => "printing",
            ServiceOption::Led => "led",
            ServiceOption::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }

    pub fn label(self, lang: Lang) -> String {
        match self {
            ServiceOption::Signage => t!(lang, "service-signage"),
            ServiceOption::Hospital => t!(lang, "service-hospital"),
            ServiceOption::Retail => t!(lang, "service-retail"),
            ServiceOption::Decoration => t!(lang, "service-decoration"),
            ServiceOption::Printing => t!(lang, "service-printing"),
            ServiceOption::Led => t!(lang, "service-led"),
            ServiceOption::Other => t!(lang, "service-other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, phone: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            phone: phone.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("01012345678"));
        assert!(is_valid_phone("+20 100 123 4567"));
        assert!(is_valid_phone("(02) 2345-6789"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("0101234567x"));
    }

    #[test]
    fn name_rules() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("  A  "));
        assert!(is_valid_name("Ali"));
        assert!(is_valid_name("علي"));
    }

    #[test]
    fn report_lists_each_failing_field() {
        let report = form("A", "123").validate();
        assert!(!report.is_valid());
        assert_eq!(report.errors(), &[Field::Name, Field::Phone]);

        let report = form("Ali", "123").validate();
        assert!(!report.has_error(Field::Name));
        assert!(report.has_error(Field::Phone));

        assert!(form("Ali", "01012345678").validate().is_valid());
    }

    #[test]
    fn english_message_skips_empty_optional_fields() {
        let message = form("Ali", "01012345678").compose_message(Lang::En);
        assert_eq!(
            message,
            "*New Quote Request*\n\nName: Ali\nPhone: 01012345678\n"
        );
    }

    #[test]
    fn arabic_message_uses_localized_service_label() {
        let request = ContactForm {
            name: "علي".into(),
            phone: "01012345678".into(),
            service: "led".into(),
            message: "  لافتة مضيئة  ".into(),
        };
        let message = request.compose_message(Lang::Ar);
        assert!(message.starts_with("*طلب عرض سعر جديد*\n\n"));
        assert!(message.contains("الخدمة: إضاءة LED\n"));
        assert!(message.ends_with("الرسالة: لافتة مضيئة\n"));
    }

    #[test]
    fn unknown_service_key_is_sent_verbatim() {
        let request = ContactForm {
            service: "neon".into(),
            ..form("Ali", "01012345678")
        };
        assert!(request.compose_message(Lang::En).contains("Service: neon\n"));
    }

    #[test]
    fn whatsapp_link_keeps_only_digits_and_encodes_text() {
        assert_eq!(
            whatsapp_link("+20 100-123-4567", Some("Hi there\n")),
            "https://wa.me/201001234567?text=Hi%20there%0A"
        );
        assert_eq!(whatsapp_link("+20 100", None), "https://wa.me/20100");
        assert_eq!(tel_link("+20 100 123"), "tel:+20100123");
    }

    #[test]
    fn validation_messages_follow_language() {
        assert_eq!(Field::Name.message(Lang::En), "Please enter your name");
        assert_eq!(Field::Phone.message(Lang::Ar), "يرجى إدخال رقم هاتف صحيح");
    }
}
