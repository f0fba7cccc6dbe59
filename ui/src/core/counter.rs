//! Count-up animation for statistic numbers.
//!
//! A counter starts at zero and eases out (cubic) to the value written in the
//! element. Intermediate frames are formatted for the active language; the
//! last frame restores the authored text exactly, so `"1,250"` or `"15+"`
//! always end up as written whatever the frame timing was.

use crate::core::language::Lang;

const ARABIC_INDIC_ZERO: u32 = 0x0660;
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

/// Number embedded in a stat text, with whatever surrounds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub prefix: String,
    pub value: u64,
    pub suffix: String,
    pub authored: String,
}

impl CounterTarget {
    /// Parse `"1,250"`, `"15+"`, `"+500"` or Arabic-Indic digits. `None` when
    /// the text holds no digits (such text is left as is).
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let start = trimmed.find(|c: char| ascii_digit(c).is_some())?;
        let (prefix, rest) = trimmed.split_at(start);

        let mut value: u64 = 0;
        let mut end = rest.len();
        for (index, c) in rest.char_indices() {
            if let Some(digit) = ascii_digit(c) {
                value = value.saturating_mul(10).saturating_add(u64::from(digit));
            } else if !is_group_separator(c) {
                end = index;
                break;
            }
        }

        Some(Self {
            prefix: prefix.to_string(),
            value,
            suffix: rest[end..].to_string(),
            authored: text.to_string(),
        })
    }
}

fn ascii_digit(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| {
        let code = c as u32;
        (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10)
            .contains(&code)
            .then(|| code - ARABIC_INDIC_ZERO)
    })
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ',' | '\u{066C}' | '\u{00A0}' | '\u{202F}')
}

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Thousands-grouped number in the active language's numbering system.
pub fn format_number(value: u64, lang: Lang) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(match lang {
                Lang::Ar => ARABIC_THOUSANDS_SEPARATOR,
                Lang::En => ',',
            });
        }
        grouped.push(match lang {
            Lang::Ar => localize_digit(digit),
            Lang::En => digit,
        });
    }
    grouped
}

fn localize_digit(digit: char) -> char {
    digit
        .to_digit(10)
        .and_then(|d| char::from_u32(ARABIC_INDIC_ZERO + d))
        .unwrap_or(digit)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Text to display `elapsed_ms` after the animation started.
    pub fn frame(&self, elapsed_ms: f64, lang: Lang) -> String {
        if self.is_finished(elapsed_ms) {
            return self.target.authored.clone();
        }
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        let current = (self.target.value as f64 * eased).floor() as u64;
        format!(
            "{}{}{}",
            self.target.prefix,
            format_number(current, lang),
            self.target.suffix
        )
    }
}
