//! Locale conventions for date and number rendering.

use std::fmt;

/// Separators and default patterns for one locale.
///
/// Carries only the handful of conventions the formatter needs; this is
/// not a CLDR database. Unknown languages fall back to English
/// conventions while keeping the requested tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    group_sep: char,
    decimal_sep: char,
    date_pattern: &'static str,
}

impl Locale {
    /// Resolve a BCP 47-ish tag (`en`, `en-US`, `pt_BR`) to formatting
    /// conventions. Only the language subtag is considered.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        let (group_sep, decimal_sep, date_pattern) = match language.as_str() {
            "de" | "nl" => ('.', ',', "%d.%m.%Y %H:%M:%S"),
            "es" | "it" | "pt" => ('.', ',', "%d/%m/%Y %H:%M:%S"),
            "fr" => (' ', ',', "%d/%m/%Y %H:%M:%S"),
            _ => (',', '.', "%m/%d/%Y %H:%M:%S"),
        };
        Self {
            tag: tag.to_string(),
            group_sep,
            decimal_sep,
            date_pattern,
        }
    }

    /// The tag this locale was resolved from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Thousands separator.
    pub fn group_sep(&self) -> char {
        self.group_sep
    }

    /// Decimal separator.
    pub fn decimal_sep(&self) -> char {
        self.decimal_sep
    }

    /// Date pattern used when a format gives none.
    pub fn date_pattern(&self) -> &'static str {
        self.date_pattern
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from_tag("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
