//! Value formatting for dates and numbers.
//!
//! [`ValueFormat`] describes what to render (a date or a number, with an
//! optional pattern) and [`ValueFormat::render`] maps a [`Value`] to a
//! string under a [`Locale`]. The locale is always passed explicitly;
//! there is no process-wide default to mutate or race on.
//!
//! Date patterns use `chrono` strftime syntax (`"%Y-%m-%d %H:%M:%S"`).
//! Number patterns use the compact `"0,0.00"` shape: a comma enables
//! thousands grouping and the digits after the dot set the decimal
//! places, with the locale supplying the actual separator characters.

mod locale;

pub use locale::Locale;

use std::fmt::{self, Write as _};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, ThreadlensError};

/// Number pattern applied when a format gives none: group thousands,
/// round to an integer.
const DEFAULT_NUMBER_PATTERN: &str = "0,0";

/// What a [`ValueFormat`] renders its input as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Render as a date-time.
    Date,
    /// Render as a number.
    Number,
}

/// A value accepted by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text; parsed on demand for date and number rendering.
    Text(String),
    /// An integer; epoch milliseconds when rendered as a date.
    Int(i64),
    /// A float; epoch milliseconds when rendered as a date.
    Float(f64),
    /// An instant.
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// True for the empty string and numeric zero. Blank values produce
    /// empty output under [`ValueFormat::blank_on_invalid`].
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Int(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Timestamp(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

/// Declarative description of how to render a value.
#[derive(Debug, Clone, Default)]
pub struct ValueFormat {
    kind: Option<FormatKind>,
    pattern: Option<String>,
    blank_on_invalid: bool,
}

impl ValueFormat {
    /// Render as a date-time.
    pub fn date() -> Self {
        Self {
            kind: Some(FormatKind::Date),
            ..Self::default()
        }
    }

    /// Render as a number.
    pub fn number() -> Self {
        Self {
            kind: Some(FormatKind::Number),
            ..Self::default()
        }
    }

    /// Render the value's plain string form, unformatted.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Set the pattern; syntax depends on the kind (see module docs).
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Produce empty output for blank values (empty text, numeric zero)
    /// and for the kind-less format, instead of attempting to render.
    pub fn blank_on_invalid(mut self) -> Self {
        self.blank_on_invalid = true;
        self
    }

    /// Render `value` under `locale`.
    ///
    /// The blank-on-invalid check short-circuits before any formatting
    /// attempt. Beyond that there is no recovery: values the underlying
    /// date or number machinery cannot interpret surface as errors.
    pub fn render(&self, value: &Value, locale: &Locale) -> Result<String> {
        if self.blank_on_invalid && (value.is_blank() || self.kind.is_none()) {
            return Ok(String::new());
        }
        match self.kind {
            Some(FormatKind::Date) => format_date(value, self.pattern.as_deref(), locale),
            Some(FormatKind::Number) => format_number(value, self.pattern.as_deref(), locale),
            None => Ok(value.to_string()),
        }
    }
}

fn format_date(value: &Value, pattern: Option<&str>, locale: &Locale) -> Result<String> {
    let instant = resolve_instant(value)?;
    let pattern = pattern.unwrap_or_else(|| locale.date_pattern());

    let mut rendered = String::new();
    write!(rendered, "{}", instant.format(pattern))
        .map_err(|_| ThreadlensError::invalid_date(format!("bad date pattern: {pattern}")))?;
    Ok(rendered)
}

fn resolve_instant(value: &Value) -> Result<DateTime<Utc>> {
    match value {
        Value::Timestamp(ts) => Ok(*ts),
        Value::Int(millis) => instant_from_millis(*millis),
        Value::Float(millis) => instant_from_millis(*millis as i64),
        Value::Text(text) => parse_instant(text),
    }
}

fn instant_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ThreadlensError::invalid_date(format!("timestamp out of range: {millis}")))
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")?;
    Ok(naive.and_utc())
}

fn format_number(value: &Value, pattern: Option<&str>, locale: &Locale) -> Result<String> {
    let n = match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Text(text) => text.trim().parse::<f64>()?,
        Value::Timestamp(ts) => ts.timestamp_millis() as f64,
    };
    let pattern = NumberPattern::parse(pattern.unwrap_or(DEFAULT_NUMBER_PATTERN));
    Ok(pattern.apply(n, locale))
}

/// Parsed `"0,0.00"`-shape number pattern.
#[derive(Debug, Clone, Copy)]
struct NumberPattern {
    grouped: bool,
    decimals: usize,
}

impl NumberPattern {
    fn parse(pattern: &str) -> Self {
        Self {
            grouped: pattern.contains(','),
            decimals: pattern.split('.').nth(1).map_or(0, str::len),
        }
    }

    fn apply(self, n: f64, locale: &Locale) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string();
        }

        let rendered = format!("{:.*}", self.decimals, n.abs());
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let is_zero = rendered.bytes().all(|b| b == b'0' || b == b'.');

        let mut out = String::new();
        if n < 0.0 && !is_zero {
            out.push('-');
        }
        if self.grouped {
            out.push_str(&group_digits(int_part, locale.group_sep()));
        } else {
            out.push_str(int_part);
        }
        if !frac_part.is_empty() {
            out.push(locale.decimal_sep());
            out.push_str(frac_part);
        }
        out
    }
}

/// Insert a separator every three digits.
fn group_digits(digits: &str, sep: char) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThreadlensError;

    fn en() -> Locale {
        Locale::from_tag("en")
    }

    #[test]
    fn blank_on_invalid_short_circuits_zero() {
        // 0 is blank, so nothing reaches the number machinery.
        let format = ValueFormat::number().blank_on_invalid();
        assert_eq!(format.render(&Value::Int(0), &en()).unwrap(), "");
        assert_eq!(format.render(&Value::Float(0.0), &en()).unwrap(), "");
    }

    #[test]
    fn blank_on_invalid_short_circuits_empty_text_and_missing_kind() {
        let format = ValueFormat::date().blank_on_invalid();
        assert_eq!(format.render(&Value::from(""), &en()).unwrap(), "");

        let kindless = ValueFormat::plain().blank_on_invalid();
        assert_eq!(kindless.render(&Value::from("text"), &en()).unwrap(), "");
    }

    #[test]
    fn zero_renders_without_the_guard() {
        let format = ValueFormat::number();
        assert_eq!(format.render(&Value::Int(0), &en()).unwrap(), "0");
    }

    #[test]
    fn kindless_format_yields_plain_string_form() {
        let format = ValueFormat::plain();
        assert_eq!(
            format.render(&Value::from("hello"), &en()).unwrap(),
            "hello"
        );
        assert_eq!(format.render(&Value::Int(42), &en()).unwrap(), "42");
        assert_eq!(format.render(&Value::Float(1.5), &en()).unwrap(), "1.5");
    }

    #[test]
    fn numbers_group_thousands_by_locale() {
        let format = ValueFormat::number();
        assert_eq!(
            format.render(&Value::Int(1_234_567), &en()).unwrap(),
            "1,234,567"
        );
        assert_eq!(
            format
                .render(&Value::Int(1_234_567), &Locale::from_tag("de"))
                .unwrap(),
            "1.234.567"
        );
    }

    #[test]
    fn number_pattern_sets_decimals_and_separators() {
        let format = ValueFormat::number().with_pattern("0,0.00");
        assert_eq!(
            format.render(&Value::Float(1234.5678), &en()).unwrap(),
            "1,234.57"
        );
        assert_eq!(
            format
                .render(&Value::Float(1234.5678), &Locale::from_tag("de"))
                .unwrap(),
            "1.234,57"
        );

        let ungrouped = ValueFormat::number().with_pattern("0.00");
        assert_eq!(
            ungrouped.render(&Value::Float(1234.5), &en()).unwrap(),
            "1234.50"
        );
    }

    #[test]
    fn default_number_pattern_rounds_to_integer() {
        let format = ValueFormat::number();
        assert_eq!(format.render(&Value::Float(1234.56), &en()).unwrap(), "1,235");
        assert_eq!(format.render(&Value::Int(-1), &en()).unwrap(), "-1");
    }

    #[test]
    fn negative_rounded_to_zero_drops_the_sign() {
        let format = ValueFormat::number();
        assert_eq!(format.render(&Value::Float(-0.4), &en()).unwrap(), "0");
    }

    #[test]
    fn non_finite_numbers_render_as_markers() {
        let format = ValueFormat::number();
        assert_eq!(format.render(&Value::Float(f64::NAN), &en()).unwrap(), "NaN");
        assert_eq!(
            format.render(&Value::Float(f64::INFINITY), &en()).unwrap(),
            "+Inf"
        );
        assert_eq!(
            format
                .render(&Value::Float(f64::NEG_INFINITY), &en())
                .unwrap(),
            "-Inf"
        );
    }

    #[test]
    fn numeric_text_parses_before_formatting() {
        let format = ValueFormat::number().with_pattern("0,0.0");
        assert_eq!(
            format.render(&Value::from(" 1234.5 "), &en()).unwrap(),
            "1,234.5"
        );
    }

    #[test]
    fn non_numeric_text_is_an_error() {
        let format = ValueFormat::number();
        let err = format.render(&Value::from("not a number"), &en()).unwrap_err();
        assert!(matches!(err, ThreadlensError::InvalidNumber(_)));
    }

    #[test]
    fn dates_use_the_locale_default_pattern() {
        let format = ValueFormat::date();
        assert_eq!(
            format.render(&Value::Int(0), &en()).unwrap(),
            "01/01/1970 00:00:00"
        );
        assert_eq!(
            format
                .render(&Value::Int(0), &Locale::from_tag("de"))
                .unwrap(),
            "01.01.1970 00:00:00"
        );
    }

    #[test]
    fn date_pattern_passes_through() {
        let format = ValueFormat::date().with_pattern("%Y-%m-%d");
        assert_eq!(format.render(&Value::Int(0), &en()).unwrap(), "1970-01-01");
    }

    #[test]
    fn textual_dates_parse_rfc3339_and_naive_forms() {
        let format = ValueFormat::date().with_pattern("%H:%M");
        assert_eq!(
            format
                .render(&Value::from("2026-08-07T12:30:00Z"), &en())
                .unwrap(),
            "12:30"
        );
        assert_eq!(
            format
                .render(&Value::from("2026-08-07 12:30:00"), &en())
                .unwrap(),
            "12:30"
        );
    }

    #[test]
    fn unparsable_date_text_is_an_error() {
        let format = ValueFormat::date();
        let err = format.render(&Value::from("not a date"), &en()).unwrap_err();
        assert!(matches!(err, ThreadlensError::InvalidDate(_)));
    }

    #[test]
    fn bad_date_pattern_is_an_error() {
        let format = ValueFormat::date().with_pattern("%Q");
        let err = format.render(&Value::Int(0), &en()).unwrap_err();
        assert!(matches!(err, ThreadlensError::InvalidDate(_)));
    }
}
