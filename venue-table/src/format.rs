//! Cell formatting
//!
//! Every table cell goes through [`CELL_RULES`] top to bottom; the first rule
//! that claims the value produces the cell text.

use crate::config::{ClientConfig, DEFAULT_DATE_FORMAT, DisplayZone};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Number, Value};
use shared::{EVENT_DATE_KEY, FieldValue};
use std::fmt::Write;

/// Text for a value that is absent or `null`
pub const MISSING_TEXT: &str = "N/A";

/// Text for an event date that cannot be parsed
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// One formatting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    /// Truthy value under the event-date key: human-readable timestamp
    EventDate,
    /// Boolean: `Yes` / `No`
    Boolean,
    /// Absent or `null`: `N/A`
    Missing,
    /// Anything else: plain text form
    PlainText,
}

/// Rules in evaluation order
pub const CELL_RULES: [CellRule; 4] = [
    CellRule::EventDate,
    CellRule::Boolean,
    CellRule::Missing,
    CellRule::PlainText,
];

/// Naive date-time layouts, interpreted in the display zone
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Applies [`CELL_RULES`] to venue values
#[derive(Debug, Clone)]
pub struct CellFormatter {
    date_format: String,
    zone: DisplayZone,
}

impl CellFormatter {
    pub fn new(date_format: impl Into<String>, zone: DisplayZone) -> Self {
        Self {
            date_format: date_format.into(),
            zone,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.date_format.clone(), config.display_zone)
    }

    /// Text for the cell of column `key` holding `value`
    pub fn format(&self, key: &str, value: Option<&FieldValue>) -> String {
        CELL_RULES
            .iter()
            .find_map(|rule| self.apply(*rule, key, value))
            .unwrap_or_else(|| MISSING_TEXT.to_string())
    }

    /// Run a single rule; `None` means the rule does not claim the value
    pub fn apply(&self, rule: CellRule, key: &str, value: Option<&FieldValue>) -> Option<String> {
        match (rule, value) {
            (CellRule::EventDate, Some(v)) if key == EVENT_DATE_KEY && v.is_truthy() => {
                Some(match parse_timestamp(v, self.zone) {
                    Some(ts) => self.format_timestamp(ts),
                    None => INVALID_DATE_TEXT.to_string(),
                })
            }
            (CellRule::Boolean, Some(FieldValue::Bool(b))) => {
                Some(if *b { "Yes" } else { "No" }.to_string())
            }
            (CellRule::Missing, None) => Some(MISSING_TEXT.to_string()),
            (CellRule::PlainText, Some(v)) => Some(plain_text(v)),
            _ => None,
        }
    }

    /// Render a timestamp in the display zone
    pub fn format_timestamp(&self, ts: DateTime<Utc>) -> String {
        match self.zone {
            DisplayZone::Local => render(&ts.with_timezone(&Local), &self.date_format),
            DisplayZone::Fixed(offset) => render(&ts.with_timezone(&offset), &self.date_format),
        }
    }
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT, DisplayZone::Local)
    }
}

/// Format with `pattern`, falling back to RFC 3339 when the pattern is rejected
fn render<Tz: TimeZone>(ts: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", ts.format(pattern)).is_err() {
        return ts.to_rfc3339();
    }
    out
}

/// Parse an event-date value.
///
/// Text accepts RFC 3339, naive ISO date-times (read in `zone`) and bare
/// dates (UTC midnight). Numbers are milliseconds since the Unix epoch, and
/// booleans coerce to 0 or 1 ms. Arrays and objects are parsed from their
/// [`plain_text`] form.
pub fn parse_timestamp(value: &FieldValue, zone: DisplayZone) -> Option<DateTime<Utc>> {
    match value {
        FieldValue::Text(text) => parse_timestamp_text(text.trim(), zone),
        FieldValue::Number(n) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => {
                    let f = n.as_f64()?;
                    if !f.is_finite() {
                        return None;
                    }
                    f.trunc() as i64
                }
            };
            DateTime::from_timestamp_millis(millis)
        }
        FieldValue::Bool(b) => DateTime::from_timestamp_millis(i64::from(*b)),
        FieldValue::Other(_) => parse_timestamp_text(plain_text(value).trim(), zone),
    }
}

fn parse_timestamp_text(text: &str, zone: DisplayZone) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }

    for pattern in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return match zone {
                DisplayZone::Local => Local
                    .from_local_datetime(&naive)
                    .earliest()
                    .map(|ts| ts.with_timezone(&Utc)),
                DisplayZone::Fixed(offset) => offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|ts| ts.with_timezone(&Utc)),
            };
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Plain text form of a value.
///
/// Arrays join their elements with `,` (`null` elements are empty); objects
/// render as `[object Object]`.
pub fn plain_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => format_number(n),
        FieldValue::Other(v) => json_text(v),
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(json_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats print without a fraction (`4.0` -> `4`)
fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
