//! Value normalization
//!
//! Loosely-typed inputs are reduced to something the formatting primitive
//! can consume. Nothing here fails: numbers fall back to `0`, and the
//! `ensure_*` checks hand back an optional [`Diagnostic`] for the caller to
//! report.

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::{ParsedDate, parse_date_string, parse_numeric_string};

/// Largest distance from the epoch, in milliseconds, a timestamp may have
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// A value handed to a numeric entry point
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    /// Parsed with `Number()` string coercion rules
    Text(String),
    Bool(bool),
    /// No value at all; coerces to `NaN`
    Missing,
}

impl NumericInput {
    /// Coerce to a number; may return `NaN` or an infinity
    pub fn to_number(&self) -> f64 {
        match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => parse_numeric_string(s),
            NumericInput::Bool(true) => 1.0,
            NumericInput::Bool(false) => 0.0,
            NumericInput::Missing => f64::NAN,
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(n) => f.write_str(&display_number(*n)),
            NumericInput::Text(s) => f.write_str(s),
            NumericInput::Bool(b) => write!(f, "{b}"),
            NumericInput::Missing => f.write_str("undefined"),
        }
    }
}

macro_rules! numeric_input_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    NumericInput::Number(value as f64)
                }
            }
        )*
    };
}

numeric_input_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        NumericInput::Text(value.clone())
    }
}

impl From<bool> for NumericInput {
    fn from(value: bool) -> Self {
        NumericInput::Bool(value)
    }
}

impl From<&NumericInput> for NumericInput {
    fn from(value: &NumericInput) -> Self {
        value.clone()
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Missing, Into::into)
    }
}

/// Coerce to a finite number, substituting `0` for `NaN` and infinities
///
/// # Examples
/// ```
/// use locale_format::normalize_number;
///
/// assert_eq!(normalize_number("42.5"), 42.5);
/// assert_eq!(normalize_number("abc"), 0.0);
/// assert_eq!(normalize_number(f64::INFINITY), 0.0);
/// ```
pub fn normalize_number(input: impl Into<NumericInput>) -> f64 {
    let n = input.into().to_number();
    if n.is_finite() { n } else { 0.0 }
}

/// Flags values that do not coerce to a number
pub fn ensure_numeric_or_string(input: &NumericInput, context: &'static str) -> Option<Diagnostic> {
    if input.to_number().is_nan() {
        return Some(Diagnostic::new(
            context,
            DiagnosticKind::InvalidNumber,
            input.to_string(),
        ));
    }
    None
}

/// Flags anything that is not a genuine finite number, strings included
pub fn ensure_number(input: &NumericInput, context: &'static str) -> Option<Diagnostic> {
    match input {
        NumericInput::Number(n) if n.is_finite() => None,
        _ => Some(Diagnostic::new(
            context,
            DiagnosticKind::NotANumber,
            input.to_string(),
        )),
    }
}

/// Number rendering used in diagnostics (`NaN`, `Infinity`, `1500`, `0.5`)
pub(crate) fn display_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{n}")
    }
}

/// A value handed to the date/time entry point
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An instant; the original offset is irrelevant once converted
    Instant(DateTime<Utc>),
    /// Wall-clock time in the host zone
    Local(NaiveDateTime),
    /// Milliseconds since the Unix epoch
    Timestamp(f64),
    Text(String),
    Missing,
}

impl DateInput {
    /// Resolve to an instant, or the reason it cannot be one
    pub fn to_instant(&self) -> Result<DateTime<Utc>, DiagnosticKind> {
        match self {
            DateInput::Instant(dt) => Ok(*dt),
            DateInput::Local(naive) => local_to_utc(naive).ok_or(DiagnosticKind::InvalidDate),
            DateInput::Timestamp(ms) => timestamp_to_utc(*ms).ok_or(DiagnosticKind::InvalidDate),
            DateInput::Text(text) => match parse_date_string(text) {
                Some(ParsedDate::Utc(naive)) => Ok(naive.and_utc()),
                Some(ParsedDate::Offset(dt)) => Ok(dt.with_timezone(&Utc)),
                Some(ParsedDate::Local(naive)) => {
                    local_to_utc(&naive).ok_or(DiagnosticKind::InvalidDate)
                }
                None => Err(DiagnosticKind::InvalidDate),
            },
            DateInput::Missing => Err(DiagnosticKind::MissingDate),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::Local(naive) => write!(f, "{naive}"),
            DateInput::Timestamp(ms) => f.write_str(&display_number(*ms)),
            DateInput::Text(text) => f.write_str(text),
            DateInput::Missing => f.write_str("null"),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Instant(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Local(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value as f64)
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

/// Resolve a date input, describing the failure as a diagnostic
pub fn normalize_date(input: &DateInput, context: &'static str) -> Result<DateTime<Utc>, Diagnostic> {
    input
        .to_instant()
        .map_err(|kind| Diagnostic::new(context, kind, input.to_string()))
}

fn timestamp_to_utc(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_TIMESTAMP_MS {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

fn local_to_utc(naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    // A wall-clock time skipped by a DST jump moves forward past the gap
    Local
        .from_local_datetime(naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(*naive + Duration::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}
