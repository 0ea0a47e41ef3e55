//! Date/time and relative time entry points

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::DiagnosticSink;
use crate::formatter::Formatters;
use crate::intl::IntlProvider;
use crate::normalize::{DateInput, NumericInput, ensure_number, normalize_date, normalize_number};
use crate::options::{DateTimeOptions, RelativeTimeOptions};

static LEADING_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^in\s+").expect("leading `in` pattern is valid"));
static TRAILING_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+ago$").expect("trailing `ago` pattern is valid"));

/// Drop the English direction words around a relative time phrase
fn strip_direction(formatted: &str) -> String {
    let text = LEADING_IN.replace(formatted, "");
    let text = TRAILING_AGO.replace(&text, "");
    text.replace('\u{a0}', " ").trim().to_string()
}

impl<P: IntlProvider, S: DiagnosticSink> Formatters<P, S> {
    /// Format a point in time
    ///
    /// Uses the `full` preset and `en-US` unless told otherwise. Missing or
    /// unparseable input yields an empty string and a diagnostic.
    ///
    /// # Arguments
    /// * `date` - A `chrono` date time, a millisecond timestamp, or a date
    ///   string
    /// * `options` - Locale plus a preset, preset name, or field bag
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_date_time, DateTimeFormatOptions, DateTimeOptions};
    ///
    /// let utc = DateTimeFormatOptions::default().with_time_zone("UTC");
    /// assert_eq!(
    ///     format_date_time("2025-07-15T08:05:09Z", &DateTimeOptions::new().with_format(utc)),
    ///     "7/15/2025"
    /// );
    /// assert_eq!(format_date_time(None::<&str>, &DateTimeOptions::new()), "");
    /// assert_eq!(format_date_time("abc", &DateTimeOptions::new()), "");
    /// ```
    pub fn format_date_time(&self, date: impl Into<DateInput>, options: &DateTimeOptions) -> String {
        let input = date.into();
        let instant = match normalize_date(&input, "format_date_time") {
            Ok(instant) => instant,
            Err(diagnostic) => {
                self.sink.report(diagnostic);
                return String::new();
            }
        };

        let resolved = options.resolve();
        self.intl
            .date_time_format(&resolved.locale, &resolved.options)
            .format(instant)
    }

    /// Format a signed offset in a time unit (`in 3 days`, `2 weeks ago`)
    ///
    /// Only genuine finite numbers pass the input check; anything else is
    /// reported, then coerced like any numeric input (non-finite becomes
    /// `0`). With `plain`, a leading `in ` and a trailing ` ago` are
    /// removed and no-break spaces become spaces.
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_relative_time, RelativeTimeOptions, RelativeTimeUnit};
    ///
    /// assert_eq!(format_relative_time(3, &RelativeTimeOptions::new()), "in 3 days");
    /// let weeks = RelativeTimeOptions::new()
    ///     .with_unit(RelativeTimeUnit::Week)
    ///     .with_plain(true);
    /// assert_eq!(format_relative_time(-2, &weeks), "2 weeks");
    /// ```
    pub fn format_relative_time(
        &self,
        value: impl Into<NumericInput>,
        options: &RelativeTimeOptions,
    ) -> String {
        let input = value.into();
        self.report(ensure_number(&input, "format_relative_time"));

        let resolved = options.resolve();
        let formatted = self
            .intl
            .relative_time_format(&resolved.locale, &resolved.options)
            .format(normalize_number(&input), resolved.unit);

        if resolved.plain {
            strip_direction(&formatted)
        } else {
            formatted
        }
    }
}
