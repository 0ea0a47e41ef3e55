//! Formatting entry points
//!
//! Each entry point runs the same pipeline: check the raw input and report
//! anything suspicious, normalize it, resolve the option bag, then hand the
//! value to a formatter built by the [`IntlProvider`]. Invalid input never
//! fails the call; it degrades to `0` or an empty string.
//!
//! The entry points are methods on [`Formatters`], which binds a provider
//! and a [`DiagnosticSink`]. The free functions of the same names use a
//! process-wide default instance that logs through `tracing`.

mod currency;
mod datetime;
mod list;
mod numeric;

use std::sync::OnceLock;

pub use currency::CurrencyFormatter;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::Result;
use crate::intl::{BuiltinIntl, IntlProvider};
use crate::normalize::{DateInput, NumericInput};
use crate::options::{
    CompactOptions, CurrencyOptions, DateTimeOptions, DecimalOptions, ListOptions, NumberOptions,
    PercentageOptions, RelativeTimeOptions, UnitOptions,
};
use crate::types::{Currency, CurrencyDisplay, LocaleCurrencyPair};

// Global default instance
static DEFAULT_FORMATTERS: OnceLock<Formatters> = OnceLock::new();

/// A locale formatting provider paired with a diagnostics destination
///
/// # Examples
/// ```
/// use locale_format::{CollectingSink, CurrencyOptions, Formatters};
///
/// let sink = CollectingSink::new();
/// let formatters = Formatters::new().with_sink(sink.clone());
///
/// assert_eq!(formatters.format_currency("abc", &CurrencyOptions::new()), "$0.00");
/// assert_eq!(sink.diagnostics()[0].context, "format_currency");
/// ```
#[derive(Debug, Clone)]
pub struct Formatters<P = BuiltinIntl, S = TracingSink> {
    intl: P,
    sink: S,
}

impl Formatters {
    /// Built-in locale data, diagnostics logged through `tracing`
    pub fn new() -> Self {
        Self::with_parts(BuiltinIntl::new(), TracingSink)
    }

    /// Shared default instance used by the free functions
    pub fn global() -> &'static Formatters {
        DEFAULT_FORMATTERS.get_or_init(Formatters::new)
    }
}

impl Default for Formatters {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: IntlProvider, S: DiagnosticSink> Formatters<P, S> {
    pub fn with_parts(intl: P, sink: S) -> Self {
        Self { intl, sink }
    }

    /// Same provider, different diagnostics destination
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> Formatters<P, T> {
        Formatters {
            intl: self.intl,
            sink,
        }
    }

    pub fn intl(&self) -> &P {
        &self.intl
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn report(&self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.sink.report(diagnostic);
        }
    }
}

/// Format a monetary amount; see [`Formatters::format_currency`]
pub fn format_currency(value: impl Into<NumericInput>, options: &CurrencyOptions) -> String {
    Formatters::global().format_currency(value, options)
}

/// Format a monetary amount for a pair from the strict pairing table; see
/// [`Formatters::format_currency_match`]
pub fn format_currency_match(
    value: impl Into<NumericInput>,
    pair: LocaleCurrencyPair,
    display: CurrencyDisplay,
) -> String {
    Formatters::global().format_currency_match(value, pair, display)
}

/// Strict currency formatting with a runtime pairing check; see
/// [`Formatters::try_format_currency_match`]
pub fn try_format_currency_match(
    value: impl Into<NumericInput>,
    locale: &str,
    currency: Currency,
    display: CurrencyDisplay,
) -> Result<String> {
    Formatters::global().try_format_currency_match(value, locale, currency, display)
}

/// Build a reusable currency formatter; see
/// [`Formatters::create_currency_formatter`]
pub fn create_currency_formatter(currency: Currency, locale: &str) -> CurrencyFormatter {
    Formatters::global().create_currency_formatter(currency, locale)
}

/// Format with the locale's default number options; see
/// [`Formatters::format_number`]
pub fn format_number(value: impl Into<NumericInput>, options: &NumberOptions) -> String {
    Formatters::global().format_number(value, options)
}

/// Format with a fixed number of fraction digits; see
/// [`Formatters::format_decimal`]
pub fn format_decimal(value: impl Into<NumericInput>, options: &DecimalOptions) -> String {
    Formatters::global().format_decimal(value, options)
}

/// Format a ratio as a percentage; see [`Formatters::format_percentage`]
pub fn format_percentage(value: impl Into<NumericInput>, options: &PercentageOptions) -> String {
    Formatters::global().format_percentage(value, options)
}

/// Format in compact notation; see [`Formatters::format_compact_number`]
pub fn format_compact_number(value: impl Into<NumericInput>, options: &CompactOptions) -> String {
    Formatters::global().format_compact_number(value, options)
}

/// Format a measurement; see [`Formatters::format_unit`]
pub fn format_unit(value: impl Into<NumericInput>, options: &UnitOptions) -> String {
    Formatters::global().format_unit(value, options)
}

/// Format a point in time; see [`Formatters::format_date_time`]
pub fn format_date_time(date: impl Into<DateInput>, options: &DateTimeOptions) -> String {
    Formatters::global().format_date_time(date, options)
}

/// Format a signed time offset; see [`Formatters::format_relative_time`]
pub fn format_relative_time(value: impl Into<NumericInput>, options: &RelativeTimeOptions) -> String {
    Formatters::global().format_relative_time(value, options)
}

/// Join items into a sentence; see [`Formatters::format_list`]
pub fn format_list<T: AsRef<str>>(items: &[T], options: &ListOptions) -> String {
    Formatters::global().format_list(items, options)
}
