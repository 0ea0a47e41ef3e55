//! Currency entry points and the reusable currency formatter

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::Result;
use crate::formatter::Formatters;
use crate::intl::{IntlProvider, NumberFormat};
use crate::normalize::{NumericInput, ensure_numeric_or_string, normalize_number};
use crate::options::CurrencyOptions;
use crate::types::{Currency, CurrencyDisplay, LocaleCurrencyPair, NumberFormatOptions};

impl<P: IntlProvider, S: DiagnosticSink> Formatters<P, S> {
    /// Format a monetary amount
    ///
    /// Defaults to `en-US` and `USD`. A locale given without a currency
    /// uses that locale's paired currency; an explicit pair is not checked.
    ///
    /// # Arguments
    /// * `value` - Number or numeric string; anything else formats as `0`
    /// * `options` - Currency, locale and display overrides
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_currency, Currency, CurrencyOptions};
    ///
    /// let usd = CurrencyOptions::new().with_currency(Currency::Usd);
    /// assert_eq!(format_currency(1500, &usd), "$1,500.00");
    /// assert_eq!(format_currency("12.5", &CurrencyOptions::new().with_locale("en-GB")), "£12.50");
    /// ```
    pub fn format_currency(&self, value: impl Into<NumericInput>, options: &CurrencyOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_currency"));

        let resolved = options.resolve();
        self.intl
            .number_format(&resolved.locale, &resolved.options)
            .format(normalize_number(&input))
    }

    /// Format a monetary amount for a locale/currency pair that is known to
    /// be consistent
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_currency_match, CurrencyDisplay, LocaleCurrencyPair};
    ///
    /// assert_eq!(
    ///     format_currency_match(3000, LocaleCurrencyPair::EnGbGbp, CurrencyDisplay::Symbol),
    ///     "£3,000.00"
    /// );
    /// ```
    pub fn format_currency_match(
        &self,
        value: impl Into<NumericInput>,
        pair: LocaleCurrencyPair,
        display: CurrencyDisplay,
    ) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_currency_match"));

        self.intl
            .number_format(
                pair.locale(),
                &NumberFormatOptions::currency(pair.currency(), display),
            )
            .format(normalize_number(&input))
    }

    /// Strict currency formatting for pairs only known at runtime
    ///
    /// # Returns
    /// * `Ok(String)` - The formatted amount
    /// * `Err(FormatError::StrictPairMismatch)` - The pair is not in the
    ///   pairing table; nothing is formatted
    ///
    /// # Examples
    /// ```
    /// use locale_format::{try_format_currency_match, Currency, CurrencyDisplay};
    ///
    /// assert!(try_format_currency_match(3000, "en-GB", Currency::Jpy, CurrencyDisplay::Symbol).is_err());
    /// ```
    pub fn try_format_currency_match(
        &self,
        value: impl Into<NumericInput>,
        locale: &str,
        currency: Currency,
        display: CurrencyDisplay,
    ) -> Result<String> {
        let pair = LocaleCurrencyPair::new(locale, currency)?;
        Ok(self.format_currency_match(value, pair, display))
    }

    /// Build a formatter bound to one currency and locale
    ///
    /// The number formatter is built here, once; every call on the returned
    /// value reuses it.
    ///
    /// # Examples
    /// ```
    /// use locale_format::{create_currency_formatter, Currency};
    ///
    /// let naira = create_currency_formatter(Currency::Ngn, "en-NG");
    /// assert_eq!(naira.format(2500), "₦2,500.00");
    /// assert_eq!(naira.format("abc"), "₦NaN");
    /// ```
    pub fn create_currency_formatter(&self, currency: Currency, locale: &str) -> CurrencyFormatter<S>
    where
        S: Clone,
    {
        let number = self.intl.number_format(
            locale,
            &NumberFormatOptions::currency(currency, CurrencyDisplay::Symbol),
        );
        CurrencyFormatter {
            currency,
            number,
            sink: self.sink.clone(),
        }
    }
}

/// Currency formatter with a fixed currency and locale
///
/// Unlike the other entry points, invalid input is not replaced by `0`:
/// `NaN` renders as the locale's NaN symbol in currency style.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter<S = TracingSink> {
    currency: Currency,
    number: NumberFormat,
    sink: S,
}

impl<S: DiagnosticSink> CurrencyFormatter<S> {
    pub fn format(&self, value: impl Into<NumericInput>) -> String {
        let input = value.into();
        self.sink_report(&input);
        self.number.format(input.to_number())
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Tag of the locale data the formatter was built with
    pub fn locale(&self) -> &str {
        self.number.locale()
    }

    fn sink_report(&self, input: &NumericInput) {
        if let Some(diagnostic) = ensure_numeric_or_string(input, "create_currency_formatter") {
            self.sink.report(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::error::FormatError;

    fn formatters() -> (Formatters<crate::intl::BuiltinIntl, CollectingSink>, CollectingSink) {
        let sink = CollectingSink::new();
        (Formatters::new().with_sink(sink.clone()), sink)
    }

    #[test]
    fn test_permissive_currency() {
        let (f, sink) = formatters();
        assert_eq!(f.format_currency(1500, &CurrencyOptions::new()), "$1,500.00");
        assert_eq!(
            f.format_currency(
                1500,
                &CurrencyOptions::new().with_locale("ja-JP")
            ),
            "￥1,500"
        );
        assert_eq!(
            f.format_currency(
                1500,
                &CurrencyOptions::new()
                    .with_locale("en-US")
                    .with_currency(Currency::Eur)
                    .with_currency_display(CurrencyDisplay::Code)
            ),
            "EUR\u{a0}1,500.00"
        );
        assert!(sink.is_empty());

        assert_eq!(f.format_currency(f64::NAN, &CurrencyOptions::new()), "$0.00");
        assert_eq!(sink.take().len(), 1);
        // Infinity is numeric: no diagnostic, but it still formats as 0
        assert_eq!(f.format_currency(f64::INFINITY, &CurrencyOptions::new()), "$0.00");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_strict_currency() {
        let (f, _) = formatters();
        assert_eq!(
            f.format_currency_match(3000, LocaleCurrencyPair::EnGbGbp, CurrencyDisplay::Symbol),
            "£3,000.00"
        );
        assert_eq!(
            f.try_format_currency_match(3000, "en_gb", Currency::Gbp, CurrencyDisplay::Symbol),
            Ok("£3,000.00".to_string())
        );
        assert_eq!(
            f.try_format_currency_match(3000, "en-GB", Currency::Jpy, CurrencyDisplay::Symbol),
            Err(FormatError::StrictPairMismatch {
                locale: "en-GB".to_string(),
                currency: "JPY".to_string(),
            })
        );
    }

    #[test]
    fn test_currency_formatter_keeps_nan() {
        let (f, sink) = formatters();
        let usd = f.create_currency_formatter(Currency::Usd, "en-US");
        assert_eq!(usd.format(42), "$42.00");
        assert_eq!(usd.format("1e3"), "$1,000.00");
        assert_eq!(usd.format("abc"), "$NaN");
        assert_eq!(usd.format(-5), "-$5.00");
        assert_eq!(usd.currency(), Currency::Usd);
        assert_eq!(usd.locale(), "en-US");

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].context, "create_currency_formatter");
        assert_eq!(diagnostics[0].input, "abc");
    }
}
