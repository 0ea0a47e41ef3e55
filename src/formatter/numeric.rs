//! Number, decimal, percentage, compact and unit entry points

use crate::diagnostics::DiagnosticSink;
use crate::formatter::Formatters;
use crate::intl::IntlProvider;
use crate::intl::decimal::to_fixed;
use crate::normalize::{NumericInput, ensure_numeric_or_string, normalize_number};
use crate::options::{
    CompactOptions, DecimalOptions, NumberOptions, PercentageOptions, ResolvedNumber, UnitOptions,
};

impl<P: IntlProvider, S: DiagnosticSink> Formatters<P, S> {
    fn format_resolved(&self, input: &NumericInput, resolved: &ResolvedNumber) -> String {
        self.intl
            .number_format(&resolved.locale, &resolved.options)
            .format(normalize_number(input))
    }

    /// Format with the locale's default number options
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_number, NumberOptions};
    ///
    /// assert_eq!(format_number(1234567.891, &NumberOptions::new()), "1,234,567.891");
    /// assert_eq!(format_number(1234.5, &NumberOptions::new().with_locale("de-DE")), "1.234,5");
    /// ```
    pub fn format_number(&self, value: impl Into<NumericInput>, options: &NumberOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_number"));
        self.format_resolved(&input, &options.resolve())
    }

    /// Format with exactly `decimals` fraction digits (2 by default)
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_decimal, DecimalOptions};
    ///
    /// assert_eq!(format_decimal(1234.5, &DecimalOptions::new()), "1,234.50");
    /// assert_eq!(format_decimal(2, &DecimalOptions::new().with_decimals(3)), "2.000");
    /// ```
    pub fn format_decimal(&self, value: impl Into<NumericInput>, options: &DecimalOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_decimal"));
        self.format_resolved(&input, &options.resolve())
    }

    /// Format a ratio as a percentage
    ///
    /// The value is scaled by 100 and rendered with `toFixed` rounding and
    /// a literal `%`. No grouping or locale symbols are applied.
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_percentage, PercentageOptions};
    ///
    /// assert_eq!(format_percentage(0.1234, &PercentageOptions::new()), "12.34%");
    /// assert_eq!(format_percentage(0.037, &PercentageOptions::new().with_fraction_digits(1)), "3.7%");
    /// ```
    pub fn format_percentage(&self, value: impl Into<NumericInput>, options: &PercentageOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_percentage"));

        let scaled = normalize_number(input.to_number() * 100.0);
        format!("{}%", to_fixed(scaled, usize::from(options.resolve())))
    }

    /// Format in compact notation (`1K`, `2.5 million`)
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_compact_number, CompactDisplay, CompactOptions};
    ///
    /// assert_eq!(format_compact_number(1000, &CompactOptions::new()), "1K");
    /// assert_eq!(format_compact_number(1000, &CompactOptions::new().standard()), "1,000");
    /// assert_eq!(
    ///     format_compact_number(6500, &CompactOptions::new().with_compact_display(CompactDisplay::Long)),
    ///     "6.5 thousand"
    /// );
    /// ```
    pub fn format_compact_number(&self, value: impl Into<NumericInput>, options: &CompactOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_compact_number"));
        self.format_resolved(&input, &options.resolve())
    }

    /// Format a measurement (kilograms, short labels by default)
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_unit, Unit, UnitDisplay, UnitOptions};
    ///
    /// assert_eq!(format_unit(12, &UnitOptions::new()), "12 kg");
    /// assert_eq!(
    ///     format_unit(5, &UnitOptions::new().with_unit(Unit::Kilometer).with_unit_display(UnitDisplay::Long)),
    ///     "5 kilometers"
    /// );
    /// ```
    pub fn format_unit(&self, value: impl Into<NumericInput>, options: &UnitOptions) -> String {
        let input = value.into();
        self.report(ensure_numeric_or_string(&input, "format_unit"));
        self.format_resolved(&input, &options.resolve())
    }
}
