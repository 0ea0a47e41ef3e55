//! Number formatting
//!
//! Decimal, currency, percent and unit styles in standard or compact
//! notation, driven by [`LocaleData`].

use std::sync::Arc;

use crate::intl::decimal::DecimalDigits;
use crate::intl::plural::{PluralCategory, PluralOperands};
use crate::locale::{CompactPattern, LocaleData, ResolvedLocale};
use crate::types::{
    Currency, CurrencyDisplay, MAX_FRACTION_DIGITS, Notation, NumberFormatOptions, NumberStyle,
    Unit, UnitDisplay,
};

/// How many digits survive rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rounding {
    Fraction { min: usize, max: usize },
    /// Compact default: whole numbers from two integer digits, otherwise
    /// two significant digits
    Compact,
}

/// A number formatter bound to one locale and option bag
///
/// Building one resolves the locale and fraction digits; formatting only
/// does digit work, so a single instance can be shared and reused.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    locale: Arc<ResolvedLocale>,
    options: NumberFormatOptions,
    rounding: Rounding,
}

/// The number part of an output, before style affixes and sign
struct RenderedNumber {
    text: String,
    category: PluralCategory,
}

impl NumberFormat {
    pub fn new(locale: Arc<ResolvedLocale>, options: &NumberFormatOptions) -> Self {
        Self {
            locale,
            options: *options,
            rounding: resolve_rounding(options),
        }
    }

    /// Tag of the locale data in use
    pub fn locale(&self) -> &str {
        &self.locale.tag
    }

    pub fn options(&self) -> &NumberFormatOptions {
        &self.options
    }

    /// Resolved `(minimum, maximum)` fraction digits; `None` under compact
    /// rounding
    pub fn fraction_digits(&self) -> Option<(usize, usize)> {
        match self.rounding {
            Rounding::Fraction { min, max } => Some((min, max)),
            Rounding::Compact => None,
        }
    }

    /// Format a number
    ///
    /// # Examples
    /// ```
    /// use locale_format::intl::{BuiltinIntl, IntlProvider};
    /// use locale_format::{Currency, CurrencyDisplay, NumberFormatOptions};
    ///
    /// let intl = BuiltinIntl::new();
    /// let usd = intl.number_format(
    ///     "en-US",
    ///     &NumberFormatOptions::currency(Currency::Usd, CurrencyDisplay::Symbol),
    /// );
    /// assert_eq!(usd.format(1500.0), "$1,500.00");
    /// assert_eq!(usd.format(-2.5), "-$2.50");
    /// ```
    pub fn format(&self, value: f64) -> String {
        self.format_with_category(value).0
    }

    /// Formatted output plus the plural category of the displayed number
    pub(crate) fn format_with_category(&self, value: f64) -> (String, PluralCategory) {
        let data = &self.locale.data;
        let negative = value.is_sign_negative() && !value.is_nan();

        let number = if value.is_nan() {
            RenderedNumber {
                text: data.nan().to_string(),
                category: PluralCategory::Other,
            }
        } else if value.is_infinite() {
            RenderedNumber {
                text: data.infinity().to_string(),
                category: PluralCategory::Other,
            }
        } else {
            let mut digits = DecimalDigits::from_f64(value);
            if self.options.style == NumberStyle::Percent {
                digits = digits.shifted(2);
            }
            match self.options.notation {
                Notation::Standard => self.render_standard(digits),
                Notation::Compact { display } => {
                    self.render_compact(digits, data.compact_patterns(display))
                }
            }
        };

        let category = number.category;
        let styled = self.apply_style(number);
        if negative {
            (format!("{}{}", data.minus(), styled), category)
        } else {
            (styled, category)
        }
    }

    fn render_standard(&self, mut digits: DecimalDigits) -> RenderedNumber {
        let min_fraction = match self.rounding {
            Rounding::Fraction { min, max } => {
                digits.round_fraction(max);
                min
            }
            Rounding::Compact => {
                round_compact(&mut digits);
                0
            }
        };
        self.render_digits(&digits, min_fraction, 1)
    }

    fn render_compact(&self, digits: DecimalDigits, patterns: &[CompactPattern]) -> RenderedNumber {
        let mut selected = select_compact(&digits, patterns);
        let mut scaled = self.round_scaled(&digits, selected);

        // Rounding can carry into the next magnitude (999 999 -> 1000K)
        let carried = scaled
            .magnitude()
            .map(|m| m + selected.map_or(0, |p| p.exponent));
        if let Some(magnitude) = carried {
            let reselected = select_compact_magnitude(magnitude, patterns);
            if reselected.map(|p| p.exponent) != selected.map(|p| p.exponent) {
                let unscaled = scaled.shifted(selected.map_or(0, |p| p.exponent));
                selected = reselected;
                scaled = self.round_scaled(&unscaled, selected);
            }
        }

        let min_fraction = match self.rounding {
            Rounding::Fraction { min, .. } => min,
            Rounding::Compact => 0,
        };
        let number = self.render_digits(&scaled, min_fraction, 2);

        match selected {
            Some(pattern) => {
                let forms = pattern.forms();
                RenderedNumber {
                    text: forms.get(number.category).replace("{0}", &number.text),
                    category: number.category,
                }
            }
            None => number,
        }
    }

    fn round_scaled(&self, digits: &DecimalDigits, pattern: Option<&CompactPattern>) -> DecimalDigits {
        let mut scaled = digits.clone().shifted(-pattern.map_or(0, |p| p.exponent));
        match self.rounding {
            Rounding::Fraction { max, .. } => scaled.round_fraction(max),
            Rounding::Compact => round_compact(&mut scaled),
        }
        scaled
    }

    /// Localized digits with grouping; `min_grouping` is the number of digits
    /// that must sit before the first separator
    fn render_digits(
        &self,
        digits: &DecimalDigits,
        min_fraction: usize,
        min_grouping: usize,
    ) -> RenderedNumber {
        let data = &self.locale.data;
        let integer = digits.integer_part();
        let fraction = digits.fraction_part(min_fraction);
        let category = data
            .plural_rule()
            .select(&PluralOperands::from_parts(&integer, &fraction));

        let mut text = if self.options.use_grouping {
            group_integer(&integer, data.group(), data.grouping(), min_grouping)
        } else {
            integer
        };
        if !fraction.is_empty() {
            text.push_str(data.decimal());
            text.push_str(&fraction);
        }

        RenderedNumber { text, category }
    }

    fn apply_style(&self, number: RenderedNumber) -> String {
        let data = &self.locale.data;
        match self.options.style {
            NumberStyle::Decimal => number.text,
            NumberStyle::Percent => data.percent_pattern().replace("{0}", &number.text),
            NumberStyle::Currency { currency, display } => {
                currency_affix(data, currency, display, &number)
            }
            NumberStyle::Unit { unit, display } => unit_affix(data, unit, display, &number),
        }
    }
}

fn resolve_rounding(options: &NumberFormatOptions) -> Rounding {
    let (min, max) = (options.minimum_fraction_digits, options.maximum_fraction_digits);

    if matches!(options.notation, Notation::Compact { .. }) && min.is_none() && max.is_none() {
        return Rounding::Compact;
    }

    let (default_min, default_max) = match options.style {
        NumberStyle::Decimal | NumberStyle::Unit { .. } => (0, 3),
        NumberStyle::Currency { currency, .. } => {
            let minor = currency.minor_units();
            (minor, minor)
        }
        NumberStyle::Percent => (0, 0),
    };

    let (min, max) = match (min, max) {
        (None, None) => (default_min, default_max),
        (Some(min), None) => (min, default_max.max(min)),
        (None, Some(max)) => (default_min.min(max), max),
        (Some(min), Some(max)) => (min, max.max(min)),
    };

    Rounding::Fraction {
        min: min.min(MAX_FRACTION_DIGITS) as usize,
        max: max.min(MAX_FRACTION_DIGITS) as usize,
    }
}

fn round_compact(digits: &mut DecimalDigits) {
    if digits.integer_digit_count() >= 2 {
        digits.round_fraction(0);
    } else {
        digits.round_significant(2);
    }
}

fn select_compact<'a>(
    digits: &DecimalDigits,
    patterns: &'a [CompactPattern],
) -> Option<&'a CompactPattern> {
    select_compact_magnitude(digits.magnitude()?, patterns)
}

/// Pattern with the largest exponent not above `magnitude`
fn select_compact_magnitude(magnitude: i32, patterns: &[CompactPattern]) -> Option<&CompactPattern> {
    patterns
        .iter()
        .filter(|p| p.exponent <= magnitude)
        .max_by_key(|p| p.exponent)
}

/// Insert group separators into ASCII integer digits
///
/// `primary` is the size of the rightmost group and `secondary` of every
/// group after it (3/3 in most locales, 3/2 for Indian grouping).
pub(crate) fn group_integer(
    digits: &str,
    separator: &str,
    (primary, secondary): (usize, usize),
    min_grouping: usize,
) -> String {
    if digits.len() < primary + min_grouping {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - primary);
    let mut groups = vec![tail];
    while head.len() > secondary {
        let (rest, group) = head.split_at(head.len() - secondary);
        groups.push(group);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    groups.join(separator)
}

fn currency_affix(
    data: &LocaleData,
    currency: Currency,
    display: CurrencyDisplay,
    number: &RenderedNumber,
) -> String {
    let names = data.currency(currency.code());

    if display == CurrencyDisplay::Name {
        let name = names
            .and_then(|n| match number.category {
                PluralCategory::One => n.one.as_deref().or(n.other.as_deref()),
                PluralCategory::Other => n.other.as_deref(),
            })
            .unwrap_or(currency.code());
        return data
            .currency_name_pattern()
            .replace("{0}", &number.text)
            .replace("{1}", name);
    }

    let symbol = match display {
        CurrencyDisplay::Symbol => names.and_then(|n| n.symbol.as_deref()),
        CurrencyDisplay::NarrowSymbol => names.and_then(|n| n.narrow.as_deref().or(n.symbol.as_deref())),
        CurrencyDisplay::Code | CurrencyDisplay::Name => None,
    }
    .unwrap_or(currency.code());

    let pattern = data.currency_pattern();
    // Letters never touch the digits: `NGN 1,500.00`, not `NGN1,500.00`
    let symbol_then_number = pattern.find("{1}") < pattern.find("{0}");
    let pattern = if symbol_then_number
        && pattern.contains("{1}{0}")
        && symbol.chars().last().is_some_and(char::is_alphabetic)
    {
        pattern.replace("{1}{0}", "{1}\u{a0}{0}")
    } else if !symbol_then_number
        && pattern.contains("{0}{1}")
        && symbol.chars().next().is_some_and(char::is_alphabetic)
    {
        pattern.replace("{0}{1}", "{0}\u{a0}{1}")
    } else {
        pattern.to_string()
    };

    pattern.replace("{0}", &number.text).replace("{1}", symbol)
}

fn unit_affix(data: &LocaleData, unit: Unit, display: UnitDisplay, number: &RenderedNumber) -> String {
    match data.unit_forms(unit, display) {
        Some(forms) => forms.get(number.category).replace("{0}", &number.text),
        None => format!("{} {}", number.text, unit.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::locale_data;
    use crate::types::CompactDisplay;

    fn fmt(locale: &str, options: NumberFormatOptions, value: f64) -> String {
        NumberFormat::new(locale_data(locale), &options).format(value)
    }

    #[test]
    fn test_group_integer() {
        assert_eq!(group_integer("1234567", ",", (3, 3), 1), "1,234,567");
        assert_eq!(group_integer("1234567", ",", (3, 2), 1), "12,34,567");
        assert_eq!(group_integer("999", ",", (3, 3), 1), "999");
        assert_eq!(group_integer("1234", ",", (3, 3), 2), "1234");
        assert_eq!(group_integer("12345", ",", (3, 3), 2), "12,345");
    }

    #[test]
    fn test_decimal_defaults() {
        let options = NumberFormatOptions::default();
        assert_eq!(fmt("en-US", options, 1000.0), "1,000");
        assert_eq!(fmt("en-US", options, 3.14159), "3.142");
        assert_eq!(fmt("en-US", options, -0.0), "-0");
        assert_eq!(fmt("de-DE", options, 1234.5), "1.234,5");
        assert_eq!(fmt("fr-FR", options, 1234.5), "1\u{202f}234,5");
        assert_eq!(fmt("hi-IN", options, 1234567.0), "12,34,567");
    }

    #[test]
    fn test_fraction_digit_resolution() {
        let exact = NumberFormatOptions::default().with_fraction_digits(2, 2);
        assert_eq!(fmt("en-US", exact, 1000.0), "1,000.00");
        assert_eq!(fmt("en-US", exact, 1.005), "1.01");

        let lone_min = NumberFormatOptions {
            minimum_fraction_digits: Some(5),
            ..NumberFormatOptions::default()
        };
        assert_eq!(fmt("en-US", lone_min, 1.5), "1.50000");

        let inverted = NumberFormatOptions::default().with_fraction_digits(3, 1);
        let format = NumberFormat::new(locale_data("en-US"), &inverted);
        assert_eq!(format.fraction_digits(), Some((3, 3)));
    }

    #[test]
    fn test_currency_displays() {
        let usd = |display| NumberFormatOptions::currency(Currency::Usd, display);
        assert_eq!(fmt("en-US", usd(CurrencyDisplay::Symbol), 1500.0), "$1,500.00");
        assert_eq!(fmt("en-US", usd(CurrencyDisplay::Code), 1500.0), "USD\u{a0}1,500.00");
        assert_eq!(fmt("en-US", usd(CurrencyDisplay::Name), 1.0), "1.00 US dollars");
        assert_eq!(fmt("en-US", usd(CurrencyDisplay::Symbol), f64::NAN), "$NaN");

        let jpy = NumberFormatOptions::currency(Currency::Jpy, CurrencyDisplay::Symbol);
        assert_eq!(fmt("ja-JP", jpy, 1500.0), "￥1,500");

        let eur = NumberFormatOptions::currency(Currency::Eur, CurrencyDisplay::Symbol);
        assert_eq!(fmt("de-DE", eur, 1299.99), "1.299,99\u{a0}€");
        assert_eq!(fmt("fr-FR", eur, -1500.0), "-1\u{202f}500,00\u{a0}€");

        let ngn = NumberFormatOptions::currency(Currency::Ngn, CurrencyDisplay::Symbol);
        assert_eq!(fmt("en-US", ngn, 1500.0), "NGN\u{a0}1,500.00");
        assert_eq!(fmt("en-NG", ngn, 1500.0), "₦1,500.00");

        let cad = |display| NumberFormatOptions::currency(Currency::Cad, display);
        assert_eq!(fmt("en-US", cad(CurrencyDisplay::Symbol), 5.0), "CA$5.00");
        assert_eq!(fmt("en-US", cad(CurrencyDisplay::NarrowSymbol), 5.0), "$5.00");
    }

    #[test]
    fn test_compact_short() {
        let compact = NumberFormatOptions::compact(CompactDisplay::Short);
        assert_eq!(fmt("en-US", compact, 1000.0), "1K");
        assert_eq!(fmt("en-US", compact, 2500.0), "2.5K");
        assert_eq!(fmt("en-US", compact, 12345.0), "12K");
        assert_eq!(fmt("en-US", compact, 999.0), "999");
        assert_eq!(fmt("en-US", compact, 1.234), "1.2");
        assert_eq!(fmt("en-US", compact, 999_999.0), "1M");
        assert_eq!(fmt("en-US", compact, 999.9), "1K");
        assert_eq!(fmt("en-US", compact, 1e9), "1B");
        assert_eq!(fmt("en-US", compact, 1e15), "1000T");
        assert_eq!(fmt("en-US", compact, -2500.0), "-2.5K");
    }

    #[test]
    fn test_compact_locales() {
        let short = NumberFormatOptions::compact(CompactDisplay::Short);
        let long = NumberFormatOptions::compact(CompactDisplay::Long);
        assert_eq!(fmt("en-US", long, 1000.0), "1 thousand");
        assert_eq!(fmt("ja-JP", short, 12345.0), "1.2万");
        assert_eq!(fmt("de-DE", short, 1234.0), "1234");
        assert_eq!(fmt("de-DE", short, 2_500_000.0), "2,5\u{a0}Mio.");
        assert_eq!(fmt("fr-FR", long, 1_000_000.0), "1 million");
        assert_eq!(fmt("fr-FR", long, 3_000_000.0), "3 millions");
        assert_eq!(fmt("en-IN", short, 150_000.0), "1.5L");
    }

    #[test]
    fn test_percent_and_units() {
        assert_eq!(fmt("en-US", NumberFormatOptions::percent(), 0.256), "26%");
        assert_eq!(fmt("fr-FR", NumberFormatOptions::percent(), 0.5), "50\u{a0}%");

        let kg = NumberFormatOptions::unit(Unit::Kilogram, UnitDisplay::Short);
        assert_eq!(fmt("en-US", kg, 12.0), "12 kg");
        let minutes = NumberFormatOptions::unit(Unit::Minute, UnitDisplay::Long);
        assert_eq!(fmt("en-US", minutes, 12.0), "12 minutes");
        assert_eq!(fmt("en-US", minutes, 1.0), "1 minute");
        let years = NumberFormatOptions::unit(Unit::Year, UnitDisplay::Short);
        assert_eq!(fmt("en-US", years, 12.0), "12 yrs");
        assert_eq!(fmt("en-US", years, 1.0), "1 yr");
        let narrow = NumberFormatOptions::unit(Unit::Kilogram, UnitDisplay::Narrow);
        assert_eq!(fmt("en-US", narrow, 5.0), "5kg");
        let metres = NumberFormatOptions::unit(Unit::Meter, UnitDisplay::Long);
        assert_eq!(fmt("en-GB", metres, 3.0), "3 metres");
    }
}
