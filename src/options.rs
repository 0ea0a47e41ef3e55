//! Options resolution
//!
//! Every entry point takes an option bag whose fields are all optional.
//! Resolving a bag lays the caller's fields over the entry point's
//! defaults, one field at a time: a field that is set wins, an unset field
//! keeps the default. Bags are flat, so the result never depends on the
//! order fields were set in.
//!
//! Date/time bags additionally accept a preset name, looked up in a static
//! table before anything reaches the formatter.

use serde::Deserialize;

use crate::types::{
    CompactDisplay, Currency, CurrencyDisplay, DEFAULT_LOCALE, DateTimeFormatOptions,
    DateTimePreset, DateTimeSpec, ListFormatOptions, ListStyle, ListType, LocaleCurrencyPair,
    MAX_FRACTION_DIGITS, MonthStyle, Notation, NumberFormatOptions, NumberStyle, NumericWidth,
    RelativeTimeFormatOptions, RelativeTimeNumeric, RelativeTimeStyle, RelativeTimeUnit, Unit,
    UnitDisplay,
};

/// Fraction digits used by `format_decimal` when none are given
pub const DEFAULT_DECIMALS: u8 = 2;

/// Fraction digits used by `format_percentage` when none are given
pub const DEFAULT_PERCENT_FRACTION_DIGITS: u8 = 2;

fn resolve_locale(locale: &Option<String>) -> String {
    locale.clone().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// A locale plus the number primitive options to build for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNumber {
    pub locale: String,
    pub options: NumberFormatOptions,
}

/// Options for `format_currency`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyOptions {
    pub currency: Option<Currency>,
    pub locale: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
}

impl CurrencyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = Some(display);
        self
    }

    /// Resolve against `en-US` / `USD` / symbol
    ///
    /// A locale given without a currency takes the first currency paired
    /// with that locale. An explicit currency is passed through unchecked.
    ///
    /// # Examples
    /// ```
    /// use locale_format::{Currency, CurrencyOptions};
    ///
    /// let resolved = CurrencyOptions::new().with_locale("ja-JP").resolve();
    /// assert_eq!(resolved.locale, "ja-JP");
    /// assert_eq!(resolved.currency(), Some(Currency::Jpy));
    /// ```
    pub fn resolve(&self) -> ResolvedNumber {
        let currency = self.currency.unwrap_or_else(|| {
            self.locale
                .as_deref()
                .and_then(LocaleCurrencyPair::default_currency_for)
                .unwrap_or(Currency::Usd)
        });
        ResolvedNumber {
            locale: resolve_locale(&self.locale),
            options: NumberFormatOptions::currency(
                currency,
                self.currency_display.unwrap_or_default(),
            ),
        }
    }
}

impl ResolvedNumber {
    /// Currency of a currency-style resolution
    pub fn currency(&self) -> Option<Currency> {
        match self.options.style {
            NumberStyle::Currency { currency, .. } => Some(currency),
            _ => None,
        }
    }
}

/// Options for `format_percentage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PercentageOptions {
    pub fraction_digits: Option<u8>,
}

impl PercentageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    pub fn resolve(&self) -> u8 {
        self.fraction_digits.unwrap_or(DEFAULT_PERCENT_FRACTION_DIGITS)
    }
}

/// Options for `format_decimal`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecimalOptions {
    /// Fixed fraction width, at most [`MAX_FRACTION_DIGITS`]
    pub decimals: Option<u8>,
    pub locale: Option<String>,
}

impl DecimalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widths above [`MAX_FRACTION_DIGITS`] are capped to it
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals.min(MAX_FRACTION_DIGITS));
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Minimum and maximum fraction digits are both pinned to `decimals`
    pub fn resolve(&self) -> ResolvedNumber {
        let decimals = self
            .decimals
            .unwrap_or(DEFAULT_DECIMALS)
            .min(MAX_FRACTION_DIGITS);
        ResolvedNumber {
            locale: resolve_locale(&self.locale),
            options: NumberFormatOptions::default().with_fraction_digits(decimals, decimals),
        }
    }
}

/// Options for `format_number`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberOptions {
    pub locale: Option<String>,
}

impl NumberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn resolve(&self) -> ResolvedNumber {
        ResolvedNumber {
            locale: resolve_locale(&self.locale),
            options: NumberFormatOptions::default(),
        }
    }
}

/// Options for `format_compact_number`
///
/// The compact display width lives inside [`Notation::Compact`], so a
/// width can never be attached to standard notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactOptions {
    pub locale: Option<String>,
    pub notation: Option<Notation>,
}

impl CompactOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = Some(notation);
        self
    }

    /// Plain grouped digits instead of abbreviations
    pub fn standard(self) -> Self {
        self.with_notation(Notation::Standard)
    }

    /// Compact notation with the given suffix width
    pub fn with_compact_display(self, display: CompactDisplay) -> Self {
        self.with_notation(Notation::Compact { display })
    }

    pub fn resolve(&self) -> ResolvedNumber {
        let notation = self.notation.unwrap_or(Notation::Compact {
            display: CompactDisplay::Short,
        });
        ResolvedNumber {
            locale: resolve_locale(&self.locale),
            options: NumberFormatOptions {
                notation,
                ..NumberFormatOptions::default()
            },
        }
    }
}

/// Options for `format_unit`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitOptions {
    pub unit: Option<Unit>,
    pub unit_display: Option<UnitDisplay>,
    pub locale: Option<String>,
}

impl UnitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_unit_display(mut self, display: UnitDisplay) -> Self {
        self.unit_display = Some(display);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Resolve against kilogram / short / `en-US`
    pub fn resolve(&self) -> ResolvedNumber {
        ResolvedNumber {
            locale: resolve_locale(&self.locale),
            options: NumberFormatOptions::unit(
                self.unit.unwrap_or(Unit::Kilogram),
                self.unit_display.unwrap_or_default(),
            ),
        }
    }
}

/// Field bag a preset stands for
///
/// # Examples
/// ```
/// use locale_format::{preset_options, DateTimePreset, MonthStyle};
///
/// let bag = preset_options(DateTimePreset::DateOnly);
/// assert_eq!(bag.month, Some(MonthStyle::Short));
/// assert_eq!(bag.hour, None);
/// ```
pub fn preset_options(preset: DateTimePreset) -> DateTimeFormatOptions {
    use NumericWidth::{Numeric, TwoDigit};

    match preset {
        DateTimePreset::Short => DateTimeFormatOptions {
            year: Some(TwoDigit),
            month: Some(MonthStyle::TwoDigit),
            day: Some(TwoDigit),
            hour: Some(TwoDigit),
            minute: Some(TwoDigit),
            ..Default::default()
        },
        DateTimePreset::Long => DateTimeFormatOptions {
            year: Some(Numeric),
            month: Some(MonthStyle::Long),
            day: Some(Numeric),
            hour: Some(Numeric),
            minute: Some(Numeric),
            ..Default::default()
        },
        DateTimePreset::Full => DateTimeFormatOptions {
            second: Some(Numeric),
            hour12: Some(false),
            ..preset_options(DateTimePreset::Long)
        },
        DateTimePreset::DateOnly => DateTimeFormatOptions {
            year: Some(Numeric),
            month: Some(MonthStyle::Short),
            day: Some(Numeric),
            ..Default::default()
        },
        DateTimePreset::TimeOnly => DateTimeFormatOptions {
            hour: Some(Numeric),
            minute: Some(Numeric),
            second: Some(Numeric),
            ..Default::default()
        },
    }
}

/// A locale plus the date/time field bag to build for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDateTime {
    pub locale: String,
    pub options: DateTimeFormatOptions,
}

/// Options for `format_date_time`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeOptions {
    pub locale: Option<String>,
    /// Preset, preset name, or literal field bag; `full` when unset
    #[serde(alias = "options")]
    pub format: Option<DateTimeSpec>,
}

impl DateTimeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Accepts a [`DateTimePreset`], a preset name, or a
    /// [`DateTimeFormatOptions`] bag
    pub fn with_format(mut self, format: impl Into<DateTimeSpec>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Resolve the preset table; a literal bag is used as given and an
    /// unknown preset name yields an empty bag
    pub fn resolve(&self) -> ResolvedDateTime {
        let options = match self.format.clone().unwrap_or_default() {
            DateTimeSpec::Preset(preset) => preset_options(preset),
            DateTimeSpec::Named(name) => DateTimePreset::from_name(&name)
                .map(preset_options)
                .unwrap_or_else(|| {
                    tracing::debug!(preset = %name, "unknown date/time preset");
                    DateTimeFormatOptions::default()
                }),
            DateTimeSpec::Options(options) => options,
        };
        ResolvedDateTime {
            locale: resolve_locale(&self.locale),
            options,
        }
    }
}

/// Resolved relative time request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelativeTime {
    pub locale: String,
    pub unit: RelativeTimeUnit,
    pub plain: bool,
    pub options: RelativeTimeFormatOptions,
}

/// Options for `format_relative_time`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeTimeOptions {
    pub unit: Option<RelativeTimeUnit>,
    pub locale: Option<String>,
    /// Strip the direction words (`in`, `ago`) from the output
    pub plain: Option<bool>,
    pub numeric: Option<RelativeTimeNumeric>,
    pub style: Option<RelativeTimeStyle>,
}

impl RelativeTimeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: RelativeTimeUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = Some(plain);
        self
    }

    pub fn with_numeric(mut self, numeric: RelativeTimeNumeric) -> Self {
        self.numeric = Some(numeric);
        self
    }

    pub fn with_style(mut self, style: RelativeTimeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolve against day / `en-US` / not plain / always / long
    pub fn resolve(&self) -> ResolvedRelativeTime {
        ResolvedRelativeTime {
            locale: resolve_locale(&self.locale),
            unit: self.unit.unwrap_or(RelativeTimeUnit::Day),
            plain: self.plain.unwrap_or(false),
            options: RelativeTimeFormatOptions {
                numeric: self.numeric.unwrap_or_default(),
                style: self.style.unwrap_or_default(),
            },
        }
    }
}

/// A locale plus the list options to build for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedList {
    pub locale: String,
    pub options: ListFormatOptions,
}

/// Options for `format_list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOptions {
    pub locale: Option<String>,
    pub style: Option<ListStyle>,
    #[serde(rename = "type")]
    pub list_type: Option<ListType>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_style(mut self, style: ListStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_type(mut self, list_type: ListType) -> Self {
        self.list_type = Some(list_type);
        self
    }

    /// Resolve against `en-US` / long / conjunction
    pub fn resolve(&self) -> ResolvedList {
        ResolvedList {
            locale: resolve_locale(&self.locale),
            options: ListFormatOptions {
                list_type: self.list_type.unwrap_or_default(),
                style: self.style.unwrap_or_default(),
            },
        }
    }
}
