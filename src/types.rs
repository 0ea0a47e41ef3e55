//! Type definitions for locale formatting
//!
//! Option enums and option bags shared by the entry points and the locale
//! formatting primitive. Serialized names follow the Intl option vocabulary
//! (`"narrowSymbol"`, `"2-digit"`, `"kilometer-per-hour"`, ...) so option bags
//! can be loaded from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Locale used whenever a caller does not supply one
pub const DEFAULT_LOCALE: &str = "en-US";

/// ISO 4217 currencies supported by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Ngn,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Cny,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Ngn,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Cny,
        Currency::Inr,
    ];

    /// Three-letter ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ngn => "NGN",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
        }
    }

    /// Number of minor-unit digits shown by default
    pub fn minor_units(&self) -> u8 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| FormatError::UnknownCurrency(s.to_string()))
    }
}

/// How the currency is shown next to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    /// Localized symbol, e.g. `$` or `CA$`
    #[default]
    Symbol,
    /// Shortest symbol, e.g. `$` for CAD
    NarrowSymbol,
    /// ISO code, e.g. `USD`
    Code,
    /// Localized plural name, e.g. `US dollars`
    Name,
}

/// Closed set of (locale, currency) pairs accepted by strict formatting.
///
/// Every variant pairs a locale with the currency that locale uses by
/// default, so a mismatched pair cannot be constructed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCurrencyPair {
    EnUsUsd,
    EnGbGbp,
    EnNgNgn,
    FrFrEur,
    DeDeEur,
    JaJpJpy,
    EnCaCad,
    ZhCnCny,
    HiInInr,
    EnInInr,
}

impl LocaleCurrencyPair {
    /// Table order matters: the first pair listed for a locale supplies that
    /// locale's default currency.
    pub const ALL: [LocaleCurrencyPair; 10] = [
        LocaleCurrencyPair::EnUsUsd,
        LocaleCurrencyPair::EnGbGbp,
        LocaleCurrencyPair::EnNgNgn,
        LocaleCurrencyPair::FrFrEur,
        LocaleCurrencyPair::DeDeEur,
        LocaleCurrencyPair::JaJpJpy,
        LocaleCurrencyPair::EnCaCad,
        LocaleCurrencyPair::ZhCnCny,
        LocaleCurrencyPair::HiInInr,
        LocaleCurrencyPair::EnInInr,
    ];

    pub fn locale(&self) -> &'static str {
        match self {
            LocaleCurrencyPair::EnUsUsd => "en-US",
            LocaleCurrencyPair::EnGbGbp => "en-GB",
            LocaleCurrencyPair::EnNgNgn => "en-NG",
            LocaleCurrencyPair::FrFrEur => "fr-FR",
            LocaleCurrencyPair::DeDeEur => "de-DE",
            LocaleCurrencyPair::JaJpJpy => "ja-JP",
            LocaleCurrencyPair::EnCaCad => "en-CA",
            LocaleCurrencyPair::ZhCnCny => "zh-CN",
            LocaleCurrencyPair::HiInInr => "hi-IN",
            LocaleCurrencyPair::EnInInr => "en-IN",
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            LocaleCurrencyPair::EnUsUsd => Currency::Usd,
            LocaleCurrencyPair::EnGbGbp => Currency::Gbp,
            LocaleCurrencyPair::EnNgNgn => Currency::Ngn,
            LocaleCurrencyPair::FrFrEur | LocaleCurrencyPair::DeDeEur => Currency::Eur,
            LocaleCurrencyPair::JaJpJpy => Currency::Jpy,
            LocaleCurrencyPair::EnCaCad => Currency::Cad,
            LocaleCurrencyPair::ZhCnCny => Currency::Cny,
            LocaleCurrencyPair::HiInInr | LocaleCurrencyPair::EnInInr => Currency::Inr,
        }
    }

    /// Runtime membership check; rejects pairs outside the table instead of
    /// substituting a currency.
    pub fn new(locale: &str, currency: Currency) -> Result<Self, FormatError> {
        let tag = normalize_locale_tag(locale);
        Self::ALL
            .into_iter()
            .find(|pair| pair.locale() == tag && pair.currency() == currency)
            .ok_or_else(|| FormatError::StrictPairMismatch {
                locale: locale.to_string(),
                currency: currency.code().to_string(),
            })
    }

    /// First currency associated with `locale` in the pairing table
    pub fn default_currency_for(locale: &str) -> Option<Currency> {
        let tag = normalize_locale_tag(locale);
        Self::ALL
            .into_iter()
            .find(|pair| pair.locale() == tag)
            .map(|pair| pair.currency())
    }
}

/// Canonical spelling of a locale tag: `en_ca` and `EN-ca` become `en-CA`.
///
/// Only the casing and separator are touched; the tag is not validated.
pub fn normalize_locale_tag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_ascii_lowercase()
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                part.to_ascii_uppercase()
            } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase());
                first
                    .into_iter()
                    .chain(chars.map(|c| c.to_ascii_lowercase()))
                    .collect()
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Measurement units accepted by unit formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Celsius,
    Fahrenheit,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Stone,
    Milliliter,
    Liter,
    Gallon,
    FluidOunce,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Percent,
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
}

impl Unit {
    pub const ALL: [Unit; 36] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Kilometer,
        Unit::Inch,
        Unit::Foot,
        Unit::Yard,
        Unit::Mile,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Ounce,
        Unit::Pound,
        Unit::Stone,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Gallon,
        Unit::FluidOunce,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
        Unit::Percent,
        Unit::MeterPerSecond,
        Unit::KilometerPerHour,
        Unit::MilePerHour,
    ];

    /// Intl unit identifier, also the key used in locale data
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Byte => "byte",
            Unit::Kilobyte => "kilobyte",
            Unit::Megabyte => "megabyte",
            Unit::Gigabyte => "gigabyte",
            Unit::Terabyte => "terabyte",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Millimeter => "millimeter",
            Unit::Centimeter => "centimeter",
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Inch => "inch",
            Unit::Foot => "foot",
            Unit::Yard => "yard",
            Unit::Mile => "mile",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Ounce => "ounce",
            Unit::Pound => "pound",
            Unit::Stone => "stone",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Gallon => "gallon",
            Unit::FluidOunce => "fluid-ounce",
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
            Unit::Percent => "percent",
            Unit::MeterPerSecond => "meter-per-second",
            Unit::KilometerPerHour => "kilometer-per-hour",
            Unit::MilePerHour => "mile-per-hour",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Unit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Unit::ALL
            .into_iter()
            .find(|u| u.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| FormatError::UnknownUnit(s.to_string()))
    }
}

/// Width of the unit label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitDisplay {
    /// `12 kilograms`
    Long,
    /// `12 kg`
    #[default]
    Short,
    /// `12kg`
    Narrow,
}

/// Width of compact suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompactDisplay {
    /// `1K`
    #[default]
    Short,
    /// `1 thousand`
    Long,
}

/// Notation used by the number primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Standard,
    Compact { display: CompactDisplay },
}

/// Style of the number primitive; each variant carries only the fields
/// that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Currency {
        currency: Currency,
        display: CurrencyDisplay,
    },
    Percent,
    Unit {
        unit: Unit,
        display: UnitDisplay,
    },
}

/// Upper bound on fraction digits, as in ECMA-402
pub const MAX_FRACTION_DIGITS: u8 = 100;

/// Option bag for the number primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub style: NumberStyle,
    pub notation: Notation,
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            notation: Notation::Standard,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    pub fn currency(currency: Currency, display: CurrencyDisplay) -> Self {
        Self {
            style: NumberStyle::Currency { currency, display },
            ..Self::default()
        }
    }

    pub fn unit(unit: Unit, display: UnitDisplay) -> Self {
        Self {
            style: NumberStyle::Unit { unit, display },
            ..Self::default()
        }
    }

    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            ..Self::default()
        }
    }

    pub fn compact(display: CompactDisplay) -> Self {
        Self {
            notation: Notation::Compact { display },
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, minimum: u8, maximum: u8) -> Self {
        self.minimum_fraction_digits = Some(minimum);
        self.maximum_fraction_digits = Some(maximum);
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }
}

/// `numeric` / `2-digit` selector for year, day and time fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericWidth {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Month field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "narrow")]
    Narrow,
}

impl MonthStyle {
    pub fn is_textual(&self) -> bool {
        matches!(self, MonthStyle::Long | MonthStyle::Short | MonthStyle::Narrow)
    }
}

/// How the time zone is named in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeZoneNameStyle {
    /// `UTC`, `AEDT`, `GMT+5:30`
    Short,
    /// `Coordinated Universal Time`, `GMT+05:30`
    Long,
}

/// Flat option bag for date/time formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<NumericWidth>,
    /// `None` keeps the locale's preferred clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
    /// IANA identifier, `UTC`, or a fixed offset such as `+05:30`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<TimeZoneNameStyle>,
}

impl DateTimeFormatOptions {
    /// True when at least one calendar or clock field is requested
    pub fn has_fields(&self) -> bool {
        self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
    }

    pub fn with_time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }

    pub fn with_time_zone_name(mut self, style: TimeZoneNameStyle) -> Self {
        self.time_zone_name = Some(style);
        self
    }

    pub fn with_hour12(mut self, hour12: bool) -> Self {
        self.hour12 = Some(hour12);
        self
    }
}

/// Named shorthands for common date/time option bags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateTimePreset {
    Short,
    Long,
    DateOnly,
    TimeOnly,
    Full,
}

impl DateTimePreset {
    pub fn name(&self) -> &'static str {
        match self {
            DateTimePreset::Short => "short",
            DateTimePreset::Long => "long",
            DateTimePreset::DateOnly => "dateOnly",
            DateTimePreset::TimeOnly => "timeOnly",
            DateTimePreset::Full => "full",
        }
    }

    /// Lookup by preset name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        [
            DateTimePreset::Short,
            DateTimePreset::Long,
            DateTimePreset::DateOnly,
            DateTimePreset::TimeOnly,
            DateTimePreset::Full,
        ]
        .into_iter()
        .find(|p| p.name() == name)
    }
}

/// Either a preset or a literal option bag
///
/// Deserializes from a preset name (`"dateOnly"`) or an option table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateTimeSpec {
    Preset(DateTimePreset),
    /// Preset referenced by name; unknown names resolve to an empty bag
    Named(String),
    Options(DateTimeFormatOptions),
}

impl Default for DateTimeSpec {
    fn default() -> Self {
        DateTimeSpec::Preset(DateTimePreset::Full)
    }
}

impl From<DateTimePreset> for DateTimeSpec {
    fn from(preset: DateTimePreset) -> Self {
        DateTimeSpec::Preset(preset)
    }
}

impl From<DateTimeFormatOptions> for DateTimeSpec {
    fn from(options: DateTimeFormatOptions) -> Self {
        DateTimeSpec::Options(options)
    }
}

impl From<&str> for DateTimeSpec {
    fn from(name: &str) -> Self {
        DateTimeSpec::Named(name.to_string())
    }
}

impl From<String> for DateTimeSpec {
    fn from(name: String) -> Self {
        DateTimeSpec::Named(name)
    }
}

/// Units accepted by relative time formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeTimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl RelativeTimeUnit {
    pub const ALL: [RelativeTimeUnit; 8] = [
        RelativeTimeUnit::Second,
        RelativeTimeUnit::Minute,
        RelativeTimeUnit::Hour,
        RelativeTimeUnit::Day,
        RelativeTimeUnit::Week,
        RelativeTimeUnit::Month,
        RelativeTimeUnit::Quarter,
        RelativeTimeUnit::Year,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RelativeTimeUnit::Second => "second",
            RelativeTimeUnit::Minute => "minute",
            RelativeTimeUnit::Hour => "hour",
            RelativeTimeUnit::Day => "day",
            RelativeTimeUnit::Week => "week",
            RelativeTimeUnit::Month => "month",
            RelativeTimeUnit::Quarter => "quarter",
            RelativeTimeUnit::Year => "year",
        }
    }
}

impl FromStr for RelativeTimeUnit {
    type Err = FormatError;

    /// Accepts singular and plural spellings (`day`, `days`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);
        RelativeTimeUnit::ALL
            .into_iter()
            .find(|u| u.id() == singular)
            .ok_or_else(|| FormatError::UnknownRelativeTimeUnit(s.to_string()))
    }
}

/// `always` keeps numbers (`in 1 day`), `auto` allows phrases (`tomorrow`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeTimeNumeric {
    #[default]
    Always,
    Auto,
}

/// Width of relative time output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeTimeStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

/// Option bag for the relative time primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeTimeFormatOptions {
    pub numeric: RelativeTimeNumeric,
    pub style: RelativeTimeStyle,
}

/// `and` lists or `or` lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListType {
    #[default]
    Conjunction,
    Disjunction,
}

/// Width of list connectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

/// Option bag for the list primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFormatOptions {
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub style: ListStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_tag() {
        assert_eq!(normalize_locale_tag("en_CA"), "en-CA");
        assert_eq!(normalize_locale_tag("EN-us"), "en-US");
        assert_eq!(normalize_locale_tag("zh-hans-cn"), "zh-Hans-CN");
        assert_eq!(normalize_locale_tag(" fr "), "fr");
    }

    #[test]
    fn test_strict_pair_membership() {
        assert_eq!(
            LocaleCurrencyPair::new("en-GB", Currency::Gbp),
            Ok(LocaleCurrencyPair::EnGbGbp)
        );
        assert_eq!(
            LocaleCurrencyPair::new("en-GB", Currency::Jpy),
            Err(FormatError::StrictPairMismatch {
                locale: "en-GB".to_string(),
                currency: "JPY".to_string(),
            })
        );
    }

    #[test]
    fn test_every_strict_pair_round_trips() {
        for pair in LocaleCurrencyPair::ALL {
            assert_eq!(LocaleCurrencyPair::new(pair.locale(), pair.currency()), Ok(pair));
        }
    }

    #[test]
    fn test_relative_unit_accepts_plurals() {
        assert_eq!("weeks".parse::<RelativeTimeUnit>(), Ok(RelativeTimeUnit::Week));
        assert_eq!("Day".parse::<RelativeTimeUnit>(), Ok(RelativeTimeUnit::Day));
        assert!("fortnight".parse::<RelativeTimeUnit>().is_err());
    }

    #[test]
    fn test_unit_ids_parse_back() {
        for unit in Unit::ALL {
            assert_eq!(unit.id().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(DateTimePreset::from_name("dateOnly"), Some(DateTimePreset::DateOnly));
        assert_eq!(DateTimePreset::from_name("weekly"), None);
    }
}
