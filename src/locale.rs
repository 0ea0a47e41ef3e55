//! Locale data
//!
//! Number symbols, currency and unit names, date patterns, relative time
//! phrases and list patterns are loaded from embedded TOML. Every locale is
//! a stack of layers: `base`, then the language (`en`), then an optional
//! explicit `parent` (`en-AU` inherits `en-GB`), then the tag itself. A
//! field set in a more specific layer wins; keyed tables such as
//! `currencies` or `units` merge entry by entry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use serde::Deserialize;

use crate::error::{FormatError, Result};
use crate::intl::plural::{PluralForms, PluralRule};
use crate::types::{
    CompactDisplay, DEFAULT_LOCALE, ListStyle, ListType, MonthStyle, RelativeTimeStyle,
    RelativeTimeUnit, Unit, UnitDisplay, normalize_locale_tag,
};

const EMBEDDED_LOCALES: &str = include_str!("locale/locales.toml");

/// Layers deeper than this are treated as a parent cycle
const MAX_LINEAGE: usize = 8;

/// Overlay a more specific layer on top of an inherited one
trait Layer {
    fn layer(&mut self, over: Self);
}

macro_rules! layer_options {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl Layer for $ty {
            fn layer(&mut self, over: Self) {
                $(
                    if over.$field.is_some() {
                        self.$field = over.$field;
                    }
                )*
            }
        }
    };
}

impl Layer for String {
    fn layer(&mut self, over: Self) {
        *self = over;
    }
}

impl<V: Layer> Layer for HashMap<String, V> {
    fn layer(&mut self, over: Self) {
        for (key, value) in over {
            match self.entry(key) {
                Entry::Occupied(mut entry) => entry.get_mut().layer(value),
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
    }
}

/// Digit separators and special values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NumberSymbols {
    pub decimal: Option<String>,
    pub group: Option<String>,
    pub minus: Option<String>,
    pub nan: Option<String>,
    pub infinity: Option<String>,
    /// Digits in the group closest to the decimal separator
    pub primary_group: Option<usize>,
    /// Digits in every further group
    pub secondary_group: Option<usize>,
}

layer_options!(NumberSymbols {
    decimal,
    group,
    minus,
    nan,
    infinity,
    primary_group,
    secondary_group,
});

/// Placement patterns: `{0}` is the number, `{1}` the symbol or name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NumberPatterns {
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    pub percent: Option<String>,
}

layer_options!(NumberPatterns {
    currency,
    currency_name,
    percent,
});

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencyNames {
    pub symbol: Option<String>,
    pub narrow: Option<String>,
    pub one: Option<String>,
    pub other: Option<String>,
}

layer_options!(CurrencyNames {
    symbol,
    narrow,
    one,
    other,
});

/// Compact pattern used from `10^exponent` up to the next entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompactPattern {
    pub exponent: i32,
    #[serde(default)]
    pub one: Option<String>,
    pub other: String,
}

impl CompactPattern {
    pub fn forms(&self) -> PluralForms {
        PluralForms {
            one: self.one.clone(),
            other: self.other.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompactPatterns {
    pub short: Option<Vec<CompactPattern>>,
    pub long: Option<Vec<CompactPattern>>,
}

layer_options!(CompactPatterns { short, long });

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UnitPatterns {
    pub long: Option<PluralForms>,
    pub short: Option<PluralForms>,
    pub narrow: Option<PluralForms>,
}

layer_options!(UnitPatterns {
    long,
    short,
    narrow,
});

/// Calendar names and date/time glue
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateSymbols {
    pub months_long: Option<Vec<String>>,
    pub months_short: Option<Vec<String>>,
    pub months_narrow: Option<Vec<String>>,
    pub am: Option<String>,
    pub pm: Option<String>,
    /// Whether the locale prefers a 12-hour clock
    pub hour12: Option<bool>,
    /// Joins date `{1}` and time `{0}` when the month is spelled out
    pub glue_long: Option<String>,
    /// Joins date and time when the month is abbreviated
    pub glue_medium: Option<String>,
    /// Joins date and time otherwise, and a time zone name onto a date
    pub glue_short: Option<String>,
    pub gmt_format: Option<String>,
    pub gmt_zero: Option<String>,
    pub utc_short: Option<String>,
    pub utc_long: Option<String>,
}

layer_options!(DateSymbols {
    months_long,
    months_short,
    months_narrow,
    am,
    pm,
    hour12,
    glue_long,
    glue_medium,
    glue_short,
    gmt_format,
    gmt_zero,
    utc_short,
    utc_long,
});

/// Future/past patterns of one relative time unit at one width
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelativePatterns {
    pub future: PluralForms,
    pub past: PluralForms,
    /// Phrases for whole offsets such as `-1` → `yesterday`
    #[serde(default)]
    pub phrases: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelativeUnitPatterns {
    pub long: Option<RelativePatterns>,
    pub short: Option<RelativePatterns>,
    pub narrow: Option<RelativePatterns>,
}

impl RelativeUnitPatterns {
    fn is_empty(&self) -> bool {
        self.long.is_none() && self.short.is_none() && self.narrow.is_none()
    }
}

// A layer that defines any width replaces the inherited widths entirely,
// so a language never picks up another language's abbreviations.
impl Layer for RelativeUnitPatterns {
    fn layer(&mut self, over: Self) {
        if !over.is_empty() {
            *self = over;
        }
    }
}

/// CLDR list patterns: `{0}` and `{1}` are the accumulated head and the
/// next item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPatterns {
    pub start: String,
    pub middle: String,
    pub end: String,
    pub pair: String,
}

impl Default for ListPatterns {
    fn default() -> Self {
        Self {
            start: "{0}, {1}".to_string(),
            middle: "{0}, {1}".to_string(),
            end: "{0}, {1}".to_string(),
            pair: "{0}, {1}".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListWidths {
    pub long: Option<ListPatterns>,
    pub short: Option<ListPatterns>,
    pub narrow: Option<ListPatterns>,
}

impl Layer for ListWidths {
    fn layer(&mut self, over: Self) {
        if over.long.is_some() || over.short.is_some() || over.narrow.is_some() {
            *self = over;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListPatternSet {
    pub conjunction: ListWidths,
    pub disjunction: ListWidths,
}

impl Layer for ListPatternSet {
    fn layer(&mut self, over: Self) {
        self.conjunction.layer(over.conjunction);
        self.disjunction.layer(over.disjunction);
    }
}

/// All data for one locale layer, or the merged result of a lineage
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocaleData {
    pub parent: Option<String>,
    pub plural: Option<PluralRule>,
    pub number: NumberSymbols,
    pub patterns: NumberPatterns,
    pub currencies: HashMap<String, CurrencyNames>,
    pub compact: CompactPatterns,
    pub units: HashMap<String, UnitPatterns>,
    pub dates: DateSymbols,
    /// Date patterns keyed by skeleton (`yMMMd`)
    pub date_formats: HashMap<String, String>,
    /// Time patterns keyed by skeleton (`hms`, `Hm`)
    pub time_formats: HashMap<String, String>,
    pub relative: HashMap<String, RelativeUnitPatterns>,
    pub lists: ListPatternSet,
}

impl Layer for LocaleData {
    fn layer(&mut self, over: Self) {
        if over.parent.is_some() {
            self.parent = over.parent;
        }
        if over.plural.is_some() {
            self.plural = over.plural;
        }
        self.number.layer(over.number);
        self.patterns.layer(over.patterns);
        self.currencies.layer(over.currencies);
        self.compact.layer(over.compact);
        self.units.layer(over.units);
        self.dates.layer(over.dates);
        self.date_formats.layer(over.date_formats);
        self.time_formats.layer(over.time_formats);
        self.relative.layer(over.relative);
        self.lists.layer(over.lists);
    }
}

impl LocaleData {
    pub fn plural_rule(&self) -> PluralRule {
        self.plural.unwrap_or_default()
    }

    pub fn decimal(&self) -> &str {
        self.number.decimal.as_deref().unwrap_or(".")
    }

    pub fn group(&self) -> &str {
        self.number.group.as_deref().unwrap_or(",")
    }

    pub fn minus(&self) -> &str {
        self.number.minus.as_deref().unwrap_or("-")
    }

    pub fn nan(&self) -> &str {
        self.number.nan.as_deref().unwrap_or("NaN")
    }

    pub fn infinity(&self) -> &str {
        self.number.infinity.as_deref().unwrap_or("∞")
    }

    /// Primary and secondary grouping sizes
    pub fn grouping(&self) -> (usize, usize) {
        let primary = self.number.primary_group.unwrap_or(3).max(1);
        let secondary = self.number.secondary_group.unwrap_or(primary).max(1);
        (primary, secondary)
    }

    pub fn currency_pattern(&self) -> &str {
        self.patterns.currency.as_deref().unwrap_or("{1}{0}")
    }

    pub fn currency_name_pattern(&self) -> &str {
        self.patterns.currency_name.as_deref().unwrap_or("{0} {1}")
    }

    pub fn percent_pattern(&self) -> &str {
        self.patterns.percent.as_deref().unwrap_or("{0}%")
    }

    pub fn currency(&self, code: &str) -> Option<&CurrencyNames> {
        self.currencies.get(code)
    }

    /// Compact patterns ordered by exponent
    pub fn compact_patterns(&self, display: CompactDisplay) -> &[CompactPattern] {
        let patterns = match display {
            CompactDisplay::Short => self.compact.short.as_ref(),
            CompactDisplay::Long => self.compact.long.as_ref().or(self.compact.short.as_ref()),
        };
        patterns.map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unit patterns at the requested width, falling back to wider forms
    pub fn unit_forms(&self, unit: Unit, display: UnitDisplay) -> Option<&PluralForms> {
        let patterns = self.units.get(unit.id())?;
        let preferred = match display {
            UnitDisplay::Narrow => patterns.narrow.as_ref().or(patterns.short.as_ref()),
            UnitDisplay::Short => patterns.short.as_ref(),
            UnitDisplay::Long => patterns.long.as_ref(),
        };
        preferred
            .or(patterns.short.as_ref())
            .or(patterns.long.as_ref())
    }

    /// Month names for a textual month style
    pub fn month_names(&self, style: MonthStyle) -> Option<&[String]> {
        let names = match style {
            MonthStyle::Long => self.dates.months_long.as_ref(),
            MonthStyle::Short => self.dates.months_short.as_ref(),
            MonthStyle::Narrow => self.dates.months_narrow.as_ref(),
            MonthStyle::Numeric | MonthStyle::TwoDigit => None,
        };
        names.filter(|names| names.len() == 12).map(Vec::as_slice)
    }

    pub fn am(&self) -> &str {
        self.dates.am.as_deref().unwrap_or("AM")
    }

    pub fn pm(&self) -> &str {
        self.dates.pm.as_deref().unwrap_or("PM")
    }

    pub fn hour12(&self) -> bool {
        self.dates.hour12.unwrap_or(true)
    }

    /// Glue pattern for a date whose month has the given style
    pub fn date_time_glue(&self, month: Option<MonthStyle>) -> &str {
        let short = self.dates.glue_short.as_deref().unwrap_or("{1}, {0}");
        match month {
            Some(MonthStyle::Long) => self.dates.glue_long.as_deref().unwrap_or(short),
            Some(MonthStyle::Short | MonthStyle::Narrow) => {
                self.dates.glue_medium.as_deref().unwrap_or(short)
            }
            _ => short,
        }
    }

    pub fn zone_glue(&self) -> &str {
        self.dates.glue_short.as_deref().unwrap_or("{1}, {0}")
    }

    pub fn gmt_format(&self) -> &str {
        self.dates.gmt_format.as_deref().unwrap_or("GMT{0}")
    }

    pub fn gmt_zero(&self) -> &str {
        self.dates.gmt_zero.as_deref().unwrap_or("GMT")
    }

    pub fn utc_name(&self, long: bool) -> &str {
        if long {
            self.dates.utc_long.as_deref().unwrap_or("Coordinated Universal Time")
        } else {
            self.dates.utc_short.as_deref().unwrap_or("UTC")
        }
    }

    pub fn date_format(&self, skeleton: &str) -> Option<&str> {
        self.date_formats.get(skeleton).map(String::as_str)
    }

    pub fn time_format(&self, skeleton: &str) -> Option<&str> {
        self.time_formats.get(skeleton).map(String::as_str)
    }

    /// Relative time patterns, narrowest available width first
    pub fn relative_chain(
        &self,
        unit: RelativeTimeUnit,
        style: RelativeTimeStyle,
    ) -> Vec<&RelativePatterns> {
        let Some(patterns) = self.relative.get(unit.id()) else {
            return Vec::new();
        };
        let widths = match style {
            RelativeTimeStyle::Narrow => vec![&patterns.narrow, &patterns.short, &patterns.long],
            RelativeTimeStyle::Short => vec![&patterns.short, &patterns.long],
            RelativeTimeStyle::Long => vec![&patterns.long],
        };
        widths.into_iter().filter_map(Option::as_ref).collect()
    }

    pub fn list_patterns(&self, list_type: ListType, style: ListStyle) -> ListPatterns {
        let widths = match list_type {
            ListType::Conjunction => &self.lists.conjunction,
            ListType::Disjunction => &self.lists.disjunction,
        };
        let found = match style {
            ListStyle::Narrow => widths.narrow.as_ref().or(widths.short.as_ref()),
            ListStyle::Short => widths.short.as_ref(),
            ListStyle::Long => None,
        };
        found
            .or(widths.long.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// Merged data for a requested tag
#[derive(Debug, Clone)]
pub struct ResolvedLocale {
    /// Tag whose data was used, e.g. `fr` for a request of `fr-CH`
    pub tag: String,
    pub data: LocaleData,
}

/// Holds every locale layer and resolves tags to merged data
pub struct LocaleRegistry {
    layers: HashMap<String, LocaleData>,
    resolved: RwLock<HashMap<String, Arc<ResolvedLocale>>>,
}

// Global singleton for the embedded locale data
static LOCALE_REGISTRY: OnceLock<Arc<LocaleRegistry>> = OnceLock::new();

impl LocaleRegistry {
    fn with_layers(layers: HashMap<String, LocaleData>) -> Self {
        Self {
            layers,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry from the embedded locale data
    fn new() -> Self {
        match Self::parse_layers(EMBEDDED_LOCALES) {
            Ok(layers) => Self::with_layers(layers),
            Err(e) => {
                // Keep going with built-in defaults
                tracing::error!(error = %e, "failed to load embedded locale data");
                Self::with_layers(HashMap::new())
            }
        }
    }

    /// Shared registry backed by the embedded locale data
    pub fn embedded() -> Arc<Self> {
        LOCALE_REGISTRY.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Registry with a caller-supplied TOML document layered over the
    /// embedded data
    ///
    /// The document uses the same shape as the embedded data: one table per
    /// locale tag, plus an optional `base` table.
    ///
    /// # Examples
    /// ```
    /// use locale_format::LocaleRegistry;
    ///
    /// let registry = LocaleRegistry::from_toml_str(
    ///     r#"
    ///     [en-US.number]
    ///     group = "_"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(registry.resolve("en-US").data.group(), "_");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut layers = Self::embedded().layers.clone();
        layers.layer(Self::parse_layers(toml_str)?);
        Ok(Self::with_layers(layers))
    }

    fn parse_layers(toml_str: &str) -> Result<HashMap<String, LocaleData>> {
        let parsed: HashMap<String, LocaleData> =
            toml::from_str(toml_str).map_err(|e| FormatError::LocaleData(e.to_string()))?;

        Ok(parsed
            .into_iter()
            .map(|(tag, data)| {
                let key = if tag == "base" {
                    tag
                } else {
                    normalize_locale_tag(&tag)
                };
                (key, data)
            })
            .collect())
    }

    /// Merged data for `tag`
    ///
    /// Unknown tags fall back to their language, then to `en-US`. The cache
    /// is keyed by the layer the tag resolved to, so it never holds more
    /// entries than there are layers.
    pub fn resolve(&self, tag: &str) -> Arc<ResolvedLocale> {
        let requested = normalize_locale_tag(tag);
        let key = self.lookup_key(&requested);

        if let Some(hit) = self
            .resolved
            .read()
            .ok()
            .and_then(|cache| cache.get(&key).cloned())
        {
            return hit;
        }

        let mut data = LocaleData::default();
        for layer in self.lineage(&key) {
            data.layer(layer.clone());
        }

        let resolved = Arc::new(ResolvedLocale {
            tag: key.clone(),
            data,
        });
        if let Ok(mut cache) = self.resolved.write() {
            cache.insert(key, resolved.clone());
        }
        resolved
    }

    fn lookup_key(&self, requested: &str) -> String {
        let mut candidate = Some(requested.to_string());
        while let Some(tag) = candidate {
            if tag != "base" && self.layers.contains_key(&tag) {
                if tag != requested {
                    tracing::debug!(requested, resolved = %tag, "locale fallback");
                }
                return tag;
            }
            candidate = truncate_tag(&tag);
        }

        tracing::debug!(requested, resolved = DEFAULT_LOCALE, "unknown locale, using default");
        DEFAULT_LOCALE.to_string()
    }

    /// Layers from `base` down to `key`
    fn lineage(&self, key: &str) -> Vec<&LocaleData> {
        let mut chain: Vec<(&str, &LocaleData)> = Vec::new();
        let mut current = Some(key.to_string());

        while let Some(tag) = current.take() {
            if chain.len() >= MAX_LINEAGE || chain.iter().any(|(seen, _)| *seen == tag) {
                break;
            }
            let Some((tag, layer)) = self.layers.get_key_value(&tag) else {
                break;
            };
            current = layer
                .parent
                .as_deref()
                .map(normalize_locale_tag)
                .or_else(|| truncate_tag(tag));
            chain.push((tag.as_str(), layer));
        }

        let mut layers: Vec<&LocaleData> = self.layers.get("base").into_iter().collect();
        layers.extend(chain.into_iter().rev().map(|(_, layer)| layer));
        layers
    }

    /// Locale tags with their own data, sorted
    pub fn available_locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .layers
            .keys()
            .filter(|tag| tag.as_str() != "base")
            .cloned()
            .collect();
        tags.sort();
        tags
    }
}

impl std::fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("locales", &self.available_locales())
            .finish()
    }
}

fn truncate_tag(tag: &str) -> Option<String> {
    tag.rsplit_once('-').map(|(head, _)| head.to_string())
}

/// Merged data for a locale tag from the embedded registry
pub fn locale_data(tag: &str) -> Arc<ResolvedLocale> {
    LocaleRegistry::embedded().resolve(tag)
}

/// List all locale identifiers with embedded data
pub fn list_available_locales() -> Vec<String> {
    LocaleRegistry::embedded().available_locales()
}
