//! Relative time formatting

use std::sync::Arc;

use crate::intl::fill_pattern;
use crate::intl::number::NumberFormat;
use crate::locale::ResolvedLocale;
use crate::types::{
    NumberFormatOptions, RelativeTimeFormatOptions, RelativeTimeNumeric, RelativeTimeUnit,
};

/// A relative time formatter bound to one locale and option bag
#[derive(Debug, Clone)]
pub struct RelativeTimeFormat {
    locale: Arc<ResolvedLocale>,
    options: RelativeTimeFormatOptions,
    number: NumberFormat,
}

impl RelativeTimeFormat {
    pub fn new(locale: Arc<ResolvedLocale>, options: &RelativeTimeFormatOptions) -> Self {
        let number = NumberFormat::new(locale.clone(), &NumberFormatOptions::default());
        Self {
            locale,
            options: *options,
            number,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale.tag
    }

    pub fn options(&self) -> &RelativeTimeFormatOptions {
        &self.options
    }

    /// Format a signed offset; negative values (including `-0`) are past
    ///
    /// # Examples
    /// ```
    /// use locale_format::intl::{BuiltinIntl, IntlProvider};
    /// use locale_format::{RelativeTimeFormatOptions, RelativeTimeNumeric, RelativeTimeUnit};
    ///
    /// let intl = BuiltinIntl::new();
    /// let always = intl.relative_time_format("en-US", &RelativeTimeFormatOptions::default());
    /// assert_eq!(always.format(-2.0, RelativeTimeUnit::Day), "2 days ago");
    ///
    /// let auto = intl.relative_time_format(
    ///     "en-US",
    ///     &RelativeTimeFormatOptions {
    ///         numeric: RelativeTimeNumeric::Auto,
    ///         ..Default::default()
    ///     },
    /// );
    /// assert_eq!(auto.format(1.0, RelativeTimeUnit::Day), "tomorrow");
    /// ```
    pub fn format(&self, value: f64, unit: RelativeTimeUnit) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let chain = self.locale.data.relative_chain(unit, self.options.style);

        if self.options.numeric == RelativeTimeNumeric::Auto && value.fract() == 0.0 {
            let key = (value as i64).to_string();
            if let Some(phrase) = chain.iter().find_map(|patterns| patterns.phrases.get(&key)) {
                return phrase.clone();
            }
        }

        let past = value.is_sign_negative();
        let (number, category) = self.number.format_with_category(value.abs());

        match chain.first() {
            Some(patterns) => {
                let forms = if past { &patterns.past } else { &patterns.future };
                fill_pattern(forms.get(category), &number, "")
            }
            None => {
                tracing::debug!(locale = %self.locale.tag, unit = unit.id(), "no relative time patterns");
                let sign = if past { self.locale.data.minus() } else { "" };
                format!("{sign}{number} {}", unit.id())
            }
        }
    }
}
