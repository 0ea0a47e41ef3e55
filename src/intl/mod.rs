//! Locale formatting primitive
//!
//! The entry points never format digits or dates themselves; they ask an
//! [`IntlProvider`] for a formatter object and hand it a normalized value.
//! [`BuiltinIntl`] is the data-driven provider backed by a
//! [`LocaleRegistry`].
//!
//! Every formatter object is immutable once built, so one instance can be
//! reused for any number of calls and shared between threads.

pub(crate) mod decimal;
pub mod plural;

mod datetime;
mod list;
mod number;
mod relative;

use std::sync::Arc;

pub use datetime::{DateTimeFormat, TimeZoneSpec};
pub use list::ListFormat;
pub use number::NumberFormat;
pub use relative::RelativeTimeFormat;

use crate::locale::LocaleRegistry;
use crate::types::{
    DateTimeFormatOptions, ListFormatOptions, NumberFormatOptions, RelativeTimeFormatOptions,
};

/// Builds formatter objects addressed by locale tag
pub trait IntlProvider: Send + Sync {
    fn number_format(&self, locale: &str, options: &NumberFormatOptions) -> NumberFormat;

    fn date_time_format(&self, locale: &str, options: &DateTimeFormatOptions) -> DateTimeFormat;

    fn relative_time_format(
        &self,
        locale: &str,
        options: &RelativeTimeFormatOptions,
    ) -> RelativeTimeFormat;

    fn list_format(&self, locale: &str, options: &ListFormatOptions) -> ListFormat;
}

impl<P: IntlProvider + ?Sized> IntlProvider for Arc<P> {
    fn number_format(&self, locale: &str, options: &NumberFormatOptions) -> NumberFormat {
        (**self).number_format(locale, options)
    }

    fn date_time_format(&self, locale: &str, options: &DateTimeFormatOptions) -> DateTimeFormat {
        (**self).date_time_format(locale, options)
    }

    fn relative_time_format(
        &self,
        locale: &str,
        options: &RelativeTimeFormatOptions,
    ) -> RelativeTimeFormat {
        (**self).relative_time_format(locale, options)
    }

    fn list_format(&self, locale: &str, options: &ListFormatOptions) -> ListFormat {
        (**self).list_format(locale, options)
    }
}

/// Provider backed by locale data in a [`LocaleRegistry`]
#[derive(Debug, Clone)]
pub struct BuiltinIntl {
    registry: Arc<LocaleRegistry>,
}

impl BuiltinIntl {
    /// Provider over the embedded locale data
    pub fn new() -> Self {
        Self::with_registry(LocaleRegistry::embedded())
    }

    /// Provider over caller-supplied locale data
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use locale_format::intl::{BuiltinIntl, IntlProvider};
    /// use locale_format::{LocaleRegistry, NumberFormatOptions};
    ///
    /// let registry = LocaleRegistry::from_toml_str("[en-US.number]\ngroup = \"'\"").unwrap();
    /// let intl = BuiltinIntl::with_registry(Arc::new(registry));
    /// let format = intl.number_format("en-US", &NumberFormatOptions::default());
    /// assert_eq!(format.format(1234567.0), "1'234'567");
    /// ```
    pub fn with_registry(registry: Arc<LocaleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }
}

impl Default for BuiltinIntl {
    fn default() -> Self {
        Self::new()
    }
}

impl IntlProvider for BuiltinIntl {
    fn number_format(&self, locale: &str, options: &NumberFormatOptions) -> NumberFormat {
        NumberFormat::new(self.registry.resolve(locale), options)
    }

    fn date_time_format(&self, locale: &str, options: &DateTimeFormatOptions) -> DateTimeFormat {
        DateTimeFormat::new(self.registry.resolve(locale), options)
    }

    fn relative_time_format(
        &self,
        locale: &str,
        options: &RelativeTimeFormatOptions,
    ) -> RelativeTimeFormat {
        RelativeTimeFormat::new(self.registry.resolve(locale), options)
    }

    fn list_format(&self, locale: &str, options: &ListFormatOptions) -> ListFormat {
        ListFormat::new(self.registry.resolve(locale), options)
    }
}

/// Substitute `{0}` and `{1}` in a single pass
///
/// Text inserted for one placeholder is never rescanned, so an argument
/// that itself contains `{1}` comes out verbatim.
pub(crate) fn fill_pattern(pattern: &str, first: &str, second: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + first.len() + second.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{0}") {
            out.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            out.push_str(second);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
