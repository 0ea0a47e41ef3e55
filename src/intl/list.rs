//! List formatting

use std::sync::Arc;

use crate::intl::fill_pattern;
use crate::locale::{ListPatterns, ResolvedLocale};
use crate::types::ListFormatOptions;

/// A list formatter bound to one locale, list type and width
#[derive(Debug, Clone)]
pub struct ListFormat {
    locale: Arc<ResolvedLocale>,
    options: ListFormatOptions,
    patterns: ListPatterns,
}

impl ListFormat {
    pub fn new(locale: Arc<ResolvedLocale>, options: &ListFormatOptions) -> Self {
        let patterns = locale.data.list_patterns(options.list_type, options.style);
        Self {
            locale,
            options: *options,
            patterns,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale.tag
    }

    pub fn options(&self) -> &ListFormatOptions {
        &self.options
    }

    /// Join items with the locale's connectors
    ///
    /// Items are inserted verbatim; placeholders inside an item are never
    /// expanded.
    ///
    /// # Examples
    /// ```
    /// use locale_format::intl::{BuiltinIntl, IntlProvider};
    /// use locale_format::ListFormatOptions;
    ///
    /// let list = BuiltinIntl::new().list_format("en-US", &ListFormatOptions::default());
    /// assert_eq!(list.format(&["red", "green", "blue"]), "red, green, and blue");
    /// ```
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [first, second] => fill_pattern(&self.patterns.pair, first.as_ref(), second.as_ref()),
            _ => self.format_series(items),
        }
    }

    /// Three or more items, written left to right
    ///
    /// Each connector contributes the text before and between its
    /// placeholders as soon as its item is written; the text after them is
    /// held back and closed in reverse order once the last item is in.
    fn format_series<S: AsRef<str>>(&self, items: &[S]) -> String {
        let connectors = (
            Connector::split(&self.patterns.start),
            Connector::split(&self.patterns.middle),
            Connector::split(&self.patterns.end),
        );
        let (Some(start), Some(middle), Some(end)) = connectors else {
            return self.format_nested(items);
        };
        let [first, inner @ .., penultimate, last] = items else {
            return self.format_nested(items);
        };

        let capacity = items.iter().map(|item| item.as_ref().len() + 4).sum();
        let mut out = String::with_capacity(capacity);
        let mut closing: Vec<&str> = Vec::with_capacity(inner.len() + 2);

        start.open(&mut out, first.as_ref());
        closing.push(start.after);
        for item in inner {
            middle.open(&mut out, item.as_ref());
            closing.push(middle.after);
        }
        end.open(&mut out, penultimate.as_ref());
        out.push_str(last.as_ref());
        out.push_str(end.after);

        for text in closing.iter().rev() {
            out.push_str(text);
        }
        out
    }

    /// Connectors whose placeholders are out of order or repeated
    fn format_nested<S: AsRef<str>>(&self, items: &[S]) -> String {
        let [first, middle @ .., penultimate, last] = items else {
            return String::new();
        };
        let mut tail = fill_pattern(&self.patterns.end, penultimate.as_ref(), last.as_ref());
        for item in middle.iter().rev() {
            tail = fill_pattern(&self.patterns.middle, item.as_ref(), &tail);
        }
        fill_pattern(&self.patterns.start, first.as_ref(), &tail)
    }
}

/// A list connector cut at its placeholders: `before{0}between{1}after`
struct Connector<'a> {
    before: &'a str,
    between: &'a str,
    after: &'a str,
}

impl<'a> Connector<'a> {
    fn split(pattern: &'a str) -> Option<Self> {
        let (before, rest) = pattern.split_once("{0}")?;
        let (between, after) = rest.split_once("{1}")?;
        let connector = Self {
            before,
            between,
            after,
        };
        let plain = [before, between, after]
            .iter()
            .all(|part| !part.contains("{0}") && !part.contains("{1}"));
        plain.then_some(connector)
    }

    /// Write everything up to the second placeholder
    fn open(&self, out: &mut String, item: &str) {
        out.push_str(self.before);
        out.push_str(item);
        out.push_str(self.between);
    }
}
