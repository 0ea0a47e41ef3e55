//! List entry point

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::formatter::Formatters;
use crate::intl::IntlProvider;
use crate::options::ListOptions;

impl<P: IntlProvider, S: DiagnosticSink> Formatters<P, S> {
    /// Join items into a sentence (`apples, bananas, and oranges`)
    ///
    /// When no item has visible text the result is empty and a diagnostic
    /// is reported. Otherwise every item is kept as given, blank ones
    /// included.
    ///
    /// # Examples
    /// ```
    /// use locale_format::{format_list, ListOptions, ListType};
    ///
    /// assert_eq!(format_list(&["apples", "bananas", "oranges"], &ListOptions::new()), "apples, bananas, and oranges");
    /// assert_eq!(format_list(&["tea", "coffee"], &ListOptions::new().with_type(ListType::Disjunction)), "tea or coffee");
    /// assert_eq!(format_list::<&str>(&[], &ListOptions::new()), "");
    /// ```
    pub fn format_list<T: AsRef<str>>(&self, items: &[T], options: &ListOptions) -> String {
        if items.iter().all(|item| item.as_ref().trim().is_empty()) {
            let rendered: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
            self.sink.report(Diagnostic::new(
                "format_list",
                DiagnosticKind::EmptyList,
                format!("{rendered:?}"),
            ));
            return String::new();
        }

        let resolved = options.resolve();
        self.intl
            .list_format(&resolved.locale, &resolved.options)
            .format(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::types::ListStyle;

    #[test]
    fn test_blank_lists_are_reported() {
        let sink = CollectingSink::new();
        let f = Formatters::new().with_sink(sink.clone());

        assert_eq!(f.format_list::<&str>(&[], &ListOptions::new()), "");
        assert_eq!(f.format_list(&["", "  "], &ListOptions::new()), "");

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].input, "[]");
        assert_eq!(diagnostics[1].input, r#"["", "  "]"#);
        assert!(diagnostics.iter().all(|d| d.kind == DiagnosticKind::EmptyList));
    }

    #[test]
    fn test_blank_items_are_kept_when_one_has_text() {
        let sink = CollectingSink::new();
        let f = Formatters::new().with_sink(sink.clone());
        assert_eq!(f.format_list(&["a", ""], &ListOptions::new()), "a and ");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_list_options() {
        let f = Formatters::new().with_sink(());
        let items = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        assert_eq!(
            f.format_list(&items, &ListOptions::new().with_locale("en-GB")),
            "red, green and blue"
        );
        assert_eq!(
            f.format_list(&items, &ListOptions::new().with_style(ListStyle::Narrow)),
            "red, green, blue"
        );
        assert_eq!(
            f.format_list(&items, &ListOptions::new().with_locale("de-DE")),
            "red, green und blue"
        );
    }
}
