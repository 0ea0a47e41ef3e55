#[cfg(test)]
mod tests {
    use locale_format::{ListOptions, ListStyle, ListType, format_list};

    fn list(items: &[&str], locale: &str, list_type: ListType, style: ListStyle) -> String {
        format_list(
            items,
            &ListOptions::new()
                .with_locale(locale)
                .with_type(list_type)
                .with_style(style),
        )
    }

    #[test]
    fn test_item_counts() {
        let options = ListOptions::new();
        assert_eq!(format_list(&["apples"], &options), "apples");
        assert_eq!(format_list(&["apples", "pears"], &options), "apples and pears");
        assert_eq!(
            format_list(&["apples", "pears", "plums"], &options),
            "apples, pears, and plums"
        );
        assert_eq!(
            format_list(&["a", "b", "c", "d", "e"], &options),
            "a, b, c, d, and e"
        );
    }

    #[test]
    fn test_owned_items() {
        let items = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        assert_eq!(format_list(&items, &ListOptions::new()), "red, green, and blue");
    }

    #[test]
    fn test_types_and_styles() {
        let items = ["a", "b", "c"];
        assert_eq!(
            list(&items, "en-US", ListType::Disjunction, ListStyle::Long),
            "a, b, or c"
        );
        assert_eq!(
            list(&items, "en-US", ListType::Conjunction, ListStyle::Short),
            "a, b, & c"
        );
        assert_eq!(
            list(&items, "en-US", ListType::Conjunction, ListStyle::Narrow),
            "a, b, c"
        );
        // no narrow disjunction data: falls back to long
        assert_eq!(
            list(&items, "en-US", ListType::Disjunction, ListStyle::Narrow),
            "a, b, or c"
        );
    }

    #[test]
    fn test_locales() {
        let items = ["a", "b", "c"];
        let conj = |locale| list(&items, locale, ListType::Conjunction, ListStyle::Long);
        let disj = |locale| list(&items, locale, ListType::Disjunction, ListStyle::Long);

        assert_eq!(conj("en-GB"), "a, b and c");
        assert_eq!(conj("fr-FR"), "a, b et c");
        assert_eq!(conj("de-DE"), "a, b und c");
        assert_eq!(conj("ja-JP"), "a、b、c");
        assert_eq!(conj("zh-CN"), "a、b和c");
        assert_eq!(conj("hi-IN"), "a, b, और c");

        assert_eq!(disj("en-GB"), "a, b or c");
        assert_eq!(disj("fr-FR"), "a, b ou c");
        assert_eq!(disj("ja-JP"), "a、b、またはc");
    }

    #[test]
    fn test_german_short_uses_german_long() {
        assert_eq!(
            list(&["x", "y"], "de-DE", ListType::Conjunction, ListStyle::Short),
            "x und y"
        );
    }

    #[test]
    fn test_blank_items() {
        let options = ListOptions::new();
        assert_eq!(format_list::<&str>(&[], &options), "");
        assert_eq!(format_list(&["", " ", "\t"], &options), "");
        assert_eq!(format_list(&["a", " "], &options), "a and  ");
    }

    #[test]
    fn test_items_are_not_reinterpreted() {
        assert_eq!(
            format_list(&["{0}", "{1}"], &ListOptions::new()),
            "{0} and {1}"
        );
    }
}
