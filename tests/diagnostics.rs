#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use locale_format::{
        CollectingSink, CompactOptions, Currency, CurrencyDisplay, CurrencyOptions,
        DateTimeOptions, DecimalOptions, DiagnosticKind, Formatters, ListOptions,
        LocaleCurrencyPair, NumberOptions, PercentageOptions, RelativeTimeOptions, UnitOptions,
    };
    use locale_format::intl::BuiltinIntl;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<Vec<(Level, HashMap<String, String>)>>>;

    /// Records the fields of every event it sees
    struct CaptureLayer {
        events: Captured,
    }

    #[derive(Default)]
    struct FieldVisitor(HashMap<String, String>);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    fn collecting() -> (Formatters<BuiltinIntl, CollectingSink>, CollectingSink) {
        let sink = CollectingSink::new();
        (Formatters::new().with_sink(sink.clone()), sink)
    }

    #[test]
    fn test_every_entry_point_names_itself() {
        let (f, sink) = collecting();

        f.format_currency("abc", &CurrencyOptions::new());
        f.format_currency_match("abc", LocaleCurrencyPair::EnUsUsd, CurrencyDisplay::Symbol);
        f.create_currency_formatter(Currency::Usd, "en-US").format("abc");
        f.format_number("abc", &NumberOptions::new());
        f.format_decimal("abc", &DecimalOptions::new());
        f.format_percentage("abc", &PercentageOptions::new());
        f.format_compact_number("abc", &CompactOptions::new());
        f.format_unit("abc", &UnitOptions::new());
        f.format_date_time("abc", &DateTimeOptions::new());
        f.format_relative_time("abc", &RelativeTimeOptions::new());
        f.format_list::<&str>(&[], &ListOptions::new());

        let contexts: Vec<&str> = sink.diagnostics().iter().map(|d| d.context).collect();
        assert_eq!(
            contexts,
            [
                "format_currency",
                "format_currency_match",
                "create_currency_formatter",
                "format_number",
                "format_decimal",
                "format_percentage",
                "format_compact_number",
                "format_unit",
                "format_date_time",
                "format_relative_time",
                "format_list",
            ]
        );
    }

    #[test]
    fn test_valid_input_is_silent() {
        let (f, sink) = collecting();

        f.format_currency(1500, &CurrencyOptions::new());
        f.format_currency("1500", &CurrencyOptions::new());
        f.format_number(f64::INFINITY, &NumberOptions::new());
        f.format_percentage(" 0.5 ", &PercentageOptions::new());
        f.format_date_time("2025-07-15", &DateTimeOptions::new());
        f.format_relative_time(-3, &RelativeTimeOptions::new());
        f.format_list(&["a"], &ListOptions::new());

        assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    }

    #[test]
    fn test_kinds_and_inputs() {
        let (f, sink) = collecting();

        f.format_number(None::<f64>, &NumberOptions::new());
        f.format_number(f64::NAN, &NumberOptions::new());
        f.format_date_time(None::<&str>, &DateTimeOptions::new());
        f.format_date_time(f64::NAN, &DateTimeOptions::new());
        f.format_relative_time(f64::INFINITY, &RelativeTimeOptions::new());
        f.format_relative_time("3", &RelativeTimeOptions::new());

        let seen: Vec<(DiagnosticKind, String)> = sink
            .take()
            .into_iter()
            .map(|d| (d.kind, d.input))
            .collect();
        assert_eq!(
            seen,
            [
                (DiagnosticKind::InvalidNumber, "undefined".to_string()),
                (DiagnosticKind::InvalidNumber, "NaN".to_string()),
                (DiagnosticKind::MissingDate, "null".to_string()),
                (DiagnosticKind::InvalidDate, "NaN".to_string()),
                (DiagnosticKind::NotANumber, "Infinity".to_string()),
                (DiagnosticKind::NotANumber, "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_diagnostics_never_change_the_fallback() {
        let (f, _sink) = collecting();
        let quiet = Formatters::new().with_sink(());

        assert_eq!(
            f.format_currency("abc", &CurrencyOptions::new()),
            quiet.format_currency(0, &CurrencyOptions::new())
        );
        assert_eq!(
            f.format_unit("abc", &UnitOptions::new()),
            quiet.format_unit(0, &UnitOptions::new())
        );
        assert_eq!(f.format_date_time("abc", &DateTimeOptions::new()), "");
    }

    #[test]
    fn test_tracing_sink_emits_warnings() {
        let events: Captured = Arc::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: Arc::clone(&events),
        });

        tracing::subscriber::with_default(subscriber, || {
            let f = Formatters::new();
            f.format_currency("abc", &CurrencyOptions::new());
            f.format_list(&["", ""], &ListOptions::new());
        });

        let events = events.lock().unwrap();
        let warnings: Vec<_> = events
            .iter()
            .filter(|(level, fields)| *level == Level::WARN && fields.contains_key("context"))
            .collect();
        assert_eq!(warnings.len(), 2);

        let (_, currency) = warnings[0];
        assert_eq!(currency["context"], "format_currency");
        assert_eq!(currency["kind"], "invalid_number");
        assert_eq!(currency["input"], "abc");
        assert_eq!(
            currency["message"],
            "[format_currency] invalid value passed: \"abc\". Expected a number or numeric string."
        );

        let (_, list) = warnings[1];
        assert_eq!(list["context"], "format_list");
        assert_eq!(list["kind"], "empty_list");
    }
}
