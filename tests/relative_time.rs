#[cfg(test)]
mod tests {
    use locale_format::{
        RelativeTimeNumeric, RelativeTimeOptions, RelativeTimeStyle, RelativeTimeUnit,
        format_relative_time,
    };

    fn relative(value: f64, unit: RelativeTimeUnit) -> String {
        format_relative_time(value, &RelativeTimeOptions::new().with_unit(unit))
    }

    #[test]
    fn test_future_and_past() {
        assert_eq!(relative(3.0, RelativeTimeUnit::Day), "in 3 days");
        assert_eq!(relative(-1.0, RelativeTimeUnit::Day), "1 day ago");
        assert_eq!(relative(-2.0, RelativeTimeUnit::Week), "2 weeks ago");
        assert_eq!(relative(1.0, RelativeTimeUnit::Quarter), "in 1 quarter");
        assert_eq!(relative(10.0, RelativeTimeUnit::Year), "in 10 years");
        assert_eq!(relative(-30.0, RelativeTimeUnit::Second), "30 seconds ago");
        assert_eq!(relative(2.5, RelativeTimeUnit::Hour), "in 2.5 hours");
    }

    #[test]
    fn test_plain_output() {
        let plain = |value: f64, unit| {
            format_relative_time(
                value,
                &RelativeTimeOptions::new().with_unit(unit).with_plain(true),
            )
        };
        assert_eq!(plain(-2.0, RelativeTimeUnit::Week), "2 weeks");
        assert_eq!(plain(5.0, RelativeTimeUnit::Minute), "5 minutes");
        assert_eq!(plain(1.0, RelativeTimeUnit::Month), "1 month");
    }

    #[test]
    fn test_numeric_auto() {
        let auto = |value: f64, unit| {
            format_relative_time(
                value,
                &RelativeTimeOptions::new()
                    .with_unit(unit)
                    .with_numeric(RelativeTimeNumeric::Auto),
            )
        };
        assert_eq!(auto(-1.0, RelativeTimeUnit::Day), "yesterday");
        assert_eq!(auto(0.0, RelativeTimeUnit::Day), "today");
        assert_eq!(auto(1.0, RelativeTimeUnit::Day), "tomorrow");
        assert_eq!(auto(1.0, RelativeTimeUnit::Year), "next year");
        assert_eq!(auto(-1.0, RelativeTimeUnit::Month), "last month");
        assert_eq!(auto(0.0, RelativeTimeUnit::Second), "now");
        assert_eq!(auto(3.0, RelativeTimeUnit::Day), "in 3 days");
    }

    #[test]
    fn test_styles() {
        let styled = |value: f64, unit, style| {
            format_relative_time(
                value,
                &RelativeTimeOptions::new().with_unit(unit).with_style(style),
            )
        };
        assert_eq!(
            styled(-3.0, RelativeTimeUnit::Hour, RelativeTimeStyle::Short),
            "3 hr. ago"
        );
        assert_eq!(
            styled(-3.0, RelativeTimeUnit::Hour, RelativeTimeStyle::Narrow),
            "3h ago"
        );
        assert_eq!(
            styled(2.0, RelativeTimeUnit::Year, RelativeTimeStyle::Short),
            "in 2 yr."
        );
    }

    #[test]
    fn test_other_locales() {
        let localized = |value: f64, locale: &str, numeric| {
            format_relative_time(
                value,
                &RelativeTimeOptions::new()
                    .with_locale(locale)
                    .with_numeric(numeric),
            )
        };
        assert_eq!(localized(3.0, "fr-FR", RelativeTimeNumeric::Always), "dans 3 jours");
        assert_eq!(localized(-2.0, "fr-FR", RelativeTimeNumeric::Auto), "avant-hier");
        assert_eq!(localized(-1.0, "de-DE", RelativeTimeNumeric::Auto), "gestern");
        assert_eq!(localized(2.0, "de-DE", RelativeTimeNumeric::Always), "in 2 Tagen");
        assert_eq!(localized(1.0, "ja-JP", RelativeTimeNumeric::Auto), "明日");
        assert_eq!(localized(3.0, "ja-JP", RelativeTimeNumeric::Always), "3 日後");
    }

    #[test]
    fn test_invalid_values_format_as_zero() {
        assert_eq!(relative(f64::NAN, RelativeTimeUnit::Day), "in 0 days");
        assert_eq!(relative(f64::INFINITY, RelativeTimeUnit::Day), "in 0 days");
        assert_eq!(
            format_relative_time("abc", &RelativeTimeOptions::new()),
            "in 0 days"
        );
    }

    #[test]
    fn test_negative_zero_is_past() {
        assert_eq!(relative(-0.0, RelativeTimeUnit::Day), "0 days ago");
    }
}
