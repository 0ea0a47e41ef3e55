#[cfg(test)]
mod tests {
    use locale_format::{
        CurrencyOptions, DateInput, DateTimeOptions, DecimalOptions, ListOptions, NumberOptions,
        NumericInput, PercentageOptions, RelativeTimeOptions, UnitOptions, format_currency,
        format_date_time, format_decimal, format_list, format_number, format_percentage,
        format_relative_time, format_unit,
    };
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    enum FixtureValue {
        Number(f64),
        Text(String),
    }

    impl From<FixtureValue> for NumericInput {
        fn from(value: FixtureValue) -> Self {
            match value {
                FixtureValue::Number(n) => n.into(),
                FixtureValue::Text(s) => s.into(),
            }
        }
    }

    impl From<FixtureValue> for DateInput {
        fn from(value: FixtureValue) -> Self {
            match value {
                FixtureValue::Number(n) => n.into(),
                FixtureValue::Text(s) => s.into(),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct ValueCase<O> {
        value: FixtureValue,
        #[serde(default)]
        options: O,
        expected: String,
    }

    #[derive(Debug, Deserialize)]
    struct ListCase {
        items: Vec<String>,
        #[serde(default)]
        options: ListOptions,
        expected: String,
    }

    #[derive(Debug, Deserialize)]
    struct Fixtures {
        currency: Vec<ValueCase<CurrencyOptions>>,
        decimal: Vec<ValueCase<DecimalOptions>>,
        percentage: Vec<ValueCase<PercentageOptions>>,
        number: Vec<ValueCase<NumberOptions>>,
        unit: Vec<ValueCase<UnitOptions>>,
        relative: Vec<ValueCase<RelativeTimeOptions>>,
        date: Vec<ValueCase<DateTimeOptions>>,
        list: Vec<ListCase>,
    }

    fn load() -> Fixtures {
        let path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("cases.toml");

        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

        toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
    }

    /// Run every case, collecting mismatches so one run reports all of them
    fn check<O: std::fmt::Debug>(
        group: &str,
        cases: &[ValueCase<O>],
        format: impl Fn(FixtureValue, &O) -> String,
        failures: &mut Vec<String>,
    ) {
        for (i, case) in cases.iter().enumerate() {
            let actual = format(case.value.clone(), &case.options);
            if actual != case.expected {
                failures.push(format!(
                    "[{group} #{}] value {:?}, options {:?}\n  expected: {:?}\n  actual:   {:?}",
                    i + 1,
                    case.value,
                    case.options,
                    case.expected,
                    actual
                ));
            }
        }
    }

    #[test]
    fn test_fixture_cases() {
        let fixtures = load();
        let mut failures = Vec::new();

        check("currency", &fixtures.currency, |v, o| format_currency(v, o), &mut failures);
        check("decimal", &fixtures.decimal, |v, o| format_decimal(v, o), &mut failures);
        check(
            "percentage",
            &fixtures.percentage,
            |v, o| format_percentage(v, o),
            &mut failures,
        );
        check("number", &fixtures.number, |v, o| format_number(v, o), &mut failures);
        check("unit", &fixtures.unit, |v, o| format_unit(v, o), &mut failures);
        check(
            "relative",
            &fixtures.relative,
            |v, o| format_relative_time(v, o),
            &mut failures,
        );
        check("date", &fixtures.date, |v, o| format_date_time(v, o), &mut failures);

        for (i, case) in fixtures.list.iter().enumerate() {
            let actual = format_list(&case.items, &case.options);
            if actual != case.expected {
                failures.push(format!(
                    "[list #{}] items {:?}\n  expected: {:?}\n  actual:   {:?}",
                    i + 1,
                    case.items,
                    case.expected,
                    actual
                ));
            }
        }

        assert!(failures.is_empty(), "\n{}", failures.join("\n"));
    }
}
