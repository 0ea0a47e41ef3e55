#[cfg(test)]
mod tests {
    use locale_format::{
        CompactDisplay, CompactOptions, DecimalOptions, Notation, NumberOptions, PercentageOptions,
        Unit, UnitDisplay, UnitOptions, format_compact_number, format_decimal, format_number,
        format_percentage, format_unit,
    };

    fn compact(value: f64, locale: &str, display: CompactDisplay) -> String {
        format_compact_number(
            value,
            &CompactOptions::new()
                .with_locale(locale)
                .with_compact_display(display),
        )
    }

    fn unit(value: f64, unit: Unit, display: UnitDisplay, locale: &str) -> String {
        format_unit(
            value,
            &UnitOptions::new()
                .with_unit(unit)
                .with_unit_display(display)
                .with_locale(locale),
        )
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, &NumberOptions::new()), "1,234,567.891");
        assert_eq!(format_number(0.1 + 0.2, &NumberOptions::new()), "0.3");
        assert_eq!(format_number(-42, &NumberOptions::new()), "-42");
        assert_eq!(
            format_number(1234567.891, &NumberOptions::new().with_locale("de-DE")),
            "1.234.567,891"
        );
        assert_eq!(
            format_number(1234567.891, &NumberOptions::new().with_locale("en-IN")),
            "12,34,567.891"
        );
        assert_eq!(format_number("abc", &NumberOptions::new()), "0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.5678, &DecimalOptions::new()), "1,234.57");
        assert_eq!(format_decimal(1.005, &DecimalOptions::new()), "1.01");
        assert_eq!(format_decimal(10, &DecimalOptions::new().with_decimals(0)), "10");
        assert_eq!(format_decimal(0.5, &DecimalOptions::new().with_decimals(4)), "0.5000");
        assert_eq!(
            format_decimal(1234.5, &DecimalOptions::new().with_locale("de-DE")),
            "1.234,50"
        );
        assert_eq!(format_decimal(f64::NAN, &DecimalOptions::new()), "0.00");
    }

    #[test]
    fn test_format_decimal_width_is_capped() {
        let out = format_decimal(1.5, &DecimalOptions::new().with_decimals(200));
        assert_eq!(out, format!("1.5{}", "0".repeat(99)));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.1234, &PercentageOptions::new()), "12.34%");
        assert_eq!(
            format_percentage(0.037, &PercentageOptions::new().with_fraction_digits(1)),
            "3.7%"
        );
        assert_eq!(format_percentage(1, &PercentageOptions::new()), "100.00%");
        assert_eq!(format_percentage("0.25", &PercentageOptions::new()), "25.00%");
    }

    /// Percentages are never grouped or localized
    #[test]
    fn test_format_percentage_skips_locale_rules() {
        assert_eq!(format_percentage(12345.678, &PercentageOptions::new()), "1234567.80%");
        assert_eq!(
            format_percentage(0.5, &PercentageOptions::new().with_fraction_digits(0)),
            "50%"
        );
    }

    #[test]
    fn test_format_percentage_huge_values_use_exponent_form() {
        assert_eq!(format_percentage(1e19, &PercentageOptions::new()), "1e+21%");
        assert_eq!(format_percentage(-2.5e20, &PercentageOptions::new()), "-2.5e+22%");
        assert_eq!(
            format_percentage(1e18, &PercentageOptions::new()),
            "100000000000000000000.00%"
        );
    }

    #[test]
    fn test_compact_short() {
        assert_eq!(format_compact_number(1000, &CompactOptions::new()), "1K");
        assert_eq!(format_compact_number(999, &CompactOptions::new()), "999");
        assert_eq!(format_compact_number(1500, &CompactOptions::new()), "1.5K");
        assert_eq!(format_compact_number(12_345, &CompactOptions::new()), "12K");
        assert_eq!(format_compact_number(1_250_000, &CompactOptions::new()), "1.3M");
        assert_eq!(format_compact_number(3_000_000_000_u64, &CompactOptions::new()), "3B");
        assert_eq!(format_compact_number(-2500, &CompactOptions::new()), "-2.5K");
        assert_eq!(format_compact_number(0.123, &CompactOptions::new()), "0.12");
    }

    #[test]
    fn test_compact_long_and_standard() {
        assert_eq!(compact(6500.0, "en-US", CompactDisplay::Long), "6.5 thousand");
        assert_eq!(compact(1_000_000.0, "en-US", CompactDisplay::Long), "1 million");
        assert_eq!(
            format_compact_number(1000, &CompactOptions::new().standard()),
            "1,000"
        );
        assert_eq!(
            format_compact_number(
                1000,
                &CompactOptions::new().with_notation(Notation::Standard)
            ),
            "1,000"
        );
    }

    #[test]
    fn test_compact_locales() {
        assert_eq!(compact(12_000.0, "ja-JP", CompactDisplay::Short), "1.2万");
        assert_eq!(compact(1_500_000.0, "en-IN", CompactDisplay::Short), "15L");
        assert_eq!(compact(1500.0, "fr-FR", CompactDisplay::Short), "1,5\u{a0}k");
    }

    #[test]
    fn test_format_unit() {
        assert_eq!(format_unit(12, &UnitOptions::new()), "12 kg");
        assert_eq!(unit(1.0, Unit::Kilogram, UnitDisplay::Long, "en-US"), "1 kilogram");
        assert_eq!(unit(2.0, Unit::Kilogram, UnitDisplay::Long, "en-US"), "2 kilograms");
        assert_eq!(unit(5.0, Unit::Kilometer, UnitDisplay::Narrow, "en-US"), "5km");
        assert_eq!(unit(100.0, Unit::KilometerPerHour, UnitDisplay::Short, "en-US"), "100 km/h");
        assert_eq!(unit(3.0, Unit::Meter, UnitDisplay::Long, "en-GB"), "3 metres");
        assert_eq!(unit(1.5, Unit::Liter, UnitDisplay::Long, "en-US"), "1.5 liters");
        assert_eq!(unit(1234.5, Unit::Byte, UnitDisplay::Short, "en-US"), "1,234.5 byte");
    }
}
