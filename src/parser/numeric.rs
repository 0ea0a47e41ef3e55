use winnow::ascii::{digit0, digit1, hex_digit1, oct_digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

/// Convert a string to a number the way JavaScript's `Number()` does
///
/// Surrounding whitespace is ignored and a blank string is `0`. Accepted
/// forms are decimal literals with optional sign, fraction and exponent,
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Everything else is
/// `NaN`.
///
/// # Examples
/// ```
/// use locale_format::parser::parse_numeric_string;
///
/// assert_eq!(parse_numeric_string(" 12.5 "), 12.5);
/// assert_eq!(parse_numeric_string("0x1F"), 31.0);
/// assert!(parse_numeric_string("12px").is_nan());
/// ```
pub fn parse_numeric_string(input: &str) -> f64 {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    numeric_literal.parse(trimmed).unwrap_or(f64::NAN)
}

fn numeric_literal(input: &mut &str) -> ModalResult<f64> {
    alt((radix_literal, signed_decimal)).parse_next(input)
}

fn radix_literal(input: &mut &str) -> ModalResult<f64> {
    alt((
        preceded(alt(("0x", "0X")), hex_digit1).map(|digits| fold_radix(digits, 16)),
        preceded(alt(("0o", "0O")), oct_digit1).map(|digits| fold_radix(digits, 8)),
        preceded(alt(("0b", "0B")), take_while(1.., ['0', '1']))
            .map(|digits| fold_radix(digits, 2)),
    ))
    .parse_next(input)
}

fn signed_decimal(input: &mut &str) -> ModalResult<f64> {
    (
        opt(one_of(['+', '-'])),
        alt((literal("Infinity").value(f64::INFINITY), unsigned_decimal)),
    )
        .map(|(sign, value)| if sign == Some('-') { -value } else { value })
        .parse_next(input)
}

fn unsigned_decimal(input: &mut &str) -> ModalResult<f64> {
    (
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .try_map(|literal: &str| literal.parse::<f64>())
        .parse_next(input)
}

// Digits were already validated by the radix parsers
fn fold_radix(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
}
