//! Decimal digit arithmetic for number rendering
//!
//! Values are turned into their shortest round-trip decimal digits before
//! any rounding, so `1.005` rounds to `1.01` the way a reader expects rather
//! than following the binary approximation.

/// Non-negative decimal number: `0.d1 d2 ... dn × 10^point`
///
/// `digits` never carries trailing zeros and is empty for zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecimalDigits {
    digits: Vec<u8>,
    point: i32,
}

impl DecimalDigits {
    /// Shortest decimal digits of `|value|`; `value` must be finite
    pub(crate) fn from_f64(value: f64) -> Self {
        let repr = format!("{:e}", value.abs());
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut decimal = Self {
            digits,
            point: exponent + 1,
        };
        decimal.trim();
        decimal
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Multiply by `10^places`
    pub(crate) fn shifted(mut self, places: i32) -> Self {
        if !self.is_zero() {
            self.point += places;
        }
        self
    }

    /// Power of ten of the leading digit; `None` for zero
    pub(crate) fn magnitude(&self) -> Option<i32> {
        (!self.is_zero()).then_some(self.point - 1)
    }

    /// Digits before the decimal point (zero for values below one)
    pub(crate) fn integer_digit_count(&self) -> usize {
        self.point.max(0) as usize
    }

    /// Round half away from zero to at most `max_fraction` fraction digits
    pub(crate) fn round_fraction(&mut self, max_fraction: usize) {
        self.round_keeping(self.point + max_fraction as i32);
    }

    /// Round half away from zero to `significant` significant digits
    pub(crate) fn round_significant(&mut self, significant: usize) {
        self.round_keeping(significant as i32);
    }

    fn round_keeping(&mut self, keep: i32) {
        if keep < 0 || self.digits.len() as i32 <= keep {
            if keep < 0 {
                self.digits.clear();
                self.point = 0;
            }
            return;
        }

        let keep = keep as usize;
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);

        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }

        self.trim();
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    /// ASCII integer digits, `"0"` when there are none
    pub(crate) fn integer_part(&self) -> String {
        let count = self.integer_digit_count();
        if count == 0 {
            return "0".to_string();
        }
        (0..count)
            .map(|i| char::from(b'0' + self.digits.get(i).copied().unwrap_or(0)))
            .collect()
    }

    /// ASCII fraction digits, zero-padded to at least `min_fraction`
    pub(crate) fn fraction_part(&self, min_fraction: usize) -> String {
        let leading_zeros = (-self.point).max(0) as usize;
        let significant = self.digits.iter().skip(self.integer_digit_count());

        let mut fraction: String = std::iter::repeat_n('0', leading_zeros)
            .chain(significant.map(|d| char::from(b'0' + d)))
            .collect();
        if self.is_zero() {
            fraction.clear();
        }
        while fraction.len() < min_fraction {
            fraction.push('0');
        }
        fraction
    }

    pub(crate) fn to_f64(&self) -> f64 {
        let fraction = self.fraction_part(0);
        let text = if fraction.is_empty() {
            self.integer_part()
        } else {
            format!("{}.{}", self.integer_part(), fraction)
        };
        text.parse().unwrap_or(0.0)
    }
}

/// `Number.prototype.toFixed`: rounds the exact binary value, ties away
/// from zero, and keeps the sign of negative inputs that round to zero.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`, and
/// magnitudes of `1e21` and above switch to exponent form (`1e+21`).
pub(crate) fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return crate::normalize::display_number(value);
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return to_exponent_string(value);
    }

    let precision = exact_fraction_digits(value).max(fraction_digits + 1);
    let exact = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(fraction_digits))
        .collect();
    let round_up = fraction.as_bytes().get(fraction_digits).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - fraction_digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if fraction_digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

/// Smallest magnitude `Number.prototype.toString` renders with an exponent
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Shortest digits in `Number.prototype.toString` exponent form:
/// `1e+21`, `-1.5e+22`
fn to_exponent_string(value: f64) -> String {
    let decimal = DecimalDigits::from_f64(value);
    let Some(exponent) = decimal.magnitude() else {
        return "0".to_string();
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    let mut digits = decimal.digits.iter().map(|d| char::from(b'0' + d));
    out.extend(digits.next());
    let rest: String = digits.collect();
    if !rest.is_empty() {
        out.push('.');
        out.push_str(&rest);
    }
    out.push_str(&format!("e{}{}", if exponent < 0 { '-' } else { '+' }, exponent.abs()));
    out
}

/// Number of fraction digits in the exact decimal expansion of `value`
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };

    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 { 0 } else { (-exponent) as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64, max_fraction: usize) -> (String, String) {
        let mut digits = DecimalDigits::from_f64(value);
        digits.round_fraction(max_fraction);
        (digits.integer_part(), digits.fraction_part(0))
    }

    #[test]
    fn test_shortest_digits() {
        let digits = DecimalDigits::from_f64(1234.5);
        assert_eq!(digits.integer_part(), "1234");
        assert_eq!(digits.fraction_part(3), "500");
        assert_eq!(digits.magnitude(), Some(3));

        let small = DecimalDigits::from_f64(0.0042);
        assert_eq!(small.integer_part(), "0");
        assert_eq!(small.fraction_part(0), "0042");
        assert_eq!(small.magnitude(), Some(-3));
    }

    #[test]
    fn test_round_half_away_from_zero_on_decimal_digits() {
        assert_eq!(rounded(1.005, 2), ("1".into(), "01".into()));
        assert_eq!(rounded(2.5, 0), ("3".into(), "".into()));
        assert_eq!(rounded(9.995, 2), ("10".into(), "".into()));
        assert_eq!(rounded(0.0004, 3), ("0".into(), "".into()));
        assert_eq!(rounded(0.0005, 3), ("0".into(), "001".into()));
    }

    #[test]
    fn test_round_significant_carries_into_new_digit() {
        let mut digits = DecimalDigits::from_f64(9.96);
        digits.round_significant(2);
        assert_eq!(digits.integer_part(), "10");
        assert_eq!(digits.magnitude(), Some(1));
    }

    #[test]
    fn test_shifted() {
        let digits = DecimalDigits::from_f64(0.07).shifted(2);
        assert_eq!(digits.integer_part(), "7");
        assert_eq!(digits.to_f64(), 7.0);
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.25, 1), "1.3");
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(12.340000000000002, 2), "12.34");
        assert_eq!(to_fixed(3.6999999999999997, 1), "3.7");
        assert_eq!(to_fixed(99.995, 0), "100");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_to_fixed_switches_to_exponent_form() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-1.5e22, 0), "-1.5e+22");
        assert_eq!(to_fixed(1.2345e25, 4), "1.2345e+25");
        assert_eq!(to_fixed(1e20, 0), "100000000000000000000");
    }
}
