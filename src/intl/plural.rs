//! Cardinal plural selection

use serde::Deserialize;

/// Per-language cardinal plural rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRule {
    /// `one` for an integer 1 with no visible fraction digits
    #[default]
    English,
    /// `one` when the integer part is 0 or 1
    French,
    /// `one` for an integer part of 0, or exactly 1
    Hindi,
    /// Always `other`
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Other,
}

/// Plural operands of a number as it is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralOperands {
    integer_is_zero: bool,
    integer_is_one: bool,
    visible_fraction_digits: usize,
    fraction_is_zero: bool,
}

impl PluralOperands {
    /// Build from the ASCII integer and fraction digits that were rendered
    pub fn from_parts(integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0');
        Self {
            integer_is_zero: integer.is_empty(),
            integer_is_one: integer == "1",
            visible_fraction_digits: fraction.len(),
            fraction_is_zero: fraction.bytes().all(|b| b == b'0'),
        }
    }
}

impl PluralRule {
    pub fn select(&self, operands: &PluralOperands) -> PluralCategory {
        let one = match self {
            PluralRule::English => operands.integer_is_one && operands.visible_fraction_digits == 0,
            PluralRule::French => operands.integer_is_zero || operands.integer_is_one,
            PluralRule::Hindi => {
                operands.integer_is_zero || (operands.integer_is_one && operands.fraction_is_zero)
            }
            PluralRule::None => false,
        };
        if one {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }
}

/// Message variants keyed by plural category; `other` is mandatory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluralForms {
    #[serde(default)]
    pub one: Option<String>,
    pub other: String,
}

impl PluralForms {
    pub fn get(&self, category: PluralCategory) -> &str {
        match (category, &self.one) {
            (PluralCategory::One, Some(one)) => one,
            _ => &self.other,
        }
    }
}
