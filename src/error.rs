//! Error types
//!
//! Formatting entry points degrade instead of failing, so the only errors
//! surfaced to callers come from parsing typed options, loading locale data,
//! and the runtime-checked strict currency path.

use thiserror::Error;

/// Errors raised by the fallible parts of the crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The locale/currency pair is not in the strict pairing table
    #[error("locale `{locale}` is not paired with currency `{currency}`")]
    StrictPairMismatch { locale: String, currency: String },

    /// Currency code outside the supported set
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),

    /// Unit identifier outside the supported set
    #[error("unsupported unit: {0}")]
    UnknownUnit(String),

    /// Relative time unit outside the supported set
    #[error("unsupported relative time unit: {0}")]
    UnknownRelativeTimeUnit(String),

    /// Time zone identifier that is neither IANA, UTC nor a fixed offset
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Locale data document could not be parsed
    #[error("error parsing locale data: {0}")]
    LocaleData(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
