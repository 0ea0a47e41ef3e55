pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod intl;
pub mod locale;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod types;

// Public API
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use error::{FormatError, Result};
pub use formatter::{
    CurrencyFormatter, Formatters, create_currency_formatter, format_compact_number,
    format_currency, format_currency_match, format_date_time, format_decimal, format_list,
    format_number, format_percentage, format_relative_time, format_unit,
    try_format_currency_match,
};
pub use locale::{LocaleRegistry, list_available_locales};
pub use normalize::{
    DateInput, NumericInput, ensure_number, ensure_numeric_or_string, normalize_date,
    normalize_number,
};
pub use options::*;
pub use types::*;
