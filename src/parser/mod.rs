//! Input parsing module
//!
//! winnow parsers for the loosely-typed inputs the formatters accept and for
//! the locale data they are driven by:
//! - numeric strings, following JavaScript `Number()` coercion rules
//! - date strings in the ISO 8601 date time string format
//! - CLDR date patterns such as `MMMM d, y 'at' h:mm:ss a`

mod date_input;
mod numeric;
mod pattern;

pub use date_input::{ParsedDate, parse_date_string, parse_utc_offset};
pub use numeric::parse_numeric_string;
pub use pattern::{PatternToken, parse_date_pattern};
