//! Date and time formatting
//!
//! Requested fields are turned into a skeleton (`yMMMMd`, `hms`), the
//! skeleton is looked up in the locale's pattern tables, and the resulting
//! CLDR pattern is tokenized once and rendered for every instant.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Offset, Timelike, Utc};
use chrono_tz::{OffsetName, Tz};

use crate::error::FormatError;
use crate::locale::{LocaleData, ResolvedLocale};
use crate::parser::{PatternToken, parse_date_pattern, parse_utc_offset};
use crate::types::{DateTimeFormatOptions, MonthStyle, NumericWidth, TimeZoneNameStyle};

/// Used when locale data carries a pattern that does not tokenize
const FALLBACK_PATTERN: &str = "y-MM-dd HH:mm:ss";

/// Zone the output is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpec {
    /// Host zone
    Local,
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

impl FromStr for TimeZoneSpec {
    type Err = FormatError;

    /// Accepts `UTC`, fixed offsets such as `+05:30` and IANA identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if ["UTC", "Etc/UTC", "GMT", "Etc/GMT", "Z"]
            .iter()
            .any(|utc| utc.eq_ignore_ascii_case(id))
        {
            return Ok(TimeZoneSpec::Utc);
        }
        if let Some(offset) = parse_utc_offset(id) {
            return Ok(TimeZoneSpec::Fixed(offset));
        }
        id.parse::<Tz>()
            .map(TimeZoneSpec::Named)
            .map_err(|_| FormatError::UnknownTimeZone(s.to_string()))
    }
}

/// Wall-clock fields of an instant in the output zone
struct ZonedTime {
    local: NaiveDateTime,
    offset_secs: i32,
    abbreviation: Option<String>,
}

/// A date/time formatter bound to one locale and option bag
#[derive(Debug, Clone)]
pub struct DateTimeFormat {
    locale: Arc<ResolvedLocale>,
    options: DateTimeFormatOptions,
    zone: TimeZoneSpec,
    pattern: String,
    tokens: Vec<PatternToken>,
}

impl DateTimeFormat {
    pub fn new(locale: Arc<ResolvedLocale>, options: &DateTimeFormatOptions) -> Self {
        let mut options = options.clone();
        if !options.has_fields() {
            options.year = Some(NumericWidth::Numeric);
            options.month = Some(MonthStyle::Numeric);
            options.day = Some(NumericWidth::Numeric);
        }
        let hour12 = options.hour12.unwrap_or_else(|| locale.data.hour12());
        options.hour12 = Some(hour12);

        let zone = match options.time_zone.as_deref() {
            None => TimeZoneSpec::Local,
            Some(id) => id.parse::<TimeZoneSpec>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "falling back to UTC");
                TimeZoneSpec::Utc
            }),
        };

        let pattern = build_pattern(&locale.data, &options, hour12);
        let tokens = match parse_date_pattern(&pattern) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::error!(locale = %locale.tag, error = %e, "unusable date pattern");
                parse_date_pattern(FALLBACK_PATTERN).unwrap_or_default()
            }
        };
        let tokens = tokens
            .into_iter()
            .map(|token| match token {
                PatternToken::Field { symbol, width } => PatternToken::Field {
                    symbol,
                    width: requested_width(symbol, width, &options),
                },
                literal => literal,
            })
            .collect();

        Self {
            locale,
            options,
            zone,
            pattern,
            tokens,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale.tag
    }

    /// Options after defaults were filled in
    pub fn resolved_options(&self) -> &DateTimeFormatOptions {
        &self.options
    }

    /// Locale pattern selected for the requested fields
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn time_zone(&self) -> TimeZoneSpec {
        self.zone
    }

    /// Format an instant
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use locale_format::intl::{BuiltinIntl, IntlProvider};
    /// use locale_format::{DateTimeFormatOptions, MonthStyle, NumericWidth};
    ///
    /// let options = DateTimeFormatOptions {
    ///     year: Some(NumericWidth::Numeric),
    ///     month: Some(MonthStyle::Long),
    ///     day: Some(NumericWidth::Numeric),
    ///     ..DateTimeFormatOptions::default()
    /// }
    /// .with_time_zone("UTC");
    ///
    /// let format = BuiltinIntl::new().date_time_format("en-US", &options);
    /// let instant = Utc.with_ymd_and_hms(2025, 7, 15, 8, 0, 0).unwrap();
    /// assert_eq!(format.format(instant), "July 15, 2025");
    /// ```
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let zoned = self.localize(instant);
        let data = &self.locale.data;
        let mut out = String::new();

        for token in &self.tokens {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Field { symbol, width } => {
                    out.push_str(&self.render_field(data, &zoned, *symbol, *width))
                }
            }
        }
        out
    }

    fn localize(&self, instant: DateTime<Utc>) -> ZonedTime {
        match &self.zone {
            TimeZoneSpec::Local => {
                let dt = instant.with_timezone(&Local);
                ZonedTime {
                    local: dt.naive_local(),
                    offset_secs: dt.offset().local_minus_utc(),
                    abbreviation: None,
                }
            }
            TimeZoneSpec::Utc => ZonedTime {
                local: instant.naive_utc(),
                offset_secs: 0,
                abbreviation: None,
            },
            TimeZoneSpec::Fixed(offset) => ZonedTime {
                local: instant.with_timezone(offset).naive_local(),
                offset_secs: offset.local_minus_utc(),
                abbreviation: None,
            },
            TimeZoneSpec::Named(tz) => {
                let dt = instant.with_timezone(tz);
                ZonedTime {
                    local: dt.naive_local(),
                    offset_secs: dt.offset().fix().local_minus_utc(),
                    abbreviation: Some(dt.offset().abbreviation().to_string()),
                }
            }
        }
    }

    fn render_field(&self, data: &LocaleData, zoned: &ZonedTime, symbol: char, width: usize) -> String {
        let local = &zoned.local;
        match symbol {
            'y' | 'u' => {
                if width == 2 {
                    format!("{:02}", local.year().rem_euclid(100))
                } else {
                    format!("{:0width$}", local.year())
                }
            }
            'M' | 'L' => {
                let style = match width {
                    3 => Some(MonthStyle::Short),
                    4 => Some(MonthStyle::Long),
                    5 => Some(MonthStyle::Narrow),
                    _ => None,
                };
                let index = local.month0() as usize;
                style
                    .and_then(|style| data.month_names(style))
                    .and_then(|names| names.get(index).cloned())
                    .unwrap_or_else(|| pad(local.month(), width.min(2)))
            }
            'd' => pad(local.day(), width),
            'h' => pad(
                match local.hour() % 12 {
                    0 => 12,
                    h => h,
                },
                width,
            ),
            'H' => pad(local.hour(), width),
            'K' => pad(local.hour() % 12, width),
            'k' => pad(
                match local.hour() {
                    0 => 24,
                    h => h,
                },
                width,
            ),
            'm' => pad(local.minute(), width),
            's' => pad(local.second(), width),
            'a' => {
                let marker = if local.hour() < 12 { data.am() } else { data.pm() };
                marker.to_string()
            }
            'z' | 'v' | 'O' => self.zone_name(data, zoned, width >= 4),
            _ => String::new(),
        }
    }

    fn zone_name(&self, data: &LocaleData, zoned: &ZonedTime, long: bool) -> String {
        if self.zone == TimeZoneSpec::Utc {
            return data.utc_name(long).to_string();
        }
        if !long {
            if let Some(abbreviation) = zoned
                .abbreviation
                .as_deref()
                .filter(|a| a.chars().all(|c| c.is_ascii_alphabetic()))
            {
                return abbreviation.to_string();
            }
        }
        gmt_offset_name(data, zoned.offset_secs, long)
    }
}

fn pad(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

/// `GMT+5:30` (short) or `GMT+05:30` (long); `GMT` for a zero offset
fn gmt_offset_name(data: &LocaleData, offset_secs: i32, long: bool) -> String {
    if offset_secs == 0 {
        return data.gmt_zero().to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let total_minutes = offset_secs.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    let offset = if long {
        format!("{sign}{hours:02}:{minutes:02}")
    } else if minutes == 0 {
        format!("{sign}{hours}")
    } else {
        format!("{sign}{hours}:{minutes:02}")
    };
    data.gmt_format().replace("{0}", &offset)
}

/// Locale pattern for the requested fields, date and time glued together
fn build_pattern(data: &LocaleData, options: &DateTimeFormatOptions, hour12: bool) -> String {
    let zone_field = options.time_zone_name.map(|style| match style {
        TimeZoneNameStyle::Short => "z",
        TimeZoneNameStyle::Long => "zzzz",
    });

    let date = date_pattern(data, options);
    let time = time_pattern(data, options, hour12).map(|time| match zone_field {
        Some(zone) => format!("{time} {zone}"),
        None => time,
    });

    match (date, time) {
        (Some(date), Some(time)) => glue(data.date_time_glue(options.month), &date, &time),
        (Some(date), None) => match zone_field {
            Some(zone) => glue(data.zone_glue(), &date, zone),
            None => date,
        },
        (None, Some(time)) => time,
        (None, None) => zone_field.unwrap_or_default().to_string(),
    }
}

fn glue(pattern: &str, date: &str, time: &str) -> String {
    pattern.replace("{0}", time).replace("{1}", date)
}

fn date_pattern(data: &LocaleData, options: &DateTimeFormatOptions) -> Option<String> {
    let month = match options.month {
        None => "",
        Some(MonthStyle::Numeric | MonthStyle::TwoDigit) => "M",
        Some(MonthStyle::Short | MonthStyle::Narrow) => "MMM",
        Some(MonthStyle::Long) => "MMMM",
    };
    let year = if options.year.is_some() { "y" } else { "" };
    let day = if options.day.is_some() { "d" } else { "" };

    let skeleton = format!("{year}{month}{day}");
    if skeleton.is_empty() {
        return None;
    }
    if let Some(pattern) = data.date_format(&skeleton) {
        return Some(pattern.to_string());
    }

    // Drop the unrequested fields from the full date
    let full = format!("y{}d", if month.is_empty() { "M" } else { month });
    let pattern = data.date_format(&full).unwrap_or("M/d/y");
    let mut keep = Vec::new();
    if options.year.is_some() {
        keep.push('y');
    }
    if options.month.is_some() {
        keep.extend(['M', 'L']);
    }
    if options.day.is_some() {
        keep.push('d');
    }
    Some(reduce_pattern(pattern, &keep))
}

fn time_pattern(data: &LocaleData, options: &DateTimeFormatOptions, hour12: bool) -> Option<String> {
    let hour = match (options.hour, hour12) {
        (None, _) => "",
        (Some(_), true) => "h",
        (Some(_), false) => "H",
    };
    let minute = if options.minute.is_some() { "m" } else { "" };
    let second = if options.second.is_some() { "s" } else { "" };

    let skeleton = format!("{hour}{minute}{second}");
    if skeleton.is_empty() {
        return None;
    }
    if let Some(pattern) = data.time_format(&skeleton) {
        return Some(pattern.to_string());
    }

    let full = if hour12 { "hms" } else { "Hms" };
    let pattern = data.time_format(full).unwrap_or("HH:mm:ss");
    let mut keep = Vec::new();
    if options.hour.is_some() {
        keep.extend(['h', 'H', 'K', 'k', 'a']);
    }
    if options.minute.is_some() {
        keep.push('m');
    }
    if options.second.is_some() {
        keep.push('s');
    }
    Some(reduce_pattern(pattern, &keep))
}

/// Remove fields not in `keep`, along with the separators they leave behind
fn reduce_pattern(pattern: &str, keep: &[char]) -> String {
    let Ok(tokens) = parse_date_pattern(pattern) else {
        return pattern.to_string();
    };

    let mut reduced: Vec<PatternToken> = Vec::new();
    for token in tokens {
        match token {
            PatternToken::Field { symbol, .. } if !keep.contains(&symbol) => {}
            PatternToken::Literal(_)
                if matches!(reduced.last(), None | Some(PatternToken::Literal(_))) => {}
            token => reduced.push(token),
        }
    }
    if matches!(reduced.last(), Some(PatternToken::Literal(_))) {
        reduced.pop();
    }

    reduced.iter().map(serialize_token).collect()
}

fn serialize_token(token: &PatternToken) -> String {
    match token {
        PatternToken::Field { symbol, width } => std::iter::repeat_n(*symbol, *width).collect(),
        PatternToken::Literal(text) if text.chars().any(|c| c.is_ascii_alphabetic() || c == '\'') => {
            format!("'{}'", text.replace('\'', "''"))
        }
        PatternToken::Literal(text) => text.clone(),
    }
}

/// Field width after applying the requested `numeric`/`2-digit`/textual style
fn requested_width(symbol: char, width: usize, options: &DateTimeFormatOptions) -> usize {
    let two_digit = |field: Option<NumericWidth>| match field {
        Some(NumericWidth::TwoDigit) => 2,
        _ => width,
    };
    match symbol {
        'y' | 'u' => two_digit(options.year),
        'M' | 'L' => match options.month {
            Some(MonthStyle::TwoDigit) => 2,
            Some(MonthStyle::Numeric) => width.min(2),
            Some(MonthStyle::Short) => 3,
            Some(MonthStyle::Long) => 4,
            Some(MonthStyle::Narrow) => 5,
            None => width,
        },
        'd' => two_digit(options.day),
        'h' | 'H' | 'K' | 'k' => two_digit(options.hour),
        'm' => two_digit(options.minute),
        's' => two_digit(options.second),
        _ => width,
    }
}
