use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

/// A date string reduced to a wall-clock time plus how to anchor it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// Instant in UTC (date-only ISO forms and `Z` suffixes)
    Utc(NaiveDateTime),
    /// Wall-clock time at an explicit UTC offset
    Offset(DateTime<FixedOffset>),
    /// Wall-clock time with no offset, interpreted in the host zone
    Local(NaiveDateTime),
}

/// Parse a date string
///
/// Accepts the ISO 8601 subset used by ECMAScript (`2025-07-18`,
/// `2025-07-18T12:34:56.789Z`, `2025-07-18T12:34+01:00`, `+002025-07`),
/// RFC 2822 (`Tue, 15 Jul 2025 08:00:00 GMT`), and a few long-hand English
/// forms (`July 15, 2025`, `07/15/2025`). Returns `None` when nothing
/// matches or the fields are out of range.
pub fn parse_date_string(input: &str) -> Option<ParsedDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = iso_date_time.parse(trimmed) {
        return parsed;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(ParsedDate::Offset(dt));
    }

    const LONG_HAND: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%m/%d/%Y", "%d %B %Y"];
    LONG_HAND
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(ParsedDate::Local)
}

/// Parse a fixed UTC offset used as a time zone id: `+05:30`, `-0800`, `+05`
pub fn parse_utc_offset(input: &str) -> Option<FixedOffset> {
    let (sign, hours, minutes) = utc_offset.parse(input.trim()).ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    let secs = (hours * 3600 + minutes * 60) as i32;
    FixedOffset::east_opt(if sign == '-' { -secs } else { secs })
}

fn utc_offset(input: &mut &str) -> ModalResult<(char, u32, u32)> {
    (
        one_of(['+', '-']),
        fixed_digits(2),
        opt(preceded(opt(':'), fixed_digits(2))),
    )
        .map(|(sign, h, m)| (sign, h, m.unwrap_or(0)))
        .parse_next(input)
}

struct IsoFields {
    year: i32,
    month: u32,
    day: u32,
    time: Option<(u32, u32, u32, u32)>,
    offset: Option<i32>,
}

// Outer Option: syntax matched. Inner Option: fields were in range.
fn iso_date_time(input: &mut &str) -> ModalResult<Option<ParsedDate>> {
    (
        iso_year,
        opt(preceded('-', fixed_digits(2))),
        opt(preceded('-', fixed_digits(2))),
        opt(preceded(one_of(['T', 't', ' ']), iso_time)),
        opt(iso_offset),
    )
        .map(|(year, month, day, time, offset)| {
            build(IsoFields {
                year,
                month: month.unwrap_or(1),
                day: day.unwrap_or(1),
                time,
                offset,
            })
        })
        .parse_next(input)
}

fn iso_year(input: &mut &str) -> ModalResult<i32> {
    alt((
        (one_of(['+', '-']), fixed_digits(6)).map(|(sign, y)| {
            let y = y as i32;
            if sign == '-' { -y } else { y }
        }),
        fixed_digits(4).map(|y| y as i32),
    ))
    .parse_next(input)
}

fn iso_time(input: &mut &str) -> ModalResult<(u32, u32, u32, u32)> {
    (
        fixed_digits(2),
        preceded(':', fixed_digits(2)),
        opt(preceded(':', fixed_digits(2))),
        opt(preceded(one_of(['.', ',']), digit1)),
    )
        .map(|(h, m, s, frac): (u32, u32, Option<u32>, Option<&str>)| {
            (h, m, s.unwrap_or(0), frac.map(fraction_to_millis).unwrap_or(0))
        })
        .parse_next(input)
}

fn iso_offset(input: &mut &str) -> ModalResult<i32> {
    alt((
        one_of(['Z', 'z']).value(0),
        (
            one_of(['+', '-']),
            fixed_digits(2),
            opt(':'),
            fixed_digits(2),
        )
            .map(|(sign, h, _, m)| {
                let secs = (h * 3600 + m * 60) as i32;
                if sign == '-' { -secs } else { secs }
            }),
    ))
    .parse_next(input)
}

fn fixed_digits<'s>(count: usize) -> impl Parser<&'s str, u32, ErrMode<ContextError>> {
    take_while(count..=count, |c: char| c.is_ascii_digit())
        .try_map(|digits: &str| digits.parse::<u32>())
}

fn fraction_to_millis(frac: &str) -> u32 {
    let padded: String = frac.chars().chain("000".chars()).take(3).collect();
    padded.parse().unwrap_or(0)
}

fn build(fields: IsoFields) -> Option<ParsedDate> {
    let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)?;

    let Some((hour, minute, second, millis)) = fields.time else {
        // Date-only forms are UTC; an explicit offset still applies
        let naive = date.and_hms_opt(0, 0, 0)?;
        return anchor(naive, fields.offset.or(Some(0)));
    };

    // 24:00 is allowed and means the start of the following day
    let naive = if hour == 24 {
        if minute != 0 || second != 0 || millis != 0 {
            return None;
        }
        date.and_hms_opt(0, 0, 0)?.checked_add_signed(Duration::days(1))?
    } else {
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
        NaiveDateTime::new(date, time)
    };

    anchor(naive, fields.offset)
}

fn anchor(naive: NaiveDateTime, offset: Option<i32>) -> Option<ParsedDate> {
    match offset {
        None => Some(ParsedDate::Local(naive)),
        Some(0) => Some(ParsedDate::Utc(naive)),
        Some(secs) => {
            let offset = FixedOffset::east_opt(secs)?;
            naive
                .and_local_timezone(offset)
                .single()
                .map(ParsedDate::Offset)
        }
    }
}
