//! Reference-time layouts for the `time` template function.
//!
//! A layout is written as the reference instant `Mon Jan 2 15:04:05 MST 2006`
//! (offset `-0700`) would look in the desired format, e.g. `2006-01-02` or
//! `Jan _2 15:04`. Recognised tokens are replaced by the matching component of
//! the formatted time; everything else is copied verbatim.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const LONG_DAYS: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetStyle {
    /// `-07`
    Hours,
    /// `-0700`
    HoursMinutes,
    /// `-07:00`
    HoursColonMinutes,
    /// `-070000`
    Seconds,
    /// `-07:00:00`
    ColonSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    LongMonth,
    Month,
    NumMonth,
    ZeroMonth,
    LongWeekDay,
    WeekDay,
    Day,
    UnderDay,
    ZeroDay,
    UnderYearDay,
    ZeroYearDay,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    LongYear,
    Year,
    UpperMeridiem,
    LowerMeridiem,
    ZoneName,
    Offset { style: OffsetStyle, zulu: bool },
    Fraction { separator: char, digits: usize, trim: bool },
}

/// `0x` tokens, indexed by `x - 1`.
const ZERO_FIELDS: [Field; 6] = [
    Field::ZeroMonth,
    Field::ZeroDay,
    Field::ZeroHour12,
    Field::ZeroMinute,
    Field::ZeroSecond,
    Field::Year,
];

/// Formats `time` according to a reference-time layout.
pub fn format_time(time: &DateTime<FixedOffset>, layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() + 16);
    let mut rest = layout;
    // Token starts are always ASCII bytes, so slicing at them stays on char boundaries.
    while let Some((start, len, field)) = next_field(rest) {
        out.push_str(&rest[..start]);
        out.push_str(&field_text(time, field));
        rest = &rest[start + len..];
    }
    out.push_str(rest);
    out
}

fn starts_with_lower(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(|c| c.is_ascii_lowercase())
}

/// Finds the first token in `layout`, returning its byte offset, byte length and field.
fn next_field(layout: &str) -> Option<(usize, usize, Field)> {
    let bytes = layout.as_bytes();
    for i in 0..bytes.len() {
        let rest = &bytes[i..];
        let found = match rest[0] {
            b'J' if rest.starts_with(b"Jan") => {
                if rest.starts_with(b"January") {
                    Some((7, Field::LongMonth))
                } else if !starts_with_lower(&rest[3..]) {
                    Some((3, Field::Month))
                } else {
                    None
                }
            }
            b'M' if rest.starts_with(b"Mon") => {
                if rest.starts_with(b"Monday") {
                    Some((6, Field::LongWeekDay))
                } else if !starts_with_lower(&rest[3..]) {
                    Some((3, Field::WeekDay))
                } else {
                    None
                }
            }
            b'M' if rest.starts_with(b"MST") => Some((3, Field::ZoneName)),
            b'0' if rest.len() >= 2 && (b'1'..=b'6').contains(&rest[1]) => {
                Some((2, ZERO_FIELDS[usize::from(rest[1] - b'1')]))
            }
            b'0' if rest.starts_with(b"002") => Some((3, Field::ZeroYearDay)),
            b'1' if rest.starts_with(b"15") => Some((2, Field::Hour)),
            b'1' => Some((1, Field::NumMonth)),
            b'2' if rest.starts_with(b"2006") => Some((4, Field::LongYear)),
            b'2' => Some((1, Field::Day)),
            // `_2006` is a literal underscore followed by the year.
            b'_' if rest.starts_with(b"_2006") => return Some((i + 1, 4, Field::LongYear)),
            b'_' if rest.starts_with(b"_2") => Some((2, Field::UnderDay)),
            b'_' if rest.starts_with(b"__2") => Some((3, Field::UnderYearDay)),
            b'3' => Some((1, Field::Hour12)),
            b'4' => Some((1, Field::Minute)),
            b'5' => Some((1, Field::Second)),
            b'P' if rest.starts_with(b"PM") => Some((2, Field::UpperMeridiem)),
            b'p' if rest.starts_with(b"pm") => Some((2, Field::LowerMeridiem)),
            b'-' | b'Z' => offset_field(rest),
            b'.' | b',' => fraction_field(rest),
            _ => None,
        };
        if let Some((len, field)) = found {
            return Some((i, len, field));
        }
    }
    None
}

fn offset_field(rest: &[u8]) -> Option<(usize, Field)> {
    let zulu = rest[0] == b'Z';
    let tail = &rest[1..];
    let (len, style) = if tail.starts_with(b"070000") {
        (7, OffsetStyle::Seconds)
    } else if tail.starts_with(b"07:00:00") {
        (9, OffsetStyle::ColonSeconds)
    } else if tail.starts_with(b"0700") {
        (5, OffsetStyle::HoursMinutes)
    } else if tail.starts_with(b"07:00") {
        (6, OffsetStyle::HoursColonMinutes)
    } else if tail.starts_with(b"07") {
        (3, OffsetStyle::Hours)
    } else {
        return None;
    };
    Some((len, Field::Offset { style, zulu }))
}

fn fraction_field(rest: &[u8]) -> Option<(usize, Field)> {
    let digit = *rest.get(1)?;
    if digit != b'0' && digit != b'9' {
        return None;
    }
    let run = rest[1..].iter().take_while(|&&c| c == digit).count();
    // A run followed by another digit is not a fraction.
    if rest.get(1 + run).is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((
        1 + run,
        Field::Fraction { separator: char::from(rest[0]), digits: run, trim: digit == b'9' },
    ))
}

fn field_text(time: &DateTime<FixedOffset>, field: Field) -> String {
    let (is_pm, hour12) = time.hour12();
    match field {
        Field::LongMonth => LONG_MONTHS[time.month0() as usize].to_string(),
        Field::Month => SHORT_MONTHS[time.month0() as usize].to_string(),
        Field::NumMonth => time.month().to_string(),
        Field::ZeroMonth => format!("{:02}", time.month()),
        Field::LongWeekDay => {
            LONG_DAYS[time.weekday().num_days_from_sunday() as usize].to_string()
        }
        Field::WeekDay => SHORT_DAYS[time.weekday().num_days_from_sunday() as usize].to_string(),
        Field::Day => time.day().to_string(),
        Field::UnderDay => format!("{:>2}", time.day()),
        Field::ZeroDay => format!("{:02}", time.day()),
        Field::UnderYearDay => format!("{:>3}", time.ordinal()),
        Field::ZeroYearDay => format!("{:03}", time.ordinal()),
        Field::Hour => format!("{:02}", time.hour()),
        Field::Hour12 => hour12.to_string(),
        Field::ZeroHour12 => format!("{hour12:02}"),
        Field::Minute => time.minute().to_string(),
        Field::ZeroMinute => format!("{:02}", time.minute()),
        Field::Second => time.second().to_string(),
        Field::ZeroSecond => format!("{:02}", time.second()),
        Field::LongYear => {
            let year = time.year();
            if year < 0 {
                format!("-{:04}", year.unsigned_abs())
            } else {
                format!("{year:04}")
            }
        }
        Field::Year => format!("{:02}", time.year().rem_euclid(100)),
        Field::UpperMeridiem => if is_pm { "PM" } else { "AM" }.to_string(),
        Field::LowerMeridiem => if is_pm { "pm" } else { "am" }.to_string(),
        Field::ZoneName => {
            // Fixed offsets carry no abbreviation.
            if time.offset().local_minus_utc() == 0 {
                "UTC".to_string()
            } else {
                offset_text(time, OffsetStyle::HoursMinutes)
            }
        }
        Field::Offset { zulu: true, .. } if time.offset().local_minus_utc() == 0 => {
            "Z".to_string()
        }
        Field::Offset { style, .. } => offset_text(time, style),
        Field::Fraction { separator, digits, trim } => {
            fraction_text(time.nanosecond(), separator, digits, trim)
        }
    }
}

fn offset_text(time: &DateTime<FixedOffset>, style: OffsetStyle) -> String {
    let offset = time.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.unsigned_abs();
    let (hours, minutes, seconds) = (offset / 3600, offset / 60 % 60, offset % 60);
    match style {
        OffsetStyle::Hours => format!("{sign}{hours:02}"),
        OffsetStyle::HoursMinutes => format!("{sign}{hours:02}{minutes:02}"),
        OffsetStyle::HoursColonMinutes => format!("{sign}{hours:02}:{minutes:02}"),
        OffsetStyle::Seconds => format!("{sign}{hours:02}{minutes:02}{seconds:02}"),
        OffsetStyle::ColonSeconds => format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"),
    }
}

fn fraction_text(nanos: u32, separator: char, digits: usize, trim: bool) -> String {
    // Leap seconds are reported as nanos >= 1e9.
    let nanos = nanos.min(999_999_999);
    let digits = digits.min(9);
    let scaled = nanos / 10u32.pow((9 - digits) as u32);
    let mut text = format!("{scaled:0digits$}");
    if trim {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        if text.is_empty() {
            return text;
        }
    }
    text.insert(0, separator);
    text
}
