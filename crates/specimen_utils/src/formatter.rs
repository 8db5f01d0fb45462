//! Token-based date formatting and parsing.
//!
//! Formats are strings such as `YYYY-MM-DD HH:mm`. Recognized tokens:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `YYYY` `YY` | year, two-digit year |
//! | `M` `MM` `MMM` `MMMM` | month number, padded, short name, full name |
//! | `D` `DD` | day of month |
//! | `d` `dd` `ddd` `dddd` | weekday number (Sunday is 0), min, short, full name |
//! | `H` `HH` `h` `hh` | 24-hour and 12-hour clock |
//! | `m` `mm` `s` `ss` | minutes, seconds |
//! | `S` `SS` `SSS` | tenths, hundredths, milliseconds |
//! | `A` `a` | `AM`/`PM`, `am`/`pm` |
//! | `Z` `ZZ` | UTC offset as `+00:00`, `+0000` |
//! | `X` `x` | Unix timestamp in seconds, milliseconds |
//!
//! Text inside square brackets is copied verbatim. All instants are UTC.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use regex::Regex;
use specimen_types::datetime::{MONTH_NAMES, WEEKDAY_NAMES};

use crate::error::{UtilsError, UtilsResult};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[([^\]]*)\]|YYYY|YY|MMMM|MMM|MM|M|DD|D|dddd|ddd|dd|d|HH|H|hh|h|mm|m|ss|s|SSS|SS|S|A|a|ZZ|Z|X|x",
    )
    .unwrap()
});

/// Parses and formats instants with a format string.
#[cfg_attr(test, mockall::automock)]
pub trait DateFormatter {
    fn parse(&self, value: &str, format: &str) -> UtilsResult<DateTime<Utc>>;

    fn format(&self, date: &DateTime<Utc>, format: &str) -> String;

    /// Instant used when a field has no value, and to fill components a
    /// format leaves out.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Default [`DateFormatter`] understanding the tokens listed in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFormatter {
    now: Option<DateTime<Utc>>,
}

impl TokenFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter whose clock is pinned to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'f> {
    Literal(&'f str),
    Year,
    ShortYear,
    Month,
    MonthPadded,
    MonthShort,
    MonthLong,
    Day,
    DayPadded,
    WeekdayNumber,
    WeekdayMin,
    WeekdayShort,
    WeekdayLong,
    Hour,
    HourPadded,
    Hour12,
    Hour12Padded,
    Minute,
    MinutePadded,
    Second,
    SecondPadded,
    Fraction(u8),
    Meridiem,
    MeridiemLower,
    Offset,
    OffsetCompact,
    Timestamp,
    TimestampMillis,
}

fn tokenize(format: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(format) {
        let Some(found) = caps.get(0) else {
            continue;
        };
        if found.start() > last {
            tokens.push(Token::Literal(&format[last..found.start()]));
        }
        last = found.end();

        if let Some(escaped) = caps.get(1) {
            tokens.push(Token::Literal(escaped.as_str()));
            continue;
        }

        tokens.push(match found.as_str() {
            "YYYY" => Token::Year,
            "YY" => Token::ShortYear,
            "M" => Token::Month,
            "MM" => Token::MonthPadded,
            "MMM" => Token::MonthShort,
            "MMMM" => Token::MonthLong,
            "D" => Token::Day,
            "DD" => Token::DayPadded,
            "d" => Token::WeekdayNumber,
            "dd" => Token::WeekdayMin,
            "ddd" => Token::WeekdayShort,
            "dddd" => Token::WeekdayLong,
            "H" => Token::Hour,
            "HH" => Token::HourPadded,
            "h" => Token::Hour12,
            "hh" => Token::Hour12Padded,
            "m" => Token::Minute,
            "mm" => Token::MinutePadded,
            "s" => Token::Second,
            "ss" => Token::SecondPadded,
            "S" => Token::Fraction(1),
            "SS" => Token::Fraction(2),
            "SSS" => Token::Fraction(3),
            "A" => Token::Meridiem,
            "a" => Token::MeridiemLower,
            "Z" => Token::Offset,
            "ZZ" => Token::OffsetCompact,
            "X" => Token::Timestamp,
            "x" => Token::TimestampMillis,
            other => Token::Literal(other),
        });
    }

    if last < format.len() {
        tokens.push(Token::Literal(&format[last..]));
    }

    tokens
}

fn capitalize(name: &str, len: usize) -> String {
    name.chars()
        .take(len)
        .enumerate()
        .map(|(idx, c)| if idx == 0 { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn render(date: &DateTime<Utc>, token: Token<'_>) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    let hour12 = match date.hour() % 12 {
        0 => 12,
        h => h,
    };
    let millis = date.timestamp_subsec_millis().min(999);

    match token {
        Token::Literal(text) => text.to_string(),
        Token::Year => format!("{:04}", date.year()),
        Token::ShortYear => format!("{:02}", date.year().rem_euclid(100)),
        Token::Month => date.month().to_string(),
        Token::MonthPadded => format!("{:02}", date.month()),
        Token::MonthShort => capitalize(month, 3),
        Token::MonthLong => capitalize(month, usize::MAX),
        Token::Day => date.day().to_string(),
        Token::DayPadded => format!("{:02}", date.day()),
        Token::WeekdayNumber => date.weekday().num_days_from_sunday().to_string(),
        Token::WeekdayMin => capitalize(weekday, 2),
        Token::WeekdayShort => capitalize(weekday, 3),
        Token::WeekdayLong => capitalize(weekday, usize::MAX),
        Token::Hour => date.hour().to_string(),
        Token::HourPadded => format!("{:02}", date.hour()),
        Token::Hour12 => hour12.to_string(),
        Token::Hour12Padded => format!("{:02}", hour12),
        Token::Minute => date.minute().to_string(),
        Token::MinutePadded => format!("{:02}", date.minute()),
        Token::Second => date.second().to_string(),
        Token::SecondPadded => format!("{:02}", date.second()),
        Token::Fraction(1) => (millis / 100).to_string(),
        Token::Fraction(2) => format!("{:02}", millis / 10),
        Token::Fraction(_) => format!("{:03}", millis),
        Token::Meridiem => (if date.hour() < 12 { "AM" } else { "PM" }).to_string(),
        Token::MeridiemLower => (if date.hour() < 12 { "am" } else { "pm" }).to_string(),
        Token::Offset => "+00:00".to_string(),
        Token::OffsetCompact => "+0000".to_string(),
        Token::Timestamp => date.timestamp().to_string(),
        Token::TimestampMillis => date.timestamp_millis().to_string(),
    }
}

/// Read position over the input of a parse.
struct Cursor<'v> {
    rest: &'v str,
}

impl<'v> Cursor<'v> {
    fn digits(&mut self, min: usize, max: usize) -> Option<i64> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        digits.parse().ok()
    }

    fn signed(&mut self) -> Option<i64> {
        let negative = self.eat('-');
        self.digits(1, 18).map(|n| if negative { -n } else { n })
    }

    fn letters(&mut self, max: usize) -> Option<&'v str> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if len == 0 {
            return None;
        }
        let (word, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(word)
    }

    fn literal(&mut self, text: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(text)?;
        Some(())
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn month_name(&mut self, short: bool) -> Option<i64> {
        let word = self.letters(if short { 3 } else { 9 })?.to_ascii_lowercase();
        let idx = MONTH_NAMES.iter().position(|name| {
            if short {
                word.len() == 3 && name.starts_with(&word)
            } else {
                *name == word
            }
        })?;
        Some(idx as i64 + 1)
    }

    /// Offset in minutes east of UTC.
    fn offset(&mut self) -> Option<i64> {
        if self.eat('Z') || self.eat('z') {
            return Some(0);
        }
        let sign = if self.eat('+') {
            1
        } else if self.eat('-') {
            -1
        } else {
            return None;
        };
        let hours = self.digits(2, 2)?;
        self.eat(':');
        let minutes = self.digits(2, 2)?;
        Some(sign * (hours * 60 + minutes))
    }
}

/// Date components in most to least significant order.
const YEAR: usize = 0;
const MONTH: usize = 1;
const DAY: usize = 2;
const HOUR: usize = 3;
const MINUTE: usize = 4;
const SECOND: usize = 5;
const MILLI: usize = 6;

const MINIMUMS: [i64; 7] = [1970, 1, 1, 0, 0, 0, 0];

#[derive(Debug, Default)]
struct Parsed {
    parts: [Option<i64>; 7],
    pm: Option<bool>,
    offset: i64,
    timestamp: Option<DateTime<Utc>>,
}

impl TokenFormatter {
    fn read(&self, value: &str, tokens: &[Token<'_>]) -> Option<Parsed> {
        let mut cursor = Cursor { rest: value };
        let mut parsed = Parsed::default();

        for token in tokens {
            match *token {
                Token::Literal(text) => cursor.literal(text)?,
                Token::Year => parsed.parts[YEAR] = Some(cursor.digits(4, 4)?),
                Token::ShortYear => {
                    let year = cursor.digits(2, 2)?;
                    parsed.parts[YEAR] = Some(if year > 68 { 1900 + year } else { 2000 + year });
                }
                Token::Month => parsed.parts[MONTH] = Some(cursor.digits(1, 2)?),
                Token::MonthPadded => parsed.parts[MONTH] = Some(cursor.digits(2, 2)?),
                Token::MonthShort => parsed.parts[MONTH] = Some(cursor.month_name(true)?),
                Token::MonthLong => parsed.parts[MONTH] = Some(cursor.month_name(false)?),
                Token::Day => parsed.parts[DAY] = Some(cursor.digits(1, 2)?),
                Token::DayPadded => parsed.parts[DAY] = Some(cursor.digits(2, 2)?),
                Token::WeekdayNumber => {
                    cursor.digits(1, 1)?;
                }
                Token::WeekdayMin | Token::WeekdayShort | Token::WeekdayLong => {
                    cursor.letters(9)?;
                }
                Token::Hour | Token::Hour12 => parsed.parts[HOUR] = Some(cursor.digits(1, 2)?),
                Token::HourPadded | Token::Hour12Padded => {
                    parsed.parts[HOUR] = Some(cursor.digits(2, 2)?)
                }
                Token::Minute => parsed.parts[MINUTE] = Some(cursor.digits(1, 2)?),
                Token::MinutePadded => parsed.parts[MINUTE] = Some(cursor.digits(2, 2)?),
                Token::Second => parsed.parts[SECOND] = Some(cursor.digits(1, 2)?),
                Token::SecondPadded => parsed.parts[SECOND] = Some(cursor.digits(2, 2)?),
                Token::Fraction(width) => {
                    let width = usize::from(width);
                    let fraction = cursor.digits(width, width)?;
                    parsed.parts[MILLI] = Some(fraction * 10_i64.pow(3 - width as u32));
                }
                Token::Meridiem | Token::MeridiemLower => {
                    parsed.pm = match cursor.letters(2)?.to_ascii_lowercase().as_str() {
                        "am" => Some(false),
                        "pm" => Some(true),
                        _ => return None,
                    };
                }
                Token::Offset | Token::OffsetCompact => parsed.offset = cursor.offset()?,
                Token::Timestamp => {
                    parsed.timestamp = Some(DateTime::from_timestamp(cursor.signed()?, 0)?)
                }
                Token::TimestampMillis => {
                    parsed.timestamp = Some(DateTime::from_timestamp_millis(cursor.signed()?)?)
                }
            }
        }

        if !cursor.rest.trim().is_empty() {
            return None;
        }

        Some(parsed)
    }

    fn build(&self, parsed: Parsed) -> Option<DateTime<Utc>> {
        if let Some(timestamp) = parsed.timestamp {
            return Some(timestamp);
        }

        let mut parts = parsed.parts;
        if let (Some(hour), Some(pm)) = (parts[HOUR], parsed.pm) {
            parts[HOUR] = Some(match (pm, hour) {
                (true, h) if h < 12 => h + 12,
                (false, 12) => 0,
                (_, h) => h,
            });
        }

        let now = self.now();
        let current = [
            i64::from(now.year()),
            i64::from(now.month()),
            i64::from(now.day()),
            i64::from(now.hour()),
            i64::from(now.minute()),
            i64::from(now.second()),
            i64::from(now.timestamp_subsec_millis().min(999)),
        ];

        let mut values = [0_i64; 7];
        let mut seen = false;
        for (idx, part) in parts.iter().enumerate() {
            values[idx] = match part {
                Some(value) => {
                    seen = true;
                    *value
                }
                None if seen => MINIMUMS[idx],
                None => current[idx],
            };
        }

        let unsigned = |idx: usize| u32::try_from(values[idx]).ok();
        let naive = NaiveDate::from_ymd_opt(
            i32::try_from(values[YEAR]).ok()?,
            unsigned(MONTH)?,
            unsigned(DAY)?,
        )?
        .and_hms_milli_opt(
            unsigned(HOUR)?,
            unsigned(MINUTE)?,
            unsigned(SECOND)?,
            unsigned(MILLI)?,
        )?;

        Some(Utc.from_utc_datetime(&naive) - Duration::minutes(parsed.offset))
    }
}

impl DateFormatter for TokenFormatter {
    fn parse(&self, value: &str, format: &str) -> UtilsResult<DateTime<Utc>> {
        let tokens = tokenize(format);
        self.read(value.trim(), &tokens)
            .and_then(|parsed| self.build(parsed))
            .ok_or_else(|| UtilsError::DateParse {
                value: value.to_string(),
                format: format.to_string(),
            })
    }

    fn format(&self, date: &DateTime<Utc>, format: &str) -> String {
        tokenize(format)
            .into_iter()
            .map(|token| render(date, token))
            .collect()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}
