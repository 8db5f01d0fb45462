//! Datetime field records and the disabled-date vocabulary.

use chrono::{DateTime, Month, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::spec::SpecMeta;

/// Format used when a datetime spec does not name one.
pub const DEFAULT_DATETIME_FORMAT: &str = "YYYY-MM-DD";

/// Lowercase month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Lowercase weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Misspelling of Tuesday found in stored specs.
const LEGACY_TUESDAY: &str = "thuesday";

/// Spec of a datetime field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatetimeSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub calendar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<DisabledDate>,
}

fn default_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

impl Default for DatetimeSpec {
    fn default() -> Self {
        Self {
            meta: SpecMeta::default(),
            format: default_format(),
            calendar: false,
            min: None,
            max: None,
            placeholder: None,
            disabled: Vec::new(),
        }
    }
}

impl DatetimeSpec {
    pub fn new(title: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            meta: SpecMeta::new(title),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_disabled(mut self, disabled: DisabledDate) -> Self {
        self.disabled.push(disabled);
        self
    }
}

/// Current value of a datetime field.
///
/// `iso` is the UTC instant, `value` that instant rendered with `format`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatetimeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl DatetimeData {
    pub fn from_value(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            iso: None,
            value: Some(value.into()),
            format: Some(format.into()),
        }
    }

    pub fn from_iso(iso: impl Into<String>) -> Self {
        Self {
            iso: Some(iso.into()),
            value: None,
            format: None,
        }
    }
}

/// One entry of a datetime spec's `disabled` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDisabledDate", into = "RawDisabledDate")]
pub enum DisabledDate {
    /// An exact instant.
    Instant(DateTime<Utc>),
    /// A whole calendar day.
    Day(NaiveDate),
    Year(i32),
    Month(Month),
    Weekday(Weekday),
    /// Monday to Friday.
    Week,
    /// Saturday and Sunday.
    Weekend,
}

impl DisabledDate {
    /// Parse the textual form used in stored specs.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let text = raw.trim().to_ascii_lowercase();

        if text == "week" {
            return Ok(DisabledDate::Week);
        }
        if text == "weekend" {
            return Ok(DisabledDate::Weekend);
        }
        if let Some(idx) = MONTH_NAMES.iter().position(|name| *name == text) {
            return Month::try_from(idx as u8 + 1)
                .map(DisabledDate::Month)
                .map_err(|_| TypesError::InvalidDisabledDate(raw.to_string()));
        }
        if text == LEGACY_TUESDAY {
            return Ok(DisabledDate::Weekday(Weekday::Tue));
        }
        if let Some(idx) = WEEKDAY_NAMES.iter().position(|name| *name == text) {
            return Ok(DisabledDate::Weekday(weekday_from_sunday(idx as u32)));
        }
        if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = text.parse() {
                return Ok(DisabledDate::Year(year));
            }
        }
        if let Ok(day) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            return Ok(DisabledDate::Day(day));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw.trim()) {
            return Ok(DisabledDate::Instant(instant.with_timezone(&Utc)));
        }

        Err(TypesError::InvalidDisabledDate(raw.to_string()))
    }
}

/// Weekday for a 0-based index where 0 is Sunday.
pub fn weekday_from_sunday(idx: u32) -> Weekday {
    match idx % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDisabledDate {
    Year(i64),
    Text(String),
}

impl TryFrom<RawDisabledDate> for DisabledDate {
    type Error = TypesError;

    fn try_from(raw: RawDisabledDate) -> Result<Self, Self::Error> {
        match raw {
            RawDisabledDate::Year(year) => i32::try_from(year)
                .map(DisabledDate::Year)
                .map_err(|_| TypesError::InvalidDisabledDate(year.to_string())),
            RawDisabledDate::Text(text) => DisabledDate::parse(&text),
        }
    }
}

impl From<DisabledDate> for RawDisabledDate {
    fn from(disabled: DisabledDate) -> Self {
        match disabled {
            DisabledDate::Instant(instant) => RawDisabledDate::Text(
                instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            ),
            DisabledDate::Day(day) => RawDisabledDate::Text(day.format("%Y-%m-%d").to_string()),
            DisabledDate::Year(year) => RawDisabledDate::Year(year.into()),
            DisabledDate::Month(month) => {
                RawDisabledDate::Text(MONTH_NAMES[month.number_from_month() as usize - 1].to_string())
            }
            DisabledDate::Weekday(weekday) => RawDisabledDate::Text(
                WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize].to_string(),
            ),
            DisabledDate::Week => RawDisabledDate::Text("week".to_string()),
            DisabledDate::Weekend => RawDisabledDate::Text("weekend".to_string()),
        }
    }
}
