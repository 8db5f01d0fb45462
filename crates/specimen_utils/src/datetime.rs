//! Accessor over datetime field data.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc, Weekday};
use regex::Regex;
use specimen_types::{DatetimeData, DatetimeSpec, DisabledDate};
use tracing::debug;

use crate::error::{UtilsError, UtilsResult};
use crate::formatter::{DateFormatter, TokenFormatter};

static DATE_TOKENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(d{1,4}|D{1,2}|M{1,4}|Y{2,4})").unwrap());

static TIME_TOKENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(h{1,2}|H{1,2}|m{1,2}|s{1,2}|S{1,3})").unwrap());

/// Wraps a datetime spec and its data.
///
/// The parsed instant and the data's `iso`, `value` and `format` are kept in
/// step: every [`set`](DatetimeField::set) recomputes all of them, and the
/// data's format is always the spec's.
///
/// ```rust
/// use specimen_types::{DatetimeData, DatetimeSpec};
/// use specimen_utils::DatetimeField;
///
/// let spec = DatetimeSpec::new("Delivery", "DD/MM/YYYY");
/// let mut data = DatetimeData::from_iso("2023-10-23T08:30:00Z");
///
/// let field = DatetimeField::new(&spec, &mut data).unwrap();
/// assert_eq!(field.to_string(), "23/10/2023");
/// assert_eq!(field.format("HH:mm"), "08:30");
/// ```
pub struct DatetimeField<'a, F: DateFormatter = TokenFormatter> {
    spec: &'a DatetimeSpec,
    data: &'a mut DatetimeData,
    date: DateTime<Utc>,
    formatter: F,
}

impl<'a> DatetimeField<'a> {
    pub fn new(spec: &'a DatetimeSpec, data: &'a mut DatetimeData) -> UtilsResult<Self> {
        Self::with_formatter(spec, data, TokenFormatter::new())
    }

    /// Parse `value` written in `format`.
    pub fn parse(value: &str, format: &str) -> UtilsResult<DateTime<Utc>> {
        TokenFormatter::new().parse(value, format)
    }

    /// Whether `format` renders any date component.
    pub fn is_date_needed(format: &str) -> bool {
        DATE_TOKENS_RE.is_match(format)
    }

    /// Whether `format` renders any time component.
    pub fn is_time_needed(format: &str) -> bool {
        TIME_TOKENS_RE.is_match(format)
    }

    /// Whether `date` matches any entry of `disabled`.
    pub fn is_date_disabled(date: &DateTime<Utc>, disabled: &[DisabledDate]) -> bool {
        disabled.iter().any(|entry| matches_disabled(date, entry))
    }
}

fn matches_disabled(date: &DateTime<Utc>, entry: &DisabledDate) -> bool {
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

    match entry {
        DisabledDate::Instant(instant) => instant == date,
        DisabledDate::Day(day) => date.date_naive() == *day,
        DisabledDate::Year(year) => date.year() == *year,
        DisabledDate::Month(month) => date.month() == month.number_from_month(),
        DisabledDate::Weekday(weekday) => date.weekday() == *weekday,
        DisabledDate::Week => !weekend,
        DisabledDate::Weekend => weekend,
    }
}

/// Render `date` as a UTC ISO 8601 string with milliseconds.
pub fn to_iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO 8601 instant. Date-only and offset-less forms are read as UTC.
pub fn parse_iso(iso: &str) -> UtilsResult<DateTime<Utc>> {
    let iso = iso.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(iso) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| UtilsError::InvalidIso(iso.to_string()))
}

impl<'a, F: DateFormatter> DatetimeField<'a, F> {
    pub fn with_formatter(
        spec: &'a DatetimeSpec,
        data: &'a mut DatetimeData,
        formatter: F,
    ) -> UtilsResult<Self> {
        let date = resolve(&formatter, data)?;
        let mut field = Self {
            spec,
            data,
            date,
            formatter,
        };
        field.set_date(date);

        Ok(field)
    }

    /// Reset from `data`: `value` with `format` when both are present, else
    /// `iso`, else the current instant.
    ///
    /// On error nothing changes.
    pub fn set(&mut self, data: &DatetimeData) -> UtilsResult<()> {
        let date = resolve(&self.formatter, data)?;
        self.set_date(date);
        Ok(())
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
        self.data.iso = Some(to_iso(&date));
        self.data.format = Some(self.spec.format.clone());
        self.data.value = Some(self.formatter.format(&date, &self.spec.format));
    }

    pub fn spec(&self) -> &'a DatetimeSpec {
        self.spec
    }

    pub fn data(&self) -> &DatetimeData {
        &*self.data
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn format(&self, format: &str) -> String {
        self.formatter.format(&self.date, format)
    }

    pub fn needs_date(&self) -> bool {
        DatetimeField::is_date_needed(&self.spec.format)
    }

    pub fn needs_time(&self) -> bool {
        DatetimeField::is_time_needed(&self.spec.format)
    }

    pub fn is_disabled(&self) -> bool {
        !self.spec.disabled.is_empty()
            && DatetimeField::is_date_disabled(&self.date, &self.spec.disabled)
    }
}

/// A data field that is set and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

fn resolve<F: DateFormatter>(formatter: &F, data: &DatetimeData) -> UtilsResult<DateTime<Utc>> {
    if let (Some(value), Some(format)) = (present(&data.value), present(&data.format)) {
        return formatter.parse(value, format);
    }
    if let Some(iso) = present(&data.iso) {
        return parse_iso(iso);
    }

    debug!("Datetime data is empty, using current instant");
    Ok(formatter.now())
}

impl<F: DateFormatter> fmt::Display for DatetimeField<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&self.spec.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::MockDateFormatter;
    use chrono::Month;

    fn instant(iso: &str) -> DateTime<Utc> {
        parse_iso(iso).unwrap()
    }

    #[test]
    fn test_round_trip_value() {
        let spec = DatetimeSpec::new("Day", "YYYY-MM-DD");
        let mut data = DatetimeData::from_value("2023-10-23", "YYYY-MM-DD");

        let field = DatetimeField::new(&spec, &mut data).unwrap();
        assert_eq!(field.to_string(), "2023-10-23");
        assert_eq!(data.iso.as_deref(), Some("2023-10-23T00:00:00.000Z"));
        assert_eq!(data.value.as_deref(), Some("2023-10-23"));
    }

    #[test]
    fn test_format_forced_to_spec() {
        let spec = DatetimeSpec::new("Day", "YYYY-MM-DD");
        let mut data = DatetimeData::from_value("23/10/2023", "DD/MM/YYYY");

        DatetimeField::new(&spec, &mut data).unwrap();
        assert_eq!(data.format.as_deref(), Some("YYYY-MM-DD"));
        assert_eq!(data.value.as_deref(), Some("2023-10-23"));
    }

    #[test]
    fn test_iso_and_now_fallbacks() {
        let spec = DatetimeSpec::new("Time", "HH:mm");

        let mut data = DatetimeData::from_iso("2023-10-23T12:34:56.000Z");
        let field = DatetimeField::new(&spec, &mut data).unwrap();
        assert_eq!(field.to_string(), "12:34");

        let now = instant("2024-02-29T09:15:00Z");
        let mut data = DatetimeData::default();
        let field = DatetimeField::with_formatter(&spec, &mut data, TokenFormatter::at(now)).unwrap();
        assert_eq!(field.date(), now);
        assert_eq!(data.iso.as_deref(), Some("2024-02-29T09:15:00.000Z"));
        assert_eq!(data.value.as_deref(), Some("09:15"));
    }

    #[test]
    fn test_empty_strings_fall_through_to_iso() {
        let spec = DatetimeSpec::new("Day", "YYYY-MM-DD");
        let mut data = DatetimeData {
            iso: Some("2023-10-23T00:00:00.000Z".to_string()),
            value: Some(String::new()),
            format: Some("YYYY-MM-DD".to_string()),
        };

        let field = DatetimeField::new(&spec, &mut data).unwrap();
        assert_eq!(field.to_string(), "2023-10-23");

        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("x".to_string())), Some("x"));
        assert_eq!(present(&None), None);
    }

    #[test]
    fn test_set_recomputes_everything() {
        let spec = DatetimeSpec::new("Day", "D MMM YYYY");
        let mut data = DatetimeData::from_iso("2023-10-23");
        let mut field = DatetimeField::new(&spec, &mut data).unwrap();

        field
            .set(&DatetimeData::from_value("01/02/2024", "DD/MM/YYYY"))
            .unwrap();
        assert_eq!(field.date(), instant("2024-02-01T00:00:00Z"));
        assert_eq!(field.data().value.as_deref(), Some("1 Feb 2024"));

        let err = field.set(&DatetimeData::from_iso("yesterday")).unwrap_err();
        assert!(matches!(err, UtilsError::InvalidIso(_)));
        assert_eq!(field.data().value.as_deref(), Some("1 Feb 2024"));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let spec = DatetimeSpec::new("Day", "YYYY-MM-DD");
        let mut data = DatetimeData::from_value("2023-13-45", "YYYY-MM-DD");
        assert!(matches!(
            DatetimeField::new(&spec, &mut data),
            Err(UtilsError::DateParse { .. })
        ));
    }

    #[test]
    fn test_needed_probes() {
        assert!(DatetimeField::is_date_needed("YYYY-MM-DD"));
        assert!(!DatetimeField::is_date_needed("HH:mm:ss"));
        assert!(DatetimeField::is_time_needed("HH:mm:ss"));
        assert!(!DatetimeField::is_time_needed("YYYY-MM-DD"));

        let spec = DatetimeSpec::new("When", "DD/MM/YYYY HH:mm");
        let mut data = DatetimeData::from_iso("2023-10-23");
        let field = DatetimeField::new(&spec, &mut data).unwrap();
        assert!(field.needs_date());
        assert!(field.needs_time());
    }

    #[test]
    fn test_token_patterns_compile() {
        assert!(DATE_TOKENS_RE.is_match("D"));
        assert!(TIME_TOKENS_RE.is_match("S"));
        assert!(DatetimeField::is_date_needed("dddd"));
        assert!(DatetimeField::is_time_needed("h A"));
        assert!(!DatetimeField::is_time_needed("[] - /"));
    }

    #[test]
    fn test_is_date_disabled() {
        let monday = instant("2023-10-23T10:00:00Z");
        let tuesday = instant("2023-10-24T10:00:00Z");
        let saturday = instant("2023-10-28T10:00:00Z");

        let check = |date: &DateTime<Utc>, entry: DisabledDate| {
            DatetimeField::is_date_disabled(date, &[entry])
        };

        assert!(check(&monday, DisabledDate::Week));
        assert!(!check(&monday, DisabledDate::Weekend));
        assert!(check(&saturday, DisabledDate::Weekend));
        assert!(!check(&saturday, DisabledDate::Week));
        assert!(check(&monday, DisabledDate::Weekday(Weekday::Mon)));
        assert!(!check(&monday, DisabledDate::Weekday(Weekday::Tue)));
        assert!(check(&tuesday, DisabledDate::parse("thuesday").unwrap()));
        assert!(check(&monday, DisabledDate::Month(Month::October)));
        assert!(check(&monday, DisabledDate::Year(2023)));
        assert!(!check(&monday, DisabledDate::Year(2024)));
        assert!(check(&monday, DisabledDate::parse("2023-10-23").unwrap()));
        assert!(check(&monday, DisabledDate::Instant(monday)));
        assert!(!check(&monday, DisabledDate::Instant(tuesday)));
        assert!(!DatetimeField::is_date_disabled(&monday, &[]));
    }

    #[test]
    fn test_is_disabled_uses_spec_list() {
        let open = DatetimeSpec::new("Day", "YYYY-MM-DD");
        let mut data = DatetimeData::from_iso("2023-10-28");
        assert!(!DatetimeField::new(&open, &mut data).unwrap().is_disabled());

        let closed = open.clone().with_disabled(DisabledDate::Weekend);
        let mut data = DatetimeData::from_iso("2023-10-28");
        assert!(DatetimeField::new(&closed, &mut data).unwrap().is_disabled());
    }

    #[test]
    fn test_with_mock_formatter() {
        let spec = DatetimeSpec::new("Day", "custom");
        let mut data = DatetimeData::from_value("anything", "in");
        let parsed = instant("2020-01-01T00:00:00Z");

        let mut formatter = MockDateFormatter::new();
        formatter
            .expect_parse()
            .times(1)
            .returning(move |_, _| Ok(parsed));
        formatter
            .expect_format()
            .returning(|date, format| format!("{}@{}", format, date.timestamp()));
        formatter.expect_now().never();

        let field = DatetimeField::with_formatter(&spec, &mut data, formatter).unwrap();
        assert_eq!(field.to_string(), "custom@1577836800");
        assert_eq!(field.data().value.as_deref(), Some("custom@1577836800"));
        assert_eq!(field.data().format.as_deref(), Some("custom"));
    }

    #[test]
    fn test_parse_iso_forms() {
        assert_eq!(
            to_iso(&parse_iso("2023-10-23").unwrap()),
            "2023-10-23T00:00:00.000Z"
        );
        assert_eq!(
            to_iso(&parse_iso("2023-10-23T10:00:00+02:00").unwrap()),
            "2023-10-23T08:00:00.000Z"
        );
        assert_eq!(
            to_iso(&parse_iso("2023-10-23T10:00:00.5").unwrap()),
            "2023-10-23T10:00:00.500Z"
        );
        assert!(parse_iso("23/10/2023").is_err());
    }
}
