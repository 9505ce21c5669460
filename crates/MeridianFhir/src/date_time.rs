use std::fmt;
use std::sync::Arc;
use chrono::{DateTime as ChronoDateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Precision levels for FHIR Date values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values.
///
/// FHIR times always carry seconds; the only optional part is the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// hh:mm:ss
    Second,
    /// hh:mm:ss.fff...
    Fraction,
}

/// Precision levels for FHIR DateTime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date and time to the second, with a timezone
    Second,
    /// Date and time with fractional seconds, with a timezone
    Fraction,
}

/// Reads exactly `len` ASCII digits.
fn fixed_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Precision-aware FHIR Date.
///
/// Keeps the text it was parsed from, so `2021` stays `2021` rather than
/// growing into `2021-01-01`.
///
/// # FHIR Date Formats
/// - `YYYY` - Year only
/// - `YYYY-MM` - Year and month
/// - `YYYY-MM-DD` - Full date
///
/// # Examples
/// ```rust
/// use meridian_fhir::{DatePrecision, PrecisionDate};
///
/// let date = PrecisionDate::parse("2021-02").unwrap();
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.month(), Some(2));
/// assert!(PrecisionDate::parse("2021-02-30").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Creates a year-only precision date.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    /// Creates a year-month precision date.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    /// Creates a full precision date. Components are not range checked.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    ///
    /// The year must be four digits and not `0000`; month and day must name a
    /// real calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let year = fixed_digits(parts.first()?, 4)? as i32;
        if year == 0 {
            return None;
        }
        let (month, day, precision) = match parts.len() {
            1 => (None, None, DatePrecision::Year),
            2 => {
                let month = fixed_digits(parts[1], 2)?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                (Some(month), None, DatePrecision::YearMonth)
            }
            3 => {
                let month = fixed_digits(parts[1], 2)?;
                let day = fixed_digits(parts[2], 2)?;
                NaiveDate::from_ymd_opt(year, month, day)?;
                (Some(month), Some(day), DatePrecision::Full)
            }
            _ => return None,
        };
        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this date.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a `NaiveDate`, filling missing month and day with 1.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

/// Precision-aware FHIR Time: a time of day with no timezone.
///
/// # Examples
/// ```rust
/// use meridian_fhir::{PrecisionTime, TimePrecision};
///
/// let time = PrecisionTime::parse("14:30:05.250").unwrap();
/// assert_eq!(time.precision(), TimePrecision::Fraction);
/// assert_eq!(time.original_string(), "14:30:05.250");
/// assert!(PrecisionTime::parse("14:30").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Creates a time with seconds precision. Components are not range checked.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond: None,
            precision: TimePrecision::Second,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        }
    }

    /// Parses `hh:mm:ss` with an optional fraction of any length.
    ///
    /// Second `60` is accepted for leap seconds. Fractions longer than nine
    /// digits keep their text but are truncated to nanoseconds.
    pub fn parse(s: &str) -> Option<Self> {
        let (clock, fraction) = match s.split_once('.') {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (s, None),
        };
        let parts: Vec<&str> = clock.split(':').collect();
        if parts.len() != 3 {
            return None;
        }
        let hour = fixed_digits(parts[0], 2)?;
        let minute = fixed_digits(parts[1], 2)?;
        let second = fixed_digits(parts[2], 2)?;
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }
        let (nanosecond, precision) = match fraction {
            Some(fraction) => {
                if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let nine: String = fraction.chars().chain(std::iter::repeat('0')).take(9).collect();
                (Some(nine.parse().ok()?), TimePrecision::Fraction)
            }
            None => (None, TimePrecision::Second),
        };
        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this time.
    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Converts to a `NaiveTime`. A leap second maps onto chrono's leap
    /// representation of second 59.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let nano = self.nanosecond.unwrap_or(0);
        if self.second == 60 {
            NaiveTime::from_hms_nano_opt(self.hour, self.minute, 59, 1_000_000_000 + nano)
        } else {
            NaiveTime::from_hms_nano_opt(self.hour, self.minute, self.second, nano)
        }
    }
}

/// Precision-aware FHIR DateTime.
///
/// A partial date (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a full date and time to at
/// least the second. When a time is present a timezone (`Z` or `±hh:mm`) is
/// required.
///
/// # Examples
/// ```rust
/// use meridian_fhir::{DateTimePrecision, PrecisionDateTime};
///
/// let dt = PrecisionDateTime::parse("2015-06-22T11:00:00+10:00").unwrap();
/// assert_eq!(dt.precision(), DateTimePrecision::Second);
/// assert_eq!(dt.timezone_offset(), Some(600));
/// assert!(PrecisionDateTime::parse("2015-06-22T11:00:00").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Minutes east of UTC.
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Creates a date-only datetime. Components are not range checked.
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::from_precision_date(PrecisionDate::from_ymd(year, month, day))
    }

    /// Widens a date into a datetime of the same precision.
    pub fn from_precision_date(date: PrecisionDate) -> Self {
        let precision = match date.precision {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    /// Parses a FHIR dateTime, preserving precision and timezone.
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            return Some(Self::from_precision_date(date));
        };
        let date = PrecisionDate::parse(date_part)?;
        if date.precision != DatePrecision::Full {
            return None;
        }
        let (time_part, offset) = split_timezone(time_and_tz)?;
        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision {
            TimePrecision::Second => DateTimePrecision::Second,
            TimePrecision::Fraction => DateTimePrecision::Fraction,
        };
        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this datetime.
    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    /// Timezone offset in minutes east of UTC, when a time is present.
    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to a chrono datetime. Missing components default to the start
    /// of the period and a missing timezone defaults to UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<FixedOffset>> {
        let naive_date = self.date.to_naive_date()?;
        let naive_time = match &self.time {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        let offset = FixedOffset::east_opt(self.timezone_offset.unwrap_or(0) * 60)?;
        naive_date
            .and_time(naive_time)
            .and_local_timezone(offset)
            .single()
    }
}

/// Splits `hh:mm:ss[.f](Z|±hh:mm)` into the clock text and an offset in minutes.
fn split_timezone(s: &str) -> Option<(&str, i32)> {
    if let Some(clock) = s.strip_suffix('Z') {
        return Some((clock, 0));
    }
    if s.len() < 6 || !s.is_char_boundary(s.len() - 6) {
        return None;
    }
    let (clock, tz) = s.split_at(s.len() - 6);
    let sign = match tz.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = tz[1..].split_once(':')?;
    let hours = fixed_digits(hours, 2)? as i32;
    let minutes = fixed_digits(minutes, 2)? as i32;
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some((clock, sign * (hours * 60 + minutes)))
}

/// A FHIR instant: a full datetime to at least the second, with a timezone.
///
/// # Examples
/// ```rust
/// use meridian_fhir::PrecisionInstant;
///
/// assert!(PrecisionInstant::parse("2015-06-27T08:39:24+10:00").is_some());
/// assert!(PrecisionInstant::parse("2015-06-27").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    /// Parses a FHIR instant. Date-only values are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        if inner.precision < DateTimePrecision::Second {
            return None;
        }
        Some(PrecisionInstant { inner })
    }

    /// Builds an instant from a UTC timestamp, written with a `Z` suffix.
    pub fn from_utc(timestamp: ChronoDateTime<Utc>) -> Self {
        let text = timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let nanos = timestamp.nanosecond() % 1_000_000_000;
        let (nanosecond, time_precision, precision) = if nanos == 0 {
            (None, TimePrecision::Second, DateTimePrecision::Second)
        } else {
            (Some(nanos), TimePrecision::Fraction, DateTimePrecision::Fraction)
        };
        let date = PrecisionDate::from_ymd(timestamp.year(), timestamp.month(), timestamp.day());
        let time = PrecisionTime {
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            second: timestamp.second(),
            nanosecond,
            precision: time_precision,
            original_string: Arc::from(text.get(11..text.len() - 1).unwrap_or_default()),
        };
        Self {
            inner: PrecisionDateTime {
                date,
                time: Some(time),
                timezone_offset: Some(0),
                precision,
                original_string: Arc::from(text),
            },
        }
    }

    /// Returns the original string representation
    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    /// Get the inner PrecisionDateTime
    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    /// Converts to a UTC timestamp.
    pub fn to_utc(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime().map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

// Serde writes the original text and parses with the same grammar as the codec.
macro_rules! string_serde {
    ($ty:ident, $label:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.original_string())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::parse(&s)
                    .ok_or_else(|| de::Error::custom(format!(concat!("Invalid FHIR ", $label, " format: {}"), s)))
            }
        }
    };
}

string_serde!(PrecisionDate, "date");
string_serde!(PrecisionTime, "time");
string_serde!(PrecisionDateTime, "datetime");
string_serde!(PrecisionInstant, "instant");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_precisions() {
        assert_eq!(PrecisionDate::parse("2021").unwrap().precision(), DatePrecision::Year);
        assert_eq!(PrecisionDate::parse("2021-01").unwrap().precision(), DatePrecision::YearMonth);
        let full = PrecisionDate::parse("2024-02-29").unwrap();
        assert_eq!(full.precision(), DatePrecision::Full);
        assert_eq!(full.to_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn date_grammar_violations() {
        for text in ["21", "2021-1", "2021-13", "2023-02-29", "0000", "2021-01-01T", "2021/01/01", ""] {
            assert!(PrecisionDate::parse(text).is_none(), "{text} should not parse");
        }
    }

    #[test]
    fn time_requires_seconds() {
        assert!(PrecisionTime::parse("09:15").is_none());
        assert!(PrecisionTime::parse("24:00:00").is_none());
        assert!(PrecisionTime::parse("09:15:00Z").is_none());
        let time = PrecisionTime::parse("23:59:60").unwrap();
        assert!(time.to_naive_time().is_some());
    }

    #[test]
    fn time_fraction_keeps_text() {
        let time = PrecisionTime::parse("10:00:00.5").unwrap();
        assert_eq!(time.original_string(), "10:00:00.5");
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_milli_opt(10, 0, 0, 500)
        );
    }

    #[test]
    fn datetime_needs_timezone_with_time() {
        assert!(PrecisionDateTime::parse("2017-01-01T00:00:00").is_none());
        assert!(PrecisionDateTime::parse("2017-01T00:00:00Z").is_none());
        let dt = PrecisionDateTime::parse("2017-01-01T00:00:00.000-05:00").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::Fraction);
        assert_eq!(dt.timezone_offset(), Some(-300));
        let utc = dt.to_chrono_datetime().unwrap().with_timezone(&Utc);
        assert_eq!(utc, Utc.with_ymd_and_hms(2017, 1, 1, 5, 0, 0).unwrap());
    }

    #[test]
    fn partial_datetime_is_a_date() {
        let dt = PrecisionDateTime::parse("2021-02").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::YearMonth);
        assert!(dt.time().is_none());
        assert_eq!(dt.to_string(), "2021-02");
    }

    #[test]
    fn instant_round_trips_through_utc() {
        let ts = Utc.with_ymd_and_hms(2015, 2, 7, 13, 28, 17).unwrap();
        let instant = PrecisionInstant::from_utc(ts);
        assert_eq!(instant.original_string(), "2015-02-07T13:28:17Z");
        assert_eq!(PrecisionInstant::parse(instant.original_string()), Some(instant.clone()));
        assert_eq!(instant.to_utc(), Some(ts));
    }

    #[test]
    fn serde_uses_original_text() {
        let dt: PrecisionDateTime = serde_json::from_str("\"2013-05-15T19:32:52+01:00\"").unwrap();
        assert_eq!(serde_json::to_string(&dt).unwrap(), "\"2013-05-15T19:32:52+01:00\"");
        assert!(serde_json::from_str::<PrecisionInstant>("\"2013-05-15\"").is_err());
    }
}
