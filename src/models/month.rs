use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date format, expected MM-YYYY: {0:?}")]
pub struct ParseMonthError(String);

/// A calendar month. Day and time are truncated away; two values compare by
/// the first instant of their month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    /// Parses exactly `MM-YYYY`: two digits, a hyphen, four digits, with the
    /// month in 1-12. Everything else is rejected, including ISO dates and
    /// unpadded months.
    pub fn parse(input: &str) -> Result<Self, ParseMonthError> {
        let bytes = input.as_bytes();
        let shape_ok = bytes.len() == 7
            && bytes[2] == b'-'
            && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
        if !shape_ok {
            return Err(ParseMonthError(input.to_string()));
        }

        let month: u32 = input[..2]
            .parse()
            .map_err(|_| ParseMonthError(input.to_string()))?;
        let year: i32 = input[3..]
            .parse()
            .map_err(|_| ParseMonthError(input.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Month)
            .ok_or_else(|| ParseMonthError(input.to_string()))
    }

    /// Midnight UTC on the first day of the month, the representation bound
    /// into `TIMESTAMPTZ` columns and used for range comparisons.
    pub fn first_instant(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Truncates a stored timestamp back to its month.
    pub fn from_datetime(ts: DateTime<Utc>) -> Self {
        let date = ts.date_naive();
        Month(date.with_day(1).unwrap_or(date))
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.0.month(), self.0.year())
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Month::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_and_round_trips() {
        let month = Month::parse("07-2025").unwrap();
        assert_eq!(month.to_string(), "07-2025");
    }

    #[test]
    fn keeps_leading_zero_on_format() {
        let month = Month::parse("01-2025").unwrap();
        assert_eq!(month.to_string(), "01-2025");
    }

    #[test]
    fn rejects_non_month_shapes() {
        for raw in [
            "",
            "2025-07",
            "07/2025",
            "7-2025",
            "07-25",
            "07-2025 ",
            " 07-2025",
            "July-2025",
            "07-20a5",
            "07-2025-01",
        ] {
            assert!(Month::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(Month::parse("00-2025").is_err());
        assert!(Month::parse("13-2025").is_err());
        assert!(Month::parse("12-2025").is_ok());
    }

    #[test]
    fn orders_chronologically() {
        let jan = Month::parse("01-2025").unwrap();
        let mar = Month::parse("03-2025").unwrap();
        let dec_prior = Month::parse("12-2024").unwrap();
        assert!(jan < mar);
        assert!(dec_prior < jan);
        assert!((jan..=mar).contains(&Month::parse("02-2025").unwrap()));
    }

    #[test]
    fn first_instant_is_midnight_on_the_first() {
        let month = Month::parse("07-2025").unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(month.first_instant(), expected);
    }

    #[test]
    fn from_datetime_truncates_to_month() {
        let ts = Utc.with_ymd_and_hms(2025, 7, 19, 13, 45, 12).unwrap();
        assert_eq!(Month::from_datetime(ts), Month::parse("07-2025").unwrap());
    }

    #[test]
    fn serde_uses_month_strings() {
        let month = Month::parse("07-2025").unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"07-2025\"");
        let parsed: Month = serde_json::from_str("\"07-2025\"").unwrap();
        assert_eq!(parsed, month);
        assert!(serde_json::from_str::<Month>("\"2025-07\"").is_err());
    }
}
