//! Forecast entry model and its one-line rendering

use crate::ForecastError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

const DEGREE_SIGN: char = '\u{00B0}';

/// First entry of the hourly forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Calendar date of the forecast hour
    pub date: NaiveDate,
    /// Temperature in Celsius, exactly as the provider sent it
    pub temperature: Number,
}

impl ForecastEntry {
    /// Build an entry from the provider's `DateTime` string and temperature.
    ///
    /// Only the leading `YYYY-MM-DD` of the timestamp is used; the time and
    /// offset are ignored.
    pub fn from_parts(date_time: &str, temperature: Number) -> crate::Result<Self> {
        Ok(Self {
            date: parse_iso_date(date_time)?,
            temperature,
        })
    }

    /// Temperature as a float, for callers doing arithmetic
    #[must_use]
    pub fn celsius(&self) -> Option<f64> {
        self.temperature.as_f64()
    }

    /// Date as `DD.MM.YYYY`
    #[must_use]
    pub fn format_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    /// Temperature with unit, e.g. `21.5°C`
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}{DEGREE_SIGN}C", format_celsius(&self.temperature))
    }
}

impl fmt::Display for ForecastEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Temperature: {}",
            self.format_date(),
            self.format_temperature()
        )
    }
}

fn parse_iso_date(date_time: &str) -> crate::Result<NaiveDate> {
    let prefix = date_time.get(..10).ok_or_else(|| {
        ForecastError::parse(format!("Forecast timestamp '{date_time}' is too short"))
    })?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|e| {
        ForecastError::parse(format!("Invalid forecast date '{prefix}': {e}"))
    })
}

/// Integers print as integers. Floats print with shortest round-trip
/// digits, one decimal for whole values, and `1e+16` / `1e-05` style
/// exponents outside `1e-4 <= |v| < 1e16`.
fn format_celsius(value: &Number) -> String {
    if value.is_i64() || value.is_u64() {
        return value.to_string();
    }

    let Some(float) = value.as_f64() else {
        return value.to_string();
    };

    let scientific = format!("{float:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .unwrap_or((scientific.as_str(), 0));

    if float != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else if float.fract() == 0.0 {
        format!("{float:.1}")
    } else {
        float.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn number(json: &str) -> Number {
        serde_json::from_str(json).unwrap()
    }

    #[rstest]
    #[case("2023-06-15T14:00:00+01:00", "15.06.2023")]
    #[case("2024-02-29T23:00:00-05:00", "29.02.2024")]
    #[case("2000-01-01", "01.01.2000")]
    #[case("1999-12-31T00:00:00Z", "31.12.1999")]
    fn test_entry_formats_date(#[case] date_time: &str, #[case] expected: &str) {
        let entry = ForecastEntry::from_parts(date_time, number("1.5")).unwrap();
        assert_eq!(entry.format_date(), expected);
    }

    #[rstest]
    #[case("2023-02-29")]
    #[case("2023-13-01")]
    #[case("15.06.2023")]
    #[case("2023-6-1")]
    #[case("")]
    fn test_entry_rejects_invalid_dates(#[case] date_time: &str) {
        let err = ForecastEntry::from_parts(date_time, number("1.5")).unwrap_err();
        assert!(matches!(err, ForecastError::Parse { .. }));
    }

    #[rstest]
    #[case("21.5", "21.5")]
    #[case("21", "21")]
    #[case("21.0", "21.0")]
    #[case("-3", "-3")]
    #[case("-3.2", "-3.2")]
    #[case("0.0", "0.0")]
    #[case("18.33", "18.33")]
    #[case("0.0001", "0.0001")]
    #[case("0.00001", "1e-05")]
    #[case("1e16", "1e+16")]
    #[case("1234567890123456.0", "1234567890123456.0")]
    fn test_format_celsius(#[case] json: &str, #[case] expected: &str) {
        assert_eq!(format_celsius(&number(json)), expected);
    }

    #[test]
    fn test_entry_display_line() {
        let entry = ForecastEntry::from_parts("2023-06-15T14:00:00+01:00", number("21.5")).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(entry.celsius(), Some(21.5));
        assert_eq!(entry.to_string(), "Date: 15.06.2023, Temperature: 21.5°C");
    }

    #[test]
    fn test_entry_integer_temperature() {
        let entry = ForecastEntry::from_parts("2024-02-29T23:00:00-05:00", number("-1")).unwrap();
        assert_eq!(entry.format_temperature(), "-1°C");
    }
}
