//! Scalar converters: unit conversion, temperature and date formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{WeatherError, WeatherResult};
use crate::types::{Number, Value};

/// Degree sign followed by `C`.
pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

/// Output layout for [`format_date`], e.g. `Tuesday 06 July 2021`.
pub const DATE_FORMAT: &str = "%A %d %B %Y";

/// Convert a Fahrenheit value to Celsius, rounded to one decimal place (ties to even).
pub fn fahrenheit_to_celsius(value: &Value) -> WeatherResult<f64> {
    let fahrenheit = to_number(value)?.as_f64();
    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    Ok(round_one_decimal(celsius))
}

/// Append the degree-Celsius symbol to a numeric value. No unit conversion is done.
///
/// Numeric strings are echoed exactly as given once they validate as numbers.
pub fn format_temperature(value: &Value) -> WeatherResult<String> {
    let number = to_number(value)?;
    match value {
        Value::Utf8(s) => Ok(format!("{s}{DEGREE_SYMBOL}")),
        _ => Ok(format!("{number}{DEGREE_SYMBOL}")),
    }
}

/// Format an ISO-8601 date as `<Weekday> <DD> <Month> <YYYY>`.
///
/// Accepts `YYYY-MM-DD` as well as full timestamps (`2021-07-02T07:00:00+08:00`,
/// `2021-07-02T07:00:00`); only the calendar date as written is used.
pub fn format_date(iso: &str) -> WeatherResult<String> {
    let date = parse_iso_date(iso)?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Parse the calendar date part of an ISO-8601 date or timestamp.
pub fn parse_iso_date(iso: &str) -> WeatherResult<NaiveDate> {
    let s = iso.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(WeatherError::InvalidDate { raw: iso.to_owned() })
}

/// Interpret a scalar as a number; strings accept any float syntax.
fn to_number(value: &Value) -> WeatherResult<Number> {
    let invalid = || WeatherError::InvalidNumber {
        raw: value.to_string(),
    };

    match value {
        Value::Int64(v) => Ok(Number::Int(*v)),
        Value::Float64(v) => Ok(Number::Float(*v)),
        Value::Utf8(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .map(Number::Int)
                .or_else(|_| trimmed.parse::<f64>().map(Number::Float))
                .map_err(|_| invalid())
        }
        Value::Null | Value::Bool(_) => Err(invalid()),
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_to_celsius_known_points() {
        assert_eq!(fahrenheit_to_celsius(&Value::Int64(32)).unwrap(), 0.0);
        assert_eq!(fahrenheit_to_celsius(&Value::Int64(212)).unwrap(), 100.0);
        assert_eq!(fahrenheit_to_celsius(&Value::from("98.6")).unwrap(), 37.0);
        assert_eq!(fahrenheit_to_celsius(&Value::Int64(60)).unwrap(), 15.6);
        assert_eq!(fahrenheit_to_celsius(&Value::Float64(-40.0)).unwrap(), -40.0);
    }

    #[test]
    fn fahrenheit_to_celsius_rejects_non_numbers() {
        assert!(matches!(
            fahrenheit_to_celsius(&Value::from("warm")).unwrap_err(),
            WeatherError::InvalidNumber { .. }
        ));
        assert!(matches!(
            fahrenheit_to_celsius(&Value::Null).unwrap_err(),
            WeatherError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn format_temperature_appends_symbol_without_conversion() {
        assert_eq!(format_temperature(&Value::Int64(20)).unwrap(), "20°C");
        assert_eq!(format_temperature(&Value::Float64(15.6)).unwrap(), "15.6°C");
        assert_eq!(format_temperature(&Value::Float64(0.0)).unwrap(), "0.0°C");
        assert_eq!(format_temperature(&Value::from("20.50")).unwrap(), "20.50°C");
    }

    #[test]
    fn format_temperature_rejects_non_numbers() {
        assert!(matches!(
            format_temperature(&Value::from("hot")).unwrap_err(),
            WeatherError::InvalidNumber { .. }
        ));
        assert!(matches!(
            format_temperature(&Value::Bool(false)).unwrap_err(),
            WeatherError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn format_date_plain_and_timestamp() {
        assert_eq!(format_date("2021-07-06").unwrap(), "Tuesday 06 July 2021");
        assert_eq!(
            format_date("2021-07-02T07:00:00+08:00").unwrap(),
            "Friday 02 July 2021"
        );
        assert_eq!(format_date("2021-07-03T07:00:00").unwrap(), "Saturday 03 July 2021");
    }

    #[test]
    fn format_date_rejects_garbage() {
        let err = format_date("not-a-date").unwrap_err();
        assert!(matches!(err, WeatherError::InvalidDate { ref raw } if raw == "not-a-date"));
        assert!(format_date("2021-02-30").is_err());
        assert!(format_date("").is_err());
    }
}
