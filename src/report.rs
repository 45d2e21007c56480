//! Report generators: period overview and per-day summary.
//!
//! Statistics are computed into a typed [`PeriodStats`] first and rendered afterwards, so the
//! numbers can be inspected without parsing the text.

use crate::error::WeatherResult;
use crate::processing::{
    fahrenheit_to_celsius, find_max, find_min, format_date, format_temperature, mean,
};
use crate::types::{Row, Value, max_column, min_column};

/// An extremal temperature and the day it occurs on.
#[derive(Debug, Clone, PartialEq)]
pub struct DayExtreme {
    /// Temperature in Celsius, rounded to one decimal.
    pub celsius: f64,
    /// Human-readable date, e.g. `Tuesday 06 July 2021`.
    pub date: String,
    /// Index of the row within the dataset.
    pub index: usize,
}

/// Summary statistics for a reporting period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStats {
    pub days: usize,
    /// Lowest minimum temperature; the last day wins on ties.
    pub lowest: DayExtreme,
    /// Highest maximum temperature; the last day wins on ties.
    pub highest: DayExtreme,
    pub average_low_celsius: f64,
    pub average_high_celsius: f64,
}

/// Compute period statistics. Returns `Ok(None)` for an empty dataset.
pub fn compute_period_stats(rows: &[Row]) -> WeatherResult<Option<PeriodStats>> {
    let lows = min_column(rows);
    let highs = max_column(rows);

    let (Some(min), Some(max)) = (find_min(&lows)?, find_max(&highs)?) else {
        return Ok(None);
    };

    let lowest = DayExtreme {
        celsius: fahrenheit_to_celsius(&min.value.into())?,
        date: format_date(&rows[min.index].date)?,
        index: min.index,
    };
    let highest = DayExtreme {
        celsius: fahrenheit_to_celsius(&max.value.into())?,
        date: format_date(&rows[max.index].date)?,
        index: max.index,
    };

    Ok(Some(PeriodStats {
        days: rows.len(),
        lowest,
        highest,
        average_low_celsius: fahrenheit_to_celsius(&Value::Float64(mean(&lows)?))?,
        average_high_celsius: fahrenheit_to_celsius(&Value::Float64(mean(&highs)?))?,
    }))
}

/// Render [`PeriodStats`] as the period overview text.
pub fn format_period_stats(stats: &PeriodStats) -> WeatherResult<String> {
    let mut out = String::new();

    out.push_str(&format!("{} Day Overview\n", stats.days));
    out.push_str(&format!(
        "  The lowest temperature will be {}, and will occur on {}.\n",
        celsius(stats.lowest.celsius)?,
        stats.lowest.date
    ));
    out.push_str(&format!(
        "  The highest temperature will be {}, and will occur on {}.\n",
        celsius(stats.highest.celsius)?,
        stats.highest.date
    ));
    out.push_str(&format!(
        "  The average low this week is {}.\n",
        celsius(stats.average_low_celsius)?
    ));
    out.push_str(&format!(
        "  The average high this week is {}.\n",
        celsius(stats.average_high_celsius)?
    ));

    Ok(out)
}

/// Overview of the whole period. `Ok(None)` for an empty dataset.
///
/// ```rust
/// use weather_summary::report::generate_period_summary;
/// use weather_summary::types::Row;
///
/// let rows = vec![Row::new("2021-07-01", 32, 50), Row::new("2021-07-02", 10, 60)];
/// let text = generate_period_summary(&rows).unwrap().unwrap();
/// assert!(text.starts_with("2 Day Overview\n"));
/// assert!(text.contains("highest temperature will be 15.6°C"));
/// assert!(text.contains("will occur on Friday 02 July 2021."));
/// ```
pub fn generate_period_summary(rows: &[Row]) -> WeatherResult<Option<String>> {
    match compute_period_stats(rows)? {
        Some(stats) => format_period_stats(&stats).map(Some),
        None => Ok(None),
    }
}

/// One block per day, blocks separated by a blank line. Empty string for an empty dataset.
pub fn generate_daily_summary(rows: &[Row]) -> WeatherResult<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let blocks = rows
        .iter()
        .map(format_day)
        .collect::<WeatherResult<Vec<_>>>()?;

    let mut out = blocks.join("\n");
    out.push('\n');
    Ok(out)
}

fn format_day(row: &Row) -> WeatherResult<String> {
    let min = fahrenheit_to_celsius(&Value::Int64(row.min_temperature))?;
    let max = fahrenheit_to_celsius(&Value::Int64(row.max_temperature))?;

    let mut out = String::new();
    out.push_str(&format!("---- {} ----\n", format_date(&row.date)?));
    out.push_str(&format!("  Minimum Temperature: {}\n", celsius(min)?));
    out.push_str(&format!("  Maximum Temperature: {}\n", celsius(max)?));
    Ok(out)
}

fn celsius(v: f64) -> WeatherResult<String> {
    format_temperature(&Value::Float64(v))
}
