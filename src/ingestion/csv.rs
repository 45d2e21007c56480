//! CSV loading implementation.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{WeatherError, WeatherResult};
use crate::types::{Dataset, Row};

const DATE_COLUMN: &str = "date";
const MIN_COLUMN: &str = "min_temperature";
const MAX_COLUMN: &str = "max_temperature";

/// Build a CSV reader configured for weather files.
///
/// Header detection is left to [`load_csv_from_reader`], which drops physical line 1 whatever
/// it holds. Records may carry trailing fields beyond the three that are read.
pub fn csv_reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(delimiter);
    builder
}

/// Load a weather CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - The first physical line is a header and is skipped, even when it is blank.
/// - Completely empty lines are skipped. Any other line must carry three fields.
/// - Field 1 is the date (kept as text), fields 2 and 3 are integer minimum and maximum
///   temperatures in Fahrenheit.
///
/// A missing file is reported as [`WeatherError::ResourceNotFound`].
pub fn load_csv_from_path(path: impl AsRef<Path>, delimiter: u8) -> WeatherResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => WeatherError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => WeatherError::Io(e),
    })?;

    let mut rdr = csv_reader_builder(delimiter).from_reader(file);
    load_csv_from_reader(&mut rdr)
}

/// Load weather rows from an existing CSV reader.
///
/// Any record starting on line 1 is the header and is dropped. Readers built with
/// [`csv_reader_builder`] hand that line over as a record; readers with `has_headers(true)`
/// consume a header themselves, which skips leading blank lines first.
pub fn load_csv_from_reader<R: io::Read>(rdr: &mut csv::Reader<R>) -> WeatherResult<Dataset> {
    let mut rows = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based line number for users.
        let user_row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx0 + 1);

        if user_row == 1 {
            continue;
        }

        let date = field(&record, 0, user_row, DATE_COLUMN)?;
        let min_raw = field(&record, 1, user_row, MIN_COLUMN)?;
        let max_raw = field(&record, 2, user_row, MAX_COLUMN)?;
        let min_temperature = parse_temperature(user_row, MIN_COLUMN, min_raw)?;
        let max_temperature = parse_temperature(user_row, MAX_COLUMN, max_raw)?;

        rows.push(Row::new(date, min_temperature, max_temperature));
    }

    Ok(Dataset::new(rows))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> WeatherResult<&'r str> {
    record.get(idx).ok_or_else(|| WeatherError::MissingField {
        row,
        column: column.to_owned(),
    })
}

fn parse_temperature(row: usize, column: &str, raw: &str) -> WeatherResult<i64> {
    raw.trim().parse::<i64>().map_err(|e| WeatherError::FormatError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}
