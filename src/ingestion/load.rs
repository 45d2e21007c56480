//! Path-based loading entrypoints.
//!
//! Most callers should use [`load_from_path`]. [`load_with_options`] adds a configurable
//! delimiter and an optional [`LoadObserver`] that is told about success, date warnings, failure
//! and alerts. [`load_from_reader`] reads already-open comma-separated input.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::error::{WeatherError, WeatherResult};
use crate::types::Dataset;

use super::csv::{csv_reader_builder, load_csv_from_path, load_csv_from_reader};
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, date_warnings};

/// Options controlling loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: u8,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a comma-separated weather file with default options.
///
/// ```no_run
/// use weather_summary::ingestion::load_from_path;
///
/// # fn main() -> Result<(), weather_summary::WeatherError> {
/// let ds = load_from_path("tests/fixtures/example_one.csv")?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>) -> WeatherResult<Dataset> {
    load_with_options(path, &LoadOptions::default())
}

/// Load comma-separated weather data from any reader, e.g. stdin or an in-memory buffer.
///
/// The first line is the header, exactly as for files.
pub fn load_from_reader<R: io::Read>(reader: R) -> WeatherResult<Dataset> {
    let mut rdr = csv_reader_builder(b',').from_reader(reader);
    load_csv_from_reader(&mut rdr)
}

/// Load a weather file, reporting the outcome to `options.observer` when set:
///
/// - `on_success` on success, with row count and date span
/// - `on_warning` once per row whose date is unparsable or not after the previous one
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use weather_summary::ingestion::{LoadOptions, LoadSeverity, StdErrObserver, load_with_options};
///
/// # fn main() -> Result<(), weather_summary::WeatherError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: LoadSeverity::Error,
///     ..Default::default()
/// };
/// let ds = load_with_options("weather.csv", &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_with_options(path: impl AsRef<Path>, options: &LoadOptions) -> WeatherResult<Dataset> {
    let path = path.as_ref();
    let result = load_csv_from_path(path, options.delimiter);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(ds) => {
                obs.on_success(&ctx, LoadStats::from_rows(ds.as_slice()));
                for warning in date_warnings(ds.as_slice()) {
                    obs.on_warning(&ctx, &warning);
                }
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Classify a load error for observers.
pub fn severity_for_error(e: &WeatherError) -> LoadSeverity {
    match e {
        WeatherError::ResourceNotFound { .. } | WeatherError::Io(_) => LoadSeverity::Critical,
        WeatherError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
