//! Load outcome reporting.
//!
//! A successful load is summarized as [`LoadStats`] (row count and the calendar span the rows
//! cover). Rows that load fine but will trip up reporting later are flagged as
//! [`LoadWarning`]s: dates that do not parse, and dates that do not move forward in time.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use crate::error::WeatherError;
use crate::processing::convert::parse_iso_date;
use crate::types::Row;

/// Severity of a failed load, used for alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// The file was read but its contents are malformed.
    Error,
    /// The file is missing or could not be read.
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows loaded.
    pub rows: usize,
    /// Earliest parseable date, if any.
    pub first_date: Option<NaiveDate>,
    /// Latest parseable date, if any.
    pub last_date: Option<NaiveDate>,
}

impl LoadStats {
    pub fn from_rows(rows: &[Row]) -> Self {
        let dates = || rows.iter().filter_map(|r| parse_iso_date(&r.date).ok());
        Self {
            rows: rows.len(),
            first_date: dates().min(),
            last_date: dates().max(),
        }
    }

    /// Number of calendar days from the first to the last date, inclusive.
    pub fn span_days(&self) -> Option<i64> {
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => Some((last - first).num_days() + 1),
            _ => None,
        }
    }
}

/// A row that loaded but looks suspicious. `index` is the row's position in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The date is not ISO-8601; formatting it in a report will fail.
    UnparsableDate { index: usize, raw: String },
    /// The date is on or before the previous parseable date.
    DateNotAfterPrevious {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnparsableDate { index, raw } => {
                write!(f, "row {index}: unparsable date '{raw}'")
            }
            LoadWarning::DateNotAfterPrevious {
                index,
                date,
                previous,
            } => write!(f, "row {index}: date {date} is not after {previous}"),
        }
    }
}

/// Scan rows in order and flag suspicious dates.
pub fn date_warnings(rows: &[Row]) -> Vec<LoadWarning> {
    let mut out = Vec::new();
    let mut previous: Option<NaiveDate> = None;
    for (index, row) in rows.iter().enumerate() {
        match parse_iso_date(&row.date) {
            Ok(date) => {
                if let Some(prev) = previous {
                    if date <= prev {
                        out.push(LoadWarning::DateNotAfterPrevious {
                            index,
                            date,
                            previous: prev,
                        });
                    }
                }
                previous = Some(date);
            }
            Err(_) => out.push(LoadWarning::UnparsableDate {
                index,
                raw: row.date.clone(),
            }),
        }
    }
    out
}

/// Observer interface for load outcomes.
///
/// Implementors can record logs or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called once per suspicious row after a successful load.
    fn on_warning(&self, _ctx: &LoadContext, _warning: &LoadWarning) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &WeatherError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans callbacks out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_warning(&self, ctx: &LoadContext, warning: &LoadWarning) {
        self.observers.iter().for_each(|o| o.on_warning(ctx, warning));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// One log line per event, shared by the stderr and file observers.
fn success_line(ctx: &LoadContext, stats: LoadStats) -> String {
    let span = match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => format!("{first}..={last}"),
        _ => "none".to_string(),
    };
    format!(
        "ok path={} rows={} dates={span}",
        ctx.path.display(),
        stats.rows
    )
}

fn warning_line(ctx: &LoadContext, warning: &LoadWarning) -> String {
    format!("warn path={} {warning}", ctx.path.display())
}

fn failure_line(
    tag: &str,
    ctx: &LoadContext,
    severity: LoadSeverity,
    error: &WeatherError,
) -> String {
    format!(
        "{tag} severity={severity:?} path={} err={error}",
        ctx.path.display()
    )
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!("[load] {}", success_line(ctx, stats));
    }

    fn on_warning(&self, ctx: &LoadContext, warning: &LoadWarning) {
        eprintln!("[load] {}", warning_line(ctx, warning));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        eprintln!("[load] {}", failure_line("fail", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        eprintln!("[ALERT][load] {}", failure_line("fail", ctx, severity, error));
    }
}

/// Appends timestamped load events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&success_line(ctx, stats));
    }

    fn on_warning(&self, ctx: &LoadContext, warning: &LoadWarning) {
        self.append_line(&warning_line(ctx, warning));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        self.append_line(&failure_line("fail", ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &WeatherError) {
        self.append_line(&failure_line("ALERT", ctx, severity, error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stats_cover_the_date_span() {
        let rows = vec![
            Row::new("2021-07-03", 50, 60),
            Row::new("2021-07-02T07:00:00+08:00", 49, 67),
            Row::new("garbage", 1, 2),
            Row::new("2021-07-06", 53, 62),
        ];
        let stats = LoadStats::from_rows(&rows);
        assert_eq!(stats.rows, 4);
        assert_eq!(stats.first_date, Some(date(2021, 7, 2)));
        assert_eq!(stats.last_date, Some(date(2021, 7, 6)));
        assert_eq!(stats.span_days(), Some(5));
    }

    #[test]
    fn stats_for_empty_rows_have_no_span() {
        let stats = LoadStats::from_rows(&[]);
        assert_eq!(stats.rows, 0);
        assert_eq!(stats.span_days(), None);
    }

    #[test]
    fn warnings_flag_bad_and_backwards_dates() {
        let rows = vec![
            Row::new("2021-07-02", 49, 67),
            Row::new("2021-07-02", 50, 68),
            Row::new("next tuesday", 1, 2),
            Row::new("2021-07-01", 40, 60),
            Row::new("2021-07-05", 40, 60),
        ];
        assert_eq!(
            date_warnings(&rows),
            vec![
                LoadWarning::DateNotAfterPrevious {
                    index: 1,
                    date: date(2021, 7, 2),
                    previous: date(2021, 7, 2),
                },
                LoadWarning::UnparsableDate {
                    index: 2,
                    raw: "next tuesday".to_string(),
                },
                LoadWarning::DateNotAfterPrevious {
                    index: 3,
                    date: date(2021, 7, 1),
                    previous: date(2021, 7, 2),
                },
            ]
        );
    }

    #[test]
    fn ordered_dates_produce_no_warnings() {
        let rows = vec![Row::new("2021-07-01", 1, 2), Row::new("2021-07-02", 1, 2)];
        assert!(date_warnings(&rows).is_empty());
    }

    #[test]
    fn warning_display_names_the_row() {
        let w = LoadWarning::UnparsableDate {
            index: 4,
            raw: "soon".to_string(),
        };
        assert_eq!(w.to_string(), "row 4: unparsable date 'soon'");
    }

    #[derive(Default)]
    struct Counting {
        successes: Mutex<Vec<usize>>,
        warnings: Mutex<usize>,
        failures: Mutex<Vec<LoadSeverity>>,
    }

    impl LoadObserver for Counting {
        fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
            self.successes.lock().unwrap().push(stats.rows);
        }

        fn on_warning(&self, _ctx: &LoadContext, _warning: &LoadWarning) {
            *self.warnings.lock().unwrap() += 1;
        }

        fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &WeatherError) {
            self.failures.lock().unwrap().push(severity);
        }
    }

    #[test]
    fn composite_fans_out_to_every_observer() {
        let ctx = LoadContext {
            path: PathBuf::from("weather.csv"),
        };
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());
        let observers: Vec<Arc<dyn LoadObserver>> = vec![a.clone(), b.clone()];
        let composite = CompositeObserver::new(observers);

        composite.on_success(&ctx, LoadStats::from_rows(&[Row::new("2021-07-01", 1, 2)]));
        composite.on_warning(
            &ctx,
            &LoadWarning::UnparsableDate {
                index: 0,
                raw: String::new(),
            },
        );
        composite.on_alert(&ctx, LoadSeverity::Critical, &WeatherError::EmptyInput);

        for o in [&a, &b] {
            assert_eq!(*o.successes.lock().unwrap(), vec![1]);
            assert_eq!(*o.warnings.lock().unwrap(), 1);
            // Default `on_alert` forwards to `on_failure`.
            assert_eq!(*o.failures.lock().unwrap(), vec![LoadSeverity::Critical]);
        }
    }
}
