//! `weather-summary` loads daily weather readings from CSV into an in-memory
//! [`types::Dataset`] and renders two human-readable reports from it: a period overview and a
//! per-day summary.
//!
//! The input is a CSV file whose first line is a header (always skipped) and whose data lines
//! carry `date,min_temperature,max_temperature` with temperatures as integer degrees Fahrenheit.
//! Reports show Celsius rounded to one decimal.
//!
//! ## Quick example
//!
//! ```no_run
//! use weather_summary::ingestion::load_from_path;
//! use weather_summary::report::{generate_daily_summary, generate_period_summary};
//!
//! # fn main() -> Result<(), weather_summary::WeatherError> {
//! let ds = load_from_path("weather.csv")?;
//!
//! if let Some(summary) = generate_period_summary(ds.as_slice())? {
//!     println!("Weekly Summary:");
//!     println!("{summary}");
//! }
//! println!("Daily Summary:");
//! println!("{}", generate_daily_summary(ds.as_slice())?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading, load options and observers
//! - [`types`]: rows, dataset, loosely typed values and reduction results
//! - [`processing`]: scalar converters and reducers (mean/min/max)
//! - [`report`]: period and daily report generators
//! - [`error`]: the error type shared by every stage

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{WeatherError, WeatherResult};
