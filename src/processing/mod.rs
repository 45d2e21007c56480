//! In-memory computations over loaded weather data.
//!
//! - [`convert`]: scalar converters (Fahrenheit to Celsius, temperature and date formatting)
//! - [`reduce`]: reducers over numeric columns ([`mean()`], [`find_min()`], [`find_max()`])
//!
//! Every function takes loosely typed [`crate::types::Value`]s so callers can pass numbers or
//! numeric strings. Coercion failures surface as typed errors, never as silent defaults.
//!
//! ## Example
//!
//! ```rust
//! use weather_summary::processing::{fahrenheit_to_celsius, find_min, format_temperature, mean};
//! use weather_summary::types::Value;
//!
//! let lows = vec![Value::Int64(49), Value::from("41"), Value::Int64(41)];
//!
//! let coldest = find_min(&lows).unwrap().unwrap();
//! assert_eq!(coldest.index, 2);
//!
//! let celsius = fahrenheit_to_celsius(&coldest.value.into()).unwrap();
//! assert_eq!(format_temperature(&celsius.into()).unwrap(), "5.0°C");
//!
//! let avg = mean(&lows).unwrap();
//! assert!((avg - 43.666).abs() < 0.001);
//! ```

pub mod convert;
pub mod reduce;

pub use convert::{fahrenheit_to_celsius, format_date, format_temperature};
pub use reduce::{find_max, find_min, mean};
