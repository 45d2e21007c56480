//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load_from_path`] (from [`load`]) which reads a weather CSV into an
//! in-memory [`crate::types::Dataset`]. [`load_with_options`] additionally reports
//! success, date warnings, failure and alerts to a [`LoadObserver`]. [`load_from_reader`]
//! reads comma-separated input from any [`std::io::Read`].
//!
//! The reader variant with a configurable delimiter lives under [`csv`].

pub mod csv;
pub mod load;
pub mod observability;

pub use load::{
    LoadOptions, load_from_path, load_from_reader, load_with_options, severity_for_error,
};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    LoadWarning, StdErrObserver, date_warnings,
};
