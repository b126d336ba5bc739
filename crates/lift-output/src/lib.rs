//! `lift-output`: simulation output writers and cross-day summaries.
//!
//! | Backend | Files created                     |
//! |---------|-----------------------------------|
//! | CSV     | `day_metrics.csv`, `events.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//! [`Summary`] folds a run of [`DayMetrics`][lift_sim::DayMetrics] into
//! per-day averages.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DayRow, EventRow};
pub use summary::Summary;
pub use writer::OutputWriter;
