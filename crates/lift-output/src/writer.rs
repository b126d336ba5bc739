//! The `OutputWriter` trait implemented by backend writers.

use crate::{DayRow, EventRow, OutputResult};

/// Sink for day metrics and event traces.
///
/// The observer never propagates these errors.  It keeps the first one for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one day's metrics row.
    fn write_day(&mut self, row: &DayRow) -> OutputResult<()>;

    /// Write a batch of event rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
