//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_schedule::Event;
use lift_sim::{DayMetrics, SimObserver};

use crate::row::{DayRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Event rows buffered before a write.
const EVENT_BATCH: usize = 4_096;

/// A [`SimObserver`] that writes each day's metrics, and optionally every
/// handled event, to any [`OutputWriter`] backend.
///
/// One observer can follow several days in turn; call
/// [`start_day`][Self::start_day] before each.  Errors from the writer are
/// stored internally because `SimObserver` methods have no return value.
/// After the last day, call [`finish`][Self::finish] and check
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    day:           u32,
    record_events: bool,
    pending:       Vec<EventRow>,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Record day metrics and every event.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            day:           0,
            record_events: true,
            pending:       Vec::new(),
            last_error:    None,
        }
    }

    /// Record day metrics only.
    pub fn without_events(mut self) -> Self {
        self.record_events = false;
        self
    }

    /// Tag subsequent event rows with `day`.
    pub fn start_day(&mut self, day: u32) {
        self.day = day;
    }

    /// Write a day that was run elsewhere (e.g. by `run_days`).
    pub fn record_day(&mut self, metrics: &DayMetrics) {
        let result = self.writer.write_day(&DayRow::from(metrics));
        self.store_err(result);
    }

    /// Flush buffered events and close the writer.
    pub fn finish(&mut self) {
        self.flush_events();
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event) {
        if !self.record_events {
            return;
        }
        self.pending.push(EventRow::new(self.day, event));
        if self.pending.len() >= EVENT_BATCH {
            self.flush_events();
        }
    }

    fn on_day_end(&mut self, metrics: &DayMetrics) {
        self.flush_events();
        self.record_day(metrics);
    }
}
