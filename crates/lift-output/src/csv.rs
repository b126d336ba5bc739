//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `day_metrics.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use lift_sim::ServiceBuckets;

use crate::writer::OutputWriter;
use crate::{DayRow, EventRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    days:     Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut days = Writer::from_path(dir.join("day_metrics.csv"))?;
        days.write_record(day_header())?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["day", "time_secs", "kind", "floor", "elevator", "client"])?;

        Ok(Self { days, events, finished: false })
    }
}

fn day_header() -> Vec<String> {
    let mut header: Vec<String> = vec!["day".into(), "mode".into()];
    header.extend(ServiceBuckets::LABELS.iter().map(|l| format!("service_{l}")));
    header.extend((1..=lift_core::ELEVATOR_COUNT).map(|car| format!("occupancy_car{car}")));
    header.extend(
        ["abandoned", "delivered", "swaps", "breakdowns", "waiting_at_close", "mean_wait_secs"]
            .map(String::from),
    );
    header
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, row: &DayRow) -> OutputResult<()> {
        let mut record = vec![row.day.to_string(), row.mode.as_str().to_owned()];
        record.extend(row.service.iter().map(u64::to_string));
        record.extend(row.occupancy.iter().map(|o| format!("{o:.4}")));
        record.extend([
            row.abandoned.to_string(),
            row.delivered.to_string(),
            row.swaps.to_string(),
            row.breakdowns.to_string(),
            row.waiting_at_close.to_string(),
            format!("{:.2}", row.mean_wait_secs),
        ]);
        self.days.write_record(&record)?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.day.to_string(),
                row.time_secs.to_string(),
                row.kind.as_str().to_owned(),
                row.floor.to_string(),
                row.elevator.to_string(),
                row.client.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
