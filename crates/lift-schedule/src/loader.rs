//! CSV arrival-table loader.
//!
//! # CSV format
//!
//! One row per band.  Hours are whole hours of the day; `end_hour` is
//! exclusive.
//!
//! ```csv
//! start_hour,end_hour,mean_gap_secs,from_ground,to_ground
//! 6,10,45,0.85,0.05
//! 10,15,90,0.30,0.30
//! 15,20,45,0.05,0.85
//! ```
//!
//! Rows may come in any order; overlapping bands are rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ArrivalBand, ArrivalTable, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BandRecord {
    start_hour:    u32,
    end_hour:      u32,
    mean_gap_secs: f64,
    from_ground:   f64,
    to_ground:     f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`ArrivalTable`] from a CSV file.
pub fn load_table_csv(path: &Path) -> Result<ArrivalTable, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_table_reader(file)
}

/// Like [`load_table_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in a
/// binary.
pub fn load_table_reader<R: Read>(reader: R) -> Result<ArrivalTable, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bands = Vec::new();

    for result in csv_reader.deserialize::<BandRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        bands.push(ArrivalBand {
            start_hour:    row.start_hour,
            end_hour:      row.end_hour,
            mean_gap_secs: row.mean_gap_secs,
            from_ground:   row.from_ground,
            to_ground:     row.to_ground,
        });
    }

    if bands.is_empty() {
        return Err(ScheduleError::Parse("arrival table has no bands".into()));
    }
    ArrivalTable::new(bands)
}
