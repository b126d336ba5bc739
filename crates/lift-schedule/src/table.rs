//! Time-of-day arrival probabilities.
//!
//! The operating day is cut into bands of whole hours.  Each band fixes how
//! often riders show up and where their trips start and end:
//!
//! | Field          | Meaning                                                   |
//! |----------------|-----------------------------------------------------------|
//! | `mean_gap_secs`| mean of the exponential inter-arrival gap                 |
//! | `from_ground`  | P(trip starts at floor 0, destination uniform over 1..=25)|
//! | `to_ground`    | P(trip ends at floor 0, origin uniform over 1..=25)       |
//! | *remainder*    | inter-floor trip, origin ≠ destination, both in 1..=25    |

use lift_core::{FLOOR_COUNT, FloorId, GROUND, SimRng, SimTime};

use crate::{ScheduleError, ScheduleResult};

/// One band of the arrival table, `[start_hour, end_hour)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalBand {
    pub start_hour:    u32,
    pub end_hour:      u32,
    pub mean_gap_secs: f64,
    pub from_ground:   f64,
    pub to_ground:     f64,
}

impl ArrivalBand {
    fn validate(&self) -> ScheduleResult<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(ScheduleError::InvalidBand(format!(
                "hours {}..{} are not a range within the day",
                self.start_hour, self.end_hour
            )));
        }
        // Written so that NaN fails too.
        if !(self.mean_gap_secs > 0.0) {
            return Err(ScheduleError::InvalidBand(format!(
                "mean gap {} must be positive",
                self.mean_gap_secs
            )));
        }
        let probs = [self.from_ground, self.to_ground];
        if probs.iter().any(|p| !(0.0..=1.0).contains(p)) || self.from_ground + self.to_ground > 1.0 {
            return Err(ScheduleError::InvalidBand(format!(
                "ground probabilities {} + {} do not form a distribution",
                self.from_ground, self.to_ground
            )));
        }
        Ok(())
    }

    #[inline]
    fn start(&self) -> SimTime {
        SimTime::from_hms(self.start_hour as u64, 0, 0)
    }

    #[inline]
    fn covers_hour(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    /// Draw an `(origin, destination)` pair, never equal.
    pub fn sample_trip(&self, rng: &mut SimRng) -> (FloorId, FloorId) {
        let top = FLOOR_COUNT - 1;
        let u: f64 = rng.random();
        if u < self.from_ground {
            (GROUND, FloorId(rng.gen_range(1..=top)))
        } else if u < self.from_ground + self.to_ground {
            (FloorId(rng.gen_range(1..=top)), GROUND)
        } else {
            let origin: u8 = rng.gen_range(1..=top);
            let mut dest: u8 = rng.gen_range(1..top);
            if dest >= origin {
                dest += 1;
            }
            (FloorId(origin), FloorId(dest))
        }
    }
}

/// Ordered, non-overlapping arrival bands.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalTable {
    bands: Vec<ArrivalBand>,
}

impl ArrivalTable {
    /// Validate and sort `bands`.  Overlapping bands are rejected; gaps
    /// between bands are allowed and produce no arrivals.
    pub fn new(mut bands: Vec<ArrivalBand>) -> ScheduleResult<Self> {
        for band in &bands {
            band.validate()?;
        }
        bands.sort_by_key(|b| b.start_hour);
        if let Some(w) = bands.windows(2).find(|w| w[1].start_hour < w[0].end_hour) {
            return Err(ScheduleError::InvalidBand(format!(
                "bands {}..{} and {}..{} overlap",
                w[0].start_hour, w[0].end_hour, w[1].start_hour, w[1].end_hour
            )));
        }
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[ArrivalBand] {
        &self.bands
    }

    /// Index of the band in force at `t`, or of the next band to open after
    /// it, together with the instant from which gaps in that band are
    /// measured.  `None` once the last band has closed.
    pub fn band_from(&self, t: SimTime) -> Option<(SimTime, usize)> {
        let hour = t.hour();
        if let Some(i) = self.bands.iter().position(|b| b.covers_hour(hour)) {
            return Some((t, i));
        }
        self.bands
            .iter()
            .position(|b| b.start_hour > hour)
            .map(|i| (self.bands[i].start().max(t), i))
    }
}

impl Default for ArrivalTable {
    /// The reference office day: morning rush into the building, a mixed
    /// midday, and an evening rush out.  Arrivals are half as frequent before
    /// 07:00.
    fn default() -> Self {
        let band = |start_hour, end_hour, mean_gap_secs, from_ground, to_ground| ArrivalBand {
            start_hour,
            end_hour,
            mean_gap_secs,
            from_ground,
            to_ground,
        };
        Self {
            bands: vec![
                band(6, 7, 120.0, 0.80, 0.05),
                band(7, 10, 60.0, 0.80, 0.05),
                band(10, 15, 60.0, 0.30, 0.30),
                band(15, 20, 60.0, 0.05, 0.80),
            ],
        }
    }
}
