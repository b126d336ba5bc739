//! Cross-day aggregation.

use std::fmt;

use lift_core::{DispatchMode, ELEVATOR_COUNT};
use lift_sim::{BUCKET_COUNT, DayMetrics, ServiceBuckets};

/// Averages over a run of independent days.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Dispatch mode of the first day, if any.
    pub mode: Option<DispatchMode>,
    pub days: usize,

    /// Mean delivered riders per day in each service-time bucket.
    pub mean_service:     [f64; BUCKET_COUNT],
    /// Mean over days of each car's time-averaged occupancy.
    pub mean_occupancy:   [f64; ELEVATOR_COUNT],
    pub mean_abandoned:   f64,
    pub total_delivered:  u64,
    pub total_swaps:      u64,
    pub total_breakdowns: u64,
    /// Waiting time per delivered rider across all days.
    pub mean_wait_secs:   f64,
}

impl Summary {
    pub fn from_days(days: &[DayMetrics]) -> Self {
        let mut s = Summary {
            mode:             days.first().map(|d| d.mode),
            days:             days.len(),
            mean_service:     [0.0; BUCKET_COUNT],
            mean_occupancy:   [0.0; ELEVATOR_COUNT],
            mean_abandoned:   0.0,
            total_delivered:  0,
            total_swaps:      0,
            total_breakdowns: 0,
            mean_wait_secs:   0.0,
        };
        if days.is_empty() {
            return s;
        }

        let mut total_wait = 0u64;
        for d in days {
            for (acc, &count) in s.mean_service.iter_mut().zip(&d.service.0) {
                *acc += count as f64;
            }
            for (acc, &occ) in s.mean_occupancy.iter_mut().zip(&d.occupancy) {
                *acc += occ;
            }
            s.mean_abandoned   += d.abandoned as f64;
            s.total_delivered  += d.delivered;
            s.total_swaps      += d.swaps;
            s.total_breakdowns += d.breakdowns;
            total_wait         += d.total_wait_secs;
        }

        let n = days.len() as f64;
        s.mean_service.iter_mut().for_each(|v| *v /= n);
        s.mean_occupancy.iter_mut().for_each(|v| *v /= n);
        s.mean_abandoned /= n;
        if s.total_delivered > 0 {
            s.mean_wait_secs = total_wait as f64 / s.total_delivered as f64;
        }
        s
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.mode.map_or("-", DispatchMode::as_str);
        writeln!(f, "{mode}: {} days, {} riders delivered", self.days, self.total_delivered)?;
        writeln!(f, "  service time (mean riders/day):")?;
        for (label, v) in ServiceBuckets::LABELS.iter().zip(&self.mean_service) {
            writeln!(f, "    {label:>7}  {v:>9.1}")?;
        }
        write!(f, "  occupancy:")?;
        for (slot, occ) in self.mean_occupancy.iter().enumerate() {
            write!(f, "  car {} {occ:.3}", slot + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "  abandoned/day: {:.2}", self.mean_abandoned)?;
        writeln!(f, "  swaps: {}  breakdowns: {}", self.total_swaps, self.total_breakdowns)?;
        write!(f, "  mean wait: {:.1} s", self.mean_wait_secs)
    }
}
