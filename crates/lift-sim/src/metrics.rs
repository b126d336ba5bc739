//! Per-day statistics.

use lift_core::{DispatchMode, ELEVATOR_COUNT};

/// Number of service-time buckets.
pub const BUCKET_COUNT: usize = 6;

/// Width of one service-time bucket in seconds.
const BUCKET_SECS: u64 = 60;

/// Delivered riders counted by service time: ≤60 s, ≤120 s, ≤180 s, ≤240 s,
/// ≤300 s, and over 300 s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceBuckets(pub [u64; BUCKET_COUNT]);

impl ServiceBuckets {
    /// Column labels, in bucket order.
    pub const LABELS: [&'static str; BUCKET_COUNT] =
        ["le_60", "le_120", "le_180", "le_240", "le_300", "gt_300"];

    /// Bucket index for a service time.
    #[inline]
    pub fn bucket_of(service_secs: u64) -> usize {
        (service_secs.saturating_sub(1) / BUCKET_SECS).min(BUCKET_COUNT as u64 - 1) as usize
    }

    pub fn record(&mut self, service_secs: u64) {
        self.0[Self::bucket_of(service_secs)] += 1;
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

/// Everything one simulated day reports.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayMetrics {
    pub day:  u32,
    pub mode: DispatchMode,

    pub service: ServiceBuckets,

    /// Time-weighted mean riders aboard each car over the operating window,
    /// indexed by car slot.
    pub occupancy: [f64; ELEVATOR_COUNT],

    pub abandoned:  u64,
    pub delivered:  u64,
    pub swaps:      u64,
    pub breakdowns: u64,

    /// Riders still in a waiting line after the closing sweep.
    pub waiting_at_close: u64,

    /// Seconds delivered riders spent in waiting lines, summed.
    pub total_wait_secs: u64,
    pub mean_wait_secs:  f64,
}

impl DayMetrics {
    pub fn new(day: u32, mode: DispatchMode) -> Self {
        Self { day, mode, ..Self::default() }
    }

    /// Count one delivered rider.
    pub fn record_delivery(&mut self, service_secs: u64, wait_secs: u64) {
        self.delivered += 1;
        self.total_wait_secs += wait_secs;
        self.service.record(service_secs);
    }

    /// Derive the averages once the day is over.
    pub(crate) fn close(&mut self) {
        self.mean_wait_secs = if self.delivered == 0 {
            0.0
        } else {
            self.total_wait_secs as f64 / self.delivered as f64
        };
    }
}
