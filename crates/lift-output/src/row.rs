//! Plain data row types written by output backends.

use lift_core::{DispatchMode, ELEVATOR_COUNT};
use lift_schedule::{Event, EventKind};
use lift_sim::{BUCKET_COUNT, DayMetrics};

/// One simulated day's headline numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRow {
    pub day:              u32,
    pub mode:             DispatchMode,
    /// Delivered riders per service-time bucket (see `ServiceBuckets::LABELS`).
    pub service:          [u64; BUCKET_COUNT],
    /// Mean riders aboard, per car slot.
    pub occupancy:        [f64; ELEVATOR_COUNT],
    pub abandoned:        u64,
    pub delivered:        u64,
    pub swaps:            u64,
    pub breakdowns:       u64,
    pub waiting_at_close: u64,
    pub mean_wait_secs:   f64,
}

impl From<&DayMetrics> for DayRow {
    fn from(m: &DayMetrics) -> Self {
        Self {
            day:              m.day,
            mode:             m.mode,
            service:          m.service.0,
            occupancy:        m.occupancy,
            abandoned:        m.abandoned,
            delivered:        m.delivered,
            swaps:            m.swaps,
            breakdowns:       m.breakdowns,
            waiting_at_close: m.waiting_at_close,
            mean_wait_secs:   m.mean_wait_secs,
        }
    }
}

/// One handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub day:       u32,
    /// Seconds since midnight.
    pub time_secs: u64,
    pub kind:      EventKind,
    pub floor:     u8,
    /// Car number; `u8::MAX` for arrivals.
    pub elevator:  u8,
    /// Rider id; `u32::MAX` for car events.
    pub client:    u32,
}

impl EventRow {
    pub fn new(day: u32, event: &Event) -> Self {
        Self {
            day,
            time_secs: event.time.0,
            kind:      event.kind,
            floor:     event.floor.0,
            elevator:  event.elevator.map_or(u8::MAX, |id| id.0),
            client:    event.client.as_ref().map_or(u32::MAX, |c| c.id.0),
        }
    }
}
