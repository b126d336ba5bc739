//! Simulation observer trait for tracing and data collection.

use lift_core::{Client, ElevatorId, FloorId, SimTime};
use lift_schedule::Event;

use crate::DayMetrics;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] as the day unfolds.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(u64);
///
/// impl SimObserver for Deliveries {
///     fn on_delivered(&mut self, _client: &Client, _car: ElevatorId, _now: SimTime) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each event has been handled.
    fn on_event(&mut self, _event: &Event) {}

    /// A rider got off at its destination.
    fn on_delivered(&mut self, _client: &Client, _car: ElevatorId, _now: SimTime) {}

    /// A rider got off at the ground floor to change zones.  `client` already
    /// carries its new direction.
    fn on_swap(&mut self, _client: &Client, _car: ElevatorId, _now: SimTime) {}

    /// A rider gave up waiting, during a boarding scan or the closing sweep.
    fn on_abandoned(&mut self, _client: &Client, _now: SimTime) {}

    /// A car got stuck at `floor`; it will be repaired at `repair_at`.
    fn on_breakdown(&mut self, _car: ElevatorId, _floor: FloorId, _repair_at: SimTime) {}

    /// Called once after the closing sweep with the day's final numbers.
    fn on_day_end(&mut self, _metrics: &DayMetrics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
