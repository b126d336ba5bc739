//! Rider arrival generators.
//!
//! The simulation asks its [`ArrivalGenerator`] for the next rider each time
//! one arrives, so only one future arrival is ever queued.

use std::collections::VecDeque;

use rand::distributions::Distribution;
use rand_distr::Exp;

use lift_core::{FloorId, SimRng, SimTime};

use crate::{ArrivalTable, ScheduleError, ScheduleResult};

/// A rider about to enter the building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub time:        SimTime,
    pub origin:      FloorId,
    pub destination: FloorId,
}

/// Source of riders.
///
/// # Contract
///
/// - The returned `time` is never earlier than `now`.
/// - `origin != destination`, both inside the building.
/// - `None` means no more riders today.
/// - Must be deterministic given the same `rng` state.
pub trait ArrivalGenerator {
    fn next_arrival(&mut self, now: SimTime, rng: &mut SimRng) -> Option<Arrival>;
}

// ── HourlyArrivals ────────────────────────────────────────────────────────────

/// Poisson arrivals whose rate and trip mix follow an [`ArrivalTable`].
pub struct HourlyArrivals {
    table: ArrivalTable,
    /// One gap distribution per band, in table order.
    gaps:  Vec<Exp<f64>>,
}

impl HourlyArrivals {
    pub fn new(table: ArrivalTable) -> ScheduleResult<Self> {
        let gaps = table
            .bands()
            .iter()
            .map(|b| {
                Exp::new(1.0 / b.mean_gap_secs).map_err(|e| {
                    ScheduleError::InvalidBand(format!("mean gap {}: {e}", b.mean_gap_secs))
                })
            })
            .collect::<ScheduleResult<_>>()?;
        Ok(Self { table, gaps })
    }

    pub fn table(&self) -> &ArrivalTable {
        &self.table
    }
}

impl ArrivalGenerator for HourlyArrivals {
    fn next_arrival(&mut self, now: SimTime, rng: &mut SimRng) -> Option<Arrival> {
        let (from, slot) = self.table.band_from(now)?;
        // Whole seconds, at least one, so arrivals never pile onto `now`.
        let gap = self.gaps[slot].sample(rng.inner()).ceil().max(1.0) as u64;
        let (origin, destination) = self.table.bands()[slot].sample_trip(rng);
        Some(Arrival { time: from + gap, origin, destination })
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

/// Replays a fixed list of arrivals in time order.
///
/// Used by tests and demos that need an exact, reproducible rider stream.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArrivals {
    pending: VecDeque<Arrival>,
}

impl ScriptedArrivals {
    /// Validate and sort `arrivals` by time (stable: equal times keep their
    /// listed order).
    pub fn new(mut arrivals: Vec<Arrival>) -> ScheduleResult<Self> {
        for a in &arrivals {
            FloorId::checked(a.origin.0 as u32)?;
            FloorId::checked(a.destination.0 as u32)?;
            if a.origin == a.destination {
                return Err(ScheduleError::InvalidArrival(format!(
                    "rider at {} wants to stay on floor {}",
                    a.time, a.origin.0
                )));
            }
        }
        arrivals.sort_by_key(|a| a.time);
        Ok(Self { pending: arrivals.into() })
    }

    /// Riders not yet handed out.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl ArrivalGenerator for ScriptedArrivals {
    fn next_arrival(&mut self, now: SimTime, _rng: &mut SimRng) -> Option<Arrival> {
        let mut next = self.pending.pop_front()?;
        next.time = next.time.max(now);
        Some(next)
    }
}
