//! Run configuration.
//!
//! The building topology (floors, cars, zones, capacity) is fixed and lives in
//! [`crate::zone`].  The timings, failure model,
//! dispatch policy and seed of a run are gathered in [`SimConfig`], whose `Default`
//! reproduces the reference operating day.

use std::ops::RangeInclusive;

use crate::{LiftError, LiftResult, SimTime};

/// How cars decide where to go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchMode {
    /// "Saturday" service: no call buttons.  Cars sweep their whole zone,
    /// stopping at every floor, and reverse at the ends.
    FreeRunning,
    /// "Suggested" service: hall calls are assigned to a car by the dispatch
    /// heuristic and each car serves its request queues sweep by sweep.
    #[default]
    OnDemand,
}

impl DispatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchMode::FreeRunning => "free_running",
            DispatchMode::OnDemand    => "on_demand",
        }
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical days.
    pub seed: u64,

    pub mode: DispatchMode,

    /// Doors open for the first time (06:00).
    pub open: SimTime,

    /// Closing time (20:00).  Events scheduled after it never fire.
    pub close: SimTime,

    /// Seconds the doors stay open before closing.
    pub door_dwell_secs: u64,

    /// Fixed per-stop overhead of an on-demand trip; the trip takes
    /// `base_door_cycle_secs + floors crossed` seconds.
    pub base_door_cycle_secs: u64,

    /// Free-running travel time between adjacent floors.
    pub floor_secs: u64,

    /// Free-running non-stop leg between the ground floor and floor 16.
    pub skip_leg_secs: u64,

    /// A rider who has never boarded abandons once its wait is strictly
    /// longer than this.
    pub abandon_after_secs: u64,

    /// Chance that a car gets stuck at each door opening.
    pub stuck_probability: f64,

    /// Repair duration range, drawn uniformly.
    pub repair_secs: RangeInclusive<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                 42,
            mode:                 DispatchMode::OnDemand,
            open:                 SimTime::from_hms(6, 0, 0),
            close:                SimTime::from_hms(20, 0, 0),
            door_dwell_secs:      5,
            base_door_cycle_secs: 4,
            floor_secs:           5,
            skip_leg_secs:        20,
            abandon_after_secs:   15 * 60,
            stuck_probability:    0.0005,
            repair_secs:          5 * 60..=15 * 60,
        }
    }
}

impl SimConfig {
    /// Same configuration, different dispatch policy.
    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject configurations the event loop cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.close <= self.open {
            return Err(LiftError::Config(format!(
                "closing time {} must be after opening time {}",
                self.close, self.open
            )));
        }
        if !(0.0..=1.0).contains(&self.stuck_probability) {
            return Err(LiftError::Config(format!(
                "stuck_probability {} is not a probability",
                self.stuck_probability
            )));
        }
        if self.repair_secs.is_empty() {
            return Err(LiftError::Config(format!(
                "repair range {:?} is empty",
                self.repair_secs
            )));
        }
        if self.door_dwell_secs == 0
            || self.base_door_cycle_secs == 0
            || self.floor_secs == 0
            || self.skip_leg_secs == 0
        {
            return Err(LiftError::Config(
                "door dwell, door cycle, and travel times must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
