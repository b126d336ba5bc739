//! Per-car request queues.
//!
//! # Model
//!
//! Each direction has two ordered sets of floors:
//!
//! ```text
//!            current sweep   next sweep
//!   up       up              pending_up
//!   down     down            pending_down
//! ```
//!
//! A request goes into the current set when the car can reach it without
//! reversing (moving up and the floor is above, or moving down and the floor
//! is below) and into the next-sweep set otherwise.  Moving up the car takes
//! the lowest floor of `up`; moving down, the highest floor of `down`.
//!
//! A floor is never held twice for the same direction: it sits in at most
//! one of the current/next pair.

use std::collections::BTreeSet;

use lift_core::{Direction, FloorId, GROUND, Zone};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepQueues {
    pub up:           BTreeSet<FloorId>,
    pub down:         BTreeSet<FloorId>,
    pub pending_up:   BTreeSet<FloorId>,
    pub pending_down: BTreeSet<FloorId>,
}

impl SweepQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stop at `floor` for travel in `dir`, given where the car is
    /// and which way it is moving.
    pub fn request(&mut self, floor: FloorId, dir: Direction, car_floor: FloorId, moving_up: bool) {
        let (current, pending, ahead) = match dir {
            Direction::Up   => (&mut self.up, &mut self.pending_up, moving_up && floor > car_floor),
            Direction::Down => (&mut self.down, &mut self.pending_down, !moving_up && floor < car_floor),
            Direction::Stationary => return,
        };
        if ahead {
            pending.remove(&floor);
            current.insert(floor);
        } else if !current.contains(&floor) {
            pending.insert(floor);
        }
    }

    /// Both current-sweep sets are empty.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// At least one direction has nothing left in its current sweep.
    #[inline]
    pub fn has_open_sweep(&self) -> bool {
        self.up.is_empty() || self.down.is_empty()
    }

    /// No requests at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_idle() && self.pending_up.is_empty() && self.pending_down.is_empty()
    }

    /// Take the next stop in the direction of travel.
    pub fn pop_next(&mut self, moving_up: bool) -> Option<FloorId> {
        if moving_up {
            self.up.pop_first()
        } else {
            self.down.pop_last()
        }
    }

    /// The car stopped at `floor` heading `moving_up`: that direction's call
    /// there is answered.
    pub fn clear_answered(&mut self, floor: FloorId, moving_up: bool) {
        if moving_up {
            self.up.remove(&floor);
            self.pending_up.remove(&floor);
        } else {
            self.down.remove(&floor);
            self.pending_down.remove(&floor);
        }
    }

    /// The car reversed at the end of its range: requests staged for the new
    /// direction become the current sweep.
    pub fn roll_over(&mut self, moving_up: bool) {
        if moving_up {
            self.up.append(&mut self.pending_up);
        } else {
            self.down.append(&mut self.pending_down);
        }
    }

    /// Idle at the ground floor: stop at every floor of `zone` on the way
    /// down from its top.
    pub fn load_default_sweep(&mut self, zone: Zone) {
        let top = zone.top();
        self.down.extend(zone.service_floors().filter(|&f| f != top));
        debug_assert!(self.down.contains(&GROUND));
    }
}

/// Direction-reload rule, applied once before every on-demand travel step.
///
/// Returns the direction the car should move in (`true` = up):
///
/// 1. Requests remain ahead in the current direction → keep going.
/// 2. Otherwise stage the opposite direction's next-sweep set into its
///    current set; if that set now holds anything → reverse.
/// 3. Otherwise stage the current direction's next-sweep set and keep going.
///
/// After the call, the set for the returned direction is non-empty unless all
/// four sets are empty.
pub fn reload(q: &mut SweepQueues, moving_up: bool) -> bool {
    let SweepQueues { up, down, pending_up, pending_down } = q;
    let (ahead, pending_ahead, behind, pending_behind) = if moving_up {
        (up, pending_up, down, pending_down)
    } else {
        (down, pending_down, up, pending_up)
    };

    if !ahead.is_empty() {
        return moving_up;
    }
    behind.append(pending_behind);
    if !behind.is_empty() {
        return !moving_up;
    }
    ahead.append(pending_ahead);
    moving_up
}
