//! Building topology.
//!
//! ```text
//!   25 ┐
//!  ... │ high zone: cars 3, 4
//!   16 ┘
//!   15 ┐
//!  ... │ low zone:  cars 1, 2
//!    1 ┘
//!    0   ground floor, served by every car
//! ```
//!
//! A trip between the two zones needs a swap: ride down to the ground floor
//! and board a car of the other zone there.

use crate::{ElevatorId, FloorId};

/// Number of floors, ground included.
pub const FLOOR_COUNT: u8 = 26;

/// Number of cars in the building.
pub const ELEVATOR_COUNT: usize = 4;

/// Riders a car holds at most.
pub const CAR_CAPACITY: usize = 15;

/// The shared ground floor.
pub const GROUND: FloorId = FloorId(0);

/// First floor of the high zone.
const ZONE_SPLIT: u8 = 16;

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A contiguous floor range served by a fixed pair of cars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Floors 1–15.
    Low,
    /// Floors 16–25.
    High,
}

impl Zone {
    /// The zone `floor` belongs to, or `None` for the ground floor.
    #[inline]
    pub fn of(floor: FloorId) -> Option<Zone> {
        match floor.0 {
            0                       => None,
            n if n < ZONE_SPLIT     => Some(Zone::Low),
            n if n < FLOOR_COUNT    => Some(Zone::High),
            _                       => None,
        }
    }

    /// The zone a car serves.
    #[inline]
    pub fn of_elevator(id: ElevatorId) -> Zone {
        if id.0 <= 2 { Zone::Low } else { Zone::High }
    }

    /// Lowest floor of the zone proper (the ground floor is shared).
    #[inline]
    pub fn bottom(self) -> FloorId {
        match self {
            Zone::Low  => FloorId(1),
            Zone::High => FloorId(ZONE_SPLIT),
        }
    }

    /// Highest floor a car of this zone reaches.
    #[inline]
    pub fn top(self) -> FloorId {
        match self {
            Zone::Low  => FloorId(ZONE_SPLIT - 1),
            Zone::High => FloorId(FLOOR_COUNT - 1),
        }
    }

    /// `true` if a car of this zone stops at `floor` (ground included).
    #[inline]
    pub fn serves(self, floor: FloorId) -> bool {
        floor == GROUND || (self.bottom() <= floor && floor <= self.top())
    }

    /// Every floor served by this zone's cars, ascending.
    pub fn service_floors(self) -> impl Iterator<Item = FloorId> {
        std::iter::once(GROUND).chain((self.bottom().0..=self.top().0).map(FloorId))
    }

    /// The cars assigned to this zone.
    pub fn elevators(self) -> [ElevatorId; 2] {
        match self {
            Zone::Low  => [ElevatorId(1), ElevatorId(2)],
            Zone::High => [ElevatorId(3), ElevatorId(4)],
        }
    }

    /// Next served floor from `floor` in the given direction, or `None` past
    /// either end of the zone.  Crossing between the ground floor and the
    /// high zone skips the floors in between.
    pub fn step(self, floor: FloorId, up: bool) -> Option<FloorId> {
        match (up, floor) {
            (true, f) if f >= self.top()  => None,
            (true, f) if f == GROUND      => Some(self.bottom()),
            (true, f)                     => Some(FloorId(f.0 + 1)),
            (false, f) if f == GROUND     => None,
            (false, f) if f == self.bottom() => Some(GROUND),
            (false, f)                    => Some(FloorId(f.0 - 1)),
        }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction of a rider's current leg.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    /// Origin and destination coincide.
    Stationary,
}

impl Direction {
    /// Direction of travel from `from` to `to`.
    #[inline]
    pub fn between(from: FloorId, to: FloorId) -> Direction {
        match from.cmp(&to) {
            std::cmp::Ordering::Less    => Direction::Up,
            std::cmp::Ordering::Greater => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Stationary,
        }
    }

    /// `true` if a car moving up (`true`) or down (`false`) heads this way.
    #[inline]
    pub fn matches(self, moving_up: bool) -> bool {
        match self {
            Direction::Up         => moving_up,
            Direction::Down       => !moving_up,
            Direction::Stationary => false,
        }
    }
}
