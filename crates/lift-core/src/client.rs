//! `Client`: one rider, from arrival to delivery or abandonment.
//!
//! A client value is owned by exactly one structure at a time: the arrival
//! event, a floor's waiting line, or a car's roster.  Boarding and alighting
//! move the value between them.

use std::cmp::Ordering;

use crate::{ClientId, Direction, FloorId, GROUND, SimTime, Zone};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    pub id: ClientId,

    /// When the rider first entered the building.  Orders the waiting line.
    pub arrival_time: SimTime,

    /// Floor the rider started from.
    pub origin: FloorId,

    /// Floor the rider is on now (updated when it alights).
    pub current_floor: FloorId,

    pub desired_floor: FloorId,

    /// Direction of the current leg.  Toward the ground floor while a swap is
    /// pending, toward the destination afterwards.
    pub direction: Direction,

    /// Origin and destination lie in different zones.  Fixed at creation.
    pub need_swap: bool,

    /// Inside a car.
    pub travelling: bool,

    /// Has boarded at least once.  Riders with service never abandon.
    pub got_service: bool,

    /// A swapped rider at the ground floor has requested its second car.
    pub reorder: bool,

    /// When the rider joined its current waiting line.
    pub queued_at: SimTime,

    /// Seconds spent in waiting lines so far.
    pub wait_secs: u64,

    /// Seconds spent riding so far.
    pub transit_secs: u64,
}

impl Client {
    pub fn new(id: ClientId, origin: FloorId, desired_floor: FloorId, arrival_time: SimTime) -> Self {
        let need_swap = Self::crosses_zones(origin, desired_floor);
        let direction = if need_swap {
            Direction::Down
        } else {
            Direction::between(origin, desired_floor)
        };
        Self {
            id,
            arrival_time,
            origin,
            current_floor: origin,
            desired_floor,
            direction,
            need_swap,
            travelling: false,
            got_service: false,
            reorder: false,
            queued_at: arrival_time,
            wait_secs: 0,
            transit_secs: 0,
        }
    }

    /// `true` iff both floors belong to a zone and the zones differ.  The
    /// ground floor is zone-neutral.
    #[inline]
    pub fn crosses_zones(origin: FloorId, destination: FloorId) -> bool {
        match (Zone::of(origin), Zone::of(destination)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Still on the leg toward the ground floor.
    #[inline]
    pub fn on_swap_leg(&self) -> bool {
        self.need_swap && self.current_floor != GROUND
    }

    /// Where the current leg ends.
    #[inline]
    pub fn leg_destination(&self) -> FloorId {
        if self.on_swap_leg() { GROUND } else { self.desired_floor }
    }

    /// Waited strictly longer than `threshold_secs` without ever boarding.
    #[inline]
    pub fn has_abandoned(&self, now: SimTime, threshold_secs: u64) -> bool {
        !self.got_service && now.since(self.arrival_time) > threshold_secs
    }

    /// Whether a car of `zone` heading up (`moving_up`) or down may take this
    /// rider.  A rider on its swap leg takes any car heading down; otherwise
    /// the car must head the rider's way and serve its destination.
    #[inline]
    pub fn can_board(&self, zone: Zone, moving_up: bool) -> bool {
        if self.on_swap_leg() {
            !moving_up
        } else {
            self.direction.matches(moving_up) && zone.serves(self.desired_floor)
        }
    }

    /// Seconds since the rider entered the building.
    #[inline]
    pub fn time_in_system(&self, now: SimTime) -> u64 {
        now.since(self.arrival_time)
    }

    /// Step into a car at `now`.
    pub fn board(&mut self, now: SimTime) {
        self.wait_secs += now.since(self.queued_at);
        self.travelling  = true;
        self.got_service = true;
    }

    /// Accumulate in-car time for one travel step.
    #[inline]
    pub fn ride(&mut self, secs: u64) {
        self.transit_secs += secs;
    }

    /// Step out at `floor` (final destination or swap point).
    pub fn alight(&mut self, floor: FloorId, now: SimTime) {
        self.travelling    = false;
        self.current_floor = floor;
        self.queued_at     = now;
        if floor != self.desired_floor {
            self.direction = Direction::between(floor, self.desired_floor);
        }
    }
}

// Waiting lines are ordered by arrival (FIFO service); the id breaks ties so
// the order is total and deterministic.

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Client {}

impl PartialOrd for Client {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Client {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.arrival_time, self.id).cmp(&(other.arrival_time, other.id))
    }
}
