//! Simulation events.
//!
//! An `Event` is created by a handler, sits in the [`EventQueue`][crate::EventQueue]
//! until its time comes, and is consumed exactly once.

use std::fmt;

use lift_core::{Client, ElevatorId, FloorId, SimTime};

/// The four things that can happen in the building.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A rider walks up to a floor's waiting line.
    Arrival,
    /// A car's doors open: riders alight, the car may break down.
    DoorOpen,
    /// A car's doors close: riders board and the car departs.
    DoorClose,
    /// A stuck car is repaired.
    ElevatorFix,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival     => "arrival",
            EventKind::DoorOpen    => "door_open",
            EventKind::DoorClose   => "door_close",
            EventKind::ElevatorFix => "elevator_fix",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled occurrence.
///
/// `elevator` is `None` only for arrivals; `client` is `Some` only for
/// arrivals.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:     SimTime,
    pub kind:     EventKind,
    pub floor:    FloorId,
    pub elevator: Option<ElevatorId>,
    pub client:   Option<Client>,
}

impl Event {
    /// `client` reaches its origin floor at its arrival time.
    pub fn arrival(client: Client) -> Self {
        Self {
            time:     client.arrival_time,
            kind:     EventKind::Arrival,
            floor:    client.current_floor,
            elevator: None,
            client:   Some(client),
        }
    }

    pub fn door_open(time: SimTime, elevator: ElevatorId, floor: FloorId) -> Self {
        Self::car(time, EventKind::DoorOpen, elevator, floor)
    }

    pub fn door_close(time: SimTime, elevator: ElevatorId, floor: FloorId) -> Self {
        Self::car(time, EventKind::DoorClose, elevator, floor)
    }

    pub fn elevator_fix(time: SimTime, elevator: ElevatorId, floor: FloorId) -> Self {
        Self::car(time, EventKind::ElevatorFix, elevator, floor)
    }

    fn car(time: SimTime, kind: EventKind, elevator: ElevatorId, floor: FloorId) -> Self {
        Self { time, kind, floor, elevator: Some(elevator), client: None }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elevator {
            Some(car) => write!(f, "{} {} car {} floor {}", self.time, self.kind, car.0, self.floor.0),
            None      => write!(f, "{} {} floor {}", self.time, self.kind, self.floor.0),
        }
    }
}
