//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

use crate::{ELEVATOR_COUNT, FLOOR_COUNT, LiftError, LiftResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Elevator car number, 1-based (cars 1–2 serve the low zone, 3–4 the high zone).
    pub struct ElevatorId(u8);
}

typed_id! {
    /// Floor number; 0 is the shared ground floor.
    pub struct FloorId(u8);
}

typed_id! {
    /// Per-day sequence number of a rider.
    pub struct ClientId(u32);
}

impl ElevatorId {
    /// Car for a 0-based slot in the building's elevator array.
    #[inline]
    pub fn from_slot(slot: usize) -> LiftResult<ElevatorId> {
        if slot < ELEVATOR_COUNT {
            Ok(ElevatorId(slot as u8 + 1))
        } else {
            Err(LiftError::UnknownElevator(ElevatorId(slot.min(u8::MAX as usize - 1) as u8 + 1)))
        }
    }

    /// 0-based position in the building's elevator array.
    #[inline]
    pub fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl FloorId {
    /// Validate a raw floor number against the building height.
    pub fn checked(n: u32) -> LiftResult<FloorId> {
        if n < FLOOR_COUNT as u32 {
            Ok(FloorId(n as u8))
        } else {
            Err(LiftError::UnknownFloor(FloorId(n.min(u8::MAX as u32) as u8)))
        }
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: FloorId) -> u64 {
        self.0.abs_diff(other.0) as u64
    }
}
