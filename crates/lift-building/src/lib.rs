//! `lift-building`: the cars and floors of the building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`sweep`]     | `SweepQueues`: current/next-sweep request sets, `reload` |
//! | [`elevator`]  | `Elevator`: one car's state machine and travel step      |
//! | [`floor`]     | `Floor`: a waiting line, boarding and alighting          |
//! | [`dispatch`]  | `order_elevator`: assigns a hall call to one car         |
//!
//! Nothing here schedules events or reads the clock: callers pass `now` in
//! and turn returned travel times into future events.

pub mod dispatch;
pub mod elevator;
pub mod floor;
pub mod sweep;


pub use dispatch::{order_elevator, score, select_elevator};
pub use elevator::Elevator;
pub use floor::{BoardOutcome, DropOutcome, Floor};
pub use sweep::{SweepQueues, reload};
