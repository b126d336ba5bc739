//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `FloorId`, `ClientId`                   |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`config`]      | `SimConfig`, `DispatchMode`                           |
//! | [`zone`]        | Building topology: `Zone`, `Direction`, constants     |
//! | [`client`]      | `Client`: one rider's lifecycle snapshot             |
//! | [`rng`]         | `SimRng` (per-day, seeded)                            |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::Client;
pub use config::{DispatchMode, SimConfig};
pub use error::{LiftError, LiftResult};
pub use ids::{ClientId, ElevatorId, FloorId};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
pub use zone::{CAR_CAPACITY, Direction, ELEVATOR_COUNT, FLOOR_COUNT, GROUND, Zone};
