//! `lift-sim`: the discrete-event loop for one building day.
//!
//! # Event loop
//!
//! ```text
//! while the next event is not past closing time:
//!   pop the earliest event (FIFO among equal times), advance the clock
//!   Arrival     → draw the next arrival; on demand, dispatch a car
//!   DoorOpen    → riders alight; swapped riders re-dispatch; maybe stick
//!   DoorClose   → riders board (or abandon); travel; schedule DoorOpen
//!   ElevatorFix → unstick; schedule DoorOpen at the same floor
//! closing sweep: abandon overdue riders, settle occupancy, report metrics
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_days` runs days on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_schedule::{ArrivalTable, HourlyArrivals};
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let generator = HourlyArrivals::new(ArrivalTable::default())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), generator).build()?;
//! let metrics = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod days;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use days::run_days;
pub use error::{SimError, SimResult};
pub use metrics::{BUCKET_COUNT, DayMetrics, ServiceBuckets};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
