//! `lift-schedule`: what happens when: the event queue and rider arrivals.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`event`]     | `Event`, `EventKind`                                      |
//! | [`queue`]     | `EventQueue` (`BTreeMap<SimTime, VecDeque<Event>>`)       |
//! | [`table`]     | `ArrivalBand`, `ArrivalTable` (time-of-day probabilities) |
//! | [`arrivals`]  | `ArrivalGenerator` trait, `HourlyArrivals`, `ScriptedArrivals` |
//! | [`loader`]    | `load_table_csv`, `load_table_reader`                     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Event order
//!
//! Events fire in ascending time.  Events scheduled for the same instant fire
//! in the order they were pushed, which keeps every run deterministic.

pub mod arrivals;
pub mod error;
pub mod event;
pub mod loader;
pub mod queue;
pub mod table;


pub use arrivals::{Arrival, ArrivalGenerator, HourlyArrivals, ScriptedArrivals};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventKind};
pub use loader::{load_table_csv, load_table_reader};
pub use queue::EventQueue;
pub use table::{ArrivalBand, ArrivalTable};
