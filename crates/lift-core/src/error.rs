//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `From`.

use thiserror::Error;

use crate::{ElevatorId, FloorId};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("{0} does not exist in this building")]
    UnknownElevator(ElevatorId),

    #[error("{0} does not exist in this building")]
    UnknownFloor(FloorId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
