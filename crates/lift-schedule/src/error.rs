use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("arrival table parse error: {0}")]
    Parse(String),

    #[error("invalid arrival band: {0}")]
    InvalidBand(String),

    #[error("invalid scripted arrival: {0}")]
    InvalidArrival(String),

    #[error(transparent)]
    Building(#[from] LiftError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
