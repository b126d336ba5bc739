use lift_core::LiftError;
use lift_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("day {0} has already been run to closing time")]
    DayFinished(u32),

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
