use thiserror::Error;

/// Schedule construction and timezone resolution errors.
///
/// Grammar problems are never reported here; they are collected as
/// [`crate::grammar::Diagnostics`] while building.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    CoreError(#[from] openhours_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
