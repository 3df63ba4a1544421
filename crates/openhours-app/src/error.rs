use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ScheduleError(#[from] openhours_schedule::ScheduleError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
