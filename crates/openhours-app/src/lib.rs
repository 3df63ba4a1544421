//! Command-line front end: reports the state of the configured schedule.

pub mod error;
pub mod report;
