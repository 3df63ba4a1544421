//! Value types for the reference week.
//!
//! Only the weekday and the time of day of an instant matter to a schedule,
//! so boundaries live in a single abstract week starting Sunday 00:00.

mod time_of_day;
mod week_instant;
mod weekday;

pub use time_of_day::TimeOfDay;
pub use week_instant::{WeekInstant, Window};
pub use weekday::Weekday;
