//! Opening-hours schedules.
//!
//! Parses a compact opening-hours specification such as
//! `mo-fr 08:00-18:00,19:00-21:00;su 10:00-12:00` into a canonical weekly
//! [`Schedule`] and answers queries against it: whether an instant is open,
//! how long until the state changes, and when a window long enough for a
//! given duration next starts.
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone};
//! use chrono_tz::Europe::Berlin;
//! use openhours_schedule::Schedule;
//!
//! let schedule = Schedule::build("Mo-Fr 08:00-18:00", Berlin);
//!
//! // Monday 2026-03-02, 09:30 local time
//! let monday = Berlin.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
//! assert!(schedule.matches(&monday));
//!
//! let (open, until_change) = schedule.next_duration(&monday);
//! assert!(open);
//! assert_eq!(until_change, Some(TimeDelta::minutes(8 * 60 + 30)));
//! ```
//!
//! Parsing is deliberately forgiving: malformed day or time tokens are
//! dropped (or zeroed) rather than rejected. Use
//! [`Schedule::build_with_diagnostics`] to see what was dropped.

pub mod error;
pub mod grammar;
pub mod model;
pub mod schedule;
pub mod timezone;

pub use error::{ScheduleError, ScheduleResult};
pub use grammar::{Diagnostics, ParseError, ParseErrorKind};
pub use model::{TimeOfDay, WeekInstant, Weekday, Window};
pub use schedule::Schedule;
pub use timezone::{OffsetResolver, TransitionTable, resolve_timezone};
