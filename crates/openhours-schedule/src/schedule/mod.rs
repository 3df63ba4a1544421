//! The canonical weekly schedule.
//!
//! A [`Schedule`] is a strictly ascending sequence of reference-week
//! boundaries where every even element opens a window and the following odd
//! element closes it. Windows never overlap or touch. An empty schedule is
//! always closed; a single window spanning the whole week is always open.
//!
//! Schedules are immutable once built and hold no interior mutability, so a
//! shared reference can be queried from any number of threads.

mod build;
mod merge;
mod query;


use std::fmt;

use chrono_tz::Tz;
use openhours_core::error::CoreError;

use crate::error::ScheduleResult;
use crate::model::{WeekInstant, Window};

pub use merge::merge;

/// Canonical weekly opening hours bound to a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<R = Tz> {
    boundaries: Vec<WeekInstant>,
    zone: R,
}

impl<R> Schedule<R> {
    /// ## Summary
    /// Builds a schedule from raw open/close boundary pairs, canonicalizing
    /// them (pairs may be unsorted, overlapping or touching).
    ///
    /// ## Errors
    /// Returns `CoreError::InvariantViolation` if the number of boundaries is
    /// odd or a pair does not open strictly before it closes.
    pub fn from_boundaries(boundaries: &[WeekInstant], zone: R) -> ScheduleResult<Self> {
        if boundaries.len() % 2 == 1 {
            return Err(CoreError::InvariantViolation(
                "every open boundary needs a close boundary",
            )
            .into());
        }

        let windows = boundaries
            .chunks_exact(2)
            .map(|pair| match pair {
                [open, close] => Window::new(*open, *close),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(CoreError::InvariantViolation(
                "open boundary must precede its close boundary",
            ))?;

        Ok(Self {
            boundaries: merge(windows),
            zone,
        })
    }

    /// The boundary sequence, alternating open and close.
    #[must_use]
    pub fn boundaries(&self) -> &[WeekInstant] {
        &self.boundaries
    }

    /// The open windows in ascending order.
    pub fn windows(&self) -> impl Iterator<Item = Window> {
        self.boundaries
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [open, close] => Window::new(*open, *close),
                _ => None,
            })
    }

    /// The timezone the schedule is expressed in.
    #[must_use]
    pub const fn zone(&self) -> &R {
        &self.zone
    }

    #[must_use]
    pub fn is_always_closed(&self) -> bool {
        self.boundaries.is_empty()
    }

    #[must_use]
    pub fn is_always_open(&self) -> bool {
        self.boundaries == [WeekInstant::week_start(), WeekInstant::week_end()]
    }
}

impl<R> fmt::Display for Schedule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_always_closed() {
            return write!(f, "closed");
        }
        for (index, window) in self.windows().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{window}")?;
        }
        Ok(())
    }
}
