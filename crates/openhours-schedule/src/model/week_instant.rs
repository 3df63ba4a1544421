//! Instants and windows inside the reference week.

use std::fmt;
use std::ops::Sub;

use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use super::{TimeOfDay, Weekday};

/// A point in the reference week, stored as the elapsed time since
/// Sunday 00:00.
///
/// Values range from the start of the week up to and including its end
/// (`sa 24:00`), which only ever appears as a close boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekInstant(TimeDelta);

impl WeekInstant {
    /// Length of the reference week.
    #[must_use]
    pub fn week_length() -> TimeDelta {
        TimeDelta::weeks(1)
    }

    /// Sunday 00:00.
    #[must_use]
    pub fn week_start() -> Self {
        Self(TimeDelta::zero())
    }

    /// Saturday 24:00.
    #[must_use]
    pub fn week_end() -> Self {
        Self(Self::week_length())
    }

    /// Anchors a weekday and a time of day to the reference week.
    #[must_use]
    pub fn from_parts(day: Weekday, time: TimeOfDay) -> Self {
        Self(TimeDelta::days(i64::from(day.index())) + time.as_delta())
    }

    /// Projects a civil date-time onto the reference week, keeping only its
    /// weekday and time of day.
    #[must_use]
    pub fn project(civil: &NaiveDateTime) -> Self {
        let day = Weekday::from(civil.weekday());
        let since_midnight = civil.time().signed_duration_since(NaiveTime::MIN);
        Self(TimeDelta::days(i64::from(day.index())) + since_midnight)
    }

    /// Elapsed time since Sunday 00:00.
    #[must_use]
    pub const fn offset(self) -> TimeDelta {
        self.0
    }
}

impl Sub for WeekInstant {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0 - rhs.0
    }
}

impl fmt::Display for WeekInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= Self::week_length() {
            return write!(f, "{} {}", Weekday::Saturday, TimeOfDay::END_OF_DAY);
        }

        let days = self.0.num_days();
        let weekday = u8::try_from(days).map_or(Weekday::Saturday, Weekday::from_index);
        let time = NaiveTime::MIN + (self.0 - TimeDelta::days(days));
        if time.second() == 0 {
            write!(f, "{weekday} {}", time.format("%H:%M"))
        } else {
            write!(f, "{weekday} {}", time.format("%H:%M:%S"))
        }
    }
}

/// A half-open span `[open, close)` of the reference week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Window {
    open: WeekInstant,
    close: WeekInstant,
}

impl Window {
    /// Creates a window, or `None` when `open` is not strictly before `close`.
    #[must_use]
    pub fn new(open: WeekInstant, close: WeekInstant) -> Option<Self> {
        (open < close).then_some(Self { open, close })
    }

    /// ## Summary
    /// Builds the windows covering `length` starting at `open`.
    ///
    /// A span running past the end of the week is split in two, the
    /// remainder continuing from Sunday 00:00. A non-positive length yields
    /// no window.
    #[must_use]
    pub fn spanning(open: WeekInstant, length: TimeDelta) -> Vec<Self> {
        let week = WeekInstant::week_length();
        let end = open.0 + length;
        if end <= week {
            return Self::new(open, WeekInstant(end)).into_iter().collect();
        }

        let remainder = (end - week).min(week);
        [
            Self::new(open, WeekInstant::week_end()),
            Self::new(WeekInstant::week_start(), WeekInstant(remainder)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    #[must_use]
    pub const fn open(self) -> WeekInstant {
        self.open
    }

    #[must_use]
    pub const fn close(self) -> WeekInstant {
        self.close
    }

    #[must_use]
    pub fn length(self) -> TimeDelta {
        self.close - self.open
    }

    /// Extends this window to also cover `other` when the two overlap or
    /// touch. Returns `false`, leaving `self` untouched, when there is a gap.
    pub(crate) fn absorb(&mut self, other: Self) -> bool {
        if other.open > self.close || self.open > other.close {
            return false;
        }
        self.open = self.open.min(other.open);
        self.close = self.close.max(other.close);
        true
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.open, self.close)
    }
}
