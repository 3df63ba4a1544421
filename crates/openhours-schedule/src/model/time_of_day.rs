use std::fmt;

use chrono::TimeDelta;

/// Offset into a day, from `00:00:00` up to and including `24:00:00`.
///
/// `24:00` is the end-of-day sentinel and is the only value with hour 24.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub const END_OF_DAY: Self = Self {
        hour: 24,
        minute: 0,
        second: 0,
    };

    /// Creates a time of day, or `None` when a field is out of range.
    #[must_use]
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        let in_range = match hour {
            0..=23 => minute <= 59 && second <= 59,
            24 => minute == 0 && second == 0,
            _ => false,
        };
        in_range.then_some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Elapsed time since the start of the day.
    #[must_use]
    pub fn as_delta(self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.hour))
            + TimeDelta::minutes(i64::from(self.minute))
            + TimeDelta::seconds(i64::from(self.second))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if self.second != 0 {
            write!(f, ":{:02}", self.second)?;
        }
        Ok(())
    }
}
