//! Queries against a built schedule.
//!
//! Every query projects the instant onto the reference week using its civil
//! time in the schedule's timezone and classifies it by the index of the
//! first boundary strictly after it: an odd index means the instant lies
//! inside an open window.
//!
//! Durations returned to the caller are real elapsed time. A naive
//! difference computed in the reference week is corrected by the change in
//! UTC offset between the query instant and the instant it points at, so a
//! DST transition in between shortens or lengthens it accordingly.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use super::Schedule;
use crate::model::{WeekInstant, Window};
use crate::timezone::OffsetResolver;

const fn is_open_index(index: usize) -> bool {
    index % 2 == 1
}

impl<R: OffsetResolver> Schedule<R> {
    /// Returns whether `instant` falls inside an open window. Windows are
    /// half-open: open at their start, closed at their end.
    #[must_use]
    pub fn matches<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let projected = self.project(&instant.with_timezone(&Utc));
        is_open_index(self.match_index(projected))
    }

    /// ## Summary
    /// Returns whether `instant` is open and how long until that changes.
    ///
    /// When open, the duration runs until the window closes; when closed,
    /// until the next window opens, wrapping into the following week if
    /// needed. The duration is `None` only for an always-closed schedule,
    /// which has no transition to wait for.
    #[must_use]
    pub fn next_duration<Z: TimeZone>(
        &self,
        instant: &DateTime<Z>,
    ) -> (bool, Option<TimeDelta>) {
        let start = instant.with_timezone(&Utc);
        let projected = self.project(&start);
        let index = self.match_index(projected);
        let open = is_open_index(index);

        let Some(&first) = self.boundaries.first() else {
            return (open, None);
        };

        // Past the last boundary the next one is the first of next week.
        let next = self.boundaries.get(index).copied().unwrap_or(first);
        let naive = match self.wrapped_tail().filter(|_| open && next == WeekInstant::week_end()) {
            // Still open on Sunday: the window closes at the end of its tail.
            Some(tail) => tail.close() - projected + WeekInstant::week_length(),
            None => {
                let naive = next - projected;
                if naive <= TimeDelta::zero() {
                    naive + WeekInstant::week_length()
                } else {
                    naive
                }
            }
        };

        let duration = self.corrected(&start, naive);
        tracing::trace!(%projected, %next, open, ?duration, "Next transition");

        (open, Some(duration))
    }

    /// ## Summary
    /// Same as [`Schedule::next_duration`] but returns the instant of the
    /// next transition, in the caller's timezone.
    #[must_use]
    pub fn next_date<Z: TimeZone>(
        &self,
        instant: &DateTime<Z>,
    ) -> (bool, Option<DateTime<Z>>) {
        let (open, duration) = self.next_duration(instant);
        (
            open,
            duration.and_then(|duration| instant.clone().checked_add_signed(duration)),
        )
    }

    /// ## Summary
    /// Finds the earliest instant at or after `instant` from which the
    /// schedule stays open for at least `duration` without interruption.
    ///
    /// Returns `instant` itself when the current window has room left,
    /// otherwise the opening of the first window long enough, looking at
    /// most one week ahead. Returns `None` when no window can hold
    /// `duration`.
    #[must_use]
    pub fn when<Z: TimeZone>(
        &self,
        instant: &DateTime<Z>,
        duration: TimeDelta,
    ) -> Option<DateTime<Z>> {
        let len = self.boundaries.len();
        if len == 0 {
            return None;
        }

        let start = instant.with_timezone(&Utc);
        let projected = self.project(&start);
        let index = self.match_index(projected);

        let tail = self.wrapped_tail();
        let fits = |open: WeekInstant, close: WeekInstant| {
            let reach = match tail.filter(|_| close == WeekInstant::week_end()) {
                Some(tail) => close.offset() + tail.length(),
                None => close.offset(),
            };
            open.offset()
                .checked_add(&duration)
                .is_some_and(|end| end <= reach)
        };

        let first_open = if is_open_index(index) {
            if fits(projected, self.boundaries[index]) {
                return Some(instant.clone());
            }
            index + 1
        } else {
            index
        };

        let candidate = (0..len / 2)
            .map(|step| (first_open + 2 * step) % len)
            .find(|&open| fits(self.boundaries[open], self.boundaries[open + 1]))?;

        // Windows before the query instant belong to next week.
        let mut naive = self.boundaries[candidate] - projected;
        if naive < TimeDelta::zero() {
            naive += WeekInstant::week_length();
        }

        let duration = self.corrected(&start, naive);
        tracing::trace!(
            %projected,
            candidate = %self.boundaries[candidate],
            ?duration,
            "Window found"
        );

        instant.clone().checked_add_signed(duration)
    }

    /// The window opening on Sunday 00:00 when it continues a window that
    /// closes at the end of the week. The two form one open span across the
    /// wrap, so queries reaching the week end carry on into it.
    fn wrapped_tail(&self) -> Option<Window> {
        match self.boundaries.as_slice() {
            [open, close, .., last]
                if *open == WeekInstant::week_start() && *last == WeekInstant::week_end() =>
            {
                Window::new(*open, *close)
            }
            _ => None,
        }
    }

    /// Index of the first boundary strictly after `projected`, or the
    /// number of boundaries when there is none.
    fn match_index(&self, projected: WeekInstant) -> usize {
        self.boundaries
            .partition_point(|boundary| *boundary <= projected)
    }

    /// Civil time of `instant` in the schedule's timezone, on the reference week.
    fn project(&self, instant: &DateTime<Utc>) -> WeekInstant {
        let offset = self.zone.offset_at(instant);
        WeekInstant::project(&instant.with_timezone(&offset).naive_local())
    }

    /// Turns a civil-time difference into elapsed time by removing the UTC
    /// offset change between `start` and `start + naive`.
    fn corrected(&self, start: &DateTime<Utc>, naive: TimeDelta) -> TimeDelta {
        let Some(end) = start.checked_add_signed(naive) else {
            return naive;
        };
        let before = self.zone.offset_at(start).local_minus_utc();
        let after = self.zone.offset_at(&end).local_minus_utc();
        naive - TimeDelta::seconds(i64::from(after - before))
    }
}
