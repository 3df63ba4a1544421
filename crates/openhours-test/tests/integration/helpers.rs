//! Shared assertions for integration tests.

use chrono::TimeDelta;
use openhours_test::component::{Schedule, WeekInstant};

/// Asserts that two specifications build identical schedules.
pub fn assert_same_schedule(left: &str, right: &str) {
    let a: Schedule = openhours_test::fixtures::utc_schedule(left);
    let b: Schedule = openhours_test::fixtures::utc_schedule(right);
    assert_eq!(a, b, "`{left}` and `{right}` should build the same schedule");
}

/// Asserts the schedule boundaries are ascending and evenly paired.
pub fn assert_canonical(schedule: &Schedule) {
    let boundaries = schedule.boundaries();
    assert_eq!(boundaries.len() % 2, 0, "odd boundary count");
    assert!(
        boundaries.windows(2).all(|pair| pair[0] < pair[1]),
        "boundaries not strictly ascending: {boundaries:?}"
    );
    assert!(boundaries.iter().all(|b| *b <= WeekInstant::week_end()));
}

pub fn hours(hours: i64) -> TimeDelta {
    TimeDelta::hours(hours)
}
