use chrono::TimeDelta;
use chrono_tz::Tz;
use openhours_test::component::Schedule;
use openhours_test::fixtures::{civil, monday_utc, utc_schedule};

use super::helpers::hours;

#[test_log::test]
fn immediate_fit_returns_query_instant() {
    let schedule = utc_schedule("mo 10:00-15:00");
    let at = monday_utc(10, 0);

    assert_eq!(schedule.when(&at, hours(4)), Some(at));
}

#[test_log::test]
fn late_query_moves_to_next_week() {
    let schedule = utc_schedule("mo 10:00-15:00");

    assert_eq!(
        schedule.when(&monday_utc(14, 0), hours(4)),
        Some(monday_utc(10, 0) + TimeDelta::weeks(1))
    );
}

#[test_log::test]
fn exact_fit_to_close_is_accepted() {
    let schedule = utc_schedule("mo 10:00-15:00");
    let at = monday_utc(11, 0);

    assert_eq!(schedule.when(&at, hours(4)), Some(at));
}

#[test_log::test]
fn window_too_short_is_absent() {
    let schedule = utc_schedule("mo 10:00-11:00");

    for hour in [0, 10, 12, 23] {
        assert_eq!(schedule.when(&monday_utc(hour, 0), hours(4)), None);
    }
}

#[test_log::test]
fn merged_windows_fit_longer_spans() {
    // Two touching ranges form one eight-hour window
    let schedule = utc_schedule("mo 08:00-12:00;mo 12:00-16:00");

    assert_eq!(
        schedule.when(&monday_utc(7, 0), hours(8)),
        Some(monday_utc(8, 0))
    );
}

#[test_log::test]
fn answer_in_schedule_timezone() {
    let schedule = Schedule::parse("tu 09:00-17:00", "America/New_York").unwrap();
    let at = civil(Tz::America__New_York, (2026, 3, 2), (12, 0, 0));

    let start = schedule.when(&at, hours(6)).unwrap();
    assert_eq!(start, civil(Tz::America__New_York, (2026, 3, 3), (9, 0, 0)));
}

#[test_log::test]
fn overnight_window_across_week_end_is_one_span() {
    let schedule = utc_schedule("sa 22:00-06:00;mo 09:00-10:00");
    let monday = monday_utc(12, 0);
    let saturday_night = monday + TimeDelta::days(5) + hours(10);

    assert_eq!(schedule.when(&monday, hours(8)), Some(saturday_night));
    assert_eq!(
        schedule.next_date(&(saturday_night + hours(1))),
        (true, Some(saturday_night + hours(8)))
    );
}
