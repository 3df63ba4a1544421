use chrono::TimeDelta;
use openhours_test::component::Schedule;
use openhours_test::component::schedule::merge;
use openhours_test::fixtures::{monday_utc, utc_schedule};

use super::helpers::{assert_canonical, assert_same_schedule, hours};

#[test_log::test]
fn rule_and_day_order_do_not_matter() {
    assert_same_schedule("mo,tu 10:00-11:00", "tu,mo 10:00-11:00");
    assert_same_schedule(
        "mo 10:00-11:00;we 12:00-14:00",
        "we 12:00-14:00;mo 10:00-11:00",
    );
}

#[test_log::test]
fn contained_ranges_collapse() {
    assert_same_schedule("mo-fr 10:00-15:00,00:00-24:00", "mo-fr 00:00-24:00");
}

#[test_log::test]
fn halves_of_the_week_equal_the_default() {
    assert_same_schedule("su-sa 00:00-12:00;su-sa 12:00-24:00", "");
    assert!(utc_schedule("").is_always_open());
}

#[test_log::test]
fn rebuilding_from_boundaries_is_identity() {
    let schedule = utc_schedule("mo-fr 08:00-12:00,13:00-18:00;sa 10:00-14:00;fr 17:00-20:00");
    assert_canonical(&schedule);

    let rebuilt = Schedule::from_boundaries(schedule.boundaries(), *schedule.zone()).unwrap();
    assert_eq!(rebuilt, schedule);

    let remerged = merge(schedule.windows().collect());
    assert_eq!(remerged, schedule.boundaries());
}

#[test_log::test]
fn malformed_rules_never_prevent_building() {
    for spec in [
        "mo",
        "mo 08:00",
        "xx 08:00-09:00",
        "mo 8-9",
        "mo-fr-sa 08:00-09:00",
        ";;;",
        "mo 25:00-26:00",
        "mo 08:00-09:00 extra",
    ] {
        let schedule = utc_schedule(spec);
        assert_canonical(&schedule);
    }
}

#[test_log::test]
fn match_is_half_open() {
    let schedule = utc_schedule("mo 08:00-18:00");

    assert!(schedule.matches(&monday_utc(8, 0)));
    assert!(schedule.matches(&(monday_utc(18, 0) - TimeDelta::nanoseconds(1))));
    assert!(!schedule.matches(&monday_utc(18, 0)));
    assert!(!schedule.matches(&(monday_utc(8, 0) - TimeDelta::seconds(1))));
}

#[test_log::test]
fn next_duration_across_boundaries() {
    let schedule = utc_schedule("mo 08:00-18:00");

    assert_eq!(schedule.next_duration(&monday_utc(7, 0)), (false, Some(hours(1))));
    assert_eq!(schedule.next_duration(&monday_utc(8, 0)), (true, Some(hours(10))));
    assert_eq!(
        schedule.next_duration(&monday_utc(18, 0)),
        (false, Some(hours(7 * 24 - 10)))
    );
}

#[test_log::test]
fn next_date_lands_on_the_change() {
    let schedule = utc_schedule("mo-fr 09:00-17:00");

    let (open, change) = schedule.next_date(&monday_utc(17, 0));
    assert!(!open);
    let change = change.unwrap();
    assert_eq!(change, monday_utc(9, 0) + TimeDelta::days(1));
    assert!(schedule.matches(&change));
}
