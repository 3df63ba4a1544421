use chrono::TimeDelta;
use chrono_tz::Tz;
use openhours_test::component::{Schedule, TransitionTable};
use openhours_test::fixtures::civil;

use super::helpers::hours;

const NEW_YORK: Tz = Tz::America__New_York;
const BERLIN: Tz = Tz::Europe__Berlin;

#[test_log::test]
fn spring_forward_shortens_duration() {
    let schedule = Schedule::build("su 03:00-05:00", NEW_YORK);
    // 2026-03-08 02:00 local is skipped
    let midnight = civil(NEW_YORK, (2026, 3, 8), (0, 0, 0));

    assert_eq!(schedule.next_duration(&midnight), (false, Some(hours(2))));

    let (_, opens) = schedule.next_date(&midnight);
    assert_eq!(opens, Some(civil(NEW_YORK, (2026, 3, 8), (3, 0, 0))));
}

#[test_log::test]
fn fall_back_lengthens_duration() {
    let schedule = Schedule::build("su 03:00-05:00", NEW_YORK);
    // 2026-11-01 01:00 local happens twice
    let midnight = civil(NEW_YORK, (2026, 11, 1), (0, 0, 0));

    assert_eq!(schedule.next_duration(&midnight), (false, Some(hours(4))));
}

#[test_log::test]
fn european_transition() {
    let schedule = Schedule::build("su 03:00-05:00", BERLIN);
    let midnight = civil(BERLIN, (2026, 3, 29), (0, 0, 0));

    assert_eq!(schedule.next_duration(&midnight), (false, Some(hours(2))));
    assert_eq!(
        schedule.when(&midnight, hours(2)),
        Some(civil(BERLIN, (2026, 3, 29), (3, 0, 0)))
    );
}

#[test_log::test]
fn ordinary_week_needs_no_correction() {
    let schedule = Schedule::build("su 03:00-05:00", NEW_YORK);
    let midnight = civil(NEW_YORK, (2026, 3, 1), (0, 0, 0));

    assert_eq!(schedule.next_duration(&midnight), (false, Some(hours(3))));
}

#[test_log::test]
fn synthetic_transition_table() {
    let standard = chrono::FixedOffset::east_opt(0).unwrap();
    let summer = chrono::FixedOffset::east_opt(3600).unwrap();
    let switch = civil(Tz::UTC, (2026, 3, 8), (1, 0, 0)).to_utc();
    let zone = TransitionTable::new(standard).with_transition(switch, summer);

    let schedule = Schedule::build("su 03:00-05:00", zone);
    let midnight = civil(Tz::UTC, (2026, 3, 8), (0, 0, 0)).to_utc();

    assert_eq!(
        schedule.next_duration(&midnight),
        (false, Some(hours(3) - TimeDelta::hours(1)))
    );
}
