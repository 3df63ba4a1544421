//! Opening-hours schedules - integration test support.
//!
//! Re-exports the workspace crates and the fixtures shared by the
//! integration tests.

pub mod component {
    pub use openhours_core::{config, constants};
    pub use openhours_schedule::*;
}

pub mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Tz;
    use openhours_schedule::Schedule;

    /// Builds `spec` in UTC.
    #[must_use]
    pub fn utc_schedule(spec: &str) -> Schedule {
        Schedule::build(spec, Tz::UTC)
    }

    /// Civil instant in `zone`, taking the earlier reading when ambiguous.
    ///
    /// ## Panics
    /// Panics if the civil time does not exist in `zone`.
    #[must_use]
    #[expect(clippy::expect_used, reason = "fixtures use known-valid civil times")]
    pub fn civil(zone: Tz, date: (i32, u32, u32), time: (u32, u32, u32)) -> DateTime<Tz> {
        zone.with_ymd_and_hms(date.0, date.1, date.2, time.0, time.1, time.2)
            .earliest()
            .expect("civil time exists in zone")
    }

    /// UTC instant on Monday 2019-03-04.
    #[must_use]
    pub fn monday_utc(hour: u32, minute: u32) -> DateTime<Utc> {
        civil(Tz::UTC, (2019, 3, 4), (hour, minute, 0)).to_utc()
    }
}
