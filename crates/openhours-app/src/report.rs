//! Evaluation of the configured schedule at a given instant.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use openhours_core::config::Settings;
use openhours_schedule::{Schedule, resolve_timezone};
use serde::Serialize;

use crate::error::AppResult;

/// Snapshot of a schedule's state at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timezone: String,
    /// Canonical windows of the schedule.
    pub schedule: String,
    pub at: DateTime<FixedOffset>,
    pub open: bool,
    /// Next time the schedule opens or closes; absent when always closed.
    pub next_change: Option<DateTime<FixedOffset>>,
    pub fit: Option<Fit>,
    /// Parts of the specification that were ignored.
    pub ignored: Vec<String>,
}

/// Answer to "when can I next get this many minutes uninterrupted".
#[derive(Debug, Clone, Serialize)]
pub struct Fit {
    pub minutes: u32,
    pub starts_at: Option<DateTime<FixedOffset>>,
}

impl Report {
    /// ## Summary
    /// Builds the configured schedule and evaluates it at `now`.
    ///
    /// ## Errors
    /// Returns an error if the configured timezone cannot be resolved.
    pub fn generate(settings: &Settings, now: DateTime<Utc>) -> AppResult<Self> {
        let zone = resolve_timezone(&settings.schedule.timezone)?;
        let (schedule, diagnostics) =
            Schedule::build_with_diagnostics(&settings.schedule.spec, zone);

        if settings.schedule.is_default() {
            tracing::info!("No schedule configured, assuming always open");
        }
        for error in &diagnostics {
            tracing::warn!(%error, "Ignoring part of the schedule specification");
        }

        let at = now.with_timezone(&zone);
        let (open, next_change) = schedule.next_date(&at);

        let fit = settings.query.minutes.map(|minutes| Fit {
            minutes,
            starts_at: schedule
                .when(&at, TimeDelta::minutes(i64::from(minutes)))
                .map(|start| start.fixed_offset()),
        });

        Ok(Self {
            timezone: zone.name().to_string(),
            schedule: schedule.to_string(),
            at: at.fixed_offset(),
            open,
            next_change: next_change.map(|change| change.fixed_offset()),
            fit,
            ignored: diagnostics
                .into_errors()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::TimeZone;

    fn settings(document: &str) -> Settings {
        Settings::from_toml(document).expect("valid settings")
    }

    /// 2026-03-02 is a Monday.
    fn monday(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap()
    }

    #[test_log::test]
    fn reports_open_state_and_next_change() {
        let settings = settings(
            r#"
            [schedule]
            spec = "mo-fr 08:00-18:00"
            timezone = "UTC"
            "#,
        );

        let report = Report::generate(&settings, monday(9)).unwrap();

        assert!(report.open);
        assert_eq!(report.timezone, "UTC");
        assert!(report.schedule.starts_with("[mo 08:00, mo 18:00), [tu 08:00, tu 18:00)"));
        assert!(report.schedule.ends_with("[fr 08:00, fr 18:00)"));
        assert_eq!(
            report.next_change.map(|change| change.to_utc()),
            Some(monday(18))
        );
        assert!(report.fit.is_none());
        assert!(report.ignored.is_empty());
    }

    #[test]
    fn reports_fit_in_schedule_timezone() {
        let settings = settings(
            r#"
            [schedule]
            spec = "mo 10:00-15:00"
            timezone = "Europe/Berlin"

            [query]
            minutes = 240
            "#,
        );

        // 08:00 UTC is 09:00 in Berlin (CET)
        let report = Report::generate(&settings, monday(8)).unwrap();

        assert!(!report.open);
        let fit = report.fit.unwrap();
        assert_eq!(fit.minutes, 240);
        assert_eq!(fit.starts_at.map(|start| start.to_utc()), Some(monday(9)));
        assert_eq!(report.at.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn reports_ignored_tokens() {
        let settings = settings(
            r#"
            [schedule]
            spec = "mo,xx 08:00-18:00"
            "#,
        );

        let report = Report::generate(&settings, monday(9)).unwrap();

        assert_eq!(report.ignored, vec!["rule 1: unknown weekday: `xx`".to_string()]);
    }

    #[test]
    fn default_schedule_is_always_open() {
        let report = Report::generate(&settings(""), monday(3)).unwrap();

        assert!(report.open);
        assert_eq!(report.schedule, "[su 00:00, sa 24:00)");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let settings = settings(
            r#"
            [schedule]
            timezone = "Atlantis/Capital"
            "#,
        );

        let err = Report::generate(&settings, monday(9)).unwrap_err();
        assert!(matches!(err, AppError::ScheduleError(_)));
    }

    #[test]
    fn report_serializes_to_json() {
        let settings = settings(
            r#"
            [schedule]
            spec = "mo 08:00-18:00"
            "#,
        );

        let report = Report::generate(&settings, monday(9)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["open"], serde_json::Value::Bool(true));
        assert_eq!(json["next_change"], "2026-03-02T18:00:00Z");

        let next_change: DateTime<Utc> =
            serde_json::from_value(json["next_change"].clone()).unwrap();
        assert_eq!(next_change, monday(18));
    }
}
