// libs/appointment-cell/src/services/join_window.rs
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use serde::Serialize;
use tracing::warn;

use shared_config::AppConfig;

use crate::models::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JoinWindowError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid clinic UTC offset: {0} seconds")]
    InvalidOffset(i32),

    #[error("Invalid join window length: {0} minutes")]
    InvalidLength(i64),

    #[error("Date and time are outside the supported range")]
    OutOfRange,
}

/// Interval during which a consultation may be joined, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWindow {
    pub starts_at: DateTime<Utc>,
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,
}

impl JoinWindow {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        now >= self.opens_at && now <= self.closes_at
    }
}

/// Whether a consultation with `status` may be joined at `now`.
pub fn can_join(status: AppointmentStatus, window: &JoinWindow, now: DateTime<Utc>) -> bool {
    status.is_joinable() && window.contains(now)
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, JoinWindowError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| JoinWindowError::InvalidTime(value.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct JoinWindowPolicy {
    before: Duration,
    after: Duration,
    offset: FixedOffset,
}

impl Default for JoinWindowPolicy {
    fn default() -> Self {
        Self {
            before: Duration::minutes(15),
            after: Duration::minutes(30),
            offset: Utc.fix(),
        }
    }
}

impl JoinWindowPolicy {
    pub fn new(
        before_minutes: i64,
        after_minutes: i64,
        offset_seconds: i32,
    ) -> Result<Self, JoinWindowError> {
        let offset = FixedOffset::east_opt(offset_seconds)
            .ok_or(JoinWindowError::InvalidOffset(offset_seconds))?;

        Ok(Self {
            before: window_length(before_minutes)?,
            after: window_length(after_minutes)?,
            offset,
        })
    }

    /// Invalid settings fall back one by one to the defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::default();

        let before = window_length(config.join_window_before_minutes).unwrap_or_else(|e| {
            warn!("{}, using {} minutes", e, defaults.before.num_minutes());
            defaults.before
        });
        let after = window_length(config.join_window_after_minutes).unwrap_or_else(|e| {
            warn!("{}, using {} minutes", e, defaults.after.num_minutes());
            defaults.after
        });
        let offset_seconds = config.clinic_utc_offset_seconds();
        let offset = FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| {
            warn!("{}, falling back to UTC", JoinWindowError::InvalidOffset(offset_seconds));
            defaults.offset
        });

        Self { before, after, offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The clinic-local calendar date at `now`.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, in which case the clinic-local
    /// date of that instant is used.
    pub fn parse_date(&self, value: &str) -> Result<NaiveDate, JoinWindowError> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(value)
            .map(|instant| self.local_date(instant.with_timezone(&Utc)))
            .map_err(|_| JoinWindowError::InvalidDate(value.to_string()))
    }

    /// Resolves a clinic-local date and time of day to an instant.
    pub fn scheduled_at(&self, date: NaiveDate, time: &str) -> Result<DateTime<Utc>, JoinWindowError> {
        let time_of_day = parse_time_of_day(time)?;
        self.offset
            .from_local_datetime(&date.and_time(time_of_day))
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| JoinWindowError::InvalidTime(time.to_string()))
    }

    pub fn window_for(&self, date: NaiveDate, time: &str) -> Result<JoinWindow, JoinWindowError> {
        let starts_at = self.scheduled_at(date, time)?;
        let opens_at = starts_at
            .checked_sub_signed(self.before)
            .ok_or(JoinWindowError::OutOfRange)?;
        let closes_at = starts_at
            .checked_add_signed(self.after)
            .ok_or(JoinWindowError::OutOfRange)?;

        Ok(JoinWindow {
            starts_at,
            opens_at,
            closes_at,
        })
    }
}

fn window_length(minutes: i64) -> Result<Duration, JoinWindowError> {
    Duration::try_minutes(minutes).ok_or(JoinWindowError::InvalidLength(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_spans_fifteen_before_to_thirty_after() {
        let policy = JoinWindowPolicy::default();
        let window = policy.window_for(date("2026-03-15"), "14:00").unwrap();

        assert_eq!(window.starts_at, utc("2026-03-15T14:00:00Z"));
        assert_eq!(window.opens_at, utc("2026-03-15T13:45:00Z"));
        assert_eq!(window.closes_at, utc("2026-03-15T14:30:00Z"));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let window = JoinWindowPolicy::default()
            .window_for(date("2026-03-15"), "14:00")
            .unwrap();

        assert!(window.contains(utc("2026-03-15T13:45:00Z")));
        assert!(window.contains(utc("2026-03-15T14:30:00Z")));
        assert!(!window.contains(utc("2026-03-15T13:44:59Z")));
        assert!(!window.contains(utc("2026-03-15T14:30:01Z")));
    }

    #[test]
    fn can_join_requires_active_status_and_window() {
        let window = JoinWindowPolicy::default()
            .window_for(date("2026-03-15"), "14:00")
            .unwrap();
        let inside = utc("2026-03-15T14:10:00Z");
        let outside = utc("2026-03-15T15:00:00Z");

        assert!(can_join(AppointmentStatus::Scheduled, &window, inside));
        assert!(can_join(AppointmentStatus::InProgress, &window, inside));
        assert!(!can_join(AppointmentStatus::Completed, &window, inside));
        assert!(!can_join(AppointmentStatus::Cancelled, &window, inside));
        assert!(!can_join(AppointmentStatus::Scheduled, &window, outside));
    }

    #[test]
    fn predicate_holds_across_a_sweep_of_now_values() {
        let window = JoinWindowPolicy::default()
            .window_for(date("2026-03-15"), "09:30")
            .unwrap();
        let start = utc("2026-03-15T08:00:00Z");

        for minute in 0..240 {
            let now = start + Duration::minutes(minute);
            let expected = now >= utc("2026-03-15T09:15:00Z") && now <= utc("2026-03-15T10:00:00Z");
            assert_eq!(can_join(AppointmentStatus::Scheduled, &window, now), expected, "minute {}", minute);
            assert!(!can_join(AppointmentStatus::Cancelled, &window, now));
        }
    }

    #[test]
    fn clinic_offset_shifts_the_instant() {
        let policy = JoinWindowPolicy::new(15, 30, -3 * 3600).unwrap();
        let window = policy.window_for(date("2026-03-15"), "14:00").unwrap();
        assert_eq!(window.starts_at, utc("2026-03-15T17:00:00Z"));
    }

    #[test]
    fn window_crosses_midnight() {
        let window = JoinWindowPolicy::default()
            .window_for(date("2026-03-15"), "00:05")
            .unwrap();
        assert_eq!(window.opens_at, utc("2026-03-14T23:50:00Z"));
    }

    #[test]
    fn rejects_malformed_times() {
        let policy = JoinWindowPolicy::default();
        assert_eq!(
            policy.window_for(date("2026-03-15"), "2pm"),
            Err(JoinWindowError::InvalidTime("2pm".to_string()))
        );
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("10:30:15").is_ok());
    }

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let policy = JoinWindowPolicy::new(15, 30, -3 * 3600).unwrap();
        assert_eq!(policy.parse_date("2026-03-15").unwrap(), date("2026-03-15"));
        // 01:00 UTC is still the previous day three hours west
        assert_eq!(
            policy.parse_date("2026-03-15T01:00:00Z").unwrap(),
            date("2026-03-14")
        );
        assert!(policy.parse_date("15/03/2026").is_err());
    }

    #[test]
    fn rejects_out_of_range_offset() {
        assert_eq!(
            JoinWindowPolicy::new(15, 30, 90_000).unwrap_err(),
            JoinWindowError::InvalidOffset(90_000)
        );
    }

    #[test]
    fn window_past_the_calendar_limit_is_out_of_range() {
        let policy = JoinWindowPolicy::default();
        let last_day = NaiveDate::MAX;

        assert!(policy.scheduled_at(last_day, "23:59").is_ok());
        assert_eq!(
            policy.window_for(last_day, "23:59"),
            Err(JoinWindowError::OutOfRange)
        );
        assert_eq!(
            policy.window_for(NaiveDate::MIN, "00:00"),
            Err(JoinWindowError::OutOfRange)
        );
    }

    #[test]
    fn oversized_lengths_are_rejected_or_defaulted() {
        assert_eq!(
            JoinWindowPolicy::new(i64::MAX, 30, 0).unwrap_err(),
            JoinWindowError::InvalidLength(i64::MAX)
        );

        let config = AppConfig {
            join_window_before_minutes: i64::MAX,
            join_window_after_minutes: i64::MIN,
            clinic_utc_offset_minutes: 100_000,
            ..AppConfig::default()
        };
        let policy = JoinWindowPolicy::from_config(&config);
        let window = policy.window_for(date("2026-03-15"), "14:00").unwrap();

        assert_eq!(window.opens_at, utc("2026-03-15T13:45:00Z"));
        assert_eq!(window.closes_at, utc("2026-03-15T14:30:00Z"));
    }
}
