//! Daily record normalization
//!
//! This module builds the fixed-length, index-addressable timeline the rest of
//! the engine works on:
//! - Exactly `n` consecutive calendar days, ascending, ending at the requested
//!   end date (today by default)
//! - Numeric leaves clamped to finite, non-negative values
//! - Bedtime strings parsed to minutes-after-midnight
//! - Absent dates kept as structurally missing days
//!
//! Distinguishing "missing" from "logged as zero" lets the consistency
//! counters measure logging behavior rather than score magnitude.

use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;

use crate::error::EngineError;
use crate::types::{
    DayData, DayHabits, DayLifestyle, DayMacros, DayMood, DaySleep, NormalizedDay, RawDailyRecord,
};

/// Default timeline length in days
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// Normalizer for building the daily timeline from sparse raw records
pub struct DailyRecordNormalizer;

impl DailyRecordNormalizer {
    /// Build a timeline of `window_days` consecutive days ending today
    /// (local calendar day).
    pub fn normalize(records: &[RawDailyRecord], window_days: usize) -> Vec<NormalizedDay> {
        Self::normalize_ending(records, Local::now().date_naive(), window_days)
    }

    /// Build a timeline ending at an explicit date. Deterministic variant used
    /// by replay callers and tests.
    pub fn normalize_ending(
        records: &[RawDailyRecord],
        end_date: NaiveDate,
        window_days: usize,
    ) -> Vec<NormalizedDay> {
        // Last record wins when the store hands back duplicate dates.
        // Records with unparseable dates are skipped; their day stays missing.
        let mut by_date: HashMap<NaiveDate, &RawDailyRecord> = HashMap::new();
        for record in records {
            if let Ok(date) = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") {
                by_date.insert(date, record);
            }
        }

        (0..window_days)
            .rev()
            .map(|back| {
                let date = end_date - Duration::days(back as i64);
                NormalizedDay {
                    date,
                    data: by_date.get(&date).map(|record| normalize_record(record)),
                }
            })
            .collect()
    }
}

/// Parse an explicit window end date in `YYYY-MM-DD` form.
///
/// Raw record dates in the timeline are skipped silently when malformed, but
/// an end date chosen by the caller is an input error worth reporting.
pub fn parse_window_end(raw: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| EngineError::DateParseError(format!("{raw}: {e}")))
}

/// Parse a `"HH:MM"` bedtime into minutes after midnight.
///
/// Requires exactly two numeric parts with hour in 0-23 and minute in 0-59.
/// Any violation (wrong part count, non-numeric, out of range, empty string)
/// returns `None`; this never panics.
pub fn bedtime_minutes(raw: &str) -> Option<u32> {
    let mut parts = raw.split(':');
    let hour_part = parts.next()?;
    let minute_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let hour: u32 = hour_part.trim().parse().ok()?;
    let minute: u32 = minute_part.trim().parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}

/// Clamp an optional numeric leaf: absent, NaN, infinite, or negative -> 0
fn clamp_metric(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn normalize_record(record: &RawDailyRecord) -> DayData {
    let macros = record.macros.as_ref();
    let mood = record.mood.as_ref();
    let sleep = record.sleep.as_ref();
    let habits = record.habits.as_ref();
    let lifestyle = record.lifestyle.as_ref();

    DayData {
        calories: clamp_metric(record.calories),
        steps: clamp_metric(record.steps),
        water_ml: clamp_metric(record.water_ml),
        workouts: clamp_metric(record.workouts),
        cardio_minutes: clamp_metric(record.cardio_minutes),
        macros: DayMacros {
            protein_g: clamp_metric(macros.and_then(|m| m.protein_g)),
            carbs_g: clamp_metric(macros.and_then(|m| m.carbs_g)),
            fat_g: clamp_metric(macros.and_then(|m| m.fat_g)),
        },
        mood: DayMood {
            rating: clamp_metric(mood.and_then(|m| m.rating)),
            stress: clamp_metric(mood.and_then(|m| m.stress)),
        },
        sleep: DaySleep {
            hours: clamp_metric(sleep.and_then(|s| s.hours)),
            quality: clamp_metric(sleep.and_then(|s| s.quality)),
            bedtime_min: sleep
                .and_then(|s| s.bedtime.as_deref())
                .and_then(bedtime_minutes),
        },
        habits: DayHabits {
            completed: clamp_metric(habits.and_then(|h| h.completed)),
            total: clamp_metric(habits.and_then(|h| h.total)),
        },
        lifestyle: DayLifestyle {
            focus_minutes: clamp_metric(lifestyle.and_then(|l| l.focus_minutes)),
            screen_time_minutes: clamp_metric(lifestyle.and_then(|l| l.screen_time_minutes)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawMood, RawSleep};

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn record(date: &str) -> RawDailyRecord {
        RawDailyRecord {
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_timeline_length_and_order() {
        let end = day("2026-08-30");
        let timeline = DailyRecordNormalizer::normalize_ending(&[], end, 30);

        assert_eq!(timeline.len(), 30);
        assert_eq!(timeline.last().unwrap().date, end);
        assert_eq!(timeline[0].date, day("2026-08-01"));
        for pair in timeline.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(timeline.iter().all(NormalizedDay::is_missing));
    }

    #[test]
    fn test_timeline_ends_today_by_default() {
        let timeline = DailyRecordNormalizer::normalize(&[], 7);
        assert_eq!(timeline.len(), 7);
        assert_eq!(timeline.last().unwrap().date, Local::now().date_naive());
    }

    #[test]
    fn test_present_dates_are_logged() {
        let mut logged = record("2026-08-29");
        logged.steps = Some(8000.0);

        let timeline = DailyRecordNormalizer::normalize_ending(&[logged], day("2026-08-30"), 3);
        assert!(timeline[0].is_missing());
        assert!(!timeline[1].is_missing());
        assert!(timeline[2].is_missing());
        assert_eq!(timeline[1].data.as_ref().unwrap().steps, 8000.0);
    }

    #[test]
    fn test_records_outside_window_ignored() {
        let stale = record("2026-06-01");
        let bad_date = record("not-a-date");

        let timeline =
            DailyRecordNormalizer::normalize_ending(&[stale, bad_date], day("2026-08-30"), 30);
        assert!(timeline.iter().all(NormalizedDay::is_missing));
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        let mut raw = record("2026-08-30");
        raw.calories = Some(-500.0);
        raw.steps = Some(f64::NAN);
        raw.water_ml = Some(f64::INFINITY);
        raw.mood = Some(RawMood {
            rating: Some(-1.0),
            stress: Some(3.0),
            note: None,
        });

        let timeline = DailyRecordNormalizer::normalize_ending(&[raw], day("2026-08-30"), 1);
        let data = timeline[0].data.as_ref().unwrap();
        assert_eq!(data.calories, 0.0);
        assert_eq!(data.steps, 0.0);
        assert_eq!(data.water_ml, 0.0);
        assert_eq!(data.mood.rating, 0.0);
        assert_eq!(data.mood.stress, 3.0);
    }

    #[test]
    fn test_malformed_bedtime_normalizes_to_none() {
        let mut raw = record("2026-08-30");
        raw.sleep = Some(RawSleep {
            hours: Some(7.0),
            quality: Some(4.0),
            bedtime: Some("25:00".to_string()),
        });

        let timeline = DailyRecordNormalizer::normalize_ending(&[raw], day("2026-08-30"), 1);
        let data = timeline[0].data.as_ref().unwrap();
        assert_eq!(data.sleep.bedtime_min, None);
        assert_eq!(data.sleep.hours, 7.0);
    }

    #[test]
    fn test_parse_window_end() {
        assert_eq!(parse_window_end("2026-08-30").unwrap(), day("2026-08-30"));
        assert!(matches!(
            parse_window_end("30/08/2026"),
            Err(EngineError::DateParseError(_))
        ));
        assert!(matches!(
            parse_window_end(""),
            Err(EngineError::DateParseError(_))
        ));
    }

    #[test]
    fn test_bedtime_minutes_valid() {
        assert_eq!(bedtime_minutes("00:00"), Some(0));
        assert_eq!(bedtime_minutes("22:45"), Some(22 * 60 + 45));
        assert_eq!(bedtime_minutes("23:59"), Some(23 * 60 + 59));
        assert_eq!(bedtime_minutes("9:05"), Some(9 * 60 + 5));
    }

    #[test]
    fn test_bedtime_minutes_invalid() {
        assert_eq!(bedtime_minutes("25:00"), None);
        assert_eq!(bedtime_minutes("9"), None);
        assert_eq!(bedtime_minutes(""), None);
        assert_eq!(bedtime_minutes("9:99"), None);
        assert_eq!(bedtime_minutes("10:15:00"), None);
        assert_eq!(bedtime_minutes("ten:30"), None);
        assert_eq!(bedtime_minutes("-1:30"), None);
        assert_eq!(bedtime_minutes(":"), None);
    }

    #[test]
    fn test_duplicate_dates_last_wins() {
        let mut first = record("2026-08-30");
        first.steps = Some(1000.0);
        let mut second = record("2026-08-30");
        second.steps = Some(2000.0);

        let timeline =
            DailyRecordNormalizer::normalize_ending(&[first, second], day("2026-08-30"), 1);
        assert_eq!(timeline[0].data.as_ref().unwrap().steps, 2000.0);
    }
}
