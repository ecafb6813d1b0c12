//! Pillar scoring
//!
//! Per-day scoring functions for the five pillars (Move, Fuel, Recover, Mood,
//! Habits) and their aggregation into windowed statistics. A day scores
//! `Some(value)` in 0-100 only when it carries at least one user-logged signal
//! for that pillar; missing days and all-zero days are invalid and never count
//! toward averages or consistency.

use crate::bedtime::bedtime_consistency_score;
use crate::trend::compute_trend;
use crate::types::{DayData, Goals, NormalizedDay, PillarResult, WellnessReport};

// Move: steps dominate, with fixed credit for a logged workout and for
// reaching 30 cardio minutes.
const MOVE_STEPS_WEIGHT: f64 = 70.0;
const MOVE_WORKOUT_WEIGHT: f64 = 15.0;
const MOVE_CARDIO_WEIGHT: f64 = 15.0;
const CARDIO_FULL_CREDIT_MINUTES: f64 = 30.0;

// Fuel: closeness to the calorie goal, water attainment, protein attainment
const FUEL_CALORIE_WEIGHT: f64 = 0.45;
const FUEL_WATER_WEIGHT: f64 = 0.40;
const FUEL_PROTEIN_WEIGHT: f64 = 0.15;

// Recover: sleep duration against an 8-hour reference, 1-5 quality, plus an
// additive bedtime-regularity bonus applied before the final clamp
const RECOVER_DURATION_WEIGHT: f64 = 0.65;
const RECOVER_QUALITY_WEIGHT: f64 = 0.35;
const RECOVER_BEDTIME_BONUS_WEIGHT: f64 = 0.15;
const SLEEP_REFERENCE_HOURS: f64 = 8.0;

// Mood: 1-5 rating plus inverted 1-5 stress
const MOOD_RATING_WEIGHT: f64 = 0.65;
const MOOD_STRESS_WEIGHT: f64 = 0.35;

/// Scorer producing the full five-pillar report for a normalized timeline
pub struct PillarScorer;

impl PillarScorer {
    /// Compute all five pillar results plus the window's bedtime consistency.
    ///
    /// The bedtime score is computed once over the whole window and feeds the
    /// Recover pillar's regularity bonus.
    pub fn analyze(days: &[NormalizedDay], goals: &Goals) -> WellnessReport {
        let bedtimes: Vec<f64> = days
            .iter()
            .filter_map(|day| day.data.as_ref())
            .filter_map(|data| data.sleep.bedtime_min)
            .map(f64::from)
            .collect();
        let bedtime_consistency = bedtime_consistency_score(&bedtimes);

        WellnessReport {
            movement: pillar_stats(days, |data| move_score(data, goals)),
            fuel: pillar_stats(days, |data| fuel_score(data, goals)),
            recover: pillar_stats(days, |data| recover_score(data, bedtime_consistency)),
            mood: pillar_stats(days, mood_score),
            habits: pillar_stats(days, habits_score),
            bedtime_consistency,
        }
    }
}

/// Aggregate a per-day scorer into windowed statistics.
///
/// Weekly and previous-week averages cover the last 7 days and days -14..-7;
/// consistency values are counts of valid days, not scores; the trend is fit
/// over all valid `(index, value)` pairs in the full window.
pub fn pillar_stats<F>(days: &[NormalizedDay], score: F) -> PillarResult
where
    F: Fn(&DayData) -> Option<f64>,
{
    let scores: Vec<Option<f64>> = days
        .iter()
        .map(|day| day.data.as_ref().and_then(|data| score(data)))
        .collect();

    let valid: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|v| (i, v)))
        .collect();

    if valid.is_empty() {
        return PillarResult::neutral();
    }

    let n = scores.len();
    let week_start = n.saturating_sub(7);
    let prev_week_start = n.saturating_sub(14);
    let month_start = n.saturating_sub(30);

    let weekly: Vec<f64> = valid
        .iter()
        .filter(|(i, _)| *i >= week_start)
        .map(|(_, v)| *v)
        .collect();
    let prev_week: Vec<f64> = valid
        .iter()
        .filter(|(i, _)| *i >= prev_week_start && *i < week_start)
        .map(|(_, v)| *v)
        .collect();
    let all_values: Vec<f64> = valid.iter().map(|(_, v)| *v).collect();

    let consistency_30 = valid.iter().filter(|(i, _)| *i >= month_start).count() as u32;

    let points: Vec<(f64, f64)> = valid.iter().map(|(i, v)| (*i as f64, *v)).collect();

    PillarResult {
        weekly_avg: crate::stats::mean(&weekly),
        prev_week_avg: crate::stats::mean(&prev_week),
        month_avg: crate::stats::mean(&all_values),
        consistency_7: weekly.len() as u32,
        consistency_30,
        trend: compute_trend(&points),
        valid_count: valid.len() as u32,
    }
}

/// Move: step attainment + workout credit + cardio credit.
/// Valid when any movement signal was logged.
pub fn move_score(data: &DayData, goals: &Goals) -> Option<f64> {
    if data.steps <= 0.0 && data.workouts <= 0.0 && data.cardio_minutes <= 0.0 {
        return None;
    }

    let steps_part = if goals.step_goal > 0.0 {
        (data.steps / goals.step_goal).min(1.0) * MOVE_STEPS_WEIGHT
    } else {
        0.0
    };
    // One workout earns full credit
    let workout_part = data.workouts.min(1.0) * MOVE_WORKOUT_WEIGHT;
    let cardio_part = (data.cardio_minutes / CARDIO_FULL_CREDIT_MINUTES).min(1.0) * MOVE_CARDIO_WEIGHT;

    Some((steps_part + workout_part + cardio_part).clamp(0.0, 100.0))
}

/// Fuel: calorie closeness, water attainment, and gated protein attainment.
/// Valid when calories, water, or any macro was logged.
pub fn fuel_score(data: &DayData, goals: &Goals) -> Option<f64> {
    let any_macro =
        data.macros.protein_g > 0.0 || data.macros.carbs_g > 0.0 || data.macros.fat_g > 0.0;
    if data.calories <= 0.0 && data.water_ml <= 0.0 && !any_macro {
        return None;
    }

    // Closeness goes negative when calories blow past the goal; only the
    // final weighted sum is clamped, so a wild overshoot can zero the whole
    // score even with water at goal.
    let closeness = if data.calories > 0.0 && goals.calorie_goal > 0.0 {
        100.0 - (data.calories - goals.calorie_goal).abs() / goals.calorie_goal * 100.0
    } else {
        0.0
    };
    let water = if goals.water_goal > 0.0 {
        ((data.water_ml / 1000.0) / goals.water_goal).min(1.0) * 100.0
    } else {
        0.0
    };
    // Protein only counts on days it was actually logged
    let protein = if data.macros.protein_g > 0.0 && goals.protein_goal > 0.0 {
        (data.macros.protein_g / goals.protein_goal).min(1.0) * 100.0
    } else {
        0.0
    };

    let value =
        closeness * FUEL_CALORIE_WEIGHT + water * FUEL_WATER_WEIGHT + protein * FUEL_PROTEIN_WEIGHT;
    Some(value.clamp(0.0, 100.0))
}

/// Recover: sleep duration and quality, plus the window-level bedtime
/// regularity bonus added before the final clamp.
/// Valid when hours, quality, or a bedtime was logged.
pub fn recover_score(data: &DayData, bedtime_consistency: f64) -> Option<f64> {
    let sleep = &data.sleep;
    if sleep.hours <= 0.0 && sleep.quality <= 0.0 && sleep.bedtime_min.is_none() {
        return None;
    }

    // Long sleep may push a component past 100; only the sum is clamped.
    let duration = sleep.hours / SLEEP_REFERENCE_HOURS * 100.0;
    let quality = sleep.quality / 5.0 * 100.0;
    let base = duration * RECOVER_DURATION_WEIGHT + quality * RECOVER_QUALITY_WEIGHT;
    let bonus = bedtime_consistency * RECOVER_BEDTIME_BONUS_WEIGHT;

    Some((base + bonus).clamp(0.0, 100.0))
}

/// Mood: rating plus inverted stress (stress 1 -> 100, stress 5 -> 0).
/// Valid when a rating or a stress level was logged.
pub fn mood_score(data: &DayData) -> Option<f64> {
    let mood = &data.mood;
    if mood.rating <= 0.0 && mood.stress <= 0.0 {
        return None;
    }

    // Ratings beyond 5 overshoot 100; the final clamp pulls them back.
    let rating = mood.rating / 5.0 * 100.0;
    let inverted_stress = if mood.stress > 0.0 {
        (1.0 - (mood.stress - 1.0) / 4.0) * 100.0
    } else {
        0.0
    };

    Some((rating * MOOD_RATING_WEIGHT + inverted_stress * MOOD_STRESS_WEIGHT).clamp(0.0, 100.0))
}

/// Habits: completion ratio. Valid when any habits were defined for the day.
pub fn habits_score(data: &DayData) -> Option<f64> {
    if data.habits.total <= 0.0 {
        return None;
    }
    Some(((data.habits.completed / data.habits.total).min(1.0) * 100.0).clamp(0.0, 100.0))
}
