//! Bedtime consistency scoring
//!
//! Converts the window's bedtime-minute values into a single 0-100 regularity
//! score. This is a deliberate linear heuristic over the population standard
//! deviation, not a fitted statistical model: zero variance scores 100, and a
//! spread of 90 minutes or more (a 1.5 hour swing) scores 0.

use crate::stats;

/// Score returned when fewer than two valid bedtimes exist (insufficient signal)
pub const NEUTRAL_BEDTIME_SCORE: f64 = 50.0;

/// Standard deviation (minutes) at which the score bottoms out at 0
const FULL_PENALTY_STD_DEV_MIN: f64 = 90.0;

/// Score bedtime regularity from minutes-after-midnight values.
///
/// Non-finite entries are ignored. Fewer than two valid values return the
/// neutral 50.
pub fn bedtime_consistency_score(minutes: &[f64]) -> f64 {
    let valid: Vec<f64> = minutes.iter().copied().filter(|m| m.is_finite()).collect();
    if valid.len() < 2 {
        return NEUTRAL_BEDTIME_SCORE;
    }

    let std_dev = stats::population_std_dev(&valid).unwrap_or(0.0);
    (100.0 - (std_dev / FULL_PENALTY_STD_DEV_MIN) * 100.0).clamp(0.0, 100.0)
}
