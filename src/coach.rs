//! Coach recommendation
//!
//! Selects the "lever" - the pillar most in need of attention this week - and
//! renders one templated recommendation around it. The lever is chosen by
//! logging consistency, not score magnitude: the least-consistently-logged,
//! non-improving pillar sorts first.

use std::cmp::Ordering;

use crate::types::{CoachSummary, DayData, Goals, NormalizedDay, Pillar, RiskFlag, TrendLabel, WellnessReport};

/// Bonus applied to the lever score when a pillar is already improving
const IMPROVING_BONUS: f64 = 0.2;

/// Penalty computed for a declining pillar. Kept for parity with the
/// reference behavior, which computes this value but never subtracts it
/// from the lever score - a Declining pillar therefore ranks the same as a
/// Stable one at equal consistency. Correcting that would change which
/// pillar gets recommended, so it is preserved as-is.
const DECLINING_PENALTY: f64 = 0.2;

/// Latest-day sleep below this (but logged) flags sleep debt
const SLEEP_DEBT_MAX_HOURS: f64 = 6.2;

/// Latest-day mood rating at or below this (but logged) flags low mood
const LOW_MOOD_MAX_RATING: f64 = 2.0;

/// Hydration flags when intake falls under this fraction of the water goal
const HYDRATION_GOAL_FRACTION: f64 = 0.6;

/// One pillar's standing in the lever ranking
#[derive(Debug, Clone)]
pub struct LeverCandidate {
    pub pillar: Pillar,
    /// consistency_7 / 7
    pub consistency_rate: f64,
    /// Ranking score: consistency rate plus the improving bonus
    pub score: f64,
    /// Computed but not applied to `score` (see [`DECLINING_PENALTY`])
    pub trend_penalty: f64,
    pub trend_label: TrendLabel,
    pub valid_count: u32,
}

/// Rank all five pillars ascending by lever score (weakest first).
///
/// The sort is stable, so ties resolve in canonical pillar order.
pub fn lever_candidates(report: &WellnessReport) -> Vec<LeverCandidate> {
    let mut candidates: Vec<LeverCandidate> = report
        .pillars()
        .iter()
        .map(|(pillar, result)| {
            let consistency_rate = f64::from(result.consistency_7) / 7.0;
            let improving_bonus = if result.trend.label == TrendLabel::Improving {
                IMPROVING_BONUS
            } else {
                0.0
            };
            let trend_penalty = if result.trend.label == TrendLabel::Declining {
                DECLINING_PENALTY
            } else {
                0.0
            };

            LeverCandidate {
                pillar: *pillar,
                consistency_rate,
                score: consistency_rate + improving_bonus,
                trend_penalty,
                trend_label: result.trend.label,
                valid_count: result.valid_count,
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    candidates
}

/// Inspect only the most recent day for acute risks.
///
/// A missing latest day behaves as all-zero fields: positive-reading checks
/// (sleep debt, low mood) stay quiet, while the hydration check still fires.
pub fn risk_flags(latest: Option<&NormalizedDay>, goals: &Goals) -> Vec<RiskFlag> {
    let zeroed = DayData::default();
    let data = latest
        .and_then(|day| day.data.as_ref())
        .unwrap_or(&zeroed);

    let mut flags = Vec::new();
    if data.sleep.hours > 0.0 && data.sleep.hours < SLEEP_DEBT_MAX_HOURS {
        flags.push(RiskFlag::SleepDebt);
    }
    if data.mood.rating > 0.0 && data.mood.rating <= LOW_MOOD_MAX_RATING {
        flags.push(RiskFlag::LowMood);
    }
    let water_litres = data.water_ml / 1000.0;
    if water_litres < (goals.water_goal * HYDRATION_GOAL_FRACTION).max(1.0) {
        flags.push(RiskFlag::HydrationLag);
    }
    flags
}

/// Build the coaching summary: lever selection, acute risk flags, and a fixed
/// next action for the lever pillar.
pub fn build_coach_summary(
    report: &WellnessReport,
    days: &[NormalizedDay],
    goals: &Goals,
) -> CoachSummary {
    let candidates = lever_candidates(report);
    let window_has_data = candidates.iter().any(|c| c.valid_count > 0);
    let lever = window_has_data.then(|| &candidates[0]);

    let flags = risk_flags(days.last(), goals);
    let risk = if flags.is_empty() {
        "No acute risk flags today.".to_string()
    } else {
        flags
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    };

    match lever {
        Some(lever) => CoachSummary {
            heading: format!("This week's lever: {}", lever.pillar.key()),
            body: format!(
                "{} is your least consistently logged pillar right now (trend: {}). \
                 Small daily entries beat perfect ones.",
                lever.pillar.key(),
                lever.trend_label.as_str()
            ),
            risk,
            action: action_for(lever.pillar).to_string(),
        },
        None => CoachSummary {
            heading: "Start your baseline".to_string(),
            body: "No logged data in this window yet. Each entry you add sharpens \
                   your pillars and trends."
                .to_string(),
            risk,
            action: DEFAULT_ACTION.to_string(),
        },
    }
}

/// Fallback action when no lever resolves (empty window)
const DEFAULT_ACTION: &str = "Log one key metric tonight to start building your baseline.";

fn action_for(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Move => "Take a 20-minute walk today and log your steps.",
        Pillar::Fuel => "Log your meals and pair each one with a full glass of water.",
        Pillar::Recover => "Set a wind-down alarm and log tonight's bedtime.",
        Pillar::Mood => "Do a 60-second check-in and log your mood rating.",
        Pillar::Habits => "Pick your easiest habit and check it off before noon.",
    }
}
