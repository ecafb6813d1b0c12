//! Pipeline orchestration
//!
//! This module provides the public API for wellpulse. It chains the stages:
//! raw records → timeline normalization → pillar scoring (with trend
//! detection and bedtime consistency) → optional coach summary.
//!
//! Every function is a pure, single-pass transformation over caller-owned
//! input; no state survives a call, so concurrent invocations for different
//! users never share anything.

use chrono::NaiveDate;

use crate::coach::build_coach_summary;
use crate::normalizer::DailyRecordNormalizer;
use crate::pillars::PillarScorer;
use crate::types::{CoachSummary, Goals, NormalizedDay, RawDailyRecord, WellnessReport};

/// Result of one analytics pass: the normalized timeline plus the pillar report
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The fixed-length timeline the report was computed over
    pub days: Vec<NormalizedDay>,
    /// Five pillar results plus the bedtime consistency score
    pub report: WellnessReport,
}

impl Analysis {
    /// Build the coaching recommendation for this analysis
    pub fn coach_summary(&self, goals: &Goals) -> CoachSummary {
        build_coach_summary(&self.report, &self.days, goals)
    }
}

/// Run the full analytics pass over raw records, on a window ending today.
///
/// # Arguments
/// * `records` - Sparse raw daily records from the log store
/// * `goals` - Per-user goals from the profile collaborator
/// * `window_days` - Timeline length (30 covers all windowed stats)
pub fn analyze(records: &[RawDailyRecord], goals: &Goals, window_days: usize) -> Analysis {
    let days = DailyRecordNormalizer::normalize(records, window_days);
    let report = PillarScorer::analyze(&days, goals);
    Analysis { days, report }
}

/// Run the full analytics pass on a window ending at an explicit date.
/// Deterministic variant for replay callers and tests.
pub fn analyze_ending(
    records: &[RawDailyRecord],
    goals: &Goals,
    end_date: NaiveDate,
    window_days: usize,
) -> Analysis {
    let days = DailyRecordNormalizer::normalize_ending(records, end_date, window_days);
    let report = PillarScorer::analyze(&days, goals);
    Analysis { days, report }
}
