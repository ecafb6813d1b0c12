//! Wellpulse - analytics engine for sparse daily wellness logs
//!
//! Wellpulse turns heterogeneous daily health logs (steps, calories, water,
//! sleep, mood, habits) into a fixed-length normalized timeline and scores it
//! through a deterministic pipeline: record normalization → pillar scoring →
//! trend detection → coaching lever selection.
//!
//! The engine is a pure library: it never fetches, persists, or renders.
//! Callers hand it an in-memory record list and goals, and get back a
//! [`types::WellnessReport`] and, on request, a [`types::CoachSummary`].
//! Malformed input degrades to safe defaults instead of erroring - absent
//! data is a first-class "keep logging" result, not a failure.

pub mod bedtime;
pub mod coach;
pub mod error;
pub mod normalizer;
pub mod pillars;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod trend;
pub mod types;

pub use bedtime::bedtime_consistency_score;
pub use coach::{build_coach_summary, lever_candidates, risk_flags};
pub use error::EngineError;
pub use normalizer::{bedtime_minutes, parse_window_end, DailyRecordNormalizer, DEFAULT_WINDOW_DAYS};
pub use pillars::{pillar_stats, PillarScorer};
pub use pipeline::{analyze, analyze_ending, Analysis};
pub use report::{ReportEncoder, ReportPayload, REPORT_VERSION};
pub use trend::compute_trend;
pub use types::{
    CoachSummary, Goals, NormalizedDay, Pillar, PillarResult, RawDailyRecord, RiskFlag, Trend,
    TrendLabel, WellnessReport,
};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "wellpulse";
