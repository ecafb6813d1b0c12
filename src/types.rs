//! Core types for the wellpulse analytics engine
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: raw daily records, normalized days, pillar results, and the coach
//! summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Raw per-day log as fetched from the external daily-log store.
///
/// Sparse by design: any field may be absent, and entire dates may be
/// missing from the record list. Keys use the store's camelCase naming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDailyRecord {
    /// Calendar date this record belongs to (local-day, `YYYY-MM-DD`)
    pub date: String,
    /// Calories consumed
    pub calories: Option<f64>,
    /// Step count
    pub steps: Option<f64>,
    /// Water intake (millilitres)
    pub water_ml: Option<f64>,
    /// Workouts completed
    pub workouts: Option<f64>,
    /// Cardio minutes
    pub cardio_minutes: Option<f64>,
    /// Macro nutrient log
    pub macros: Option<RawMacros>,
    /// Mood check-in
    pub mood: Option<RawMood>,
    /// Sleep log
    pub sleep: Option<RawSleep>,
    /// Habit tracker counts
    pub habits: Option<RawHabits>,
    /// Lifestyle metrics
    pub lifestyle: Option<RawLifestyle>,
}

impl RawDailyRecord {
    /// Parse newline-delimited JSON (one record per line) into records.
    pub fn parse_ndjson(data: &str) -> Result<Vec<RawDailyRecord>, EngineError> {
        let mut records = Vec::new();
        for (line_no, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let record: RawDailyRecord = serde_json::from_str(trimmed).map_err(|e| {
                EngineError::ParseError(format!("line {}: {}", line_no + 1, e))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Parse a JSON array of records.
    pub fn parse_array(data: &str) -> Result<Vec<RawDailyRecord>, EngineError> {
        serde_json::from_str(data).map_err(EngineError::JsonError)
    }
}

/// Macro nutrients (grams)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMacros {
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

/// Mood check-in: rating and stress are 1-5 scales
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMood {
    pub rating: Option<f64>,
    pub stress: Option<f64>,
    pub note: Option<String>,
}

/// Sleep log: hours slept, 1-5 quality, and bedtime as "HH:MM"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSleep {
    pub hours: Option<f64>,
    pub quality: Option<f64>,
    pub bedtime: Option<String>,
}

/// Habit tracker counts for the day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawHabits {
    pub completed: Option<f64>,
    pub total: Option<f64>,
}

/// Lifestyle metrics (minutes)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLifestyle {
    pub focus_minutes: Option<f64>,
    pub screen_time_minutes: Option<f64>,
}

/// One slot in the fixed-length normalized timeline.
///
/// A day with no logged record carries `data: None` - the missing/logged
/// distinction is structural, so a missing day can never be confused with a
/// day logged as all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDay {
    /// Calendar date of this slot
    pub date: NaiveDate,
    /// Clamped metrics, or `None` when nothing was logged for this date
    pub data: Option<DayData>,
}

impl NormalizedDay {
    /// Whether nothing was logged for this date
    pub fn is_missing(&self) -> bool {
        self.data.is_none()
    }
}

/// Clamped per-day metrics. Every numeric leaf is finite and >= 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayData {
    pub calories: f64,
    pub steps: f64,
    pub water_ml: f64,
    pub workouts: f64,
    pub cardio_minutes: f64,
    pub macros: DayMacros,
    pub mood: DayMood,
    pub sleep: DaySleep,
    pub habits: DayHabits,
    pub lifestyle: DayLifestyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayMacros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayMood {
    pub rating: f64,
    pub stress: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySleep {
    pub hours: f64,
    pub quality: f64,
    /// Bedtime parsed to minutes-after-midnight, `None` when absent or malformed
    pub bedtime_min: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayHabits {
    pub completed: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLifestyle {
    pub focus_minutes: f64,
    pub screen_time_minutes: f64,
}

/// Per-user goals supplied by the caller (user-profile collaborator)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goals {
    /// Daily step target
    pub step_goal: f64,
    /// Daily calorie target
    pub calorie_goal: f64,
    /// Daily water target (litres)
    pub water_goal: f64,
    /// Daily protein target (grams)
    pub protein_goal: f64,
}

/// The five wellness pillars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Move,
    Fuel,
    Recover,
    Mood,
    Habits,
}

impl Pillar {
    /// All pillars in canonical order
    pub const ALL: [Pillar; 5] = [
        Pillar::Move,
        Pillar::Fuel,
        Pillar::Recover,
        Pillar::Mood,
        Pillar::Habits,
    ];

    /// Stable identifier used in lookups and payloads
    pub fn id(&self) -> &'static str {
        match self {
            Pillar::Move => "move",
            Pillar::Fuel => "fuel",
            Pillar::Recover => "recover",
            Pillar::Mood => "mood",
            Pillar::Habits => "habits",
        }
    }

    /// Display name used in coaching copy
    pub fn key(&self) -> &'static str {
        match self {
            Pillar::Move => "Move",
            Pillar::Fuel => "Fuel",
            Pillar::Recover => "Recover",
            Pillar::Mood => "Mood",
            Pillar::Habits => "Habits",
        }
    }
}

/// Direction of a pillar's score over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Improving,
    Declining,
    Stable,
    #[serde(rename = "Building baseline")]
    BuildingBaseline,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Improving => "Improving",
            TrendLabel::Declining => "Declining",
            TrendLabel::Stable => "Stable",
            TrendLabel::BuildingBaseline => "Building baseline",
        }
    }
}

/// Linear-fit slope and its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub slope: f64,
    pub label: TrendLabel,
}

impl Trend {
    /// Sentinel trend for windows with too few valid points
    pub fn building_baseline() -> Self {
        Self {
            slope: 0.0,
            label: TrendLabel::BuildingBaseline,
        }
    }
}

/// Windowed statistics for one pillar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarResult {
    /// Mean of valid scores over the last 7 days, `None` if none were valid
    pub weekly_avg: Option<f64>,
    /// Mean of valid scores over days -14..-7, `None` if none were valid
    pub prev_week_avg: Option<f64>,
    /// Mean of all valid scores in the window, `None` if none were valid
    pub month_avg: Option<f64>,
    /// Count of valid (logged) days in the last 7
    pub consistency_7: u32,
    /// Count of valid (logged) days in the last 30
    pub consistency_30: u32,
    /// Trend over all valid (index, score) pairs in the window
    pub trend: Trend,
    /// Total valid days in the window
    pub valid_count: u32,
}

impl PillarResult {
    /// Sentinel result for a pillar with no valid data anywhere in the window.
    /// Callers should branch on `valid_count == 0` to show "keep logging" UI
    /// rather than treating this as a failure.
    pub fn neutral() -> Self {
        Self {
            weekly_avg: None,
            prev_week_avg: None,
            month_avg: None,
            consistency_7: 0,
            consistency_30: 0,
            trend: Trend::building_baseline(),
            valid_count: 0,
        }
    }
}

/// Full analytics output: one result per pillar plus the bedtime score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessReport {
    #[serde(rename = "move")]
    pub movement: PillarResult,
    pub fuel: PillarResult,
    pub recover: PillarResult,
    pub mood: PillarResult,
    pub habits: PillarResult,
    /// Bedtime regularity over the window (0-100)
    pub bedtime_consistency: f64,
}

impl WellnessReport {
    /// Pillar results in canonical order, paired with their pillar
    pub fn pillars(&self) -> [(Pillar, &PillarResult); 5] {
        [
            (Pillar::Move, &self.movement),
            (Pillar::Fuel, &self.fuel),
            (Pillar::Recover, &self.recover),
            (Pillar::Mood, &self.mood),
            (Pillar::Habits, &self.habits),
        ]
    }
}

/// Acute risk flag derived from the most recent day only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    SleepDebt,
    LowMood,
    HydrationLag,
}

impl RiskFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::SleepDebt => "Sleep debt risk",
            RiskFlag::LowMood => "Low mood signal",
            RiskFlag::HydrationLag => "Hydration lag",
        }
    }
}

/// Templated coaching recommendation built around the weakest pillar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachSummary {
    pub heading: String,
    pub body: String,
    pub risk: String,
    pub action: String,
}
