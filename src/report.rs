//! Report payload encoding
//!
//! Wraps analytics output into a versioned JSON payload with producer
//! metadata so downstream consumers (the coaching UI/response layer) can
//! check compatibility and provenance.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::types::{CoachSummary, NormalizedDay, WellnessReport};
use crate::{ENGINE_VERSION, PRODUCER_NAME};

/// Current report payload version
pub const REPORT_VERSION: &str = "1.0.0";

/// Producer metadata stamped on every payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// The analysis window the payload covers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First date in the window (`YYYY-MM-DD`)
    pub start: String,
    /// Last date in the window (`YYYY-MM-DD`)
    pub end: String,
    /// Window length in days
    pub days: u32,
}

/// Complete versioned payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub report_version: String,
    pub producer: ReportProducer,
    pub generated_at_utc: String,
    pub window: ReportWindow,
    pub pillars: WellnessReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach: Option<CoachSummary>,
}

/// Encoder for producing report payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap a wellness report (and optional coach summary) into a payload
    pub fn encode(
        &self,
        days: &[NormalizedDay],
        report: &WellnessReport,
        coach: Option<&CoachSummary>,
    ) -> ReportPayload {
        let window = ReportWindow {
            start: days.first().map(|d| d.date.to_string()).unwrap_or_default(),
            end: days.last().map(|d| d.date.to_string()).unwrap_or_default(),
            days: days.len() as u32,
        };

        ReportPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            generated_at_utc: Utc::now().to_rfc3339(),
            window,
            pillars: report.clone(),
            coach: coach.cloned(),
        }
    }

    /// Encode straight to a JSON string
    pub fn encode_to_json(
        &self,
        days: &[NormalizedDay],
        report: &WellnessReport,
        coach: Option<&CoachSummary>,
    ) -> Result<String, EngineError> {
        serde_json::to_string_pretty(&self.encode(days, report, coach))
            .map_err(|e| EngineError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::DailyRecordNormalizer;
    use crate::pillars::PillarScorer;
    use crate::types::Goals;
    use chrono::NaiveDate;

    fn make_payload(coach: bool) -> ReportPayload {
        let end = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let days = DailyRecordNormalizer::normalize_ending(&[], end, 30);
        let goals = Goals {
            step_goal: 10_000.0,
            calorie_goal: 2_200.0,
            water_goal: 2.5,
            protein_goal: 120.0,
        };
        let report = PillarScorer::analyze(&days, &goals);
        let summary = coach.then(|| crate::coach::build_coach_summary(&report, &days, &goals));

        ReportEncoder::with_instance_id("test-instance".to_string()).encode(
            &days,
            &report,
            summary.as_ref(),
        )
    }

    #[test]
    fn test_payload_metadata() {
        let payload = make_payload(false);

        assert_eq!(payload.report_version, REPORT_VERSION);
        assert_eq!(payload.producer.name, PRODUCER_NAME);
        assert_eq!(payload.producer.version, ENGINE_VERSION);
        assert_eq!(payload.producer.instance_id, "test-instance");
        assert_eq!(payload.window.start, "2026-08-01");
        assert_eq!(payload.window.end, "2026-08-30");
        assert_eq!(payload.window.days, 30);
        assert!(payload.coach.is_none());
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = make_payload(true);
        let json = serde_json::to_string(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("report_version").is_some());
        assert!(value["pillars"].get("move").is_some());
        assert!(value["pillars"].get("bedtime_consistency").is_some());
        assert_eq!(value["coach"]["heading"], "Start your baseline");
    }

    #[test]
    fn test_coach_omitted_when_absent() {
        let payload = make_payload(false);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("coach").is_none());
    }
}
