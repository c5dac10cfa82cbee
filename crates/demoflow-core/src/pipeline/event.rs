use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The fixed enumeration of pipeline step kinds. Tracks draw their event
/// lists from this set; the richer tracks use the later variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CallScheduled,
    CallStarted,
    TranscriptStreamed,
    TranscriptQualityChecked,
    AnalysisStarted,
    RubricScored,
    ConsensusReached,
    CalibrationApplied,
    FollowUpAsked,
    SentimentScored,
    PiiRedacted,
    ReportPersisted,
    AuditTrailWritten,
    TeamNotified,
}

impl EventType {
    pub const ALL: [EventType; 14] = [
        EventType::CallScheduled,
        EventType::CallStarted,
        EventType::TranscriptStreamed,
        EventType::TranscriptQualityChecked,
        EventType::AnalysisStarted,
        EventType::RubricScored,
        EventType::ConsensusReached,
        EventType::CalibrationApplied,
        EventType::FollowUpAsked,
        EventType::SentimentScored,
        EventType::PiiRedacted,
        EventType::ReportPersisted,
        EventType::AuditTrailWritten,
        EventType::TeamNotified,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::CallScheduled => "call_scheduled",
            EventType::CallStarted => "call_started",
            EventType::TranscriptStreamed => "transcript_streamed",
            EventType::TranscriptQualityChecked => "transcript_quality_checked",
            EventType::AnalysisStarted => "analysis_started",
            EventType::RubricScored => "rubric_scored",
            EventType::ConsensusReached => "consensus_reached",
            EventType::CalibrationApplied => "calibration_applied",
            EventType::FollowUpAsked => "follow_up_asked",
            EventType::SentimentScored => "sentiment_scored",
            EventType::PiiRedacted => "pii_redacted",
            EventType::ReportPersisted => "report_persisted",
            EventType::AuditTrailWritten => "audit_trail_written",
            EventType::TeamNotified => "team_notified",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownEventType(s.to_string()))
    }
}

/// One step in a track's ordered simulated pipeline.
///
/// `activated_at` stays unset until the scheduler activates the event;
/// activation order is list order and events are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub id: String,
    pub event_type: EventType,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
}

impl PipelineEvent {
    pub fn new(event_type: EventType, name: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_type,
            name: name.to_string(),
            description: description.to_string(),
            activated_at: None,
        }
    }
}

/// Static production-vs-demo explanation for one event type, shown when a
/// log entry is inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventExplanation {
    pub title: String,
    /// What this step does in the real pipeline.
    pub production: String,
    /// How the demo simulates it.
    pub demo: String,
    /// Services/components involved in the real pipeline.
    pub stack: Vec<String>,
}
