use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::{CandidateReport, EventType};
use crate::track::Track;

/// Every state change in the scheduler produces an Event.
/// Callers stream them (the CLI prints one JSON line each); the observer
/// interface carries full track snapshots instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A track entered `running` with a fresh event list and cleared cursor.
    TrackStarted {
        track: Track,
        event_count: usize,
        at: DateTime<Utc>,
    },
    /// The scheduler activated one pipeline event.
    EventActivated {
        track: Track,
        event_index: usize,
        event_type: EventType,
        name: String,
        at: DateTime<Utc>,
    },
    /// A track settled into `completed`; its static report is attached.
    TrackCompleted {
        track: Track,
        report: CandidateReport,
        at: DateTime<Utc>,
    },
    /// All tracks returned to `idle`; every pending activation was voided.
    DemoReset {
        at: DateTime<Utc>,
    },
}
