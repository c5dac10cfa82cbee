//! Static per-track data: event lists, delay lists, evaluation reports,
//! event-type explanations, and version metadata.
//!
//! Everything here is a pure function of the track or event type -- no I/O,
//! no failure modes. The scheduler consumes these as opaque, pre-validated
//! inputs; the CLI renders them verbatim.

use serde::{Deserialize, Serialize};

use super::event::{EventExplanation, EventType, PipelineEvent};
use super::report::{CandidateReport, CandidateScores, EvaluationMeta, Recommendation};
use crate::track::Track;

/// Fixed extra wait after the last event activates, before a track's phase
/// becomes `completed`. Track-independent.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Header metadata for one track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub track: Track,
    pub label: String,
    /// Where this stage sits on the build timeline.
    pub window: String,
    pub tagline: String,
    /// The question this stage of the system answers.
    pub question: String,
}

/// The fixed, ordered event list for a track. Fresh `PipelineEvent` values
/// each call (new ids, timestamps unset); order is activation order.
pub fn events_for(track: Track) -> Vec<PipelineEvent> {
    match track {
        Track::Mvp => vec![
            PipelineEvent::new(
                EventType::CallStarted,
                "Call started",
                "Voice agent dials the candidate and opens the interview.",
            ),
            PipelineEvent::new(
                EventType::TranscriptStreamed,
                "Transcript streamed",
                "Speech-to-text runs live while the candidate answers.",
            ),
            PipelineEvent::new(
                EventType::AnalysisStarted,
                "AI analysis",
                "A single model pass scores the full transcript.",
            ),
            PipelineEvent::new(
                EventType::TeamNotified,
                "Team notified",
                "Result posted to the hiring channel in Slack.",
            ),
        ],
        Track::TwoMonth => vec![
            PipelineEvent::new(
                EventType::CallScheduled,
                "Call scheduled",
                "Interview slot booked and reminders queued.",
            ),
            PipelineEvent::new(
                EventType::CallStarted,
                "Call started",
                "Voice agent dials the candidate; call metadata is recorded.",
            ),
            PipelineEvent::new(
                EventType::TranscriptStreamed,
                "Transcript streamed",
                "Live transcription persisted chunk by chunk.",
            ),
            PipelineEvent::new(
                EventType::TranscriptQualityChecked,
                "Transcript quality check",
                "Audio quality scored; low-confidence passages flagged.",
            ),
            PipelineEvent::new(
                EventType::AnalysisStarted,
                "AI analysis",
                "Model evaluates answers against the structured rubric.",
            ),
            PipelineEvent::new(
                EventType::RubricScored,
                "Rubric scored",
                "Rubric v2.3 produces per-dimension scores with confidence.",
            ),
            PipelineEvent::new(
                EventType::ReportPersisted,
                "Report persisted",
                "Evaluation written to the candidate record.",
            ),
            PipelineEvent::new(
                EventType::TeamNotified,
                "Team notified",
                "Hiring team notified with a link to the stored report.",
            ),
        ],
        Track::FourMonth => vec![
            PipelineEvent::new(
                EventType::CallScheduled,
                "Call scheduled",
                "Interview slot booked and reminders queued.",
            ),
            PipelineEvent::new(
                EventType::CallStarted,
                "Call started",
                "Voice agent dials the candidate; call metadata is recorded.",
            ),
            PipelineEvent::new(
                EventType::TranscriptStreamed,
                "Transcript streamed",
                "Live transcription persisted chunk by chunk.",
            ),
            PipelineEvent::new(
                EventType::PiiRedacted,
                "PII redacted",
                "Personal data is masked before any model sees the transcript.",
            ),
            PipelineEvent::new(
                EventType::FollowUpAsked,
                "Adaptive follow-up",
                "Agent asks a context-dependent follow-up question.",
            ),
            PipelineEvent::new(
                EventType::SentimentScored,
                "Sentiment scored",
                "Tone and engagement scored alongside answer content.",
            ),
            PipelineEvent::new(
                EventType::RubricScored,
                "Rubric scored",
                "Rubric v2.3 produces per-dimension scores with confidence.",
            ),
            PipelineEvent::new(
                EventType::ConsensusReached,
                "Model consensus",
                "Two models score independently; disagreements are reconciled.",
            ),
            PipelineEvent::new(
                EventType::CalibrationApplied,
                "Calibration applied",
                "Scores ranked against 847 historical interviews.",
            ),
            PipelineEvent::new(
                EventType::ReportPersisted,
                "Report persisted",
                "Evaluation written to the candidate record.",
            ),
            PipelineEvent::new(
                EventType::AuditTrailWritten,
                "Audit trail written",
                "Every pipeline step recorded for compliance review.",
            ),
            PipelineEvent::new(
                EventType::TeamNotified,
                "Team notified",
                "Hiring team notified with a link to the stored report.",
            ),
        ],
    }
}

/// Incremental delays in milliseconds, same length as [`events_for`].
/// `delays[i]` is the wait after event `i-1` fires (after start, for `i=0`)
/// before event `i` activates.
pub fn delays_for(track: Track) -> Vec<u64> {
    match track {
        Track::Mvp => vec![500, 800, 1200, 600],
        Track::TwoMonth => vec![400, 500, 700, 600, 1100, 900, 500, 400],
        Track::FourMonth => vec![400, 500, 700, 500, 900, 600, 800, 1000, 700, 500, 400, 400],
    }
}

/// Authored wall-clock length of one run: all delays plus the settle wait.
pub fn total_duration_ms(track: Track) -> u64 {
    delays_for(track).iter().sum::<u64>() + SETTLE_DELAY_MS
}

/// The static evaluation report attached when a track completes.
///
/// All three tracks evaluate the same interview; the richer tracks report
/// deeper analysis and higher confidence.
pub fn report_for(track: Track) -> CandidateReport {
    let base = CandidateReport {
        candidate_name: "Sarah Chen".to_string(),
        position: "Senior Backend Engineer".to_string(),
        interview_date: "2025-01-15".to_string(),
        duration_minutes: 24,
        scores: CandidateScores {
            communication: 7,
            experience: 6,
            motivation: 8,
            problem_solving: 6,
            culture_fit: 7,
        },
        summary: vec![
            "Clear communicator with solid backend fundamentals.".to_string(),
            "Strong motivation; has researched the product in depth.".to_string(),
            "Distributed-systems answers stayed at a high level.".to_string(),
        ],
        strengths: vec![
            "Explains trade-offs without prompting".to_string(),
            "Concrete ownership stories from previous roles".to_string(),
            "Asked sharp questions about the team's on-call setup".to_string(),
        ],
        risks: vec![
            "Limited hands-on Kubernetes experience".to_string(),
            "Hesitant on consistency-model details".to_string(),
        ],
        recommendation: Recommendation::Hire,
        confidence: 64,
    };

    match track {
        Track::Mvp => base,
        Track::TwoMonth => CandidateReport {
            duration_minutes: 26,
            scores: CandidateScores {
                communication: 7,
                experience: 7,
                motivation: 8,
                problem_solving: 7,
                culture_fit: 7,
            },
            summary: vec![
                "Rubric v2.3: consistently above-bar across all dimensions.".to_string(),
                "Transcript quality 96% -- no flagged passages.".to_string(),
                "Problem-solving score backed by two worked examples.".to_string(),
            ],
            risks: vec![
                "Limited hands-on Kubernetes experience".to_string(),
                "Has not operated systems at the stated traffic tier".to_string(),
            ],
            confidence: 78,
            ..base.clone()
        },
        Track::FourMonth => CandidateReport {
            duration_minutes: 31,
            scores: CandidateScores {
                communication: 8,
                experience: 7,
                motivation: 9,
                problem_solving: 8,
                culture_fit: 8,
            },
            summary: vec![
                "Both models agree within 4% on every dimension.".to_string(),
                "Top 18% of 847 calibrated backend interviews.".to_string(),
                "Adaptive follow-ups surfaced strong incident-response depth.".to_string(),
            ],
            strengths: vec![
                "Explains trade-offs without prompting".to_string(),
                "Incident walkthrough showed calm, structured debugging".to_string(),
                "Sentiment steady and engaged through the hardest question".to_string(),
            ],
            risks: vec!["Limited hands-on Kubernetes experience".to_string()],
            recommendation: Recommendation::StrongHire,
            confidence: 91,
            ..base
        },
    }
}

/// How a track's evaluation was produced.
pub fn evaluation_meta(track: Track) -> EvaluationMeta {
    match track {
        Track::Mvp => EvaluationMeta {
            label: "Basic Evaluation".to_string(),
            method: "Single-model analysis without calibration".to_string(),
        },
        Track::TwoMonth => EvaluationMeta {
            label: "Production Evaluation".to_string(),
            method: "Rubric v2.3, persisted, quality-scored".to_string(),
        },
        Track::FourMonth => EvaluationMeta {
            label: "Enterprise Evaluation".to_string(),
            method: "Multi-model consensus calibrated against 847 interviews".to_string(),
        },
    }
}

/// Header metadata for one track.
pub fn version_info(track: Track) -> VersionInfo {
    match track {
        Track::Mvp => VersionInfo {
            track,
            label: "MVP".to_string(),
            window: "Week 1-2".to_string(),
            tagline: "Validate the core idea".to_string(),
            question: "Does the idea work at all?".to_string(),
        },
        Track::TwoMonth => VersionInfo {
            track,
            label: "2-Month".to_string(),
            window: "Month 2".to_string(),
            tagline: "Production hardening".to_string(),
            question: "Can we rely on it?".to_string(),
        },
        Track::FourMonth => VersionInfo {
            track,
            label: "4-Month".to_string(),
            window: "Month 4".to_string(),
            tagline: "Enterprise trust".to_string(),
            question: "Can we trust it with critical decisions?".to_string(),
        },
    }
}

/// Production-vs-demo explanation for one event type.
pub fn explanation_for(event_type: EventType) -> EventExplanation {
    let (title, production, demo, stack): (&str, &str, &str, &[&str]) = match event_type {
        EventType::CallScheduled => (
            "Call scheduling",
            "A scheduling service books the slot, sends calendar invites, and \
             queues SMS/email reminders with timezone handling.",
            "A single timed log entry; no calendar integration runs.",
            &["Scheduling service", "Calendar API", "Notification queue"],
        ),
        EventType::CallStarted => (
            "Voice call",
            "The voice agent places an outbound call, verifies the candidate, \
             and runs the scripted interview with barge-in handling.",
            "A timed log entry standing in for the live call webhook.",
            &["Vapi voice agent", "Telephony provider", "Webhook receiver"],
        ),
        EventType::TranscriptStreamed => (
            "Real-time transcription",
            "Audio chunks stream to a speech-to-text model; partial \
             transcripts arrive within a few hundred milliseconds.",
            "One log entry standing in for the chunk stream.",
            &["Streaming STT", "WebSocket stream", "Chunk store"],
        ),
        EventType::TranscriptQualityChecked => (
            "Transcript quality scoring",
            "Each passage gets a confidence score; low-quality audio flags \
             the interview for human review instead of silent mis-scoring.",
            "A fixed quality figure quoted in the report.",
            &["STT confidence scores", "Quality thresholds", "Review queue"],
        ),
        EventType::AnalysisStarted => (
            "AI analysis",
            "The transcript goes to a language model with the evaluation \
             prompt; structured output is validated and retried on parse \
             failure.",
            "A timed log entry; the evaluation shown later is canned.",
            &["LLM API", "Prompt templates", "Schema validation"],
        ),
        EventType::RubricScored => (
            "Rubric scoring",
            "A versioned rubric defines what 1-10 means per dimension, so \
             scores stay comparable across candidates and over time.",
            "Static scores tagged with the rubric version.",
            &["Rubric store (versioned)", "Few-shot examples", "Score validation"],
        ),
        EventType::ConsensusReached => (
            "Multi-model consensus",
            "Two independent models score the same transcript; divergence \
             beyond a threshold pulls in a third as tie-breaker.",
            "A log entry quoting a fixed agreement figure.",
            &["Claude", "GPT-4", "Consensus weighting"],
        ),
        EventType::CalibrationApplied => (
            "Historical calibration",
            "Embeddings of past interviews give a similarity cohort; the \
             candidate is percentile-ranked against comparable hires.",
            "A fixed percentile quoted in the report.",
            &["Embedding model", "Vector database", "Outcome history"],
        ),
        EventType::FollowUpAsked => (
            "Adaptive follow-up",
            "The agent generates a follow-up from the candidate's previous \
             answer instead of moving to the next scripted question.",
            "A timed log entry; the question text is canned.",
            &["Dialogue state", "LLM question generation"],
        ),
        EventType::SentimentScored => (
            "Sentiment analysis",
            "Tone, pace, and engagement are scored per answer as a second \
             signal alongside content.",
            "A fixed sentiment line in the report.",
            &["Audio features", "Sentiment model"],
        ),
        EventType::PiiRedacted => (
            "PII redaction",
            "Names, addresses, and identifiers are masked before transcripts \
             reach any model or log, with reversible vault storage.",
            "A log entry only; demo data contains no real PII.",
            &["PII detector", "Redaction vault", "Access policies"],
        ),
        EventType::ReportPersisted => (
            "Report persistence",
            "The evaluation is written to the candidate record with full \
             version metadata so hiring decisions are reproducible.",
            "The canned report is attached to in-memory state.",
            &["Candidate database", "Record versioning"],
        ),
        EventType::AuditTrailWritten => (
            "Audit trail",
            "Every pipeline step, model call, and score lands in an \
             append-only audit log for compliance review.",
            "A log entry standing in for the audit write.",
            &["Append-only log", "Retention policies", "Compliance export"],
        ),
        EventType::TeamNotified => (
            "Team notification",
            "The hiring channel receives a summary message with a link to \
             the full report, with delivery retries on failure.",
            "A final timed log entry completes the run.",
            &["Slack API", "Message templates", "Delivery retries"],
        ),
    };
    EventExplanation {
        title: title.to_string(),
        production: production.to_string(),
        demo: demo.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_list_matches_event_list_length() {
        for track in Track::all() {
            assert_eq!(
                events_for(track).len(),
                delays_for(track).len(),
                "track {track}"
            );
        }
    }

    #[test]
    fn mvp_uses_the_authored_delays() {
        assert_eq!(delays_for(Track::Mvp), vec![500, 800, 1200, 600]);
        assert_eq!(total_duration_ms(Track::Mvp), 3600);
    }

    #[test]
    fn richer_tracks_have_longer_pipelines() {
        assert!(events_for(Track::Mvp).len() < events_for(Track::TwoMonth).len());
        assert!(events_for(Track::TwoMonth).len() < events_for(Track::FourMonth).len());
    }

    #[test]
    fn confidence_grows_with_maturity() {
        let mvp = report_for(Track::Mvp);
        let two = report_for(Track::TwoMonth);
        let four = report_for(Track::FourMonth);
        assert!(mvp.confidence < two.confidence);
        assert!(two.confidence < four.confidence);
        assert_eq!(four.recommendation, Recommendation::StrongHire);
    }

    #[test]
    fn every_event_type_appears_in_some_track() {
        let mut used: Vec<EventType> = Track::all()
            .iter()
            .flat_map(|&t| events_for(t))
            .map(|e| e.event_type)
            .collect();
        used.sort_by_key(|t| t.as_str());
        used.dedup();
        assert_eq!(used.len(), EventType::ALL.len());
    }

    #[test]
    fn every_event_type_has_an_explanation() {
        for t in EventType::ALL {
            let exp = explanation_for(t);
            assert!(!exp.title.is_empty());
            assert!(!exp.production.is_empty());
            assert!(!exp.demo.is_empty());
        }
    }

    #[test]
    fn event_lists_are_fresh_per_call() {
        let a = events_for(Track::Mvp);
        let b = events_for(Track::Mvp);
        assert_ne!(a[0].id, b[0].id);
        assert_eq!(a[0].event_type, b[0].event_type);
    }
}
