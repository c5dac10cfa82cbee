use std::fmt;

use serde::{Deserialize, Serialize};

/// Final hiring recommendation attached to a completed track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Maybe,
    #[serde(rename = "No Hire")]
    NoHire,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::Maybe => "Maybe",
            Recommendation::NoHire => "No Hire",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension interview scores on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScores {
    pub communication: u8,
    pub experience: u8,
    pub motivation: u8,
    pub problem_solving: u8,
    pub culture_fit: u8,
}

impl CandidateScores {
    pub fn average(&self) -> f64 {
        f64::from(
            u16::from(self.communication)
                + u16::from(self.experience)
                + u16::from(self.motivation)
                + u16::from(self.problem_solving)
                + u16::from(self.culture_fit),
        ) / 5.0
    }
}

/// Static evaluation result attached to a track when it completes.
///
/// Selected by track name with no computation; the scheduler treats it as
/// opaque data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub candidate_name: String,
    pub position: String,
    pub interview_date: String,
    pub duration_minutes: u32,
    pub scores: CandidateScores,
    pub summary: Vec<String>,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub recommendation: Recommendation,
    /// 0-100.
    pub confidence: u8,
}

/// How a track's evaluation was produced (label + method line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMeta {
    pub label: String,
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_uniform_scores() {
        let scores = CandidateScores {
            communication: 8,
            experience: 8,
            motivation: 8,
            problem_solving: 8,
            culture_fit: 8,
        };
        assert_eq!(scores.average(), 8.0);
    }

    #[test]
    fn recommendation_serde_uses_display_labels() {
        let json = serde_json::to_string(&Recommendation::StrongHire).unwrap();
        assert_eq!(json, "\"Strong Hire\"");
        let json = serde_json::to_string(&Recommendation::Hire).unwrap();
        assert_eq!(json, "\"Hire\"");
    }
}
