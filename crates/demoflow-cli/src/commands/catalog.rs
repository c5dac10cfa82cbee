use clap::Subcommand;

use demoflow_core::error::Result;
use demoflow_core::{catalog, EventType, Track};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List a track's pipeline events
    Events {
        /// Track name (mvp, 2-month, 4-month)
        track: String,
    },
    /// Explain one event type: production behavior vs demo behavior
    Explain {
        /// Event type (e.g. "call_started", "rubric_scored")
        event_type: String,
    },
    /// Show the evaluation report a track attaches on completion
    Report {
        /// Track name (mvp, 2-month, 4-month)
        track: String,
    },
    /// Show version metadata for all tracks
    Versions,
}

pub fn run(action: CatalogAction) -> Result<()> {
    match action {
        CatalogAction::Events { track } => {
            let track: Track = track.parse()?;
            let events = catalog::events_for(track);
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        CatalogAction::Explain { event_type } => {
            let event_type: EventType = event_type.parse()?;
            let explanation = catalog::explanation_for(event_type);
            println!("{}", serde_json::to_string_pretty(&explanation)?);
        }
        CatalogAction::Report { track } => {
            let track: Track = track.parse()?;
            let view = serde_json::json!({
                "evaluation": catalog::evaluation_meta(track),
                "report": catalog::report_for(track),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        CatalogAction::Versions => {
            let versions: Vec<_> = Track::all().iter().map(|&t| catalog::version_info(t)).collect();
            println!("{}", serde_json::to_string_pretty(&versions)?);
        }
    }
    Ok(())
}
