use std::time::Duration;

use clap::Subcommand;
use serde::Serialize;

use demoflow_core::error::Result;
use demoflow_core::{catalog, Config, CoreError, DemoScheduler, Event, EventType, Track, TrackState};

#[derive(Subcommand)]
pub enum DemoAction {
    /// Run the demo live, streaming events as JSON
    Run {
        /// Tracks to run, comma-separated (default: configured tracks)
        #[arg(long, value_delimiter = ',')]
        tracks: Vec<String>,
        /// Delay divisor for faster runs (default: configured value)
        #[arg(long)]
        time_scale: Option<f64>,
        /// Pretty-print each event instead of one line per event
        #[arg(long)]
        pretty: bool,
    },
    /// Print a track's activation plan without running it
    Plan {
        /// Track to plan (default: all tracks)
        track: Option<String>,
    },
}

/// One planned activation: absolute offset from the start instant.
#[derive(Serialize)]
struct PlanEntry {
    offset_ms: u64,
    event_type: EventType,
    name: String,
}

#[derive(Serialize)]
struct TrackPlan {
    track: Track,
    label: String,
    event_count: usize,
    entries: Vec<PlanEntry>,
    settle_delay_ms: u64,
    total_ms: u64,
}

/// Per-track completion summary printed after a live run.
#[derive(Serialize)]
struct TrackSummary {
    track: Track,
    evaluation: String,
    recommendation: String,
    confidence: u8,
    average_score: f64,
}

pub fn run(action: DemoAction) -> Result<()> {
    match action {
        DemoAction::Run {
            tracks,
            time_scale,
            pretty,
        } => run_demo(&tracks, time_scale, pretty),
        DemoAction::Plan { track } => print_plan(track.as_deref()),
    }
}

fn parse_tracks(names: &[String], config: &Config) -> Result<Vec<Track>> {
    if names.is_empty() {
        return Ok(config.demo.default_tracks.clone());
    }
    let mut tracks = Vec::with_capacity(names.len());
    for name in names {
        tracks.push(name.parse::<Track>()?);
    }
    Ok(tracks)
}

fn run_demo(
    names: &[String],
    time_scale: Option<f64>,
    pretty: bool,
) -> Result<()> {
    let config = Config::load_or_default();
    let tracks = parse_tracks(names, &config)?;
    let pretty = pretty || config.output.pretty;

    let mut scheduler = DemoScheduler::new();
    scheduler.set_time_scale(time_scale.unwrap_or(config.demo.time_scale))?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        for event in scheduler.start(&tracks) {
            print_event(&event, pretty)?;
        }
        // Sleep to the earliest outstanding activation, then fire it. The
        // scheduler stays poll-driven; pacing lives entirely here.
        while let Some(deadline) = scheduler.next_deadline_ms() {
            let wait = deadline.saturating_sub(epoch_ms());
            if wait > 0 {
                tokio::time::sleep(Duration::from_millis(wait)).await;
            }
            for event in scheduler.tick() {
                print_event(&event, pretty)?;
            }
        }
        Ok::<(), CoreError>(())
    })?;

    for state in scheduler.states() {
        if let Some(summary) = summarize(state) {
            print_json(&summary, pretty)?;
        }
    }
    Ok(())
}

fn print_plan(name: Option<&str>) -> Result<()> {
    let tracks = match name {
        Some(name) => vec![name.parse::<Track>()?],
        None => Track::all().to_vec(),
    };
    let plans: Vec<TrackPlan> = tracks.into_iter().map(plan_for).collect();
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}

fn plan_for(track: Track) -> TrackPlan {
    let events = catalog::events_for(track);
    let delays = catalog::delays_for(track);
    let info = catalog::version_info(track);

    let mut offset_ms = 0;
    let entries = events
        .iter()
        .zip(&delays)
        .map(|(event, &delay)| {
            offset_ms += delay;
            PlanEntry {
                offset_ms,
                event_type: event.event_type,
                name: event.name.clone(),
            }
        })
        .collect();

    TrackPlan {
        track,
        label: info.label,
        event_count: events.len(),
        entries,
        settle_delay_ms: catalog::SETTLE_DELAY_MS,
        total_ms: catalog::total_duration_ms(track),
    }
}

fn summarize(state: &TrackState) -> Option<TrackSummary> {
    let report = state.report.as_ref()?;
    Some(TrackSummary {
        track: state.track,
        evaluation: catalog::evaluation_meta(state.track).label,
        recommendation: report.recommendation.to_string(),
        confidence: report.confidence,
        average_score: report.scores.average(),
    })
}

fn print_event(event: &Event, pretty: bool) -> Result<(), serde_json::Error> {
    print_json(event, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
