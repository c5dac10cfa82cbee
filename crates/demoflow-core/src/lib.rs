//! # Demoflow Core Library
//!
//! This library provides the core logic for Demoflow, a simulator that
//! replays the three maturity stages of an interview-automation pipeline
//! (MVP, 2-month, 4-month) as parallel timed event timelines. All
//! operations are available via a standalone CLI binary; any GUI would be
//! a thin read-only layer over the same core.
//!
//! ## Architecture
//!
//! - **Scheduler**: A wall-clock-based state machine that requires the
//!   caller to periodically invoke `tick()` for progress; `start`/`reset`
//!   only register or void pending activations and return immediately
//! - **Pipeline catalog**: Static per-track event lists, delay lists,
//!   evaluation reports, and event-type explanations
//! - **Events**: Every state change produces a serializable [`Event`];
//!   observers additionally receive full [`TrackState`] snapshots
//! - **Config**: TOML-based tool preferences (pacing, default tracks)
//!
//! ## Key Components
//!
//! - [`DemoScheduler`]: Multi-track timeline scheduler
//! - [`Track`]: The three fixed demo variants
//! - [`catalog`](pipeline::catalog): Static per-track data
//! - [`Config`]: Tool configuration

pub mod config;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod scheduler;
pub mod track;

pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use pipeline::{
    catalog, CandidateReport, CandidateScores, EvaluationMeta, EventExplanation, EventType,
    PipelineEvent, Recommendation,
};
pub use scheduler::{DemoPhase, DemoScheduler, Observer, TrackState};
pub use track::Track;
