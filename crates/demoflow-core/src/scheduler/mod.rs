mod engine;
mod queue;

pub use engine::{DemoPhase, DemoScheduler, Observer, TrackState};
