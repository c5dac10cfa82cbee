//! Demo scheduler implementation.
//!
//! The scheduler is a wall-clock-based state machine. It does not use
//! internal threads -- the caller is responsible for calling `tick()`
//! periodically (the CLI sleeps until [`DemoScheduler::next_deadline_ms`]
//! and ticks once per deadline).
//!
//! ## State Transitions (per track)
//!
//! ```text
//! Idle --start--> Running --(last event + settle delay)--> Completed
//! Running --reset--> Idle        Completed --reset--> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut scheduler = DemoScheduler::new();
//! scheduler.start(&Track::all());
//! // In a loop:
//! scheduler.tick(); // Returns the events that fired since the last call
//! ```
//!
//! Every outstanding activation lives in the scheduler's private queue;
//! `reset` (and the implicit cancel inside `start`) drains it, so a voided
//! entry can never mutate state afterwards.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::queue::{Action, ActivationQueue};
use crate::error::ValidationError;
use crate::events::Event;
use crate::pipeline::catalog::{self, SETTLE_DELAY_MS};
use crate::pipeline::{CandidateReport, PipelineEvent};
use crate::track::Track;

/// Lifecycle state of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoPhase {
    Idle,
    Running,
    Completed,
}

/// Full state of one track, pushed to observers after every mutation.
///
/// `cursor` is the index of the most recently activated event (`None` until
/// the first activation); it only moves forward while `running`. `report`
/// is present exactly when the phase is `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackState {
    pub track: Track,
    pub phase: DemoPhase,
    pub events: Vec<PipelineEvent>,
    pub cursor: Option<usize>,
    pub report: Option<CandidateReport>,
}

impl TrackState {
    fn idle(track: Track) -> Self {
        Self {
            track,
            phase: DemoPhase::Idle,
            events: Vec::new(),
            cursor: None,
            report: None,
        }
    }
}

/// Read-only subscriber receiving the updated [`TrackState`] after every
/// per-track mutation. Observers never mutate scheduler state.
pub trait Observer {
    fn track_changed(&mut self, state: &TrackState);
}

/// Drives each track's fixed event sequence at its authored offsets from a
/// single start instant, independently per track, with one shared
/// cancellation queue.
pub struct DemoScheduler {
    states: [TrackState; Track::COUNT],
    queue: ActivationQueue,
    observers: Vec<Box<dyn Observer>>,
    /// Divides authored delays for faster live runs. 1.0 = authored pacing.
    time_scale: f64,
}

impl DemoScheduler {
    pub fn new() -> Self {
        let [a, b, c] = Track::all();
        Self {
            states: [TrackState::idle(a), TrackState::idle(b), TrackState::idle(c)],
            queue: ActivationQueue::default(),
            observers: Vec::new(),
            time_scale: 1.0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self, track: Track) -> &TrackState {
        &self.states[track.index()]
    }

    pub fn states(&self) -> &[TrackState] {
        &self.states
    }

    pub fn is_idle(&self) -> bool {
        self.states.iter().all(|s| s.phase == DemoPhase::Idle)
    }

    pub fn any_running(&self) -> bool {
        self.states.iter().any(|s| s.phase == DemoPhase::Running)
    }

    /// True once every track launched by the last `start` has settled.
    pub fn all_completed(&self) -> bool {
        let mut any = false;
        for state in &self.states {
            match state.phase {
                DemoPhase::Running => return false,
                DemoPhase::Completed => any = true,
                DemoPhase::Idle => {}
            }
        }
        any
    }

    /// Absolute instant (epoch ms) of the earliest outstanding activation.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.queue.next_due_ms()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Register a subscriber; it receives every subsequent track mutation.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Set the live pacing divisor. Authored delays are divided by `scale`
    /// when scheduled; deterministic tests keep the default 1.0.
    pub fn set_time_scale(&mut self, scale: f64) -> Result<(), ValidationError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "time_scale".to_string(),
                message: format!("must be a positive number, got {scale}"),
            });
        }
        self.time_scale = scale;
        Ok(())
    }

    /// Start a fresh run for the selected tracks.
    ///
    /// Idempotent with respect to an in-flight run: every previously
    /// scheduled activation is voided before the new run is scheduled, so
    /// there is never more than one net active run per track. Unselected
    /// tracks return to `idle`.
    pub fn start(&mut self, tracks: &[Track]) -> Vec<Event> {
        self.start_at(now_ms(), tracks)
    }

    /// Deterministic variant of [`start`](Self::start) with an explicit
    /// clock value, used by tests and simulations.
    pub fn start_at(&mut self, now_ms: u64, tracks: &[Track]) -> Vec<Event> {
        // Void the previous run before anything else can fire.
        self.queue.clear();

        let mut out = Vec::new();
        for track in Track::all() {
            self.states[track.index()] = TrackState::idle(track);
            if !tracks.contains(&track) {
                Self::notify(&mut self.observers, &self.states[track.index()]);
                continue;
            }

            let events = catalog::events_for(track);
            let delays = catalog::delays_for(track);
            debug_assert_eq!(events.len(), delays.len());

            let mut due_ms = now_ms;
            for (index, &delay) in delays.iter().enumerate() {
                due_ms += self.scale_ms(delay);
                self.queue.schedule(due_ms, Action::Activate { track, index });
            }

            let state = &mut self.states[track.index()];
            state.phase = DemoPhase::Running;
            out.push(Event::TrackStarted {
                track,
                event_count: events.len(),
                at: Utc::now(),
            });
            state.events = events;
            Self::notify(&mut self.observers, &self.states[track.index()]);
        }
        out
    }

    /// Cancel every outstanding activation and return all tracks to `idle`.
    ///
    /// Safe in any phase, any number of times; after this returns, nothing
    /// scheduled before the call can mutate state.
    pub fn reset(&mut self) -> Vec<Event> {
        self.queue.clear();
        for track in Track::all() {
            self.states[track.index()] = TrackState::idle(track);
            Self::notify(&mut self.observers, &self.states[track.index()]);
        }
        vec![Event::DemoReset { at: Utc::now() }]
    }

    /// Fire every activation due by now. Call periodically.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(now_ms())
    }

    /// Deterministic variant of [`tick`](Self::tick) with an explicit clock
    /// value. Fires every entry due at `now_ms`, in due-instant order.
    pub fn tick_at(&mut self, now_ms: u64) -> Vec<Event> {
        let mut out = Vec::new();
        while let Some((due_ms, action)) = self.queue.pop_due(now_ms) {
            match action {
                Action::Activate { track, index } => {
                    let state = &mut self.states[track.index()];
                    // Entries are built from this list in `start_at`; the
                    // guard keeps the indexing total.
                    let Some(event) = state.events.get_mut(index) else {
                        continue;
                    };
                    event.activated_at = Some(Utc::now());
                    let event_type = event.event_type;
                    let name = event.name.clone();
                    state.cursor = Some(index);
                    let is_last = index + 1 == state.events.len();
                    out.push(Event::EventActivated {
                        track,
                        event_index: index,
                        event_type,
                        name,
                        at: Utc::now(),
                    });
                    if is_last {
                        // Chain off the activation's scheduled instant, not
                        // the (possibly late) tick.
                        self.queue
                            .schedule(due_ms + self.scale_ms(SETTLE_DELAY_MS), Action::Settle { track });
                    }
                    Self::notify(&mut self.observers, &self.states[track.index()]);
                }
                Action::Settle { track } => {
                    let report = catalog::report_for(track);
                    let state = &mut self.states[track.index()];
                    state.phase = DemoPhase::Completed;
                    state.report = Some(report.clone());
                    out.push(Event::TrackCompleted {
                        track,
                        report,
                        at: Utc::now(),
                    });
                    Self::notify(&mut self.observers, &self.states[track.index()]);
                }
            }
        }
        out
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn scale_ms(&self, ms: u64) -> u64 {
        if self.time_scale == 1.0 {
            return ms;
        }
        (((ms as f64) / self.time_scale).round() as u64).max(1)
    }

    fn notify(observers: &mut [Box<dyn Observer>], state: &TrackState) {
        for observer in observers.iter_mut() {
            observer.track_changed(state);
        }
    }
}

impl Default for DemoScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scheduler_is_idle() {
        let scheduler = DemoScheduler::new();
        assert!(scheduler.is_idle());
        assert!(!scheduler.has_pending());
        for track in Track::all() {
            let state = scheduler.state(track);
            assert_eq!(state.phase, DemoPhase::Idle);
            assert_eq!(state.cursor, None);
            assert!(state.events.is_empty());
            assert!(state.report.is_none());
        }
    }

    #[test]
    fn start_moves_selected_tracks_to_running() {
        let mut scheduler = DemoScheduler::new();
        let events = scheduler.start_at(0, &[Track::Mvp, Track::FourMonth]);
        assert_eq!(events.len(), 2);

        assert_eq!(scheduler.state(Track::Mvp).phase, DemoPhase::Running);
        assert_eq!(scheduler.state(Track::Mvp).cursor, None);
        assert_eq!(scheduler.state(Track::TwoMonth).phase, DemoPhase::Idle);
        assert_eq!(scheduler.state(Track::FourMonth).phase, DemoPhase::Running);
        assert!(scheduler.any_running());
        assert_eq!(scheduler.next_deadline_ms(), Some(400));
    }

    #[test]
    fn nothing_fires_before_the_first_delay() {
        let mut scheduler = DemoScheduler::new();
        scheduler.start_at(0, &[Track::Mvp]);
        assert!(scheduler.tick_at(499).is_empty());
        assert_eq!(scheduler.state(Track::Mvp).cursor, None);
    }

    #[test]
    fn first_activation_sets_cursor_and_timestamp() {
        let mut scheduler = DemoScheduler::new();
        scheduler.start_at(0, &[Track::Mvp]);
        let fired = scheduler.tick_at(500);
        assert_eq!(fired.len(), 1);

        let state = scheduler.state(Track::Mvp);
        assert_eq!(state.cursor, Some(0));
        assert!(state.events[0].activated_at.is_some());
        assert!(state.events[1].activated_at.is_none());
    }

    #[test]
    fn time_scale_rejects_nonpositive_values() {
        let mut scheduler = DemoScheduler::new();
        assert!(scheduler.set_time_scale(0.0).is_err());
        assert!(scheduler.set_time_scale(-2.0).is_err());
        assert!(scheduler.set_time_scale(f64::NAN).is_err());
        assert!(scheduler.set_time_scale(4.0).is_ok());
    }

    #[test]
    fn time_scale_compresses_the_schedule() {
        let mut scheduler = DemoScheduler::new();
        scheduler.set_time_scale(10.0).unwrap();
        scheduler.start_at(0, &[Track::Mvp]);
        // 500ms authored -> 50ms scaled.
        assert_eq!(scheduler.next_deadline_ms(), Some(50));
    }

    #[test]
    fn reset_returns_everything_to_idle() {
        let mut scheduler = DemoScheduler::new();
        scheduler.start_at(0, &[Track::Mvp]);
        scheduler.tick_at(600);
        scheduler.reset();

        assert!(scheduler.is_idle());
        assert!(!scheduler.has_pending());
        assert!(scheduler.state(Track::Mvp).events.is_empty());
    }

    #[test]
    fn all_completed_requires_a_settled_run() {
        let mut scheduler = DemoScheduler::new();
        assert!(!scheduler.all_completed());
        scheduler.start_at(0, &[Track::Mvp]);
        assert!(!scheduler.all_completed());
        scheduler.tick_at(3600);
        assert!(scheduler.all_completed());
    }
}
