//! Session lifecycle tracking
//!
//! REST ↔ SET_ACTIVE state, set/rest timing, the per-set mistake
//! accumulator, and sealed workout summaries. The engine drives the
//! transitions; this tracker owns the bookkeeping.

use crate::session::cues::Persona;
use serde::Serialize;

/// Seconds the displayed rep count holds after a set is sealed
pub const REP_FREEZE_SECONDS: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Resting,
    SetActive,
}

/// Sealed record for one completed set or rest period.
/// Emitted exactly once, consumed by external persistence/feedback.
#[derive(Clone, Debug, Serialize)]
pub struct WorkoutSummary {
    pub exercise: String,
    pub started_at: f64,
    pub ended_at: f64,
    pub duration: f64,
    pub reps: u32,
    pub mistakes: Vec<String>,
    pub persona: String,
}

pub struct SessionTracker {
    phase: SessionPhase,
    set_start: f64,
    rest_start: f64,
    /// Highest rep total observed during the current set
    last_rep_seen: u32,
    set_mistakes: Vec<String>,
    frozen_reps: u32,
    freeze_until: f64,
    persona: Persona,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Resting,
            set_start: 0.0,
            rest_start: 0.0,
            last_rep_seen: 0,
            set_mistakes: Vec::new(),
            frozen_reps: 0,
            freeze_until: 0.0,
            persona: Persona::Default,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_set_active(&self) -> bool {
        self.phase == SessionPhase::SetActive
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    pub fn last_rep_seen(&self) -> u32 {
        self.last_rep_seen
    }

    /// Mark the start of a rest period (idempotent if already timing one)
    pub fn begin_rest(&mut self, now: f64) {
        self.phase = SessionPhase::Resting;
        self.rest_start = now;
    }

    /// Ensure a rest clock is running without restarting a live one
    pub fn ensure_rest_clock(&mut self, now: f64) {
        if self.rest_start == 0.0 {
            self.rest_start = now;
        }
    }

    /// Open a fresh set: new start time, empty mistake accumulator.
    /// The observed rep total is left alone so a set auto-started by its
    /// first rep keeps that rep.
    pub fn begin_set(&mut self, now: f64) {
        self.phase = SessionPhase::SetActive;
        self.set_start = now;
        self.set_mistakes.clear();
        self.rest_start = 0.0;
    }

    /// Record this frame's mistakes into the set accumulator
    pub fn record_mistakes(&mut self, mistakes: &[&'static str]) {
        if self.phase == SessionPhase::SetActive {
            self.set_mistakes
                .extend(mistakes.iter().map(|m| m.to_string()));
        }
    }

    /// Track the rep total; returns true when this frame should auto-start
    /// a set (first rep observed while still resting).
    pub fn observe_reps(&mut self, reps: u32) -> bool {
        if reps > self.last_rep_seen {
            self.last_rep_seen = reps;
            return self.phase != SessionPhase::SetActive;
        }
        false
    }

    /// Seal the active set into a summary, freeze the displayed rep count,
    /// and return to rest.
    pub fn seal_set(&mut self, exercise: &'static str, now: f64) -> WorkoutSummary {
        let summary = WorkoutSummary {
            exercise: exercise.to_string(),
            started_at: self.set_start,
            ended_at: now,
            duration: now - self.set_start,
            reps: self.last_rep_seen,
            mistakes: std::mem::take(&mut self.set_mistakes),
            persona: self.persona.name().to_string(),
        };
        self.frozen_reps = summary.reps;
        self.freeze_until = now + REP_FREEZE_SECONDS;
        self.last_rep_seen = 0;
        self.begin_rest(now);
        summary
    }

    /// Seal the elapsed rest period into a summary
    pub fn seal_rest(&mut self, now: f64) -> WorkoutSummary {
        WorkoutSummary {
            exercise: "rest".to_string(),
            started_at: self.rest_start,
            ended_at: now,
            duration: now - self.rest_start,
            reps: 0,
            mistakes: Vec::new(),
            persona: self.persona.name().to_string(),
        }
    }

    /// Rep count to publish this frame: the live count during a set, the
    /// frozen final count for a short window after sealing, 0 at rest.
    pub fn display_reps(&self, now: f64, live: u32) -> u32 {
        if now < self.freeze_until {
            self.frozen_reps
        } else if self.phase == SessionPhase::SetActive {
            live.max(self.last_rep_seen)
        } else {
            0
        }
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_set_captures_reps_mistakes_and_timing() {
        let mut t = SessionTracker::new();
        t.begin_set(10.0);
        t.observe_reps(3);
        t.record_mistakes(&["go deeper."]);
        t.record_mistakes(&["chest up.", "go deeper."]);
        let s = t.seal_set("squat", 40.0);
        assert_eq!(s.exercise, "squat");
        assert_eq!(s.reps, 3);
        assert_eq!(s.duration, 30.0);
        assert_eq!(s.mistakes, vec!["go deeper.", "chest up.", "go deeper."]);
        assert_eq!(s.persona, "default");
        assert_eq!(t.phase(), SessionPhase::Resting);
    }

    #[test]
    fn mistakes_ignored_while_resting() {
        let mut t = SessionTracker::new();
        t.record_mistakes(&["go deeper."]);
        t.begin_set(0.0);
        let s = t.seal_set("squat", 1.0);
        assert!(s.mistakes.is_empty());
    }

    #[test]
    fn first_rep_while_resting_requests_auto_start() {
        let mut t = SessionTracker::new();
        assert!(t.observe_reps(1));
        t.begin_set(0.0);
        assert!(!t.observe_reps(2));
        // No new rep, no trigger
        assert!(!t.observe_reps(2));
    }

    #[test]
    fn display_reps_freeze_then_zero() {
        let mut t = SessionTracker::new();
        t.begin_set(0.0);
        t.observe_reps(4);
        assert_eq!(t.display_reps(5.0, 4), 4);
        t.seal_set("squat", 10.0);
        assert_eq!(t.display_reps(11.0, 0), 4);
        assert_eq!(t.display_reps(10.0 + REP_FREEZE_SECONDS + 0.1, 0), 0);
    }

    #[test]
    fn rest_summary_spans_the_rest_period() {
        let mut t = SessionTracker::new();
        t.begin_rest(100.0);
        let s = t.seal_rest(130.0);
        assert_eq!(s.exercise, "rest");
        assert_eq!(s.duration, 30.0);
        assert_eq!(s.reps, 0);
    }
}
