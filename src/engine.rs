//! The coaching engine
//!
//! One owned context for the whole frame loop: active exercise + analyzer,
//! rep counter, gesture switch, session tracker, and cue arbiter. Exactly
//! one frame is processed at a time; every output is an owned snapshot, so
//! external readers never observe partially-updated state.

use std::collections::VecDeque;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::{Analyzer, Exercise};
use crate::pose::{normalize_landmarks, LandmarkFrame};
use crate::session::{
    Cue, CueArbiter, GestureSwitch, Persona, RepCounter, SessionTracker, WorkoutSummary,
};

/// Rejected external commands. Nothing in the engine itself can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),
    #[error("unknown persona '{0}'")]
    UnknownPersona(String),
}

/// Per-frame snapshot published to the caller
#[derive(Clone, Debug, Serialize)]
pub struct FrameOutput {
    pub exercise: &'static str,
    pub mistakes: Vec<String>,
    pub reps: u32,
    pub good_form: bool,
    pub set_active: bool,
}

pub struct Engine {
    exercise: Exercise,
    analyzer: Analyzer,
    rep_counter: RepCounter,
    gestures: GestureSwitch,
    tracker: SessionTracker,
    arbiter: CueArbiter,
    /// Mistakes of the most recent frame, for cue polling
    current_cues: Vec<&'static str>,
    /// Sealed summaries awaiting external pickup
    summaries: VecDeque<WorkoutSummary>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            exercise: Exercise::Squat,
            analyzer: Analyzer::for_exercise(Exercise::Squat),
            rep_counter: RepCounter::default(),
            gestures: GestureSwitch::default(),
            tracker: SessionTracker::new(),
            arbiter: CueArbiter::new(),
            current_cues: Vec::new(),
            summaries: VecDeque::new(),
        }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    /// Process one landmark frame. `None` means the pose estimator lost the
    /// body this frame: not an error, just nothing to evaluate.
    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>, now: f64) -> FrameOutput {
        let Some(raw) = frame else {
            self.current_cues.clear();
            return self.snapshot(Vec::new(), now);
        };
        let norm = normalize_landmarks(raw);

        let suggestion = self.gestures.detect(&norm, self.exercise);
        let end_set = self.exercise != Exercise::Rest && self.gestures.end_set_detect(&norm);

        if self.exercise == Exercise::Rest {
            self.current_cues.clear();
            self.tracker.ensure_rest_clock(now);
            if let Some(target) = suggestion {
                let rest_summary = self.tracker.seal_rest(now);
                self.summaries.push_back(rest_summary);
                self.activate(target);
                self.tracker.begin_set(now);
            }
            return self.snapshot(Vec::new(), now);
        }

        let mistakes = self.analyzer.evaluate(&norm, raw);
        self.current_cues = mistakes.clone();

        let reps = self.rep_counter.update(mistakes.is_empty());
        if self.tracker.observe_reps(reps) {
            // First rep landed without an explicit transition out of rest
            self.tracker.begin_set(now);
        }
        self.tracker.record_mistakes(&mistakes);

        if self.tracker.is_set_active() && end_set {
            let summary = self.tracker.seal_set(self.exercise.name(), now);
            self.summaries.push_back(summary);
            self.activate(Exercise::Rest);
        }

        self.snapshot(mistakes, now)
    }

    /// External exercise-switch command, applied between frames. An active
    /// set is sealed first; the new set starts with its first rep.
    pub fn set_exercise(&mut self, target: Exercise, now: f64) {
        if self.tracker.is_set_active() {
            let summary = self.tracker.seal_set(self.exercise.name(), now);
            self.summaries.push_back(summary);
        }
        self.activate(target);
        self.current_cues.clear();
        if target == Exercise::Rest {
            self.tracker.begin_rest(now);
        }
    }

    pub fn set_exercise_by_name(&mut self, name: &str, now: f64) -> Result<Exercise, EngineError> {
        let target = Exercise::from_name(name)
            .ok_or_else(|| EngineError::UnknownExercise(name.to_string()))?;
        self.set_exercise(target, now);
        Ok(target)
    }

    pub fn set_persona_by_name(&mut self, name: &str) -> Result<Persona, EngineError> {
        let persona = Persona::from_name(name)
            .ok_or_else(|| EngineError::UnknownPersona(name.to_string()))?;
        self.tracker.set_persona(persona);
        Ok(persona)
    }

    /// At most one voice cue per poll, cooldown-gated
    pub fn poll_cue(&mut self, now: f64) -> Option<Cue> {
        self.arbiter.select(
            &self.current_cues,
            self.tracker.last_rep_seen(),
            self.tracker.persona(),
            now,
        )
    }

    /// Drain the next sealed set/rest summary, oldest first
    pub fn poll_summary(&mut self) -> Option<WorkoutSummary> {
        self.summaries.pop_front()
    }

    /// Clean shutdown: seal an in-progress set so no half-open state is
    /// left behind, then rest.
    pub fn finish(&mut self, now: f64) {
        if self.tracker.is_set_active() {
            let summary = self.tracker.seal_set(self.exercise.name(), now);
            self.summaries.push_back(summary);
            self.activate(Exercise::Rest);
        }
    }

    /// Switch the live exercise: fresh analyzer (and with it all smoothing
    /// state), zeroed rep counter and gesture streaks, forgotten rep
    /// announcements.
    fn activate(&mut self, exercise: Exercise) {
        self.exercise = exercise;
        self.analyzer = Analyzer::for_exercise(exercise);
        self.rep_counter.reset();
        self.gestures.reset();
        self.arbiter.reset_rep_announcements();
    }

    fn snapshot(&self, mistakes: Vec<&'static str>, now: f64) -> FrameOutput {
        FrameOutput {
            exercise: self.exercise.name(),
            good_form: mistakes.is_empty(),
            mistakes: mistakes.iter().map(|m| m.to_string()).collect(),
            reps: self.tracker.display_reps(now, self.rep_counter.count()),
            set_active: self.tracker.is_set_active(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
