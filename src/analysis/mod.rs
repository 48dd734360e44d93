//! Analysis module - per-exercise form rule evaluators
//!
//! One analyzer per exercise variant, each a state machine from
//! (normalized frame, raw frame) to an ordered mistake list of at most
//! [`MAX_CUES`] entries. Dispatch is a closed enum, never a string.

mod pushup;
mod rest;
mod squat;

pub use pushup::{
    PushupAnalyzer, CUE_GET_ON_FLOOR, CUE_GO_LOWER, CUE_HANDS_CLOSER,
    CUE_HANDS_UNDER_SHOULDERS, CUE_HANDS_WIDER, CUE_HOLD_PLANK, CUE_LIFT_HIPS, CUE_LOWER_HIPS,
};
pub use rest::RestAnalyzer;
pub use squat::{
    SquatAnalyzer, CUE_CHEST_UP, CUE_GO_DEEPER, CUE_KNEE_OUT_LEFT, CUE_KNEE_OUT_RIGHT,
    CUE_STEP_BACK,
};

use crate::pose::{LandmarkFrame, NormalizedFrame};

/// Maximum cues surfaced per frame
pub const MAX_CUES: usize = 2;

/// The closed set of supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    Squat,
    Pushup,
    Rest,
}

impl Exercise {
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Pushup => "pushup",
            Exercise::Rest => "rest",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "squat" => Some(Exercise::Squat),
            "pushup" => Some(Exercise::Pushup),
            "rest" => Some(Exercise::Rest),
            _ => None,
        }
    }
}

/// Analyzer for the currently active exercise.
///
/// Owns all smoothing state for its exercise; rebuilt from scratch on every
/// exercise change so stale averages never leak across sets.
pub enum Analyzer {
    Squat(SquatAnalyzer),
    Pushup(PushupAnalyzer),
    Rest(RestAnalyzer),
}

impl Analyzer {
    pub fn for_exercise(exercise: Exercise) -> Self {
        match exercise {
            Exercise::Squat => Analyzer::Squat(SquatAnalyzer::default()),
            Exercise::Pushup => Analyzer::Pushup(PushupAnalyzer::default()),
            Exercise::Rest => Analyzer::Rest(RestAnalyzer),
        }
    }

    /// Evaluate one frame. Returns the priority-ordered mistake list
    /// (empty = good form) and advances this analyzer's smoothing state.
    pub fn evaluate(
        &mut self,
        norm: &NormalizedFrame,
        raw: &LandmarkFrame,
    ) -> Vec<&'static str> {
        match self {
            Analyzer::Squat(a) => a.evaluate(norm, raw),
            Analyzer::Pushup(a) => a.evaluate(norm),
            Analyzer::Rest(a) => a.evaluate(),
        }
    }
}
