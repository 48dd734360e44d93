//! Session module - rep counting, gesture switching, lifecycle, cues
//!
//! Re-exports only. All logic in submodules.

mod cues;
mod gestures;
mod lifecycle;
mod rep_counter;

pub use cues::{Cue, CueArbiter, Persona};
pub use gestures::GestureSwitch;
pub use lifecycle::{SessionTracker, WorkoutSummary, REP_FREEZE_SECONDS};
pub use rep_counter::RepCounter;
