//! Form Coach Web - real-time exercise form analysis
//!
//! Consumes MediaPipe pose landmarks from JavaScript and runs the coaching
//! core: per-frame mistake classification, rep counting, gesture-driven
//! exercise switching, session lifecycle, and voice-cue arbitration.
//!
//! `lib.rs` only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod analysis;
mod bridge;
mod engine;
mod pose;
mod session;

#[cfg(test)]
pub(crate) mod testpose;

pub use analysis::Exercise;
pub use engine::{Engine, EngineError, FrameOutput};
pub use session::{Cue, Persona, WorkoutSummary};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{finish_session, poll_cue, poll_summary, process_frame, set_exercise, set_persona};

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Form coach engine loaded");
}
