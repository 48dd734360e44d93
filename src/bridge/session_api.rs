//! Session control and polling entry points
//!
//! Exercise/persona commands plus the two poll channels JavaScript drains
//! on its own cadence: voice cues (rate-limited by the engine) and sealed
//! workout summaries (FIFO, emitted exactly once).

use wasm_bindgen::prelude::*;

use crate::bridge::frames::with_engine;

/// Force-switch the active exercise ("squat", "pushup", "rest"). An active
/// set is sealed first. Returns false and changes nothing on an unknown
/// name.
#[wasm_bindgen]
pub fn set_exercise(name: &str, timestamp: f64) -> bool {
    with_engine(|engine| match engine.set_exercise_by_name(name, timestamp) {
        Ok(exercise) => {
            web_sys::console::log_1(&format!("✅ Exercise set: {}", exercise.name()).into());
            true
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("{err}").into());
            false
        }
    })
}

/// Select the voice persona for cue audio ("default", "goggins", "barbie").
/// Returns false on an unknown name.
#[wasm_bindgen]
pub fn set_persona(name: &str) -> bool {
    with_engine(|engine| match engine.set_persona_by_name(name) {
        Ok(persona) => {
            web_sys::console::log_1(&format!("✅ Persona set: {}", persona.name()).into());
            true
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("{err}").into());
            false
        }
    })
}

/// Poll for the next voice cue. Returns a cue object with the audio URL,
/// or null when the cooldowns keep the coach quiet.
#[wasm_bindgen]
pub fn poll_cue(timestamp: f64) -> JsValue {
    with_engine(|engine| match engine.poll_cue(timestamp) {
        Some(cue) => serde_wasm_bindgen::to_value(&cue).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    })
}

/// Drain the next sealed set/rest summary (oldest first), or null.
#[wasm_bindgen]
pub fn poll_summary() -> JsValue {
    with_engine(|engine| match engine.poll_summary() {
        Some(summary) => {
            web_sys::console::log_1(
                &format!(
                    "✅ Summary sealed: {} ({} reps, {:.1}s)",
                    summary.exercise, summary.reps, summary.duration
                )
                .into(),
            );
            serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
        }
        None => JsValue::NULL,
    })
}

/// End the session: seal any in-progress set so poll_summary can pick it up.
#[wasm_bindgen]
pub fn finish_session(timestamp: f64) {
    with_engine(|engine| engine.finish(timestamp));
    web_sys::console::log_1(&"✅ Session finished".into());
}
