//! Frame ingestion and engine storage
//!
//! Receives MediaPipe pose landmarks from JavaScript each video frame and
//! runs them through the coaching engine. The engine lives in thread-local
//! storage (WASM is single-threaded); session_api entry points borrow it
//! through [`with_engine`].

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::engine::Engine;
use crate::pose::LandmarkFrame;

/// Floats per frame: 33 landmarks × (x, y, z, visibility)
const FRAME_FLOATS: usize = 132;

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::new());
}

/// Run a closure against the engine singleton
pub(crate) fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|cell| f(&mut cell.borrow_mut()))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per video frame with a flat Float32Array of
/// 132 values (33 landmarks × x, y, z, visibility) and a monotonic
/// timestamp in seconds. An empty array means the pose estimator lost the
/// body this frame.
///
/// Returns the frame output object, or null on malformed input.
#[wasm_bindgen]
pub fn process_frame(data: &[f32], timestamp: f64) -> JsValue {
    let frame = if data.is_empty() {
        None
    } else {
        match LandmarkFrame::from_flat(data) {
            Some(frame) => Some(frame),
            None => {
                web_sys::console::warn_1(
                    &format!(
                        "Invalid landmark data length: {} (expected {FRAME_FLOATS} or 0)",
                        data.len()
                    )
                    .into(),
                );
                return JsValue::NULL;
            }
        }
    };

    let output = with_engine(|engine| engine.process_frame(frame.as_ref(), timestamp));
    serde_wasm_bindgen::to_value(&output).unwrap_or(JsValue::NULL)
}
