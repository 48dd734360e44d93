//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frames;
mod session_api;

pub use frames::process_frame;

pub use session_api::{finish_session, poll_cue, poll_summary, set_exercise, set_persona};
