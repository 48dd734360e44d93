//! Voice cue arbitration
//!
//! Picks at most one cue per poll from the current mistake list and rep
//! count, under three cooldowns: a global gap between any two cues, a
//! per-cue-key gap, and a shorter gap for rep announcements. Rep
//! announcements outrank mistake cues.

use std::collections::HashMap;

use serde::Serialize;

/// Minimum seconds between any two cues
const COOLDOWN_GLOBAL: f64 = 5.0;
/// Minimum seconds between repeats of the same cue key
const COOLDOWN_PER_KEY: f64 = 5.0;
/// Minimum seconds before a rep announcement may interrupt
const COOLDOWN_REP: f64 = 1.2;

/// Voice persona for pre-rendered cue audio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    Default,
    Goggins,
    Barbie,
}

impl Persona {
    pub fn name(&self) -> &'static str {
        match self {
            Persona::Default => "default",
            Persona::Goggins => "goggins",
            Persona::Barbie => "barbie",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Persona::Default),
            "goggins" => Some(Persona::Goggins),
            "barbie" => Some(Persona::Barbie),
            _ => None,
        }
    }
}

/// Stable keys for the pre-rendered cue audio files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueKey {
    GetOnFloor,
    HoldPlank,
    HandsCloser,
    HandsWider,
    HandsUnderShoulders,
    LiftHips,
    LowerHips,
    GoLower,
    StepBack,
    SquatGoDeeper,
    SquatChestUp,
    SquatKneeOutLeft,
    SquatKneeOutRight,
}

impl CueKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CueKey::GetOnFloor => "GET_ON_FLOOR",
            CueKey::HoldPlank => "HOLD_PLANK",
            CueKey::HandsCloser => "HANDS_CLOSER",
            CueKey::HandsWider => "HANDS_WIDER",
            CueKey::HandsUnderShoulders => "HANDS_UNDER_SHOULDERS",
            CueKey::LiftHips => "LIFT_HIPS",
            CueKey::LowerHips => "LOWER_HIPS",
            CueKey::GoLower => "GO_LOWER",
            CueKey::StepBack => "STEP_BACK",
            CueKey::SquatGoDeeper => "SQUAT_GO_DEEPER",
            CueKey::SquatChestUp => "SQUAT_CHEST_UP",
            CueKey::SquatKneeOutLeft => "SQUAT_KNEE_OUT_LEFT",
            CueKey::SquatKneeOutRight => "SQUAT_KNEE_OUT_RIGHT",
        }
    }
}

/// Phrase-fragment lexicon mapping analyzer text to cue keys.
/// First match wins; unmatched text never becomes a cue.
const CUE_LEXICON: [(&str, CueKey); 13] = [
    ("get on the floor", CueKey::GetOnFloor),
    ("straight plank", CueKey::HoldPlank),
    ("hands closer", CueKey::HandsCloser),
    ("hands wider", CueKey::HandsWider),
    ("hands under", CueKey::HandsUnderShoulders),
    ("lift hips", CueKey::LiftHips),
    ("lower hips", CueKey::LowerHips),
    ("go lower", CueKey::GoLower),
    ("show knees/ankles", CueKey::StepBack),
    ("deeper", CueKey::SquatGoDeeper),
    ("chest up", CueKey::SquatChestUp),
    ("left knee out", CueKey::SquatKneeOutLeft),
    ("right knee out", CueKey::SquatKneeOutRight),
];

fn cue_key_from_text(text: &str) -> Option<CueKey> {
    let low = text.trim().to_lowercase();
    CUE_LEXICON
        .iter()
        .find(|(needle, _)| low.contains(needle))
        .map(|&(_, key)| key)
}

/// One selected cue, ready for external audio playback
#[derive(Clone, Debug, Serialize)]
pub struct Cue {
    pub url: String,
    pub key: String,
    pub text: String,
    pub persona: String,
}

/// Cooldown-tracking cue selector. State persists for the process lifetime;
/// only the rep-announce counter is re-zeroed on exercise change (it mirrors
/// the rep counter it announces).
pub struct CueArbiter {
    last_fired_at: f64,
    last_per_key: HashMap<CueKey, f64>,
    last_rep_spoken: u32,
}

impl CueArbiter {
    pub fn new() -> Self {
        Self {
            last_fired_at: 0.0,
            last_per_key: HashMap::new(),
            last_rep_spoken: 0,
        }
    }

    /// Forget which rep was last announced; called on exercise change
    pub fn reset_rep_announcements(&mut self) {
        self.last_rep_spoken = 0;
    }

    /// Select at most one cue for this poll.
    pub fn select(
        &mut self,
        mistakes: &[&'static str],
        rep_total: u32,
        persona: Persona,
        now: f64,
    ) -> Option<Cue> {
        // Rep announcements outrank mistakes, on their own shorter cooldown
        if rep_total > self.last_rep_spoken && now - self.last_fired_at >= COOLDOWN_REP {
            self.last_rep_spoken = rep_total;
            self.last_fired_at = now;
            return Some(Cue {
                url: format!("/static/tts/{}/rep_{}.wav", persona.name(), rep_total),
                key: format!("REP_{rep_total}"),
                text: rep_total.to_string(),
                persona: persona.name().to_string(),
            });
        }

        if now - self.last_fired_at < COOLDOWN_GLOBAL {
            return None;
        }

        for &text in mistakes {
            let Some(key) = cue_key_from_text(text) else {
                continue;
            };
            let last_for_key = self.last_per_key.get(&key).copied().unwrap_or(0.0);
            if now - last_for_key < COOLDOWN_PER_KEY {
                continue;
            }
            self.last_per_key.insert(key, now);
            self.last_fired_at = now;
            return Some(Cue {
                url: format!(
                    "/static/tts/{}/{}.wav",
                    persona.name(),
                    key.as_str().to_lowercase()
                ),
                key: key.as_str().to_string(),
                text: text.to_string(),
                persona: persona.name().to_string(),
            });
        }
        None
    }
}

impl Default for CueArbiter {
    fn default() -> Self {
        Self::new()
    }
}
