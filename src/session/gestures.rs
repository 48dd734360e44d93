//! Posture-gesture exercise switching
//!
//! Two sustained-posture detectors recommend exercise transitions, gated by
//! a shared cooldown so only one suggestion fires per window. A third,
//! cooldown-independent detector ("both wrists overhead") signals end of
//! set; its streak decays instead of resetting so a single dropped frame
//! does not restart the hold.

use crate::analysis::Exercise;
use crate::pose::{
    NormalizedFrame, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Shoulders must sit at least this far above the hips to count as upright
const UPRIGHT_MIN_GAP: f32 = 0.25;
/// Shoulder/hip vertical gap below this counts as plank-like
const PLANK_MAX_GAP: f32 = 0.12;
/// Wrist must clear its shoulder by this much to count as raised
const WRIST_RAISE_MARGIN: f32 = 0.02;

pub struct GestureSwitch {
    hand_raise_frames: u32,
    plank_frames: u32,
    cooldown_frames: u32,
    end_frames_required: u32,
    pushup_streak: u32,
    squat_streak: u32,
    end_streak: u32,
    cooldown: u32,
}

impl GestureSwitch {
    pub fn new(
        hand_raise_frames: u32,
        plank_frames: u32,
        cooldown_frames: u32,
        end_frames_required: u32,
    ) -> Self {
        Self {
            hand_raise_frames,
            plank_frames,
            cooldown_frames,
            end_frames_required,
            pushup_streak: 0,
            squat_streak: 0,
            end_streak: 0,
            cooldown: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pushup_streak = 0;
        self.squat_streak = 0;
        self.end_streak = 0;
        self.cooldown = 0;
    }

    /// Feed one frame; may recommend switching to a different exercise.
    ///
    /// While the cooldown is live it only ticks down - streaks are frozen
    /// and nothing can fire.
    pub fn detect(&mut self, norm: &NormalizedFrame, current: Exercise) -> Option<Exercise> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let sh_y = norm.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER).y;
        let hip_y = norm.midpoint(LEFT_HIP, RIGHT_HIP).y;

        let is_upright = hip_y > sh_y + UPRIGHT_MIN_GAP;
        let is_plank = (hip_y - sh_y).abs() < PLANK_MAX_GAP;
        let (left_above, right_above) = self.wrists_above(norm);
        let one_above = left_above ^ right_above;

        if is_plank {
            self.pushup_streak += 1;
        } else {
            self.pushup_streak = 0;
        }
        if is_upright && one_above {
            self.squat_streak += 1;
        } else {
            self.squat_streak = 0;
        }

        if self.pushup_streak >= self.plank_frames && current != Exercise::Pushup {
            self.cooldown = self.cooldown_frames;
            return Some(Exercise::Pushup);
        }
        if self.squat_streak >= self.hand_raise_frames && current != Exercise::Squat {
            self.cooldown = self.cooldown_frames;
            return Some(Exercise::Squat);
        }
        None
    }

    /// Both wrists overhead, sustained: end the current set.
    /// Independent of the suggestion cooldown.
    pub fn end_set_detect(&mut self, norm: &NormalizedFrame) -> bool {
        let (left_above, right_above) = self.wrists_above(norm);
        if left_above && right_above {
            self.end_streak += 1;
        } else {
            // Decay, don't reset: tolerant to single-frame noise
            self.end_streak = self.end_streak.saturating_sub(1);
        }
        if self.end_streak >= self.end_frames_required {
            self.end_streak = 0;
            return true;
        }
        false
    }

    fn wrists_above(&self, norm: &NormalizedFrame) -> (bool, bool) {
        let left = norm.point(LEFT_WRIST).y < norm.point(LEFT_SHOULDER).y - WRIST_RAISE_MARGIN;
        let right = norm.point(RIGHT_WRIST).y < norm.point(RIGHT_SHOULDER).y - WRIST_RAISE_MARGIN;
        (left, right)
    }
}

impl Default for GestureSwitch {
    fn default() -> Self {
        Self::new(10, 10, 30, 12)
    }
}
