//! Push-up form analysis
//!
//! A priority cascade that stops as soon as two cues are queued:
//! posture gate → hand placement → hip line → elbow range of motion.
//! The range-of-motion cue is the exception: when it fires it jumps to the
//! front of the list.

use crate::analysis::MAX_CUES;
use crate::pose::{
    joint_angle_deg, Ema, NormalizedFrame, WindowAvg, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP,
    LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};
use nalgebra::Vector2;

pub const CUE_GET_ON_FLOOR: &str = "get on the floor.";
pub const CUE_HOLD_PLANK: &str = "hold a straight plank.";
pub const CUE_HANDS_CLOSER: &str = "bring hands closer.";
pub const CUE_HANDS_WIDER: &str = "move hands wider.";
pub const CUE_HANDS_UNDER_SHOULDERS: &str = "hands under shoulders.";
pub const CUE_LIFT_HIPS: &str = "lift hips.";
pub const CUE_LOWER_HIPS: &str = "lower hips.";
pub const CUE_GO_LOWER: &str = "go lower.";

/// Constant thresholds for the push-up rules. Immutable after construction.
pub struct PushupConfig {
    /// Shoulder/hip vertical gap above which the user is clearly standing
    pub upright_delta_y_min: f32,
    /// Gap below which the torso counts as a plank
    pub plank_torso_y_max: f32,
    /// Acceptable wrist-span / shoulder-span band
    pub hands_ratio_min: f32,
    pub hands_ratio_max: f32,
    /// Max average horizontal wrist-to-shoulder offset
    pub hands_x_offset_max: f32,
    /// Max hip deviation from the shoulder→ankle line
    pub hip_line_max_dev: f32,
    /// Mean elbow angle below this counts as bottom-of-rep outright
    pub elbow_bottom_abs_deg: f32,
    /// Or a drop of at least this many degrees from the rolling top
    pub elbow_min_drop_deg: f32,
    /// Rolling top decays this much per frame toward the current angle
    pub elbow_top_decay_deg: f32,
    /// Bottom-frame ratio below this fires "go lower"
    pub bottom_ratio_trigger: f32,
    /// Window capacities
    pub hands_window: usize,
    pub bottom_window: usize,
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            upright_delta_y_min: 0.60,
            plank_torso_y_max: 0.22,
            hands_ratio_min: 0.75,
            hands_ratio_max: 1.25,
            hands_x_offset_max: 0.40,
            hip_line_max_dev: 0.15,
            elbow_bottom_abs_deg: 95.0,
            elbow_min_drop_deg: 35.0,
            elbow_top_decay_deg: 0.5,
            bottom_ratio_trigger: 0.25,
            hands_window: 5,
            bottom_window: 10,
        }
    }
}

/// Push-up analyzer: config plus all smoothing state for the active set
pub struct PushupAnalyzer {
    cfg: PushupConfig,
    torso_gap: Ema,
    hands_ratio: WindowAvg,
    hands_offset: Ema,
    hip_dev: Ema,
    hip_dev_sign: Ema,
    elbow_mean: Ema,
    /// Rolling top-of-motion maximum of the smoothed elbow angle
    elbow_top: f32,
    bottom_ratio: WindowAvg,
}

impl PushupAnalyzer {
    pub fn new(cfg: PushupConfig) -> Self {
        let hands_window = cfg.hands_window;
        let bottom_window = cfg.bottom_window;
        Self {
            cfg,
            torso_gap: Ema::default(),
            hands_ratio: WindowAvg::new(hands_window),
            hands_offset: Ema::default(),
            hip_dev: Ema::default(),
            hip_dev_sign: Ema::default(),
            elbow_mean: Ema::default(),
            elbow_top: 0.0,
            bottom_ratio: WindowAvg::new(bottom_window),
        }
    }

    pub fn evaluate(&mut self, norm: &NormalizedFrame) -> Vec<&'static str> {
        let mut mistakes = Vec::new();

        let l_sh = norm.point(LEFT_SHOULDER);
        let r_sh = norm.point(RIGHT_SHOULDER);
        let l_wr = norm.point(LEFT_WRIST);
        let r_wr = norm.point(RIGHT_WRIST);
        let sh_center = norm.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER);
        let hip_center = norm.midpoint(LEFT_HIP, RIGHT_HIP);
        let ank_center = norm.midpoint(LEFT_ANKLE, RIGHT_ANKLE);

        // ---- 1) Posture gate: standing vs plank
        let gap = self.torso_gap.update((sh_center.y - hip_center.y).abs());
        if gap > self.cfg.upright_delta_y_min {
            // Not attempting a push-up at all; one setup cue and stop.
            mistakes.push(CUE_GET_ON_FLOOR);
            return mistakes;
        }
        if gap >= self.cfg.plank_torso_y_max {
            mistakes.push(CUE_HOLD_PLANK);
        }

        // ---- 2) Hand placement: span ratio and under-shoulder offset
        let shoulder_span = Vector2::new(r_sh.x - l_sh.x, r_sh.y - l_sh.y).norm() + 1e-9;
        let ratio = self.hands_ratio.push((r_wr.x - l_wr.x).abs() / shoulder_span);
        let offset = self
            .hands_offset
            .update(0.5 * ((l_wr.x - l_sh.x).abs() + (r_wr.x - r_sh.x).abs()));
        if ratio > self.cfg.hands_ratio_max {
            mistakes.push(CUE_HANDS_CLOSER);
        } else if ratio < self.cfg.hands_ratio_min {
            mistakes.push(CUE_HANDS_WIDER);
        }
        if offset > self.cfg.hands_x_offset_max {
            mistakes.push(CUE_HANDS_UNDER_SHOULDERS);
        }
        if mistakes.len() >= MAX_CUES {
            mistakes.truncate(MAX_CUES);
            return mistakes;
        }

        // ---- 3) Hip line: sag vs pike
        let (signed_y, dist) = signed_distance_to_line(
            hip_center.xy(),
            sh_center.xy(),
            ank_center.xy(),
        );
        let dev = self.hip_dev.update(dist);
        let dev_sign = self.hip_dev_sign.update(signed_y);
        if dev > self.cfg.hip_line_max_dev {
            // Positive residual = hips below the line (sag)
            if dev_sign > 0.0 {
                mistakes.push(CUE_LIFT_HIPS);
            } else {
                mistakes.push(CUE_LOWER_HIPS);
            }
        }
        if mistakes.len() >= MAX_CUES {
            mistakes.truncate(MAX_CUES);
            return mistakes;
        }

        // ---- 4) Elbow range of motion
        let angle_l = joint_angle_deg(
            l_sh.xy(),
            norm.point(LEFT_ELBOW).xy(),
            l_wr.xy(),
        );
        let angle_r = joint_angle_deg(
            r_sh.xy(),
            norm.point(RIGHT_ELBOW).xy(),
            r_wr.xy(),
        );
        let mean = self.elbow_mean.update(0.5 * (angle_l + angle_r));
        self.elbow_top = (self.elbow_top - self.cfg.elbow_top_decay_deg).max(mean);
        let bottom_reached = mean < self.cfg.elbow_bottom_abs_deg
            || (self.elbow_top - mean) >= self.cfg.elbow_min_drop_deg;
        let ratio = self
            .bottom_ratio
            .push(if bottom_reached { 1.0 } else { 0.0 });
        // Only judge depth once a full window of plank frames exists
        if self.bottom_ratio.is_full() && ratio < self.cfg.bottom_ratio_trigger {
            mistakes.insert(0, CUE_GO_LOWER);
        }

        mistakes.truncate(MAX_CUES);
        mistakes
    }
}

impl Default for PushupAnalyzer {
    fn default() -> Self {
        Self::new(PushupConfig::default())
    }
}

/// Signed vertical residual of `pt` against the line through `a` and `b`
/// (y grows downward: positive = below the line), plus the Euclidean
/// distance to the line. Denominator epsilon-guarded.
fn signed_distance_to_line(pt: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>) -> (f32, f32) {
    let v = b - a;
    let pa = pt - a;
    let t = pa.dot(&v) / (v.dot(&v) + 1e-9);
    let proj = a + v * t;
    (pt.y - proj.y, (pt - proj).norm())
}
