//! Squat form analysis
//!
//! Visibility-gated: without the knees and ankles in frame the geometry is
//! meaningless, so the analyzer short-circuits with a setup cue instead of
//! feeding occluded-limb noise into its averages.

use crate::analysis::MAX_CUES;
use crate::pose::{
    angle_between_deg, Ema, LandmarkFrame, NormalizedFrame, WindowAvg, LEFT_ANKLE, LEFT_HIP,
    LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};
use nalgebra::Vector2;

pub const CUE_STEP_BACK: &str = "step back; show knees/ankles.";
pub const CUE_GO_DEEPER: &str = "go deeper.";
pub const CUE_CHEST_UP: &str = "chest up.";
pub const CUE_KNEE_OUT_LEFT: &str = "push left knee out.";
pub const CUE_KNEE_OUT_RIGHT: &str = "push right knee out.";

/// Joints the visibility gate checks on the raw frame
const REQUIRED_LEG_IDXS: [usize; 4] = [LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE];

/// Constant thresholds for the squat rules. Immutable after construction.
pub struct SquatConfig {
    /// Max torso angle off vertical before "chest up"
    pub torso_lean_limit_deg: f32,
    /// Horizontal knee-over-ankle offset that counts as a valgus frame
    pub knee_cave_x_offset: f32,
    /// Hip may sit this far above the knee line and still count as deep
    pub depth_tolerance: f32,
    /// Minimum landmark visibility for the leg gate
    pub vis_thr: f32,
    /// Allowed overshoot outside the 0..1 image box
    pub inframe_margin: f32,
    /// Valgus-frame ratio that fires the knee cue
    pub valgus_trigger: f32,
    /// Deep-frame ratio below which "go deeper" fires
    pub depth_ratio_trigger: f32,
    /// Sliding window capacity for the ratio metrics
    pub window: usize,
}

impl Default for SquatConfig {
    fn default() -> Self {
        Self {
            torso_lean_limit_deg: 55.0,
            knee_cave_x_offset: 0.18,
            depth_tolerance: 0.05,
            vis_thr: 0.35,
            inframe_margin: 0.04,
            valgus_trigger: 0.65,
            depth_ratio_trigger: 0.50,
            window: 5,
        }
    }
}

/// Squat analyzer: config plus all smoothing state for the active set
pub struct SquatAnalyzer {
    cfg: SquatConfig,
    torso_lean: Ema,
    depth_ratio: WindowAvg,
    valgus_left: WindowAvg,
    valgus_right: WindowAvg,
}

impl SquatAnalyzer {
    pub fn new(cfg: SquatConfig) -> Self {
        let window = cfg.window;
        Self {
            cfg,
            torso_lean: Ema::default(),
            depth_ratio: WindowAvg::new(window),
            valgus_left: WindowAvg::new(window),
            valgus_right: WindowAvg::new(window),
        }
    }

    pub fn evaluate(
        &mut self,
        norm: &NormalizedFrame,
        raw: &LandmarkFrame,
    ) -> Vec<&'static str> {
        // Gate first: occluded legs would corrupt every average below.
        if !self.legs_visible(raw) {
            return vec![CUE_STEP_BACK];
        }

        let sh_center = norm.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER);
        let hip_center = norm.midpoint(LEFT_HIP, RIGHT_HIP);
        let knee_center = norm.midpoint(LEFT_KNEE, RIGHT_KNEE);

        // Torso lean off vertical (y grows downward, so "up" is -y)
        let v_torso = Vector2::new(sh_center.x - hip_center.x, sh_center.y - hip_center.y);
        let lean = self
            .torso_lean
            .update(angle_between_deg(v_torso, Vector2::new(0.0, -1.0)));

        // Depth: hip center at or below the knee line (minus tolerance)
        let deep_now = hip_center.y > knee_center.y - self.cfg.depth_tolerance;
        let depth_ratio = self.depth_ratio.push(if deep_now { 1.0 } else { 0.0 });

        // Valgus: knee collapsing inward past the ankle, signed per side
        let dx_l = norm.point(LEFT_KNEE).x - norm.point(LEFT_ANKLE).x;
        let dx_r = norm.point(RIGHT_KNEE).x - norm.point(RIGHT_ANKLE).x;
        let caving_l = dx_l.abs() > self.cfg.knee_cave_x_offset && dx_l < 0.0;
        let caving_r = dx_r.abs() > self.cfg.knee_cave_x_offset && dx_r > 0.0;
        let valgus_l = self.valgus_left.push(if caving_l { 1.0 } else { 0.0 });
        let valgus_r = self.valgus_right.push(if caving_r { 1.0 } else { 0.0 });

        let mut mistakes = Vec::new();
        if depth_ratio < self.cfg.depth_ratio_trigger {
            mistakes.push(CUE_GO_DEEPER);
        }
        if lean > self.cfg.torso_lean_limit_deg {
            mistakes.push(CUE_CHEST_UP);
        }
        if valgus_l > self.cfg.valgus_trigger {
            mistakes.push(CUE_KNEE_OUT_LEFT);
        }
        if valgus_r > self.cfg.valgus_trigger {
            mistakes.push(CUE_KNEE_OUT_RIGHT);
        }
        mistakes.truncate(MAX_CUES);
        mistakes
    }

    /// At least two of {knees, ankles} confidently visible and inside the
    /// (margin-padded) image box.
    fn legs_visible(&self, raw: &LandmarkFrame) -> bool {
        let margin = self.cfg.inframe_margin;
        let mut ok = 0;
        for &i in &REQUIRED_LEG_IDXS {
            let p = raw.point(i);
            let in_frame = (-margin..=1.0 + margin).contains(&p.x)
                && (-margin..=1.0 + margin).contains(&p.y);
            if p.visibility >= self.cfg.vis_thr && in_frame {
                ok += 1;
            }
        }
        ok >= 2
    }
}

impl Default for SquatAnalyzer {
    fn default() -> Self {
        Self::new(SquatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::normalize_landmarks;
    use crate::testpose;

    fn run(analyzer: &mut SquatAnalyzer, raw: &LandmarkFrame) -> Vec<&'static str> {
        let norm = normalize_landmarks(raw);
        analyzer.evaluate(&norm, raw)
    }

    #[test]
    fn occluded_legs_short_circuit_with_setup_cue() {
        let mut a = SquatAnalyzer::default();
        let frame = testpose::standing_occluded_legs();
        for _ in 0..3 {
            assert_eq!(run(&mut a, &frame), vec![CUE_STEP_BACK]);
        }
    }

    #[test]
    fn cropped_legs_short_circuit_with_setup_cue() {
        let mut a = SquatAnalyzer::default();
        // Knees/ankles confidently tracked but below the padded image box
        let frame = testpose::standing_legs_cropped();
        assert_eq!(run(&mut a, &frame), vec![CUE_STEP_BACK]);
        assert_eq!(a.torso_lean.get(), None);
    }

    #[test]
    fn occluded_legs_leave_smoothing_untouched() {
        let mut a = SquatAnalyzer::default();
        for _ in 0..10 {
            run(&mut a, &testpose::standing_occluded_legs());
        }
        assert_eq!(a.torso_lean.get(), None);
        assert!(!a.depth_ratio.is_full());
    }

    #[test]
    fn deep_upright_squat_is_good_form() {
        let mut a = SquatAnalyzer::default();
        for _ in 0..6 {
            assert!(run(&mut a, &testpose::squat_deep()).is_empty());
        }
    }

    #[test]
    fn shallow_squat_cues_go_deeper() {
        let mut a = SquatAnalyzer::default();
        let cues = run(&mut a, &testpose::squat_shallow());
        assert_eq!(cues, vec![CUE_GO_DEEPER]);
    }

    #[test]
    fn forward_lean_cues_chest_up() {
        let mut a = SquatAnalyzer::default();
        let cues = run(&mut a, &testpose::squat_leaning());
        assert!(cues.contains(&CUE_CHEST_UP));
    }

    #[test]
    fn left_knee_cave_cues_knee_out() {
        let mut a = SquatAnalyzer::default();
        let cues = run(&mut a, &testpose::squat_valgus_left());
        assert_eq!(cues, vec![CUE_KNEE_OUT_LEFT]);
    }

    #[test]
    fn at_most_two_cues_per_frame() {
        let mut a = SquatAnalyzer::default();
        // Shallow, leaning, and caving all at once
        let mut frame = testpose::squat_valgus_left();
        frame = testpose::with_shallow_hips(frame);
        for _ in 0..8 {
            let cues = run(&mut a, &frame);
            assert!(cues.len() <= MAX_CUES);
        }
    }

    #[test]
    fn depth_ratio_recovers_with_hysteresis() {
        let mut a = SquatAnalyzer::default();
        for _ in 0..5 {
            run(&mut a, &testpose::squat_shallow());
        }
        // One deep frame is not enough to clear the windowed ratio
        let cues = run(&mut a, &testpose::squat_deep());
        assert_eq!(cues, vec![CUE_GO_DEEPER]);
        // Three more deep frames push the ratio past the trigger
        run(&mut a, &testpose::squat_deep());
        run(&mut a, &testpose::squat_deep());
        let cues = run(&mut a, &testpose::squat_deep());
        assert!(cues.is_empty());
    }
}
