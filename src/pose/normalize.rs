//! Landmark normalization
//!
//! Re-centers a raw frame on the hip midpoint and scales by inter-shoulder
//! distance, making every downstream threshold pose- and camera-invariant.

use super::landmark::{
    LandmarkFrame, NormalizedFrame, LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP,
    RIGHT_SHOULDER,
};
use nalgebra::Vector3;

/// Guard against near-zero shoulder distance on degenerate poses
const MIN_SHOULDER_DIST: f32 = 1e-6;

/// Normalize a raw frame: translate by -hip_center, scale by 1/shoulder_dist.
///
/// If the inter-shoulder distance is degenerate the frame is only translated,
/// never divided, so the output stays finite.
pub fn normalize_landmarks(frame: &LandmarkFrame) -> NormalizedFrame {
    let hip_center = (frame.position(LEFT_HIP) + frame.position(RIGHT_HIP)) * 0.5;
    let shoulder_dist =
        (frame.position(LEFT_SHOULDER) - frame.position(RIGHT_SHOULDER)).norm();

    let mut points = [Vector3::zeros(); LANDMARK_COUNT];
    if shoulder_dist > MIN_SHOULDER_DIST {
        let inv = 1.0 / shoulder_dist;
        for (i, point) in points.iter_mut().enumerate() {
            *point = (frame.position(i) - hip_center) * inv;
        }
    } else {
        for (i, point) in points.iter_mut().enumerate() {
            *point = frame.position(i) - hip_center;
        }
    }
    NormalizedFrame::new(points)
}
