//! Pose module - landmark types, normalization, and smoothing
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod landmark;
mod normalize;
mod smoothing;

pub use angles::{angle_between_deg, joint_angle_deg};
pub use landmark::{
    Landmark, LandmarkFrame, NormalizedFrame, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP,
    LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER, RIGHT_WRIST,
};
pub use normalize::normalize_landmarks;
pub use smoothing::{Ema, WindowAvg};
