//! Landmark frame types
//!
//! One `LandmarkFrame` per camera frame, produced by the external pose
//! estimator (MediaPipe Pose, 33 points). Points are addressed by fixed
//! anatomical index.

use nalgebra::Vector3;

/// Total MediaPipe Pose landmarks per frame
pub const LANDMARK_COUNT: usize = 33;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// FRAME TYPES
// ============================================================================

/// A single tracked body point in normalized image coordinates
#[derive(Clone, Copy, Default, Debug)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Relative depth
    pub z: f32,
    /// Detection confidence, 0..1
    pub visibility: f32,
}

/// One raw frame of 33 landmarks. Immutable once built.
#[derive(Clone, Debug)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from a flat `[x, y, z, visibility]` stream (132 floats).
    /// Returns None on any other length.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != LANDMARK_COUNT * 4 {
            return None;
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            *point = Landmark {
                x: data[i * 4],
                y: data[i * 4 + 1],
                z: data[i * 4 + 2],
                visibility: data[i * 4 + 3],
            };
        }
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// Position as a 3D vector (drops visibility)
    pub fn position(&self, index: usize) -> Vector3<f32> {
        let p = self.points[index];
        Vector3::new(p.x, p.y, p.z)
    }
}

/// Hip-centered, shoulder-width-scaled frame. Derived, never mutated.
#[derive(Clone, Debug)]
pub struct NormalizedFrame {
    points: [Vector3<f32>; LANDMARK_COUNT],
}

impl NormalizedFrame {
    pub(crate) fn new(points: [Vector3<f32>; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn point(&self, index: usize) -> Vector3<f32> {
        self.points[index]
    }

    /// Midpoint of two landmarks
    pub fn midpoint(&self, a: usize, b: usize) -> Vector3<f32> {
        (self.points[a] + self.points[b]) * 0.5
    }
}
