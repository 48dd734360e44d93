//! Joint angle calculation using dot product
//!
//! Angles are computed in the 2D image projection: MediaPipe's z channel is
//! far noisier than x/y, and every threshold in the analyzers is tuned
//! against the projected angle.

use nalgebra::Vector2;

/// Epsilon added to vector norms before dividing
const NORM_EPS: f32 = 1e-8;

/// Angle between two 2D vectors in degrees, 0..180.
///
/// cos(θ) = (v1 · v2) / (|v1| × |v2|), norms epsilon-guarded so a zero
/// vector never divides by zero.
pub fn angle_between_deg(v1: Vector2<f32>, v2: Vector2<f32>) -> f32 {
    let n1 = v1.norm() + NORM_EPS;
    let n2 = v2.norm() + NORM_EPS;
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Angle at joint `b` between segments `b→a` and `b→c`, in degrees.
///
/// For an elbow: a = shoulder, b = elbow, c = wrist.
/// - 90° = fully bent
/// - 180° = fully straight
pub fn joint_angle_deg(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> f32 {
    angle_between_deg(a - b, c - b)
}
