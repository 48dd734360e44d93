//! Synthetic landmark frames for tests
//!
//! All poses are built in raw image coordinates (y grows downward) with a
//! known inter-shoulder distance so the normalized geometry is easy to
//! reason about in the assertions.

use crate::pose::{
    Landmark, LandmarkFrame, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
    RIGHT_WRIST,
};

const VIS: f32 = 0.9;

fn base() -> [Landmark; LANDMARK_COUNT] {
    [Landmark {
        x: 0.5,
        y: 0.5,
        z: 0.0,
        visibility: VIS,
    }; LANDMARK_COUNT]
}

fn set(points: &mut [Landmark; LANDMARK_COUNT], idx: usize, x: f32, y: f32) {
    points[idx] = Landmark {
        x,
        y,
        z: 0.0,
        visibility: VIS,
    };
}

fn to_points(frame: &LandmarkFrame) -> [Landmark; LANDMARK_COUNT] {
    let mut points = base();
    for (i, p) in points.iter_mut().enumerate() {
        *p = frame.point(i);
    }
    points
}

/// Upright standing pose, arms down. Inter-shoulder distance 0.1.
pub fn standing() -> LandmarkFrame {
    let mut p = base();
    set(&mut p, LEFT_SHOULDER, 0.45, 0.30);
    set(&mut p, RIGHT_SHOULDER, 0.55, 0.30);
    set(&mut p, LEFT_ELBOW, 0.43, 0.42);
    set(&mut p, RIGHT_ELBOW, 0.57, 0.42);
    set(&mut p, LEFT_WRIST, 0.42, 0.55);
    set(&mut p, RIGHT_WRIST, 0.58, 0.55);
    set(&mut p, LEFT_HIP, 0.46, 0.50);
    set(&mut p, RIGHT_HIP, 0.54, 0.50);
    set(&mut p, LEFT_KNEE, 0.46, 0.70);
    set(&mut p, RIGHT_KNEE, 0.54, 0.70);
    set(&mut p, LEFT_ANKLE, 0.46, 0.90);
    set(&mut p, RIGHT_ANKLE, 0.54, 0.90);
    LandmarkFrame::new(p)
}

/// Standing with the chosen wrist(s) raised well above the shoulders
pub fn standing_hands_up(left: bool, right: bool) -> LandmarkFrame {
    let mut p = to_points(&standing());
    if left {
        set(&mut p, LEFT_WRIST, 0.42, 0.20);
    }
    if right {
        set(&mut p, RIGHT_WRIST, 0.58, 0.20);
    }
    LandmarkFrame::new(p)
}

/// Standing, but three of the four knee/ankle landmarks barely visible
pub fn standing_occluded_legs() -> LandmarkFrame {
    let mut p = to_points(&standing());
    for idx in [LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE] {
        p[idx].visibility = 0.1;
    }
    LandmarkFrame::new(p)
}

/// Standing, confidently tracked, but the lower legs cropped below the
/// bottom image edge
pub fn standing_legs_cropped() -> LandmarkFrame {
    let mut p = to_points(&standing());
    for idx in [LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE] {
        p[idx].y = 1.10;
    }
    LandmarkFrame::new(p)
}

/// Deep squat, upright torso, knees tracking over ankles: good form
pub fn squat_deep() -> LandmarkFrame {
    let mut p = base();
    set(&mut p, LEFT_SHOULDER, 0.45, 0.38);
    set(&mut p, RIGHT_SHOULDER, 0.55, 0.38);
    set(&mut p, LEFT_WRIST, 0.42, 0.72);
    set(&mut p, RIGHT_WRIST, 0.58, 0.72);
    set(&mut p, LEFT_ELBOW, 0.43, 0.55);
    set(&mut p, RIGHT_ELBOW, 0.57, 0.55);
    set(&mut p, LEFT_HIP, 0.46, 0.60);
    set(&mut p, RIGHT_HIP, 0.54, 0.60);
    set(&mut p, LEFT_KNEE, 0.44, 0.58);
    set(&mut p, RIGHT_KNEE, 0.56, 0.58);
    set(&mut p, LEFT_ANKLE, 0.45, 0.78);
    set(&mut p, RIGHT_ANKLE, 0.55, 0.78);
    LandmarkFrame::new(p)
}

/// Half squat: hips still well above the knee line
pub fn squat_shallow() -> LandmarkFrame {
    with_shallow_hips(squat_deep())
}

/// Raise the hips (and shoulders, keeping the torso vertical) so depth fails
pub fn with_shallow_hips(frame: LandmarkFrame) -> LandmarkFrame {
    let mut p = to_points(&frame);
    let lx = p[LEFT_SHOULDER].x;
    let rx = p[RIGHT_SHOULDER].x;
    set(&mut p, LEFT_SHOULDER, lx, 0.23);
    set(&mut p, RIGHT_SHOULDER, rx, 0.23);
    set(&mut p, LEFT_HIP, 0.46, 0.45);
    set(&mut p, RIGHT_HIP, 0.54, 0.45);
    LandmarkFrame::new(p)
}

/// Deep squat with the torso pitched far forward
pub fn squat_leaning() -> LandmarkFrame {
    let mut p = to_points(&squat_deep());
    set(&mut p, LEFT_SHOULDER, 0.70, 0.55);
    set(&mut p, RIGHT_SHOULDER, 0.80, 0.55);
    LandmarkFrame::new(p)
}

/// Deep squat with the left knee collapsed inward past the ankle
pub fn squat_valgus_left() -> LandmarkFrame {
    let mut p = to_points(&squat_deep());
    set(&mut p, LEFT_KNEE, 0.42, 0.58);
    set(&mut p, LEFT_ANKLE, 0.48, 0.78);
    LandmarkFrame::new(p)
}

/// Camera-facing plank with clean geometry. Inter-shoulder distance 0.2.
/// `bent_elbows` swaps locked-out arms for a ~90° bottom position.
pub fn plank_front(bent_elbows: bool) -> LandmarkFrame {
    let mut p = base();
    set(&mut p, LEFT_SHOULDER, 0.40, 0.55);
    set(&mut p, RIGHT_SHOULDER, 0.60, 0.55);
    if bent_elbows {
        set(&mut p, LEFT_ELBOW, 0.30, 0.60);
        set(&mut p, RIGHT_ELBOW, 0.70, 0.60);
    } else {
        set(&mut p, LEFT_ELBOW, 0.39, 0.65);
        set(&mut p, RIGHT_ELBOW, 0.61, 0.65);
    }
    set(&mut p, LEFT_WRIST, 0.38, 0.75);
    set(&mut p, RIGHT_WRIST, 0.62, 0.75);
    set(&mut p, LEFT_HIP, 0.45, 0.57);
    set(&mut p, RIGHT_HIP, 0.55, 0.57);
    set(&mut p, LEFT_KNEE, 0.47, 0.78);
    set(&mut p, RIGHT_KNEE, 0.53, 0.78);
    set(&mut p, LEFT_ANKLE, 0.48, 0.95);
    set(&mut p, RIGHT_ANKLE, 0.52, 0.95);
    LandmarkFrame::new(p)
}

pub fn plank_front_wide_hands() -> LandmarkFrame {
    let mut p = to_points(&plank_front(false));
    set(&mut p, LEFT_WRIST, 0.33, 0.75);
    set(&mut p, RIGHT_WRIST, 0.67, 0.75);
    LandmarkFrame::new(p)
}

/// Hands a shoulder-width apart but both shifted to the right of their
/// shoulders
pub fn plank_front_shifted_hands() -> LandmarkFrame {
    let mut p = to_points(&plank_front(false));
    set(&mut p, LEFT_WRIST, 0.50, 0.75);
    set(&mut p, RIGHT_WRIST, 0.70, 0.75);
    LandmarkFrame::new(p)
}

pub fn plank_front_narrow_hands() -> LandmarkFrame {
    let mut p = to_points(&plank_front(false));
    set(&mut p, LEFT_WRIST, 0.46, 0.75);
    set(&mut p, RIGHT_WRIST, 0.54, 0.75);
    LandmarkFrame::new(p)
}

/// Three-quarter-view plank base, head at the left of the image.
/// Inter-shoulder distance 0.1; hips set by the caller.
fn plank_side(hip_y: f32) -> LandmarkFrame {
    let mut p = base();
    set(&mut p, LEFT_SHOULDER, 0.30, 0.50);
    set(&mut p, RIGHT_SHOULDER, 0.40, 0.50);
    set(&mut p, LEFT_ELBOW, 0.30, 0.61);
    set(&mut p, RIGHT_ELBOW, 0.40, 0.61);
    set(&mut p, LEFT_WRIST, 0.30, 0.72);
    set(&mut p, RIGHT_WRIST, 0.40, 0.72);
    set(&mut p, LEFT_HIP, 0.52, hip_y);
    set(&mut p, RIGHT_HIP, 0.58, hip_y);
    set(&mut p, LEFT_ANKLE, 0.78, 0.54);
    set(&mut p, RIGHT_ANKLE, 0.82, 0.54);
    LandmarkFrame::new(p)
}

/// Plank with hips dropped below the shoulder→ankle line
pub fn plank_side_sag() -> LandmarkFrame {
    plank_side(0.538)
}

/// Plank with hips lifted above the shoulder→ankle line
pub fn plank_side_pike() -> LandmarkFrame {
    plank_side(0.502)
}

/// Push both wrists out of plane; x/y untouched
pub fn with_wrist_z(frame: LandmarkFrame, z: f32) -> LandmarkFrame {
    let mut p = to_points(&frame);
    p[LEFT_WRIST].z = z;
    p[RIGHT_WRIST].z = z;
    LandmarkFrame::new(p)
}
