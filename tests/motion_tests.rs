//! Motion Interpolator Tests
//!
//! Tests for:
//! - Cubic ease-in-out fixed points and symmetry
//! - Sample count, timestamps and endpoints of `build_motion`
//! - Quaternion slerp endpoints (up to sign) and live-orientation fallback
//! - Degenerate step counts and invalid durations

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{EulerRot, Quat, Vec3};

use tableau::animation::{
    DEFAULT_MOTION_STEPS, EulerAngles, MotionRequest, build_motion, cubic_ease_in_out,
};
use tableau::errors::TableauError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

/// Quaternions `q` and `-q` describe the same rotation.
fn same_rotation(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - 1e-5
}

fn request(steps: u32, duration: f32) -> MotionRequest {
    MotionRequest::new(
        Vec3::new(10.0, 3.0, 10.0),
        Vec3::new(-10.0, 3.0, 0.0),
        EulerAngles::new(0.0, FRAC_PI_2, 0.0),
        duration,
    )
    .with_start_orientation(EulerAngles::new(0.0, FRAC_PI_4, 0.0))
    .with_steps(steps)
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn ease_fixed_points() {
    assert!(approx(cubic_ease_in_out(0.0), 0.0));
    assert!(approx(cubic_ease_in_out(0.5), 0.5));
    assert!(approx(cubic_ease_in_out(1.0), 1.0));
}

#[test]
fn ease_is_point_symmetric() {
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let sum = cubic_ease_in_out(t) + cubic_ease_in_out(1.0 - t);
        assert!(approx(sum, 1.0), "ease({t}) + ease(1-{t}) = {sum}");
    }
}

#[test]
fn ease_piecewise_values() {
    // 4t³ below the midpoint
    assert!(approx(cubic_ease_in_out(0.25), 4.0 * 0.25_f32.powi(3)));
    // 1 - (-2t + 2)³ / 2 above it
    assert!(approx(cubic_ease_in_out(0.75), 1.0 - 0.5_f32.powi(3) / 2.0));
}

#[test]
fn ease_is_monotonic() {
    let mut prev = cubic_ease_in_out(0.0);
    for i in 1..=100 {
        let v = cubic_ease_in_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

// ============================================================================
// Timestamps
// ============================================================================

#[test]
fn timestamps_have_steps_plus_one_entries() {
    for steps in [1, 2, 7, 100, 1000] {
        let tracks = build_motion(&request(steps, 2.5), Quat::IDENTITY).unwrap();
        assert_eq!(tracks.sample_count(), steps as usize + 1);
        assert_eq!(tracks.positions.len(), (steps as usize + 1) * 3);
        assert_eq!(tracks.orientations.len(), (steps as usize + 1) * 4);
    }
}

#[test]
fn timestamps_strictly_increase_from_zero_to_duration() {
    let tracks = build_motion(&request(1000, 1.0), Quat::IDENTITY).unwrap();
    assert_eq!(tracks.times[0], 0.0);
    assert_eq!(*tracks.times.last().unwrap(), 1.0);
    assert!(tracks.times.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn timestamps_are_evenly_spaced() {
    let tracks = build_motion(&request(4, 2.0), Quat::IDENTITY).unwrap();
    assert_eq!(tracks.times, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn default_step_count() {
    let req = MotionRequest::new(Vec3::ZERO, Vec3::X, EulerAngles::ZERO, 1.0);
    assert_eq!(req.steps, DEFAULT_MOTION_STEPS);
    let tracks = build_motion(&req, Quat::IDENTITY).unwrap();
    assert_eq!(tracks.sample_count(), 101);
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn zero_steps_yields_start_and_end() {
    let tracks = build_motion(&request(0, 1.0), Quat::IDENTITY).unwrap();
    assert_eq!(tracks.sample_count(), 2);
    assert_eq!(tracks.times, vec![0.0, 1.0]);
    assert!(approx_vec3(tracks.position_at(0).unwrap(), Vec3::new(10.0, 3.0, 10.0)));
    assert!(approx_vec3(tracks.position_at(1).unwrap(), Vec3::new(-10.0, 3.0, 0.0)));
    assert!(tracks.positions.iter().all(|v| v.is_finite()));
}

#[test]
fn zero_duration_is_rejected() {
    let result = build_motion(&request(10, 0.0), Quat::IDENTITY);
    assert!(matches!(result, Err(TableauError::InvalidDuration(d)) if d == 0.0));
}

#[test]
fn negative_duration_is_rejected() {
    let result = build_motion(&request(10, -0.5), Quat::IDENTITY);
    assert!(matches!(result, Err(TableauError::InvalidDuration(_))));
}

// ============================================================================
// Channels
// ============================================================================

#[test]
fn orientation_endpoints_match_inputs() {
    let pairs = [
        (EulerAngles::ZERO, EulerAngles::new(0.0, PI, 0.0)),
        (
            EulerAngles::new(0.3, -1.2, 0.7),
            EulerAngles::new(-2.0, 0.4, 3.0),
        ),
        (
            EulerAngles::new(FRAC_PI_2, 0.0, 0.0),
            EulerAngles::new(0.0, 0.0, FRAC_PI_2),
        ),
    ];

    for (start, end) in pairs {
        let req = MotionRequest::new(Vec3::ZERO, Vec3::ONE, end, 1.0)
            .with_start_orientation(start)
            .with_steps(50);
        let tracks = build_motion(&req, Quat::IDENTITY).unwrap();

        let first = tracks.orientation_at(0).unwrap();
        let last = tracks.orientation_at(tracks.sample_count() - 1).unwrap();
        assert!(same_rotation(first, start.to_quat()));
        assert!(same_rotation(last, end.to_quat()));
    }
}

#[test]
fn orientations_stay_normalized() {
    let tracks = build_motion(&request(100, 1.0), Quat::IDENTITY).unwrap();
    let track = tracks.orientation_track();
    assert!(track.values.iter().all(|q| approx(q.length(), 1.0)));
}

#[test]
fn missing_start_orientation_uses_live_orientation() {
    let live = Quat::from_euler(EulerRot::XYZ, 0.2, 1.1, -0.4);
    let req = MotionRequest::new(Vec3::ZERO, Vec3::X, EulerAngles::ZERO, 1.0).with_steps(10);
    let tracks = build_motion(&req, live).unwrap();
    assert!(same_rotation(tracks.orientation_at(0).unwrap(), live));
    assert!(!same_rotation(tracks.orientation_at(0).unwrap(), Quat::IDENTITY));
}

#[test]
fn position_follows_eased_fraction() {
    let tracks = build_motion(&request(4, 1.0), Quat::IDENTITY).unwrap();
    let start = Vec3::new(10.0, 3.0, 10.0);
    let end = Vec3::new(-10.0, 3.0, 0.0);

    // Fractions 0, 0.5 and 1 are fixed points of the easing
    assert!(approx_vec3(tracks.position_at(0).unwrap(), start));
    assert!(approx_vec3(tracks.position_at(2).unwrap(), start.lerp(end, 0.5)));
    assert!(approx_vec3(tracks.position_at(4).unwrap(), end));

    // Quarter time has only covered ease(0.25) of the way
    let quarter = start.lerp(end, cubic_ease_in_out(0.25));
    assert!(approx_vec3(tracks.position_at(1).unwrap(), quarter));
}

#[test]
fn both_channels_share_the_easing() {
    let start_q = EulerAngles::new(0.0, FRAC_PI_4, 0.0).to_quat();
    let end_q = EulerAngles::new(0.0, FRAC_PI_2, 0.0).to_quat();
    let tracks = build_motion(&request(4, 1.0), Quat::IDENTITY).unwrap();

    let eased = cubic_ease_in_out(0.25);
    let expected = start_q.slerp(end_q, eased);
    assert!(same_rotation(tracks.orientation_at(1).unwrap(), expected));
}

#[test]
fn clip_from_motion_spans_duration() {
    let tracks = build_motion(&request(20, 3.0), Quat::IDENTITY).unwrap();
    let clip = tracks.into_clip("move");
    assert_eq!(clip.name, "move");
    assert!(approx(clip.duration, 3.0));
    assert_eq!(clip.tracks.len(), 2);
}
