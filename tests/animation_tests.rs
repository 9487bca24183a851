//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step interpolation and clamping
//! - KeyframeCursor forward playback and large jumps
//! - AnimationAction loop modes (Once, Loop, PingPong) and clamping
//! - AnimationMixer writing sampled values into its scene node

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Quat, Vec3};

use tableau::animation::action::{AnimationAction, LoopMode};
use tableau::animation::clip::{AnimationClip, Track};
use tableau::animation::mixer::{AnimationMixer, MixerStatus};
use tableau::animation::tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
use tableau::errors::TableauError;
use tableau::scene::{Node, Scene};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn slide_clip(duration: f32) -> Arc<AnimationClip> {
    let track = KeyframeTrack::new(
        vec![0.0, duration],
        vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
        InterpolationMode::Linear,
    );
    Arc::new(AnimationClip::new("slide", vec![Track::position(track)]))
}

// ============================================================================
// KeyframeTrack
// ============================================================================

#[test]
fn track_linear_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 10.0],
        InterpolationMode::Linear,
    );
    let val = track.sample(0.5).unwrap();
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_clamps_outside_range() {
    let track = KeyframeTrack::new(
        vec![1.0, 2.0],
        vec![3.0_f32, 6.0],
        InterpolationMode::Linear,
    );
    assert!(approx(track.sample(0.0).unwrap(), 3.0));
    assert!(approx(track.sample(5.0).unwrap(), 6.0));
}

#[test]
fn track_step_holds_previous_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![1.0_f32, 2.0, 3.0],
        InterpolationMode::Step,
    );
    assert!(approx(track.sample(0.99).unwrap(), 1.0));
    assert!(approx(track.sample(1.5).unwrap(), 2.0));
}

#[test]
fn track_quat_uses_slerp() {
    let end = Quat::from_rotation_y(FRAC_PI_2);
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Quat::IDENTITY, end],
        InterpolationMode::Linear,
    );
    let mid = track.sample(0.5).unwrap();
    let expected = Quat::from_rotation_y(FRAC_PI_2 / 2.0);
    assert!(mid.dot(expected).abs() > 1.0 - 1e-5);
    assert!(approx(mid.length(), 1.0));
}

#[test]
fn cursor_matches_binary_search() {
    let times: Vec<f32> = (0..50).map(|i| i as f32 * 0.1).collect();
    let values: Vec<f32> = (0..50).map(|i| (i * i) as f32).collect();
    let track = KeyframeTrack::new(times, values, InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    for t in [0.05, 0.12, 0.31, 0.33, 2.71, 0.4, 4.9, 0.0] {
        let with_cursor = track.sample_with_cursor(t, &mut cursor).unwrap();
        let plain = track.sample(t).unwrap();
        assert!(approx(with_cursor, plain), "t={t}: {with_cursor} vs {plain}");
    }
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_is_longest_track() {
    let short = KeyframeTrack::new(vec![0.0, 1.0], vec![Vec3::ZERO, Vec3::ONE], InterpolationMode::Linear);
    let long = KeyframeTrack::new(
        vec![0.0, 2.5],
        vec![Quat::IDENTITY, Quat::from_rotation_x(1.0)],
        InterpolationMode::Linear,
    );
    let clip = AnimationClip::new("c", vec![Track::position(short), Track::rotation(long)]);
    assert!(approx(clip.duration, 2.5));
}

#[test]
fn optimized_clip_keeps_duration() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![Vec3::ONE, Vec3::ONE, Vec3::ONE, Vec3::ONE],
        InterpolationMode::Linear,
    );
    let clip = AnimationClip::new("flat", vec![Track::position(track)]).optimized();
    assert!(approx(clip.duration, 3.0));
    assert_eq!(clip.tracks[0].data.keyframe_count(), 2);
}

// ============================================================================
// AnimationAction
// ============================================================================

#[test]
fn action_is_dormant_until_played() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    assert!(!action.is_running());
    assert!(!action.update(0.5));
    assert_eq!(action.time, 0.0);

    action.play();
    assert!(action.is_running());
}

#[test]
fn action_once_finishes_and_clamps_time() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    action.set_loop(LoopMode::Once).play();

    assert!(!action.update(0.6));
    assert!(action.update(0.6));
    assert!(action.is_finished());
    assert!(!action.is_running());
    assert!(approx(action.time, 1.0));
    // Without clamping the action releases its target
    assert!(!action.enabled);
}

#[test]
fn action_once_with_clamp_stays_enabled() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    action.clamp_when_finished = true;
    action.set_loop(LoopMode::Once).play();

    assert!(action.update(2.0));
    assert!(action.enabled);
    assert!(!action.update(0.1), "finished event fires once");
}

#[test]
fn action_loop_wraps() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    action.set_loop(LoopMode::Loop).play();
    action.update(1.25);
    assert!(approx(action.time, 0.25));
    assert!(action.is_running());
}

#[test]
fn action_ping_pong_reflects() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    action.set_loop(LoopMode::PingPong).play();
    action.update(1.25);
    assert!(approx(action.time, 0.75));
}

#[test]
fn action_stop_rewinds() {
    let mut action = AnimationAction::new(slide_clip(1.0));
    action.play();
    action.update(0.3);
    action.stop();
    assert!(!action.is_running());
    assert_eq!(action.time, 0.0);
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn mixer_ids_are_unique() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    let a = AnimationMixer::new(node);
    let b = AnimationMixer::new(node);
    assert_ne!(a.id(), b.id());
}

#[test]
fn mixer_clip_action_is_reused() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    let clip = slide_clip(1.0);

    let mut mixer = AnimationMixer::new(node);
    mixer.clip_action(&clip).play();
    mixer.clip_action(&clip);
    assert_eq!(mixer.actions().len(), 1);

    mixer.clip_action(&slide_clip(1.0));
    assert_eq!(mixer.actions().len(), 2);
}

#[test]
fn mixer_writes_into_node_transform() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    let clip = slide_clip(2.0);

    let mut mixer = AnimationMixer::new(node);
    mixer.clip_action(&clip).set_loop(LoopMode::Once).play();

    let status = mixer.update(0.5, &mut scene).unwrap();
    assert_eq!(status, MixerStatus::Running);
    let pos = scene.get_node(node).unwrap().transform.position;
    assert!(approx_vec3(pos, Vec3::new(2.5, 0.0, 0.0)), "got {pos}");
}

#[test]
fn mixer_reports_finished_with_final_pose() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    let clip = slide_clip(1.0);

    let mut mixer = AnimationMixer::new(node);
    let action = mixer.clip_action(&clip);
    action.clamp_when_finished = true;
    action.set_loop(LoopMode::Once).play();

    assert_eq!(mixer.update(0.7, &mut scene).unwrap(), MixerStatus::Running);
    assert_eq!(mixer.update(0.7, &mut scene).unwrap(), MixerStatus::Finished);
    let pos = scene.get_node(node).unwrap().transform.position;
    assert!(approx_vec3(pos, Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn mixer_stop_all_action_finishes() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    let mut mixer = AnimationMixer::new(node);
    mixer.clip_action(&slide_clip(1.0)).play();
    assert!(mixer.is_active());

    mixer.stop_all_action();
    assert!(!mixer.is_active());
    assert_eq!(mixer.update(0.1, &mut scene).unwrap(), MixerStatus::Finished);
}

#[test]
fn mixer_without_target_errors() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("target"));
    scene.remove_node(node);

    let mut mixer = AnimationMixer::new(node);
    mixer.clip_action(&slide_clip(1.0)).play();
    assert!(matches!(
        mixer.update(0.1, &mut scene),
        Err(TableauError::AnimationTargetMissing)
    ));
}
