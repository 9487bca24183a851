//! Camera controller
//!
//! Owns the scene's main camera node and moves it along eased paths.
//!
//! A move samples the path from the camera's live pose to the requested
//! pose into a clip, preempts whatever move is still in flight and hands a
//! fresh mixer to the [`RenderLoop`], which plays it out and goes idle when
//! it ends.

use std::sync::Arc;

use glam::Vec3;

use crate::animation::{
    AnimationClip, AnimationMixer, EulerAngles, LoopMode, MixerId, MotionRequest, build_motion,
};
use crate::config::CameraConfig;
use crate::errors::{Result, TableauError};
use crate::renderer::{FrameScheduler, RenderLoop};
use crate::scene::camera::Camera;
use crate::scene::framing::compute_framing_camera;
use crate::scene::transform::Transform;
use crate::scene::{NodeHandle, Scene};

/// Sample count of a camera move.
pub const CAMERA_MOVE_STEPS: u32 = 1000;

/// Duration of the preset moves, in seconds.
pub const DEFAULT_MOVE_DURATION: f32 = 1.0;

const CENTER_CAMERA_HEIGHT: f32 = 10.0;
const CENTER_SCENE_SIZE: Vec3 = Vec3::new(2.0, 20.0, 3.0);

pub struct CameraController {
    node: NodeHandle,
    target_position: Vec3,
    moves: usize,
    current_clip: Option<Arc<AnimationClip>>,
    current_mixer: Option<MixerId>,
}

impl CameraController {
    /// Builds the camera described by `config`, places it and makes it the
    /// scene's active camera, looking at the origin.
    pub fn new(config: &CameraConfig, scene: &mut Scene) -> Result<Self> {
        let camera = Camera::from_config(config)?;

        let mut transform = Transform::new();
        transform.set_rotation_euler(config.rotation.x, config.rotation.y, config.rotation.z);
        transform.position = config.position.into();
        transform.look_at(Vec3::ZERO, Vec3::Y);

        let target_position = transform.position;
        let node = scene.add_camera(camera, transform);
        scene.active_camera = Some(node);

        Ok(Self {
            node,
            target_position,
            moves: 0,
            current_clip: None,
            current_mixer: None,
        })
    }

    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    /// Where the last requested move ends.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Clip of the last requested move.
    #[must_use]
    pub fn current_clip(&self) -> Option<&Arc<AnimationClip>> {
        self.current_clip.as_ref()
    }

    /// Mixer of the last requested move. It may already have finished.
    #[must_use]
    pub fn current_mixer(&self) -> Option<MixerId> {
        self.current_mixer
    }

    /// Animates the camera to `new_position`, ending up looking at `look_at`.
    ///
    /// Any move still in flight is stopped first. Fails without touching
    /// the render loop if `duration` is not positive.
    pub fn request_camera_move<S: FrameScheduler>(
        &mut self,
        look_at: Vec3,
        new_position: Vec3,
        duration: f32,
        render_loop: &mut RenderLoop<S>,
        scene: &mut Scene,
    ) -> Result<MixerId> {
        let node = scene
            .get_node(self.node)
            .ok_or(TableauError::AnimationTargetMissing)?;
        let start_position = node.transform.position;
        let start_rotation = node.transform.rotation;

        // Orientation the camera would have at the destination
        let mut scratch = node.transform.clone();
        scratch.position = new_position;
        scratch.look_at(look_at, Vec3::Y);

        let request = MotionRequest::new(
            start_position,
            new_position,
            EulerAngles::from_quat(scratch.rotation),
            duration,
        )
        .with_start_orientation(EulerAngles::from_quat(start_rotation))
        .with_steps(CAMERA_MOVE_STEPS);
        let tracks = build_motion(&request, start_rotation)?;

        let name = format!("CameraAnimation_{}", self.moves);
        self.moves += 1;
        let clip = Arc::new(tracks.into_clip(name).optimized());

        render_loop.stop_all();

        let mut mixer = AnimationMixer::new(self.node);
        let action = mixer.clip_action(&clip);
        action.clamp_when_finished = true;
        action.set_loop(LoopMode::Once).play();
        let id = mixer.id();
        render_loop.add_mixer(mixer);

        log::info!(
            "Camera move '{}': {start_position} -> {new_position} over {duration}s",
            clip.name
        );

        self.target_position = new_position;
        self.current_clip = Some(clip);
        self.current_mixer = Some(id);
        Ok(id)
    }

    /// Frames a 2 × 3 × 20 scene from a height of 10 on the given canvas.
    pub fn move_to_center<S: FrameScheduler>(
        &mut self,
        canvas_width: f32,
        canvas_height: f32,
        render_loop: &mut RenderLoop<S>,
        scene: &mut Scene,
    ) -> Result<MixerId> {
        let framing = compute_framing_camera(
            canvas_width,
            canvas_height,
            CENTER_CAMERA_HEIGHT,
            CENTER_SCENE_SIZE.x,
            CENTER_SCENE_SIZE.z,
            CENTER_SCENE_SIZE.y,
        );
        self.request_camera_move(
            framing.target,
            framing.position,
            DEFAULT_MOVE_DURATION,
            render_loop,
            scene,
        )
    }

    pub fn move_left<S: FrameScheduler>(
        &mut self,
        render_loop: &mut RenderLoop<S>,
        scene: &mut Scene,
    ) -> Result<MixerId> {
        self.request_camera_move(
            Vec3::new(4.0, 4.0, 15.0),
            Vec3::new(30.0, 10.0, 20.0),
            DEFAULT_MOVE_DURATION,
            render_loop,
            scene,
        )
    }

    pub fn move_right<S: FrameScheduler>(
        &mut self,
        render_loop: &mut RenderLoop<S>,
        scene: &mut Scene,
    ) -> Result<MixerId> {
        self.request_camera_move(
            Vec3::new(17.0, 4.0, 4.0),
            Vec3::new(20.0, 10.0, 30.0),
            DEFAULT_MOVE_DURATION,
            render_loop,
            scene,
        )
    }

    /// Snaps the camera to `config.position`.
    pub fn update_position(&self, config: &CameraConfig, scene: &mut Scene) -> Result<()> {
        let node = scene
            .get_node_mut(self.node)
            .ok_or(TableauError::AnimationTargetMissing)?;
        node.transform.position = config.position.into();
        Ok(())
    }

    /// Snaps the camera to `config.rotation` (XYZ Euler, radians).
    pub fn update_rotation(&self, config: &CameraConfig, scene: &mut Scene) -> Result<()> {
        let node = scene
            .get_node_mut(self.node)
            .ok_or(TableauError::AnimationTargetMissing)?;
        let r = config.rotation;
        node.transform.set_rotation_euler(r.x, r.y, r.z);
        Ok(())
    }

    /// Adapts the projection to a resized canvas. Follow with
    /// [`RenderLoop::force_render`] to repaint.
    pub fn set_aspect(&self, width: f32, height: f32, scene: &mut Scene) -> Result<()> {
        let camera = scene
            .camera_of_mut(self.node)
            .ok_or(TableauError::AnimationTargetMissing)?;
        camera.set_aspect(width, height);
        Ok(())
    }
}
