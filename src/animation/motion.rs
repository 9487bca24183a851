//! Keyframe motion interpolation.
//!
//! Turns a start pose and an end pose into densely sampled, eased keyframes
//! for one position channel and one orientation channel.
//!
//! Both channels share a single easing curve ([`cubic_ease_in_out`]) so that
//! translation and rotation arrive together. Orientation is interpolated with
//! slerp between quaternions; Euler angles are only used as the input format.
//!
//! ```rust,ignore
//! use tableau::animation::motion::{build_motion, EulerAngles, MotionRequest};
//!
//! let request = MotionRequest::new(start, end, EulerAngles::ZERO, 1.0).with_steps(1000);
//! let tracks = build_motion(&request, camera_rotation)?;
//! let clip = tracks.into_clip("CameraAnimation_0");
//! ```

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::clip::{AnimationClip, Track};
use crate::animation::easing::cubic_ease_in_out;
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::errors::{Result, TableauError};

/// Sample resolution used when none is given.
pub const DEFAULT_MOTION_STEPS: u32 = 100;

/// Orientation as XYZ-order Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerAngles {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        Self { x, y, z }
    }

    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }
}

/// Inputs for [`build_motion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRequest {
    pub start_position: Vec3,
    pub end_position: Vec3,
    /// `None` starts from the animated object's live orientation.
    pub start_orientation: Option<EulerAngles>,
    pub end_orientation: EulerAngles,
    /// Seconds. Must be positive.
    pub duration: f32,
    pub steps: u32,
}

impl MotionRequest {
    #[must_use]
    pub fn new(
        start_position: Vec3,
        end_position: Vec3,
        end_orientation: EulerAngles,
        duration: f32,
    ) -> Self {
        Self {
            start_position,
            end_position,
            start_orientation: None,
            end_orientation,
            duration,
            steps: DEFAULT_MOTION_STEPS,
        }
    }

    #[must_use]
    pub fn with_start_orientation(mut self, orientation: EulerAngles) -> Self {
        self.start_orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Raw keyframe data: parallel timestamps, flattened xyz positions and
/// flattened xyzw quaternions.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTracks {
    pub times: Vec<f32>,
    pub positions: Vec<f32>,
    pub orientations: Vec<f32>,
}

impl MotionTracks {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<Vec3> {
        let chunk = self.positions.get(index * 3..index * 3 + 3)?;
        Some(Vec3::from_slice(chunk))
    }

    #[must_use]
    pub fn orientation_at(&self, index: usize) -> Option<Quat> {
        let chunk = self.orientations.get(index * 4..index * 4 + 4)?;
        Some(Quat::from_slice(chunk))
    }

    #[must_use]
    pub fn position_track(&self) -> KeyframeTrack<Vec3> {
        let values = self
            .positions
            .chunks_exact(3)
            .map(Vec3::from_slice)
            .collect();
        KeyframeTrack::new(self.times.clone(), values, InterpolationMode::Linear)
    }

    #[must_use]
    pub fn orientation_track(&self) -> KeyframeTrack<Quat> {
        let values = self
            .orientations
            .chunks_exact(4)
            .map(Quat::from_slice)
            .collect();
        KeyframeTrack::new(self.times.clone(), values, InterpolationMode::Linear)
    }

    /// Bundles both channels into a clip.
    #[must_use]
    pub fn into_clip(self, name: impl Into<String>) -> AnimationClip {
        let tracks = vec![
            Track::position(self.position_track()),
            Track::rotation(self.orientation_track()),
        ];
        AnimationClip::new(name, tracks)
    }
}

/// Samples an eased motion between two poses.
///
/// Produces `steps + 1` samples (at least two) at evenly spaced fractions of
/// `duration`, endpoints included. `live_orientation` is used when the request
/// has no explicit start orientation.
pub fn build_motion(request: &MotionRequest, live_orientation: Quat) -> Result<MotionTracks> {
    let duration = request.duration;
    if !(duration.is_finite() && duration > 0.0) {
        return Err(TableauError::InvalidDuration(duration));
    }

    let steps = request.steps.max(1);

    let start_quat = request
        .start_orientation
        .map_or(live_orientation, EulerAngles::to_quat);
    let end_quat = request.end_orientation.to_quat();

    let sample_count = steps as usize + 1;
    let mut times = Vec::with_capacity(sample_count);
    let mut positions = Vec::with_capacity(sample_count * 3);
    let mut orientations = Vec::with_capacity(sample_count * 4);

    for i in 0..=steps {
        let fraction = i as f32 / steps as f32;
        // Last sample is pinned so the track ends exactly on `duration`
        let t = if i == steps { duration } else { fraction * duration };
        let eased = cubic_ease_in_out(fraction);

        let rotation = start_quat.slerp(end_quat, eased);
        let position = request.start_position.lerp(request.end_position, eased);

        times.push(t);
        orientations.extend_from_slice(&rotation.to_array());
        positions.extend_from_slice(&position.to_array());
    }

    Ok(MotionTracks {
        times,
        positions,
        orientations,
    })
}
