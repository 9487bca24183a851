use glam::{Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;

/// The transform property a track drives on its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Position, // Maps to transform.position
    Rotation, // Maps to transform.rotation
    Scale,    // Maps to transform.scale
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }

    #[must_use]
    pub fn keyframe_count(&self) -> usize {
        match self {
            TrackData::Vector3(track) => track.len(),
            TrackData::Quaternion(track) => track.len(),
        }
    }
}

/// One animated channel: which property it drives and its keyframes.
#[derive(Debug, Clone)]
pub struct Track {
    pub target: TargetPath,
    pub data: TrackData,
}

impl Track {
    #[must_use]
    pub fn position(track: KeyframeTrack<Vec3>) -> Self {
        Self {
            target: TargetPath::Position,
            data: TrackData::Vector3(track),
        }
    }

    #[must_use]
    pub fn rotation(track: KeyframeTrack<Quat>) -> Self {
        Self {
            target: TargetPath::Rotation,
            data: TrackData::Quaternion(track),
        }
    }
}

/// A named bundle of tracks sharing one duration.
///
/// Clips are immutable once built and shared through `Arc` by the actions
/// that play them.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip whose duration is the latest track end time.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Removes redundant keyframes from every track. Duration is unchanged.
    #[must_use]
    pub fn optimized(mut self) -> Self {
        for track in &mut self.tracks {
            match &mut track.data {
                TrackData::Vector3(t) => t.optimize(),
                TrackData::Quaternion(t) => t.optimize(),
            }
        }
        self
    }
}
