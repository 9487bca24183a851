use std::sync::Arc;

use crate::animation::{
    clip::{AnimationClip, TrackData},
    tracks::KeyframeCursor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// Playback state of one clip inside a mixer.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    /// Hold the last pose once a `LoopMode::Once` action ends instead of
    /// disabling the action.
    pub clamp_when_finished: bool,
    pub paused: bool,
    pub enabled: bool,

    finished: bool,
    pub(crate) track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            clamp_when_finished: false,
            // Actions are dormant until `play`
            paused: true,
            enabled: false,
            finished: false,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Starts (or restarts) playback from the beginning.
    pub fn play(&mut self) -> &mut Self {
        self.time = 0.0;
        self.enabled = true;
        self.paused = false;
        self.finished = false;
        for cursor in &mut self.track_cursors {
            cursor.last_index = 0;
        }
        self
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.paused = true;
        self.time = 0.0;
    }

    pub fn set_loop(&mut self, mode: LoopMode) -> &mut Self {
        self.loop_mode = mode;
        self
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused
    }

    /// `true` once a `LoopMode::Once` action has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances time. Returns `true` on the update that finishes the action.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return false;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                let ended = self.time >= duration || self.time < 0.0;
                if ended {
                    self.time = self.time.clamp(0.0, duration);
                    self.finished = true;
                    self.paused = true;
                    if !self.clamp_when_finished {
                        self.enabled = false;
                    }
                    return true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    self.time = duration + (self.time % duration);
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
        false
    }

    /// Samples the specified track at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;

        Some(match &track.data {
            TrackData::Vector3(t) => TrackValue::Vector3(t.sample_with_cursor(self.time, cursor)?),
            TrackData::Quaternion(t) => {
                TrackValue::Quaternion(t.sample_with_cursor(self.time, cursor)?)
            }
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TrackValue {
    Vector3(glam::Vec3),
    Quaternion(glam::Quat),
}
