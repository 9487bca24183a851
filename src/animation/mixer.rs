use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::animation::action::{AnimationAction, TrackValue};
use crate::animation::clip::{AnimationClip, TargetPath};
use crate::errors::{Result, TableauError};
use crate::scene::{NodeHandle, Scene};

static NEXT_MIXER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a mixer. Used by the render loop to keep its
/// tracked set free of duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MixerId(u64);

impl MixerId {
    fn next() -> Self {
        Self(NEXT_MIXER_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Outcome of one [`AnimationMixer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerStatus {
    /// At least one action is still playing.
    Running,
    /// Every action has ended or was stopped; the mixer can be retired.
    Finished,
}

/// Plays clips on a single scene node.
///
/// A mixer is bound to its root node at construction and owns the actions
/// created through [`clip_action`](Self::clip_action). A clone keeps the
/// id, so the render loop treats it as the same mixer.
#[derive(Debug, Clone)]
pub struct AnimationMixer {
    id: MixerId,
    root: NodeHandle,
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(root: NodeHandle) -> Self {
        Self {
            id: MixerId::next(),
            root,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> MixerId {
        self.id
    }

    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    pub fn add_action(&mut self, action: AnimationAction) -> &mut AnimationAction {
        self.actions.push(action);
        let last = self.actions.len() - 1;
        &mut self.actions[last]
    }

    /// Returns the action playing `clip`, creating it on first request.
    pub fn clip_action(&mut self, clip: &Arc<AnimationClip>) -> &mut AnimationAction {
        match self.actions.iter().position(|a| Arc::ptr_eq(a.clip(), clip)) {
            Some(idx) => &mut self.actions[idx],
            None => self.add_action(AnimationAction::new(Arc::clone(clip))),
        }
    }

    /// Stops every action. The mixer reports `Finished` on its next update.
    pub fn stop_all_action(&mut self) {
        for action in &mut self.actions {
            action.stop();
        }
    }

    /// `true` while any action is playing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.actions.iter().any(AnimationAction::is_running)
    }

    /// Advances every action by `dt` seconds and writes the sampled values
    /// into the root node's transform.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) -> Result<MixerStatus> {
        let node = scene
            .get_node_mut(self.root)
            .ok_or(TableauError::AnimationTargetMissing)?;

        let mut finished_now = false;
        for action in &mut self.actions {
            finished_now |= action.update(dt);
        }

        for action in &mut self.actions {
            if !action.enabled || action.weight <= 0.0 {
                continue;
            }

            for track_index in 0..action.clip().tracks.len() {
                let target = action.clip().tracks[track_index].target;
                let Some(value) = action.sample_track(track_index) else {
                    continue;
                };

                match (target, value) {
                    (TargetPath::Position, TrackValue::Vector3(v)) => {
                        node.transform.position = v;
                    }
                    (TargetPath::Scale, TrackValue::Vector3(v)) => {
                        node.transform.scale = v;
                    }
                    (TargetPath::Rotation, TrackValue::Quaternion(q)) => {
                        node.transform.rotation = q;
                    }
                    _ => {
                        log::warn!(
                            "Mixer {:?}: track {} of '{}' does not match target {:?}",
                            self.id,
                            track_index,
                            action.clip().name,
                            target
                        );
                    }
                }
            }
            node.transform.mark_dirty();
        }

        if finished_now {
            log::debug!("Mixer {:?} finished", self.id);
        }

        if self.is_active() {
            Ok(MixerStatus::Running)
        } else {
            Ok(MixerStatus::Finished)
        }
    }
}
