use crate::animation::{AnimationMixer, MixerId, MixerStatus};
use crate::renderer::{FrameHandle, FrameScheduler, RenderLoopSettings, RenderSurface};
use crate::scene::Scene;
use crate::utils::time::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
}

/// What a delivered frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The handle was stale or cancelled; nothing happened.
    Ignored,
    /// Mixers were advanced by `delta` seconds, the scene was rendered and
    /// the next frame requested.
    Rendered { delta: f32, advanced: usize },
    /// No mixer was left to advance; the loop stopped requesting frames.
    Idle,
}

/// Animation-driven render loop.
///
/// Frames are requested only while at least one tracked mixer is playing.
/// Each frame advances every mixer exactly once, in registration order,
/// renders, and requests the next frame; a frame with nothing left to
/// advance puts the loop to sleep.
///
/// Mixers that finish are retired automatically. A mixer whose update fails
/// is logged and retired the same way, so one broken animation never stops
/// the others.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    settings: RenderLoopSettings,
    mixers: Vec<AnimationMixer>,
    clock: Clock,
    state: LoopState,
    pending: Option<FrameHandle>,
    last_delta: f32,
    frames_rendered: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::with_settings(scheduler, RenderLoopSettings::default())
    }

    #[must_use]
    pub fn with_settings(scheduler: S, settings: RenderLoopSettings) -> Self {
        let clock = Clock::new(scheduler.now());
        Self {
            scheduler,
            settings,
            mixers: Vec::new(),
            clock,
            state: LoopState::Idle,
            pending: None,
            last_delta: 0.0,
            frames_rendered: 0,
        }
    }

    // ========================================================================
    // Mixer tracking
    // ========================================================================

    /// Starts tracking `mixer`. Returns `false` (and drops the argument) if a
    /// mixer with the same id is already tracked.
    ///
    /// An idle loop is woken up: its clock restarts and a frame is requested.
    pub fn add_mixer(&mut self, mixer: AnimationMixer) -> bool {
        if self.contains(mixer.id()) {
            return false;
        }

        log::debug!("RenderLoop: tracking mixer {:?}", mixer.id());
        self.mixers.push(mixer);

        if self.state == LoopState::Idle {
            self.clock.start(self.scheduler.now());
            self.state = LoopState::Running;
            self.schedule_next();
            log::debug!("RenderLoop: started");
        }
        true
    }

    /// Stops tracking a mixer. The loop goes idle on its next frame if the
    /// set becomes empty.
    pub fn remove_mixer(&mut self, id: MixerId) -> Option<AnimationMixer> {
        let idx = self.mixers.iter().position(|m| m.id() == id)?;
        Some(self.mixers.remove(idx))
    }

    /// Stops every action of every tracked mixer, forgets them all and
    /// leaves the loop idle.
    pub fn stop_all(&mut self) {
        for mixer in &mut self.mixers {
            mixer.stop_all_action();
        }
        self.mixers.clear();
        self.stop_rendering();
    }

    /// Cancels the pending frame and goes idle. Tracked mixers are kept.
    pub fn stop_rendering(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state == LoopState::Running {
            log::debug!("RenderLoop: stopped");
        }
        self.state = LoopState::Idle;
    }

    #[must_use]
    pub fn contains(&self, id: MixerId) -> bool {
        self.mixers.iter().any(|m| m.id() == id)
    }

    #[must_use]
    pub fn mixer(&self, id: MixerId) -> Option<&AnimationMixer> {
        self.mixers.iter().find(|m| m.id() == id)
    }

    pub fn mixer_mut(&mut self, id: MixerId) -> Option<&mut AnimationMixer> {
        self.mixers.iter_mut().find(|m| m.id() == id)
    }

    #[must_use]
    pub fn mixer_count(&self) -> usize {
        self.mixers.len()
    }

    // ========================================================================
    // Frames
    // ========================================================================

    /// Renders once regardless of loop state.
    pub fn force_render(&mut self, scene: &mut Scene, surface: &mut impl RenderSurface) {
        scene.update_matrices();
        surface.render(scene);
        self.frames_rendered += 1;
    }

    /// Frame callback. `handle` must be the one the scheduler handed out;
    /// anything else (a frame cancelled in the meantime, a late callback
    /// after teardown) is ignored.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        scene: &mut Scene,
        surface: &mut impl RenderSurface,
    ) -> FrameOutcome {
        if self.state != LoopState::Running || self.pending != Some(handle) {
            return FrameOutcome::Ignored;
        }
        self.pending = None;

        let delta = self
            .clock
            .tick(self.scheduler.now())
            .min(self.settings.max_delta);
        self.last_delta = delta;

        let mut advanced = 0;
        self.mixers.retain_mut(|mixer| match mixer.update(delta, scene) {
            Ok(MixerStatus::Running) => {
                advanced += 1;
                true
            }
            Ok(MixerStatus::Finished) => {
                advanced += 1;
                log::debug!("RenderLoop: mixer {:?} finished", mixer.id());
                false
            }
            Err(e) => {
                log::warn!("RenderLoop: dropping mixer {:?}: {e}", mixer.id());
                false
            }
        });

        if advanced == 0 {
            self.state = LoopState::Idle;
            log::debug!("RenderLoop: idle");
            return FrameOutcome::Idle;
        }

        self.force_render(scene, surface);
        self.schedule_next();
        FrameOutcome::Rendered { delta, advanced }
    }

    fn schedule_next(&mut self) {
        self.pending = Some(self.scheduler.request_frame());
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The frame the loop is waiting for.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Delta of the last advanced frame, in seconds.
    #[must_use]
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn settings(&self) -> &RenderLoopSettings {
        &self.settings
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
