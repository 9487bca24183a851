//! Render loop
//!
//! The engine does not own a GPU backend. Hosts plug in two seams:
//!
//! - [`FrameScheduler`]: requests and cancels display-refresh callbacks and
//!   reports the time (`requestAnimationFrame` / `cancelAnimationFrame` /
//!   `performance.now` in a browser, the event loop on native)
//! - [`RenderSurface`]: draws the scene once
//!
//! [`RenderLoop`] keeps frames coming only while an animation mixer is
//! playing and goes idle as soon as none is left.

pub mod render_loop;
pub mod scheduler;
pub mod settings;

pub use render_loop::{FrameOutcome, RenderLoop};
pub use scheduler::ManualScheduler;
pub use settings::RenderLoopSettings;

use crate::scene::Scene;
use crate::utils::time::Instant;

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Source of per-frame callbacks.
///
/// After `request_frame` the host calls
/// [`RenderLoop::on_frame`] with the returned handle on the next display
/// refresh. A cancelled handle must not be delivered, but the loop ignores
/// it if it is.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);

    fn now(&self) -> Instant;
}

/// Something that can draw a scene right now.
pub trait RenderSurface {
    fn render(&mut self, scene: &Scene);
}

impl<F> RenderSurface for F
where
    F: FnMut(&Scene),
{
    fn render(&mut self, scene: &Scene) {
        self(scene);
    }
}
