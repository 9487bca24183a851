//! Render Loop Settings
//!
//! ```rust,ignore
//! use tableau::renderer::RenderLoopSettings;
//!
//! // Let a single frame advance animations by at most 100 ms
//! let settings = RenderLoopSettings {
//!     max_delta: 0.1,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`RenderLoop`](super::RenderLoop).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderLoopSettings {
    /// Upper bound, in seconds, on the time a single frame advances the
    /// mixers by. A frame arriving after the host was suspended (hidden tab,
    /// debugger break) would otherwise jump an animation to its end.
    pub max_delta: f32,
}

impl Default for RenderLoopSettings {
    fn default() -> Self {
        Self { max_delta: 0.25 }
    }
}
