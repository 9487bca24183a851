//! Animation
//!
//! Keyframe tracks, clips, actions and mixers, plus the motion interpolator
//! that turns two camera poses into an eased clip.
//!
//! The pieces fit together as:
//!
//! - [`motion::build_motion`] samples a start/end pose into raw tracks
//! - [`AnimationClip`] bundles the position and rotation tracks
//! - [`AnimationAction`] holds the playback time of one clip
//! - [`AnimationMixer`] advances its actions and writes the sampled values
//!   into its bound scene node
//!
//! Mixers are driven once per frame by
//! [`RenderLoop`](crate::renderer::RenderLoop).

pub mod action;
pub mod clip;
pub mod easing;
pub mod mixer;
pub mod motion;
pub mod tracks;
pub mod values;

pub use action::{AnimationAction, LoopMode, TrackValue};
pub use clip::{AnimationClip, TargetPath, Track, TrackData};
pub use easing::cubic_ease_in_out;
pub use mixer::{AnimationMixer, MixerId, MixerStatus};
pub use motion::{DEFAULT_MOTION_STEPS, EulerAngles, MotionRequest, MotionTracks, build_motion};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
