#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod config;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{
    AnimationAction, AnimationClip, AnimationMixer, EulerAngles, LoopMode, MixerId, MotionRequest,
    MotionTracks, build_motion, cubic_ease_in_out,
};
pub use config::{CameraConfig, ItemCatalog, LightConfig, ObjectConfig, SceneConfig};
pub use errors::{Result, TableauError};
pub use renderer::{FrameHandle, FrameScheduler, ManualScheduler, RenderLoop, RenderSurface};
pub use resources::primitives::*;
pub use resources::{BoundingBox, Geometry, Material, Mesh, Texture};
pub use scene::{
    Camera, CameraController, FramingResult, Light, Node, NodeHandle, Scene, SceneBuilder,
    Transform, compute_framing_camera,
};
