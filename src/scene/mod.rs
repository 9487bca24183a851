//! Scene graph
//!
//! Manages what gets drawn and from where:
//! - Node: a named transform with optional components
//! - Transform: position, rotation, scale
//! - Scene: node container and component pools
//! - Camera / Light: components with config factories
//! - SceneBuilder: room assembly from an item catalog
//! - Framing: auto-framing camera solver
//! - CameraController: animated camera moves

pub mod builder;
pub mod camera;
pub mod camera_controller;
pub mod framing;
pub mod light;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod transform;

pub use builder::SceneBuilder;
pub use camera::{Camera, CameraType, Frustum};
pub use camera_controller::{CAMERA_MOVE_STEPS, CameraController};
pub use framing::{FramingResult, compute_framing_camera, frame_bounding_box};
pub use light::{Light, LightKind, LightType, ShadowCamera, ShadowConfig};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
}
