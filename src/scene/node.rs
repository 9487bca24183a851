use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey};

/// A scene node: a named transform with optional components.
///
/// Component data (mesh, light, camera) lives in the scene's pools; the node
/// only stores keys into them.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,

    pub(crate) mesh: Option<MeshKey>,
    pub(crate) light: Option<LightKey>,
    pub(crate) camera: Option<CameraKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            visible: true,
            mesh: None,
            light: None,
            camera: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    #[must_use]
    pub fn mesh(&self) -> Option<MeshKey> {
        self.mesh
    }

    #[inline]
    #[must_use]
    pub fn light(&self) -> Option<LightKey> {
        self.light
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> Option<CameraKey> {
        self.camera
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
