use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;
use slotmap::SlotMap;

use crate::config::{LightConfig, ObjectConfig, Vec3Config};
use crate::errors::{Result, TableauError};
use crate::resources::geometry::BoundingBox;
use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph container.
///
/// A flat list of nodes, in insertion order, with the mesh, light and camera
/// pools their components live in. The scene owns everything added to it.
pub struct Scene {
    pub id: u32,

    nodes: SlotMap<NodeHandle, Node>,
    order: Vec<NodeHandle>,

    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    /// Clear colour (sRGB); `None` leaves the canvas transparent.
    pub background: Option<Vec3>,
    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            background: None,
            active_camera: None,
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.order.push(handle);
        handle
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Nodes in insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.order
            .iter()
            .filter_map(move |&h| self.nodes.get(h).map(|n| (h, n)))
    }

    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.iter_nodes()
            .find_map(|(h, n)| (n.name == name).then_some(h))
    }

    /// Removes a node and the components it owns.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        let node = self.nodes.remove(handle)?;
        self.order.retain(|&h| h != handle);

        if let Some(key) = node.mesh {
            self.meshes.remove(key);
        }
        if let Some(key) = node.light {
            self.lights.remove(key);
        }
        if let Some(key) = node.camera {
            self.cameras.remove(key);
        }
        if self.active_camera == Some(handle) {
            self.active_camera = None;
        }
        Some(node)
    }

    /// Removes every node that does not carry a camera.
    pub fn clear_content(&mut self) {
        let doomed: Vec<NodeHandle> = self
            .iter_nodes()
            .filter(|(_, n)| n.camera.is_none())
            .map(|(h, _)| h)
            .collect();
        for handle in doomed {
            self.remove_node(handle);
        }
    }

    /// Removes every light node. Returns how many were removed.
    pub fn remove_lights(&mut self) -> usize {
        let doomed: Vec<NodeHandle> = self
            .iter_nodes()
            .filter(|(_, n)| n.light.is_some())
            .map(|(h, _)| h)
            .collect();
        let count = doomed.len();
        for handle in doomed {
            self.remove_node(handle);
        }
        count
    }

    // ========================================================================
    // Components
    // ========================================================================

    pub fn add_mesh(&mut self, mesh: Mesh, transform: Transform) -> NodeHandle {
        let mut node = Node::new(mesh.name.clone()).with_transform(transform);
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_node(node)
    }

    pub fn add_light(&mut self, light: Light, transform: Transform) -> NodeHandle {
        let mut node = Node::new("Light").with_transform(transform);
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Adds a camera node. The first camera added becomes the active one.
    pub fn add_camera(&mut self, camera: Camera, transform: Transform) -> NodeHandle {
        let mut node = Node::new(camera.name.to_string()).with_transform(transform);
        node.camera = Some(self.cameras.insert(camera));
        let handle = self.add_node(node);
        if self.active_camera.is_none() {
            self.active_camera = Some(handle);
        }
        handle
    }

    /// Builds a mesh from config and places it.
    pub fn add_object(&mut self, config: &ObjectConfig) -> Result<NodeHandle> {
        let mesh = Mesh::from_config(config)?;
        let transform = placed_transform(config.position, config.rotation);
        Ok(self.add_mesh(mesh, transform))
    }

    /// Rebuilds a placed object's mesh from `config` and re-applies the
    /// config's position and rotation. Scale is kept.
    ///
    /// The node is left untouched when the config fails to build.
    pub fn update_object(&mut self, handle: NodeHandle, config: &ObjectConfig) -> Result<()> {
        if !self.nodes.contains_key(handle) {
            return Err(TableauError::AnimationTargetMissing);
        }
        let mesh = Mesh::from_config(config)?;

        let previous = self.nodes[handle].mesh;
        match previous.and_then(|key| self.meshes.get_mut(key)) {
            Some(slot) => *slot = mesh,
            None => {
                let key = self.meshes.insert(mesh);
                self.nodes[handle].mesh = Some(key);
            }
        }

        let node = &mut self.nodes[handle];
        apply_placement(&mut node.transform, config.position, config.rotation);
        log::debug!("Scene {}: updated object '{}'", self.id, node.name);
        Ok(())
    }

    /// Builds a light from config and places it.
    pub fn add_light_from_config(&mut self, config: &LightConfig) -> Result<NodeHandle> {
        let light = Light::from_config(config)?;
        let transform = placed_transform(config.position, config.rotation);
        Ok(self.add_light(light, transform))
    }

    #[must_use]
    pub fn mesh_of(&self, handle: NodeHandle) -> Option<&Mesh> {
        self.nodes.get(handle)?.mesh.and_then(|k| self.meshes.get(k))
    }

    #[must_use]
    pub fn light_of(&self, handle: NodeHandle) -> Option<&Light> {
        self.nodes.get(handle)?.light.and_then(|k| self.lights.get(k))
    }

    #[must_use]
    pub fn camera_of(&self, handle: NodeHandle) -> Option<&Camera> {
        self.nodes.get(handle)?.camera.and_then(|k| self.cameras.get(k))
    }

    pub fn camera_of_mut(&mut self, handle: NodeHandle) -> Option<&mut Camera> {
        let key = self.nodes.get(handle)?.camera?;
        self.cameras.get_mut(key)
    }

    /// Lights with the transform of the node carrying them.
    pub fn iter_lights(&self) -> impl Iterator<Item = (&Light, &Transform)> {
        self.iter_nodes().filter_map(move |(_, n)| {
            let light = self.lights.get(n.light?)?;
            Some((light, &n.transform))
        })
    }

    /// Meshes with the transform of the node carrying them.
    pub fn iter_meshes(&self) -> impl Iterator<Item = (&Mesh, &Transform)> {
        self.iter_nodes().filter_map(move |(_, n)| {
            let mesh = self.meshes.get(n.mesh?)?;
            Some((mesh, &n.transform))
        })
    }

    // ========================================================================
    // Spatial queries
    // ========================================================================

    /// Refreshes every node's cached world matrix.
    pub fn update_matrices(&mut self) {
        for node in self.nodes.values_mut() {
            node.transform.update_matrix();
        }
    }

    /// World-space bounds of all visible meshes, or `None` without meshes.
    #[must_use]
    pub fn world_bounding_box(&self) -> Option<BoundingBox> {
        let bounds = self
            .iter_nodes()
            .filter(|(_, n)| n.visible)
            .filter_map(|(_, n)| {
                let mesh = self.meshes.get(n.mesh?)?;
                Some(mesh.bounding_box().transform(&n.transform.compute_matrix()))
            })
            .fold(BoundingBox::EMPTY, |acc, bb| acc.union(&bb));
        (!bounds.is_empty()).then_some(bounds)
    }
}

fn placed_transform(position: Option<Vec3Config>, rotation: Option<Vec3Config>) -> Transform {
    let mut transform = Transform::new();
    apply_placement(&mut transform, position, rotation);
    transform
}

fn apply_placement(
    transform: &mut Transform,
    position: Option<Vec3Config>,
    rotation: Option<Vec3Config>,
) {
    if let Some(p) = position {
        transform.position = p.into();
    }
    if let Some(r) = rotation {
        transform.set_rotation_euler(r.x, r.y, r.z);
    }
}
