use std::sync::Arc;

use crate::config::ObjectConfig;
use crate::errors::{Result, TableauError};
use crate::resources::geometry::{BoundingBox, Geometry};
use crate::resources::material::Material;

/// Geometry + material pair placed in the scene by a node.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub geometry: Arc<Geometry>,
    pub material: Arc<Material>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self {
            name: String::new(),
            geometry,
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds a named, shadow-casting and shadow-receiving mesh.
    ///
    /// Placement (`position`/`rotation`) belongs to the node and is applied by
    /// [`Scene::add_object`](crate::scene::Scene::add_object).
    pub fn from_config(config: &ObjectConfig) -> Result<Self> {
        let geometry_config = config
            .geometry
            .as_ref()
            .ok_or(TableauError::MissingConfig("object geometry"))?;
        let material_config = config
            .material
            .as_ref()
            .ok_or(TableauError::MissingConfig("object material"))?;

        let geometry = Geometry::from_config(geometry_config)?;
        let material = Material::from_config(material_config)?;

        let mut mesh = Mesh::new(Arc::new(geometry), Arc::new(material)).with_name(&config.name);
        mesh.cast_shadow = true;
        mesh.receive_shadow = true;
        Ok(mesh)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.geometry.bounding_box()
    }
}
