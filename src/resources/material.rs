use std::str::FromStr;
use std::sync::Arc;

use glam::{Vec2, Vec3};
use uuid::Uuid;

use crate::config::MaterialConfig;
use crate::errors::{Result, TableauError};
use crate::resources::color::parse_color;
use crate::resources::texture::{Texture, TextureSampler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Standard,
}

impl FromStr for MaterialType {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            other => Err(TableauError::UnsupportedMaterialType(other.to_string())),
        }
    }
}

/// Metallic-roughness PBR material.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    pub uuid: Uuid,
    pub color: Vec3,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub map: Option<Arc<Texture>>,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Vec3::ONE)
    }
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Vec3) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
            map: None,
        }
    }

    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    #[must_use]
    pub fn with_map(mut self, map: Arc<Texture>) -> Self {
        self.map = Some(map);
        self
    }
}

/// Materials the factory can build.
#[derive(Debug, Clone)]
pub enum Material {
    Standard(StandardMaterial),
}

impl From<StandardMaterial> for Material {
    fn from(m: StandardMaterial) -> Self {
        Material::Standard(m)
    }
}

impl Material {
    /// Builds a material from config.
    ///
    /// A `texture_path` attaches a repeating texture; when both texture sizes
    /// are given it repeats `size / 10` times along each axis.
    pub fn from_config(config: &MaterialConfig) -> Result<Self> {
        match config.kind.parse::<MaterialType>()? {
            MaterialType::Standard => {
                let mut material = StandardMaterial::new(parse_color(&config.color)?)
                    .with_roughness(config.roughness)
                    .with_metalness(config.metalness);
                material.opacity = config.opacity;

                if let Some(path) = &config.texture_path {
                    material.map = Some(Arc::new(textured_map(config, path)));
                }
                Ok(Material::Standard(material))
            }
        }
    }

    #[must_use]
    pub fn uuid(&self) -> Uuid {
        match self {
            Material::Standard(m) => m.uuid,
        }
    }

    #[must_use]
    pub fn as_standard(&self) -> Option<&StandardMaterial> {
        match self {
            Material::Standard(m) => Some(m),
        }
    }
}

fn textured_map(config: &MaterialConfig, path: &str) -> Texture {
    let mut texture = Texture::from_path(path);
    if let (Some(w), Some(h)) = (config.texture_width, config.texture_height)
        && w != 0.0
        && h != 0.0
    {
        texture.transform.repeat = Vec2::new(w / 10.0, h / 10.0);
        texture.sampler = TextureSampler::repeating();
    }
    texture
}
