//! Scene Configuration
//!
//! Declarative descriptions of everything the scene factories build: the
//! camera, lights, geometries, materials and named objects.
//!
//! Every struct is `serde`-deserialisable and every optional field has a
//! documented default, so a JSON document only needs to name what differs:
//!
//! ```rust,ignore
//! use tableau::config::SceneConfig;
//!
//! let config = SceneConfig::from_json_str(r#"{
//!     "items": [{
//!         "name": "door",
//!         "geometry": { "type": "BOX", "width": 7, "height": 20, "depth": 0.5 },
//!         "material": { "type": "STANDARD", "color": "#ffffff" }
//!     }]
//! }"#)?;
//! ```
//!
//! Variant tags (`"type"`) are kept as strings here and resolved by the
//! factories, which report unknown tags as `Unsupported*Type` errors.

use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ============================================================================
// Shared value types
// ============================================================================

/// A 3D vector in config form. Missing components default to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec3Config {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Config {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3Config> for Vec3 {
    fn from(v: Vec3Config) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vec3Config {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A colour as either a packed `0xRRGGBB` integer or a `"#rrggbb"` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(u32),
    Css(String),
}

impl ColorValue {
    pub const WHITE: Self = Self::Hex(0xffffff);
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::WHITE
    }
}

// ============================================================================
// Camera
// ============================================================================

/// Camera description.
///
/// | field      | default         |
/// |------------|-----------------|
/// | `name`     | `"GENERAL"`     |
/// | `type`     | `"PERSPECTIVE"` |
/// | `zoom`     | `1`             |
/// | `fov`      | `45` (degrees)  |
/// | `near`     | `0.1`           |
/// | `far`      | `1000`          |
/// | `position` | origin          |
/// | `rotation` | identity        |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    pub zoom: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3Config,
    pub rotation: Vec3Config,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            name: "GENERAL".to_string(),
            kind: "PERSPECTIVE".to_string(),
            width: 1.0,
            height: 1.0,
            zoom: 1.0,
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3Config::default(),
            rotation: Vec3Config::default(),
        }
    }
}

impl CameraConfig {
    /// The general-purpose camera: perspective, placed at `(10, 3, 10)`.
    #[must_use]
    pub fn general(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            position: Vec3Config::new(10.0, 3.0, 10.0),
            ..Self::default()
        }
    }

    /// Canvas aspect ratio; a zero height is treated as one pixel.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

// ============================================================================
// Light
// ============================================================================

/// Light description. Fields a light type does not use are ignored.
///
/// | field         | default    | used by                 |
/// |---------------|------------|-------------------------|
/// | `color`       | `0xffffff` | all                     |
/// | `intensity`   | `1`        | all                     |
/// | `width`       | `10`       | rect area               |
/// | `height`      | `10`       | rect area               |
/// | `distance`    | `0`        | spot (0 = no cut-off)   |
/// | `angle`       | `π/3`      | spot                    |
/// | `penumbra`    | `0`        | spot                    |
/// | `cast_shadow` | `false`    | directional, spot       |
/// | `position`    | untouched  | all                     |
/// | `rotation`    | untouched  | all                     |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: ColorValue,
    pub intensity: f32,
    pub width: f32,
    pub height: f32,
    pub distance: f32,
    pub angle: f32,
    pub penumbra: f32,
    #[serde(alias = "castShadow")]
    pub cast_shadow: bool,
    pub position: Option<Vec3Config>,
    pub rotation: Option<Vec3Config>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            kind: "RECT_AREA_LIGHT".to_string(),
            color: ColorValue::WHITE,
            intensity: 1.0,
            width: 10.0,
            height: 10.0,
            distance: 0.0,
            angle: std::f32::consts::FRAC_PI_3,
            penumbra: 0.0,
            cast_shadow: false,
            position: None,
            rotation: None,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Geometry description.
///
/// `width`/`height`/`depth` default to `1` (box, plane), `radius` to `1`
/// (sphere). Zero segment counts select the primitive's own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub radius: f32,
    #[serde(alias = "widthSegments")]
    pub width_segments: u32,
    #[serde(alias = "heightSegments")]
    pub height_segments: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            kind: "BOX".to_string(),
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            radius: 1.0,
            width_segments: 0,
            height_segments: 0,
        }
    }
}

impl GeometryConfig {
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            ..Self::default()
        }
    }
}

// ============================================================================
// Material
// ============================================================================

/// Material description.
///
/// A `texture_path` turns the standard material into a textured one whose
/// texture repeats `texture_width / 10` × `texture_height / 10` times.
///
/// | field        | default     |
/// |--------------|-------------|
/// | `type`       | `"STANDARD"`|
/// | `color`      | `"#ffffff"` |
/// | `roughness`  | `1`         |
/// | `metalness`  | `0`         |
/// | `opacity`    | `1`         |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: ColorValue,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    #[serde(alias = "texturePath")]
    pub texture_path: Option<String>,
    #[serde(alias = "textureWidth")]
    pub texture_width: Option<f32>,
    #[serde(alias = "textureHeight")]
    pub texture_height: Option<f32>,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            kind: "STANDARD".to_string(),
            color: ColorValue::Css("#ffffff".to_string()),
            roughness: 1.0,
            metalness: 0.0,
            opacity: 1.0,
            texture_path: None,
            texture_width: None,
            texture_height: None,
        }
    }
}

impl MaterialConfig {
    #[must_use]
    pub fn standard(color: ColorValue) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

// ============================================================================
// Objects
// ============================================================================

/// A named mesh: geometry + material + placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(alias = "geometryConfig")]
    pub geometry: Option<GeometryConfig>,
    #[serde(alias = "materialConfig")]
    pub material: Option<MaterialConfig>,
    pub position: Option<Vec3Config>,
    pub rotation: Option<Vec3Config>,
}

/// Named object configs, looked up by the scene builder.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: FxHashMap<String, ObjectConfig>,
}

impl ItemCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: a white 7 × 20 × 0.5 door.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_items([ObjectConfig {
            name: "door".to_string(),
            geometry: Some(GeometryConfig::cuboid(7.0, 20.0, 0.5)),
            material: Some(MaterialConfig::standard(ColorValue::Css(
                "#ffffff".to_string(),
            ))),
            position: None,
            rotation: None,
        }])
    }

    /// Builds a catalog; a later item replaces an earlier one with the same name.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = ObjectConfig>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    pub fn insert(&mut self, item: ObjectConfig) -> Option<ObjectConfig> {
        let previous = self.items.insert(item.name.clone(), item);
        if let Some(prev) = &previous {
            log::warn!("ItemCatalog: replacing duplicate item '{}'", prev.name);
        }
        previous
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ObjectConfig> {
        self.items.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Scene document
// ============================================================================

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: Option<CameraConfig>,
    pub items: Vec<ObjectConfig>,
    pub lights: Vec<LightConfig>,
}

impl SceneConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!(
            "Loaded scene config {}: {} items, {} lights",
            path.display(),
            config.items.len(),
            config.lights.len()
        );
        Ok(config)
    }

    /// Item catalog built from `items`.
    #[must_use]
    pub fn catalog(&self) -> ItemCatalog {
        ItemCatalog::from_items(self.items.iter().cloned())
    }
}
