use std::str::FromStr;

use glam::Vec3;
use uuid::Uuid;

use crate::config::LightConfig;
use crate::errors::{Result, TableauError};
use crate::resources::color::parse_color;

/// Orthographic volume a directional light renders its shadow map from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowCamera {
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            near: 0.5,
            far: 500.0,
            left: -5.0,
            right: 5.0,
            top: 5.0,
            bottom: -5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub bias: f32,
    pub normal_bias: f32,
    pub map_size: u32,
    /// PCF blur radius in texels.
    pub radius: f32,
    pub camera: ShadowCamera,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: 0.0,
            normal_bias: 0.0,
            map_size: 512,
            radius: 1.0,
            camera: ShadowCamera::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    RectArea,
    Directional,
    Spot,
    Ambient,
}

impl FromStr for LightType {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RECT_AREA_LIGHT" => Ok(Self::RectArea),
            // Legacy configs spell these tags "DIRECIONAL" and "AMBIG"
            "DIRECTIONAL_LIGHT" | "DIRECIONAL_LIGHT" => Ok(Self::Directional),
            "SPOT_LIGHT" => Ok(Self::Spot),
            "AMBIENT_LIGHT" | "AMBIG_LIGHT" => Ok(Self::Ambient),
            other => Err(TableauError::UnsupportedLightType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectAreaLight {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    /// 0 = unlimited range
    pub distance: f32,
    /// Cone half-angle in radians.
    pub angle: f32,
    pub penumbra: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    RectArea(RectAreaLight),
    Directional,
    Spot(SpotLight),
    Ambient,
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    fn with_kind(color: Vec3, intensity: f32, kind: LightKind) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind,
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        let mut light = Self::with_kind(color, intensity, LightKind::Directional);
        light.shadow = Some(ShadowConfig::default());
        light
    }

    #[must_use]
    pub fn new_rect_area(color: Vec3, intensity: f32, width: f32, height: f32) -> Self {
        Self::with_kind(
            color,
            intensity,
            LightKind::RectArea(RectAreaLight { width, height }),
        )
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, distance: f32, angle: f32, penumbra: f32) -> Self {
        let mut light = Self::with_kind(
            color,
            intensity,
            LightKind::Spot(SpotLight {
                distance,
                angle,
                penumbra,
            }),
        );
        light.shadow = Some(ShadowConfig::default());
        light
    }

    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self::with_kind(color, intensity, LightKind::Ambient)
    }

    /// Builds the light named by `config.kind`.
    ///
    /// Placement (`position`/`rotation`) belongs to the node and is applied by
    /// [`Scene::add_light_from_config`](super::Scene::add_light_from_config).
    pub fn from_config(config: &LightConfig) -> Result<Self> {
        let color = parse_color(&config.color)?;
        let intensity = config.intensity;

        let mut light = match config.kind.parse::<LightType>()? {
            LightType::RectArea => {
                Self::new_rect_area(color, intensity, config.width, config.height)
            }
            LightType::Directional => Self::new_directional(color, intensity),
            LightType::Spot => Self::new_spot(
                color,
                intensity,
                config.distance,
                config.angle,
                config.penumbra,
            ),
            LightType::Ambient => Self::new_ambient(color, intensity),
        };

        // Only lights with a shadow map can cast
        light.cast_shadows = config.cast_shadow && light.shadow.is_some();
        Ok(light)
    }

    #[must_use]
    pub fn light_type(&self) -> LightType {
        match self.kind {
            LightKind::RectArea(_) => LightType::RectArea,
            LightKind::Directional => LightType::Directional,
            LightKind::Spot(_) => LightType::Spot,
            LightKind::Ambient => LightType::Ambient,
        }
    }
}
