use std::path::PathBuf;
use std::sync::Arc;

use glam::Vec2;
use image::{Rgba, RgbaImage};
use uuid::Uuid;

// ============================================================================
// Sampler state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
    LinearMipmapLinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
    /// 1 = off
    pub anisotropy: u16,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            wrap_s: WrapMode::ClampToEdge,
            wrap_t: WrapMode::ClampToEdge,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::LinearMipmapLinear,
            anisotropy: 1,
        }
    }
}

impl TextureSampler {
    #[must_use]
    pub fn repeating() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            ..Self::default()
        }
    }
}

/// UV transform applied when sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureTransform {
    pub offset: Vec2,
    pub repeat: Vec2,
    /// Radians, around `center`.
    pub rotation: f32,
    pub center: Vec2,
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            repeat: Vec2::ONE,
            rotation: 0.0,
            center: Vec2::ZERO,
        }
    }
}

// ============================================================================
// Texture
// ============================================================================

/// Where texel data comes from. Path sources are fetched by the host renderer.
#[derive(Debug, Clone)]
pub enum TextureSource {
    Path(PathBuf),
    Image(Arc<RgbaImage>),
}

#[derive(Debug, Clone)]
pub struct Texture {
    pub uuid: Uuid,
    pub name: String,
    pub source: TextureSource,
    pub transform: TextureTransform,
    pub sampler: TextureSampler,
    pub color_space: ColorSpace,
}

impl Texture {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            uuid: Uuid::new_v4(),
            name: path.display().to_string(),
            source: TextureSource::Path(path),
            transform: TextureTransform::default(),
            sampler: TextureSampler::default(),
            color_space: ColorSpace::Srgb,
        }
    }

    #[must_use]
    pub fn from_image(name: impl Into<String>, image: Arc<RgbaImage>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            source: TextureSource::Image(image),
            transform: TextureTransform::default(),
            sampler: TextureSampler::default(),
            color_space: ColorSpace::Srgb,
        }
    }

    /// Pixel size when the texel data is already in memory.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match &self.source {
            TextureSource::Image(img) => Some(img.dimensions()),
            TextureSource::Path(_) => None,
        }
    }
}

// ============================================================================
// Tiled surfaces
// ============================================================================

/// Side length of [`tile_grid_image`] in pixels.
pub const TILE_GRID_SIZE: u32 = 1000;

const TILE_FACE: Rgba<u8> = Rgba([0xf1, 0xf2, 0xf3, 0xff]);
const TILE_GROUT: Rgba<u8> = Rgba([0xcb, 0xcc, 0xce, 0xff]);

/// A 10 × 10 grid of light tiles separated by grout lines: a 10 px border on
/// the top/left edge and 5 px lines every 100 px.
#[must_use]
pub fn tile_grid_image() -> RgbaImage {
    let is_grout = |c: u32| c < 10 || (c >= 100 && c % 100 < 5);
    RgbaImage::from_fn(TILE_GRID_SIZE, TILE_GRID_SIZE, |x, y| {
        if is_grout(x) || is_grout(y) {
            TILE_GROUT
        } else {
            TILE_FACE
        }
    })
}

/// Wraps `image` so that it tiles a `width` × `height` surface at its native
/// pixel density (100 px per world unit) divided by `texture_scale`.
///
/// `rotate` turns the texture by 180°.
#[must_use]
pub fn scaled_texture(
    name: impl Into<String>,
    image: Arc<RgbaImage>,
    width: f32,
    height: f32,
    texture_scale: f32,
    rotate: bool,
) -> Texture {
    let (img_w, img_h) = image.dimensions();
    let mut texture = Texture::from_image(name, image);

    texture.transform.repeat = Vec2::new(
        (width * 100.0) / (img_w.max(1) as f32 * texture_scale),
        (height * 100.0) / (img_h.max(1) as f32 * texture_scale),
    );
    texture.sampler = TextureSampler {
        anisotropy: 16,
        ..TextureSampler::repeating()
    };
    texture.color_space = ColorSpace::Srgb;

    if rotate {
        texture.transform.rotation = std::f32::consts::PI;
        texture.transform.offset = Vec2::ZERO;
    }

    texture
}
