//! Resources
//!
//! CPU-side descriptions of what the host renderer draws: geometry,
//! materials, textures and the meshes that pair them. Each has a factory
//! that builds it from its [`config`](crate::config) counterpart.

pub mod color;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod texture;

pub use color::{color_from_hex, parse_color};
pub use geometry::{BoundingBox, Geometry, GeometryType, Indices};
pub use material::{Material, MaterialType, StandardMaterial};
pub use mesh::Mesh;
pub use texture::{
    ColorSpace, FilterMode, Texture, TextureSampler, TextureSource, TextureTransform, WrapMode,
    scaled_texture, tile_grid_image,
};
