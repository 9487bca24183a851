use std::str::FromStr;

use glam::{Affine3A, Vec3};
use uuid::Uuid;

use crate::config::GeometryConfig;
use crate::errors::{Result, TableauError};
use crate::resources::primitives::{PlaneOptions, SphereOptions, create_box, create_plane, create_sphere};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// An inverted box that any `expand`/`union` replaces.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |bb, p| bb.expand(p))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn expand(&self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Bounds of this box after `matrix` is applied.
    #[must_use]
    pub fn transform(&self, matrix: &Affine3A) -> Self {
        Self::from_points(self.corners().map(|c| matrix.transform_point3(c)))
    }
}

/// The primitive shapes the geometry factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Box,
    Plane,
    Sphere,
}

impl FromStr for GeometryType {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BOX" => Ok(Self::Box),
            "PLANE" => Ok(Self::Plane),
            "SPHERE" => Ok(Self::Sphere),
            other => Err(TableauError::UnsupportedGeometryType(other.to_string())),
        }
    }
}

/// Triangle-list index buffer.
///
/// Stored as `u16` while every index fits, widened to `u32` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Indices {
    /// Narrows to `u16` when `vertex_count` allows it.
    #[must_use]
    pub fn for_vertex_count(indices: Vec<u32>, vertex_count: usize) -> Self {
        if vertex_count <= usize::from(u16::MAX) + 1 {
            Self::U16(indices.into_iter().map(|i| i as u16).collect())
        } else {
            Self::U32(indices)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Self::U16(v) => v.get(i).map(|&x| u32::from(x)),
            Self::U32(v) => v.get(i).copied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    #[must_use]
    pub fn is_u32(&self) -> bool {
        matches!(self, Self::U32(_))
    }
}

/// CPU-side triangle geometry.
///
/// Attributes are planar arrays; `indices` is a triangle list with
/// counter-clockwise winding.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub uuid: Uuid,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Indices,
    bounding_box: BoundingBox,
}

impl Geometry {
    #[must_use]
    pub fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
    ) -> Self {
        let bounding_box = BoundingBox::from_points(positions.iter().map(|p| Vec3::from_array(*p)));
        let indices = Indices::for_vertex_count(indices, positions.len());
        Self {
            uuid: Uuid::new_v4(),
            positions,
            normals,
            uvs,
            indices,
            bounding_box,
        }
    }

    /// Builds the primitive named by `config.kind`.
    pub fn from_config(config: &GeometryConfig) -> Result<Self> {
        let geometry = match config.kind.parse::<GeometryType>()? {
            GeometryType::Box => create_box(config.width, config.height, config.depth),
            GeometryType::Plane => {
                let defaults = PlaneOptions::default();
                create_plane(&PlaneOptions {
                    width: config.width,
                    height: config.height,
                    width_segments: nonzero_or(config.width_segments, defaults.width_segments),
                    height_segments: nonzero_or(config.height_segments, defaults.height_segments),
                })
            }
            GeometryType::Sphere => {
                let defaults = SphereOptions::default();
                create_sphere(&SphereOptions {
                    radius: config.radius,
                    width_segments: nonzero_or(config.width_segments, defaults.width_segments),
                    height_segments: nonzero_or(config.height_segments, defaults.height_segments),
                })
            }
        };
        Ok(geometry)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounds of all vertices.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

fn nonzero_or(value: u32, fallback: u32) -> u32 {
    if value == 0 { fallback } else { value }
}
