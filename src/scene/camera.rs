use std::borrow::Cow;
use std::str::FromStr;

use glam::{Affine3A, Mat4, Vec3, Vec4};
use uuid::Uuid;

use crate::config::CameraConfig;
use crate::errors::{Result, TableauError};
use crate::resources::geometry::BoundingBox;

/// Camera kinds the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraType {
    Perspective,
}

impl FromStr for CameraType {
    type Err = TableauError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PERSPECTIVE" => Ok(Self::Perspective),
            other => Err(TableauError::UnsupportedCameraType(other.to_string())),
        }
    }
}

/// Perspective camera projection. Placement lives in the owning node's
/// [`Transform`](super::Transform).
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,
    pub name: Cow<'static, str>,

    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub zoom: f32,

    projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            uuid: Uuid::new_v4(),
            name: Cow::Borrowed("Camera"),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            zoom: 1.0,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Builds the camera named by `config.kind`.
    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        match config.kind.parse::<CameraType>()? {
            CameraType::Perspective => {
                let mut cam =
                    Self::new_perspective(config.fov, config.aspect(), config.near, config.far);
                cam.name = Cow::Owned(config.name.clone());
                cam.zoom = if config.zoom > 0.0 { config.zoom } else { 1.0 };
                cam.update_projection_matrix();
                Ok(cam)
            }
        }
    }

    #[must_use]
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Updates the aspect ratio for a `width` × `height` canvas.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
        self.update_projection_matrix();
    }

    /// Recomputes the projection after `fov`, `aspect`, `near`, `far` or
    /// `zoom` changed.
    pub fn update_projection_matrix(&mut self) {
        let effective_fov = 2.0 * ((self.fov * 0.5).tan() / self.zoom).atan();
        // Depth range [0, 1]
        self.projection_matrix = Mat4::perspective_rh(effective_fov, self.aspect, self.near, self.far);
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// View matrix: inverse of the camera's world matrix.
    #[must_use]
    pub fn view_matrix(world: &Affine3A) -> Mat4 {
        Mat4::from(world.inverse())
    }

    #[must_use]
    pub fn view_projection_matrix(&self, world: &Affine3A) -> Mat4 {
        self.projection_matrix * Self::view_matrix(world)
    }

    /// View frustum for a camera placed at `world`.
    #[must_use]
    pub fn frustum(&self, world: &Affine3A) -> Frustum {
        Frustum::from_matrix(self.view_projection_matrix(world))
    }
}

/// Six clip planes (Left, Right, Bottom, Top, Near, Far), normals pointing
/// inwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Extracts the planes from a view-projection matrix with a `[0, 1]`
    /// depth range (Gribb-Hartmann).
    #[must_use]
    pub fn from_matrix(m: Mat4) -> Self {
        let rows = [m.row(0), m.row(1), m.row(2), m.row(3)];

        let mut planes = [
            rows[3] + rows[0], // Left
            rows[3] - rows[0], // Right
            rows[3] + rows[1], // Bottom
            rows[3] - rows[1], // Top
            rows[2],           // Near
            rows[3] - rows[2], // Far
        ];

        for plane in &mut planes {
            let length = plane.truncate().length();
            if length > 0.0 {
                *plane /= length;
            }
        }

        Self { planes }
    }

    #[must_use]
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    #[inline]
    fn distance(plane: Vec4, point: Vec3) -> f32 {
        plane.truncate().dot(point) + plane.w
    }

    /// `true` when `point` is on the inner side of every plane (points on a
    /// plane count as inside).
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|&p| Self::distance(p, point) >= 0.0)
    }

    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|&p| Self::distance(p, center) >= -radius)
    }

    /// Conservative AABB test using the corner furthest along each normal.
    #[must_use]
    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        self.planes.iter().all(|&p| {
            let n = p.truncate();
            let positive = Vec3::select(n.cmpge(Vec3::ZERO), bbox.max, bbox.min);
            Self::distance(p, positive) >= 0.0
        })
    }
}
