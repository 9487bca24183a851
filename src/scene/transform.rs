use glam::{Affine3A, EulerRot, Mat3, Quat, Vec3};

/// Transform component.
///
/// Position, rotation and scale (TRS) plus a cached matrix that is rebuilt
/// only when one of them changes.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    pub(crate) world_matrix: Affine3A,

    // Shadow state for dirty checking
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Rebuilds the cached matrix if TRS changed. Returns whether it did.
    pub fn update_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.world_matrix =
                Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position);
            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Sets rotation from XYZ-order Euler angles (radians).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Current rotation as XYZ-order Euler angles.
    #[must_use]
    pub fn rotation_euler(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// World matrix as of the last [`update_matrix`](Self::update_matrix).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// Matrix for the current TRS, whether or not the cache is fresh.
    #[must_use]
    pub fn compute_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Rotates so that local -Z points at `target` (camera convention).
    ///
    /// Leaves the rotation untouched when `target` coincides with the
    /// position or the view direction is parallel to `up`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let to_target = target - self.position;
        if to_target.length_squared() < 1e-12 {
            return;
        }
        let forward = to_target.normalize();

        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&rot_mat).normalize();
    }

    /// Direction local -Z points to in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_points_negative_z_at_target() {
        let mut t = Transform::from_position(Vec3::new(10.0, 3.0, 10.0));
        t.look_at(Vec3::ZERO, Vec3::Y);
        let expected = (Vec3::ZERO - t.position).normalize();
        assert!(t.forward().distance(expected) < 1e-5);
    }

    #[test]
    fn look_at_degenerate_is_noop() {
        let mut t = Transform::from_position(Vec3::new(0.0, 5.0, 0.0));
        let before = t.rotation;
        t.look_at(Vec3::ZERO, Vec3::Y);
        assert_eq!(t.rotation, before);
        t.look_at(t.position, Vec3::Y);
        assert_eq!(t.rotation, before);
    }

    #[test]
    fn update_matrix_is_lazy() {
        let mut t = Transform::new();
        assert!(t.update_matrix());
        assert!(!t.update_matrix());
        t.position = Vec3::X;
        assert!(t.update_matrix());
        assert_eq!(t.world_matrix().translation, Vec3::X.into());
    }
}
