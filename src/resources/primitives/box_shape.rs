use glam::Vec3;

use crate::resources::geometry::Geometry;

/// Face basis: (normal, u axis, v axis). Each face is a quad spanning
/// `±u` and `±v` around `normal * half_extent`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::Z, Vec3::X, Vec3::Y),         // Front (+Z)
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y), // Back (-Z)
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),     // Top (+Y)
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),     // Bottom (-Y)
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),     // Right (+X)
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),     // Left (-X)
];

/// Axis-aligned box centred on the origin, 4 vertices per face.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let half = Vec3::new(width, height, depth) * 0.5;

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);

    for (normal, u, v) in FACES {
        let center = normal * half;
        let du = u * half;
        let dv = v * half;
        // Corners in CCW order seen from outside: (-u,-v) (+u,-v) (+u,+v) (-u,+v)
        for (su, sv, uv) in [
            (-1.0, -1.0, [0.0, 1.0]),
            (1.0, -1.0, [1.0, 1.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (-1.0, 1.0, [0.0, 0.0]),
        ] {
            positions.push((center + du * su + dv * sv).to_array());
            normals.push(normal.to_array());
            uvs.push(uv);
        }
    }

    // 2 triangles per face: 0, 1, 2,  0, 2, 3
    let indices: Vec<u32> = (0..6)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Geometry::new(positions, normals, uvs, indices)
}
