use crate::resources::geometry::Geometry;

#[derive(Debug, Clone, Copy)]
pub struct PlaneOptions {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            width_segments: 1,
            height_segments: 1,
        }
    }
}

/// Plane in the XY plane facing +Z, centred on the origin.
#[must_use]
pub fn create_plane(options: &PlaneOptions) -> Geometry {
    let width_half = options.width / 2.0;
    let height_half = options.height / 2.0;

    let grid_x = options.width_segments.max(1);
    let grid_y = options.height_segments.max(1);

    let grid_x1 = grid_x + 1;
    let grid_y1 = grid_y + 1;

    let segment_width = options.width / grid_x as f32;
    let segment_height = options.height / grid_y as f32;

    let vertex_count = (grid_x1 * grid_y1) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);

    for iy in 0..grid_y1 {
        let y = iy as f32 * segment_height - height_half;
        for ix in 0..grid_x1 {
            let x = ix as f32 * segment_width - width_half;

            // Rows run top to bottom so v matches image space
            positions.push([x, -y, 0.0]);
            normals.push([0.0, 0.0, 1.0]);
            uvs.push([ix as f32 / grid_x as f32, 1.0 - (iy as f32 / grid_y as f32)]);
        }
    }

    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + grid_x1 * iy;
            let b = ix + grid_x1 * (iy + 1);
            let c = (ix + 1) + grid_x1 * (iy + 1);
            let d = (ix + 1) + grid_x1 * iy;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    Geometry::new(positions, normals, uvs, indices)
}
