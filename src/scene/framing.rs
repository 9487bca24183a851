//! Auto-framing
//!
//! Finds how far back a camera on the 45° diagonal has to stand to keep a
//! box-shaped scene entirely in view. The solver takes an analytic estimate
//! from the pinhole field-of-view formulas and refines it by bisection,
//! testing a fixed set of probe points against the candidate camera's
//! frustum at each step.
//!
//! The box is assumed to stand on `y = 0`, centred on the vertical axis.
//! [`frame_bounding_box`] lifts that restriction for arbitrary world bounds.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use crate::resources::geometry::BoundingBox;
use crate::scene::camera::Camera;
use crate::scene::transform::Transform;

/// Vertical field of view of framing cameras, in degrees.
pub const FRAMING_FOV_DEGREES: f32 = 45.0;

const AZIMUTH: f32 = FRAC_PI_4;
const PROBE_NEAR: f32 = 0.1;
const PROBE_FAR_FACTOR: f32 = 3.0;

const INITIAL_MARGIN: f32 = 1.5;
const SEARCH_LOWER_FACTOR: f32 = 0.5;
const SEARCH_UPPER_FACTOR: f32 = 1.2;
const MAX_ITERATIONS: usize = 20;
const EPSILON: f32 = 0.01;
const FINAL_MARGIN: f32 = 1.05;
const MAX_UPPER_EXPANSIONS: usize = 8;

/// Camera placement produced by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingResult {
    pub position: Vec3,
    pub target: Vec3,
    /// Horizontal distance from the vertical axis through `target`.
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect_ratio: f32,
}

/// Computes where a 45° camera at `camera_height` must stand to see a
/// `scene_width` × `scene_height` × `scene_depth` box on a
/// `canvas_width` × `canvas_height` canvas.
///
/// Pure and deterministic: identical inputs give bit-identical results.
#[must_use]
pub fn compute_framing_camera(
    canvas_width: f32,
    canvas_height: f32,
    camera_height: f32,
    scene_width: f32,
    scene_depth: f32,
    scene_height: f32,
) -> FramingResult {
    let target = Vec3::new(0.0, scene_height / 2.0, 0.0);
    let aspect_ratio = canvas_width.max(1.0) / canvas_height.max(1.0);

    let probes = probe_points(scene_width / 2.0, scene_depth / 2.0, scene_height);
    let visible = |distance: f32| {
        is_fully_visible(
            &probes,
            camera_position(distance, camera_height),
            target,
            aspect_ratio,
            distance,
        )
    };

    let initial = initial_distance(aspect_ratio, scene_width, scene_depth, scene_height);
    let distance = bisect(initial, visible) * FINAL_MARGIN;

    FramingResult {
        position: camera_position(distance, camera_height),
        target,
        distance,
        fov: FRAMING_FOV_DEGREES,
        aspect_ratio,
    }
}

/// Frames an arbitrary world-space box.
///
/// `camera_height` is measured from the bottom of `bounds`. Returns `None`
/// for an empty box.
#[must_use]
pub fn frame_bounding_box(
    canvas_width: f32,
    canvas_height: f32,
    camera_height: f32,
    bounds: &BoundingBox,
) -> Option<FramingResult> {
    if bounds.is_empty() {
        return None;
    }

    let size = bounds.size();
    let center = bounds.center();
    let offset = Vec3::new(center.x, bounds.min.y, center.z);

    let mut result = compute_framing_camera(
        canvas_width,
        canvas_height,
        camera_height,
        size.x,
        size.z,
        size.y,
    );
    result.position += offset;
    result.target += offset;
    Some(result)
}

fn camera_position(distance: f32, camera_height: f32) -> Vec3 {
    Vec3::new(
        distance * AZIMUTH.cos(),
        camera_height,
        distance * AZIMUTH.sin(),
    )
}

/// The 8 box corners plus the volume centre and the 4 side-face centres.
fn probe_points(half_x: f32, half_z: f32, height: f32) -> [Vec3; 13] {
    let half_y = height / 2.0;
    [
        Vec3::new(half_x, 0.0, half_z),
        Vec3::new(-half_x, 0.0, half_z),
        Vec3::new(half_x, 0.0, -half_z),
        Vec3::new(-half_x, 0.0, -half_z),
        Vec3::new(half_x, height, half_z),
        Vec3::new(-half_x, height, half_z),
        Vec3::new(half_x, height, -half_z),
        Vec3::new(-half_x, height, -half_z),
        Vec3::new(0.0, half_y, 0.0),
        Vec3::new(half_x, half_y, 0.0),
        Vec3::new(-half_x, half_y, 0.0),
        Vec3::new(0.0, half_y, half_z),
        Vec3::new(0.0, half_y, -half_z),
    ]
}

fn is_fully_visible(
    probes: &[Vec3],
    position: Vec3,
    target: Vec3,
    aspect_ratio: f32,
    distance: f32,
) -> bool {
    let probe_camera = Camera::new_perspective(
        FRAMING_FOV_DEGREES,
        aspect_ratio,
        PROBE_NEAR,
        distance * PROBE_FAR_FACTOR,
    );

    let mut transform = Transform::from_position(position);
    transform.look_at(target, Vec3::Y);
    let frustum = probe_camera.frustum(&transform.compute_matrix());

    probes.iter().all(|&p| frustum.contains_point(p))
}

fn initial_distance(aspect_ratio: f32, width: f32, depth: f32, height: f32) -> f32 {
    let vertical_fov = FRAMING_FOV_DEGREES.to_radians();
    let horizontal_fov = 2.0 * ((vertical_fov / 2.0).tan() * aspect_ratio).atan();

    let horizontal = width.max(depth) / (2.0 * (horizontal_fov / 2.0).tan());
    let vertical = height / (2.0 * (vertical_fov / 2.0).tan());

    horizontal.max(vertical) * INITIAL_MARGIN
}

/// Shrinks `[0.5, 1.2] × initial` onto the closest fully visible distance,
/// assuming visibility grows with distance. Returns the upper bound.
fn bisect(initial: f32, visible: impl Fn(f32) -> bool) -> f32 {
    let mut min_dist = initial * SEARCH_LOWER_FACTOR;
    let mut max_dist = initial * SEARCH_UPPER_FACTOR;

    let mut expansions = 0;
    while !visible(max_dist) && expansions < MAX_UPPER_EXPANSIONS {
        min_dist = max_dist;
        max_dist *= 2.0;
        expansions += 1;
    }
    if expansions > 0 {
        log::warn!(
            "Framing: initial estimate {initial:.3} too close, search upper bound raised to {max_dist:.3}"
        );
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (min_dist + max_dist) / 2.0;
        if visible(mid) {
            max_dist = mid;
        } else {
            min_dist = mid;
        }
        if max_dist - min_dist < EPSILON {
            break;
        }
    }

    max_dist
}
