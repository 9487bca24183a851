use glam::{Quat, Vec3};

/// Values a [`KeyframeTrack`](super::tracks::KeyframeTrack) can blend between.
pub trait Interpolatable: Copy + Clone + Sized + PartialEq {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    // Shortest-arc slerp; glam flips the sign of `end` when the dot is negative.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}
