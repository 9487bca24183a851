//! Easing curves applied to normalised time before interpolation.

/// Cubic ease-in-out.
///
/// Accelerates over the first half and decelerates over the second:
/// `4t³` for `t < 0.5`, `1 - (-2t + 2)³ / 2` otherwise.
/// Fixed points: `ease(0) = 0`, `ease(0.5) = 0.5`, `ease(1) = 1`.
#[inline]
#[must_use]
pub fn cubic_ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
