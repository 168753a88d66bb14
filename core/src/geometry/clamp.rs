/// Clamp `value` into `[min, max]`.
///
/// The bounds must be ordered; inverted bounds trip a debug assertion.
pub fn clamp(min: f32, value: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "clamp bounds out of order: {min} > {max}");
    if value < min {
        min
    } else if value < max {
        value
    } else {
        max
    }
}
