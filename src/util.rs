use crate::geometry::Vector;

/// Returns `true` iff `progress` lies in the (possibly wrap-around) range
/// `[progress_from, progress_to]`.
pub fn progress_in_range(progress: f32, progress_from: f32, progress_to: f32) -> bool {
    if progress_to >= progress_from {
        (progress_from..=progress_to).contains(&progress)
    } else {
        progress >= progress_from || progress <= progress_to
    }
}

/// Distance between two progress values on the circular `[0, 1)` outline.
pub fn progress_distance(p1: f32, p2: f32) -> f32 {
    let value = (p1 - p2).abs();

    value.min(1.0 - value)
}

/// `value mod 1.0`, always returning a result in `[0, 1)`.
pub fn positive_modulo(value: f32, modulus: f32) -> f32 {
    ((value % modulus) + modulus) % modulus
}

/// Converts a polar coordinate (relative to the origin) into a `Vector`.
pub fn radial_to_cartesian(radius: f32, angle_radians: f32) -> Vector {
    Vector::new(radius * angle_radians.cos(), radius * angle_radians.sin())
}
