/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Orientation of a die relative to its rest pose.
pub type Rotation = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Cosine of 45 degrees. A face is "along" an axis when its normal is
/// closer than 45 degrees to it.
pub const FACE_ALIGNMENT_THRESHOLD: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// World-space up direction.
#[must_use]
pub fn up() -> Vector3 {
    Vector3::y()
}

/// Returns true if `v` is a unit vector lying on one of the coordinate axes.
#[must_use]
pub fn is_axis_aligned_unit(v: &Vector3) -> bool {
    let ones = v.iter().filter(|c| (c.abs() - 1.0).abs() < TOLERANCE).count();
    let zeros = v.iter().filter(|c| c.abs() < TOLERANCE).count();
    ones == 1 && zeros == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_units() {
        assert!(is_axis_aligned_unit(&Vector3::x()));
        assert!(is_axis_aligned_unit(&-Vector3::z()));
        assert!(!is_axis_aligned_unit(&Vector3::new(1.0, 1.0, 0.0)));
        assert!(!is_axis_aligned_unit(&Vector3::new(0.5, 0.0, 0.0)));
        assert!(!is_axis_aligned_unit(&Vector3::zeros()));
    }

    #[test]
    fn threshold_is_cos_45() {
        let cos45 = std::f64::consts::FRAC_PI_4.cos();
        assert!((FACE_ALIGNMENT_THRESHOLD - cos45).abs() < TOLERANCE);
    }
}
