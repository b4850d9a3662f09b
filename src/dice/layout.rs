use crate::math::Point3;

/// Default resting positions on the tray floor, one per die slot.
const DEFAULT_POSITIONS: [[f64; 3]; 6] = [
    [-0.5, 0.0, -0.5],
    [0.5, 0.0, -0.5],
    [-0.5, 0.0, 0.5],
    [0.5, 0.0, 0.5],
    [0.0, 0.0, -0.5],
    [0.0, 0.0, 0.5],
];

/// Maximum number of dice the default layout has room for.
pub const MAX_DICE: usize = DEFAULT_POSITIONS.len();

/// Returns the default position of the die at `index`, wrapping past the
/// last slot.
#[must_use]
pub fn default_position(index: usize) -> Point3 {
    let [x, y, z] = DEFAULT_POSITIONS[index % MAX_DICE];
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_distinct_and_on_floor() {
        for i in 0..MAX_DICE {
            let p = default_position(i);
            assert!(p.y.abs() < 1e-12);
            for j in (i + 1)..MAX_DICE {
                assert!((p - default_position(j)).norm() > 0.4, "{i} vs {j}");
            }
        }
    }
}
