use crate::error::{OrientationError, Result};
use crate::face::{FaceOrder, FaceValue};
use crate::math::{Rotation, Vector3};

/// Local directions of the faces showing 1, 2 and 3 on a die in its rest
/// pose.
///
/// Faces 4, 5 and 6 lie on the same axes with opposite sign, so three
/// vectors fully describe the die's reference frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDirectionSet {
    directions: [Vector3; 3],
}

impl FaceDirectionSet {
    /// Computes the rest-pose frame of a die set up to show `top`.
    #[must_use]
    pub fn for_top_value(top: FaceValue) -> Self {
        let order = FaceOrder::for_value(top);
        let directions = [FaceValue::ONE, FaceValue::TWO, FaceValue::THREE]
            .map(|v| order.slot_of(v).local_normal());
        Self { directions }
    }

    /// Builds a set from caller-held vectors for values 1, 2 and 3.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::MissingReferenceFrame`] if fewer than
    /// three vectors are given.
    pub fn from_slice(directions: &[Vector3]) -> Result<Self> {
        match directions {
            [one, two, three, ..] => Ok(Self {
                directions: [*one, *two, *three],
            }),
            _ => Err(OrientationError::MissingReferenceFrame {
                found: directions.len(),
            }
            .into()),
        }
    }

    /// Local direction of the face showing `value`.
    #[must_use]
    pub fn direction(&self, value: FaceValue) -> Vector3 {
        if value.is_low() {
            self.directions[value.index()]
        } else {
            -self.directions[value.opposite().index()]
        }
    }

    /// World-space direction of the face showing `value` after `rotation`.
    #[must_use]
    pub fn world_direction(&self, rotation: &Rotation, value: FaceValue) -> Vector3 {
        rotation.transform_vector(&self.direction(value))
    }

    /// The three reference vectors, for values 1, 2 and 3 in that order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vector3] {
        &self.directions
    }
}

/// Computes the rest-pose frame for a raw top value.
///
/// # Errors
///
/// Returns [`FaceError::InvalidValue`](crate::error::FaceError::InvalidValue)
/// if `top` is outside `1..=6`.
pub fn compute_face_directions(top: u8) -> Result<FaceDirectionSet> {
    Ok(FaceDirectionSet::for_top_value(FaceValue::new(top)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{DiceError, FaceError};
    use crate::face::FaceSlot;
    use crate::math::{is_axis_aligned_unit, TOLERANCE};

    #[test]
    fn top_one_frame() {
        let set = compute_face_directions(1).unwrap();
        assert_eq!(
            set.as_slice(),
            &[
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn frames_are_orthonormal_and_axis_aligned() {
        for v in FaceValue::ALL {
            let set = FaceDirectionSet::for_top_value(v);
            let d = set.as_slice();
            assert_eq!(d.len(), 3);
            for dir in d {
                assert!(is_axis_aligned_unit(dir), "top {v}: {dir:?}");
            }
            assert!(d[0].dot(&d[1]).abs() < TOLERANCE);
            assert!(d[0].dot(&d[2]).abs() < TOLERANCE);
            assert!(d[1].dot(&d[2]).abs() < TOLERANCE);
        }
    }

    #[test]
    fn high_values_point_opposite_low_values() {
        for top in FaceValue::ALL {
            let set = FaceDirectionSet::for_top_value(top);
            for v in FaceValue::ALL {
                assert_relative_eq!(set.direction(v), -set.direction(v.opposite()));
            }
        }
    }

    #[test]
    fn directions_match_face_order_slots() {
        for top in FaceValue::ALL {
            let order = FaceOrder::for_value(top);
            let set = FaceDirectionSet::for_top_value(top);
            for (slot, value) in order.iter() {
                assert_relative_eq!(set.direction(value), slot.local_normal());
            }
            assert_relative_eq!(set.direction(top), FaceSlot::Top.local_normal());
        }
    }

    #[test]
    fn from_slice_requires_three_vectors() {
        let err = FaceDirectionSet::from_slice(&[Vector3::x(), Vector3::y()]).unwrap_err();
        assert!(matches!(
            err,
            DiceError::Orientation(OrientationError::MissingReferenceFrame { found: 2 })
        ));
        assert!(FaceDirectionSet::from_slice(&[]).is_err());
    }

    #[test]
    fn invalid_top_value_is_rejected() {
        assert!(matches!(
            compute_face_directions(0),
            Err(DiceError::Face(FaceError::InvalidValue(0)))
        ));
    }
}
