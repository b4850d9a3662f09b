use crate::error::{FaceError, Result};
use crate::math::Vector3;

use super::{FaceSlot, FaceValue};

const V1: FaceValue = FaceValue::ONE;
const V2: FaceValue = FaceValue::TWO;
const V3: FaceValue = FaceValue::THREE;
const V4: FaceValue = FaceValue::FOUR;
const V5: FaceValue = FaceValue::FIVE;
const V6: FaceValue = FaceValue::SIX;

/// Face orders indexed by `top value - 1`, slots in
/// front/right/back/left/top/bottom order.
///
/// The rows fix the chirality each rendering asset set is textured against,
/// so they must not be regenerated from a single canonical die.
#[rustfmt::skip]
const FACE_ORDERS: [[FaceValue; 6]; 6] = [
    [V2, V3, V5, V4, V1, V6],
    [V1, V4, V6, V3, V2, V5],
    [V1, V2, V6, V5, V3, V4],
    [V6, V2, V1, V5, V4, V3],
    [V4, V6, V3, V1, V5, V2],
    [V3, V2, V4, V5, V6, V1],
];

/// Chirality of the corner where faces 1, 2 and 3 meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// `dir(1) · (dir(2) × dir(3)) > 0`.
    Right,
    /// `dir(1) · (dir(2) × dir(3)) < 0`.
    Left,
}

/// Assignment of the six face values to the six canonical slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceOrder {
    values: [FaceValue; 6],
}

impl FaceOrder {
    /// Creates a face order from raw values in slot order.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range, if the values are not a
    /// permutation of 1..=6, or if opposite slots do not sum to 7.
    pub fn new(raw: [u8; 6]) -> Result<Self> {
        let mut values = [FaceValue::ONE; 6];
        for (slot, &v) in values.iter_mut().zip(raw.iter()) {
            *slot = FaceValue::new(v)?;
        }

        let mut seen = [false; 6];
        for v in values {
            if std::mem::replace(&mut seen[v.index()], true) {
                return Err(FaceError::InvalidOrder(format!("value {v} appears twice")).into());
            }
        }

        let order = Self { values };
        for slot in [FaceSlot::Front, FaceSlot::Right, FaceSlot::Top] {
            let (a, b) = (order.value_at(slot), order.value_at(slot.opposite()));
            if a.opposite() != b {
                return Err(FaceError::InvalidOrder(format!(
                    "{slot:?} ({a}) and {:?} ({b}) do not sum to 7",
                    slot.opposite()
                ))
                .into());
            }
        }
        Ok(order)
    }

    /// Returns the face order that puts `top` on the top slot.
    #[must_use]
    pub fn for_value(top: FaceValue) -> Self {
        Self {
            values: FACE_ORDERS[top.index()],
        }
    }

    /// Returns the value on the given slot.
    #[must_use]
    pub fn value_at(&self, slot: FaceSlot) -> FaceValue {
        self.values[slot.index()]
    }

    /// Returns the slot that carries `value`.
    #[must_use]
    pub fn slot_of(&self, value: FaceValue) -> FaceSlot {
        let index = self
            .values
            .iter()
            .position(|&v| v == value)
            .unwrap_or_default();
        FaceSlot::ALL[index]
    }

    /// Value on the top slot.
    #[must_use]
    pub fn top(&self) -> FaceValue {
        self.value_at(FaceSlot::Top)
    }

    /// Value on the bottom slot.
    #[must_use]
    pub fn bottom(&self) -> FaceValue {
        self.value_at(FaceSlot::Bottom)
    }

    /// Values in slot order.
    #[must_use]
    pub fn values(&self) -> [FaceValue; 6] {
        self.values
    }

    /// Iterates `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceSlot, FaceValue)> + '_ {
        FaceSlot::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Chirality of the 1-2-3 corner in this order.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        let dir = |v: FaceValue| -> Vector3 { self.slot_of(v).local_normal() };
        let triple = dir(FaceValue::ONE).dot(&dir(FaceValue::TWO).cross(&dir(FaceValue::THREE)));
        if triple > 0.0 {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }
}

/// Looks up the face order for a raw top value.
///
/// # Errors
///
/// Returns [`FaceError::InvalidValue`] if `top` is outside `1..=6`.
pub fn face_order(top: u8) -> Result<FaceOrder> {
    Ok(FaceOrder::for_value(FaceValue::new(top)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DiceError;

    fn raw(order: &FaceOrder) -> [u8; 6] {
        order.values().map(FaceValue::get)
    }

    #[test]
    fn table_matches_reference_rows() {
        let expected: [[u8; 6]; 6] = [
            [2, 3, 5, 4, 1, 6],
            [1, 4, 6, 3, 2, 5],
            [1, 2, 6, 5, 3, 4],
            [6, 2, 1, 5, 4, 3],
            [4, 6, 3, 1, 5, 2],
            [3, 2, 4, 5, 6, 1],
        ];
        for (i, row) in expected.iter().enumerate() {
            let top = u8::try_from(i + 1).unwrap();
            assert_eq!(raw(&face_order(top).unwrap()), *row, "top {top}");
        }
    }

    #[test]
    fn top_slot_equals_requested_value() {
        for v in FaceValue::ALL {
            assert_eq!(FaceOrder::for_value(v).top(), v);
        }
    }

    #[test]
    fn opposite_slots_sum_to_seven() {
        for v in FaceValue::ALL {
            let order = FaceOrder::for_value(v);
            for (a, b) in [(0, 2), (1, 3), (4, 5)] {
                let sum = order.values()[a].get() + order.values()[b].get();
                assert_eq!(sum, 7, "top {v}, slots {a}/{b}");
            }
        }
    }

    #[test]
    fn every_row_passes_checked_constructor() {
        for v in FaceValue::ALL {
            let order = FaceOrder::for_value(v);
            assert_eq!(FaceOrder::new(raw(&order)).unwrap(), order);
        }
    }

    #[test]
    fn slot_of_inverts_value_at() {
        for v in FaceValue::ALL {
            let order = FaceOrder::for_value(v);
            for (slot, value) in order.iter() {
                assert_eq!(order.slot_of(value), slot);
            }
        }
    }

    #[test]
    fn out_of_range_top_is_rejected() {
        for top in [0, 7, 255] {
            assert!(matches!(
                face_order(top),
                Err(DiceError::Face(FaceError::InvalidValue(_)))
            ));
        }
    }

    #[test]
    fn constructor_rejects_duplicates() {
        let err = FaceOrder::new([1, 1, 6, 6, 2, 5]).unwrap_err();
        assert!(matches!(err, DiceError::Face(FaceError::InvalidOrder(_))));
    }

    #[test]
    fn constructor_rejects_non_opposite_pairs() {
        // Permutation, but front/back is 1/2.
        let err = FaceOrder::new([1, 3, 2, 4, 5, 6]).unwrap_err();
        assert!(matches!(err, DiceError::Face(FaceError::InvalidOrder(_))));
    }

    #[test]
    fn row_for_five_is_mirror_handed() {
        for v in FaceValue::ALL {
            let expected = if v == FaceValue::FIVE {
                Handedness::Left
            } else {
                Handedness::Right
            };
            assert_eq!(FaceOrder::for_value(v).handedness(), expected, "top {v}");
        }
    }
}
