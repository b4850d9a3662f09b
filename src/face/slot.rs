use crate::math::Vector3;

/// One of the six canonical face positions of a die, in the order used by
/// [`FaceOrder`](super::FaceOrder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSlot {
    /// Facing +z.
    Front = 0,
    /// Facing +x.
    Right = 1,
    /// Facing -z.
    Back = 2,
    /// Facing -x.
    Left = 3,
    /// Facing +y.
    Top = 4,
    /// Facing -y.
    Bottom = 5,
}

impl FaceSlot {
    /// All slots in index order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    /// Returns the slot for a zero-based index, or `None` past 5.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based position of this slot in a face order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot on the opposite side of the die.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Right => Self::Left,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Outward unit normal of this slot in local die space.
    #[must_use]
    pub fn local_normal(self) -> Vector3 {
        match self {
            Self::Front => Vector3::new(0.0, 0.0, 1.0),
            Self::Right => Vector3::new(1.0, 0.0, 0.0),
            Self::Back => Vector3::new(0.0, 0.0, -1.0),
            Self::Left => Vector3::new(-1.0, 0.0, 0.0),
            Self::Top => Vector3::new(0.0, 1.0, 0.0),
            Self::Bottom => Vector3::new(0.0, -1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for (i, slot) in FaceSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(FaceSlot::from_index(i), Some(*slot));
        }
        assert_eq!(FaceSlot::from_index(6), None);
    }

    #[test]
    fn opposite_normals_cancel() {
        for slot in FaceSlot::ALL {
            let sum = slot.local_normal() + slot.opposite().local_normal();
            assert!(sum.norm() < 1e-12, "{slot:?}");
            assert_eq!(slot.opposite().opposite(), slot);
        }
    }
}
