use std::fmt;

use crate::error::FaceError;

/// The pip count shown on one face of a six-sided die.
///
/// Always in `1..=6`. Opposite faces of a die sum to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceValue(u8);

impl FaceValue {
    /// One pip.
    pub const ONE: Self = Self(1);
    /// Two pips.
    pub const TWO: Self = Self(2);
    /// Three pips.
    pub const THREE: Self = Self(3);
    /// Four pips.
    pub const FOUR: Self = Self(4);
    /// Five pips.
    pub const FIVE: Self = Self(5);
    /// Six pips.
    pub const SIX: Self = Self(6);

    /// All six face values in ascending order.
    pub const ALL: [Self; 6] = [
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
    ];

    /// Creates a face value.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::InvalidValue`] if `value` is outside `1..=6`.
    pub fn new(value: u8) -> Result<Self, FaceError> {
        if (1..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FaceError::InvalidValue(i64::from(value)))
        }
    }

    /// Returns the raw pip count.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the value on the face opposite this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self(7 - self.0)
    }

    /// Returns true for 1, 2 and 3, the values whose directions make up a
    /// die's reference frame.
    #[must_use]
    pub fn is_low(self) -> bool {
        self.0 <= 3
    }

    /// Zero-based index, handy for label tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for FaceValue {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for FaceValue {
    type Error = FaceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| FaceError::InvalidValue(value))
            .and_then(Self::new)
    }
}

impl From<FaceValue> for u8 {
    fn from(value: FaceValue) -> Self {
        value.0
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_six() {
        for v in 1..=6u8 {
            assert_eq!(FaceValue::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(FaceValue::new(0), Err(FaceError::InvalidValue(0)));
        assert_eq!(FaceValue::new(7), Err(FaceError::InvalidValue(7)));
        assert_eq!(FaceValue::try_from(-3i64), Err(FaceError::InvalidValue(-3)));
        assert_eq!(
            FaceValue::try_from(300i64),
            Err(FaceError::InvalidValue(300))
        );
    }

    #[test]
    fn opposite_faces_sum_to_seven() {
        for v in FaceValue::ALL {
            assert_eq!(v.get() + v.opposite().get(), 7);
            assert_eq!(v.opposite().opposite(), v);
        }
    }

    #[test]
    fn low_values() {
        let low: Vec<u8> = FaceValue::ALL
            .iter()
            .filter(|v| v.is_low())
            .map(|v| v.get())
            .collect();
        assert_eq!(low, vec![1, 2, 3]);
    }
}
