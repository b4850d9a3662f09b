use tracing::{debug, trace};

use crate::error::{OrientationError, Result};
use crate::face::{FaceOrder, FaceSlot, FaceValue};
use crate::math::{up, Rotation, Vector3, FACE_ALIGNMENT_THRESHOLD};

use super::FaceDirectionSet;

/// Reads face values off a rotated die.
///
/// Each of the three reference axes is rotated into world space and projected
/// onto the query axis. The first axis (in value order 1, 2, 3) whose
/// projection exceeds `threshold` in either direction decides the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceClassifier {
    threshold: f64,
    fallback: FaceValue,
}

impl Default for FaceClassifier {
    fn default() -> Self {
        Self {
            threshold: FACE_ALIGNMENT_THRESHOLD,
            fallback: FaceValue::SIX,
        }
    }
}

impl FaceClassifier {
    /// Creates a classifier.
    ///
    /// * `threshold` - Minimum projection onto the query axis, in `(0, 1]`.
    /// * `fallback` - Value reported by [`face_on_top`](Self::face_on_top)
    ///   when no axis crosses the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::InvalidThreshold`] if `threshold` is not a
    /// finite number in `(0, 1]`.
    pub fn new(threshold: f64, fallback: FaceValue) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(OrientationError::InvalidThreshold(threshold).into());
        }
        Ok(Self {
            threshold,
            fallback,
        })
    }

    /// Projection threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Value used when no face is clearly up.
    #[must_use]
    pub fn fallback(&self) -> FaceValue {
        self.fallback
    }

    /// Returns the face pointing along the world-space `axis`, or `None` if no
    /// reference axis is within the threshold of it.
    ///
    /// # Errors
    ///
    /// Returns [`MissingReferenceFrame`](crate::error::OrientationError::MissingReferenceFrame)
    /// if `reference` holds fewer than three directions.
    pub fn face_along(
        &self,
        rotation: &Rotation,
        reference: &[Vector3],
        axis: &Vector3,
    ) -> Result<Option<FaceValue>> {
        let frame = FaceDirectionSet::from_slice(reference)?;
        Ok(self.face_along_frame(rotation, &frame, axis))
    }

    /// Returns the face value pointing up.
    ///
    /// Falls back to the configured value when the die is not resting on a
    /// face.
    ///
    /// # Errors
    ///
    /// Returns [`MissingReferenceFrame`](crate::error::OrientationError::MissingReferenceFrame)
    /// if `reference` holds fewer than three directions.
    pub fn face_on_top(&self, rotation: &Rotation, reference: &[Vector3]) -> Result<FaceValue> {
        let frame = FaceDirectionSet::from_slice(reference)?;
        Ok(self.top_of_frame(rotation, &frame))
    }

    /// Reads the face value on every world-space slot.
    ///
    /// Returns `None` when the die is not resting flat, i.e. some slot has no
    /// face within the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`MissingReferenceFrame`](crate::error::OrientationError::MissingReferenceFrame)
    /// if `reference` holds fewer than three directions.
    pub fn observed_order(
        &self,
        rotation: &Rotation,
        reference: &[Vector3],
    ) -> Result<Option<FaceOrder>> {
        let frame = FaceDirectionSet::from_slice(reference)?;
        let mut raw = [0u8; 6];
        for slot in FaceSlot::ALL {
            match self.face_along_frame(rotation, &frame, &slot.local_normal()) {
                Some(value) => raw[slot.index()] = value.get(),
                None => return Ok(None),
            }
        }
        Ok(FaceOrder::new(raw).ok())
    }

    pub(crate) fn top_of_frame(&self, rotation: &Rotation, frame: &FaceDirectionSet) -> FaceValue {
        self.face_along_frame(rotation, frame, &up())
            .unwrap_or_else(|| {
                debug!(fallback = %self.fallback, "no face within threshold of up");
                self.fallback
            })
    }

    fn face_along_frame(
        &self,
        rotation: &Rotation,
        frame: &FaceDirectionSet,
        axis: &Vector3,
    ) -> Option<FaceValue> {
        for value in [FaceValue::ONE, FaceValue::TWO, FaceValue::THREE] {
            let projection = frame.world_direction(rotation, value).dot(axis);
            trace!(%value, projection, "face projection");
            if projection > self.threshold {
                return Some(value);
            }
            if projection < -self.threshold {
                return Some(value.opposite());
            }
        }
        None
    }
}

/// Returns the face value pointing up using the default classifier.
///
/// # Errors
///
/// Returns [`MissingReferenceFrame`](crate::error::OrientationError::MissingReferenceFrame)
/// if `reference` holds fewer than three directions.
pub fn face_on_top(rotation: &Rotation, reference: &[Vector3]) -> Result<FaceValue> {
    FaceClassifier::default().face_on_top(rotation, reference)
}
