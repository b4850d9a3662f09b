use crate::error::{DiceSetError, Result};
use crate::face::{FaceOrder, FaceValue};

/// How the renderer turns a face label into a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceScheme {
    /// Labels name image assets. Selected variants carry an `x` suffix.
    #[default]
    NamedImage,
    /// Labels are drawn as text; selection is shown through color.
    Text,
}

/// Label for each face value, used to pick per-slot materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLabels {
    scheme: FaceScheme,
    faces: [String; 6],
}

impl Default for FaceLabels {
    fn default() -> Self {
        Self {
            scheme: FaceScheme::NamedImage,
            faces: std::array::from_fn(|i| format!("dice{}", i + 1)),
        }
    }
}

impl FaceLabels {
    /// Creates labels for faces 1 through 6, in value order.
    ///
    /// # Errors
    ///
    /// Returns [`DiceSetError::InvalidFaceCount`] unless exactly six labels
    /// are given.
    pub fn new(scheme: FaceScheme, faces: Vec<String>) -> Result<Self> {
        let count = faces.len();
        let faces: [String; 6] = faces
            .try_into()
            .map_err(|_| DiceSetError::InvalidFaceCount(count))?;
        Ok(Self { scheme, faces })
    }

    /// How labels are turned into textures.
    #[must_use]
    pub fn scheme(&self) -> FaceScheme {
        self.scheme
    }

    /// Label of a single face value.
    #[must_use]
    pub fn label(&self, value: FaceValue) -> &str {
        &self.faces[value.index()]
    }

    /// Labels in front/right/back/left/top/bottom order for a die showing
    /// `top`.
    #[must_use]
    pub fn slot_labels(&self, top: FaceValue, selected: bool) -> [String; 6] {
        let order = FaceOrder::for_value(top);
        order.values().map(|value| {
            let label = self.label(value);
            match self.scheme {
                FaceScheme::NamedImage if selected => format!("{label}x"),
                _ => label.to_owned(),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DiceError;

    #[test]
    fn default_labels_follow_face_order() {
        let labels = FaceLabels::default();
        assert_eq!(
            labels.slot_labels(FaceValue::ONE, false),
            ["dice2", "dice3", "dice5", "dice4", "dice1", "dice6"]
        );
    }

    #[test]
    fn selected_images_get_suffix() {
        let labels = FaceLabels::default();
        let slots = labels.slot_labels(FaceValue::SIX, true);
        assert_eq!(slots[4], "dice6x");
        assert!(slots.iter().all(|s| s.ends_with('x')));
    }

    #[test]
    fn text_scheme_ignores_selection() {
        let faces = ["A", "B", "C", "D", "E", "F"].map(String::from).to_vec();
        let labels = FaceLabels::new(FaceScheme::Text, faces).unwrap();
        assert_eq!(
            labels.slot_labels(FaceValue::THREE, true),
            ["A", "B", "F", "E", "C", "D"]
        );
    }

    #[test]
    fn wrong_label_count_is_rejected() {
        let err = FaceLabels::new(FaceScheme::Text, vec!["1".into(); 5]).unwrap_err();
        assert!(matches!(
            err,
            DiceError::DiceSet(DiceSetError::InvalidFaceCount(5))
        ));
    }
}
