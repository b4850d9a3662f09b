use crate::face::FaceValue;
use crate::math::Point3;
use crate::orientation::FaceDirectionSet;

slotmap::new_key_type! {
    /// Unique identifier for a die in a [`DiceSet`](super::DiceSet).
    pub struct DieId;
}

/// Data associated with a single die.
#[derive(Debug, Clone)]
pub struct DieData {
    /// Scene name, `dice1` through `dice6`.
    pub name: String,
    /// Value currently shown on top.
    pub value: FaceValue,
    /// Selected dice are held back from rolls.
    pub selected: bool,
    /// Rest-pose frame the die's rotation is measured against.
    pub reference: Option<FaceDirectionSet>,
    /// Resting position in the tray.
    pub position: Point3,
}

impl DieData {
    /// Creates an unselected die showing `value`, with its rest-pose frame
    /// set up for that value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: FaceValue, position: Point3) -> Self {
        Self {
            name: name.into(),
            value,
            selected: false,
            reference: Some(FaceDirectionSet::for_top_value(value)),
            position,
        }
    }

    /// Shows `value` on top without a roll and rebuilds the rest-pose frame.
    pub fn set_value(&mut self, value: FaceValue) {
        self.value = value;
        self.reference = Some(FaceDirectionSet::for_top_value(value));
    }
}
