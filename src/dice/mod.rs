mod die;
mod labels;
mod layout;
mod roll;

pub use die::{DieData, DieId};
pub use labels::{FaceLabels, FaceScheme};
pub use layout::{default_position, MAX_DICE};
pub use roll::{DieReading, Impulse, RollConfig, RollOutcome, RollPlanner, RollStart};

use rand::Rng;
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::{DiceSetError, OrientationError, Result};
use crate::face::FaceValue;
use crate::math::{Point3, Rotation};
use crate::orientation::FaceClassifier;

/// Behavior of a [`DiceSet`].
#[derive(Debug, Clone, Default)]
pub struct DiceConfig {
    /// Whether dice can be held back from rolls by selecting them.
    pub can_select: bool,
    /// Per-value labels used to pick each slot's material.
    pub labels: FaceLabels,
    /// Threshold and fallback used when reading settled dice.
    pub classifier: FaceClassifier,
    /// Impulse tuning for [`DiceSet::start_roll`].
    pub roll: RollConfig,
}

/// Caller-owned arena of dice.
///
/// Dice are referenced by [`DieId`] and kept in creation order. The set holds
/// every piece of mutable per-die state (value, selection, rest-pose frame,
/// position) plus whether a roll is in progress.
#[derive(Debug)]
pub struct DiceSet {
    dice: SlotMap<DieId, DieData>,
    order: Vec<DieId>,
    config: DiceConfig,
    planner: RollPlanner,
    rolling: bool,
}

impl DiceSet {
    /// Creates one die per initial value, named `dice1`, `dice2`, ... and
    /// placed at the default layout positions.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not between 1 and 6 values, or if any
    /// value is outside `1..=6`.
    pub fn new(initial_values: &[u8], config: DiceConfig) -> Result<Self> {
        if initial_values.is_empty() || initial_values.len() > MAX_DICE {
            return Err(DiceSetError::InvalidDiceCount(initial_values.len()).into());
        }

        let mut dice = SlotMap::with_key();
        let mut order = Vec::with_capacity(initial_values.len());
        for (i, &raw) in initial_values.iter().enumerate() {
            let value = FaceValue::new(raw)?;
            let die = DieData::new(format!("dice{}", i + 1), value, default_position(i));
            order.push(dice.insert(die));
        }

        Ok(Self {
            dice,
            order,
            planner: RollPlanner::new(config.roll),
            config,
            rolling: false,
        })
    }

    /// Configuration the set was created with.
    #[must_use]
    pub fn config(&self) -> &DiceConfig {
        &self.config
    }

    /// Number of dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; a set holds at least one die.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Die ids in creation order.
    #[must_use]
    pub fn ids(&self) -> &[DieId] {
        &self.order
    }

    /// Current top values in creation order.
    #[must_use]
    pub fn values(&self) -> Vec<FaceValue> {
        self.iter().map(|(_, die)| die.value).collect()
    }

    /// Iterates dice in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DieId, &DieData)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.dice.get(id).map(|die| (id, die)))
    }

    /// Whether a roll has started and not yet settled.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Returns a reference to the die data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn die(&self, id: DieId) -> Result<&DieData> {
        self.dice
            .get(id)
            .ok_or_else(|| DiceSetError::DieNotFound(format!("{id:?}")).into())
    }

    fn die_mut(&mut self, id: DieId) -> Result<&mut DieData> {
        self.dice
            .get_mut(id)
            .ok_or_else(|| DiceSetError::DieNotFound(format!("{id:?}")).into())
    }

    /// Looks a die up by its scene name.
    ///
    /// # Errors
    ///
    /// Returns an error if no die has that name.
    pub fn find(&self, name: &str) -> Result<DieId> {
        self.iter()
            .find(|(_, die)| die.name == name)
            .map(|(id, _)| id)
            .ok_or_else(|| {
                warn!(name, "unable to find die");
                DiceSetError::DieNotFound(name.to_owned()).into()
            })
    }

    /// Whether a die is held back from rolls.
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn is_selected(&self, id: DieId) -> Result<bool> {
        Ok(self.die(id)?.selected)
    }

    /// Flips a die's selection and returns the new state.
    ///
    /// Does nothing when selection is disabled or while dice are rolling.
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn toggle_selection(&mut self, id: DieId) -> Result<bool> {
        let allowed = self.config.can_select && !self.rolling;
        let die = self.die_mut(id)?;
        if allowed {
            die.selected = !die.selected;
            debug!(name = %die.name, selected = die.selected, "toggled selection");
        }
        Ok(die.selected)
    }

    /// Shows `value` on a die without rolling, replacing its rest-pose frame.
    ///
    /// Later rotations are measured against the new frame, so the caller
    /// resets the die node's rotation to identity, as for
    /// [`arrange`](Self::arrange).
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn set_value(&mut self, id: DieId, value: FaceValue) -> Result<()> {
        self.die_mut(id)?.set_value(value);
        Ok(())
    }

    /// Drops a die's rest-pose frame, e.g. when its scene node was replaced
    /// and the rotation no longer relates to the old pose. Classification
    /// fails until the frame is rebuilt by [`set_value`](Self::set_value) or
    /// [`arrange`](Self::arrange).
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn reset_reference(&mut self, id: DieId) -> Result<()> {
        self.die_mut(id)?.reference = None;
        Ok(())
    }

    /// Puts every die back in a rest pose showing its current value.
    ///
    /// Die `i` moves to `positions[i]` when given, otherwise to its default
    /// layout position. The caller resets each node's rotation to identity.
    ///
    /// # Errors
    ///
    /// Returns [`DiceSetError::RollInProgress`] while dice are rolling.
    pub fn arrange(&mut self, positions: Option<&[Point3]>) -> Result<()> {
        if self.rolling {
            return Err(DiceSetError::RollInProgress.into());
        }
        for (i, &id) in self.order.iter().enumerate() {
            let position = positions
                .and_then(|p| p.get(i))
                .copied()
                .unwrap_or_else(|| default_position(i));
            if let Some(die) = self.dice.get_mut(id) {
                die.set_value(die.value);
                die.position = position;
            }
        }
        debug!(count = self.order.len(), "arranged dice");
        Ok(())
    }

    /// Labels for each slot of a die, in front/right/back/left/top/bottom
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set.
    pub fn slot_labels(&self, id: DieId) -> Result<[String; 6]> {
        let die = self.die(id)?;
        Ok(self.config.labels.slot_labels(die.value, die.selected))
    }

    /// Classifies the face on top of one die.
    ///
    /// # Errors
    ///
    /// Returns an error if the die is not in this set or has no rest-pose
    /// frame.
    pub fn face_on_top(&self, id: DieId, rotation: &Rotation) -> Result<FaceValue> {
        let die = self.die(id)?;
        let frame = die
            .reference
            .as_ref()
            .ok_or(OrientationError::MissingReferenceFrame { found: 0 })?;
        Ok(self.config.classifier.top_of_frame(rotation, frame))
    }

    /// Starts a roll of every unselected die.
    ///
    /// # Errors
    ///
    /// Returns [`DiceSetError::RollInProgress`] if a roll has not settled yet.
    pub fn start_roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RollStart> {
        if self.rolling {
            return Err(DiceSetError::RollInProgress.into());
        }

        let active: Vec<DieId> = self
            .iter()
            .filter(|(_, die)| !die.selected)
            .map(|(id, _)| id)
            .collect();
        if active.is_empty() {
            debug!("all dice held, roll complete");
            return Ok(RollStart::Complete(RollOutcome {
                values: self.values(),
            }));
        }

        self.rolling = true;
        debug!(active = active.len(), "roll started");
        Ok(RollStart::Rolling(self.planner.plan(rng, &active)))
    }

    /// Feeds one tick of physics state into a running roll.
    ///
    /// Returns `None` while any unselected die is missing from `readings` or
    /// still moving. Once all of them rest, every die with a resting reading
    /// is classified, the values are stored and the roll ends. Held dice
    /// whose reading is not resting keep their value.
    ///
    /// # Errors
    ///
    /// Returns an error if no roll is in progress, if a reading names an
    /// unknown die, or if a die has no rest-pose frame.
    pub fn settle<I>(&mut self, readings: I) -> Result<Option<RollOutcome>>
    where
        I: IntoIterator<Item = DieReading>,
    {
        if !self.rolling {
            return Err(DiceSetError::NotRolling.into());
        }

        let readings: Vec<DieReading> = readings.into_iter().collect();
        for reading in &readings {
            self.die(reading.die)?;
        }

        let all_resting = self
            .iter()
            .filter(|(_, die)| !die.selected)
            .all(|(id, _)| readings.iter().any(|r| r.die == id && r.resting));
        if !all_resting {
            return Ok(None);
        }

        let mut observed = Vec::with_capacity(readings.len());
        for reading in readings.iter().filter(|r| r.resting) {
            observed.push((reading.die, self.face_on_top(reading.die, &reading.rotation)?));
        }
        for (id, value) in observed {
            if let Some(die) = self.dice.get_mut(id) {
                die.value = value;
            }
        }

        self.rolling = false;
        let outcome = RollOutcome {
            values: self.values(),
        };
        debug!(values = ?outcome.raw(), "roll complete");
        Ok(Some(outcome))
    }
}
