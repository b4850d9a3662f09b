use std::f64::consts::FRAC_PI_8;

use rand::Rng;

use crate::face::FaceValue;
use crate::math::{Point3, Rotation, Vector3};

use super::DieId;

/// Tuning for the impulses that start a roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollConfig {
    /// Vertical component of every impulse.
    pub lift: f64,
    /// Horizontal impulse per random step.
    pub step: f64,
    /// Random steps are drawn from `1..=max_steps`.
    pub max_steps: u32,
    /// Point of application in the die's local space, off-center so the die
    /// spins.
    pub offset: Point3,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            lift: 8.0,
            step: FRAC_PI_8,
            max_steps: 4,
            offset: Point3::new(0.3, 0.3, 0.3),
        }
    }
}

/// An impulse for the physics engine to apply to one die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    /// Die to push.
    pub die: DieId,
    /// Impulse vector in world space.
    pub force: Vector3,
    /// Point of application in the die's local space.
    pub offset: Point3,
}

/// Plans roll impulses, alternating the horizontal direction each roll so
/// successive rolls do not pile the dice into one corner.
#[derive(Debug, Clone)]
pub struct RollPlanner {
    config: RollConfig,
    direction: f64,
}

impl RollPlanner {
    /// Creates a planner whose first roll pushes towards +x/+z.
    #[must_use]
    pub fn new(config: RollConfig) -> Self {
        Self {
            config,
            direction: 1.0,
        }
    }

    /// Sign applied to the horizontal components of the next roll.
    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Returns one impulse per die and flips the direction for the next roll.
    pub fn plan<R: Rng + ?Sized>(&mut self, rng: &mut R, dice: &[DieId]) -> Vec<Impulse> {
        let max_steps = self.config.max_steps.max(1);
        let impulses = dice
            .iter()
            .map(|&die| {
                let x = f64::from(rng.random_range(1..=max_steps));
                let z = f64::from(rng.random_range(1..=max_steps));
                Impulse {
                    die,
                    force: Vector3::new(
                        self.direction * x * self.config.step,
                        self.config.lift,
                        self.direction * z * self.config.step,
                    ),
                    offset: self.config.offset,
                }
            })
            .collect();
        self.direction = -self.direction;
        impulses
    }
}

/// State of one die reported by the physics engine for a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieReading {
    /// Die the reading belongs to.
    pub die: DieId,
    /// Orientation relative to the die's rest pose.
    pub rotation: Rotation,
    /// Whether the physics engine considers the die at rest.
    pub resting: bool,
}

impl DieReading {
    /// Creates a reading for one tick.
    #[must_use]
    pub fn new(die: DieId, rotation: Rotation, resting: bool) -> Self {
        Self {
            die,
            rotation,
            resting,
        }
    }
}

/// Values of all dice, in die order, once a roll has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Top value of each die.
    pub values: Vec<FaceValue>,
}

impl RollOutcome {
    /// Raw pip counts, in die order.
    #[must_use]
    pub fn raw(&self) -> Vec<u8> {
        self.values.iter().map(|v| v.get()).collect()
    }
}

/// Result of starting a roll.
#[derive(Debug, Clone, PartialEq)]
pub enum RollStart {
    /// Impulses to apply; the roll finishes in a later
    /// [`settle`](super::DiceSet::settle).
    Rolling(Vec<Impulse>),
    /// Every die was held, so the roll finished without moving anything.
    Complete(RollOutcome),
}
