//! Face orientation for six-sided dice.
//!
//! [`face`] holds the face-order table, [`orientation`] turns it into rest-pose
//! frames and reads the top face back off a rotated die, and [`dice`] keeps the
//! per-die state a dice tray needs between physics ticks.

pub mod dice;
pub mod error;
pub mod face;
pub mod math;
pub mod orientation;

pub use dice::{DiceConfig, DiceSet, DieId};
pub use error::{DiceError, Result};
pub use face::{face_order, FaceOrder, FaceSlot, FaceValue};
pub use orientation::{compute_face_directions, face_on_top, FaceClassifier, FaceDirectionSet};
