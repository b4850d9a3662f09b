use thiserror::Error;

/// Top-level error type for the dice orientation engine.
#[derive(Debug, Error)]
pub enum DiceError {
    #[error(transparent)]
    Face(#[from] FaceError),

    #[error(transparent)]
    Orientation(#[from] OrientationError),

    #[error(transparent)]
    DiceSet(#[from] DiceSetError),
}

/// Errors related to face values and face orders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaceError {
    #[error("face value {0} is out of range [1, 6]")]
    InvalidValue(i64),

    #[error("invalid face order: {0}")]
    InvalidOrder(String),
}

/// Errors related to classifying a die's orientation.
#[derive(Debug, Error, PartialEq)]
pub enum OrientationError {
    #[error("missing reference frame: expected 3 face directions, found {found}")]
    MissingReferenceFrame { found: usize },

    #[error("classification threshold {0} is out of range (0, 1]")]
    InvalidThreshold(f64),
}

/// Errors related to the caller-owned set of dice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceSetError {
    #[error("die not found: {0}")]
    DieNotFound(String),

    #[error("dice count {0} is out of range [1, 6]")]
    InvalidDiceCount(usize),

    #[error("expected 6 face labels, found {0}")]
    InvalidFaceCount(usize),

    #[error("a roll is already in progress")]
    RollInProgress,

    #[error("no roll is in progress")]
    NotRolling,
}

/// Convenience type alias for results using [`DiceError`].
pub type Result<T> = std::result::Result<T, DiceError>;
