use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("lift {0:?} is not in the roster")]
    UnknownLift(String),

    #[error("lift {0:?} is registered more than once")]
    DuplicateLift(String),

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Floor(#[from] LiftError),
}

impl SimError {
    /// `true` for a floor outside the served range.
    pub fn is_floor_out_of_range(&self) -> bool {
        matches!(self, SimError::Floor(LiftError::FloorOutOfRange { .. }))
    }
}

pub type SimResult<T> = Result<T, SimError>;
