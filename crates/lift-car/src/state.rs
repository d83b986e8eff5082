//! Derived lift state and per-tick outcomes.

use std::fmt;

use lift_core::Direction;

/// What a lift is doing, derived from its doors and request queue.
///
/// Nothing here is stored on the lift; it is recomputed on demand so it
/// cannot go stale when a request is popped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiftState {
    /// No requests, doors closed.
    Idle,
    /// Doors open this tick; they close on the next one.
    DoorsOpen,
    /// Standing at its head request with doors closed; opens next tick.
    Arriving,
    MovingUp,
    MovingDown,
}

impl LiftState {
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up   => LiftState::MovingUp,
            Direction::Down => LiftState::MovingDown,
        }
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiftState::Idle       => "idle",
            LiftState::DoorsOpen  => "doors_open",
            LiftState::Arriving   => "arriving",
            LiftState::MovingUp   => "moving_up",
            LiftState::MovingDown => "moving_down",
        })
    }
}

/// The single action a lift took during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepAction {
    ClosedDoors,
    /// Popped the head request for this floor and opened the doors.
    ServedRequest(i32),
    /// Opened the doors for a hall call waiting on this floor.
    PickedUp(i32),
    Moved { from: i32, to: i32 },
    Stayed,
}

impl StepAction {
    /// `true` if the lift changed floor.
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, StepAction::Moved { .. })
    }
}
