//! `lift-car`: a single lift, with its position, doors, request queue, and
//! per-tick state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`queue`]   | `RequestQueue`: panel requests kept in SCAN service order        |
//! | [`state`]   | `LiftState` (derived), `StepAction` (what one tick did)           |
//! | [`lift`]    | `Lift` and `Lift::step`                                           |
//!
//! # Movement model
//!
//! Each tick a lift does at most one thing, chosen in priority order:
//!
//! 1. doors open → close them;
//! 2. standing at the head request → pop it and open the doors;
//! 3. a committed hall call waits on this floor → open the doors;
//! 4. no requests but a committed call elsewhere → move one floor toward it;
//! 5. otherwise move one floor toward the next request.
//!
//! Whether a call is committed to the lift is decided by the dispatcher and
//! passed in by the caller; the lift itself knows nothing about calls.

pub mod lift;
pub mod queue;
pub mod state;

#[cfg(test)]
mod tests;

pub use lift::Lift;
pub use queue::RequestQueue;
pub use state::{LiftState, StepAction};
