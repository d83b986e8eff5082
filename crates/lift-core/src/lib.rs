//! `lift-core`: foundational types for the lift bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CallId`, `LiftIndex`                                 |
//! | [`direction`]   | `Direction`, `Call`                                   |
//! | [`floors`]      | `FloorRange`: the validated set of served floors     |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng` (seeded traffic generation)                  |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod floors;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Call, Direction};
pub use error::{LiftError, LiftResult};
pub use floors::FloorRange;
pub use ids::{CallId, LiftIndex};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
