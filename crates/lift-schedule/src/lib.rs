//! `lift-schedule`: traffic to feed a lift bank, as data.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event`]       | `ScriptEvent`: a hall call or a panel press              |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<Tick, Vec<ScriptEvent>>`)         |
//! | [`loader`]      | `load_script_csv`, `load_script_reader`                   |
//! | [`traffic`]     | `TrafficGenerator`: seeded random hall calls             |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! A script is what a test would otherwise do by hand between ticks: "at
//! tick 8 someone on floor 2 presses Down; at tick 16 a passenger in lift A
//! presses 5".  The simulation drains the events due at each tick before
//! dispatching.

pub mod error;
pub mod event;
pub mod event_queue;
pub mod loader;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event::ScriptEvent;
pub use event_queue::EventQueue;
pub use loader::{load_script_csv, load_script_reader};
pub use traffic::TrafficGenerator;
