//! `lift-sim`: the lift bank and its tick loop.
//!
//! # Tick phases
//!
//! ```text
//! tick():
//!   ⓪ Script    : apply scripted calls / panel presses due this tick.
//!   ① Distribute: offer every call without a live assignment to the
//!                 Dispatcher; record the lift it picks.
//!   ② Fulfil    : a live assignment whose lift stands on the call's floor
//!                 with doors open is marked fulfilled.
//!   ③ Advance   : Lift::step for every lift, in roster order.
//!   ④ Clean up  : fulfilled assignments are removed with their calls.
//! ```
//!
//! Fulfilment is checked before lifts advance: doors opened during one tick
//! are seen open by the next tick's check, then closed in its advance phase.
//! Nothing fulfilled survives into the next tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_car::Lift;
//! use lift_core::Call;
//! use lift_sim::SystemBuilder;
//!
//! let mut system = SystemBuilder::new()
//!     .floors(0..=4)
//!     .lift(Lift::new("A", 0))
//!     .build()?;
//! system.add_call(Call::down(3))?;
//! for _ in 0..5 {
//!     system.tick();
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod system;


pub use builder::SystemBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{CallView, LiftView, SystemSnapshot};
pub use system::{System, TickSummary};
