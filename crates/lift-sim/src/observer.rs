//! Simulation observer trait for progress reporting and data collection.

use lift_core::{CallId, Tick};

use crate::{SystemSnapshot, TickSummary};

/// Callbacks invoked by [`System::tick_with`][crate::System::tick_with] and
/// [`System::run`][crate::System::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see the system between phases
/// but can never mutate it.
///
/// # Example: fulfilment counter
///
/// ```rust,ignore
/// struct Served(usize);
///
/// impl SimObserver for Served {
///     fn on_fulfilled(&mut self, _tick: Tick, _call: CallId, _lift: &str) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A call was bound to lift `lift` during distribution.
    fn on_assigned(&mut self, _tick: Tick, _call: CallId, _lift: &str) {}

    /// A fulfilled call was purged together with its assignment.
    fn on_fulfilled(&mut self, _tick: Tick, _call: CallId, _lift: &str) {}

    /// Called once the tick's clean-up phase has finished.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called after every `config.output_interval_ticks` ticks with a
    /// read-only view of the whole system.
    fn on_snapshot(&mut self, _snapshot: &SystemSnapshot) {}

    /// Called once after the final tick of [`System::run`][crate::System::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
