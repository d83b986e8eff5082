//! Fluent builder for constructing a [`System`].

use std::collections::{BTreeMap, HashMap};

use lift_car::{Lift, RequestQueue};
use lift_core::{CallId, FloorRange, LiftIndex, SimConfig, Tick};
use lift_dispatch::{AssignmentTable, CostDispatcher, Dispatcher};
use lift_schedule::EventQueue;
use tracing::debug;

use crate::{SimError, SimResult, System};

/// Fluent builder for [`System<D>`].
///
/// # Required inputs
///
/// - `.floors(..)`: the served floors; must form a contiguous run.
/// - `.lift(..)` / `.lifts(..)`: at least one lift, unique IDs.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                    |
/// |-------------------|----------------------------|
/// | `.config(c)`      | `SimConfig::default()`     |
/// | `.script(q)`      | Empty `EventQueue`         |
/// | `.dispatcher(d)`  | [`CostDispatcher`]         |
///
/// # Example
///
/// ```rust,ignore
/// let mut system = SystemBuilder::new()
///     .floors(0..=9)
///     .lift(Lift::new("A", 4).with_requests([3, 7]))
///     .lift(Lift::new("B", 4).with_requests([4, 8]))
///     .build()?;
/// system.run(&mut NoopObserver);
/// ```
pub struct SystemBuilder<D: Dispatcher = CostDispatcher> {
    config:     SimConfig,
    floors:     Vec<i32>,
    lifts:      Vec<Lift>,
    script:     EventQueue,
    dispatcher: D,
}

impl SystemBuilder<CostDispatcher> {
    pub fn new() -> Self {
        Self {
            config:     SimConfig::default(),
            floors:     Vec::new(),
            lifts:      Vec::new(),
            script:     EventQueue::new(),
            dispatcher: CostDispatcher,
        }
    }
}

impl Default for SystemBuilder<CostDispatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dispatcher> SystemBuilder<D> {
    /// Add served floors.  Order and duplicates do not matter.
    pub fn floors<I: IntoIterator<Item = i32>>(mut self, floors: I) -> Self {
        self.floors.extend(floors);
        self
    }

    /// Append one lift to the roster.
    pub fn lift(mut self, lift: Lift) -> Self {
        self.lifts.push(lift);
        self
    }

    /// Append several lifts, keeping their order.
    pub fn lifts<I: IntoIterator<Item = Lift>>(mut self, lifts: I) -> Self {
        self.lifts.extend(lifts);
        self
    }

    /// Scripted calls and panel presses, merged with any already supplied.
    pub fn script(mut self, script: EventQueue) -> Self {
        self.script.merge(script);
        self
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap in a different dispatch policy.
    pub fn dispatcher<D2: Dispatcher>(self, dispatcher: D2) -> SystemBuilder<D2> {
        SystemBuilder {
            config:  self.config,
            floors:  self.floors,
            lifts:   self.lifts,
            script:  self.script,
            dispatcher,
        }
    }

    /// Validate inputs and return a ready-to-run [`System`].
    pub fn build(self) -> SimResult<System<D>> {
        let floors = FloorRange::from_floors(self.floors)?;

        if self.lifts.is_empty() {
            return Err(SimError::Config("a system needs at least one lift".into()));
        }

        // ── Validate the roster ───────────────────────────────────────────
        let mut lift_ids = HashMap::with_capacity(self.lifts.len());
        let mut lifts    = Vec::with_capacity(self.lifts.len());
        for (i, mut lift) in self.lifts.into_iter().enumerate() {
            floors.check(lift.floor)?;
            for &floor in &lift.requests {
                floors.check(floor)?;
            }

            let index = LiftIndex::try_from(i)
                .map_err(|_| SimError::Config(format!("too many lifts ({i})")))?;
            if lift_ids.insert(lift.id.clone(), index).is_some() {
                return Err(SimError::DuplicateLift(lift.id));
            }

            // Queues set directly on the struct may not be in SCAN order yet.
            lift.requests = RequestQueue::from_floors(lift.floor, lift.requests.iter().copied());
            lifts.push(lift);
        }

        // ── Validate the script ───────────────────────────────────────────
        let mut system = System {
            config:      self.config,
            now:         Tick::ZERO,
            floors,
            lifts,
            lift_ids,
            calls:       BTreeMap::new(),
            next_call:   CallId(0),
            assignments: AssignmentTable::new(),
            script:      EventQueue::new(),
            dispatcher:  self.dispatcher,
        };
        for (_, event) in self.script.iter() {
            system.validate_event(event)?;
        }
        system.script = self.script;

        debug!(
            floors = %format_args!("{}..={}", floors.lowest(), floors.highest()),
            lifts  = system.lifts.len(),
            events = system.script.len(),
            "system built",
        );
        Ok(system)
    }
}
