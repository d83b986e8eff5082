//! The `System` struct and its tick loop.

use std::collections::{BTreeMap, HashMap};

use lift_car::{Lift, StepAction};
use lift_core::{Call, CallId, FloorRange, LiftIndex, SimConfig, Tick};
use lift_dispatch::{AssignmentTable, CostDispatcher, Dispatcher};
use lift_schedule::{EventQueue, ScriptEvent};
use tracing::{debug, trace, warn};

use crate::{CallView, LiftView, NoopObserver, SimError, SimObserver, SimResult, SystemSnapshot};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What one call to [`System::tick`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// The tick that was processed.
    pub tick:             Tick,
    /// Calls bound to a lift during distribution.
    pub assigned:         usize,
    /// Calls fulfilled and purged.
    pub fulfilled:        usize,
    /// Lifts that changed floor.
    pub moved:            usize,
    /// Calls still pending after clean-up.
    pub pending_calls:    usize,
    /// Pending calls with no live assignment after clean-up.
    pub unassigned_calls: usize,
}

// ── System ────────────────────────────────────────────────────────────────────

/// A bank of lifts serving hall calls and panel requests.
///
/// `System` is the sole owner and mutator of the floor range, the lift
/// roster, the pending calls, and the assignment table.  Every binding
/// between a call and a lift is held as a pair of IDs and resolved through
/// those collections, so two systems never share state and no binding can
/// outlive what it names.
///
/// Create via [`SystemBuilder`][crate::SystemBuilder].
pub struct System<D: Dispatcher = CostDispatcher> {
    pub(crate) config:      SimConfig,
    pub(crate) now:         Tick,
    pub(crate) floors:      FloorRange,
    pub(crate) lifts:       Vec<Lift>,
    pub(crate) lift_ids:    HashMap<String, LiftIndex>,
    /// Pending calls keyed by ID; IDs are issued in arrival order.
    pub(crate) calls:       BTreeMap<CallId, Call>,
    pub(crate) next_call:   CallId,
    pub(crate) assignments: AssignmentTable,
    pub(crate) script:      EventQueue,
    pub(crate) dispatcher:  D,
}

impl<D: Dispatcher> System<D> {
    // ── Requests ──────────────────────────────────────────────────────────

    /// Enqueue a hall call for distribution on the next tick.
    ///
    /// A call identical to one already pending (same floor and direction)
    /// is not queued twice; the pending call's ID is returned.
    ///
    /// # Errors
    ///
    /// Floor outside the served range.
    pub fn add_call(&mut self, call: Call) -> SimResult<CallId> {
        self.floors.check(call.floor)?;

        if let Some((&id, _)) = self.calls.iter().find(|&(_, pending)| *pending == call) {
            trace!(tick = %self.now, call = %call, id = %id, "call already pending");
            return Ok(id);
        }

        let id = self.next_call;
        self.next_call = id.next();
        self.calls.insert(id, call);
        debug!(tick = %self.now, call = %call, id = %id, "call registered");
        Ok(id)
    }

    /// Enqueue several hall calls.
    ///
    /// All calls are validated before any is queued: on error nothing
    /// changes.
    pub fn add_calls<I: IntoIterator<Item = Call>>(&mut self, calls: I) -> SimResult<Vec<CallId>> {
        let calls: Vec<Call> = calls.into_iter().collect();
        for call in &calls {
            self.floors.check(call.floor)?;
        }
        calls.into_iter().map(|call| self.add_call(call)).collect()
    }

    /// Press `floor` on the panel inside lift `lift_id`.
    ///
    /// Goes straight into the lift's request queue in SCAN order; no
    /// dispatch and no assignment.  Returns `false` if the floor was already
    /// requested.
    ///
    /// # Errors
    ///
    /// `UnknownLift` for an ID not in the roster; floor outside the served
    /// range.
    pub fn add_panel_request(&mut self, lift_id: &str, floor: i32) -> SimResult<bool> {
        let index = self.lift_index(lift_id)
            .ok_or_else(|| SimError::UnknownLift(lift_id.to_owned()))?;
        self.floors.check(floor)?;

        let lift  = &mut self.lifts[index.index()];
        let added = lift.request(floor);
        debug!(
            tick = %self.now,
            lift = %lift.id,
            floor,
            queue = ?lift.requests.as_slice(),
            "panel request",
        );
        Ok(added)
    }

    /// Schedule `event` to be applied at the start of `tick`.
    ///
    /// # Errors
    ///
    /// Same validation as applying the event directly.
    pub fn schedule(&mut self, tick: Tick, event: ScriptEvent) -> SimResult<()> {
        self.validate_event(&event)?;
        self.script.push(tick, event);
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickSummary {
        self.tick_with(&mut NoopObserver)
    }

    /// Advance by one tick, reporting to `observer`.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        let now = self.now;
        observer.on_tick_start(now);

        self.apply_script(now);
        let assigned  = self.distribute_calls(now, observer);
        let marked    = self.check_fulfillment();
        let moved     = self.advance_lifts(now);
        let fulfilled = self.cleanup_fulfilled(now, observer);
        debug_assert_eq!(marked, fulfilled);

        let summary = TickSummary {
            tick: now,
            assigned,
            fulfilled,
            moved,
            pending_calls:    self.calls.len(),
            unassigned_calls: self.unassigned_count(),
        };

        self.now = now.next();
        observer.on_tick_end(&summary);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(&self.snapshot());
        }
        summary
    }

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.now < self.config.end_tick() {
            self.tick_with(observer);
        }
        observer.on_sim_end(self.now);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// Tick until [`is_settled`][Self::is_settled] or `max_ticks` have run.
    ///
    /// Returns the number of ticks run, or `None` if the system did not
    /// settle.
    pub fn run_until_settled(&mut self, max_ticks: u64) -> Option<u64> {
        for n in 0..max_ticks {
            if self.is_settled() {
                return Some(n);
            }
            self.tick();
        }
        self.is_settled().then_some(max_ticks)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Ticks completed so far; also the tick the next `tick()` processes.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn floors(&self) -> &FloorRange {
        &self.floors
    }

    /// The roster, in registration order.
    #[inline]
    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn lift(&self, id: &str) -> Option<&Lift> {
        self.lift_index(id).map(|index| &self.lifts[index.index()])
    }

    pub fn lift_index(&self, id: &str) -> Option<LiftIndex> {
        self.lift_ids.get(id).copied()
    }

    /// Pending calls in arrival order.
    pub fn pending_calls(&self) -> impl Iterator<Item = (CallId, &Call)> + '_ {
        self.calls.iter().map(|(&id, call)| (id, call))
    }

    pub fn call(&self, id: CallId) -> Option<&Call> {
        self.calls.get(&id)
    }

    #[inline]
    pub fn is_pending(&self, id: CallId) -> bool {
        self.calls.contains_key(&id)
    }

    #[inline]
    pub fn assignments(&self) -> &AssignmentTable {
        &self.assignments
    }

    /// The lift with a live assignment for `call`.
    pub fn assigned_lift(&self, call: CallId) -> Option<&Lift> {
        self.assignments
            .live_for_call(call)
            .map(|a| &self.lifts[a.lift.index()])
    }

    /// Scripted events not yet applied.
    #[inline]
    pub fn script(&self) -> &EventQueue {
        &self.script
    }

    #[inline]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// No pending calls, no scripted events left, every lift idle.
    pub fn is_settled(&self) -> bool {
        self.calls.is_empty() && self.script.is_empty() && self.lifts.iter().all(Lift::is_idle)
    }

    /// An owned, read-only view of the current state.
    pub fn snapshot(&self) -> SystemSnapshot {
        let lifts = self.lifts
            .iter()
            .map(|lift| LiftView {
                id:         lift.id.clone(),
                floor:      lift.floor,
                doors_open: lift.doors_open,
                requests:   lift.requests.as_slice().to_vec(),
                state:      lift.state(),
            })
            .collect();

        let calls = self.calls
            .iter()
            .map(|(&id, call)| CallView {
                id,
                floor:       call.floor,
                direction:   call.direction,
                assigned_to: self.assigned_lift(id).map(|lift| lift.id.clone()),
            })
            .collect();

        SystemSnapshot {
            tick:   self.now,
            floors: self.floors,
            lifts,
            calls,
        }
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Phase 0: apply scripted events due at `now`.
    fn apply_script(&mut self, now: Tick) {
        for event in self.script.drain_due(now) {
            let result = match &event {
                ScriptEvent::Call(call)            => self.add_call(*call).map(drop),
                ScriptEvent::Panel { lift, floor } => self.add_panel_request(lift, *floor).map(drop),
            };
            // Validated when scheduled; only reachable if the roster or
            // floors could change afterwards.
            if let Err(e) = result {
                warn!(tick = %now, event = %event, error = %e, "scripted event rejected");
            }
        }
    }

    /// Phase 1: offer every call without a live assignment to the dispatcher.
    fn distribute_calls<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let waiting: Vec<(CallId, Call)> = self.calls
            .iter()
            .filter(|&(&id, _)| !self.assignments.is_assigned(id))
            .map(|(&id, &call)| (id, call))
            .collect();

        let mut assigned = 0;
        for (id, call) in waiting {
            match self.dispatcher.select(&call, &self.lifts, &self.floors) {
                Some(index) if index.index() < self.lifts.len() => {
                    self.assignments.assign(id, index);
                    let lift = &self.lifts[index.index()];
                    debug!(tick = %now, call = %call, id = %id, lift = %lift.id, "call assigned");
                    observer.on_assigned(now, id, &lift.id);
                    assigned += 1;
                }
                Some(index) => {
                    warn!(tick = %now, call = %call, index = %index, "dispatcher chose a lift outside the roster");
                }
                None => {
                    trace!(tick = %now, call = %call, id = %id, "no lift available, retrying next tick");
                }
            }
        }
        assigned
    }

    /// Phase 2: a lift standing on its call's floor with doors open has
    /// served it.
    fn check_fulfillment(&mut self) -> usize {
        let lifts = &self.lifts;
        let calls = &self.calls;
        self.assignments
            .mark_fulfilled_where(|a| {
                let lift = &lifts[a.lift.index()];
                calls
                    .get(&a.call)
                    .is_some_and(|call| lift.doors_open && lift.floor == call.floor)
            })
            .len()
    }

    /// Phase 3: step every lift once, in roster order.
    fn advance_lifts(&mut self, now: Tick) -> usize {
        let mut moved = 0;
        for i in 0..self.lifts.len() {
            let index = LiftIndex(i as u32);
            let floor = self.lifts[i].floor;

            let mut pickup_here = false;
            let mut call_floor  = None;
            for assignment in self.assignments.live_for_lift(index) {
                if let Some(call) = self.calls.get(&assignment.call) {
                    pickup_here |= call.floor == floor;
                    call_floor.get_or_insert(call.floor);
                }
            }

            let lift   = &mut self.lifts[i];
            let action = lift.step(pickup_here, call_floor);
            if action != StepAction::Stayed {
                trace!(tick = %now, lift = %lift.id, action = ?action, "lift stepped");
            }
            if action.moved() {
                moved += 1;
            }
        }
        moved
    }

    /// Phase 4: purge fulfilled assignments together with their calls.
    fn cleanup_fulfilled<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let done = self.assignments.drain_fulfilled();
        for assignment in &done {
            let lift = &self.lifts[assignment.lift.index()];
            if let Some(call) = self.calls.remove(&assignment.call) {
                debug!(tick = %now, call = %call, id = %assignment.call, lift = %lift.id, "call fulfilled");
            }
            observer.on_fulfilled(now, assignment.call, &lift.id);
        }
        done.len()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn unassigned_count(&self) -> usize {
        self.calls
            .keys()
            .filter(|&&id| !self.assignments.is_assigned(id))
            .count()
    }

    pub(crate) fn validate_event(&self, event: &ScriptEvent) -> SimResult<()> {
        if let ScriptEvent::Panel { lift, .. } = event {
            if self.lift_index(lift).is_none() {
                return Err(SimError::UnknownLift(lift.clone()));
            }
        }
        self.floors.check(event.floor())?;
        Ok(())
    }
}
