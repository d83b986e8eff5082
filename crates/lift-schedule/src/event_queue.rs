//! `EventQueue`: sparse per-tick event schedule.
//!
//! Most ticks carry no input.  Keying by tick means each step only touches
//! the events due now instead of scanning the whole script.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::ScriptEvent;

/// Maps simulation ticks → events to apply at that tick, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: BTreeMap<Tick, Vec<ScriptEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `tick`.
    pub fn push(&mut self, tick: Tick, event: ScriptEvent) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Move every event of `other` into `self`, keeping per-tick order.
    pub fn merge(&mut self, other: EventQueue) {
        for (tick, events) in other.inner {
            self.total += events.len();
            self.inner.entry(tick).or_default().extend(events);
        }
    }

    /// Remove and return all events scheduled at or before `tick`, earliest
    /// first.
    ///
    /// Events left behind by a late start are not lost; they fire on the
    /// first drain that reaches them.
    pub fn drain_due(&mut self, tick: Tick) -> Vec<ScriptEvent> {
        let later = self.inner.split_off(&tick.next());
        let due   = std::mem::replace(&mut self.inner, later);
        let events: Vec<ScriptEvent> = due.into_values().flatten().collect();
        self.total -= events.len();
        events
    }

    /// The earliest tick with at least one event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// The latest scheduled tick.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// All `(tick, event)` pairs in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &ScriptEvent)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&tick, events)| events.iter().map(move |e| (tick, e)))
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one event.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
