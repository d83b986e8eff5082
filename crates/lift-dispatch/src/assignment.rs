//! The binding between pending calls and the lifts committed to them.

use lift_core::{CallId, LiftIndex};

/// "Lift `lift` is committed to answering call `call`."
///
/// Both sides are stable identifiers, resolved through the owning system's
/// collections when used.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub call:      CallId,
    pub lift:      LiftIndex,
    pub fulfilled: bool,
}

impl Assignment {
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.fulfilled
    }
}

/// All current assignments, in creation order.
///
/// Holds at most one live (unfulfilled) assignment per call.  Fulfilled
/// entries stay until [`drain_fulfilled`][Self::drain_fulfilled] removes them
/// together with their calls.
#[derive(Clone, Debug, Default)]
pub struct AssignmentTable {
    entries: Vec<Assignment>,
}

impl AssignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `lift` to `call`.
    ///
    /// Returns `false` and changes nothing if `call` already has a live
    /// assignment.
    pub fn assign(&mut self, call: CallId, lift: LiftIndex) -> bool {
        if self.is_assigned(call) {
            return false;
        }
        self.entries.push(Assignment { call, lift, fulfilled: false });
        true
    }

    /// The live assignment for `call`, if any.
    pub fn live_for_call(&self, call: CallId) -> Option<&Assignment> {
        self.entries.iter().find(|a| a.call == call && a.is_live())
    }

    #[inline]
    pub fn is_assigned(&self, call: CallId) -> bool {
        self.live_for_call(call).is_some()
    }

    /// Live assignments naming `lift`, oldest first.
    pub fn live_for_lift(&self, lift: LiftIndex) -> impl Iterator<Item = &Assignment> + '_ {
        self.entries
            .iter()
            .filter(move |a| a.lift == lift && a.is_live())
    }

    /// Mark every live assignment for which `served` returns `true` as
    /// fulfilled.  Returns the newly fulfilled assignments.
    pub fn mark_fulfilled_where<F>(&mut self, mut served: F) -> Vec<Assignment>
    where
        F: FnMut(&Assignment) -> bool,
    {
        let mut newly = Vec::new();
        for entry in self.entries.iter_mut().filter(|a| a.is_live()) {
            if served(entry) {
                entry.fulfilled = true;
                newly.push(*entry);
            }
        }
        newly
    }

    /// Remove and return every fulfilled assignment.
    pub fn drain_fulfilled(&mut self) -> Vec<Assignment> {
        let (done, live): (Vec<_>, Vec<_>) = self.entries.drain(..).partition(|a| a.fulfilled);
        self.entries = live;
        done
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
