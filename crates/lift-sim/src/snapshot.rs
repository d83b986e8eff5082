//! Read-only views of system state for renderers and output writers.
//!
//! A snapshot is an owned copy taken between ticks, so consumers can keep it
//! as long as they like without holding a borrow on the system.

use lift_car::LiftState;
use lift_core::{CallId, Direction, FloorRange, Tick};

/// One lift as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftView {
    pub id:         String,
    pub floor:      i32,
    pub doors_open: bool,
    /// Panel requests in service order.
    pub requests:   Vec<i32>,
    pub state:      LiftState,
}

/// One pending hall call as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallView {
    pub id:          CallId,
    pub floor:       i32,
    pub direction:   Direction,
    /// ID of the lift with a live assignment for this call.
    pub assigned_to: Option<String>,
}

impl CallView {
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

/// The whole system between two ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemSnapshot {
    /// Ticks completed when the view was taken.
    pub tick:   Tick,
    pub floors: FloorRange,
    /// Lifts in roster order.
    pub lifts:  Vec<LiftView>,
    /// Pending calls in arrival order.
    pub calls:  Vec<CallView>,
}

impl SystemSnapshot {
    pub fn lift(&self, id: &str) -> Option<&LiftView> {
        self.lifts.iter().find(|l| l.id == id)
    }

    /// Pending calls at `floor`.
    pub fn calls_at(&self, floor: i32) -> impl Iterator<Item = &CallView> + '_ {
        self.calls.iter().filter(move |c| c.floor == floor)
    }

    /// Pending calls no lift has taken yet.
    pub fn unassigned(&self) -> impl Iterator<Item = &CallView> + '_ {
        self.calls.iter().filter(|c| !c.is_assigned())
    }
}
