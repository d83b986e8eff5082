//! Plain data row types written by output backends.

use lift_car::LiftState;
use lift_core::Direction;
use lift_sim::{CallView, LiftView};

/// One lift at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftSnapshotRow {
    pub tick:       u64,
    pub lift_id:    String,
    pub floor:      i32,
    pub doors_open: bool,
    pub state:      LiftState,
    /// Panel requests in service order.
    pub requests:   Vec<i32>,
}

impl LiftSnapshotRow {
    pub fn from_view(tick: u64, view: &LiftView) -> Self {
        Self {
            tick,
            lift_id:    view.id.clone(),
            floor:      view.floor,
            doors_open: view.doors_open,
            state:      view.state,
            requests:   view.requests.clone(),
        }
    }
}

/// One pending hall call at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSnapshotRow {
    pub tick:        u64,
    pub call_id:     u32,
    pub floor:       i32,
    pub direction:   Direction,
    /// Empty while no lift has taken the call.
    pub assigned_to: Option<String>,
}

impl CallSnapshotRow {
    pub fn from_view(tick: u64, view: &CallView) -> Self {
        Self {
            tick,
            call_id:     view.id.0,
            floor:       view.floor,
            direction:   view.direction,
            assigned_to: view.assigned_to.clone(),
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub assigned:         u64,
    pub fulfilled:        u64,
    pub moved:            u64,
    pub pending_calls:    u64,
    pub unassigned_calls: u64,
}
