//! `CostDispatcher`: the default three-tier policy.
//!
//! Cost of lift `L` for a call at floor `f`:
//!
//! ```text
//! cost = |L.floor - f| + (1 if L.doors_open else 0)
//! ```
//!
//! Tiers, best first:
//!
//! | Tier            | Qualifies                                              |
//! |-----------------|--------------------------------------------------------|
//! | `Closest`       | travelling in the call's direction, cost below ceiling |
//! | `SameDirection` | travelling in the call's direction                     |
//! | `Idle`          | no requests, doors closed                              |
//!
//! The ceiling is the number of served floors, one more than the longest
//! possible trip.  Ties inside a tier go to the earliest lift in the roster.

use lift_car::Lift;
use lift_core::{Call, FloorRange, LiftIndex};

use crate::Dispatcher;

/// Which tier produced a selection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Closest,
    SameDirection,
    Idle,
}

/// Lowest-cost same-direction lift, then any same-direction lift, then any
/// idle lift.
#[derive(Copy, Clone, Debug, Default)]
pub struct CostDispatcher;

impl CostDispatcher {
    /// Like [`Dispatcher::select`], also reporting the tier that won.
    pub fn rank(
        &self,
        call:   &Call,
        lifts:  &[Lift],
        floors: &FloorRange,
    ) -> Option<(LiftIndex, Tier)> {
        let ceiling = floors.len() as u32;

        let mut closest:        Option<(LiftIndex, u32)> = None;
        let mut same_direction: Option<LiftIndex>        = None;
        let mut idle:           Option<LiftIndex>        = None;

        for (i, lift) in lifts.iter().enumerate() {
            let index = LiftIndex(i as u32);

            if lift.direction() == Some(call.direction) {
                same_direction.get_or_insert(index);
                let cost = lift.cost_to(call.floor);
                // Strict `<` keeps the earliest lift on ties.
                if cost < closest.map_or(ceiling, |(_, best)| best) {
                    closest = Some((index, cost));
                }
            }
            if lift.is_idle() {
                idle.get_or_insert(index);
            }
        }

        closest
            .map(|(index, _)| (index, Tier::Closest))
            .or(same_direction.map(|index| (index, Tier::SameDirection)))
            .or(idle.map(|index| (index, Tier::Idle)))
    }
}

impl Dispatcher for CostDispatcher {
    fn select(&self, call: &Call, lifts: &[Lift], floors: &FloorRange) -> Option<LiftIndex> {
        self.rank(call, lifts, floors).map(|(index, _)| index)
    }
}
