//! A single lift car.

use lift_core::Direction;

use crate::{LiftState, RequestQueue, StepAction};

/// One lift: where it is, whether its doors are open, and the floors
/// requested from its panel in service order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lift {
    /// Unique within a roster.
    pub id: String,

    pub floor: i32,

    /// Panel requests in SCAN service order (see [`RequestQueue`]).
    pub requests: RequestQueue,

    pub doors_open: bool,
}

impl Lift {
    /// An idle lift with closed doors at `floor`.
    pub fn new(id: impl Into<String>, floor: i32) -> Self {
        Self {
            id:         id.into(),
            floor,
            requests:   RequestQueue::new(),
            doors_open: false,
        }
    }

    /// Replace the request queue; the floors are re-ordered for the lift's
    /// current floor.
    pub fn with_requests<I: IntoIterator<Item = i32>>(mut self, floors: I) -> Self {
        self.requests = RequestQueue::from_floors(self.floor, floors);
        self
    }

    pub fn with_doors_open(mut self, open: bool) -> Self {
        self.doors_open = open;
        self
    }

    /// Direction of travel derived from the request queue.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.requests.direction(self.floor)
    }

    /// No pending requests and doors closed.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.requests.is_empty() && !self.doors_open
    }

    #[inline]
    pub fn is_on_requested_floor(&self) -> bool {
        self.requests.head() == Some(self.floor)
    }

    /// Dispatch cost to reach `floor`: distance plus one if the doors still
    /// have to close.
    #[inline]
    pub fn cost_to(&self, floor: i32) -> u32 {
        self.floor.abs_diff(floor) + u32::from(self.doors_open)
    }

    pub fn state(&self) -> LiftState {
        if self.doors_open {
            return LiftState::DoorsOpen;
        }
        if self.is_on_requested_floor() {
            return LiftState::Arriving;
        }
        self.direction()
            .map_or(LiftState::Idle, LiftState::from_direction)
    }

    /// Add a floor request in SCAN order.  Returns `false` if it was
    /// already queued.
    pub fn request(&mut self, floor: i32) -> bool {
        self.requests.insert(self.floor, floor)
    }

    /// Advance this lift by one tick.
    ///
    /// `pickup_here`: a live call committed to this lift waits on the
    /// current floor.  `call_floor`: floor of the call this lift should head
    /// for once it has no requests of its own.
    pub fn step(&mut self, pickup_here: bool, call_floor: Option<i32>) -> StepAction {
        if self.doors_open {
            self.doors_open = false;
            return StepAction::ClosedDoors;
        }

        if self.is_on_requested_floor() {
            self.requests.pop_head();
            self.doors_open = true;
            return StepAction::ServedRequest(self.floor);
        }

        // Hall pickups never pop a panel request.
        if pickup_here {
            self.doors_open = true;
            return StepAction::PickedUp(self.floor);
        }

        let heading = if self.requests.is_empty() {
            call_floor.and_then(|target| Direction::towards(self.floor, target))
        } else {
            self.direction()
        };

        match heading {
            Some(direction) => {
                let from = self.floor;
                self.floor += direction.step();
                StepAction::Moved { from, to: self.floor }
            }
            None => StepAction::Stayed,
        }
    }
}
