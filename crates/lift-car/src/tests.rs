//! Unit tests for lift-car.

#[cfg(test)]
mod queue_tests {
    use lift_core::Direction;

    use crate::RequestQueue;

    #[test]
    fn first_request_is_sole_entry() {
        let mut q = RequestQueue::new();
        assert!(q.insert(4, 7));
        assert_eq!(q.as_slice(), &[7]);
        assert_eq!(q.direction(4), Some(Direction::Up));
    }

    #[test]
    fn up_sweep_finishes_before_reversing() {
        let mut q = RequestQueue::from_floors(4, [6]);
        q.insert(4, 2);
        assert_eq!(q.as_slice(), &[6, 2]);
        q.insert(4, 5);
        assert_eq!(q.as_slice(), &[5, 6, 2]);
        q.insert(4, 3);
        assert_eq!(q.as_slice(), &[5, 6, 3, 2]);
    }

    #[test]
    fn down_sweep_finishes_before_reversing() {
        let mut q = RequestQueue::from_floors(4, [3, 7]);
        q.insert(4, 1);
        assert_eq!(q.as_slice(), &[3, 1, 7]);
        q.insert(4, 8);
        assert_eq!(q.as_slice(), &[3, 1, 7, 8]);
        q.insert(4, 6);
        assert_eq!(q.as_slice(), &[3, 1, 6, 7, 8]);
    }

    #[test]
    fn repeated_floor_is_not_queued_twice() {
        let mut q = RequestQueue::from_floors(0, [2, 5]);
        assert!(!q.insert(0, 5));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn head_on_current_floor_stays_first() {
        // Direction comes from 8, not from the 4 the lift is standing at.
        let mut q = RequestQueue::from_floors(4, [4, 8]);
        assert_eq!(q.direction(4), Some(Direction::Up));
        q.insert(4, 2);
        assert_eq!(q.as_slice(), &[4, 8, 2]);
    }

    #[test]
    fn new_floor_decides_direction_when_nothing_else_does() {
        let mut q = RequestQueue::from_floors(4, [4]);
        assert_eq!(q.direction(4), None);
        q.insert(4, 2);
        assert_eq!(q.as_slice(), &[4, 2]);
        assert_eq!(q.direction(4), Some(Direction::Down));
    }

    #[test]
    fn from_floors_normalizes_and_dedups() {
        let q = RequestQueue::from_floors(4, [7, 3, 5, 7]);
        assert_eq!(q.as_slice(), &[5, 7, 3]);
        assert!(q.is_scan_ordered(4));
    }

    #[test]
    fn scan_order_is_relative_to_floor() {
        let q = RequestQueue::from_floors(4, [5, 7, 3]);
        assert!(q.is_scan_ordered(4));
        // Seen from floor 6 the head (5) points down, so 3 should precede 7.
        assert!(!q.is_scan_ordered(6));
    }

    #[test]
    fn pop_head() {
        let mut q = RequestQueue::from_floors(0, [1, 2]);
        assert_eq!(q.pop_head(), Some(1));
        assert_eq!(q.pop_head(), Some(2));
        assert_eq!(q.pop_head(), None);
        assert!(q.is_empty());
    }
}

#[cfg(test)]
mod step_tests {
    use crate::{Lift, LiftState, StepAction};

    #[test]
    fn open_doors_close_and_lift_stays() {
        let mut lift = Lift::new("A", 2).with_requests([5]).with_doors_open(true);
        assert_eq!(lift.step(false, None), StepAction::ClosedDoors);
        assert_eq!(lift.floor, 2);
        assert!(!lift.doors_open);
    }

    #[test]
    fn serves_head_request_on_its_floor() {
        let mut lift = Lift::new("A", 3).with_requests([3, 6]);
        assert_eq!(lift.step(false, None), StepAction::ServedRequest(3));
        assert!(lift.doors_open);
        assert_eq!(lift.requests.as_slice(), &[6]);
    }

    #[test]
    fn pickup_opens_without_popping() {
        let mut lift = Lift::new("A", 3).with_requests([6]);
        assert_eq!(lift.step(true, Some(3)), StepAction::PickedUp(3));
        assert!(lift.doors_open);
        assert_eq!(lift.requests.as_slice(), &[6]);
    }

    #[test]
    fn idle_lift_heads_for_committed_call() {
        let mut lift = Lift::new("A", 0);
        assert_eq!(lift.step(false, Some(3)), StepAction::Moved { from: 0, to: 1 });
        assert_eq!(lift.step(false, Some(3)), StepAction::Moved { from: 1, to: 2 });
    }

    #[test]
    fn requests_take_precedence_over_call_target() {
        let mut lift = Lift::new("A", 4).with_requests([6]);
        assert_eq!(lift.step(false, Some(0)), StepAction::Moved { from: 4, to: 5 });
    }

    #[test]
    fn idle_lift_without_work_stays() {
        let mut lift = Lift::new("A", 4);
        assert_eq!(lift.step(false, None), StepAction::Stayed);
        assert_eq!(lift.state(), LiftState::Idle);
    }

    #[test]
    fn serves_sweep_head_then_reverses() {
        let mut lift = Lift::new("A", 4).with_requests([3, 7]);
        assert_eq!(lift.state(), LiftState::MovingDown);
        assert_eq!(lift.step(false, None), StepAction::Moved { from: 4, to: 3 });
        assert_eq!(lift.state(), LiftState::Arriving);
        assert_eq!(lift.step(false, None), StepAction::ServedRequest(3));
        assert_eq!(lift.state(), LiftState::DoorsOpen);
        assert_eq!(lift.step(false, None), StepAction::ClosedDoors);
        assert_eq!(lift.state(), LiftState::MovingUp);
        assert_eq!(lift.step(false, None), StepAction::Moved { from: 3, to: 4 });
    }

    #[test]
    fn cost_counts_closing_doors() {
        let lift = Lift::new("A", 4);
        assert_eq!(lift.cost_to(1), 3);
        assert_eq!(lift.clone().with_doors_open(true).cost_to(1), 4);
        assert_eq!(lift.cost_to(4), 0);
    }

    #[test]
    fn request_is_scan_inserted() {
        let mut lift = Lift::new("A", 4).with_requests([3, 7]);
        assert!(lift.request(1));
        assert!(!lift.request(7));
        assert_eq!(lift.requests.as_slice(), &[3, 1, 7]);
    }
}

#[cfg(test)]
mod invariant_tests {
    use lift_core::SimRng;

    use crate::Lift;

    /// Random panel presses interleaved with steps: the queue stays in SCAN
    /// order, open doors pin the lift, and every request is served once the
    /// presses stop.
    #[test]
    fn random_traffic_keeps_invariants() {
        for seed in 0..64 {
            let mut rng  = SimRng::new(seed);
            let mut lift = Lift::new("A", rng.gen_range(0..=9));

            for _ in 0..200 {
                if rng.gen_bool(0.3) {
                    lift.request(rng.gen_range(0..=9));
                    assert!(lift.requests.is_scan_ordered(lift.floor), "seed {seed}: {lift:?}");
                }
                let was_open = lift.doors_open;
                let before   = lift.floor;
                lift.step(false, None);
                if was_open {
                    assert_eq!(lift.floor, before, "seed {seed}: moved with doors open");
                }
                assert!(lift.floor.abs_diff(before) <= 1);
                assert!((0..=9).contains(&lift.floor));
                assert!(lift.requests.is_scan_ordered(lift.floor), "seed {seed}: {lift:?}");
            }

            for _ in 0..100 {
                lift.step(false, None);
            }
            assert!(lift.requests.is_empty(), "seed {seed}: {lift:?}");
        }
    }
}
