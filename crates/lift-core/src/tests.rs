//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CallId, LiftIndex};

    #[test]
    fn index_roundtrip() {
        let id = LiftIndex(3);
        assert_eq!(id.index(), 3);
        assert_eq!(LiftIndex::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn call_ids_are_sequential() {
        assert_eq!(CallId(0).next(), CallId(1));
        assert!(CallId(1) < CallId(2));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CallId::INVALID.0, u32::MAX);
        assert_eq!(LiftIndex::default(), LiftIndex::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(CallId(7).to_string(), "CallId(7)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Call, Direction};

    #[test]
    fn towards() {
        assert_eq!(Direction::towards(2, 5), Some(Direction::Up));
        assert_eq!(Direction::towards(5, 2), Some(Direction::Down));
        assert_eq!(Direction::towards(3, 3), None);
    }

    #[test]
    fn opposite_and_step() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.step(), -1);
    }

    #[test]
    fn call_display() {
        assert_eq!(Call::down(3).to_string(), "down@3");
    }
}

#[cfg(test)]
mod floors {
    use crate::{FloorRange, LiftError};

    #[test]
    fn builds_from_unordered_list() {
        let r = FloorRange::from_floors([3, 0, 2, 1, 4, 2]).unwrap();
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.highest(), 4);
        assert_eq!(r.len(), 5);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn basement_floors_allowed() {
        let r = FloorRange::from_floors(-2..=3).unwrap();
        assert!(r.contains(-2));
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(FloorRange::from_floors(Vec::<i32>::new()), Err(LiftError::EmptyFloorRange));
    }

    #[test]
    fn gap_rejected() {
        assert_eq!(
            FloorRange::from_floors([0, 1, 3]),
            Err(LiftError::NonContiguousFloors { below: 1, above: 3 }),
        );
    }

    #[test]
    fn check_reports_bounds() {
        let r = FloorRange::from_floors(0..=4).unwrap();
        assert_eq!(r.check(4), Ok(4));
        let err = r.check(5).unwrap_err();
        assert_eq!(err, LiftError::FloorOutOfRange { floor: 5, lowest: 0, highest: 4 });
        assert_eq!(err.to_string(), "floor 5 is outside the served range 0..=4");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn snapshot_cadence() {
        let cfg = SimConfig { total_ticks: 10, seed: 1, output_interval_ticks: 3 };
        assert!(cfg.is_snapshot_tick(Tick(0)));
        assert!(!cfg.is_snapshot_tick(Tick(4)));
        assert!(cfg.is_snapshot_tick(Tick(6)));
        assert_eq!(cfg.end_tick(), Tick(10));

        let off = SimConfig { output_interval_ticks: 0, ..cfg };
        assert!(!off.is_snapshot_tick(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let xs: Vec<i32> = (0..16).map(|_| a.gen_range(0..100)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let xs: Vec<u32> = (0..8).map(|_| c1.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| c2.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
