//! Unit tests for lift-schedule.

use lift_core::{Call, FloorRange, Tick};

use crate::{EventQueue, ScriptEvent};

fn call_at(floor: i32) -> ScriptEvent {
    ScriptEvent::Call(Call::up(floor))
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = EventQueue::new();
        q.push(Tick(5), call_at(1));
        q.push(Tick(5), call_at(2));
        q.push(Tick(8), call_at(3));
        assert_eq!(q.len(), 3);
        assert_eq!(q.tick_count(), 2);
        assert_eq!(q.next_tick(), Some(Tick(5)));
        assert_eq!(q.last_tick(), Some(Tick(8)));

        assert!(q.drain_due(Tick(4)).is_empty());
        assert_eq!(q.drain_due(Tick(5)), vec![call_at(1), call_at(2)]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_tick(), Some(Tick(8)));
    }

    #[test]
    fn drain_due_catches_up_on_missed_ticks() {
        let mut q = EventQueue::new();
        q.push(Tick(1), call_at(1));
        q.push(Tick(3), call_at(3));
        q.push(Tick(9), call_at(9));
        assert_eq!(q.drain_due(Tick(4)), vec![call_at(1), call_at(3)]);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn merge_keeps_tick_order() {
        let mut a = EventQueue::new();
        a.push(Tick(2), call_at(1));
        let mut b = EventQueue::new();
        b.push(Tick(2), call_at(2));
        b.push(Tick(0), call_at(0));
        a.merge(b);
        let order: Vec<(Tick, i32)> = a.iter().map(|(t, e)| (t, e.floor())).collect();
        assert_eq!(order, vec![(Tick(0), 0), (Tick(2), 1), (Tick(2), 2)]);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_tick(), None);
        assert!(q.drain_due(Tick(100)).is_empty());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use lift_core::Direction;

    use super::*;
    use crate::{ScheduleError, load_script_csv, load_script_reader};

    const SCRIPT: &str = "\
tick,kind,lift,floor,direction
8,call,,2,down
0,call,,5,up
16,panel,A,5,
";

    #[test]
    fn parses_calls_and_panel_presses() {
        let q = load_script_reader(Cursor::new(SCRIPT)).unwrap();
        let events: Vec<_> = q.iter().map(|(t, e)| (t, e.clone())).collect();
        assert_eq!(events, vec![
            (Tick(0),  ScriptEvent::Call(Call::new(5, Direction::Up))),
            (Tick(8),  ScriptEvent::Call(Call::new(2, Direction::Down))),
            (Tick(16), ScriptEvent::panel("A", 5)),
        ]);
    }

    #[test]
    fn tolerates_padding_and_case() {
        let csv = "tick, kind, lift, floor, direction\n3, CALL, , 1, Down\n";
        let q = load_script_reader(Cursor::new(csv)).unwrap();
        assert_eq!(q.iter().next().map(|(_, e)| e.clone()), Some(ScriptEvent::Call(Call::down(1))));
    }

    #[test]
    fn panel_without_lift_is_rejected() {
        let csv = "tick,kind,lift,floor,direction\n0,panel,,3,\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(ref m) if m.contains("line 2")), "{err}");
    }

    #[test]
    fn bad_direction_is_rejected() {
        let csv = "tick,kind,lift,floor,direction\n0,call,,3,sideways\n";
        let err = load_script_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("sideways"), "{err}");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let csv = "tick,kind,lift,floor,direction\n0,teleport,,3,up\n";
        assert!(load_script_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_script_csv(std::path::Path::new("/nonexistent/script.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}

// ── TrafficGenerator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use lift_core::Direction;

    use super::*;
    use crate::TrafficGenerator;

    fn floors() -> FloorRange {
        FloorRange::from_floors(0..=9).unwrap()
    }

    #[test]
    fn same_seed_same_traffic() {
        let a = TrafficGenerator::new(floors(), 0.4, 7).unwrap().generate(200);
        let b = TrafficGenerator::new(floors(), 0.4, 7).unwrap().generate(200);
        let ea: Vec<_> = a.iter().map(|(t, e)| (t, e.clone())).collect();
        let eb: Vec<_> = b.iter().map(|(t, e)| (t, e.clone())).collect();
        assert_eq!(ea, eb);
        assert!(!ea.is_empty());
    }

    #[test]
    fn calls_stay_in_range_and_point_inward() {
        let q = TrafficGenerator::new(floors(), 1.0, 3).unwrap().generate(500);
        assert_eq!(q.len(), 500);
        for (_, event) in q.iter() {
            let ScriptEvent::Call(call) = event else { panic!("unexpected {event}") };
            assert!(floors().contains(call.floor));
            if call.floor == 0 {
                assert_eq!(call.direction, Direction::Up);
            }
            if call.floor == 9 {
                assert_eq!(call.direction, Direction::Down);
            }
        }
    }

    #[test]
    fn zero_probability_is_silent() {
        let q = TrafficGenerator::new(floors(), 0.0, 3).unwrap().generate(100);
        assert!(q.is_empty());
    }

    #[test]
    fn probability_outside_unit_interval_rejected() {
        assert!(TrafficGenerator::new(floors(), 1.5, 0).is_err());
        assert!(TrafficGenerator::new(floors(), -0.1, 0).is_err());
    }
}
