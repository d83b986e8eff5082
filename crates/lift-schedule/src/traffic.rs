//! Seeded random hall-call traffic.

use lift_core::{Call, Direction, FloorRange, SimRng, Tick};

use crate::{EventQueue, ScheduleError, ScheduleResult, ScriptEvent};

/// Produces random hall calls: on each tick, with probability
/// `call_probability`, one call at a uniformly chosen floor.
///
/// The lowest floor only calls Up and the highest only Down; elsewhere the
/// direction is a coin flip.  Identical seeds give identical traffic.
pub struct TrafficGenerator {
    floors:           FloorRange,
    call_probability: f64,
    rng:              SimRng,
}

impl TrafficGenerator {
    /// # Errors
    ///
    /// `ScheduleError::Traffic` if `call_probability` is not within `[0, 1]`.
    pub fn new(floors: FloorRange, call_probability: f64, seed: u64) -> ScheduleResult<Self> {
        if !(0.0..=1.0).contains(&call_probability) {
            return Err(ScheduleError::Traffic(format!(
                "call probability {call_probability} is outside [0, 1]"
            )));
        }
        Ok(Self {
            floors,
            call_probability,
            rng: SimRng::new(seed),
        })
    }

    /// Draw the call (if any) for one tick.
    pub fn next_call(&mut self) -> Option<Call> {
        if !self.rng.gen_bool(self.call_probability) {
            return None;
        }
        let floor = self.rng.gen_range(self.floors.iter());
        let direction = if floor == self.floors.lowest() {
            Direction::Up
        } else if floor == self.floors.highest() {
            Direction::Down
        } else if self.rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };
        Some(Call::new(floor, direction))
    }

    /// Schedule calls for `ticks` consecutive ticks starting at `start`.
    pub fn fill(&mut self, queue: &mut EventQueue, start: Tick, ticks: u64) {
        for n in 0..ticks {
            if let Some(call) = self.next_call() {
                queue.push(start + n, ScriptEvent::Call(call));
            }
        }
    }

    /// A fresh queue with `ticks` ticks of traffic from tick 0.
    pub fn generate(&mut self, ticks: u64) -> EventQueue {
        let mut queue = EventQueue::new();
        self.fill(&mut queue, Tick::ZERO, ticks);
        queue
    }
}
