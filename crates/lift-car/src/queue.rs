//! `RequestQueue`: floor requests in SCAN service order.
//!
//! The queue is never FIFO and never plainly sorted.  Relative to the lift's
//! current floor and direction of travel it always reads as:
//!
//! ```text
//!   [ floors ahead, monotonic in the direction of travel ]
//!   ++ [ floors behind, monotonic for the sweep back ]
//! ```
//!
//! so the lift finishes its current sweep before reversing.  The current
//! floor itself counts as "ahead": it is served before the lift moves.

use lift_core::Direction;

/// Ordered floor requests for one lift.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestQueue {
    floors: Vec<i32>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from an arbitrary list, dropping repeats and
    /// re-ordering it for a lift standing at `current`.
    ///
    /// The direction of travel is taken from the first listed floor that
    /// differs from `current`, exactly as for a queue built by insertion.
    pub fn from_floors<I: IntoIterator<Item = i32>>(current: i32, floors: I) -> Self {
        let mut deduped: Vec<i32> = Vec::new();
        for floor in floors {
            if !deduped.contains(&floor) {
                deduped.push(floor);
            }
        }
        let mut queue = Self { floors: deduped };
        if let Some(direction) = queue.direction(current) {
            scan_order(current, direction, &mut queue.floors);
        }
        queue
    }

    /// The next floor to serve.
    #[inline]
    pub fn head(&self) -> Option<i32> {
        self.floors.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.floors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[inline]
    pub fn contains(&self, floor: i32) -> bool {
        self.floors.contains(&floor)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.floors.iter()
    }

    /// Direction of travel for a lift standing at `current`.
    ///
    /// Derived, never stored: the first queued floor that differs from
    /// `current` decides.  A head equal to `current` is about to be served
    /// and says nothing about where the lift goes next.  `None` when the
    /// queue is empty or holds only `current`.
    pub fn direction(&self, current: i32) -> Option<Direction> {
        self.floors
            .iter()
            .find_map(|&floor| Direction::towards(current, floor))
    }

    /// Insert `floor` for a lift standing at `current`.
    ///
    /// Returns `false` (and leaves the queue untouched) if the floor is
    /// already requested.
    pub fn insert(&mut self, current: i32, floor: i32) -> bool {
        if self.contains(floor) {
            return false;
        }
        // Direction comes from the existing requests; the new floor only
        // decides it when nothing else points anywhere.
        let direction = self
            .direction(current)
            .or_else(|| Direction::towards(current, floor));

        self.floors.push(floor);
        if let Some(direction) = direction {
            scan_order(current, direction, &mut self.floors);
        }
        true
    }

    /// Remove and return the head request.
    pub fn pop_head(&mut self) -> Option<i32> {
        if self.floors.is_empty() {
            None
        } else {
            Some(self.floors.remove(0))
        }
    }

    /// `true` if the queue is in SCAN order for a lift standing at `current`.
    pub fn is_scan_ordered(&self, current: i32) -> bool {
        let Some(direction) = self.direction(current) else {
            return true;
        };
        let mut expected = self.floors.clone();
        scan_order(current, direction, &mut expected);
        expected == self.floors
    }
}

impl<'a> IntoIterator for &'a RequestQueue {
    type Item     = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.floors.iter()
    }
}

/// Re-order `floors` in place: floors on the travel side of `current`
/// (inclusive) first, monotonic in `direction`; then the rest, monotonic for
/// the reverse sweep.
fn scan_order(current: i32, direction: Direction, floors: &mut Vec<i32>) {
    let (mut ahead, mut behind): (Vec<i32>, Vec<i32>) = match direction {
        Direction::Up   => floors.iter().copied().partition(|&f| f >= current),
        Direction::Down => floors.iter().copied().partition(|&f| f <= current),
    };
    match direction {
        Direction::Up => {
            ahead.sort_unstable();
            behind.sort_unstable_by(|a, b| b.cmp(a));
        }
        Direction::Down => {
            ahead.sort_unstable_by(|a, b| b.cmp(a));
            behind.sort_unstable();
        }
    }
    floors.clear();
    floors.extend(ahead);
    floors.extend(behind);
}
