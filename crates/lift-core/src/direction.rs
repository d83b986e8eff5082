//! Travel direction and hall calls.

use std::fmt;

/// Direction of travel, or the direction a hall button asks for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction needed to travel from `from` to `to`; `None` when equal.
    #[inline]
    pub fn towards(from: i32, to: i32) -> Option<Direction> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less    => Some(Direction::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    /// Signed one-floor step in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up   => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// A hall button press: service wanted at `floor`, travelling `direction`.
///
/// Immutable once created.  The system owns pending calls until a lift
/// arrives with its doors open.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub floor:     i32,
    pub direction: Direction,
}

impl Call {
    #[inline]
    pub fn new(floor: i32, direction: Direction) -> Self {
        Self { floor, direction }
    }

    pub fn up(floor: i32) -> Self {
        Self::new(floor, Direction::Up)
    }

    pub fn down(floor: i32) -> Self {
        Self::new(floor, Direction::Down)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.direction, self.floor)
    }
}
