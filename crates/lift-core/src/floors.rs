//! The validated set of floors a lift bank serves.
//!
//! Lifts move exactly one floor per tick, so the served floors must form a
//! contiguous range.  Anything outside it is rejected at the request
//! boundary instead of reaching a request queue.

use std::ops::RangeInclusive;

use crate::{LiftError, LiftResult};

/// Inclusive range of served floors, built from the registered floor list.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    lowest:  i32,
    highest: i32,
}

impl FloorRange {
    /// Build from an unordered list of floors (duplicates allowed).
    ///
    /// # Errors
    ///
    /// `EmptyFloorRange` if no floors are given, `NonContiguousFloors` if the
    /// sorted list has a gap.
    pub fn from_floors<I: IntoIterator<Item = i32>>(floors: I) -> LiftResult<Self> {
        let mut sorted: Vec<i32> = floors.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let (Some(&lowest), Some(&highest)) = (sorted.first(), sorted.last()) else {
            return Err(LiftError::EmptyFloorRange);
        };
        if let Some(gap) = sorted.windows(2).find(|w| w[1] != w[0] + 1) {
            return Err(LiftError::NonContiguousFloors { below: gap[0], above: gap[1] });
        }
        Ok(Self { lowest, highest })
    }

    #[inline]
    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    #[inline]
    pub fn highest(&self) -> i32 {
        self.highest
    }

    /// Number of served floors.
    #[inline]
    pub fn len(&self) -> usize {
        (self.highest - self.lowest) as usize + 1
    }

    /// Always `false`; a `FloorRange` holds at least one floor.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, floor: i32) -> bool {
        (self.lowest..=self.highest).contains(&floor)
    }

    /// `Ok(floor)` if served, otherwise `FloorOutOfRange`.
    pub fn check(&self, floor: i32) -> LiftResult<i32> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange {
                floor,
                lowest:  self.lowest,
                highest: self.highest,
            })
        }
    }

    /// Served floors, lowest first.
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.lowest..=self.highest
    }
}
