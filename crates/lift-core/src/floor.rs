//! Building floors and travel arithmetic.
//!
//! Floors are a dense integer range `0 ..= top_floor`; `Floor(0)` is the
//! ground floor.  All lift movement is floor-by-floor, so the only arithmetic
//! the simulator needs is "one step toward", "distance between", and the
//! strictly-between window test used for en-route call absorption.

use std::fmt;

use crate::call::Direction;

/// A building level.  `u16` bounds the building at 65,536 floors, far beyond
/// any real structure, while keeping lift records compact.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u16);

impl Floor {
    /// The ground floor — where every lift parks at simulation start.
    pub const GROUND: Floor = Floor(0);

    /// Cast to `usize` for direct use as a registry index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of floors between `self` and `other`, ignoring direction.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor one step in `direction`.
    ///
    /// Stepping down from the ground floor saturates there; well-formed
    /// trips never request it because a destination below ground cannot be
    /// dispatched.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up => Floor(self.0 + 1),
            Direction::Down => Floor(self.0.saturating_sub(1)),
        }
    }

    /// `true` if `self` lies strictly between `from` and `to` when travelling
    /// in `direction` — the absorption window for an en-route call.
    ///
    /// Strict on both ends: the lift's current floor is already behind it and
    /// the destination gets its own arrival handling.
    #[inline]
    pub fn is_strictly_between(self, from: Floor, to: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => from < self && self < to,
            Direction::Down => to < self && self < from,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
