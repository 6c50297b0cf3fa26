//! Hall calls and their direction.

use std::fmt;

use crate::floor::Floor;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the two hall-call directions.
///
/// A lift's travel heading is `Option<Direction>` — `None` while idle and for
/// a call issued at the lift's current floor, which involves no movement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The direction a lift at `from` must travel to reach `to`, or `None`
    /// when the floors are equal (immediate arrival, no movement).
    #[inline]
    pub fn of_travel(from: Floor, to: Floor) -> Option<Direction> {
        match to.0.cmp(&from.0) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

// ── FloorCall ─────────────────────────────────────────────────────────────────

/// The identity of a hall call: a floor plus the direction the rider wants
/// to travel.  Two calls with the same `(floor, direction)` are the same
/// outstanding request — the registry guarantees at most one is active.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCall {
    pub floor: Floor,
    pub direction: Direction,
}

impl FloorCall {
    #[inline]
    pub fn new(floor: Floor, direction: Direction) -> Self {
        Self { floor, direction }
    }

    /// Shorthand for an upward call at `floor`.
    #[inline]
    pub fn up(floor: Floor) -> Self {
        Self::new(floor, Direction::Up)
    }

    /// Shorthand for a downward call at `floor`.
    #[inline]
    pub fn down(floor: Floor) -> Self {
        Self::new(floor, Direction::Down)
    }
}

impl fmt::Display for FloorCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.floor, self.direction)
    }
}
