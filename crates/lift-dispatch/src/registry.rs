//! `FloorCallRegistry` — the single source of truth for outstanding calls.
//!
//! A call is *active* from the moment it is dispatched until the serving
//! lift dwells at its floor.  Keeping that window in one place is what
//! prevents duplicate dispatch: a second press of the same button while the
//! first call is outstanding observes `is_active` and goes nowhere.
//!
//! Storage is a dense per-floor flag pair.  Fleet and building sizes are
//! fixed at simulation start, so there is nothing to grow and lookups are
//! a direct index.

use lift_core::{Direction, Floor, FloorCall};

/// Per-floor outstanding-call flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct CallFlags {
    up: bool,
    down: bool,
}

impl CallFlags {
    fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Up => self.up = value,
            Direction::Down => self.down = value,
        }
    }
}

/// Tracks which `(floor, direction)` calls are currently outstanding —
/// pending or assigned-but-unserved.
///
/// Floors are validated by the dispatcher before they reach this type; an
/// out-of-range floor here is a caller bug and is ignored in release builds.
#[derive(Clone, Debug)]
pub struct FloorCallRegistry {
    flags: Vec<CallFlags>,
}

impl FloorCallRegistry {
    /// An all-inactive registry for a building with `floor_count` floors.
    pub fn new(floor_count: u16) -> Self {
        Self {
            flags: vec![CallFlags::default(); floor_count as usize],
        }
    }

    /// `true` if a call of that direction at that floor is outstanding.
    pub fn is_active(&self, call: FloorCall) -> bool {
        debug_assert!(call.floor.index() < self.flags.len());
        self.flags
            .get(call.floor.index())
            .is_some_and(|f| f.get(call.direction))
    }

    /// Mark the call outstanding.  Idempotent — callers check `is_active`
    /// first to decide dispatch-vs-ignore.
    pub fn activate(&mut self, call: FloorCall) {
        debug_assert!(call.floor.index() < self.flags.len());
        if let Some(flags) = self.flags.get_mut(call.floor.index()) {
            flags.set(call.direction, true);
        }
    }

    /// Mark the call served.  Called exactly once per call, when the serving
    /// lift dwells at its floor.
    pub fn deactivate(&mut self, call: FloorCall) {
        debug_assert!(call.floor.index() < self.flags.len());
        if let Some(flags) = self.flags.get_mut(call.floor.index()) {
            flags.set(call.direction, false);
        }
    }

    /// Number of outstanding calls across the whole building.
    pub fn active_count(&self) -> usize {
        self.flags
            .iter()
            .map(|f| f.up as usize + f.down as usize)
            .sum()
    }

    /// Iterate all outstanding calls, lowest floor first, up before down.
    pub fn active_calls(&self) -> impl Iterator<Item = FloorCall> + '_ {
        self.flags.iter().enumerate().flat_map(|(i, f)| {
            let floor = Floor(i as u16);
            let up = f.up.then_some(FloorCall::up(floor));
            let down = f.down.then_some(FloorCall::down(floor));
            up.into_iter().chain(down)
        })
    }
}
