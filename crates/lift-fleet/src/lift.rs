//! Per-lift state record and the door sub-state machine.

use lift_core::{Direction, DoorTiming, Floor, LiftId};

// ── DoorState ─────────────────────────────────────────────────────────────────

/// The door sub-state of one lift, tick-counted per phase.
///
/// Movement is suspended whenever the doors are not `Closed`; the dwell at a
/// stop is exactly one full `Opening → Open → Closing → Closed` cycle.
/// Phase durations come from [`DoorTiming`]; zero-length phases are skipped
/// at the transition, so a `DoorTiming` with `opening_ticks = 0` goes
/// straight to `Open`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    Opening {
        ticks_left: u32,
    },
    Open {
        ticks_left: u32,
    },
    Closing {
        ticks_left: u32,
    },
}

impl DoorState {
    /// Start a dwell cycle.  Returns `Closed` only for an all-zero timing,
    /// which config validation rejects.
    pub fn begin(timing: &DoorTiming) -> DoorState {
        Self::opening_or_later(timing)
    }

    /// Advance the machine by one tick.  `Closed` is a fixed point.
    pub fn advance(self, timing: &DoorTiming) -> DoorState {
        match self {
            DoorState::Closed => DoorState::Closed,
            DoorState::Opening { ticks_left: 1 } => Self::open_or_later(timing),
            DoorState::Opening { ticks_left } => DoorState::Opening { ticks_left: ticks_left - 1 },
            DoorState::Open { ticks_left: 1 } => Self::closing_or_closed(timing),
            DoorState::Open { ticks_left } => DoorState::Open { ticks_left: ticks_left - 1 },
            DoorState::Closing { ticks_left: 1 } => DoorState::Closed,
            DoorState::Closing { ticks_left } => DoorState::Closing { ticks_left: ticks_left - 1 },
        }
    }

    /// `true` unless the doors are fully closed.  Render layers animate the
    /// `Opening`/`Closing` phases, so the doors count as open during them.
    #[inline]
    pub fn is_open(&self) -> bool {
        !matches!(self, DoorState::Closed)
    }

    // Phase entry helpers that skip zero-length phases.

    fn opening_or_later(timing: &DoorTiming) -> DoorState {
        if timing.opening_ticks > 0 {
            DoorState::Opening { ticks_left: timing.opening_ticks }
        } else {
            Self::open_or_later(timing)
        }
    }

    fn open_or_later(timing: &DoorTiming) -> DoorState {
        if timing.open_ticks > 0 {
            DoorState::Open { ticks_left: timing.open_ticks }
        } else {
            Self::closing_or_closed(timing)
        }
    }

    fn closing_or_closed(timing: &DoorTiming) -> DoorState {
        if timing.closing_ticks > 0 {
            DoorState::Closing { ticks_left: timing.closing_ticks }
        } else {
            DoorState::Closed
        }
    }
}

// ── Lift ──────────────────────────────────────────────────────────────────────

/// The authoritative state of one lift car.
///
/// A lift is either **idle** (`destination == None`, parked with doors
/// closed) or **on a trip** (destination set by the dispatcher).  The travel
/// `direction` is derived from the destination on the trip's first motion
/// tick and never changes until the lift returns to idle; it stays `None`
/// for a trip whose destination is the current floor (no movement, doors
/// only).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lift {
    pub id: LiftId,

    /// Current floor (or the floor most recently departed, during the tick
    /// in which the lift moves — levels update atomically per tick).
    pub level: Floor,

    /// Travel heading.  `None` while idle and for a same-floor trip.
    pub direction: Option<Direction>,

    /// Trip destination.  `None` exactly when the lift is idle.
    pub destination: Option<Floor>,

    /// Hall direction of the call that allocated this lift.  May differ from
    /// `direction` (an idle lift descends to answer an `up` call); it is the
    /// registry entry cleared at final arrival.
    pub serving: Option<Direction>,

    /// Absorbed en-route stops, strictly between position and destination at
    /// absorption time, in insertion order.  Entries are consumed when the
    /// lift dwells at them.
    pub stops: Vec<Floor>,

    /// Door sub-state; movement is suspended while not `Closed`.
    pub door: DoorState,
}

impl Lift {
    /// A new idle lift parked at `level` with doors closed.
    pub fn parked(id: LiftId, level: Floor) -> Self {
        Self {
            id,
            level,
            direction: None,
            destination: None,
            serving: None,
            stops: Vec::new(),
            door: DoorState::Closed,
        }
    }

    /// `true` when the lift has no assigned trip and is available for
    /// dispatch.
    #[inline]
    pub fn idle(&self) -> bool {
        self.destination.is_none()
    }

    /// Record a new trip.  Caller (the dispatcher) guarantees the lift is
    /// idle; the travel direction is derived later by the motion controller.
    pub fn assign(&mut self, destination: Floor, serving: Direction) {
        debug_assert!(self.idle(), "assigning a trip to a busy lift");
        self.destination = Some(destination);
        self.serving = Some(serving);
    }

    /// Start the door dwell cycle at the current floor.
    pub fn begin_door_cycle(&mut self, timing: &DoorTiming) {
        self.door = DoorState::begin(timing);
    }

    /// Return the lift to the idle pool.  Called exactly once per trip, by
    /// the motion controller at final arrival.
    pub fn complete_trip(&mut self) {
        self.direction = None;
        self.destination = None;
        self.serving = None;
        self.stops.clear();
    }

    /// Read-only view for render layers.
    pub fn snapshot(&self) -> LiftSnapshot {
        LiftSnapshot {
            id: self.id,
            level: self.level,
            idle: self.idle(),
            direction: self.direction,
            destination: self.destination,
            door_open: self.door.is_open(),
        }
    }
}

// ── LiftSnapshot ──────────────────────────────────────────────────────────────

/// A point-in-time view of one lift, consumed by render layers to draw car
/// position and door animation.  Plain data; holds no references into the
/// simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftSnapshot {
    pub id: LiftId,
    pub level: Floor,
    pub idle: bool,
    pub direction: Option<Direction>,
    pub destination: Option<Floor>,
    pub door_open: bool,
}
