//! Plain data row types written by output backends.

/// Column value meaning "no destination" (the lift is idle).
pub const NO_DESTINATION: u16 = u16::MAX;

/// A snapshot of one lift's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftSnapshotRow {
    pub lift_id:     u32,
    pub tick:        u64,
    /// Current floor.
    pub level:       u16,
    pub idle:        bool,
    /// Trip destination floor; [`NO_DESTINATION`] while idle.
    pub destination: u16,
    pub door_open:   bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_ms:   u64,
    pub moved_lifts:  u64,
    pub arrivals:     u64,
    pub active_calls: u64,
}
