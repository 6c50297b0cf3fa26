//! Top-level simulation configuration.

use crate::error::{CoreError, CoreResult};
use crate::floor::Floor;
use crate::time::{SimClock, Tick};

// ── DoorTiming ────────────────────────────────────────────────────────────────

/// Tick-counted durations of the three door phases at a stop.
///
/// The doors spend `opening_ticks` sliding open, stay open for `open_ticks`,
/// then take `closing_ticks` to close before the lift may move again.
///
/// Defaults (at the default 500 ms tick): 4 / 4 / 2 — doors begin opening
/// when the lift stops, are fully open after 2 s, and the whole dwell lasts
/// 5 s.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorTiming {
    pub opening_ticks: u32,
    pub open_ticks: u32,
    pub closing_ticks: u32,
}

impl Default for DoorTiming {
    fn default() -> Self {
        Self {
            opening_ticks: 4,
            open_ticks: 4,
            closing_ticks: 2,
        }
    }
}

impl DoorTiming {
    /// Total ticks a lift is paused at one stop.
    #[inline]
    pub fn dwell_ticks(&self) -> u64 {
        self.opening_ticks as u64 + self.open_ticks as u64 + self.closing_ticks as u64
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed in the application crate (or deserialized with the
/// `serde` feature) and handed to `SimBuilder`, which calls [`validate`]
/// before building anything.
///
/// [`validate`]: SimConfig::validate
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Floors are `0 ..= floor_count - 1`.
    pub floor_count: u16,

    /// Number of lift cars in the fleet, fixed for the whole run.
    pub lift_count: u32,

    /// Simulated milliseconds per tick.  One tick is also one floor of
    /// travel.  Default calibration: 500.
    pub tick_duration_ms: u32,

    /// Total ticks to simulate when driving the loop with `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed for stochastic call sources.  The same seed always
    /// produces identical traffic and therefore identical runs.
    pub seed: u64,

    /// Fire the snapshot observer hook every N ticks.  1 = every tick;
    /// 0 disables snapshots entirely.
    pub output_interval_ticks: u64,

    /// Door phase durations applied at every stop.
    pub door: DoorTiming,
}

impl SimConfig {
    /// A config with sane defaults for `floor_count` floors and `lift_count`
    /// lifts; tweak fields from there.
    pub fn new(floor_count: u16, lift_count: u32) -> Self {
        Self {
            floor_count,
            lift_count,
            tick_duration_ms: 500,
            total_ticks: 0,
            seed: 0,
            output_interval_ticks: 0,
            door: DoorTiming::default(),
        }
    }

    /// The highest serviceable floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floor_count.saturating_sub(1))
    }

    /// The tick at which `Sim::run` ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }

    /// Reject configurations the simulator cannot run meaningfully.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 2 {
            return Err(CoreError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        if self.lift_count == 0 {
            return Err(CoreError::Config("lift_count must be at least 1".into()));
        }
        if self.tick_duration_ms == 0 {
            return Err(CoreError::Config("tick_duration_ms must be non-zero".into()));
        }
        if self.door.dwell_ticks() == 0 {
            return Err(CoreError::Config(
                "door timing must include at least one dwell tick".into(),
            ));
        }
        Ok(())
    }
}
