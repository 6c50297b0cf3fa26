//! Call sources — where hall calls come from.
//!
//! The tick loop pulls calls from a [`CallSource`] at the start of every
//! tick.  Two implementations cover the common cases: [`ScriptedCalls`] for
//! reproducing an exact scenario (tests, replays) and [`RandomTraffic`] for
//! seeded stochastic load.

use std::collections::BTreeMap;

use lift_core::{Direction, Floor, FloorCall, SimRng, Tick};

/// Produces the hall calls to inject at each tick.
pub trait CallSource {
    /// All calls arriving at `tick`, in press order.
    fn calls_at(&mut self, tick: Tick) -> Vec<FloorCall>;
}

/// A source that never produces calls.  Useful when driving calls manually
/// through [`Sim::handle_call`][crate::Sim::handle_call].
pub struct NoTraffic;

impl CallSource for NoTraffic {
    fn calls_at(&mut self, _tick: Tick) -> Vec<FloorCall> {
        Vec::new()
    }
}

// ── ScriptedCalls ─────────────────────────────────────────────────────────────

/// A fixed, tick-keyed call schedule.
#[derive(Default)]
pub struct ScriptedCalls {
    schedule: BTreeMap<Tick, Vec<FloorCall>>,
}

impl ScriptedCalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `call` to be pressed at `tick`.  Calls at the same tick are
    /// injected in insertion order.
    pub fn at(mut self, tick: Tick, call: FloorCall) -> Self {
        self.schedule.entry(tick).or_default().push(call);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

impl CallSource for ScriptedCalls {
    fn calls_at(&mut self, tick: Tick) -> Vec<FloorCall> {
        self.schedule.remove(&tick).unwrap_or_default()
    }
}

// ── RandomTraffic ─────────────────────────────────────────────────────────────

/// Seeded stochastic call generation: each tick, with probability
/// `call_probability`, one call arrives at a uniformly random floor.
///
/// The direction is uniform where both are possible; the ground floor only
/// generates `up` calls and the top floor only `down`.  Two sources built
/// from the same seed produce identical traffic.
pub struct RandomTraffic {
    rng: SimRng,
    call_probability: f64,
    top_floor: Floor,
}

impl RandomTraffic {
    pub fn new(rng: SimRng, call_probability: f64, top_floor: Floor) -> Self {
        Self {
            rng,
            call_probability,
            top_floor,
        }
    }
}

impl CallSource for RandomTraffic {
    fn calls_at(&mut self, _tick: Tick) -> Vec<FloorCall> {
        if !self.rng.gen_bool(self.call_probability) {
            return Vec::new();
        }
        let floor = Floor(self.rng.gen_range(0..=self.top_floor.0));
        let direction = if floor == Floor::GROUND {
            Direction::Up
        } else if floor == self.top_floor {
            Direction::Down
        } else if self.rng.random::<bool>() {
            Direction::Up
        } else {
            Direction::Down
        };
        vec![FloorCall::new(floor, direction)]
    }
}
