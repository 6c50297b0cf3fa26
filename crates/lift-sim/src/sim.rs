//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use lift_core::{FloorCall, LiftId, SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchOutcome, Dispatcher, FloorCallRegistry};
use lift_fleet::{LiftFleet, LiftSnapshot};
use lift_motion::{MotionController, StepOutcome};

use crate::source::CallSource;
use crate::{SimObserver, SimResult};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// What happened across the fleet during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Lifts that travelled one floor this tick.
    pub moved: usize,
    /// Lifts that reached a stop and began their door cycle this tick.
    pub stops: usize,
    /// Lifts that completed their trip this tick.
    pub arrivals: usize,
    /// Outstanding hall calls after this tick's motion and re-dispatch.
    pub active_calls: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Calls**: drain this tick's hall calls from the [`CallSource`] and
///    dispatch each one.
/// 2. **Motion**: step every lift — one floor of travel, or one door tick,
///    in ascending `LiftId` order for determinism.
/// 3. **Re-dispatch**: re-attempt assignment for calls that found no lift
///    when they arrived, in press order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (floors, lifts, total ticks, door timing, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// All lift cars, indexed by `LiftId`.
    pub fleet: LiftFleet,

    /// Outstanding `(floor, direction)` calls.
    pub registry: FloorCallRegistry,

    /// The allocation policy.
    pub dispatcher: Dispatcher,

    /// Per-tick movement and door-cycle state machine.
    pub motion: MotionController,

    /// Calls that got `NoLiftAvailable`, in press order.  Still active in
    /// the registry; retried every tick until a lift qualifies.
    pub pending: VecDeque<FloorCall>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Pulls hall calls from `source` each tick and calls observer hooks at
    /// every tick boundary.  Use [`NoopObserver`][crate::NoopObserver] if
    /// you don't need callbacks.
    pub fn run<S: CallSource, O: SimObserver>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, source, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<S: CallSource, O: SimObserver>(
        &mut self,
        n: u64,
        source: &mut S,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, source, observer)?;
        }
        Ok(())
    }

    /// Dispatch one hall call immediately, outside any call source.
    ///
    /// Returns `Err` only for a floor outside the building.  A call that
    /// finds no lift is parked in [`pending`][Self::pending] and retried on
    /// every subsequent tick.
    pub fn handle_call(&mut self, call: FloorCall) -> SimResult<DispatchOutcome> {
        let outcome = self
            .dispatcher
            .handle_call(&mut self.fleet, &mut self.registry, call)?;
        if outcome == DispatchOutcome::NoLiftAvailable {
            self.pending.push_back(call);
        }
        Ok(outcome)
    }

    /// A point-in-time view of one lift, or `None` for an unknown id.
    pub fn lift_snapshot(&self, id: LiftId) -> Option<LiftSnapshot> {
        self.fleet.get(id).map(|lift| lift.snapshot())
    }

    /// Whether the lift's doors are anywhere in their open cycle, or `None`
    /// for an unknown id.
    pub fn is_door_open(&self, id: LiftId) -> Option<bool> {
        self.fleet.get(id).map(|lift| lift.door.is_open())
    }

    /// Calls waiting for a lift to free up.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<S: CallSource, O: SimObserver>(
        &mut self,
        now: Tick,
        source: &mut S,
        observer: &mut O,
    ) -> SimResult<()> {
        observer.on_tick_start(now);

        // ── Phase 1: inject this tick's hall calls ────────────────────────
        for call in source.calls_at(now) {
            let outcome = self.handle_call(call)?;
            observer.on_call(now, call, &outcome);
        }

        // ── Phase 2 + 3: motion, then pending re-dispatch ─────────────────
        let stats = self.process_tick();
        observer.on_tick_end(now, &stats);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet);
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self) -> TickStats {
        let mut stats = TickStats::default();

        // ── Motion: step every lift in ascending id order ─────────────────
        let motion = self.motion;
        for lift in self.fleet.iter_mut() {
            match motion.step(lift, &mut self.registry) {
                StepOutcome::Idle | StepOutcome::DoorTicked => {}
                StepOutcome::Moved(_) => stats.moved += 1,
                StepOutcome::Stopped(_) => stats.stops += 1,
                StepOutcome::Arrived(_) => stats.arrivals += 1,
            }
        }

        // ── Re-dispatch: retry pending calls in press order ───────────────
        //
        // A call leaves the queue when a lift takes it; otherwise it goes to
        // the back and waits another tick.  Entries deactivated out from
        // under us cannot occur (nothing serves an unassigned call), but a
        // stale entry is dropped rather than re-dispatched.
        for _ in 0..self.pending.len() {
            let Some(call) = self.pending.pop_front() else {
                break;
            };
            if !self.registry.is_active(call) {
                continue;
            }
            if !self.dispatcher.assign(&mut self.fleet, call).is_assigned() {
                self.pending.push_back(call);
            }
        }

        stats.active_calls = self.registry.active_count();
        stats
    }
}
