//! Simulation observer trait for progress reporting and data collection.

use lift_core::{FloorCall, Tick};
use lift_dispatch::DispatchOutcome;
use lift_fleet::LiftFleet;

use crate::sim::TickStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — call logger
///
/// ```rust,ignore
/// struct CallLogger;
///
/// impl SimObserver for CallLogger {
///     fn on_call(&mut self, tick: Tick, call: FloorCall, outcome: &DispatchOutcome) {
///         println!("{tick}: {call} -> {outcome}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per hall call injected this tick, with the dispatcher's
    /// decision for it.
    fn on_call(&mut self, _tick: Tick, _call: FloorCall, _outcome: &DispatchOutcome) {}

    /// Called at the end of each tick with the tick's motion statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks).
    ///
    /// Provides read-only access to the full fleet so that output writers can
    /// record car positions and door states without the sim needing to know
    /// about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &LiftFleet) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
