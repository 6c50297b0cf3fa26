//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{SimConfig, Tick};
use lift_fleet::LiftFleet;
use lift_sim::{SimObserver, TickStats};

use crate::OutputError;
use crate::row::{LiftSnapshotRow, NO_DESTINATION, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes lift snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    tick_duration_ms: u32,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_ms: config.tick_duration_ms,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_ms(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_ms as u64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_ms:   self.elapsed_ms(tick),
            moved_lifts:  stats.moved as u64,
            arrivals:     stats.arrivals as u64,
            active_calls: stats.active_calls as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &LiftFleet) {
        let rows: Vec<LiftSnapshotRow> = fleet
            .iter()
            .map(|lift| {
                let snap = lift.snapshot();
                LiftSnapshotRow {
                    lift_id:     snap.id.0,
                    tick:        tick.0,
                    level:       snap.level.0,
                    idle:        snap.idle,
                    destination: snap.destination.map_or(NO_DESTINATION, |d| d.0),
                    door_open:   snap.door_open,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
