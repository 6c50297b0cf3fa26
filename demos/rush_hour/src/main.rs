//! rush_hour — smallest example for the rust_lift simulator.
//!
//! Simulates a 3-car lift bank in an 8-floor office building through a
//! morning rush: a burst of scripted ground-floor calls as people arrive,
//! overlaid with seeded random traffic for the rest of the run.  Scale
//! comment: bump FLOOR_COUNT and LIFT_COUNT for a high-rise; the core is
//! O(lifts) per tick and does not care.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::{Floor, FloorCall, SimConfig, SimRng, Tick};
use lift_dispatch::DispatchOutcome;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{CallSource, RandomTraffic, ScriptedCalls, SimObserver, SimBuilder, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:           u16 = 8;
const LIFT_COUNT:            u32 = 3;
const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 600;  // 5 simulated minutes at 500 ms/tick
const CALL_PROBABILITY:      f64 = 0.15; // background traffic per tick
const OUTPUT_INTERVAL_TICKS: u64 = 1;    // snapshot every tick (captures door cycles)

// ── Call source: scripted rush + random background ────────────────────────────

struct MorningRush {
    rush:       ScriptedCalls,
    background: RandomTraffic,
}

impl CallSource for MorningRush {
    fn calls_at(&mut self, tick: Tick) -> Vec<FloorCall> {
        let mut calls = self.rush.calls_at(tick);
        calls.extend(self.background.calls_at(tick));
        calls
    }
}

/// The arrival burst: a fresh `up` press at the ground floor every 15 s for
/// the first two minutes, plus a few upper-floor calls mixed in.
fn build_rush() -> ScriptedCalls {
    let mut rush = ScriptedCalls::new();
    for i in 0..8 {
        rush = rush.at(Tick(i * 30), FloorCall::up(Floor::GROUND));
    }
    rush.at(Tick(45), FloorCall::down(Floor(6)))
        .at(Tick(90), FloorCall::up(Floor(3)))
        .at(Tick(150), FloorCall::down(Floor(7)))
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: lift_output::writer::OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    dispatched:    usize,
    deferred:      usize,
}

impl<W: lift_output::writer::OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            snapshot_rows: 0,
            summary_rows:  0,
            dispatched:    0,
            deferred:      0,
        }
    }
}

impl<W: lift_output::writer::OutputWriter> SimObserver for CountingObserver<W> {
    fn on_call(&mut self, tick: Tick, call: FloorCall, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::NoLiftAvailable => self.deferred += 1,
            DispatchOutcome::AlreadyActive => {}
            _ => self.dispatched += 1,
        }
        self.inner.on_call(tick, call, outcome);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &lift_fleet::LiftFleet) {
        self.snapshot_rows += fleet.len();
        self.inner.on_snapshot(tick, fleet);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== rush_hour — rust_lift simulator ===");
    println!("Floors: {FLOOR_COUNT}  |  Lifts: {LIFT_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let mut config = SimConfig::new(FLOOR_COUNT, LIFT_COUNT);
    config.total_ticks = TOTAL_TICKS;
    config.seed = SEED;
    config.output_interval_ticks = OUTPUT_INTERVAL_TICKS;
    println!(
        "Sim: {} ticks ({} simulated seconds), output every {} ticks",
        config.total_ticks,
        config.total_ticks * config.tick_duration_ms as u64 / 1000,
        OUTPUT_INTERVAL_TICKS
    );

    // 2. Call source: scripted rush + seeded background traffic.
    let mut rng = SimRng::new(config.seed);
    let mut source = MorningRush {
        rush:       build_rush(),
        background: RandomTraffic::new(rng.child(1), CALL_PROBABILITY, config.top_floor()),
    };

    // 3. Build sim.
    let mut sim = SimBuilder::new(config.clone()).build()?;

    // 4. Set up output.
    std::fs::create_dir_all("output/rush_hour")?;
    let writer = CsvWriter::new(Path::new("output/rush_hour"))?;
    let inner_obs = SimOutputObserver::new(writer, &config);
    let mut obs = CountingObserver::new(inner_obs);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut source, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  calls dispatched    : {}", obs.dispatched);
    println!("  calls deferred      : {}", obs.deferred);
    println!("  still outstanding   : {}", sim.registry.active_count());
    println!("  lift_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 7. Final fleet table.
    println!("{:<8} {:<8} {:<8} {:<12} {:<6}", "Lift", "Level", "Idle", "Destination", "Doors");
    println!("{}", "-".repeat(46));
    for lift in sim.fleet.iter() {
        let snap = lift.snapshot();
        println!(
            "{:<8} {:<8} {:<8} {:<12} {:<6}",
            snap.id.0,
            snap.level.to_string(),
            if snap.idle { "yes" } else { "no" },
            snap.destination.map_or("-".to_string(), |d| d.to_string()),
            if snap.door_open { "open" } else { "closed" },
        );
    }

    Ok(())
}
