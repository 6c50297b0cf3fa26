//! `lift-sim` — tick loop orchestrator for the rust_lift simulator.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Calls       — drain this tick's hall calls from the CallSource and
//!                   dispatch each (absorption → nearest idle → pending).
//!   ② Motion      — step every lift in ascending LiftId order: one floor
//!                   of travel, or one door tick (movement suspended).
//!   ③ Re-dispatch — retry pending calls in press order now that lifts may
//!                   have freed up.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{Floor, FloorCall, SimConfig};
//! use lift_sim::{NoopObserver, ScriptedCalls, SimBuilder};
//!
//! let mut config = SimConfig::new(6, 2);
//! config.total_ticks = 100;
//! let mut source = ScriptedCalls::new().at(Tick(0), FloorCall::up(Floor(3)));
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut source, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod source;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickStats};
pub use source::{CallSource, NoTraffic, RandomTraffic, ScriptedCalls};
