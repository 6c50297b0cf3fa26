//! `lift-core` — foundational types for the `rust_lift` lift bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `LiftId`                                          |
//! | [`floor`]   | `Floor` and its travel arithmetic                 |
//! | [`call`]    | `Direction`, `FloorCall`                          |
//! | [`time`]    | `Tick`, `SimClock`                                |
//! | [`config`]  | `SimConfig`, `DoorTiming`                         |
//! | [`rng`]     | `SimRng` (deterministic traffic generation)       |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                               |
//! |---------|----------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types for render layers |

pub mod call;
pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{Direction, FloorCall};
pub use config::{DoorTiming, SimConfig};
pub use error::{CoreError, CoreResult};
pub use floor::Floor;
pub use ids::LiftId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
