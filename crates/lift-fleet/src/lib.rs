//! `lift-fleet` — the authoritative state of every lift car.
//!
//! # Crate layout
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`lift`]  | `Lift`, `DoorState`, `LiftSnapshot`              |
//! | [`fleet`] | `LiftFleet` (fixed-size, id-indexed)             |
//!
//! The structs here are plain data: the dispatcher (lift-dispatch) writes
//! assignments into them and the motion controller (lift-motion) advances
//! them tick by tick.  Nothing in this crate makes decisions.

pub mod fleet;
pub mod lift;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use fleet::LiftFleet;
pub use lift::{DoorState, Lift, LiftSnapshot};
