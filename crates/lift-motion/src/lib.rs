//! `lift-motion` — advances lifts through space and door cycles, one tick at
//! a time.
//!
//! The [`MotionController`] is the only code that mutates a lift's `level`,
//! `direction`, or `door` after dispatch.  Each tick it applies one of:
//! doors ticking (movement suspended), one floor of travel, or nothing (idle).
//! It also owns trip completion: clearing the lift's state and the served
//! registry entries as stops are reached.

pub mod controller;


pub use controller::{MotionController, StepOutcome};
