//! One lift, one tick: the movement state machine.

use lift_core::{Direction, DoorTiming, Floor, FloorCall};
use lift_dispatch::FloorCallRegistry;
use lift_fleet::{DoorState, Lift};

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What one motion tick did to one lift.
///
/// Purely informational — all state changes have already been applied to the
/// lift (and registry) when the outcome is returned.  The simulation loop
/// uses it for per-tick statistics and observer events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No trip assigned; the lift did nothing.
    Idle,

    /// Doors are mid-cycle; movement stayed suspended.
    DoorTicked,

    /// Travelled one floor toward the destination.
    Moved(Floor),

    /// Reached a stop (en-route or final) and began the door cycle there.
    Stopped(Floor),

    /// Doors finished closing at the destination; the trip is complete and
    /// the lift is idle again.
    Arrived(Floor),
}

// ── MotionController ──────────────────────────────────────────────────────────

/// Advances lift state by one tick at a time.
///
/// Precedence per tick: an open door always ticks (a lift never moves with
/// doors open), otherwise an assigned lift travels exactly one floor.  The
/// travel `direction` is derived from the destination on the first motion
/// tick after dispatch and held until trip completion, so a trip's heading
/// never reverses mid-flight.
#[derive(Copy, Clone, Debug)]
pub struct MotionController {
    timing: DoorTiming,
}

impl MotionController {
    pub fn new(timing: DoorTiming) -> Self {
        Self { timing }
    }

    /// Advance one lift by one tick.
    ///
    /// Registry entries are cleared the moment the lift begins its dwell at
    /// the called floor: the serving entry at the destination, the absorbed
    /// entry at an en-route stop.  A fresh press of the same button after
    /// that point is a new call.
    pub fn step(&self, lift: &mut Lift, registry: &mut FloorCallRegistry) -> StepOutcome {
        if lift.door.is_open() {
            return self.tick_door(lift);
        }

        let Some(destination) = lift.destination else {
            return StepOutcome::Idle;
        };

        let direction = match lift.direction {
            Some(direction) => direction,
            None => match Direction::of_travel(lift.level, destination) {
                Some(direction) => {
                    lift.direction = Some(direction);
                    direction
                }
                // Called to its own floor: no travel, doors only.
                None => return self.stop_at_destination(lift, registry),
            },
        };

        lift.level = lift.level.step(direction);

        if lift.level == destination {
            return self.stop_at_destination(lift, registry);
        }
        if let Some(i) = lift.stops.iter().position(|&f| f == lift.level) {
            lift.stops.remove(i);
            // Absorption requires matching directions, so the travel heading
            // is the absorbed call's direction.
            registry.deactivate(FloorCall::new(lift.level, direction));
            lift.begin_door_cycle(&self.timing);
            return StepOutcome::Stopped(lift.level);
        }
        StepOutcome::Moved(lift.level)
    }

    fn tick_door(&self, lift: &mut Lift) -> StepOutcome {
        lift.door = lift.door.advance(&self.timing);
        if lift.door == DoorState::Closed && lift.destination == Some(lift.level) {
            lift.complete_trip();
            return StepOutcome::Arrived(lift.level);
        }
        StepOutcome::DoorTicked
    }

    fn stop_at_destination(
        &self,
        lift: &mut Lift,
        registry: &mut FloorCallRegistry,
    ) -> StepOutcome {
        if let Some(serving) = lift.serving {
            registry.deactivate(FloorCall::new(lift.level, serving));
        }
        lift.begin_door_cycle(&self.timing);
        StepOutcome::Stopped(lift.level)
    }
}
