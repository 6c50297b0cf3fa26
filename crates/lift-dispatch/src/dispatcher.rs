//! The allocation policy: en-route absorption first, then nearest idle.

use lift_core::{CoreError, CoreResult, Floor, FloorCall};
use lift_fleet::LiftFleet;

use crate::outcome::DispatchOutcome;
use crate::registry::FloorCallRegistry;

/// Owns the call-to-lift allocation policy.
///
/// The dispatcher is stateless apart from the building bound: all mutable
/// simulation state lives in the fleet and registry passed into each call,
/// so a dispatch decision and a motion tick can never interleave — the
/// borrow checker enforces the single-critical-section rule.
#[derive(Copy, Clone, Debug)]
pub struct Dispatcher {
    top_floor: Floor,
}

impl Dispatcher {
    pub fn new(top_floor: Floor) -> Self {
        Self { top_floor }
    }

    /// Handle an external call event.
    ///
    /// Returns `Err` only for a floor outside the building; every in-range
    /// call produces an outcome.  A `NoLiftAvailable` outcome leaves the
    /// registry entry active — that entry *is* the pending state, and the
    /// simulation loop retries [`assign`](Self::assign) against it until a
    /// lift qualifies.
    pub fn handle_call(
        &self,
        fleet: &mut LiftFleet,
        registry: &mut FloorCallRegistry,
        call: FloorCall,
    ) -> CoreResult<DispatchOutcome> {
        if call.floor > self.top_floor {
            return Err(CoreError::FloorOutOfRange {
                floor: call.floor,
                top: self.top_floor,
            });
        }
        if registry.is_active(call) {
            return Ok(DispatchOutcome::AlreadyActive);
        }
        registry.activate(call);
        Ok(self.assign(fleet, call))
    }

    /// Attempt to put an already-registered call on a lift's route.
    ///
    /// Used by `handle_call` for fresh calls and by the simulation loop to
    /// re-attempt pending ones — the duplicate-dispatch guard lives in
    /// `handle_call`, not here.
    pub fn assign(&self, fleet: &mut LiftFleet, call: FloorCall) -> DispatchOutcome {
        // En-route absorption: scan in id order, first qualifier wins.
        // A lift qualifies if it is travelling in the call's direction and
        // the call floor lies strictly inside its remaining route.
        for lift in fleet.iter_mut() {
            if lift.direction != Some(call.direction) {
                continue;
            }
            let Some(destination) = lift.destination else {
                continue;
            };
            if call
                .floor
                .is_strictly_between(lift.level, destination, call.direction)
            {
                lift.stops.push(call.floor);
                return DispatchOutcome::AbsorbedBy(lift.id);
            }
        }

        // Nearest idle lift; ties broken by lowest id inside the fleet scan.
        match fleet.nearest_idle(call.floor) {
            Some(id) => {
                if let Some(lift) = fleet.get_mut(id) {
                    lift.assign(call.floor, call.direction);
                }
                DispatchOutcome::AllocatedTo(id)
            }
            None => DispatchOutcome::NoLiftAvailable,
        }
    }
}
