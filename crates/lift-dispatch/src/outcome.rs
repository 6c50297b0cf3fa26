//! The result of one dispatch attempt.

use std::fmt;

use lift_core::LiftId;

/// What happened to a hall call handed to the dispatcher.
///
/// Every variant is a normal, recoverable state — `NoLiftAvailable` is
/// deferred success (the registry entry persists and the simulation loop
/// re-attempts assignment), not a failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A lift is already en route for this exact `(floor, direction)`;
    /// the duplicate request is a no-op.
    AlreadyActive,

    /// A moving lift folded the call into its route as an extra stop.
    AbsorbedBy(LiftId),

    /// An idle lift was reserved and given the call floor as destination.
    AllocatedTo(LiftId),

    /// No moving lift qualified and no lift was idle; the call stays
    /// registered and will be assigned once a lift frees up.
    NoLiftAvailable,
}

impl DispatchOutcome {
    /// `true` if this attempt put the call on some lift's route.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::AbsorbedBy(_) | DispatchOutcome::AllocatedTo(_)
        )
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::AlreadyActive => write!(f, "already active"),
            DispatchOutcome::AbsorbedBy(id) => write!(f, "absorbed by {id}"),
            DispatchOutcome::AllocatedTo(id) => write!(f, "allocated to {id}"),
            DispatchOutcome::NoLiftAvailable => write!(f, "no lift available"),
        }
    }
}
