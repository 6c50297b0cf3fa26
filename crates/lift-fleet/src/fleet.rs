//! The fixed-size, id-indexed fleet container.

use lift_core::{Floor, LiftId};

use crate::lift::Lift;

/// All lift cars in the bank, created once at simulation start.
///
/// `LiftId` values are indices into the backing `Vec`; no lift is ever
/// created or destroyed after initialization, so ids stay valid for the
/// whole run.  Scans iterate in id order — the tie-break every allocation
/// policy in lift-dispatch relies on.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftFleet {
    lifts: Vec<Lift>,
}

impl LiftFleet {
    /// A fleet of `count` lifts, all idle at the ground floor.
    pub fn new(count: u32) -> Self {
        Self::with_levels((0..count).map(|_| Floor::GROUND).collect())
    }

    /// A fleet with one lift parked at each given level, ids in input order.
    pub fn with_levels(levels: Vec<Floor>) -> Self {
        let lifts = levels
            .into_iter()
            .enumerate()
            .map(|(i, level)| Lift::parked(LiftId(i as u32), level))
            .collect();
        Self { lifts }
    }

    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    pub fn get(&self, id: LiftId) -> Option<&Lift> {
        self.lifts.get(id.index())
    }

    pub fn get_mut(&mut self, id: LiftId) -> Option<&mut Lift> {
        self.lifts.get_mut(id.index())
    }

    /// Iterate lifts in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Lift> {
        self.lifts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Lift> {
        self.lifts.iter_mut()
    }

    /// The idle lift closest to `floor`; ties broken by lowest id (strict
    /// `<` in an id-order scan keeps the first minimum found).
    pub fn nearest_idle(&self, floor: Floor) -> Option<LiftId> {
        let mut best: Option<(u16, LiftId)> = None;
        for lift in &self.lifts {
            if !lift.idle() {
                continue;
            }
            let distance = lift.level.distance_to(floor);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, lift.id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Number of lifts currently on a trip (dwelling included).
    pub fn in_service_count(&self) -> usize {
        self.lifts.iter().filter(|l| !l.idle()).count()
    }
}
