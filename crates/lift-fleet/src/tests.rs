//! Unit tests for lift records, door phases, and the fleet container.

#[cfg(test)]
mod door {
    use lift_core::DoorTiming;

    use crate::DoorState;

    fn timing(opening: u32, open: u32, closing: u32) -> DoorTiming {
        DoorTiming { opening_ticks: opening, open_ticks: open, closing_ticks: closing }
    }

    #[test]
    fn full_cycle_phase_order() {
        let t = timing(2, 2, 1);
        let mut door = DoorState::begin(&t);
        assert_eq!(door, DoorState::Opening { ticks_left: 2 });

        door = door.advance(&t);
        assert_eq!(door, DoorState::Opening { ticks_left: 1 });
        door = door.advance(&t);
        assert_eq!(door, DoorState::Open { ticks_left: 2 });
        door = door.advance(&t);
        door = door.advance(&t);
        assert_eq!(door, DoorState::Closing { ticks_left: 1 });
        door = door.advance(&t);
        assert_eq!(door, DoorState::Closed);
    }

    #[test]
    fn cycle_length_equals_dwell_ticks() {
        let t = DoorTiming::default();
        let mut door = DoorState::begin(&t);
        let mut ticks = 0;
        while door != DoorState::Closed {
            door = door.advance(&t);
            ticks += 1;
        }
        assert_eq!(ticks, t.dwell_ticks());
    }

    #[test]
    fn zero_length_phases_skipped() {
        let t = timing(0, 3, 0);
        let mut door = DoorState::begin(&t);
        assert_eq!(door, DoorState::Open { ticks_left: 3 });
        door = door.advance(&t);
        door = door.advance(&t);
        door = door.advance(&t);
        assert_eq!(door, DoorState::Closed);
    }

    #[test]
    fn closed_is_fixed_point() {
        let t = DoorTiming::default();
        assert_eq!(DoorState::Closed.advance(&t), DoorState::Closed);
    }

    #[test]
    fn open_during_all_non_closed_phases() {
        assert!(!DoorState::Closed.is_open());
        assert!(DoorState::Opening { ticks_left: 1 }.is_open());
        assert!(DoorState::Open { ticks_left: 1 }.is_open());
        assert!(DoorState::Closing { ticks_left: 1 }.is_open());
    }
}

#[cfg(test)]
mod lifts {
    use lift_core::{Direction, DoorTiming, Floor, LiftId};

    use crate::{DoorState, Lift};

    #[test]
    fn parked_lift_is_idle() {
        let lift = Lift::parked(LiftId(0), Floor(2));
        assert!(lift.idle());
        assert_eq!(lift.level, Floor(2));
        assert_eq!(lift.direction, None);
        assert_eq!(lift.destination, None);
        assert!(lift.stops.is_empty());
        assert_eq!(lift.door, DoorState::Closed);
    }

    #[test]
    fn assign_sets_trip_fields_only() {
        let mut lift = Lift::parked(LiftId(0), Floor(0));
        lift.assign(Floor(3), Direction::Up);
        assert!(!lift.idle());
        assert_eq!(lift.destination, Some(Floor(3)));
        assert_eq!(lift.serving, Some(Direction::Up));
        // Travel direction belongs to the motion controller.
        assert_eq!(lift.direction, None);
    }

    #[test]
    fn complete_trip_restores_idle_invariant() {
        let mut lift = Lift::parked(LiftId(0), Floor(0));
        lift.assign(Floor(3), Direction::Up);
        lift.direction = Some(Direction::Up);
        lift.stops.push(Floor(2));
        lift.level = Floor(3);

        lift.complete_trip();
        assert!(lift.idle());
        assert_eq!(lift.direction, None);
        assert_eq!(lift.destination, None);
        assert_eq!(lift.serving, None);
        assert!(lift.stops.is_empty());
        assert_eq!(lift.level, Floor(3), "level survives trip completion");
    }

    #[test]
    fn snapshot_reflects_door_and_trip() {
        let mut lift = Lift::parked(LiftId(1), Floor(0));
        lift.assign(Floor(4), Direction::Up);
        lift.direction = Some(Direction::Up);
        lift.begin_door_cycle(&DoorTiming::default());

        let snap = lift.snapshot();
        assert_eq!(snap.id, LiftId(1));
        assert!(!snap.idle);
        assert_eq!(snap.direction, Some(Direction::Up));
        assert_eq!(snap.destination, Some(Floor(4)));
        assert!(snap.door_open);
    }
}

#[cfg(test)]
mod fleet {
    use lift_core::{Direction, Floor, LiftId};

    use crate::LiftFleet;

    #[test]
    fn new_fleet_parks_everyone_at_ground() {
        let fleet = LiftFleet::new(3);
        assert_eq!(fleet.len(), 3);
        for (i, lift) in fleet.iter().enumerate() {
            assert_eq!(lift.id, LiftId(i as u32));
            assert_eq!(lift.level, Floor::GROUND);
            assert!(lift.idle());
        }
    }

    #[test]
    fn nearest_idle_picks_minimum_distance() {
        let mut fleet = LiftFleet::with_levels(vec![Floor(0), Floor(4)]);
        assert_eq!(fleet.nearest_idle(Floor(3)), Some(LiftId(1)));
        assert_eq!(fleet.nearest_idle(Floor(1)), Some(LiftId(0)));

        // Busy lifts are invisible to the scan.
        fleet.get_mut(LiftId(1)).unwrap().assign(Floor(0), Direction::Down);
        assert_eq!(fleet.nearest_idle(Floor(3)), Some(LiftId(0)));
    }

    #[test]
    fn nearest_idle_tie_breaks_to_lowest_id() {
        let fleet = LiftFleet::with_levels(vec![Floor(2), Floor(4)]);
        // Floor 3 is 1 away from both lifts.
        assert_eq!(fleet.nearest_idle(Floor(3)), Some(LiftId(0)));
    }

    #[test]
    fn nearest_idle_none_when_all_busy() {
        let mut fleet = LiftFleet::new(2);
        for lift in fleet.iter_mut() {
            lift.assign(Floor(1), Direction::Up);
        }
        assert_eq!(fleet.nearest_idle(Floor(0)), None);
        assert_eq!(fleet.in_service_count(), 2);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let fleet = LiftFleet::new(1);
        assert!(fleet.get(LiftId(5)).is_none());
    }
}
