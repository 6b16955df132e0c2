//! Tests for runtime rider helpers

use elevator_dispatch::builders::BuildingBuilder;
use elevator_dispatch::config::BuildingConfig;
use elevator_dispatch::core::{Direction, DispatchError, ElevatorId};
use elevator_dispatch::runtime::{run_ride, Ride, RideOutcome};

fn building(elevators: u32) -> elevator_dispatch::core::Building {
    BuildingBuilder::new(BuildingConfig {
        elevators,
        step_interval_ms: 0,
        ..BuildingConfig::default()
    })
    .build()
    .unwrap()
}

#[test]
fn test_ride_direction() {
    assert_eq!(Ride::new(2, 10).direction(), Direction::Up);
    assert_eq!(Ride::new(15, 1).direction(), Direction::Down);
    assert_eq!(Ride::new(4, 4).direction(), Direction::Up);
}

#[test]
fn test_run_ride_completes() {
    let building = building(1);
    let outcome = run_ride(&building, Ride::new(2, 10)).unwrap();
    assert_eq!(
        outcome,
        RideOutcome::Completed {
            elevator: ElevatorId(1),
            floor: 10
        }
    );
}

#[test]
fn test_run_ride_without_idle_elevator() {
    let building = building(1);
    let _held = building.floor_panel(5).unwrap().go_up().unwrap().unwrap();
    let outcome = run_ride(&building, Ride::new(2, 10)).unwrap();
    assert_eq!(outcome, RideOutcome::NoElevator { from: 2 });
}

#[test]
fn test_run_ride_rejects_unknown_floor() {
    let building = building(1);
    assert_eq!(
        run_ride(&building, Ride::new(20, 1)),
        Err(DispatchError::FloorOutOfRange { floor: 20, top: 15 })
    );
}

#[test]
fn test_ride_outcome_serialization() {
    let json = serde_json::to_string(&RideOutcome::NoElevator { from: 3 }).unwrap();
    assert_eq!(json, r#"{"outcome":"no_elevator","from":3}"#);
}
