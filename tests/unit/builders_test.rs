//! Tests for builder modules

use std::sync::Arc;

use elevator_dispatch::builders::BuildingBuilder;
use elevator_dispatch::config::BuildingConfig;
use elevator_dispatch::core::{DispatchError, ElevatorId, ElevatorStatus, LoggedDoor, NearestIdle};

fn fast() -> BuildingConfig {
    BuildingConfig {
        step_interval_ms: 0,
        ..BuildingConfig::default()
    }
}

#[test]
fn test_building_builder_defaults() {
    let builder = BuildingBuilder::new(fast());
    assert_eq!(builder.config().floors, 15);
    assert_eq!(builder.config().elevators, 3);

    let building = builder.build().unwrap();
    assert_eq!(building.floor_count(), 15);
    assert_eq!(building.system().len(), 3);
    assert!(building
        .system()
        .snapshot()
        .iter()
        .all(|e| e.status == ElevatorStatus::Idle && e.floor == 15));
}

#[test]
fn test_building_builder_rejects_invalid_config() {
    let err = BuildingBuilder::new(BuildingConfig {
        elevators: 0,
        ..fast()
    })
    .build()
    .unwrap_err();
    assert!(matches!(err, DispatchError::InvalidConfig(_)));
}

#[test]
fn test_building_builder_policy_override() {
    let building = BuildingBuilder::new(fast())
        .with_door(Arc::new(LoggedDoor))
        .with_policy(Box::new(NearestIdle))
        .build()
        .unwrap();

    building.system().go_to_floor(ElevatorId(3), 2).unwrap();
    let panel = building.floor_panel(1).unwrap().go_up().unwrap().unwrap();
    assert_eq!(panel.elevator(), ElevatorId(3));
}
