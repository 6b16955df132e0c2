//! Tests for configuration validation

use elevator_dispatch::config::{AssignmentPolicyConfig, BuildingConfig};

#[test]
fn test_building_config_validation() {
    let valid = BuildingConfig {
        floors: 10,
        elevators: 2,
        default_floor: 1,
        step_interval_ms: 0,
        capacity_kg: 680,
        capacity_pax: 8,
        assignment: AssignmentPolicyConfig::FirstIdle,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_building_config_invalid_floors() {
    let invalid = BuildingConfig {
        floors: 0,
        default_floor: 0,
        ..BuildingConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_building_config_invalid_elevators() {
    let invalid = BuildingConfig {
        elevators: 0,
        ..BuildingConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_building_config_default_floor_outside_building() {
    let invalid = BuildingConfig {
        floors: 10,
        ..BuildingConfig::default()
    };
    let err = invalid.validate().unwrap_err();
    assert!(err.contains("default_floor"));
}

#[test]
fn test_building_config_from_json() {
    let json = r#"{
        "floors": 20,
        "elevators": 4,
        "default_floor": 1,
        "step_interval_ms": 50,
        "assignment": "nearest_idle"
    }"#;

    let config = BuildingConfig::from_json_str(json).unwrap();
    assert_eq!(config.floors, 20);
    assert_eq!(config.elevators, 4);
    assert_eq!(config.assignment, AssignmentPolicyConfig::NearestIdle);
    // Missing fields keep their defaults.
    assert_eq!(config.capacity_pax, 8);
}

#[test]
fn test_building_config_from_json_invalid() {
    assert!(BuildingConfig::from_json_str(r#"{ "elevators": 0 }"#).is_err());
    assert!(BuildingConfig::from_json_str("not json").is_err());
    assert!(BuildingConfig::from_json_str(r#"{ "assignment": "round_robin" }"#).is_err());
}
