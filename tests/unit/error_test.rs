//! Tests for error types

use elevator_dispatch::core::{DispatchError, ElevatorId};
use uuid::Uuid;

#[test]
fn test_unknown_elevator_error() {
    let err = DispatchError::UnknownElevator(ElevatorId(7));
    assert_eq!(format!("{}", err), "unknown elevator: 7");
}

#[test]
fn test_floor_out_of_range_error() {
    let err = DispatchError::FloorOutOfRange { floor: 16, top: 15 };
    assert_eq!(format!("{}", err), "floor 16 out of range 1..=15");
}

#[test]
fn test_lease_mismatch_error() {
    let lease = Uuid::nil();
    let err = DispatchError::LeaseMismatch {
        elevator: ElevatorId(2),
        lease,
    };
    assert_eq!(
        format!("{}", err),
        "lease 00000000-0000-0000-0000-000000000000 does not hold elevator 2"
    );
}

#[test]
fn test_invalid_config_error() {
    let err = DispatchError::InvalidConfig("floors must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: floors must be greater than 0"
    );
}

#[test]
fn test_app_result_wraps_dispatch_error() {
    fn fails() -> elevator_dispatch::core::AppResult<()> {
        Err(DispatchError::UnknownElevator(ElevatorId(1)).into())
    }
    let err = fails().unwrap_err();
    assert!(err.downcast_ref::<DispatchError>().is_some());
}
