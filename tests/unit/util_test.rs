//! Tests for utility functions and domain value types

use elevator_dispatch::core::{Direction, ElevatorId};
use elevator_dispatch::util::{init_tracing, now_ms};

#[test]
fn test_now_ms_advances() {
    let a = now_ms();
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(now_ms() > a);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_direction_display() {
    assert_eq!(Direction::Up.to_string(), "up");
    assert_eq!(Direction::Down.to_string(), "down");
}

#[test]
fn test_elevator_id_serializes_as_number() {
    assert_eq!(serde_json::to_string(&ElevatorId(3)).unwrap(), "3");
    let id: ElevatorId = serde_json::from_str("2").unwrap();
    assert_eq!(id, ElevatorId(2));
}
