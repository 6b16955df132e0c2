//! Tests for audit sink

use elevator_dispatch::core::{build_audit_event, AuditAction, AuditSink, ElevatorId, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        Some(ElevatorId(1)),
        AuditAction::Assign,
        15,
        Some("call=2 up".to_string()),
    );

    sink.record(event);
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].elevator, Some(ElevatorId(1)));
    assert_eq!(events[0].action, AuditAction::Assign);
    assert_eq!(events[0].floor, 15);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(None, AuditAction::NoElevator, 1, None));
    sink.record(build_audit_event(None, AuditAction::NoElevator, 2, None));
    sink.record(build_audit_event(None, AuditAction::NoElevator, 3, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].floor, 2); // First one popped
    assert_eq!(events[1].floor, 3);
}

#[test]
fn test_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(10);
    let mut writer = sink.clone();
    writer.record(build_audit_event(Some(ElevatorId(3)), AuditAction::DoorOpen, 4, None));
    writer.record(build_audit_event(Some(ElevatorId(3)), AuditAction::DoorClose, 4, None));

    assert_eq!(sink.events().len(), 2);
    assert_eq!(sink.actions(AuditAction::DoorClose).len(), 1);
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        Some(ElevatorId(2)),
        AuditAction::Release,
        10,
        Some("done".to_string()),
    );

    assert_eq!(event.action, AuditAction::Release);
    assert_eq!(event.payload, Some("done".to_string()));
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_action_serializes_snake_case() {
    let json = serde_json::to_string(&AuditAction::LeaseRejected).unwrap();
    assert_eq!(json, "\"lease_rejected\"");
}
