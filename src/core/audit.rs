//! Audit sink implementations.
//!
//! Every assignment, arrival, door command and ride completion can be recorded
//! for later inspection.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::elevator::ElevatorId;
use crate::util::clock::now_ms;

/// Action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// An idle elevator was selected for a hall call.
    Assign,
    /// A hall call found no idle elevator.
    NoElevator,
    /// An elevator reached its target floor.
    Arrive,
    /// Door opened.
    DoorOpen,
    /// Door closed.
    DoorClose,
    /// A ride finished and the elevator went idle.
    Release,
    /// A stale or foreign lease tried to drive an elevator.
    LeaseRejected,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Elevator involved, if any.
    pub elevator: Option<ElevatorId>,
    /// Action taken.
    pub action: AuditAction,
    /// Floor where the action happened.
    pub floor: u32,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub payload: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// Bounded in-memory audit sink. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Events for one action, oldest first.
    #[must_use]
    pub fn actions(&self, action: AuditAction) -> Vec<AuditEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.action == action)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    elevator: Option<ElevatorId>,
    action: AuditAction,
    floor: u32,
    payload: Option<String>,
) -> AuditEvent {
    AuditEvent {
        elevator,
        action,
        floor,
        created_at_ms: now_ms(),
        payload,
    }
}
