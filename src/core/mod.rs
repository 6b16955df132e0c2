//! Elevator pool, call assignment and movement simulation.

pub mod audit;
pub mod building;
pub mod car;
pub mod collaborators;
pub mod control;
pub mod elevator;
pub mod error;
pub mod lease;
pub mod panel;
pub mod policy;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use building::{Building, Floor};
pub use car::{Drive, ElevatorCar};
pub use collaborators::{Display, Door, LoggedDisplay, LoggedDoor};
pub use control::ElevatorControlSystem;
pub use elevator::{
    Capacity, Direction, DoorState, Elevator, ElevatorId, ElevatorSnapshot, ElevatorStatus,
};
pub use error::{AppResult, DispatchError};
pub use lease::Lease;
pub use panel::{InsidePanel, OutsidePanel};
pub use policy::{AssignmentPolicy, FirstIdle, NearestIdle};
