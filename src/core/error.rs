//! Error types for dispatch operations.

use thiserror::Error;
use uuid::Uuid;

use crate::core::elevator::ElevatorId;

/// Errors produced by the control system, panels, and building.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No elevator with this id exists in the pool.
    #[error("unknown elevator: {0}")]
    UnknownElevator(ElevatorId),
    /// Floor is not inside `1..=top`.
    #[error("floor {floor} out of range 1..={top}")]
    FloorOutOfRange {
        /// Requested floor.
        floor: u32,
        /// Highest floor in the building.
        top: u32,
    },
    /// The lease presented does not hold the elevator (released or reissued).
    #[error("lease {lease} does not hold elevator {elevator}")]
    LeaseMismatch {
        /// Elevator the lease was issued for.
        elevator: ElevatorId,
        /// Lease identifier presented by the caller.
        lease: Uuid,
    },
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
