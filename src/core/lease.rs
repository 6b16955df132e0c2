//! Ride leases binding a caller to the elevator assigned to its call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::elevator::{Direction, ElevatorId};
use crate::util::clock::now_ms;

/// Record of one call assignment.
///
/// Issued when an idle elevator is selected for a hall call and released when
/// the ride ends. Only the holder of the current lease may drive the elevator
/// through an inside panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    /// Unique lease identifier.
    pub id: Uuid,
    /// Elevator the lease holds.
    pub elevator: ElevatorId,
    /// Floor the call was made from.
    pub calling_floor: u32,
    /// Direction the caller asked for. Travel direction is derived from floor
    /// positions and may differ.
    pub requested: Direction,
    /// Issue time in milliseconds since epoch.
    pub issued_at_ms: u128,
}

impl Lease {
    pub(crate) fn issue(elevator: ElevatorId, calling_floor: u32, requested: Direction) -> Self {
        Self {
            id: Uuid::new_v4(),
            elevator,
            calling_floor,
            requested,
            issued_at_ms: now_ms(),
        }
    }
}
