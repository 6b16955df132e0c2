//! Assignment policies choosing which idle elevator answers a hall call.

use crate::core::elevator::{ElevatorId, ElevatorSnapshot};

/// Picks an elevator for a call from the pool, in pool order.
///
/// Implementations must only return ids of idle elevators.
pub trait AssignmentPolicy: Send + Sync {
    /// Select an elevator for a call from `calling_floor`, or `None` if no
    /// elevator is eligible.
    fn select(&self, pool: &[ElevatorSnapshot], calling_floor: u32) -> Option<ElevatorId>;
}

/// First idle elevator in pool order, regardless of distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstIdle;

impl AssignmentPolicy for FirstIdle {
    fn select(&self, pool: &[ElevatorSnapshot], _calling_floor: u32) -> Option<ElevatorId> {
        pool.iter().find(|e| e.is_idle()).map(|e| e.id)
    }
}

/// Idle elevator closest to the calling floor; ties go to the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestIdle;

impl AssignmentPolicy for NearestIdle {
    fn select(&self, pool: &[ElevatorSnapshot], calling_floor: u32) -> Option<ElevatorId> {
        pool.iter()
            .filter(|e| e.is_idle())
            .min_by_key(|e| e.floor.abs_diff(calling_floor))
            .map(|e| e.id)
    }
}
