//! Elevator state and single-floor stepping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::DispatchError;
use crate::core::lease::Lease;

/// Identifier of an elevator in the pool, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElevatorId(pub u32);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel or of a hall call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards higher floor numbers.
    Up,
    /// Towards lower floor numbers.
    Down,
}

impl Direction {
    /// Direction and distance from `from` to `to`.
    ///
    /// Equal floors report `Up` with a distance of zero.
    #[must_use]
    pub const fn between(from: u32, to: u32) -> (Self, u32) {
        if from > to {
            (Self::Down, from - to)
        } else {
            (Self::Up, to - from)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Motion status of an elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevatorStatus {
    /// Not executing a command; eligible for assignment.
    Idle,
    /// Travelling, or reserved for a ride that has not finished.
    Moving,
}

/// Door position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorState {
    /// Door is open.
    Open,
    /// Door is closed.
    Closed,
}

/// Rated capacity. Informational only; never used for admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Rated load in kilograms.
    pub kg: u32,
    /// Rated passenger count.
    pub pax: u32,
}

/// Mutable state of one elevator.
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    capacity: Capacity,
    floor: u32,
    top_floor: u32,
    status: ElevatorStatus,
    door: DoorState,
    lease: Option<Lease>,
}

impl Elevator {
    /// Create an idle elevator with its door closed at `floor`.
    #[must_use]
    pub const fn new(id: ElevatorId, capacity: Capacity, floor: u32, top_floor: u32) -> Self {
        Self {
            id,
            capacity,
            floor,
            top_floor,
            status: ElevatorStatus::Idle,
            door: DoorState::Closed,
            lease: None,
        }
    }

    /// Elevator identifier.
    #[must_use]
    pub const fn id(&self) -> ElevatorId {
        self.id
    }

    /// Rated capacity.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Current floor.
    #[must_use]
    pub const fn floor(&self) -> u32 {
        self.floor
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> ElevatorStatus {
        self.status
    }

    /// Current door position.
    #[must_use]
    pub const fn door(&self) -> DoorState {
        self.door
    }

    /// Lease currently holding this elevator, if any.
    #[must_use]
    pub const fn lease(&self) -> Option<&Lease> {
        self.lease.as_ref()
    }

    /// Whether the elevator may be assigned to a new call.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status == ElevatorStatus::Idle
    }

    pub(crate) fn set_status(&mut self, status: ElevatorStatus) {
        self.status = status;
    }

    pub(crate) fn set_door(&mut self, door: DoorState) {
        self.door = door;
    }

    pub(crate) fn set_lease(&mut self, lease: Option<Lease>) {
        self.lease = lease;
    }

    /// Move exactly one floor in `direction` and return the new floor.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::FloorOutOfRange`] if the step would leave
    /// `1..=top_floor`; the floor is left unchanged.
    pub fn step(&mut self, direction: Direction) -> Result<u32, DispatchError> {
        let next = match direction {
            Direction::Up => self.floor.checked_add(1),
            Direction::Down => self.floor.checked_sub(1),
        };
        match next {
            Some(floor) if (1..=self.top_floor).contains(&floor) => {
                self.floor = floor;
                Ok(floor)
            }
            Some(floor) => Err(DispatchError::FloorOutOfRange {
                floor,
                top: self.top_floor,
            }),
            None => Err(DispatchError::FloorOutOfRange {
                floor: 0,
                top: self.top_floor,
            }),
        }
    }

    /// Serializable view of this elevator.
    #[must_use]
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            floor: self.floor,
            status: self.status,
            door: self.door,
            capacity: self.capacity,
            leased: self.lease.is_some(),
        }
    }
}

/// Point-in-time view of an elevator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorSnapshot {
    /// Elevator identifier.
    pub id: ElevatorId,
    /// Current floor.
    pub floor: u32,
    /// Current status.
    pub status: ElevatorStatus,
    /// Current door position.
    pub door: DoorState,
    /// Rated capacity.
    pub capacity: Capacity,
    /// Whether a rider currently holds a lease on it.
    pub leased: bool,
}

impl ElevatorSnapshot {
    /// Whether the snapshot shows an idle elevator.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status == ElevatorStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elevator_at(floor: u32) -> Elevator {
        Elevator::new(ElevatorId(1), Capacity { kg: 15, pax: 8 }, floor, 15)
    }

    #[test]
    fn test_new_elevator_is_idle_and_closed() {
        let e = elevator_at(15);
        assert!(e.is_idle());
        assert_eq!(e.door(), DoorState::Closed);
        assert!(e.lease().is_none());
    }

    #[test]
    fn test_step_moves_one_floor() {
        let mut e = elevator_at(5);
        assert_eq!(e.step(Direction::Up), Ok(6));
        assert_eq!(e.step(Direction::Down), Ok(5));
        assert_eq!(e.step(Direction::Down), Ok(4));
    }

    #[test]
    fn test_step_rejects_leaving_building() {
        let mut top = elevator_at(15);
        assert_eq!(
            top.step(Direction::Up),
            Err(DispatchError::FloorOutOfRange { floor: 16, top: 15 })
        );
        assert_eq!(top.floor(), 15);

        let mut bottom = elevator_at(1);
        assert!(bottom.step(Direction::Down).is_err());
        assert_eq!(bottom.floor(), 1);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(15, 2), (Direction::Down, 13));
        assert_eq!(Direction::between(2, 10), (Direction::Up, 8));
        assert_eq!(Direction::between(7, 7), (Direction::Up, 0));
    }

    #[test]
    fn test_snapshot_serializes_snake_case() {
        let json = serde_json::to_string(&elevator_at(3).snapshot()).unwrap();
        assert!(json.contains("\"status\":\"idle\""));
        assert!(json.contains("\"door\":\"closed\""));
        assert!(json.contains("\"id\":1"));
    }
}
