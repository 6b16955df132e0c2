//! A rider's trip through the building: call, board, close door, travel.

use serde::{Deserialize, Serialize};

use crate::core::{Building, Direction, DispatchError, ElevatorId};

/// A trip from one floor to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ride {
    /// Floor the rider calls from.
    pub from: u32,
    /// Floor the rider wants to reach.
    pub to: u32,
}

impl Ride {
    /// Ride from `from` to `to`.
    #[must_use]
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// Hall button the rider presses. A ride to the same floor presses up.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        Direction::between(self.from, self.to).0
    }
}

/// How a ride ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RideOutcome {
    /// The rider arrived.
    Completed {
        /// Elevator that carried the rider.
        elevator: ElevatorId,
        /// Arrival floor.
        floor: u32,
    },
    /// Every elevator was busy when the rider called.
    NoElevator {
        /// Floor the rider called from.
        from: u32,
    },
}

/// Perform `ride` on the current thread, blocking for the simulated travel.
///
/// # Errors
///
/// Returns [`DispatchError::FloorOutOfRange`] if either floor is outside the
/// building, or any error raised while driving the elevator.
pub fn run_ride(building: &Building, ride: Ride) -> Result<RideOutcome, DispatchError> {
    let panel = building.floor_panel(ride.from)?;
    let call = match ride.direction() {
        Direction::Up => panel.go_up()?,
        Direction::Down => panel.go_down()?,
    };
    let Some(inside) = call else {
        return Ok(RideOutcome::NoElevator { from: ride.from });
    };
    inside.close_door()?;
    let floor = inside.go_to_floor(ride.to)?;
    Ok(RideOutcome::Completed {
        elevator: inside.elevator(),
        floor,
    })
}
