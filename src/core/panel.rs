//! Call panels: one outside each floor, one inside each assigned elevator.

use std::sync::Arc;

use crate::core::control::ElevatorControlSystem;
use crate::core::elevator::{Direction, ElevatorId};
use crate::core::lease::Lease;
use crate::core::DispatchError;

/// Hall call panel mounted on one floor.
#[derive(Debug, Clone)]
pub struct OutsidePanel {
    floor: u32,
    system: Arc<ElevatorControlSystem>,
}

impl OutsidePanel {
    /// Panel for `floor`, forwarding calls to `system`.
    #[must_use]
    pub const fn new(floor: u32, system: Arc<ElevatorControlSystem>) -> Self {
        Self { floor, system }
    }

    /// Floor this panel is mounted on.
    #[must_use]
    pub const fn floor(&self) -> u32 {
        self.floor
    }

    /// Press the up button.
    ///
    /// `Ok(None)` means no elevator was free; the caller decides whether to
    /// press again.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ElevatorControlSystem::call_elevator`].
    pub fn go_up(&self) -> Result<Option<InsidePanel>, DispatchError> {
        self.call(Direction::Up)
    }

    /// Press the down button.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ElevatorControlSystem::call_elevator`].
    pub fn go_down(&self) -> Result<Option<InsidePanel>, DispatchError> {
        self.call(Direction::Down)
    }

    fn call(&self, direction: Direction) -> Result<Option<InsidePanel>, DispatchError> {
        tracing::info!(floor = self.floor, %direction, "outside panel pressed");
        self.system.call_elevator(self.floor, direction)
    }
}

/// Car panel handed to the rider an elevator was assigned to.
#[derive(Debug, Clone)]
pub struct InsidePanel {
    system: Arc<ElevatorControlSystem>,
    lease: Lease,
}

impl InsidePanel {
    pub(crate) const fn new(system: Arc<ElevatorControlSystem>, lease: Lease) -> Self {
        Self { system, lease }
    }

    /// Elevator this panel is bound to.
    #[must_use]
    pub const fn elevator(&self) -> ElevatorId {
        self.lease.elevator
    }

    /// Lease held by this panel.
    #[must_use]
    pub const fn lease(&self) -> &Lease {
        &self.lease
    }

    /// Close the elevator's door.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`ElevatorControlSystem::close_door`].
    pub fn close_door(&self) -> Result<(), DispatchError> {
        self.system.close_door(self.lease.elevator)
    }

    /// Travel to `destination`, ending the ride. Returns the arrival floor.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LeaseMismatch`] once the ride has ended or the
    /// elevator was released by an operator command, and
    /// [`DispatchError::FloorOutOfRange`] for a floor outside the building.
    pub fn go_to_floor(&self, destination: u32) -> Result<u32, DispatchError> {
        self.system.ride(&self.lease, destination)
    }
}
