//! One elevator in the pool and its movement simulation.
//!
//! Each car carries two `parking_lot` mutexes:
//!
//! - `state` guards floor, status, door and lease. It is held only for single
//!   reads or writes, so snapshots never wait on a travelling car.
//! - `drive` is held for the whole of a movement command. Only the holder of
//!   a [`Drive`] can move the car, so one car is never commanded by two
//!   callers at once.

use std::thread;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use crate::core::collaborators::Display;
use crate::core::elevator::{Direction, Elevator, ElevatorId, ElevatorSnapshot, ElevatorStatus};
use crate::core::DispatchError;

/// An elevator plus the locks coordinating access to it.
#[derive(Debug)]
pub struct ElevatorCar {
    id: ElevatorId,
    state: Mutex<Elevator>,
    drive: Mutex<()>,
    step_interval: Duration,
}

impl ElevatorCar {
    /// Wrap an elevator, simulating `step_interval` per floor travelled.
    #[must_use]
    pub fn new(elevator: Elevator, step_interval: Duration) -> Self {
        Self {
            id: elevator.id(),
            state: Mutex::new(elevator),
            drive: Mutex::new(()),
            step_interval,
        }
    }

    /// Elevator identifier.
    #[must_use]
    pub const fn id(&self) -> ElevatorId {
        self.id
    }

    /// Current state of the elevator.
    #[must_use]
    pub fn snapshot(&self) -> ElevatorSnapshot {
        self.state.lock().snapshot()
    }

    /// Short-held access to the elevator state.
    pub(crate) fn state(&self) -> MutexGuard<'_, Elevator> {
        self.state.lock()
    }

    /// Take exclusive control of the car, blocking while another caller
    /// drives it.
    pub fn drive(&self) -> Drive<'_> {
        Drive {
            car: self,
            _guard: self.drive.lock(),
        }
    }
}

/// Exclusive right to move one car. Released on drop.
pub struct Drive<'a> {
    car: &'a ElevatorCar,
    _guard: MutexGuard<'a, ()>,
}

impl Drive<'_> {
    /// Travel `floors` floors in `direction`, one floor per step interval.
    ///
    /// Status is set to `Moving` before the first step and left `Moving`
    /// afterwards; the control system decides when the car is idle again.
    /// Each step is reported to `display` and logged. Returns the final floor.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::FloorOutOfRange`] if a step would leave the
    /// building. Floors already travelled are kept.
    pub fn move_to_floor(
        &self,
        floors: u32,
        direction: Direction,
        display: &dyn Display,
    ) -> Result<u32, DispatchError> {
        let car = self.car;
        let mut floor = {
            let mut state = car.state();
            state.set_status(ElevatorStatus::Moving);
            state.floor()
        };
        for _ in 0..floors {
            if !car.step_interval.is_zero() {
                thread::sleep(car.step_interval);
            }
            floor = car.state().step(direction)?;
            tracing::debug!(elevator = %car.id, %direction, floor, "moving");
            display.show(car.id, floor, Some(direction));
        }
        display.show(car.id, floor, None);
        Ok(floor)
    }

    /// Elevator being driven.
    #[must_use]
    pub const fn id(&self) -> ElevatorId {
        self.car.id
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, Elevator> {
        self.car.state()
    }
}
