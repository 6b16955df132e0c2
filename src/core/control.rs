//! Elevator control system: call assignment and movement commands.
//!
//! Assignment runs under a short-held selection lock. The chosen car is
//! reserved (status `Moving`, fresh lease) before that lock is released, so
//! concurrent callers never receive the same elevator. Travel then happens
//! under the car's own drive lock, letting different cars move at the same
//! time while a single car only ever has one driver.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::BuildingConfig;
use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::car::{Drive, ElevatorCar};
use crate::core::collaborators::{Display, Door, LoggedDisplay, LoggedDoor};
use crate::core::elevator::{
    Capacity, Direction, DoorState, Elevator, ElevatorId, ElevatorSnapshot, ElevatorStatus,
};
use crate::core::lease::Lease;
use crate::core::panel::InsidePanel;
use crate::core::policy::AssignmentPolicy;
use crate::core::DispatchError;

/// Owns the fixed pool of elevators and serializes access to them.
pub struct ElevatorControlSystem {
    top_floor: u32,
    cars: Vec<ElevatorCar>,
    selection: Mutex<()>,
    policy: Box<dyn AssignmentPolicy>,
    door: Arc<dyn Door>,
    display: Arc<dyn Display>,
    audit: Option<Mutex<Box<dyn AuditSink>>>,
}

impl std::fmt::Debug for ElevatorControlSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevatorControlSystem")
            .field("top_floor", &self.top_floor)
            .field("cars", &self.cars)
            .finish_non_exhaustive()
    }
}

impl ElevatorControlSystem {
    /// Build `config.elevators` idle elevators at `config.default_floor`.
    ///
    /// Door and display default to logging collaborators; no audit sink is
    /// attached.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: &BuildingConfig) -> Result<Self, DispatchError> {
        config.validate().map_err(DispatchError::InvalidConfig)?;
        info!(
            elevators = config.elevators,
            floors = config.floors,
            "initializing elevator control system"
        );
        let capacity = Capacity {
            kg: config.capacity_kg,
            pax: config.capacity_pax,
        };
        let step = Duration::from_millis(config.step_interval_ms);
        let cars = (1..=config.elevators)
            .map(|n| {
                let elevator =
                    Elevator::new(ElevatorId(n), capacity, config.default_floor, config.floors);
                ElevatorCar::new(elevator, step)
            })
            .collect();
        Ok(Self {
            top_floor: config.floors,
            cars,
            selection: Mutex::new(()),
            policy: config.assignment.policy(),
            door: Arc::new(LoggedDoor),
            display: Arc::new(LoggedDisplay),
            audit: None,
        })
    }

    /// Replace the door collaborator.
    #[must_use]
    pub fn with_door(mut self, door: Arc<dyn Door>) -> Self {
        self.door = door;
        self
    }

    /// Replace the display collaborator.
    #[must_use]
    pub fn with_display(mut self, display: Arc<dyn Display>) -> Self {
        self.display = display;
        self
    }

    /// Replace the assignment policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn AssignmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Mutex::new(audit));
        self
    }

    /// Highest floor served.
    #[must_use]
    pub const fn top_floor(&self) -> u32 {
        self.top_floor
    }

    /// Number of elevators in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the pool is empty. Never true for a validated configuration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// State of every elevator, in pool order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ElevatorSnapshot> {
        self.cars.iter().map(ElevatorCar::snapshot).collect()
    }

    /// State of one elevator.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownElevator`] for an id outside the pool.
    pub fn elevator(&self, id: ElevatorId) -> Result<ElevatorSnapshot, DispatchError> {
        self.car(id).map(ElevatorCar::snapshot)
    }

    /// Assign an idle elevator to a hall call and bring it to `calling_floor`.
    ///
    /// Returns the inside panel of the assigned elevator with its door open,
    /// or `Ok(None)` when every elevator is busy. A busy pool is left
    /// untouched. The elevator stays reserved until the ride started from the
    /// returned panel finishes.
    ///
    /// Travel direction is derived from the floors, not from `requested`;
    /// `requested` is kept on the lease.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::FloorOutOfRange`] if `calling_floor` is not in
    /// the building, or [`DispatchError::LeaseMismatch`] if an operator
    /// command released the elevator before it reached the caller.
    pub fn call_elevator(
        self: &Arc<Self>,
        calling_floor: u32,
        requested: Direction,
    ) -> Result<Option<InsidePanel>, DispatchError> {
        self.check_floor(calling_floor)?;

        let Some((car, lease)) = self.reserve(calling_floor, requested) else {
            warn!(calling_floor, %requested, "no idle elevator available");
            self.record(None, AuditAction::NoElevator, calling_floor, None);
            return Ok(None);
        };

        let drive = car.drive();
        self.check_lease(&drive, &lease)?;
        let current = drive.state().floor();
        let (direction, floors) = Direction::between(current, calling_floor);
        if floors > 0 && direction != requested {
            debug!(
                elevator = %car.id(),
                %requested,
                %direction,
                "travel direction differs from requested direction"
            );
        }
        info!(elevator = %car.id(), from = current, to = calling_floor, "elevator assigned to call");

        self.travel(&drive, floors, direction)?;
        self.open_door(&drive, calling_floor);
        Ok(Some(InsidePanel::new(Arc::clone(self), lease)))
    }

    /// Move an elevator to `destination`, open its door and mark it idle.
    ///
    /// This is the unchecked command: any lease on the elevator is released.
    /// Riders go through [`ElevatorControlSystem::ride`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownElevator`] for an id outside the pool
    /// and [`DispatchError::FloorOutOfRange`] for a destination outside the
    /// building.
    pub fn go_to_floor(&self, id: ElevatorId, destination: u32) -> Result<u32, DispatchError> {
        let car = self.car(id)?;
        self.check_floor(destination)?;
        info!(elevator = %id, destination, "moving elevator to floor");
        let drive = car.drive();
        self.finish_ride(&drive, destination)
    }

    /// Drive the elevator held by `lease` to `destination` and end the ride.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LeaseMismatch`] if the lease no longer holds
    /// its elevator, plus the errors of [`ElevatorControlSystem::go_to_floor`].
    pub fn ride(&self, lease: &Lease, destination: u32) -> Result<u32, DispatchError> {
        let car = self.car(lease.elevator)?;
        self.check_floor(destination)?;
        let drive = car.drive();
        self.check_lease(&drive, lease)?;
        info!(elevator = %lease.elevator, lease = %lease.id, destination, "rider requested floor");
        self.finish_ride(&drive, destination)
    }

    /// Close the door of an elevator.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownElevator`] for an id outside the pool.
    pub fn close_door(&self, id: ElevatorId) -> Result<(), DispatchError> {
        let car = self.car(id)?;
        let floor = {
            let mut state = car.state();
            state.set_door(DoorState::Closed);
            state.floor()
        };
        self.door.close(id);
        self.record(Some(id), AuditAction::DoorClose, floor, None);
        Ok(())
    }

    fn car(&self, id: ElevatorId) -> Result<&ElevatorCar, DispatchError> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|index| self.cars.get(index))
            .ok_or(DispatchError::UnknownElevator(id))
    }

    const fn check_floor(&self, floor: u32) -> Result<(), DispatchError> {
        if floor == 0 || floor > self.top_floor {
            return Err(DispatchError::FloorOutOfRange {
                floor,
                top: self.top_floor,
            });
        }
        Ok(())
    }

    /// Pick and reserve an idle car under the selection lock.
    fn reserve(&self, calling_floor: u32, requested: Direction) -> Option<(&ElevatorCar, Lease)> {
        let _selection = self.selection.lock();
        let pool = self.snapshot();
        let id = self.policy.select(&pool, calling_floor)?;
        let car = self.car(id).ok()?;

        let mut state = car.state();
        if !state.is_idle() {
            warn!(elevator = %id, "policy selected a busy elevator");
            return None;
        }
        let lease = Lease::issue(id, calling_floor, requested);
        state.set_status(ElevatorStatus::Moving);
        state.set_lease(Some(lease.clone()));
        let floor = state.floor();
        drop(state);

        self.record(
            Some(id),
            AuditAction::Assign,
            floor,
            Some(format!("lease={} call={calling_floor} {requested}", lease.id)),
        );
        Some((car, lease))
    }

    fn check_lease(&self, drive: &Drive<'_>, lease: &Lease) -> Result<(), DispatchError> {
        let (held, floor) = {
            let state = drive.state();
            (state.lease().is_some_and(|l| l.id == lease.id), state.floor())
        };
        if held {
            return Ok(());
        }
        warn!(elevator = %drive.id(), lease = %lease.id, "lease does not hold elevator");
        self.record(
            Some(drive.id()),
            AuditAction::LeaseRejected,
            floor,
            Some(lease.id.to_string()),
        );
        Err(DispatchError::LeaseMismatch {
            elevator: drive.id(),
            lease: lease.id,
        })
    }

    fn finish_ride(&self, drive: &Drive<'_>, destination: u32) -> Result<u32, DispatchError> {
        let current = drive.state().floor();
        let (direction, floors) = Direction::between(current, destination);
        let floor = self.travel(drive, floors, direction)?;
        self.open_door(drive, floor);
        {
            let mut state = drive.state();
            state.set_status(ElevatorStatus::Idle);
            state.set_lease(None);
        }
        info!(elevator = %drive.id(), floor, "elevator idle");
        self.record(Some(drive.id()), AuditAction::Release, floor, None);
        Ok(floor)
    }

    /// Close an open door if the car is about to leave, then move it.
    fn travel(&self, drive: &Drive<'_>, floors: u32, direction: Direction) -> Result<u32, DispatchError> {
        if floors > 0 {
            let open_at = {
                let mut state = drive.state();
                let open = state.door() == DoorState::Open;
                state.set_door(DoorState::Closed);
                open.then(|| state.floor())
            };
            if let Some(floor) = open_at {
                self.door.close(drive.id());
                self.record(Some(drive.id()), AuditAction::DoorClose, floor, None);
            }
        }
        let floor = drive.move_to_floor(floors, direction, self.display.as_ref())?;
        info!(elevator = %drive.id(), floor, "elevator arrived");
        self.record(Some(drive.id()), AuditAction::Arrive, floor, None);
        Ok(floor)
    }

    fn open_door(&self, drive: &Drive<'_>, floor: u32) {
        drive.state().set_door(DoorState::Open);
        self.door.open(drive.id());
        self.record(Some(drive.id()), AuditAction::DoorOpen, floor, None);
    }

    fn record(&self, elevator: Option<ElevatorId>, action: AuditAction, floor: u32, payload: Option<String>) {
        if let Some(audit) = &self.audit {
            audit.lock().record(build_audit_event(elevator, action, floor, payload));
        }
    }
}
