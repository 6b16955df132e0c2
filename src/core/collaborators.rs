//! External collaborators the control system calls into: door hardware and
//! floor displays.
//!
//! The defaults only emit tracing events. Hardware integrations implement the
//! traits and are handed to the builder.

use crate::core::elevator::{Direction, ElevatorId};

/// Door actuator for the elevators in a pool.
pub trait Door: Send + Sync {
    /// Open the door of `elevator`. Assumed to always succeed.
    fn open(&self, elevator: ElevatorId);
    /// Close the door of `elevator`. Assumed to always succeed.
    fn close(&self, elevator: ElevatorId);
}

/// Floor indicator shown inside cars and on landings.
pub trait Display: Send + Sync {
    /// Show that `elevator` is at `floor`, moving in `direction` or stopped.
    fn show(&self, elevator: ElevatorId, floor: u32, direction: Option<Direction>);
}

/// Door that logs each command.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedDoor;

impl Door for LoggedDoor {
    fn open(&self, elevator: ElevatorId) {
        tracing::info!(%elevator, "opening door");
    }

    fn close(&self, elevator: ElevatorId) {
        tracing::info!(%elevator, "closing door");
    }
}

/// Display that logs at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedDisplay;

impl Display for LoggedDisplay {
    fn show(&self, elevator: ElevatorId, floor: u32, direction: Option<Direction>) {
        match direction {
            Some(direction) => tracing::debug!(%elevator, floor, %direction, "display"),
            None => tracing::debug!(%elevator, floor, "display (stopped)"),
        }
    }
}
