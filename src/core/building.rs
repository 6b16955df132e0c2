//! Building bootstrap: floors wired to a shared control system.

use std::sync::Arc;

use crate::config::BuildingConfig;
use crate::core::control::ElevatorControlSystem;
use crate::core::panel::OutsidePanel;
use crate::core::DispatchError;

/// One floor and its hall call panel.
#[derive(Debug, Clone)]
pub struct Floor {
    number: u32,
    panel: OutsidePanel,
}

impl Floor {
    /// Floor number, starting at 1.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Hall call panel on this floor.
    #[must_use]
    pub const fn panel(&self) -> &OutsidePanel {
        &self.panel
    }
}

/// Floors sharing one elevator control system.
#[derive(Debug)]
pub struct Building {
    floors: Vec<Floor>,
    system: Arc<ElevatorControlSystem>,
}

impl Building {
    /// Create a building with default collaborators from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: &BuildingConfig) -> Result<Self, DispatchError> {
        let system = ElevatorControlSystem::new(config)?;
        Ok(Self::with_system(Arc::new(system)))
    }

    /// Create floors `1..=system.top_floor()` around an existing system.
    #[must_use]
    pub fn with_system(system: Arc<ElevatorControlSystem>) -> Self {
        tracing::info!(floors = system.top_floor(), "initializing building");
        let floors = (1..=system.top_floor())
            .map(|number| Floor {
                number,
                panel: OutsidePanel::new(number, Arc::clone(&system)),
            })
            .collect();
        Self { floors, system }
    }

    /// Number of floors.
    #[must_use]
    pub fn floor_count(&self) -> u32 {
        self.system.top_floor()
    }

    /// All floors, lowest first.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Hall call panel of `floor`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::FloorOutOfRange`] for floor 0 or a floor above
    /// the top floor.
    pub fn floor_panel(&self, floor: u32) -> Result<&OutsidePanel, DispatchError> {
        (floor as usize)
            .checked_sub(1)
            .and_then(|index| self.floors.get(index))
            .map(Floor::panel)
            .ok_or(DispatchError::FloorOutOfRange {
                floor,
                top: self.floor_count(),
            })
    }

    /// Shared control system.
    #[must_use]
    pub const fn system(&self) -> &Arc<ElevatorControlSystem> {
        &self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building() -> Building {
        Building::new(&BuildingConfig {
            step_interval_ms: 0,
            ..BuildingConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_floors_numbered_from_one() {
        let b = building();
        assert_eq!(b.floors().len(), 15);
        assert_eq!(b.floors()[0].number(), 1);
        assert_eq!(b.floor_panel(15).unwrap().floor(), 15);
    }

    #[test]
    fn test_floor_panel_out_of_range() {
        let b = building();
        assert_eq!(
            b.floor_panel(16).unwrap_err(),
            DispatchError::FloorOutOfRange { floor: 16, top: 15 }
        );
        assert!(b.floor_panel(0).is_err());
    }
}
