//! Builder wiring configuration and collaborators into a building.

use std::sync::Arc;

use crate::config::BuildingConfig;
use crate::core::{
    AssignmentPolicy, AuditSink, Building, Display, DispatchError, Door, ElevatorControlSystem,
};

/// Assembles a [`Building`] from configuration plus optional collaborators.
pub struct BuildingBuilder {
    config: BuildingConfig,
    door: Option<Arc<dyn Door>>,
    display: Option<Arc<dyn Display>>,
    policy: Option<Box<dyn AssignmentPolicy>>,
    audit: Option<Box<dyn AuditSink>>,
}

impl BuildingBuilder {
    /// Start from `config`.
    #[must_use]
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            door: None,
            display: None,
            policy: None,
            audit: None,
        }
    }

    /// Configuration the building will be created from.
    #[must_use]
    pub const fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// Use `door` instead of the logging door.
    #[must_use]
    pub fn with_door(mut self, door: Arc<dyn Door>) -> Self {
        self.door = Some(door);
        self
    }

    /// Use `display` instead of the logging display.
    #[must_use]
    pub fn with_display(mut self, display: Arc<dyn Display>) -> Self {
        self.display = Some(display);
        self
    }

    /// Override the policy named in the configuration.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn AssignmentPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Record dispatch events in `audit`.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate the configuration and build the building.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn build(self) -> Result<Building, DispatchError> {
        let mut system = ElevatorControlSystem::new(&self.config)?;
        if let Some(door) = self.door {
            system = system.with_door(door);
        }
        if let Some(display) = self.display {
            system = system.with_display(display);
        }
        if let Some(policy) = self.policy {
            system = system.with_policy(policy);
        }
        if let Some(audit) = self.audit {
            system = system.with_audit(audit);
        }
        Ok(Building::with_system(Arc::new(system)))
    }
}
