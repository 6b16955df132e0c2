//! Building and dispatch configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::core::policy::{AssignmentPolicy, FirstIdle, NearestIdle};

/// Assignment policy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicyConfig {
    /// First idle elevator in pool order.
    #[default]
    FirstIdle,
    /// Idle elevator closest to the calling floor.
    NearestIdle,
}

impl AssignmentPolicyConfig {
    /// Instantiate the selected policy.
    #[must_use]
    pub fn policy(self) -> Box<dyn AssignmentPolicy> {
        match self {
            Self::FirstIdle => Box::new(FirstIdle),
            Self::NearestIdle => Box::new(NearestIdle),
        }
    }

    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_idle" => Ok(Self::FirstIdle),
            "nearest_idle" => Ok(Self::NearestIdle),
            other => Err(format!("unknown assignment policy `{other}`")),
        }
    }
}

/// Building configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    /// Number of floors, numbered from 1.
    pub floors: u32,
    /// Number of elevators in the pool.
    pub elevators: u32,
    /// Floor every elevator starts at.
    pub default_floor: u32,
    /// Simulated travel time per floor in milliseconds.
    pub step_interval_ms: u64,
    /// Rated load per elevator in kilograms (informational).
    pub capacity_kg: u32,
    /// Rated passengers per elevator (informational).
    pub capacity_pax: u32,
    /// Assignment policy.
    pub assignment: AssignmentPolicyConfig,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 15,
            elevators: 3,
            default_floor: 15,
            step_interval_ms: 300,
            capacity_kg: 15,
            capacity_pax: 8,
            assignment: AssignmentPolicyConfig::FirstIdle,
        }
    }
}

impl BuildingConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors == 0 {
            return Err("floors must be greater than 0".into());
        }
        if self.elevators == 0 {
            return Err("elevators must be greater than 0".into());
        }
        if self.default_floor == 0 || self.default_floor > self.floors {
            return Err(format!(
                "default_floor must be within 1..={}, got {}",
                self.floors, self.default_floor
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields
    /// take their default values.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, reading `.env` first if
    /// present. Unset variables keep their default values.
    ///
    /// Recognized variables: `ELEVATOR_FLOORS`, `ELEVATOR_COUNT`,
    /// `ELEVATOR_DEFAULT_FLOOR`, `ELEVATOR_STEP_INTERVAL_MS`,
    /// `ELEVATOR_ASSIGNMENT`.
    ///
    /// # Errors
    ///
    /// Returns a description of the first unparsable or invalid value.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a description of the first unparsable or invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, String> {
            raw.trim()
                .parse()
                .map_err(|_| format!("{key} must be a non-negative integer, got `{raw}`"))
        }

        let mut cfg = Self::default();
        if let Some(raw) = lookup("ELEVATOR_FLOORS") {
            cfg.floors = number("ELEVATOR_FLOORS", &raw)?;
        }
        if let Some(raw) = lookup("ELEVATOR_COUNT") {
            cfg.elevators = number("ELEVATOR_COUNT", &raw)?;
        }
        if let Some(raw) = lookup("ELEVATOR_DEFAULT_FLOOR") {
            cfg.default_floor = number("ELEVATOR_DEFAULT_FLOOR", &raw)?;
        }
        if let Some(raw) = lookup("ELEVATOR_STEP_INTERVAL_MS") {
            cfg.step_interval_ms = number("ELEVATOR_STEP_INTERVAL_MS", &raw)?;
        }
        if let Some(raw) = lookup("ELEVATOR_ASSIGNMENT") {
            cfg.assignment = AssignmentPolicyConfig::parse(&raw)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
