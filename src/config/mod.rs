//! Configuration models for the building and dispatch policy.

pub mod building;

pub use building::{AssignmentPolicyConfig, BuildingConfig};
