//! Builders to construct a building from configuration.

pub mod building_builder;

pub use building_builder::BuildingBuilder;
