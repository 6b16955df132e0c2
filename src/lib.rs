//! # Elevator Dispatch
//!
//! A simulator for a building with several elevators sharing one control
//! system. Riders press a hall button on their floor, the control system
//! assigns an idle elevator and brings it over, and the rider then uses the
//! elevator's inside panel to close the door and travel to a destination.
//!
//! ## Core Problem Solved
//!
//! Many riders call elevators at the same time from different threads:
//!
//! - **No double assignment**: two concurrent calls never receive the same
//!   idle elevator
//! - **One driver per elevator**: a car is never moved by two callers at once
//! - **Parallel travel**: different elevators move at the same time
//! - **Misuse detection**: each assignment issues a lease; a stale inside
//!   panel cannot drive an elevator that was released or reassigned
//!
//! ## Usage
//!
//! ```rust,ignore
//! use elevator_dispatch::builders::BuildingBuilder;
//! use elevator_dispatch::config::BuildingConfig;
//!
//! let building = BuildingBuilder::new(BuildingConfig::default()).build()?;
//!
//! // Rider on floor 2 going up
//! if let Some(panel) = building.floor_panel(2)?.go_up()? {
//!     panel.close_door()?;
//!     panel.go_to_floor(10)?;
//! }
//! ```
//!
//! When every elevator is busy `go_up`/`go_down` return `Ok(None)`; there is
//! no queue, the caller decides whether to try again.
//!
//! For complete examples, see:
//! - `tests/dispatch_test.rs` - Call/ride scenarios
//! - `tests/concurrency_test.rs` - Concurrent riders
//! - `src/main.rs` - The two-rider simulation

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Elevator pool, call assignment, and movement simulation.
pub mod core;
/// Configuration models for the building and dispatch policy.
pub mod config;
/// Builders to construct a building from configuration.
pub mod builders;
/// Rider drivers, blocking and on tokio.
pub mod runtime;
/// Shared utilities.
pub mod util;
