//! Rider drivers: blocking, and on tokio when the `tokio-runtime` feature is on.

pub mod rider;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_rider;

pub use rider::{run_ride, Ride, RideOutcome};
#[cfg(feature = "tokio-runtime")]
pub use tokio_rider::{run_rides, spawn_ride};
