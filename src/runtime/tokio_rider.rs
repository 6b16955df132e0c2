//! Concurrent riders on the tokio blocking pool.

use std::sync::Arc;

use anyhow::Context;
use tokio::task::JoinHandle;

use crate::core::{AppResult, Building, DispatchError};
use crate::runtime::rider::{run_ride, Ride, RideOutcome};

/// Run `ride` on tokio's blocking pool.
///
/// Travel sleeps the calling thread, so rides never run on async workers.
pub fn spawn_ride(
    building: Arc<Building>,
    ride: Ride,
) -> JoinHandle<Result<RideOutcome, DispatchError>> {
    tokio::task::spawn_blocking(move || {
        tracing::info!(from = ride.from, to = ride.to, "rider started");
        run_ride(&building, ride)
    })
}

/// Start every ride at once and wait for all of them, in input order.
///
/// # Errors
///
/// Fails on the first ride that returned an error or panicked.
pub async fn run_rides(building: Arc<Building>, rides: Vec<Ride>) -> AppResult<Vec<RideOutcome>> {
    let handles: Vec<_> = rides
        .into_iter()
        .map(|ride| (ride, spawn_ride(Arc::clone(&building), ride)))
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (ride, handle) in handles {
        let outcome = handle
            .await
            .with_context(|| format!("rider {} -> {} panicked", ride.from, ride.to))?
            .with_context(|| format!("rider {} -> {} failed", ride.from, ride.to))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
