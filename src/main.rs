//! Two riders sharing a 15-floor building with three elevators.
//!
//! Configuration comes from the environment (see
//! [`BuildingConfig::from_env`]); `RUST_LOG` controls log output.

use std::sync::Arc;

use anyhow::anyhow;

use elevator_dispatch::builders::BuildingBuilder;
use elevator_dispatch::config::BuildingConfig;
use elevator_dispatch::core::AppResult;
use elevator_dispatch::runtime::{run_rides, Ride, RideOutcome};
use elevator_dispatch::util::init_tracing;

#[tokio::main]
async fn main() -> AppResult<()> {
    init_tracing();

    let config = BuildingConfig::from_env().map_err(|e| anyhow!(e))?;
    let building = Arc::new(BuildingBuilder::new(config).build()?);

    let rides = vec![Ride::new(2, 10), Ride::new(15, 1)];
    for outcome in run_rides(building, rides).await? {
        match outcome {
            RideOutcome::Completed { elevator, floor } => {
                tracing::info!(%elevator, floor, "rider arrived");
            }
            RideOutcome::NoElevator { from } => {
                tracing::warn!(from, "rider found no idle elevator");
            }
        }
    }

    tracing::info!("all elevators have completed movement");
    Ok(())
}
