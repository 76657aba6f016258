// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo harness: run several coordinators side by side, then stop them all

use crate::config::{ConfigError, HarnessConfig};
use crate::coordination::{BoundedRwCoordinator, CoordinatorStats};
use crate::worker::{SimulatedWork, Workload};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Validate the config and start every coordinator it describes.
///
/// With a seed, coordinator `i` draws its delays from `seed + i`.
pub fn start_all(config: &HarnessConfig) -> Result<Vec<Arc<BoundedRwCoordinator>>, ConfigError> {
    config.validate()?;

    let mut coordinators = Vec::with_capacity(config.coordinators.len());
    for (index, coordinator) in config.coordinators.iter().enumerate() {
        let work = match config.seed {
            Some(seed) => SimulatedWork::new(coordinator.pacing, seed.wrapping_add(index as u64)),
            None => SimulatedWork::from_entropy(coordinator.pacing),
        };
        let workload: Arc<dyn Workload> = Arc::new(work);
        coordinators.push(BoundedRwCoordinator::start(coordinator, workload)?);
    }
    Ok(coordinators)
}

/// Stop every coordinator concurrently and wait until all of them stopped
pub async fn shutdown_all(coordinators: &[Arc<BoundedRwCoordinator>]) {
    let mut stops = JoinSet::new();
    for coordinator in coordinators {
        let coordinator = Arc::clone(coordinator);
        stops.spawn(async move { coordinator.stop().await });
    }

    while let Some(result) = stops.join_next().await {
        if let Err(e) = result {
            error!("stop task failed: {}", e);
        }
    }
}

/// Run the configured coordinators for `config.run_for`, or until
/// `interrupt` resolves, then shut them down and return their final stats.
pub async fn run(
    config: &HarnessConfig,
    interrupt: impl Future<Output = ()>,
) -> Result<Vec<CoordinatorStats>, ConfigError> {
    let coordinators = start_all(config)?;
    info!(
        coordinators = coordinators.len(),
        run_for = ?config.run_for,
        "starting process"
    );

    tokio::select! {
        _ = tokio::time::sleep(config.run_for) => {}
        _ = interrupt => info!("interrupted, shutting down early"),
    }

    shutdown_all(&coordinators).await;
    info!("process ended");

    Ok(coordinators.iter().map(|c| c.stats()).collect())
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
