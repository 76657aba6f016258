// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reader and writer loops
//!
//! Each loop checks the shutdown signal before starting a unit of work, and
//! gives up a pending acquire once the signal is set. A critical section that
//! already started always runs to completion and releases its lock before the
//! loop looks at the signal again.

use super::state::WorkerStep;
use super::workload::{ReadContext, WriteContext, Workload};
use crate::coordination::{BoundedRwCoordinator, WorkerExit};
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) async fn run_reader(
    coordinator: Arc<BoundedRwCoordinator>,
    workload: Arc<dyn Workload>,
    reader: usize,
    exit: WorkerExit,
) {
    let name = coordinator.name();

    while WorkerStep::check(coordinator.shutdown_signal()) == WorkerStep::Continue {
        // Waiting for admission holds nothing, so shutdown may cut it short
        let guard = tokio::select! {
            biased;
            _ = coordinator.shutdown_signal().wait() => break,
            guard = coordinator.acquire_read() => guard,
        };
        let ctx = ReadContext {
            reader,
            active_reads: guard.active_at_admit(),
        };
        debug!(coordinator = %name, reader, reads = ctx.active_reads, "read start");

        workload.read(ctx).await;

        guard.release();
        debug!(coordinator = %name, reader, reads = coordinator.active_reads(), "read finish");

        // Keep a reader with instant work from monopolizing its runtime thread
        tokio::task::yield_now().await;
    }

    info!(coordinator = %name, worker = %exit.kind(), "reader shutdown");
}

pub(crate) async fn run_writer(
    coordinator: Arc<BoundedRwCoordinator>,
    workload: Arc<dyn Workload>,
    exit: WorkerExit,
) {
    let name = coordinator.name();
    let mut writes: u64 = 0;

    while WorkerStep::check(coordinator.shutdown_signal()) == WorkerStep::Continue {
        // The idle time holds no lock, so shutdown may cut it short
        tokio::select! {
            _ = tokio::time::sleep(workload.write_interval()) => {}
            _ = coordinator.shutdown_signal().wait() => continue,
        }

        debug!(coordinator = %name, "write pending");
        let guard = tokio::select! {
            biased;
            _ = coordinator.shutdown_signal().wait() => break,
            guard = coordinator.acquire_write() => guard,
        };
        writes += 1;
        debug!(coordinator = %name, write = writes, "write start");

        workload.write(WriteContext { write: writes }).await;

        guard.release();
        debug!(coordinator = %name, write = writes, "write finish");

        tokio::task::yield_now().await;
    }

    info!(coordinator = %name, worker = %exit.kind(), writes, "writer shutdown");
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
