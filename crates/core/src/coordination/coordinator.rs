// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded reader/writer coordinator
//!
//! Admits up to `max_reads` concurrent reads through a [`SlotSemaphore`]. A
//! write raises the [`WriteBarrier`] so no new read is admitted, then takes
//! every slot at once, which leaves it alone with the resource.
//!
//! A coordinator started with [`BoundedRwCoordinator::start`] also owns a set
//! of reader workers and one writer worker, which run until [`stop`] is called.
//!
//! [`stop`]: BoundedRwCoordinator::stop

use super::barrier::WriteBarrier;
use super::guard::{ReadGuard, WriteGuard};
use super::semaphore::SlotSemaphore;
use super::shutdown::{ShutdownSignal, WorkerCounts, WorkerTracker};
use crate::config::CoordinatorConfig;
use crate::worker::{runner, WorkerKind, Workload};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Coordinator construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    #[error("coordinator '{name}': capacity must allow at least 1 concurrent read, got {max_reads}")]
    InvalidCapacity { name: String, max_reads: usize },
}

/// Arbitrates a shared resource between bounded concurrent reads and
/// exclusive writes
#[derive(Debug)]
pub struct BoundedRwCoordinator {
    name: String,
    max_reads: usize,
    slots: SlotSemaphore,
    write_barrier: WriteBarrier,
    shutdown: ShutdownSignal,
    workers: WorkerTracker,
    counters: Counters,
}

#[derive(Debug, Default)]
struct Counters {
    active_reads: AtomicUsize,
    active_writes: AtomicUsize,
    peak_reads: AtomicUsize,
    reads_completed: AtomicUsize,
    writes_completed: AtomicUsize,
    capacity_violations: AtomicUsize,
    exclusivity_violations: AtomicUsize,
}

impl BoundedRwCoordinator {
    /// Create a coordinator without any workers
    pub fn new(name: impl Into<String>, max_reads: usize) -> Result<Self, CoordinatorError> {
        let name = name.into();
        if max_reads == 0 {
            return Err(CoordinatorError::InvalidCapacity { name, max_reads });
        }

        Ok(Self {
            name,
            max_reads,
            slots: SlotSemaphore::new(max_reads),
            write_barrier: WriteBarrier::new(),
            shutdown: ShutdownSignal::new(),
            workers: WorkerTracker::new(),
            counters: Counters::default(),
        })
    }

    /// Create a coordinator and launch `config.readers` reader workers plus
    /// one writer worker on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(
        config: &CoordinatorConfig,
        workload: Arc<dyn Workload>,
    ) -> Result<Arc<Self>, CoordinatorError> {
        config.validate()?;
        let coordinator = Arc::new(Self::new(config.name.clone(), config.max_reads)?);

        // Register before spawning so a stop issued right after start still
        // waits for every worker.
        for reader in 0..config.readers {
            let exit = coordinator.worker_tracker().register(WorkerKind::Reader(reader));
            tokio::spawn(runner::run_reader(
                Arc::clone(&coordinator),
                Arc::clone(&workload),
                reader,
                exit,
            ));
        }
        let exit = coordinator.workers.register(WorkerKind::Writer);
        tokio::spawn(runner::run_writer(Arc::clone(&coordinator), workload, exit));

        info!(
            coordinator = %coordinator.name,
            max_reads = coordinator.max_reads,
            readers = config.readers,
            "started"
        );
        Ok(coordinator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_reads(&self) -> usize {
        self.max_reads
    }

    /// Reads currently inside their critical section
    pub fn active_reads(&self) -> usize {
        self.counters.active_reads.load(Ordering::SeqCst)
    }

    /// Slots not held by any read or write
    pub fn available_slots(&self) -> usize {
        self.slots.available()
    }

    /// True while a write is waiting for slots or running
    pub fn is_write_pending(&self) -> bool {
        !self.write_barrier.is_clear()
    }

    /// True once shutdown has been signalled
    pub fn is_stopped(&self) -> bool {
        self.shutdown.is_triggered()
    }

    pub fn workers(&self) -> WorkerCounts {
        self.workers.counts()
    }

    pub(crate) fn shutdown_signal(&self) -> &ShutdownSignal {
        &self.shutdown
    }

    pub(crate) fn worker_tracker(&self) -> &WorkerTracker {
        &self.workers
    }

    /// Wait for any pending or active write to clear, then take one slot.
    ///
    /// A read is never admitted once a write has been requested: if a write
    /// arrives while this call waits for a slot, the slot is handed back and
    /// the call waits for the write to finish.
    pub async fn acquire_read(&self) -> ReadGuard<'_> {
        loop {
            self.write_barrier.wait_clear().await;
            self.slots.acquire(1).await;
            if self.write_barrier.is_clear() {
                return ReadGuard::admit(self);
            }
            self.slots.release(1);
        }
    }

    /// Take a read slot only if that is possible without waiting
    pub fn try_acquire_read(&self) -> Option<ReadGuard<'_>> {
        if !self.write_barrier.is_clear() || !self.slots.try_acquire(1) {
            return None;
        }
        if !self.write_barrier.is_clear() {
            self.slots.release(1);
            return None;
        }
        Some(ReadGuard::admit(self))
    }

    /// Declare write intent, then take every slot.
    ///
    /// Reads already admitted finish normally; the write starts once the last
    /// of them has released its slot. Dropping the returned future before it
    /// completes withdraws the write intent.
    pub async fn acquire_write(&self) -> WriteGuard<'_> {
        let ticket = self.write_barrier.raise();
        self.slots.acquire(self.max_reads).await;
        WriteGuard::admit(self, ticket)
    }

    /// Signal shutdown and wait for every worker to exit.
    ///
    /// Safe to call more than once and from several tasks at the same time;
    /// every call returns only after all workers of this coordinator exited.
    pub async fn stop(&self) {
        if self.shutdown.trigger() {
            info!(coordinator = %self.name, "stop");
        }
        self.workers.wait_idle().await;
        info!(coordinator = %self.name, "stopped");
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CoordinatorStats {
        let c = &self.counters;
        CoordinatorStats {
            name: self.name.clone(),
            max_reads: self.max_reads,
            active_reads: c.active_reads.load(Ordering::SeqCst),
            peak_reads: c.peak_reads.load(Ordering::SeqCst),
            reads_completed: c.reads_completed.load(Ordering::SeqCst),
            writes_completed: c.writes_completed.load(Ordering::SeqCst),
            capacity_violations: c.capacity_violations.load(Ordering::SeqCst),
            exclusivity_violations: c.exclusivity_violations.load(Ordering::SeqCst),
            available_slots: self.slots.available(),
            writes_pending: self.write_barrier.pending(),
            stopped: self.shutdown.is_triggered(),
            workers: self.workers.counts(),
        }
    }

    /// Account for a read that now holds a slot. Returns the number of reads
    /// in progress including this one.
    pub(super) fn read_admitted(&self) -> usize {
        let c = &self.counters;
        let active = c.active_reads.fetch_add(1, Ordering::SeqCst) + 1;
        c.peak_reads.fetch_max(active, Ordering::SeqCst);

        if active > self.max_reads {
            c.capacity_violations.fetch_add(1, Ordering::SeqCst);
            error!(
                coordinator = %self.name,
                active,
                max_reads = self.max_reads,
                "read admitted beyond capacity"
            );
        }
        if c.active_writes.load(Ordering::SeqCst) > 0 {
            c.exclusivity_violations.fetch_add(1, Ordering::SeqCst);
            error!(coordinator = %self.name, "read admitted during a write");
        }
        active
    }

    pub(super) fn read_finished(&self) {
        // Counters drop before the slot is returned, so a write that takes
        // the slot sees the read as gone.
        self.counters.active_reads.fetch_sub(1, Ordering::SeqCst);
        self.counters.reads_completed.fetch_add(1, Ordering::SeqCst);
        self.slots.release(1);
    }

    pub(super) fn write_admitted(&self) {
        let c = &self.counters;
        let writers = c.active_writes.fetch_add(1, Ordering::SeqCst) + 1;
        let reads = c.active_reads.load(Ordering::SeqCst);
        if writers > 1 || reads > 0 {
            c.exclusivity_violations.fetch_add(1, Ordering::SeqCst);
            error!(
                coordinator = %self.name,
                writers,
                reads,
                "write admitted without exclusive access"
            );
        }
    }

    pub(super) fn write_finished(&self) {
        self.counters.active_writes.fetch_sub(1, Ordering::SeqCst);
        self.counters.writes_completed.fetch_add(1, Ordering::SeqCst);
        self.slots.release(self.max_reads);
    }
}

/// Point-in-time view of a coordinator
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoordinatorStats {
    pub name: String,
    pub max_reads: usize,
    pub active_reads: usize,
    pub peak_reads: usize,
    pub reads_completed: usize,
    pub writes_completed: usize,
    pub capacity_violations: usize,
    pub exclusivity_violations: usize,
    pub available_slots: usize,
    pub writes_pending: usize,
    pub stopped: bool,
    pub workers: WorkerCounts,
}

impl CoordinatorStats {
    pub fn violations(&self) -> usize {
        self.capacity_violations + self.exclusivity_violations
    }

    /// Every worker exited and every slot is back
    pub fn is_drained(&self) -> bool {
        self.workers.running() == 0 && self.available_slots == self.max_reads
    }
}

impl fmt::Display for CoordinatorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: capacity={} peak={} reads={} writes={} workers={}/{} exited slots={}/{} violations={}",
            self.name,
            self.max_reads,
            self.peak_reads,
            self.reads_completed,
            self.writes_completed,
            self.workers.exited(),
            self.workers.launched(),
            self.available_slots,
            self.max_reads,
            self.violations()
        )
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
