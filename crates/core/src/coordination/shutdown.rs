// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shutdown signalling and worker lifecycle tracking
//!
//! - **ShutdownSignal** - one-shot broadcast flag observed by every worker
//! - **WorkerTracker** - counts running workers so a stop can wait for all of them

use crate::worker::WorkerKind;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// One-shot broadcast flag
#[derive(Debug)]
pub struct ShutdownSignal {
    triggered: watch::Sender<bool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (triggered, _) = watch::channel(false);
        Self { triggered }
    }

    /// Set the flag. Returns true only for the call that actually set it.
    pub fn trigger(&self) -> bool {
        self.triggered.send_if_modified(|triggered| {
            if *triggered {
                false
            } else {
                *triggered = true;
                true
            }
        })
    }

    /// Non-blocking check
    pub fn is_triggered(&self) -> bool {
        *self.triggered.borrow()
    }

    /// Wait until the flag is set
    pub async fn wait(&self) {
        let mut rx = self.triggered.subscribe();
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts of launched and exited workers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WorkerCounts {
    pub readers_launched: usize,
    pub readers_running: usize,
    pub writers_launched: usize,
    pub writers_running: usize,
}

impl WorkerCounts {
    pub fn launched(&self) -> usize {
        self.readers_launched + self.writers_launched
    }

    pub fn running(&self) -> usize {
        self.readers_running + self.writers_running
    }

    pub fn exited(&self) -> usize {
        self.launched() - self.running()
    }
}

/// Done-counter for worker tasks
#[derive(Debug)]
pub struct WorkerTracker {
    counts: Arc<watch::Sender<WorkerCounts>>,
}

impl WorkerTracker {
    pub fn new() -> Self {
        let (counts, _) = watch::channel(WorkerCounts::default());
        Self {
            counts: Arc::new(counts),
        }
    }

    /// Record a worker as running. The worker is reported as exited when the
    /// returned token is dropped, including when its task panics or is aborted.
    pub fn register(&self, kind: WorkerKind) -> WorkerExit {
        self.counts.send_modify(|counts| match kind {
            WorkerKind::Reader(_) => {
                counts.readers_launched += 1;
                counts.readers_running += 1;
            }
            WorkerKind::Writer => {
                counts.writers_launched += 1;
                counts.writers_running += 1;
            }
        });
        WorkerExit {
            counts: Arc::clone(&self.counts),
            kind,
        }
    }

    pub fn counts(&self) -> WorkerCounts {
        *self.counts.borrow()
    }

    /// Wait until every registered worker has exited
    pub async fn wait_idle(&self) {
        let mut rx = self.counts.subscribe();
        let _ = rx.wait_for(|counts| counts.running() == 0).await;
    }
}

impl Default for WorkerTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Exit report for one worker, moved into the worker's task
#[derive(Debug)]
#[must_use = "the worker is reported as exited as soon as this is dropped"]
pub struct WorkerExit {
    counts: Arc<watch::Sender<WorkerCounts>>,
    kind: WorkerKind,
}

impl WorkerExit {
    pub fn kind(&self) -> WorkerKind {
        self.kind
    }
}

impl Drop for WorkerExit {
    fn drop(&mut self) {
        let kind = self.kind;
        self.counts.send_modify(|counts| match kind {
            WorkerKind::Reader(_) => counts.readers_running -= 1,
            WorkerKind::Writer => counts.writers_running -= 1,
        });
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
