// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-intent barrier
//!
//! Counts writes that are pending or in progress. Readers wait for the count
//! to drop to zero before they try to take a slot.

use tokio::sync::watch;

/// Counter of pending or active writes that readers wait on
#[derive(Debug)]
pub struct WriteBarrier {
    pending: watch::Sender<usize>,
}

impl WriteBarrier {
    pub fn new() -> Self {
        let (pending, _) = watch::channel(0);
        Self { pending }
    }

    /// Number of writes currently pending or in progress
    pub fn pending(&self) -> usize {
        *self.pending.borrow()
    }

    /// True when no write is pending or in progress
    pub fn is_clear(&self) -> bool {
        self.pending() == 0
    }

    /// Declare write intent. New reads are held back until the returned
    /// ticket is dropped.
    pub fn raise(&self) -> BarrierTicket<'_> {
        self.pending.send_modify(|pending| *pending += 1);
        BarrierTicket { barrier: self }
    }

    /// Wait until no write is pending or in progress
    pub async fn wait_clear(&self) {
        let mut rx = self.pending.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|pending| *pending == 0).await;
    }

    fn lower(&self) {
        self.pending.send_modify(|pending| {
            assert!(*pending > 0, "write barrier lowered more times than raised");
            *pending -= 1;
        });
    }
}

impl Default for WriteBarrier {
    fn default() -> Self {
        Self::new()
    }
}

/// Held for the lifetime of one write request; lowers the barrier on drop
#[derive(Debug)]
#[must_use = "the barrier is lowered as soon as the ticket is dropped"]
pub struct BarrierTicket<'a> {
    barrier: &'a WriteBarrier,
}

impl Drop for BarrierTicket<'_> {
    fn drop(&mut self) {
        self.barrier.lower();
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
