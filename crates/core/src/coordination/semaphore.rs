// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting semaphore for slot-based resource limiting
//!
//! A mutex-protected free-slot counter paired with a [`Notify`] for waiters.
//! Slots are taken and returned explicitly; there is no permit object, so the
//! caller is responsible for balancing `acquire` with `release`.

use std::sync::Mutex;
use tokio::sync::Notify;

/// Counting semaphore with a fixed number of slots
#[derive(Debug)]
pub struct SlotSemaphore {
    capacity: usize,
    free: Mutex<usize>,
    released: Notify,
}

impl SlotSemaphore {
    /// Create a semaphore with every slot free
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            free: Mutex::new(capacity),
            released: Notify::new(),
        }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots not currently held
    pub fn available(&self) -> usize {
        *self.free.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of slots currently held
    pub fn held(&self) -> usize {
        self.capacity - self.available()
    }

    /// Take `slots` slots if they are all free right now.
    ///
    /// Either all requested slots are taken or none are.
    pub fn try_acquire(&self, slots: usize) -> bool {
        let mut free = self.free.lock().unwrap_or_else(|e| e.into_inner());
        if *free >= slots {
            *free -= slots;
            true
        } else {
            false
        }
    }

    /// Wait until `slots` slots are free and take them in one step.
    ///
    /// Cancel-safe: a dropped future holds nothing.
    ///
    /// # Panics
    ///
    /// Panics if `slots` exceeds the capacity, since such a request could
    /// never be satisfied.
    pub async fn acquire(&self, slots: usize) {
        assert!(
            slots <= self.capacity,
            "requested {} slots from a semaphore with capacity {}",
            slots,
            self.capacity
        );

        loop {
            // Register for wakeups before checking, so a release between the
            // check and the await is not missed.
            let notified = self.released.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.try_acquire(slots) {
                return;
            }
            notified.await;
        }
    }

    /// Return `slots` slots and wake every waiter.
    ///
    /// # Panics
    ///
    /// Panics if more slots are returned than are currently held.
    pub fn release(&self, slots: usize) {
        {
            let mut free = self.free.lock().unwrap_or_else(|e| e.into_inner());
            assert!(
                *free + slots <= self.capacity,
                "released {} slots but only {} were held",
                slots,
                self.capacity - *free
            );
            *free += slots;
        }
        self.released.notify_waiters();
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;
