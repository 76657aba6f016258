// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read and write acquisitions
//!
//! Each guard releases exactly what it acquired when dropped, so acquire and
//! release can never get out of balance through the coordinator API.

use super::barrier::BarrierTicket;
use super::coordinator::BoundedRwCoordinator;

/// One read slot, held until dropped
#[derive(Debug)]
#[must_use = "the read slot is released as soon as the guard is dropped"]
pub struct ReadGuard<'a> {
    coordinator: &'a BoundedRwCoordinator,
    active_at_admit: usize,
}

impl<'a> ReadGuard<'a> {
    pub(super) fn admit(coordinator: &'a BoundedRwCoordinator) -> Self {
        let active_at_admit = coordinator.read_admitted();
        Self {
            coordinator,
            active_at_admit,
        }
    }

    /// Reads in progress when this one was admitted, itself included
    pub fn active_at_admit(&self) -> usize {
        self.active_at_admit
    }

    /// Release the slot now
    pub fn release(self) {}
}

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.read_finished();
    }
}

/// Every slot plus the write intent, held until dropped
#[derive(Debug)]
#[must_use = "the write lock is released as soon as the guard is dropped"]
pub struct WriteGuard<'a> {
    coordinator: &'a BoundedRwCoordinator,
    // Dropped after `Drop::drop` returned the slots
    _ticket: BarrierTicket<'a>,
}

impl<'a> WriteGuard<'a> {
    pub(super) fn admit(coordinator: &'a BoundedRwCoordinator, ticket: BarrierTicket<'a>) -> Self {
        coordinator.write_admitted();
        Self {
            coordinator,
            _ticket: ticket,
        }
    }

    /// Release the slots and the write intent now
    pub fn release(self) {}
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.write_finished();
    }
}
