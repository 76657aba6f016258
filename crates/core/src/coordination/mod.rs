// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives for bounded reader/writer access
//!
//! This module provides:
//! - **SlotSemaphore** - Counting semaphore with all-or-nothing multi-slot acquire
//! - **WriteBarrier** - Write intent that holds back new reads
//! - **ShutdownSignal** / **WorkerTracker** - Coordinated worker shutdown
//! - **BoundedRwCoordinator** - Bounded concurrent reads, exclusive writes

pub mod barrier;
pub mod coordinator;
pub mod guard;
pub mod semaphore;
pub mod shutdown;

pub use barrier::{BarrierTicket, WriteBarrier};
pub use coordinator::{BoundedRwCoordinator, CoordinatorError, CoordinatorStats};
pub use guard::{ReadGuard, WriteGuard};
pub use semaphore::SlotSemaphore;
pub use shutdown::{ShutdownSignal, WorkerCounts, WorkerExit, WorkerTracker};
