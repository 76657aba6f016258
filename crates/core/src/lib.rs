// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

//! rwgate-core: bounded reader/writer coordination
//!
//! This crate provides:
//! - A coordinator admitting a bounded number of concurrent reads and
//!   exclusive writes, with writes taking priority over new reads
//! - Reader and writer workers driven by a pluggable [`Workload`]
//! - TOML configuration and a harness running several coordinators at once

pub mod config;
pub mod coordination;
pub mod harness;
pub mod worker;

pub use config::{ConfigError, CoordinatorConfig, HarnessConfig, Pacing};
pub use coordination::{
    BoundedRwCoordinator, CoordinatorError, CoordinatorStats, ReadGuard, WorkerCounts,
    WriteGuard,
};
pub use worker::{ReadContext, SimulatedWork, WorkerKind, Workload, WriteContext};
