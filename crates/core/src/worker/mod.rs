// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reader and writer workers

pub(crate) mod runner;
mod state;
mod workload;

pub use state::{WorkerKind, WorkerStep};
pub use workload::{ReadContext, SimulatedWork, WriteContext, Workload};
