// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker identity and loop state

use crate::coordination::ShutdownSignal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a worker task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerKind {
    /// Reader with its index among the coordinator's readers
    Reader(usize),
    Writer,
}

impl WorkerKind {
    pub fn is_reader(&self) -> bool {
        matches!(self, WorkerKind::Reader(_))
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerKind::Reader(index) => write!(f, "reader-{}", index),
            WorkerKind::Writer => write!(f, "writer"),
        }
    }
}

/// Decision taken at the top of each worker loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStep {
    /// Start another unit of work
    Continue,
    /// Leave the loop without starting new work
    Exit,
}

impl WorkerStep {
    /// Non-blocking shutdown check
    pub fn check(shutdown: &ShutdownSignal) -> Self {
        if shutdown.is_triggered() {
            WorkerStep::Exit
        } else {
            WorkerStep::Continue
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
