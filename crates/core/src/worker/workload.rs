// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work performed inside read and write critical sections

use crate::config::Pacing;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// What a reader knows about the read it is performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadContext {
    pub reader: usize,
    /// Reads in progress when this one was admitted, itself included
    pub active_reads: usize,
}

/// What the writer knows about the write it is performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteContext {
    /// 1-based sequence number of this write
    pub write: u64,
}

/// Protected work driven by the coordinator's workers
///
/// `read` runs while holding a read slot and `write` while holding every slot.
#[async_trait]
pub trait Workload: Send + Sync + 'static {
    async fn read(&self, ctx: ReadContext);

    async fn write(&self, ctx: WriteContext);

    /// Writer idle time before requesting the next write; spent outside any lock
    fn write_interval(&self) -> Duration {
        Duration::ZERO
    }
}

/// Stand-in workload that sleeps for random durations bounded by [`Pacing`]
#[derive(Debug)]
pub struct SimulatedWork {
    pacing: Pacing,
    rng: Mutex<StdRng>,
}

impl SimulatedWork {
    /// Deterministic delays for a given seed
    pub fn new(pacing: Pacing, seed: u64) -> Self {
        Self {
            pacing,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy(pacing: Pacing) -> Self {
        Self {
            pacing,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Uniform delay in `[0, max)`
    fn jitter(&self, max: Duration) -> Duration {
        let micros = u64::try_from(max.as_micros()).unwrap_or(u64::MAX);
        if micros == 0 {
            return Duration::ZERO;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Duration::from_micros(rng.gen_range(0..micros))
    }
}

#[async_trait]
impl Workload for SimulatedWork {
    async fn read(&self, _ctx: ReadContext) {
        let delay = self.jitter(self.pacing.read_time);
        tokio::time::sleep(delay).await;
    }

    async fn write(&self, _ctx: WriteContext) {
        let delay = self.jitter(self.pacing.write_time);
        tokio::time::sleep(delay).await;
    }

    fn write_interval(&self) -> Duration {
        self.jitter(self.pacing.write_interval)
    }
}

#[cfg(test)]
#[path = "workload_tests.rs"]
mod tests;
