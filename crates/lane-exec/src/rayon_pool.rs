// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rayon-backed lane executor.
//!
//! Owns a dedicated [`rayon::ThreadPool`] rather than using the global one,
//! so the thread count is controlled by the caller's configuration and
//! independent optimizers never contend over pool settings.

use crate::{ExecError, LaneExecutor};
use rayon::prelude::*;

/// Lane executor backed by an owned rayon thread pool.
pub struct RayonLanes {
    pool: rayon::ThreadPool,
}

impl RayonLanes {
    /// Builds a pool with `num_threads` worker threads.
    ///
    /// `0` lets rayon pick one thread per available core. Pool construction
    /// can fail when the host refuses to spawn threads; that surfaces as
    /// [`ExecError::Unavailable`] and callers fall back to sequential code.
    pub fn new(num_threads: usize) -> Result<Self, ExecError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("lane-{i}"))
            .build()
            .map_err(|e| ExecError::Unavailable(e.to_string()))?;
        tracing::debug!("lane pool ready: {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl LaneExecutor for RayonLanes {
    fn name(&self) -> &str {
        "rayon"
    }

    fn run_lanes(&self, lanes: usize, body: &(dyn Fn(usize) + Sync)) {
        // for_each joins all lanes before returning: this is the barrier.
        self.pool
            .install(|| (0..lanes).into_par_iter().for_each(body));
    }
}

impl std::fmt::Debug for RayonLanes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayonLanes")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_every_lane_runs_exactly_once() {
        let exec = RayonLanes::new(4).unwrap();
        let counts: Vec<AtomicUsize> = (0..64).map(|_| AtomicUsize::new(0)).collect();

        exec.run_lanes(64, &|lane| {
            counts[lane].fetch_add(1, Ordering::Relaxed);
        });

        for (lane, c) in counts.iter().enumerate() {
            assert_eq!(c.load(Ordering::Relaxed), 1, "lane {lane} ran wrong count");
        }
    }

    #[test]
    fn test_join_is_a_barrier() {
        // Writes from one round must be visible to the next round's lanes.
        let exec = RayonLanes::new(2).unwrap();
        let stage_one: Vec<AtomicUsize> = (0..16).map(|_| AtomicUsize::new(0)).collect();

        exec.run_lanes(16, &|lane| {
            stage_one[lane].store(lane + 1, Ordering::Relaxed);
        });
        exec.run_lanes(16, &|lane| {
            assert_eq!(stage_one[lane].load(Ordering::Relaxed), lane + 1);
        });
    }

    #[test]
    fn test_zero_threads_uses_default() {
        let exec = RayonLanes::new(0).unwrap();
        assert!(exec.num_threads() >= 1);
    }
}
