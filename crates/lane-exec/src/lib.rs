// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # lane-exec
//!
//! A minimal data-parallel execution seam: launch N independent lanes of
//! work and block until all of them finish.
//!
//! # Key Components
//!
//! - [`LaneExecutor`] — the trait. `run_lanes(lanes, body)` runs `body`
//!   once per lane index and returns only after every lane completes; the
//!   return doubles as a memory barrier between parallel stages.
//! - [`RayonLanes`] — the production executor, backed by an owned
//!   `rayon::ThreadPool`.
//! - [`SerialLanes`] — runs lanes in order on the calling thread; the
//!   deterministic fallback and test double.
//!
//! # Example
//! ```
//! use lane_exec::{LaneExecutor, RayonLanes};
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let totals: Vec<AtomicU64> = (0..8).map(|_| AtomicU64::new(0)).collect();
//! let exec = RayonLanes::new(2).expect("pool");
//! exec.run_lanes(8, &|lane| {
//!     totals[lane].store(lane as u64 * 2, Ordering::Relaxed);
//! });
//! assert_eq!(totals[3].load(Ordering::Relaxed), 6);
//! ```

mod error;
mod executor;
mod rayon_pool;

pub use error::ExecError;
pub use executor::{LaneExecutor, SerialLanes};
pub use rayon_pool::RayonLanes;
