// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # linpart
//!
//! Minimum-variance linear partition optimizer: splits an ordered sequence
//! of non-negative weights into `k` contiguous, non-empty buckets so that
//! the total squared deviation of bucket weights from the ideal mean
//! (`total / k`) is minimal.
//!
//! # Strategies
//!
//! | Strategy | Engine | Determinism |
//! |---|---|---|
//! | [`Strategy::Sequential`] | single-threaded DP baseline | exact |
//! | [`Strategy::Parallel`] | one lane per item pair per bucket | dividers and cost identical to sequential |
//! | [`Strategy::Auto`] | parallel, falling back to sequential | same as whichever ran |
//!
//! Both engines evaluate the same recurrence with the same floating-point
//! order and the same lowest-split tie-break, so the chosen dividers never
//! depend on the strategy.
//!
//! # Example
//! ```
//! use linpart::{partition, Strategy};
//!
//! let result = partition(&[1.0, 2.0, 3.0, 4.0], 2, Strategy::Auto).unwrap();
//! assert_eq!(result.dividers, vec![3]); // [1,2,3] | [4]
//! println!("{}", result.summary());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! weights ──► PrefixSums ──► {CostTableEngine | ParallelCostKernel}
//!                                      │
//!                                      ▼
//!                        CostTables ──► reconstruct ──► Partition
//! ```
//!
//! Every call owns its tables and discards them with the call: the facade
//! holds no state between calls.

mod config;
mod error;
mod optimizer;
mod parallel;
mod partition;

pub use config::OptimizerConfig;
pub use error::OptimizerError;
pub use optimizer::{partition, partition_on, Optimizer, Strategy};
pub use parallel::ParallelCostKernel;
pub use partition::Partition;

// Re-exported for callers that drive the engines directly.
pub use lane_exec::{ExecError, LaneExecutor, RayonLanes, SerialLanes};
pub use partition_core::{reconstruct, CoreError, CostTableEngine, CostTables, PrefixSums};
