// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The optimizer facade: validate, pick an engine, fill, reconstruct.
//!
//! Stateless — every call owns its own tables and discards them once the
//! [`Partition`] is built, so the facade is safe to call repeatedly or from
//! independent call sites concurrently.

use crate::parallel::ParallelCostKernel;
use crate::{OptimizerError, Partition};
use lane_exec::{ExecError, LaneExecutor, RayonLanes};
use partition_core::{reconstruct, CostTableEngine, CostTables, PrefixSums};
use std::str::FromStr;

/// Which engine fills the cost tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Single-threaded baseline.
    Sequential,
    /// Lane-parallel engine; falls back to sequential if no pool comes up.
    Parallel,
    /// Prefer parallel, fall back to sequential.
    Auto,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Parallel => "parallel",
            Strategy::Auto => "auto",
        }
    }
}

impl FromStr for Strategy {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Strategy::Sequential),
            "parallel" => Ok(Strategy::Parallel),
            "auto" => Ok(Strategy::Auto),
            other => Err(OptimizerError::Config(format!(
                "unknown strategy '{other}'; expected 'sequential', 'parallel', or 'auto'"
            ))),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The optimizer facade.
///
/// # Example
/// ```
/// use linpart::{Optimizer, Strategy};
///
/// let result = Optimizer::new(Strategy::Auto)
///     .partition(&[1.0, 2.0, 3.0, 4.0], 2)
///     .unwrap();
/// assert_eq!(result.dividers, vec![3]);
/// assert_eq!(result.cost, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    strategy: Strategy,
    num_threads: usize,
}

impl Optimizer {
    /// Creates an optimizer with the given strategy and a default-sized
    /// lane pool (one thread per available core).
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            num_threads: 0,
        }
    }

    /// Sets the lane pool size for the parallel engine (`0` = all cores).
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Splits `weights` into `num_buckets` contiguous, non-empty buckets
    /// minimizing the total squared deviation from the ideal bucket mean.
    ///
    /// Dividers are deterministic for a given `(weights, num_buckets)`
    /// regardless of strategy; both engines share the lowest-split
    /// tie-break and the same floating-point evaluation order.
    pub fn partition(
        &self,
        weights: &[f64],
        num_buckets: usize,
    ) -> Result<Partition, OptimizerError> {
        let prefix = PrefixSums::build(weights, num_buckets)?;

        let (tables, engine_name) = self.fill_tables(&prefix);
        let dividers = reconstruct(&tables)?;

        let result = Partition {
            strategy_name: engine_name.to_string(),
            num_items: prefix.num_items(),
            num_buckets,
            dividers,
            cost: tables.final_cost(),
        };
        result.validate()?;
        tracing::debug!("{}", result.summary());
        Ok(result)
    }

    fn fill_tables(&self, prefix: &PrefixSums) -> (CostTables, &'static str) {
        match self.strategy {
            Strategy::Sequential => (CostTableEngine::fill(prefix), "sequential"),
            Strategy::Parallel | Strategy::Auto => {
                self.fill_with_pool(prefix, RayonLanes::new(self.num_threads))
            }
        }
    }

    /// Fills the tables on the given pool, or on the sequential engine when
    /// the pool could not be brought up.
    fn fill_with_pool(
        &self,
        prefix: &PrefixSums,
        pool: Result<RayonLanes, ExecError>,
    ) -> (CostTables, &'static str) {
        match pool {
            Ok(executor) => {
                tracing::debug!(
                    "filling tables on {} lanes ({} threads)",
                    prefix.num_items() / 2 + 1,
                    executor.num_threads(),
                );
                (ParallelCostKernel::fill(prefix, &executor), "parallel")
            }
            Err(e) => {
                // Recoverable: switch engine rather than fail the call.
                tracing::warn!("{e}; falling back to sequential engine");
                (CostTableEngine::fill(prefix), "sequential")
            }
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(Strategy::Auto)
    }
}

/// Convenience entry point: partitions with a fresh [`Optimizer`].
pub fn partition(
    weights: &[f64],
    num_buckets: usize,
    strategy: Strategy,
) -> Result<Partition, OptimizerError> {
    Optimizer::new(strategy).partition(weights, num_buckets)
}

/// Runs the recurrence on a caller-provided executor.
///
/// For hosts that already own a lane substrate and do not want the facade
/// to build a pool of its own.
pub fn partition_on(
    weights: &[f64],
    num_buckets: usize,
    executor: &dyn LaneExecutor,
) -> Result<Partition, OptimizerError> {
    let prefix = PrefixSums::build(weights, num_buckets)?;
    let tables = ParallelCostKernel::fill(&prefix, executor);
    let dividers = reconstruct(&tables)?;

    let result = Partition {
        strategy_name: executor.name().to_string(),
        num_items: prefix.num_items(),
        num_buckets,
        dividers,
        cost: tables.final_cost(),
    };
    result.validate()?;
    Ok(result)
}
