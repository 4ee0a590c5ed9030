// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Data-parallel engine for the partition recurrence.
//!
//! Computes the same recurrence as `partition_core::CostTableEngine`, but
//! distributes each bucket column over parallel lanes. Lane `p` fills the
//! cells for items `p` and `n − p`: the candidate scan for item `i` grows
//! with `i`, so pairing a cheap left endpoint with an expensive right one
//! evens the work out across lanes (`n/2 + 1` lanes per column).
//!
//! # Synchronization contract
//!
//! Buckets are processed strictly in increasing order. Within one bucket
//! every lane writes only its own two cells, so no per-cell locking is
//! needed; the executor's join after each column is the one barrier that
//! keeps a lane from reading column `b − 1` before it is fully written.
//! `k − 1` barriers total.
//!
//! # Parity
//!
//! Each lane scans its candidate range in ascending `j` with a strict `<`
//! comparison — exactly the sequential engine's loop — so costs are
//! bitwise-identical and ties resolve to the lowest `j` in both engines.

use lane_exec::LaneExecutor;
use partition_core::{CompletedColumns, CostTables, LaneCells, PrefixSums, UNSET};

/// Fills the cost and backpointer tables using parallel lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelCostKernel;

impl ParallelCostKernel {
    /// Builds the fully-populated tables for the prefix's bucket count,
    /// running one column of the recurrence per executor dispatch.
    pub fn fill(prefix: &PrefixSums, executor: &dyn LaneExecutor) -> CostTables {
        let mut tables = CostTables::new(prefix);
        let n = prefix.num_items();
        let lanes = n / 2 + 1;

        for bucket in 2..=prefix.num_buckets() {
            let (done, cells) = tables.split_for_bucket(bucket);

            executor.run_lanes(lanes, &|lane| {
                fill_cell(prefix, &done, &cells, bucket, lane);
                let mirror = n - lane;
                if mirror != lane {
                    fill_cell(prefix, &done, &cells, bucket, mirror);
                }
            });
            // run_lanes joined every lane: column `bucket` is complete and
            // visible before the next iteration reads it.
        }

        tables
    }
}

/// Computes one `(item, bucket)` cell from the previous column.
fn fill_cell(
    prefix: &PrefixSums,
    done: &CompletedColumns<'_>,
    cells: &LaneCells<'_>,
    bucket: usize,
    item: usize,
) {
    if item < bucket {
        // Fewer items than buckets: the cell is undefined and never read.
        return;
    }

    let mut best_cost = f64::INFINITY;
    let mut best_split = UNSET;
    for j in (bucket - 1)..item {
        let cost = done.cost(j, bucket - 1) + prefix.bucket_cost(j, item);
        if cost < best_cost {
            best_cost = cost;
            best_split = j;
        }
    }

    // SAFETY: lane `p` writes only items `p` and `n − p`; distinct lanes
    // therefore never pass the same `item` for one column.
    unsafe {
        cells.write(item, best_cost, best_split);
    }
}
