// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sequential baseline engine for the partition recurrence.
//!
//! Fills the tables bucket column by bucket column with Skiena's dynamic
//! programming recurrence:
//!
//! ```text
//! cost[i][b] = min over j in [b-1, i) of
//!     cost[j][b-1] + (sums[i] - sums[j] - mean)^2
//! ```
//!
//! The lower bound `j ≥ b − 1` keeps every earlier bucket non-empty.
//! Ties are broken to the lowest `j`: the scan runs in ascending `j` with a
//! strict `<` comparison, so a later equal candidate never displaces an
//! earlier one. The parallel engine uses the same scan, which is what makes
//! the two strategies produce identical dividers.
//!
//! O(n²·k) worst case. The monotonicity of optimal split points would admit
//! an O(n·k) refinement, but the quadratic scan is the reference behavior.

use crate::{CostTables, PrefixSums, UNSET};

/// Fills the cost and backpointer tables on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostTableEngine;

impl CostTableEngine {
    /// Builds the fully-populated tables for the prefix's bucket count.
    pub fn fill(prefix: &PrefixSums) -> CostTables {
        let mut tables = CostTables::new(prefix);
        let n = prefix.num_items();

        for bucket in 2..=prefix.num_buckets() {
            for item in bucket..=n {
                let mut best_cost = f64::INFINITY;
                let mut best_split = UNSET;

                for j in (bucket - 1)..item {
                    let cost = tables.cost(j, bucket - 1) + prefix.bucket_cost(j, item);
                    if cost < best_cost {
                        best_cost = cost;
                        best_split = j;
                    }
                }

                tables.set(item, bucket, best_cost, best_split);
            }
        }

        tables
    }
}
