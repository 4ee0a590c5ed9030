// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Divider reconstruction from the backpointer table.
//!
//! Walks backwards from `(num_items, num_buckets)`: the backpointer at the
//! current cell is the last divider, and becomes the current item for the
//! next-lower bucket count. The walk takes exactly `num_buckets − 1` steps.

use crate::{CoreError, CostTables, UNSET};

/// Extracts the `k − 1` divider locations from filled tables.
///
/// Returns `InvalidPartition` if any visited backpointer still holds the
/// sentinel, which means the tables were not fully populated for this
/// `(n, k)` — an upstream logic defect that is surfaced, never recovered.
pub fn reconstruct(tables: &CostTables) -> Result<Vec<usize>, CoreError> {
    let num_buckets = tables.num_buckets();
    let mut dividers = vec![0usize; num_buckets - 1];

    let mut item = tables.num_items();
    let mut bucket = num_buckets;
    while bucket > 1 {
        let split = tables.backptr(item, bucket);
        if split == UNSET {
            return Err(CoreError::InvalidPartition { item, bucket });
        }
        dividers[bucket - 2] = split;
        item = split;
        bucket -= 1;
    }

    Ok(dividers)
}
