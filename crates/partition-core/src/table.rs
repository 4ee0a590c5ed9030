// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The cost and backpointer tables filled by the recurrence engines.
//!
//! Both tables are flat `(num_buckets + 1)` × `(num_items + 1)` buffers in
//! column-major order, one column per bucket count. Column-major layout
//! keeps each bucket column contiguous, which is what lets
//! [`CostTables::split_for_bucket`] hand the parallel engine a read-only
//! view of every completed column and exclusive write access to the
//! current one without any locking.
//!
//! Tables are allocated fresh per `partition()` call and discarded once
//! the divider list has been reconstructed.

use crate::PrefixSums;
use std::marker::PhantomData;

/// Sentinel for a backpointer cell that was never written.
pub const UNSET: usize = usize::MAX;

/// Minimum-cost and divider-location tables for one optimization call.
///
/// `cost(i, b)` is the minimal achievable cost of splitting items `1..=i`
/// into exactly `b` non-empty contiguous buckets; `backptr(i, b)` is the
/// end of the preceding `b − 1` buckets in that optimum. Cells with
/// `b > i` are never defined and never read.
#[derive(Debug)]
pub struct CostTables {
    num_items: usize,
    num_buckets: usize,
    /// Column stride: `num_items + 1`.
    rows: usize,
    cost: Vec<f64>,
    backptr: Vec<usize>,
}

impl CostTables {
    /// Allocates the tables and fills the base cases: one bucket spanning
    /// items `1..=i` costs its squared deviation from the ideal mean, and
    /// zero items cost nothing for any bucket count.
    ///
    /// The table shape comes from the prefix itself, so the base column is
    /// always consistent with the mean the costs are measured against.
    pub fn new(prefix: &PrefixSums) -> Self {
        let num_items = prefix.num_items();
        let num_buckets = prefix.num_buckets();
        let rows = num_items + 1;
        let cells = rows * (num_buckets + 1);

        let mut cost = vec![f64::INFINITY; cells];
        let mut backptr = vec![UNSET; cells];

        for bucket in 0..=num_buckets {
            cost[bucket * rows] = 0.0;
        }
        for item in 1..=num_items {
            cost[rows + item] = prefix.bucket_cost(0, item);
            backptr[rows + item] = 0;
        }

        Self {
            num_items,
            num_buckets,
            rows,
            cost,
            backptr,
        }
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    #[inline]
    fn idx(&self, item: usize, bucket: usize) -> usize {
        debug_assert!(item <= self.num_items && bucket <= self.num_buckets);
        bucket * self.rows + item
    }

    /// Minimal cost of splitting items `1..=item` into `bucket` buckets.
    #[inline]
    pub fn cost(&self, item: usize, bucket: usize) -> f64 {
        self.cost[self.idx(item, bucket)]
    }

    /// Backpointer chosen for `(item, bucket)`, or [`UNSET`].
    #[inline]
    pub fn backptr(&self, item: usize, bucket: usize) -> usize {
        self.backptr[self.idx(item, bucket)]
    }

    /// Writes one cell. Used by the sequential engine.
    #[inline]
    pub fn set(&mut self, item: usize, bucket: usize, cost: f64, backptr: usize) {
        let idx = self.idx(item, bucket);
        self.cost[idx] = cost;
        self.backptr[idx] = backptr;
    }

    /// Cost of the full problem: all items in `num_buckets` buckets.
    pub fn final_cost(&self) -> f64 {
        self.cost(self.num_items, self.num_buckets)
    }

    /// Splits the table into the completed columns `< bucket` (read-only)
    /// and the column `bucket` itself (shared write handle for the lanes).
    ///
    /// The split is a true disjoint borrow: the view and the handle can be
    /// used concurrently from many threads as long as no two writers touch
    /// the same item (see [`LaneCells::write`]).
    pub fn split_for_bucket(&mut self, bucket: usize) -> (CompletedColumns<'_>, LaneCells<'_>) {
        assert!(
            bucket >= 1 && bucket <= self.num_buckets,
            "bucket {bucket} out of range"
        );
        let split = bucket * self.rows;
        let (cost_done, cost_rest) = self.cost.split_at_mut(split);
        let (_, backptr_rest) = self.backptr.split_at_mut(split);

        let view = CompletedColumns {
            cost: cost_done,
            rows: self.rows,
        };
        let cells = LaneCells {
            cost: cost_rest[..self.rows].as_mut_ptr(),
            backptr: backptr_rest[..self.rows].as_mut_ptr(),
            rows: self.rows,
            _marker: PhantomData,
        };
        (view, cells)
    }
}

/// Read-only view of every fully-completed bucket column.
#[derive(Debug, Clone, Copy)]
pub struct CompletedColumns<'a> {
    cost: &'a [f64],
    rows: usize,
}

impl CompletedColumns<'_> {
    /// Cost cell from a completed column.
    #[inline]
    pub fn cost(&self, item: usize, bucket: usize) -> f64 {
        self.cost[bucket * self.rows + item]
    }
}

/// Shared write handle to one bucket column.
///
/// Lanes hold this by reference while filling a column; each lane writes
/// only the items it was assigned, so no two writers ever alias.
#[derive(Debug)]
pub struct LaneCells<'a> {
    cost: *mut f64,
    backptr: *mut usize,
    rows: usize,
    _marker: PhantomData<&'a mut [f64]>,
}

// SAFETY: the pointers come from an exclusive borrow of the column, and the
// write contract below forbids two threads from touching the same item.
unsafe impl Send for LaneCells<'_> {}
unsafe impl Sync for LaneCells<'_> {}

impl LaneCells<'_> {
    /// Writes the cost and backpointer for one item in this column.
    ///
    /// # Safety
    /// While the handle is shared across threads, no two calls may pass the
    /// same `item`. The pair assignment in the parallel kernel guarantees
    /// this: lane `p` writes only items `p` and `n − p`.
    #[inline]
    pub unsafe fn write(&self, item: usize, cost: f64, backptr: usize) {
        debug_assert!(item < self.rows);
        *self.cost.add(item) = cost;
        *self.backptr.add(item) = backptr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(weights: &[f64], k: usize) -> PrefixSums {
        PrefixSums::build(weights, k).unwrap()
    }

    #[test]
    fn test_base_cases() {
        let p = prefix(&[1.0, 2.0, 3.0, 4.0], 2);
        let t = CostTables::new(&p);

        // One bucket spanning 1..=i, mean 5.
        assert_eq!(t.cost(1, 1), 16.0); // (1 - 5)^2
        assert_eq!(t.cost(2, 1), 4.0); // (3 - 5)^2
        assert_eq!(t.cost(4, 1), 25.0); // (10 - 5)^2

        // Zero items, any bucket count.
        assert_eq!(t.cost(0, 0), 0.0);
        assert_eq!(t.cost(0, 2), 0.0);

        // Unfilled recurrence cells start at the sentinel.
        assert_eq!(t.backptr(2, 2), UNSET);
        assert!(t.cost(2, 2).is_infinite());
    }

    #[test]
    fn test_shape_comes_from_prefix() {
        let p = prefix(&[1.0, 2.0, 3.0], 1);
        let t = CostTables::new(&p);
        assert_eq!(t.num_items(), 3);
        assert_eq!(t.num_buckets(), 1);
        // k == 1: the base column is the whole answer, mean == total.
        assert_eq!(t.final_cost(), 0.0);
    }

    #[test]
    fn test_set_and_read_back() {
        let p = prefix(&[1.0, 1.0, 1.0], 2);
        let mut t = CostTables::new(&p);
        t.set(3, 2, 0.5, 2);
        assert_eq!(t.cost(3, 2), 0.5);
        assert_eq!(t.backptr(3, 2), 2);
        assert_eq!(t.final_cost(), 0.5);
    }

    #[test]
    fn test_split_reads_previous_column() {
        let p = prefix(&[1.0, 2.0, 3.0, 4.0], 2);
        let mut t = CostTables::new(&p);

        let (done, cells) = t.split_for_bucket(2);
        assert_eq!(done.cost(3, 1), 1.0); // (6 - 5)^2
        // SAFETY: single-threaded test, distinct items.
        unsafe {
            cells.write(4, 2.0, 3);
            cells.write(2, 8.0, 1);
        }
        drop(cells);

        assert_eq!(t.cost(4, 2), 2.0);
        assert_eq!(t.backptr(4, 2), 3);
        assert_eq!(t.cost(2, 2), 8.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_split_bucket_out_of_range() {
        let p = prefix(&[1.0, 2.0], 2);
        let mut t = CostTables::new(&p);
        let _ = t.split_for_bucket(3);
    }
}
