// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The partition result: divider locations plus the achieved cost.
//!
//! A divider at `d` separates item `d` (1-based) from item `d + 1`; in
//! 0-based slice terms, bucket `b` spans `weights[bounds[b] .. bounds[b+1]]`
//! where `bounds = [0, dividers..., n]`. The result is the contract between
//! the optimizer and its callers.

use crate::OptimizerError;

/// An optimal contiguous partition of `num_items` items into
/// `num_buckets` buckets.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Partition {
    /// Strategy name that produced this partition.
    pub strategy_name: String,
    /// Number of items that were partitioned.
    pub num_items: usize,
    /// Number of buckets requested.
    pub num_buckets: usize,
    /// `num_buckets − 1` strictly increasing divider locations in
    /// `[1, num_items − 1]`.
    pub dividers: Vec<usize>,
    /// Total squared deviation of every bucket's weight from the ideal
    /// mean (`total / num_buckets`).
    pub cost: f64,
}

impl Partition {
    /// Cost normalized by the number of buckets, i.e. the variance over
    /// bucket totals around the ideal mean.
    pub fn variance(&self) -> f64 {
        self.cost / self.num_buckets as f64
    }

    /// Bucket boundaries as 0-based item offsets:
    /// `[0, dividers..., num_items]`.
    pub fn bucket_bounds(&self) -> Vec<usize> {
        let mut bounds = Vec::with_capacity(self.num_buckets + 1);
        bounds.push(0);
        bounds.extend_from_slice(&self.dividers);
        bounds.push(self.num_items);
        bounds
    }

    /// 0-based index of the bucket holding the item at 0-based `item`.
    ///
    /// # Panics
    /// Panics if `item >= num_items`.
    pub fn bucket_of(&self, item: usize) -> usize {
        assert!(item < self.num_items, "item {item} out of range");
        self.dividers.partition_point(|&d| d <= item)
    }

    /// For each item, the 0-based index of the bucket it landed in.
    pub fn bucket_assignments(&self) -> Vec<usize> {
        let bounds = self.bucket_bounds();
        let mut assignment = Vec::with_capacity(self.num_items);
        for bucket in 0..self.num_buckets {
            for _ in bounds[bucket]..bounds[bucket + 1] {
                assignment.push(bucket);
            }
        }
        assignment
    }

    /// Total weight of each bucket under this partition.
    ///
    /// `weights` must be the same sequence the partition was computed from.
    pub fn bucket_sums(&self, weights: &[f64]) -> Vec<f64> {
        let bounds = self.bucket_bounds();
        (0..self.num_buckets)
            .map(|b| weights[bounds[b]..bounds[b + 1]].iter().sum())
            .collect()
    }

    /// Validates the partition's postconditions.
    ///
    /// Checks:
    /// - Exactly `num_buckets − 1` dividers.
    /// - Dividers strictly increasing, each in `[1, num_items − 1]`.
    /// - Cost finite and non-negative.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        let fail = |detail: String| {
            Err(OptimizerError::InvalidResult {
                strategy: self.strategy_name.clone(),
                detail,
            })
        };

        if self.dividers.len() + 1 != self.num_buckets {
            return fail(format!(
                "expected {} dividers, got {}",
                self.num_buckets - 1,
                self.dividers.len(),
            ));
        }

        let mut previous = 0;
        for &d in &self.dividers {
            if d <= previous {
                return fail(format!("divider {d} does not increase past {previous}"));
            }
            if d >= self.num_items {
                return fail(format!(
                    "divider {d} out of range for {} items",
                    self.num_items,
                ));
            }
            previous = d;
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return fail(format!("cost {} is not a valid total", self.cost));
        }

        Ok(())
    }

    /// Returns a human-readable summary of the partition.
    pub fn summary(&self) -> String {
        format!(
            "Partition '{}': {} items into {} buckets, cost {:.4} (variance {:.4}), dividers: {:?}",
            self.strategy_name,
            self.num_items,
            self.num_buckets,
            self.cost,
            self.variance(),
            self.dividers,
        )
    }
}
