// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Prefix sums over the weight sequence and the ideal bucket mean.
//!
//! Storing weights as prefix sums lets any bucket total be computed with a
//! single subtraction: the items in `(j, i]` sum to `sums[i] - sums[j]`.
//! Both engines evaluate the recurrence exclusively through
//! [`PrefixSums::bucket_cost`], so the floating-point evaluation order is
//! identical regardless of strategy.

use crate::CoreError;

/// Zero-prefixed cumulative sums of the weight sequence, plus the ideal
/// per-bucket mean (`total / num_buckets`).
///
/// Immutable once built; owned by a single `partition()` invocation.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    sums: Vec<f64>,
    mean: f64,
    num_buckets: usize,
}

impl PrefixSums {
    /// Validates the input and builds the prefix-sum array.
    ///
    /// Requirements, checked before any allocation:
    /// - `num_buckets ≥ 1`
    /// - at least as many items as buckets
    /// - every weight finite and non-negative
    pub fn build(weights: &[f64], num_buckets: usize) -> Result<Self, CoreError> {
        let n = weights.len();

        if num_buckets < 1 {
            return Err(CoreError::InvalidInput {
                detail: "must request at least one bucket".to_string(),
            });
        }
        if n < num_buckets {
            return Err(CoreError::InvalidInput {
                detail: format!("cannot split {n} items into {num_buckets} non-empty buckets"),
            });
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(CoreError::InvalidInput {
                    detail: format!("weight {i} is not finite ({w})"),
                });
            }
            if w < 0.0 {
                return Err(CoreError::InvalidInput {
                    detail: format!("weight {i} is negative ({w})"),
                });
            }
        }

        let mut sums = Vec::with_capacity(n + 1);
        sums.push(0.0);
        let mut acc = 0.0;
        for &w in weights {
            acc += w;
            sums.push(acc);
        }

        Ok(Self {
            sums,
            mean: acc / num_buckets as f64,
            num_buckets,
        })
    }

    /// Number of items in the original weight sequence.
    pub fn num_items(&self) -> usize {
        self.sums.len() - 1
    }

    /// The bucket count the mean was computed for. Everything downstream
    /// (table shape, recurrence range) derives from this value, so tables
    /// can never be built against a mean for a different `k`.
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    /// The ideal per-bucket total: `total / num_buckets`.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Total weight of all items.
    pub fn total(&self) -> f64 {
        *self.sums.last().expect("sums always has at least one entry")
    }

    /// Cumulative sum of the first `i` items (`sum_to(0) == 0`).
    pub fn sum_to(&self, i: usize) -> f64 {
        self.sums[i]
    }

    /// Squared deviation from the ideal mean for a bucket holding the
    /// items `(j, i]`.
    #[inline]
    pub fn bucket_cost(&self, j: usize, i: usize) -> f64 {
        let deviation = self.sums[i] - self.sums[j] - self.mean;
        deviation * deviation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic() {
        let p = PrefixSums::build(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(p.num_items(), 4);
        assert_eq!(p.num_buckets(), 2);
        assert_eq!(p.total(), 10.0);
        assert_eq!(p.mean(), 5.0);
        assert_eq!(p.sum_to(0), 0.0);
        assert_eq!(p.sum_to(3), 6.0);
    }

    #[test]
    fn test_bucket_cost() {
        let p = PrefixSums::build(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        // Bucket (1, 4]: sum 9, mean 5 → (9 - 5)^2 = 16.
        assert_eq!(p.bucket_cost(1, 4), 16.0);
        // Bucket (0, 3]: sum 6 → (6 - 5)^2 = 1.
        assert_eq!(p.bucket_cost(0, 3), 1.0);
    }

    #[test]
    fn test_more_buckets_than_items() {
        let err = PrefixSums::build(&[1.0, 2.0], 3).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_zero_buckets() {
        let err = PrefixSums::build(&[1.0], 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_weight() {
        let err = PrefixSums::build(&[1.0, -2.0], 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_nan_weight() {
        let err = PrefixSums::build(&[1.0, f64::NAN], 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn test_all_zero_weights_are_valid() {
        // mean == 0 with all-zero weights is a degenerate but legal input.
        let p = PrefixSums::build(&[0.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(p.mean(), 0.0);
        assert_eq!(p.bucket_cost(0, 1), 0.0);
    }
}
