// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `linpart sweep` command: try a range of bucket counts.
//!
//! Runs the optimizer once per bucket count in `[min, max]` and prints a
//! comparison table, or only the lowest-variance row with `--optimal-only`.

use linpart::{Optimizer, Partition};

pub fn execute(
    optimizer: &Optimizer,
    weights: &[f64],
    min_buckets: usize,
    max_buckets: usize,
    optimal_only: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        min_buckets >= 1 && min_buckets <= max_buckets,
        "bucket range {min_buckets}..={max_buckets} is empty"
    );

    let mut results: Vec<Partition> = Vec::new();
    for k in min_buckets..=max_buckets.min(weights.len()) {
        results.push(optimizer.partition(weights, k)?);
    }
    anyhow::ensure!(!results.is_empty(), "no bucket count fits {} items", weights.len());

    if optimal_only {
        let best = results
            .iter()
            .min_by(|a, b| a.variance().total_cmp(&b.variance()))
            .expect("results is non-empty");
        println!("{}", best.summary());
        return Ok(());
    }

    println!(
        "{:<8} {:>12} {:>12}  dividers",
        "Buckets", "Cost", "Variance",
    );
    println!("{}", "-".repeat(48));
    for p in &results {
        println!(
            "{:<8} {:>12.3} {:>12.3}  {:?}",
            p.num_buckets,
            p.cost,
            p.variance(),
            p.dividers,
        );
    }

    Ok(())
}
