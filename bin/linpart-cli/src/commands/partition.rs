// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `linpart partition` command: split one weight sequence.

use linpart::Optimizer;

pub fn execute(
    optimizer: &Optimizer,
    weights: &[f64],
    buckets: usize,
    json: bool,
) -> anyhow::Result<()> {
    let result = optimizer.partition(weights, buckets)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.summary());
    println!();
    println!("{:<8} {:>6} {:>6} {:>12}", "Bucket", "First", "Last", "Sum");
    println!("{}", "-".repeat(36));

    let bounds = result.bucket_bounds();
    let sums = result.bucket_sums(weights);
    for (b, sum) in sums.iter().enumerate() {
        println!(
            "{:<8} {:>6} {:>6} {:>12.3}",
            b,
            bounds[b],
            bounds[b + 1] - 1,
            sum,
        );
    }

    Ok(())
}
