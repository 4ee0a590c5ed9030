// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: partition one weight series with both engines and compare.
//!
//! ```bash
//! cargo run -p linpart --example compare_strategies
//! ```

use linpart::{partition, Strategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // A synthetic series with a heavy head and a long light tail.
    let mut weights: Vec<f64> = vec![90.0, 70.0, 55.0];
    weights.extend((0..29).map(|i| 3.0 + (i % 7) as f64));

    println!(
        "{:<12} {:>8} {:>12} {:>12}  dividers",
        "Strategy", "Buckets", "Cost", "Variance",
    );
    println!("{}", "-".repeat(64));

    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        for k in [2, 4, 8] {
            let p = partition(&weights, k, strategy)?;
            println!(
                "{:<12} {:>8} {:>12.3} {:>12.3}  {:?}",
                p.strategy_name,
                k,
                p.cost,
                p.variance(),
                p.dividers,
            );
        }
    }

    Ok(())
}
