// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # linpart
//!
//! Command-line interface for the linpart optimizer.
//!
//! ## Usage
//! ```bash
//! # Partition an inline weight list into 3 buckets
//! linpart partition --weights 4,1,1,1,4,1,2,6 --buckets 3
//!
//! # Partition weights read from a file (one value per line)
//! linpart partition --weights-file sizes.txt --buckets 8 --strategy parallel
//!
//! # Sweep bucket counts and report the cost of each
//! linpart sweep --weights 4,1,1,1,4,1,2,6 --min-buckets 2 --max-buckets 6
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linpart",
    about = "Minimum-variance linear partitioning of weight sequences",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (overrides strategy/thread flags).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a weight sequence into a fixed number of buckets.
    Partition {
        /// Comma-separated weights (e.g., "4,1,1,1,4").
        #[arg(short, long, conflicts_with = "weights_file")]
        weights: Option<String>,

        /// File of weights, one value per line.
        #[arg(long)]
        weights_file: Option<std::path::PathBuf>,

        /// Number of buckets to split the weights into.
        #[arg(short, long)]
        buckets: usize,

        /// Strategy: sequential, parallel, auto.
        #[arg(short, long, default_value = "auto")]
        strategy: String,

        /// Lane pool size for the parallel engine (0 = all cores).
        #[arg(short, long, default_value_t = 0)]
        threads: usize,

        /// Emit the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Partition one weight sequence across a range of bucket counts.
    Sweep {
        /// Comma-separated weights.
        #[arg(short, long, conflicts_with = "weights_file")]
        weights: Option<String>,

        /// File of weights, one value per line.
        #[arg(long)]
        weights_file: Option<std::path::PathBuf>,

        /// Lowest bucket count to try.
        #[arg(long, default_value_t = 2)]
        min_buckets: usize,

        /// Highest bucket count to try.
        #[arg(long)]
        max_buckets: usize,

        /// Strategy: sequential, parallel, auto.
        #[arg(short, long, default_value = "auto")]
        strategy: String,

        /// Print only the bucket count with the lowest variance.
        #[arg(long)]
        optimal_only: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Partition {
            weights,
            weights_file,
            buckets,
            strategy,
            threads,
            json,
        } => {
            let weights = commands::resolve_weights(weights, weights_file)?;
            let optimizer =
                commands::build_optimizer(cli.config.as_deref(), &strategy, threads)?;
            commands::partition::execute(&optimizer, &weights, buckets, json)
        }
        Commands::Sweep {
            weights,
            weights_file,
            min_buckets,
            max_buckets,
            strategy,
            optimal_only,
        } => {
            let weights = commands::resolve_weights(weights, weights_file)?;
            let optimizer = commands::build_optimizer(cli.config.as_deref(), &strategy, 0)?;
            commands::sweep::execute(&optimizer, &weights, min_buckets, max_buckets, optimal_only)
        }
    }
}
