// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shared helpers for CLI subcommands.

pub mod partition;
pub mod sweep;

use linpart::{Optimizer, OptimizerConfig, Strategy};
use std::path::Path;
use std::str::FromStr;

/// Initialises tracing based on `-v` repetition.
pub fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Reads the weight sequence from `--weights` or `--weights-file`.
pub fn resolve_weights(
    inline: Option<String>,
    file: Option<std::path::PathBuf>,
) -> anyhow::Result<Vec<f64>> {
    let raw = match (inline, file) {
        (Some(inline), None) => inline,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("cannot read '{}': {e}", path.display()))?,
        (None, None) => anyhow::bail!("provide --weights or --weights-file"),
        (Some(_), Some(_)) => unreachable!("clap forbids both"),
    };

    let weights: Vec<f64> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| anyhow::anyhow!("invalid weight '{s}': {e}"))
        })
        .collect::<Result<_, _>>()?;

    if weights.is_empty() {
        anyhow::bail!("no weights given");
    }
    Ok(weights)
}

/// Builds the optimizer from a config file or CLI flags (flags win only
/// when no config file is given).
pub fn build_optimizer(
    config: Option<&Path>,
    strategy: &str,
    threads: usize,
) -> anyhow::Result<Optimizer> {
    if let Some(path) = config {
        let config = OptimizerConfig::from_file(path)?;
        tracing::info!("config loaded from '{}'", path.display());
        return Ok(config.create_optimizer());
    }
    Ok(Optimizer::new(Strategy::from_str(strategy)?).with_threads(threads))
}
