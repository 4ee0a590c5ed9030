// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Optimizer configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "auto"
//! num_threads = 4
//! ```

use crate::{OptimizerError, Optimizer, Strategy};
use std::path::Path;

/// Configuration for the [`Optimizer`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OptimizerConfig {
    /// Strategy: `"sequential"`, `"parallel"`, or `"auto"`.
    pub strategy: Strategy,
    /// Lane pool size for the parallel engine (defaults to all cores).
    pub num_threads: Option<usize>,
}

impl OptimizerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, OptimizerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            OptimizerError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, OptimizerError> {
        toml::from_str(toml_str)
            .map_err(|e| OptimizerError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, OptimizerError> {
        toml::to_string_pretty(self)
            .map_err(|e| OptimizerError::Config(format!("TOML serialise error: {e}")))
    }

    /// Resolves the lane pool size.
    pub fn resolve_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    /// Builds an [`Optimizer`] from this configuration.
    pub fn create_optimizer(&self) -> Optimizer {
        Optimizer::new(self.strategy).with_threads(self.num_threads.unwrap_or(0))
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            num_threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = OptimizerConfig::default();
        assert_eq!(c.strategy, Strategy::Auto);
        assert_eq!(c.num_threads, None);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
strategy = "parallel"
num_threads = 2
"#;
        let c = OptimizerConfig::from_toml(toml).unwrap();
        assert_eq!(c.strategy, Strategy::Parallel);
        assert_eq!(c.num_threads, Some(2));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = OptimizerConfig::default();
        let toml = c.to_toml().unwrap();
        let back = OptimizerConfig::from_toml(&toml).unwrap();
        assert_eq!(back.strategy, c.strategy);
        assert_eq!(back.num_threads, c.num_threads);
    }

    #[test]
    fn test_unknown_strategy_rejected_at_parse() {
        let err = OptimizerConfig::from_toml("strategy = \"bogus\"").unwrap_err();
        assert!(matches!(err, OptimizerError::Config(_)));
    }

    #[test]
    fn test_resolve_threads() {
        let c = OptimizerConfig {
            num_threads: Some(8),
            ..Default::default()
        };
        assert_eq!(c.resolve_threads(), 8);

        let c2 = OptimizerConfig {
            num_threads: None,
            ..Default::default()
        };
        assert!(c2.resolve_threads() >= 1);
    }

    #[test]
    fn test_create_optimizer() {
        let c = OptimizerConfig {
            strategy: Strategy::Sequential,
            ..Default::default()
        };
        let opt = c.create_optimizer();
        assert_eq!(opt.strategy(), Strategy::Sequential);
    }
}
