// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the optimizer facade.

/// Errors that can occur while running the optimizer.
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    /// Input validation or reconstruction failure from the core.
    #[error(transparent)]
    Core(#[from] partition_core::CoreError),

    /// The parallel executor could not be brought up and no fallback was
    /// possible. (Strategy fallback normally swallows this.)
    #[error("executor error: {0}")]
    Executor(#[from] lane_exec::ExecError),

    /// A strategy produced a partition that violates its postconditions.
    #[error("strategy '{strategy}' produced an invalid partition: {detail}")]
    InvalidResult { strategy: String, detail: String },

    /// Configuration error (unknown strategy name, unreadable file, ...).
    #[error("configuration error: {0}")]
    Config(String),
}
