// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition core.

/// Errors that can occur in the partition core.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The input was rejected before any table allocation.
    #[error("invalid input: {detail}")]
    InvalidInput { detail: String },

    /// A backpointer cell visited during reconstruction was never written.
    ///
    /// This indicates an incompletely populated divider table — a logic
    /// defect upstream, not a transient condition. It is never retried.
    #[error("corrupt divider table: cell (item {item}, bucket {bucket}) was never written")]
    InvalidPartition { item: usize, bucket: usize },
}
