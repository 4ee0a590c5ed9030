// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for lane executors.

/// Errors that can occur when bringing up a lane executor.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The parallel runtime could not be brought up (no threads obtainable).
    ///
    /// This is a recoverable condition: callers are expected to fall back
    /// to a sequential code path rather than fail.
    #[error("parallel runtime unavailable: {0}")]
    Unavailable(String),
}
