// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`LaneExecutor`] trait and the in-order fallback executor.

/// Launches independent units of parallel work ("lanes") and joins them.
///
/// The two capabilities a data-parallel kernel needs from its host:
/// launching `lanes` units of work, and blocking until all of them finish.
/// [`LaneExecutor::run_lanes`] provides both — its return is a full
/// barrier, so every write made by a lane body is visible to the caller
/// (and to the lanes of any subsequent `run_lanes` call) afterwards.
///
/// Implementations must not retain the body beyond the call.
pub trait LaneExecutor: Send + Sync {
    /// Human-readable name of this executor.
    fn name(&self) -> &str;

    /// Runs `body` once per lane index in `0..lanes` and returns only once
    /// every lane has finished.
    fn run_lanes(&self, lanes: usize, body: &(dyn Fn(usize) + Sync));
}

/// Runs every lane in order on the calling thread.
///
/// Useful as a deterministic substrate in tests and as a zero-dependency
/// stand-in when no thread pool is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialLanes;

impl SerialLanes {
    pub fn new() -> Self {
        Self
    }
}

impl LaneExecutor for SerialLanes {
    fn name(&self) -> &str {
        "serial"
    }

    fn run_lanes(&self, lanes: usize, body: &(dyn Fn(usize) + Sync)) {
        for lane in 0..lanes {
            body(lane);
        }
    }
}
