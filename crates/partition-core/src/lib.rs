// Copyright (c) 2025 the linpart authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-core
//!
//! Dynamic-programming core for the minimum-variance linear partition
//! problem: split an ordered sequence of non-negative weights into `k`
//! contiguous, non-empty buckets so that the total squared deviation of
//! each bucket's weight from the ideal mean (`total / k`) is minimal.
//!
//! # Key Components
//!
//! - [`PrefixSums`] — input validation, zero-prefixed cumulative sums, and
//!   the ideal bucket mean. All cost terms are evaluated through it so the
//!   floating-point order is the same for every engine.
//! - [`CostTables`] — the per-call cost and backpointer tables, allocated
//!   flat and column-major so one bucket column can be handed to parallel
//!   lanes as a disjoint write region.
//! - [`CostTableEngine`] — the sequential baseline that fills the tables.
//! - [`reconstruct`] — the backpointer walk producing the divider list.
//!
//! # Dataflow
//!
//! ```text
//! weights ──► PrefixSums ──► CostTableEngine ──► CostTables ──► reconstruct
//! ```
//!
//! This crate is purely algorithmic — no I/O, no threads, no global state —
//! which keeps it trivially unit-testable. The parallel variant of the
//! recurrence lives in the `linpart` crate, on top of this data model.

mod error;
mod prefix;
mod reconstruct;
mod sequential;
mod table;

pub use error::CoreError;
pub use prefix::PrefixSums;
pub use reconstruct::reconstruct;
pub use sequential::CostTableEngine;
pub use table::{CompletedColumns, CostTables, LaneCells, UNSET};
