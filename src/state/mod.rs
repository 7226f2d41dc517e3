// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run state that accumulates across generations.
//!
//! The pools themselves live in the [`Registry`](crate::engine::Registry);
//! this module holds the counters.

pub mod statistics;

pub use statistics::{ClassificationCounts, Counters, Statistics, Tally};
