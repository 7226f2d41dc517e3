// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of extremal staircases.
//!
//! A staircase of generation `g` is a column-height profile `r[0 ..= g]`
//! that never rises, drops by at most one per column, and ends at zero.
//! Generation by generation, this crate derives the set of staircases that
//! are extremal under a geometric dominance relation, and reports which
//! members of each generation stay extremal for good ("+") and which are
//! superseded in the next generation ("-").
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`geometry`]: exact slope comparison ([`geometry::Ratio`]) and the
//!   [`Staircase`] profile with its removable and addable boundary cells
//! - [`dominance`]: the ascent-test (PNP) and descent-test (NPN)
//! - [`engine`]: [`engine::advance`], which consumes generation `g-1` and
//!   produces generation `g`, and the [`engine::Registry`] of pools
//! - [`state`]: per-generation and running counters
//! - [`output`]: the [`output::Emitter`] seam receiving surviving staircases
//! - [`context`]: the [`SearchContext`] driver owning a whole run
//!
//! Data flows strictly forward, `registry[g-1] → advance → registry[g]`. All
//! arithmetic is exact integer arithmetic.
//!
//! # Example
//!
//! ```
//! use staircase_search::config::SearchConfig;
//! use staircase_search::output::RecordCollector;
//! use staircase_search::SearchContext;
//!
//! let mut ctx = SearchContext::new(SearchConfig { generations: 3, ..SearchConfig::default() });
//! let mut records = RecordCollector::new();
//! ctx.run(&mut records, |_| {}).unwrap();
//!
//! assert_eq!(ctx.final_pool_size(), 8);
//! assert_eq!(records.records, ["+", "1+", "0+", "11+", "10+", "01+", "00+"]);
//! ```

pub mod config;
pub mod context;
pub mod dominance;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod output;
pub mod state;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{advance, Advance, Classification, GenerationReport, Registry, Retention};
pub use error::{InvariantViolation, SearchError};
pub use geometry::{Ratio, Staircase};
