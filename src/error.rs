// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! The computation is a pure function of its input pool, so the only failure
//! it knows is a broken structural invariant. These are programming defects
//! in the caller; they are returned rather than aborting the process so that
//! a test harness can assert on them.

use std::io;

use strum_macros::{Display, EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// The place an invariant was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Check {
    #[strum(serialize = "ascent-test")]
    Ascent,
    #[strum(serialize = "descent-test")]
    Descent,
    #[strum(serialize = "staircase")]
    Construction,
}

/// A broken structural invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum InvariantViolation {
    /// The last column of a staircase is not at the baseline.
    #[error("{check}: last element is {found}, not zero")]
    TrailingNotZero { check: Check, found: u32 },

    /// The ascent-test reference index is neither `g` nor `g-1`.
    #[error("ascent-test: unexpected reference index {i3} for generation {generation}")]
    UnexpectedReferenceIndex { i3: usize, generation: usize },

    /// The ascent-test was asked to use `(g-1, 1)` but column `g-1` is not empty.
    #[error("ascent-test: reference column {i3} has height {height}, expected 0")]
    ReferenceNotBaseline { i3: usize, height: u32 },

    /// A pool contains a staircase of the wrong length.
    #[error("staircase has generation {found}, expected {expected}")]
    WrongGeneration { expected: usize, found: usize },

    /// A staircase has no columns at all.
    #[error("staircase is empty")]
    EmptyStaircase,

    /// Adjacent columns differ by something other than 0 or 1.
    #[error("staircase steps from {from} to {to} at column {column}")]
    InvalidStep { column: usize, from: u32, to: u32 },

    /// A signature contains a character other than `0` or `1`.
    #[error("invalid signature character {found:?} at position {position}")]
    InvalidSignature { position: usize, found: char },

    /// Generation 0 is seeded, never advanced to.
    #[error("generation 0 has no previous generation to advance from")]
    NoPreviousGeneration,

    /// The registry was given a generation that does not follow its latest one.
    #[error("generation {found} pushed after generation {latest}")]
    OutOfOrderGeneration { latest: usize, found: usize },
}

/// Anything that can stop a run: a broken invariant, or the emitter failing to write.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("cannot emit record: {0}")]
    Emit(#[from] io::Error),
}
