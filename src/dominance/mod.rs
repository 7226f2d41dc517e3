// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Supersession tests.
//!
//! A candidate staircase is superseded when a removable/addable pair of
//! boundary cells dominates it. Both tests scan columns right to left,
//! refining a running extreme slope and comparing it against the opposite
//! kind of cell as soon as one has been seen.
//!
//! - [`ascent_superseded`] (PNP): addable cell, removable cell, reference point
//!   `(i3, j3)` which is either the added point `(g, 0)` or `(g-1, 1)`.
//! - [`descent_superseded`] (NPN): removable cell, addable cell, and the
//!   removed point `(g, 0)` in the newly appended column.
//!
//! Both tests take raw heights so that a profile whose last column is not at
//! the baseline is reported as an [`InvariantViolation`] instead of being
//! unrepresentable.

pub mod ascent;
pub mod descent;

pub use ascent::ascent_superseded;
pub use descent::descent_superseded;

use crate::error::{Check, InvariantViolation};

/// The generation of `r`, after checking that it ends at the baseline.
fn checked_generation(r: &[u32], check: Check) -> Result<usize, InvariantViolation> {
    let (&last, _) = r.split_last().ok_or(InvariantViolation::EmptyStaircase)?;
    if last != 0 {
        return Err(InvariantViolation::TrailingNotZero { check, found: last });
    }
    Ok(r.len() - 1)
}
